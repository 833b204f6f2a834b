//! epcis-gen：由請求檔產生 EPCIS 聚合文件

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use epcis_aggregator::{logging, GenerationFile, GeneratorSettings, HierarchyPlanner, PackagingConfig};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "epcis-gen", version, about = "GS1 EPCIS 聚合文件產生器")]
struct Cli {
    /// 產生器設定檔（JSON）
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 顯示配置所需的各層級序號數量
    Plan {
        /// 包裝配置檔（JSON）
        config: PathBuf,
    },

    /// 由請求檔產生聚合文件
    Generate {
        /// 請求檔（JSON：configuration、serials、readPoint、bizLocation）
        request: PathBuf,

        /// 輸出路徑（預設依專案名稱命名）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let settings = match &cli.settings {
        Some(path) => GeneratorSettings::load(path)?,
        None => GeneratorSettings::default(),
    };

    match cli.command {
        Command::Plan { config } => plan(&config),
        Command::Generate { request, output } => generate(&settings, &request, output),
    }
}

fn plan(path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("無法讀取配置檔 {}", path.display()))?;
    let config: PackagingConfig = serde_json::from_str(&content).context("配置檔格式錯誤")?;

    let plan = HierarchyPlanner::plan(&config)?;
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

fn generate(settings: &GeneratorSettings, path: &Path, output: Option<PathBuf>) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("無法讀取請求檔 {}", path.display()))?;
    let file: GenerationFile = serde_json::from_str(&content).context("請求檔格式錯誤")?;

    let store = settings.store();
    let document = file.run(&store, settings)?;

    let output = output.unwrap_or_else(|| PathBuf::from(&document.file_name));
    std::fs::write(&output, &document.content)
        .with_context(|| format!("無法寫入 {}", output.display()))?;

    tracing::info!("已寫入 {}", output.display());
    println!("{}", serde_json::to_string_pretty(&document.result.statistics())?);
    Ok(())
}
