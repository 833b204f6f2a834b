//! 記憶體專案儲存
//!
//! 以鎖定狀態機作為同一專案併發請求的唯一判準：狀態檢查與寫入在同一個
//! 寫鎖內完成。不同專案的文件產生在鎖外執行，可並行。

use chrono::{DateTime, Utc};
use epcis_core::{
    EpcisError, GenerationContext, HierarchyPlan, PackagingConfig, ProjectState, Result,
    SerialNumbers,
};
use epcis_engine::{AggregationGenerator, HierarchyPlanner, ValidationGate};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::collections::HashMap;
use uuid::Uuid;

use crate::naming::{file_name_for, DEFAULT_FILE_NAME};
use crate::project::{GeneratedDocument, GenerationRequest, Project};

/// 專案儲存
pub struct ProjectStore {
    projects: RwLock<HashMap<Uuid, Project>>,
    generator: AggregationGenerator,
    default_file_name: String,
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectStore {
    /// 創建空的儲存
    pub fn new() -> Self {
        Self {
            projects: RwLock::new(HashMap::new()),
            generator: AggregationGenerator::new(),
            default_file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    /// 建構器模式：設置產生器
    pub fn with_generator(mut self, generator: AggregationGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// 建構器模式：設置預設檔名
    pub fn with_default_file_name(mut self, name: impl Into<String>) -> Self {
        self.default_file_name = name.into();
        self
    }

    /// 建立新專案
    pub fn create_project(&self, name: Option<String>) -> Uuid {
        let project = Project::new(name);
        let id = project.id;
        self.write().insert(id, project);
        tracing::debug!("建立專案 {}", id);
        id
    }

    /// 取得專案快照
    pub fn get(&self, id: Uuid) -> Result<Project> {
        self.read().get(&id).cloned().ok_or_else(|| not_found(id))
    }

    /// 所有專案，依建立時間排序
    pub fn list(&self) -> Vec<Project> {
        let mut projects: Vec<Project> = self.read().values().cloned().collect();
        projects.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        projects
    }

    /// 專案數量
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// 重新命名（不受鎖定影響）
    pub fn rename(&self, id: Uuid, name: Option<String>) -> Result<()> {
        let mut projects = self.write();
        let project = projects.get_mut(&id).ok_or_else(|| not_found(id))?;
        project.name = name;
        project.touch();
        Ok(())
    }

    /// 保存配置，回傳層級規劃（各層級所需序號數）
    ///
    /// 鎖定後只接受完全相同的配置。
    pub fn save_configuration(&self, id: Uuid, config: PackagingConfig) -> Result<HierarchyPlan> {
        let mut projects = self.write();
        let project = projects.get_mut(&id).ok_or_else(|| not_found(id))?;

        ValidationGate::check_lock(project.state, project.config.as_ref(), &config)?;
        let plan = HierarchyPlanner::plan(&config)?;

        if !project.is_locked() {
            project.config = Some(config);
            project.touch();
        }

        Ok(plan)
    }

    /// 提交序號，成功後專案進入 SerialsAssigned 並鎖定配置
    ///
    /// 已鎖定的專案重送相同內容為無操作；任何差異回傳 `ConfigurationLocked`。
    pub fn submit_serials(
        &self,
        id: Uuid,
        config: PackagingConfig,
        serials: SerialNumbers,
    ) -> Result<HierarchyPlan> {
        let serials = serials.normalized();

        let mut projects = self.write();
        let project = projects.get_mut(&id).ok_or_else(|| not_found(id))?;

        ValidationGate::check_lock(project.state, project.config.as_ref(), &config)?;
        ValidationGate::check_lock(project.state, project.serials.as_ref(), &serials)?;

        let plan = self.generator.validate(&config, &serials)?;

        if !project.is_locked() {
            let next = project.state.transition_to(ProjectState::SerialsAssigned)?;
            project.config = Some(config);
            project.serials = Some(serials);
            project.state = next;
            project.touch();
            tracing::info!("專案 {} 序號已提交，配置鎖定", id);
        }

        Ok(plan)
    }

    /// 產生文件（事件時間為目前時間）
    pub fn generate(&self, id: Uuid, request: &GenerationRequest) -> Result<GeneratedDocument> {
        self.generate_at(id, request, Utc::now())
    }

    /// 以指定事件時間產生文件
    pub fn generate_at(
        &self,
        id: Uuid,
        request: &GenerationRequest,
        event_time: DateTime<Utc>,
    ) -> Result<GeneratedDocument> {
        let snapshot = self.get(id)?;
        snapshot.state.transition_to(ProjectState::Completed)?;

        let (config, serials) = match (&snapshot.config, &snapshot.serials) {
            (Some(config), Some(serials)) => (config, serials),
            _ => {
                return Err(EpcisError::GenerationFailure(format!(
                    "專案 {} 狀態為 {:?} 但缺少配置或序號",
                    id, snapshot.state
                )))
            }
        };

        if let Some(incoming) = &request.configuration {
            ValidationGate::check_lock(snapshot.state, Some(config), incoming)?;
        }

        let context = GenerationContext::new(request.read_point.clone(), request.biz_location.clone())
            .with_event_time(event_time);
        let result = self.generator.generate(config, serials, &context).map_err(|e| {
            if e.is_defect() {
                tracing::error!("專案 {} 文件產生失敗: {}", id, e);
            }
            e
        })?;

        {
            let mut projects = self.write();
            let project = projects.get_mut(&id).ok_or_else(|| not_found(id))?;
            project.state = project.state.transition_to(ProjectState::Completed)?;
            project.last_generated_at = Some(event_time);
            project.touch();
        }

        let file_name = file_name_for(snapshot.name.as_deref(), &self.default_file_name);
        tracing::info!("專案 {} 文件已產生: {}", id, file_name);

        Ok(GeneratedDocument {
            file_name,
            content: result.document.clone(),
            result,
        })
    }

    /// 刪除單一專案
    pub fn delete_project(&self, id: Uuid) -> Result<()> {
        self.write()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    /// 下載檔名
    pub fn file_name_for(&self, project: &Project) -> String {
        file_name_for(project.name.as_deref(), &self.default_file_name)
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<Uuid, Project>> {
        self.projects.read()
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Uuid, Project>> {
        self.projects.write()
    }
}

fn not_found(id: Uuid) -> EpcisError {
    EpcisError::NotFound(id.to_string())
}
