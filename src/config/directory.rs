use crate::domain::model::{Workspace, WorkspaceContext, WorkspaceId};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, TransferError};
use crate::utils::validation::{validate_non_empty_string, validate_unique_ids, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// Workspace 目錄檔：API 位置、目前 session 所在的 workspace，以及使用者所屬的 workspace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
    #[serde(default)]
    pub workspaces: Vec<Workspace>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub current_workspace: WorkspaceId,
}

fn env_placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"))
}

impl DirectoryConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| TransferError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DUB_API_URL})；未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_placeholder()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn context(&self) -> WorkspaceContext {
        WorkspaceContext::new(self.workspaces.clone(), self.session.current_workspace.clone())
    }
}

impl ConfigProvider for DirectoryConfig {
    fn api_base_url(&self) -> &str {
        &self.api.base_url
    }

    fn current_workspace(&self) -> &WorkspaceId {
        &self.session.current_workspace
    }
}

impl Validate for DirectoryConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.api.base_url)?;
        validate_non_empty_string(
            "session.current_workspace",
            self.session.current_workspace.as_str(),
        )?;
        validate_unique_ids("workspaces.id", self.workspaces.iter().map(|ws| ws.id.as_str()))?;

        for ws in &self.workspaces {
            validate_non_empty_string("workspaces.name", &ws.name)?;
        }

        if !self
            .workspaces
            .iter()
            .any(|ws| ws.id == self.session.current_workspace)
        {
            return Err(TransferError::InvalidConfigValueError {
                field: "session.current_workspace".to_string(),
                value: self.session.current_workspace.to_string(),
                reason: "Current workspace must be listed under [[workspaces]]".to_string(),
            });
        }

        Ok(())
    }
}
