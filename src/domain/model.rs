use serde::{Deserialize, Serialize};
use std::fmt;

pub const APP_NAME: &str = "Dub";
pub const DICEBEAR_AVATAR_URL: &str =
    "https://api.dicebear.com/7.x/initials/svg?backgroundType=gradientLinear&fontFamily=Helvetica&fontSize=40&seed=";
pub const GOOGLE_FAVICON_URL: &str = "https://www.google.com/s2/favicons?sz=64&domain_url=";

const SECOND_LEVEL_SUFFIXES: &[&str] = &[
    "co.uk", "org.uk", "ac.uk", "gov.uk", "me.uk", "com.au", "net.au", "org.au", "co.nz",
    "co.jp", "ne.jp", "co.kr", "co.in", "co.za", "com.br", "com.cn", "com.hk", "com.tw",
    "com.sg", "com.mx", "com.tr",
];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceId(pub String);

impl WorkspaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WorkspaceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: String,
    /// DNS 名稱，例如 `go.acme.com`
    pub slug: String,
}

impl Domain {
    pub fn new(id: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
        }
    }

    /// 註冊網域（apex）。一般取最後兩段 label；遇到 `co.uk` 這類
    /// 二級公共後綴時取三段。完整的 public suffix list 不在這裡處理。
    pub fn apex(&self) -> &str {
        let slug = self.slug.trim_end_matches('.');
        let dots: Vec<usize> = slug.rmatch_indices('.').map(|(i, _)| i).collect();

        let labels = match dots.get(1) {
            Some(&second) if SECOND_LEVEL_SUFFIXES.contains(&&slug[second + 1..]) => 3,
            _ => 2,
        };
        match dots.get(labels - 1) {
            Some(&cut) => &slug[cut + 1..],
            None => slug,
        }
    }

    pub fn logo_url(&self) -> String {
        format!("{}{}", GOOGLE_FAVICON_URL, self.apex())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl Workspace {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: WorkspaceId::new(id),
            name: name.into(),
            logo: None,
        }
    }

    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    /// 沒有 logo 時用名稱產生的 placeholder 頭像
    pub fn avatar(&self) -> String {
        match self.logo.as_deref() {
            Some(logo) if !logo.is_empty() => logo.to_string(),
            _ => format!("{}{}", DICEBEAR_AVATAR_URL, self.name),
        }
    }
}

/// Workspace selector 的一個選項
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectItem {
    pub id: WorkspaceId,
    pub value: String,
    pub image: String,
    pub disabled: bool,
    pub label: String,
}

impl SelectItem {
    pub const CURRENT_LABEL: &'static str = "Current";

    pub fn from_workspace(workspace: &Workspace, current: &WorkspaceId) -> Self {
        let is_current = workspace.id == *current;
        Self {
            id: workspace.id.clone(),
            value: workspace.name.clone(),
            image: workspace.avatar(),
            disabled: is_current,
            label: if is_current {
                Self::CURRENT_LABEL.to_string()
            } else {
                String::new()
            },
        }
    }
}

/// 使用者所屬的 workspace 清單與目前所在的 workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceContext {
    pub workspaces: Vec<Workspace>,
    pub current: WorkspaceId,
}

impl WorkspaceContext {
    pub fn new(workspaces: Vec<Workspace>, current: WorkspaceId) -> Self {
        Self {
            workspaces,
            current,
        }
    }

    pub fn find(&self, id: &WorkspaceId) -> Option<&Workspace> {
        self.workspaces.iter().find(|ws| ws.id == *id)
    }

    pub fn items(&self) -> Vec<SelectItem> {
        self.workspaces
            .iter()
            .map(|ws| SelectItem::from_workspace(ws, &self.current))
            .collect()
    }
}

/// 快取 key。只有字串 key 會被網域相關的 invalidation 命中。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Path(String),
    Composite(Vec<String>),
}

impl CacheKey {
    pub fn path(path: impl Into<String>) -> Self {
        CacheKey::Path(path.into())
    }

    pub fn as_path(&self) -> Option<&str> {
        match self {
            CacheKey::Path(path) => Some(path),
            CacheKey::Composite(_) => None,
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::Path(path) => f.write_str(path),
            CacheKey::Composite(parts) => write!(f, "[{}]", parts.join(", ")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Pending,
    Success,
    Error,
}
