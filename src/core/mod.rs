pub mod form;
pub mod modal;
pub mod view;

pub use crate::domain::model::{Domain, Workspace, WorkspaceContext, WorkspaceId};
pub use crate::domain::ports::{CacheInvalidator, ConfigProvider, Notifier, TransferApi};
pub use crate::utils::error::Result;
