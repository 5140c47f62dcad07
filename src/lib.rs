pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{cache::MemoryCache, http::HttpTransferApi, notify::RecordingNotifier};
pub use config::DirectoryConfig;
pub use core::{
    form::{SubmitOutcome, TransferForm},
    modal::{ModalController, TransferDomainModal},
};
pub use utils::error::{Result, TransferError};
