use thiserror::Error;

/// 轉移失敗時顯示給使用者的通用訊息
pub const GENERIC_TRANSFER_FAILURE: &str = "Failed to transfer domain.";

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Transfer rejected ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Transfer failed ({status}) and the error body could not be parsed")]
    UnparsableErrorBody { status: u16 },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl TransferError {
    /// 轉換成通知用的文字。只有伺服器回傳可解析的訊息時才原樣顯示。
    pub fn user_message(&self) -> String {
        match self {
            TransferError::Api { message, .. } if !message.trim().is_empty() => message.clone(),
            _ => GENERIC_TRANSFER_FAILURE.to_string(),
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            TransferError::ConfigError { .. }
                | TransferError::InvalidConfigValueError { .. }
                | TransferError::MissingConfigError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, TransferError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_surfaces_server_message() {
        let err = TransferError::Api {
            status: 409,
            message: "domain locked".to_string(),
        };
        assert_eq!(err.user_message(), "domain locked");
    }

    #[test]
    fn test_other_errors_fall_back_to_generic_message() {
        let err = TransferError::UnparsableErrorBody { status: 500 };
        assert_eq!(err.user_message(), GENERIC_TRANSFER_FAILURE);

        let blank = TransferError::Api {
            status: 400,
            message: "  ".to_string(),
        };
        assert_eq!(blank.user_message(), GENERIC_TRANSFER_FAILURE);
    }

    #[test]
    fn test_config_error_classification() {
        let err = TransferError::MissingConfigError {
            field: "api.base_url".to_string(),
        };
        assert!(err.is_config_error());
        assert!(!TransferError::UnparsableErrorBody { status: 502 }.is_config_error());
    }
}
