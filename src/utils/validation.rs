use crate::utils::error::{Result, TransferError};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(TransferError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(TransferError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(TransferError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TransferError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 網域 slug 會直接放進路徑，不允許空白、斜線或 scheme
pub fn validate_domain_slug(field_name: &str, slug: &str) -> Result<()> {
    validate_non_empty_string(field_name, slug)?;

    if slug.contains("://") || slug.contains('/') || slug.chars().any(char::is_whitespace) {
        return Err(TransferError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: slug.to_string(),
            reason: "Domain must be a bare host name such as acme.com".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_ids<'a, I>(field_name: &str, ids: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        validate_non_empty_string(field_name, id)?;
        if !seen.insert(id) {
            return Err(TransferError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: id.to_string(),
                reason: "Duplicate id".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api.base_url", "https://app.dub.co").is_ok());
        assert!(validate_url("api.base_url", "http://localhost:8888").is_ok());
        assert!(validate_url("api.base_url", "").is_err());
        assert!(validate_url("api.base_url", "invalid-url").is_err());
        assert!(validate_url("api.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_domain_slug() {
        assert!(validate_domain_slug("domain", "acme.com").is_ok());
        assert!(validate_domain_slug("domain", "go.acme.com").is_ok());
        assert!(validate_domain_slug("domain", "").is_err());
        assert!(validate_domain_slug("domain", "https://acme.com").is_err());
        assert!(validate_domain_slug("domain", "acme.com/x").is_err());
        assert!(validate_domain_slug("domain", "ac me.com").is_err());
    }

    #[test]
    fn test_validate_unique_ids() {
        assert!(validate_unique_ids("workspaces", ["ws_1", "ws_2"]).is_ok());
        assert!(validate_unique_ids("workspaces", ["ws_1", "ws_1"]).is_err());
        assert!(validate_unique_ids("workspaces", ["ws_1", " "]).is_err());
    }
}
