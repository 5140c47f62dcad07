pub mod directory;

pub use directory::DirectoryConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_domain_slug, validate_non_empty_string, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "domain-transfer")]
#[command(about = "Transfer a domain and its links to another workspace")]
pub struct CliConfig {
    #[arg(long, short, default_value = "workspaces.toml", help = "Workspace directory file")]
    pub config: String,

    #[arg(long, help = "Domain to transfer, e.g. acme.com")]
    pub domain: String,

    #[arg(long, help = "Domain record id (defaults to the domain name)")]
    pub domain_id: Option<String>,

    #[arg(long, help = "Destination workspace id; omit to only show the dialog")]
    pub to: Option<String>,

    #[arg(long, help = "Override [api].base_url from the config file")]
    pub api_base: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn domain_id(&self) -> &str {
        self.domain_id.as_deref().unwrap_or(&self.domain)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("config", &self.config)?;
        validate_domain_slug("domain", &self.domain)?;
        if let Some(id) = &self.domain_id {
            validate_non_empty_string("domain_id", id)?;
        }
        if let Some(to) = &self.to {
            validate_non_empty_string("to", to)?;
        }
        if let Some(base) = &self.api_base {
            validate_url("api_base", base)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_arguments() {
        let config = CliConfig::parse_from([
            "domain-transfer",
            "--domain",
            "acme.com",
            "--to",
            "ws_2",
        ]);
        assert_eq!(config.config, "workspaces.toml");
        assert_eq!(config.domain_id(), "acme.com");
        assert_eq!(config.to.as_deref(), Some("ws_2"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_api_base_is_rejected() {
        let config = CliConfig::parse_from([
            "domain-transfer",
            "--domain",
            "acme.com",
            "--api-base",
            "ftp://files.acme.com",
        ]);
        assert!(config.validate().is_err());
    }
}
