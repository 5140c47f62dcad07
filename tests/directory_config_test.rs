use anyhow::Result;
use domain_transfer::core::{ConfigProvider, Domain, WorkspaceId};
use domain_transfer::utils::validation::Validate;
use domain_transfer::{
    DirectoryConfig, HttpTransferApi, MemoryCache, RecordingNotifier, SubmitOutcome,
    TransferDomainModal,
};
use httpmock::prelude::*;
use tempfile::TempDir;

/// 從 workspace 目錄檔建立整個轉移流程
#[tokio::test]
async fn test_transfer_driven_by_directory_file() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/domains/go.acme.com/transfer")
            .query_param("workspaceId", "ws_acme")
            .json_body(serde_json::json!({ "newWorkspaceId": "ws_beta" }));
        then.status(201);
    });

    std::env::set_var("DOMAIN_TRANSFER_IT_BASE", server.base_url());

    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("workspaces.toml");
    tokio::fs::write(
        &config_path,
        r#"
[api]
base_url = "${DOMAIN_TRANSFER_IT_BASE}"

[session]
current_workspace = "ws_acme"

[[workspaces]]
id = "ws_acme"
name = "Acme"

[[workspaces]]
id = "ws_beta"
name = "Beta Inc"
logo = "https://cdn.example/beta.png"
"#,
    )
    .await?;

    let config = DirectoryConfig::from_file(&config_path)?;
    config.validate()?;
    assert_eq!(config.current_workspace(), &WorkspaceId::from("ws_acme"));

    let modal = TransferDomainModal::new(
        Some(Domain::new("dom_42", "go.acme.com")),
        config.context(),
    );
    modal.open();
    let form = modal.form().expect("domain is present");
    form.select(&WorkspaceId::from("ws_beta"))?;

    let api = HttpTransferApi::new(config.api_base_url())?;
    let notifier = RecordingNotifier::new();
    let outcome = form.submit(&api, &MemoryCache::new(), &notifier).await;

    api_mock.assert();
    assert!(matches!(outcome, SubmitOutcome::Transferred { invalidated: 0 }));
    assert!(!modal.is_open());
    Ok(())
}

#[test]
fn test_directory_without_current_workspace_is_invalid() -> Result<()> {
    let config = DirectoryConfig::from_toml_str(
        r#"
[api]
base_url = "https://app.dub.co"

[session]
current_workspace = "ws_gone"

[[workspaces]]
id = "ws_acme"
name = "Acme"
"#,
    )?;
    assert!(config.validate().is_err());
    Ok(())
}
