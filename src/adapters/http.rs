use crate::domain::model::{Domain, WorkspaceId};
use crate::domain::ports::TransferApi;
use crate::utils::error::{Result, TransferError};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest<'a> {
    pub new_workspace_id: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// 呼叫 `POST /api/domains/{slug}/transfer` 的 reqwest 客戶端
#[derive(Debug, Clone)]
pub struct HttpTransferApi {
    client: Client,
    base_url: Url,
}

impl HttpTransferApi {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        Ok(Self { client, base_url })
    }

    pub fn transfer_url(&self, domain: &Domain, current_workspace: &WorkspaceId) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TransferError::ConfigError {
                message: format!("{} cannot be used as a base URL", self.base_url),
            })?
            .pop_if_empty()
            .extend(["api", "domains", domain.slug.as_str(), "transfer"]);
        url.query_pairs_mut()
            .clear()
            .append_pair("workspaceId", current_workspace.as_str());
        Ok(url)
    }
}

#[async_trait]
impl TransferApi for HttpTransferApi {
    async fn transfer(
        &self,
        domain: &Domain,
        current_workspace: &WorkspaceId,
        new_workspace: &WorkspaceId,
    ) -> Result<()> {
        let url = self.transfer_url(domain, current_workspace)?;
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(&TransferRequest {
                new_workspace_id: new_workspace.as_str(),
            })
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Transfer response status: {}", status);

        if status.is_success() {
            return Ok(());
        }

        let body = response.bytes().await?;
        match serde_json::from_slice::<ErrorBody>(&body) {
            Ok(error) => Err(TransferError::Api {
                status: status.as_u16(),
                message: error.message,
            }),
            Err(e) => {
                tracing::debug!("Unparsable error body: {}", e);
                Err(TransferError::UnparsableErrorBody {
                    status: status.as_u16(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_url_shape() {
        let api = HttpTransferApi::new("https://app.dub.co").unwrap();
        let url = api
            .transfer_url(&Domain::new("dom_1", "acme.com"), &WorkspaceId::from("ws_1"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://app.dub.co/api/domains/acme.com/transfer?workspaceId=ws_1"
        );
    }

    #[test]
    fn test_transfer_url_keeps_base_path() {
        let api = HttpTransferApi::new("http://localhost:8888/app/").unwrap();
        let url = api
            .transfer_url(&Domain::new("dom_1", "go.acme.com"), &WorkspaceId::from("ws 2"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8888/app/api/domains/go.acme.com/transfer?workspaceId=ws+2"
        );
    }

    #[test]
    fn test_request_body_is_camel_case() {
        let body = serde_json::to_value(TransferRequest {
            new_workspace_id: "ws_2",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "newWorkspaceId": "ws_2" }));
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(HttpTransferApi::new("not a url").is_err());
        assert!(HttpTransferApi::new("mailto:ops@acme.com").unwrap().transfer_url(
            &Domain::new("dom_1", "acme.com"),
            &WorkspaceId::from("ws_1")
        ).is_err());
    }
}
