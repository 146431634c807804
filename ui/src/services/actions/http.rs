use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{error, info, instrument};

use super::{ActionResponse, MemberActions, RegistrationActions, StageActions};
use crate::features::member::MemberDraft;
use crate::features::registration::RiderDraft;
use crate::features::stage::StageDraft;
use crate::services::config::ApiConfig;
use crate::services::errors::{FormError, FormResult};

/// JSON-over-HTTP client for the stage, registration and member actions
#[derive(Clone, Debug)]
pub struct HttpFormActions {
    pub(crate) http_client: Client,
    pub(crate) config: ApiConfig,
}

impl PartialEq for HttpFormActions {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl HttpFormActions {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }

    #[instrument(skip(self, body), err)]
    async fn post_action<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> FormResult<ActionResponse> {
        let url = self.config.endpoint(path);

        let response = self
            .http_client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| FormError::Network {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| FormError::Network {
            message: e.to_string(),
        })?;

        match decode_action_response(status, &text) {
            Ok(parsed) => {
                info!("Action at {} answered with status {}", url, status);
                Ok(parsed)
            }
            Err(e) => {
                error!("Action at {} failed: {}", url, e);
                Err(e)
            }
        }
    }
}

/// Decode an action body. Error statuses that still carry an
/// `ActionResponse` are passed through so their message reaches the form.
pub fn decode_action_response(status: u16, body: &str) -> FormResult<ActionResponse> {
    let success = (200..300).contains(&status);

    match serde_json::from_str::<ActionResponse>(body) {
        Ok(parsed) if success || parsed.error.is_some() || parsed.success.is_some() => Ok(parsed),
        Ok(_) => Err(FormError::Status {
            status,
            body: body.to_string(),
        }),
        Err(e) if success => Err(FormError::Decode {
            message: e.to_string(),
        }),
        Err(_) => Err(FormError::Status {
            status,
            body: body.to_string(),
        }),
    }
}

#[async_trait(?Send)]
impl StageActions for HttpFormActions {
    async fn create_stage(&self, draft: &StageDraft) -> FormResult<ActionResponse> {
        self.post_action(&self.config.stages_path, draft).await
    }
}

#[async_trait(?Send)]
impl RegistrationActions for HttpFormActions {
    async fn register(&self, draft: &RiderDraft) -> FormResult<ActionResponse> {
        self.post_action(&self.config.register_path, draft).await
    }
}

#[async_trait(?Send)]
impl MemberActions for HttpFormActions {
    async fn add_member(&self, draft: &MemberDraft) -> FormResult<ActionResponse> {
        self.post_action(&self.config.members_path, draft).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success_body() {
        let response = decode_action_response(200, r#"{"success":"Stage added!"}"#);
        assert_eq!(response, Ok(ActionResponse::success("Stage added!")));
    }

    #[test]
    fn test_decode_error_status_with_message() {
        let response = decode_action_response(409, r#"{"error":"Username taken"}"#);
        assert_eq!(response, Ok(ActionResponse::error("Username taken")));
    }

    #[test]
    fn test_decode_error_status_without_message() {
        match decode_action_response(500, "<html>oops</html>") {
            Err(FormError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "<html>oops</html>");
            }
            other => panic!("unexpected result: {:?}", other),
        }

        assert!(matches!(
            decode_action_response(404, "{}"),
            Err(FormError::Status { status: 404, .. })
        ));
    }

    #[test]
    fn test_decode_garbage_on_success() {
        assert!(matches!(
            decode_action_response(200, "not json"),
            Err(FormError::Decode { .. })
        ));
    }

    #[test]
    fn test_actions_compare_by_config() {
        let a = HttpFormActions::new(ApiConfig::default());
        let b = HttpFormActions::new(ApiConfig::default());
        assert_eq!(a, b);
        assert_eq!(a.config.register_path, "/api/register");
    }
}
