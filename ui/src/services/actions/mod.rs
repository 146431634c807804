//! Server-side form actions.
//!
//! The forms only see these traits; `HttpFormActions` is the browser
//! implementation and tests substitute in-memory fakes.

mod http;
mod types;

pub use http::{decode_action_response, HttpFormActions};
pub use types::{ActionOutcome, ActionResponse};

use async_trait::async_trait;

use crate::features::member::MemberDraft;
use crate::features::registration::RiderDraft;
use crate::features::stage::StageDraft;
use crate::services::errors::FormResult;
use crate::{console_error, console_info};

#[async_trait(?Send)]
pub trait StageActions {
    async fn create_stage(&self, draft: &StageDraft) -> FormResult<ActionResponse>;
}

#[async_trait(?Send)]
pub trait RegistrationActions {
    async fn register(&self, draft: &RiderDraft) -> FormResult<ActionResponse>;
}

#[async_trait(?Send)]
pub trait MemberActions {
    async fn add_member(&self, draft: &MemberDraft) -> FormResult<ActionResponse>;
}

/// Turn an action result into what the form displays. Transport failures
/// degrade to an inline error message.
pub fn resolve_action(form: &str, result: FormResult<ActionResponse>) -> Option<ActionOutcome> {
    match result {
        Ok(response) => {
            let outcome = response.into_outcome();
            match &outcome {
                Some(ActionOutcome::Success(message)) => {
                    console_info!("[{}] Action succeeded: {}", form, message)
                }
                Some(ActionOutcome::Error(message)) => {
                    console_info!("[{}] Action reported error: {}", form, message)
                }
                None => console_info!("[{}] Action returned no message", form),
            }
            outcome
        }
        Err(e) => {
            console_error!("[{}] Action failed: {}", form, e);
            Some(ActionOutcome::Error(e.user_message()))
        }
    }
}
