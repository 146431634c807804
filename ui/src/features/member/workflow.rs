use super::form_validation::validate_member;
use super::types::*;
use crate::services::actions::{resolve_action, ActionOutcome, MemberActions};
use crate::utils::validation::FieldErrors;
use crate::{console_debug, console_info, console_warn};

/// Validate and call the member-creation action. Stays on the current page.
pub async fn submit_member<A, P, D>(
    draft: MemberDraft,
    actions: &A,
    is_pending: P,
    dispatch: D,
) -> Option<ActionOutcome>
where
    A: MemberActions + ?Sized,
    P: Fn() -> bool,
    D: Fn(MemberAction),
{
    // Everything up to the action call runs without yielding, so this check
    // cannot race another submit of the same form
    if is_pending() {
        console_warn!("[MEMBER] Submit ignored, one is already pending");
        return None;
    }

    dispatch(MemberAction::ClearOutcome);

    let errors = validate_member(&draft);
    if let Some(e) = errors.to_error() {
        console_debug!("[MEMBER] Submission blocked: {}", e);
        dispatch(MemberAction::SetFieldErrors(errors));
        return None;
    }
    dispatch(MemberAction::SetFieldErrors(FieldErrors::new()));

    console_info!("[MEMBER] Adding member {} {}", draft.first_name, draft.last_name);
    dispatch(MemberAction::SubmitStarted);

    let outcome = resolve_action("MEMBER", actions.add_member(&draft).await);
    dispatch(MemberAction::SubmitFinished(outcome.clone()));

    outcome
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;

    use super::*;
    use crate::features::registration::RiderType;
    use crate::services::actions::ActionResponse;
    use crate::services::errors::{FormError, FormResult};

    struct FakeMemberActions {
        response: FormResult<ActionResponse>,
        calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl MemberActions for FakeMemberActions {
        async fn add_member(&self, _draft: &MemberDraft) -> FormResult<ActionResponse> {
            self.calls.set(self.calls.get() + 1);
            self.response.clone()
        }
    }

    fn complete_draft() -> MemberDraft {
        let mut draft = MemberDraft {
            first_name: "Otieno".to_string(),
            last_name: "Ouma".to_string(),
            phone_number: "0722000111".to_string(),
            id_number: "1234567".to_string(),
            ..Default::default()
        };
        draft.rider_type.toggle(RiderType::MwenyePikipiki, true);
        draft
    }

    #[tokio::test]
    async fn test_success_resets_member_form() {
        let state = RefCell::new(MemberFormState::default());
        state.borrow_mut().draft = complete_draft();
        let actions = FakeMemberActions {
            response: Ok(ActionResponse::success("Member added")),
            calls: Cell::new(0),
        };

        let draft = state.borrow().draft.clone();
        let outcome = submit_member(
            draft,
            &actions,
            || state.borrow().submission.is_pending(),
            |a| state.borrow_mut().reduce_in_place(a),
        )
        .await;

        assert_eq!(outcome, Some(ActionOutcome::Success("Member added".to_string())));
        assert_eq!(actions.calls.get(), 1);
        assert_eq!(state.borrow().draft, MemberDraft::default());
    }

    #[tokio::test]
    async fn test_transport_failure_uses_generic_message() {
        let state = RefCell::new(MemberFormState::default());
        let actions = FakeMemberActions {
            response: Err(FormError::Decode {
                message: "expected value".to_string(),
            }),
            calls: Cell::new(0),
        };

        submit_member(
            complete_draft(),
            &actions,
            || state.borrow().submission.is_pending(),
            |a| state.borrow_mut().reduce_in_place(a),
        )
        .await;

        assert_eq!(state.borrow().submission.error_message(), "Something went wrong!");
        assert!(!state.borrow().fields_disabled());
    }

    #[tokio::test]
    async fn test_invalid_member_is_not_sent() {
        let state = RefCell::new(MemberFormState::default());
        let actions = FakeMemberActions {
            response: Ok(ActionResponse::success("unused")),
            calls: Cell::new(0),
        };

        let outcome = submit_member(
            MemberDraft::default(),
            &actions,
            || state.borrow().submission.is_pending(),
            |a| state.borrow_mut().reduce_in_place(a),
        )
        .await;

        assert_eq!(outcome, None);
        assert_eq!(actions.calls.get(), 0);
        assert!(state.borrow().errors.contains(MemberField::RiderType));
    }

    #[tokio::test]
    async fn test_second_submit_while_pending_is_dropped() {
        let state = RefCell::new(MemberFormState::default());
        state.borrow_mut().draft = complete_draft();
        state.borrow_mut().reduce_in_place(MemberAction::SubmitStarted);
        let actions = FakeMemberActions {
            response: Ok(ActionResponse::success("Member added")),
            calls: Cell::new(0),
        };

        let outcome = submit_member(
            complete_draft(),
            &actions,
            || state.borrow().submission.is_pending(),
            |a| state.borrow_mut().reduce_in_place(a),
        )
        .await;

        assert_eq!(outcome, None);
        assert_eq!(actions.calls.get(), 0);
        assert!(state.borrow().fields_disabled());
        assert_eq!(state.borrow().draft, complete_draft());
    }
}
