use super::form_validation::validate_rider;
use super::types::*;
use crate::features::location::LocationHierarchy;
use crate::services::actions::{resolve_action, ActionOutcome, RegistrationActions};
use crate::services::navigation::Navigate;
use crate::utils::validation::FieldErrors;
use crate::{console_debug, console_info, console_warn};

/// Validate, call the registration action and route to login on success
pub async fn submit_registration<A, N, P, D>(
    draft: RiderDraft,
    hierarchy: &LocationHierarchy,
    actions: &A,
    navigator: &N,
    destination: &str,
    is_pending: P,
    dispatch: D,
) -> Option<ActionOutcome>
where
    A: RegistrationActions + ?Sized,
    N: Navigate + ?Sized,
    P: Fn() -> bool,
    D: Fn(RegisterAction),
{
    // Everything up to the action call runs without yielding, so this check
    // cannot race another submit of the same form
    if is_pending() {
        console_warn!("[REGISTER] Submit ignored, one is already pending");
        return None;
    }

    dispatch(RegisterAction::ClearOutcome);

    let errors = validate_rider(&draft, hierarchy);
    if let Some(e) = errors.to_error() {
        console_debug!("[REGISTER] Submission blocked: {}", e);
        dispatch(RegisterAction::SetFieldErrors(errors));
        return None;
    }
    dispatch(RegisterAction::SetFieldErrors(FieldErrors::new()));

    console_info!("[REGISTER] Registering rider '{}'", draft.username);
    dispatch(RegisterAction::SubmitStarted);

    let outcome = resolve_action("REGISTER", actions.register(&draft).await);
    dispatch(RegisterAction::SubmitFinished(outcome.clone()));

    if outcome.as_ref().is_some_and(ActionOutcome::is_success) {
        navigator.navigate_to(destination);
    }

    outcome
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;

    use super::*;
    use crate::features::location::LocationLevel;
    use crate::services::actions::ActionResponse;
    use crate::services::errors::FormResult;
    use crate::services::navigation::testing::RecordingNavigator;

    struct FakeRegistrationActions {
        response: ActionResponse,
        calls: Cell<usize>,
    }

    impl FakeRegistrationActions {
        fn answering(response: ActionResponse) -> Self {
            Self {
                response,
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl RegistrationActions for FakeRegistrationActions {
        async fn register(&self, _draft: &RiderDraft) -> FormResult<ActionResponse> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.response.clone())
        }
    }

    fn filled_state() -> RefCell<RegisterFormState> {
        let mut state = RegisterFormState::default();
        for action in [
            RegisterAction::SetFirstName("Amina".to_string()),
            RegisterAction::SetLastName("Otieno".to_string()),
            RegisterAction::SetUsername("amina".to_string()),
            RegisterAction::SetPhoneNumber("+254712345678".to_string()),
            RegisterAction::SetIdNumber("2345678".to_string()),
            RegisterAction::SetBikeNumber("KMDA 123B".to_string()),
            RegisterAction::SelectLocation(LocationLevel::County, "Kisumu".to_string()),
            RegisterAction::SelectLocation(LocationLevel::SubCounty, "Kisumu Central".to_string()),
            RegisterAction::SelectLocation(LocationLevel::Ward, "Kondele".to_string()),
            RegisterAction::SelectLocation(LocationLevel::Stage, "Mamba".to_string()),
            RegisterAction::ToggleRiderType(RiderType::MwenyePikipiki, true),
            RegisterAction::SetPassword("pikipiki".to_string()),
            RegisterAction::SetTerms(true),
        ] {
            state.reduce_in_place(action);
        }
        RefCell::new(state)
    }

    #[tokio::test]
    async fn test_business_error_shown_verbatim_without_navigation() {
        let state = filled_state();
        let actions = FakeRegistrationActions::answering(ActionResponse::error("Username taken"));
        let navigator = RecordingNavigator::default();
        let draft = state.borrow().draft.clone();

        let outcome = submit_registration(
            draft,
            LocationHierarchy::embedded(),
            &actions,
            &navigator,
            "/login",
            || state.borrow().submission.is_pending(),
            |a| state.borrow_mut().reduce_in_place(a),
        )
        .await;

        assert_eq!(outcome, Some(ActionOutcome::Error("Username taken".to_string())));
        assert_eq!(actions.calls.get(), 1);
        assert!(navigator.visited.borrow().is_empty());

        let state = state.borrow();
        assert_eq!(state.submission.error_message(), "Username taken");
        assert_eq!(state.submission.success_message(), "");
        assert!(!state.fields_disabled());
        assert_eq!(state.draft.username, "amina");
    }

    #[tokio::test]
    async fn test_success_navigates_to_login_once() {
        let state = filled_state();
        let actions = FakeRegistrationActions::answering(ActionResponse {
            error: Some(String::new()),
            success: Some("Account created!".to_string()),
        });
        let navigator = RecordingNavigator::default();
        let draft = state.borrow().draft.clone();

        submit_registration(
            draft,
            LocationHierarchy::embedded(),
            &actions,
            &navigator,
            "/login",
            || state.borrow().submission.is_pending(),
            |a| state.borrow_mut().reduce_in_place(a),
        )
        .await;

        assert_eq!(*navigator.visited.borrow(), vec!["/login".to_string()]);
        assert_eq!(state.borrow().submission.success_message(), "Account created!");
        assert_eq!(state.borrow().submission.error_message(), "");
    }

    #[tokio::test]
    async fn test_empty_response_shows_nothing() {
        let state = filled_state();
        let actions = FakeRegistrationActions::answering(ActionResponse::default());
        let navigator = RecordingNavigator::default();
        let draft = state.borrow().draft.clone();

        let outcome = submit_registration(
            draft,
            LocationHierarchy::embedded(),
            &actions,
            &navigator,
            "/login",
            || state.borrow().submission.is_pending(),
            |a| state.borrow_mut().reduce_in_place(a),
        )
        .await;

        assert_eq!(outcome, None);
        assert!(state.borrow().submission.outcome().is_none());
        assert!(navigator.visited.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_action() {
        let state = RefCell::new(RegisterFormState::default());
        let actions = FakeRegistrationActions::answering(ActionResponse::success("unused"));
        let navigator = RecordingNavigator::default();

        submit_registration(
            RiderDraft::default(),
            LocationHierarchy::embedded(),
            &actions,
            &navigator,
            "/login",
            || state.borrow().submission.is_pending(),
            |a| state.borrow_mut().reduce_in_place(a),
        )
        .await;

        assert_eq!(actions.calls.get(), 0);
        assert!(state.borrow().errors.contains(RiderField::FirstName));
        assert!(state.borrow().errors.contains(RiderField::Terms));
        assert!(!state.borrow().submission.is_pending());
    }

    #[tokio::test]
    async fn test_second_submit_while_pending_is_dropped() {
        let state = filled_state();
        state.borrow_mut().reduce_in_place(RegisterAction::SubmitStarted);
        let mut errors = FieldErrors::new();
        errors.add(RiderField::Username, "Username taken");
        state.borrow_mut().reduce_in_place(RegisterAction::SetFieldErrors(errors));

        let actions = FakeRegistrationActions::answering(ActionResponse::success("Account created!"));
        let navigator = RecordingNavigator::default();
        let draft = state.borrow().draft.clone();

        let outcome = submit_registration(
            draft,
            LocationHierarchy::embedded(),
            &actions,
            &navigator,
            "/login",
            || state.borrow().submission.is_pending(),
            |a| state.borrow_mut().reduce_in_place(a),
        )
        .await;

        assert_eq!(outcome, None);
        assert_eq!(actions.calls.get(), 0);
        assert!(navigator.visited.borrow().is_empty());
        assert!(state.borrow().submission.is_pending());
        assert!(state.borrow().errors.contains(RiderField::Username));
    }
}
