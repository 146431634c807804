use super::form_validation::validate_stage;
use super::types::*;
use crate::services::actions::{resolve_action, ActionOutcome, StageActions};
use crate::services::geolocation::GeolocationProvider;
use crate::services::navigation::Navigate;
use crate::utils::validation::FieldErrors;
use crate::{console_debug, console_info, console_warn};

/// Ask the device for its position once and record it in the draft.
/// Nothing is dispatched when the device cannot answer.
pub async fn capture_stage_location<G, D>(provider: &G, dispatch: D)
where
    G: GeolocationProvider + ?Sized,
    D: Fn(StageAction),
{
    match provider.current_position().await {
        Some(coords) => dispatch(StageAction::LocationFetched(coords)),
        None => console_debug!("[STAGE] No device location available"),
    }
}

/// Validate, call the stage-creation action and route on success.
/// Returns the outcome shown in the form, `None` when nothing was shown.
pub async fn submit_stage<A, N, P, D>(
    draft: StageDraft,
    actions: &A,
    navigator: &N,
    destination: &str,
    is_pending: P,
    dispatch: D,
) -> Option<ActionOutcome>
where
    A: StageActions + ?Sized,
    N: Navigate + ?Sized,
    P: Fn() -> bool,
    D: Fn(StageAction),
{
    // Everything up to the action call runs without yielding, so this check
    // cannot race another submit of the same form
    if is_pending() {
        console_warn!("[STAGE] Submit ignored, one is already pending");
        return None;
    }

    dispatch(StageAction::ClearOutcome);

    let errors = validate_stage(&draft);
    if let Some(e) = errors.to_error() {
        console_debug!("[STAGE] Submission blocked: {}", e);
        dispatch(StageAction::SetFieldErrors(errors));
        return None;
    }
    dispatch(StageAction::SetFieldErrors(FieldErrors::new()));

    console_info!("[STAGE] Submitting stage '{}'", draft.stage_name);
    dispatch(StageAction::SubmitStarted);

    let outcome = resolve_action("STAGE", actions.create_stage(&draft).await);
    dispatch(StageAction::SubmitFinished(outcome.clone()));

    if outcome.as_ref().is_some_and(ActionOutcome::is_success) {
        navigator.navigate_to(destination);
    }

    outcome
}
