use crate::services::actions::ActionOutcome;

/// Pending flag and result slot shared by every form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Submission {
    pending: bool,
    outcome: Option<ActionOutcome>,
}

impl Submission {
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn outcome(&self) -> Option<&ActionOutcome> {
        self.outcome.as_ref()
    }

    /// Enter the pending state. Returns false if a submit is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        self.outcome = None;
        true
    }

    pub fn finish(&mut self, outcome: Option<ActionOutcome>) {
        self.pending = false;
        self.outcome = outcome;
    }

    pub fn clear_outcome(&mut self) {
        self.outcome = None;
    }

    pub fn success_message(&self) -> String {
        match &self.outcome {
            Some(ActionOutcome::Success(message)) => message.clone(),
            _ => String::new(),
        }
    }

    pub fn error_message(&self) -> String {
        match &self.outcome {
            Some(ActionOutcome::Error(message)) => message.clone(),
            _ => String::new(),
        }
    }
}
