//! Typed model of the landing-page waitlist form. The page script
//! mirrors these transitions one-to-one; tests drive the machine
//! directly.

/// How long a success or error banner stays up before the form returns
/// to rest.
pub const RESET_DELAY_MS: u64 = 5_000;

pub const EMPTY_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const NETWORK_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Loading,
    Success {
        message: String,
    },
    Error {
        message: String,
    },
}

/// Outcome of the POST issued while the form was in [`FormState::Loading`].
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// 2xx response carrying a success body.
    Accepted { message: String },
    /// Error response carrying a server-provided message.
    Rejected { error: String },
    /// The request never produced a response.
    NetworkFailure,
}

#[derive(Debug, Default)]
pub struct WaitlistForm {
    email: String,
    state: FormState,
}

impl WaitlistForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// The banner text currently shown, if any.
    pub fn message(&self) -> Option<&str> {
        match &self.state {
            FormState::Success { message } | FormState::Error { message } => Some(message),
            FormState::Idle | FormState::Loading => None,
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Submit the form. Returns the email to POST when a request should
    /// go out; an empty input fails locally with no request.
    pub fn submit(&mut self) -> Option<String> {
        match self.state {
            FormState::Idle | FormState::Error { .. } => {
                if self.email.is_empty() {
                    self.state = FormState::Error {
                        message: EMPTY_EMAIL_MESSAGE.to_string(),
                    };
                    return None;
                }
                self.state = FormState::Loading;
                Some(self.email.clone())
            }
            // The button is disabled while a request is in flight or the
            // success check mark is showing.
            FormState::Loading | FormState::Success { .. } => None,
        }
    }

    /// Apply the response to an in-flight submission. The input is
    /// cleared on success only.
    pub fn resolve(&mut self, outcome: SubmitOutcome) {
        match self.state {
            FormState::Loading => {
                self.state = match outcome {
                    SubmitOutcome::Accepted { message } => {
                        self.email.clear();
                        FormState::Success { message }
                    }
                    SubmitOutcome::Rejected { error } => FormState::Error { message: error },
                    SubmitOutcome::NetworkFailure => FormState::Error {
                        message: NETWORK_FAILURE_MESSAGE.to_string(),
                    },
                };
            }
            FormState::Idle | FormState::Success { .. } | FormState::Error { .. } => {}
        }
    }

    /// Fires when the reset timer elapses after a terminal banner.
    pub fn reset_elapsed(&mut self) {
        match self.state {
            FormState::Success { .. } | FormState::Error { .. } => self.state = FormState::Idle,
            FormState::Idle | FormState::Loading => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_submit_errors_locally_without_a_request() {
        let mut form = WaitlistForm::new();

        assert_eq!(form.submit(), None);
        assert_eq!(
            form.state(),
            &FormState::Error {
                message: EMPTY_EMAIL_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn submit_with_email_goes_to_loading_and_emits_request() {
        let mut form = WaitlistForm::new();
        form.set_email("user@example.com");

        assert_eq!(form.submit(), Some("user@example.com".to_string()));
        assert_eq!(form.state(), &FormState::Loading);

        // A second click while loading does nothing.
        assert_eq!(form.submit(), None);
        assert_eq!(form.state(), &FormState::Loading);
    }

    #[test]
    fn accepted_response_shows_success_and_clears_input() {
        let mut form = WaitlistForm::new();
        form.set_email("user@example.com");
        form.submit();

        form.resolve(SubmitOutcome::Accepted {
            message: "Email added to waitlist successfully".to_string(),
        });

        assert!(matches!(form.state(), FormState::Success { .. }));
        assert_eq!(form.email(), "");
    }

    #[test]
    fn rejected_response_surfaces_server_message_and_keeps_input() {
        let mut form = WaitlistForm::new();
        form.set_email("user@example.com");
        form.submit();

        form.resolve(SubmitOutcome::Rejected {
            error: "Email already registered".to_string(),
        });

        assert_eq!(form.message(), Some("Email already registered"));
        assert_eq!(form.email(), "user@example.com");
    }

    #[test]
    fn network_failure_shows_generic_message() {
        let mut form = WaitlistForm::new();
        form.set_email("user@example.com");
        form.submit();

        form.resolve(SubmitOutcome::NetworkFailure);

        assert_eq!(form.message(), Some(NETWORK_FAILURE_MESSAGE));
    }

    #[test]
    fn reset_returns_to_idle_and_clears_message() {
        let mut form = WaitlistForm::new();
        form.set_email("user@example.com");
        form.submit();
        form.resolve(SubmitOutcome::Accepted {
            message: "ok".to_string(),
        });

        form.reset_elapsed();

        assert_eq!(form.state(), &FormState::Idle);
        assert_eq!(form.message(), None);
        assert_eq!(form.email(), "");
    }

    #[test]
    fn resolve_and_reset_are_noops_outside_their_states() {
        let mut form = WaitlistForm::new();

        form.resolve(SubmitOutcome::NetworkFailure);
        assert_eq!(form.state(), &FormState::Idle);

        form.reset_elapsed();
        assert_eq!(form.state(), &FormState::Idle);

        form.set_email("user@example.com");
        form.submit();
        form.reset_elapsed();
        assert_eq!(form.state(), &FormState::Loading);
    }

    #[test]
    fn error_state_allows_resubmission() {
        let mut form = WaitlistForm::new();
        form.submit();
        assert!(matches!(form.state(), FormState::Error { .. }));

        form.set_email("user@example.com");
        assert_eq!(form.submit(), Some("user@example.com".to_string()));
        assert_eq!(form.state(), &FormState::Loading);
    }
}
