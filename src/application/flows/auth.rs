//! Step machines behind the login, registration and email-verification
//! screens. Each screen's script mirrors one of these machines; the
//! network calls they emit target the external auth API.

use crate::application::flows::otp::{CODE_LENGTH, OtpInput, ResendCooldown, SHORT_CODE_LENGTH};

/// A call a screen must make against the external auth API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    Login {
        email: String,
    },
    Register {
        first_name: String,
        last_name: String,
        email: String,
    },
    VerifyOtp {
        email: String,
        otp: String,
    },
}

/// The shared "enter the code we emailed you" step of the login and
/// registration screens.
#[derive(Debug, PartialEq, Eq)]
pub struct CodeVerification {
    email: String,
    otp: OtpInput,
    cooldown: ResendCooldown,
    error: Option<String>,
    submitting: bool,
}

impl CodeVerification {
    fn new(email: String) -> Self {
        Self {
            email,
            otp: OtpInput::new(CODE_LENGTH),
            cooldown: ResendCooldown::start(),
            error: None,
            submitting: false,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn otp(&self) -> &OtpInput {
        &self.otp
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.cooldown.remaining_secs()
    }

    pub fn can_resend(&self) -> bool {
        self.cooldown.can_resend()
    }

    pub fn enter_digit(&mut self, digit: u8) {
        self.error = None;
        self.otp.enter_digit(digit);
    }

    pub fn backspace(&mut self) {
        self.otp.backspace();
    }

    pub fn paste(&mut self, text: &str) {
        self.error = None;
        self.otp.paste(text);
    }

    pub fn tick(&mut self) {
        self.cooldown.tick();
    }

    /// Emits the verify call once every box is filled.
    pub fn submit_code(&mut self) -> Option<AuthRequest> {
        if self.submitting {
            return None;
        }
        let otp = self.otp.code()?;
        self.submitting = true;
        Some(AuthRequest::VerifyOtp {
            email: self.email.clone(),
            otp,
        })
    }

    /// Applies the verify result; true means the owning flow advances.
    fn code_verified(&mut self, result: Result<(), String>) -> bool {
        if !self.submitting {
            return false;
        }
        self.submitting = false;
        match result {
            Ok(()) => true,
            Err(message) => {
                self.error = Some(message);
                self.otp.clear();
                false
            }
        }
    }

    /// Restarts the cooldown if allowed; the owning flow emits the
    /// actual resend request.
    fn resend_allowed(&mut self) -> bool {
        self.cooldown.restart()
    }
}

// ============================================================================
// Login
// ============================================================================

#[derive(Debug, PartialEq, Eq)]
pub enum LoginFlow {
    EnterEmail {
        email: String,
        error: Option<String>,
        submitting: bool,
    },
    VerifyCode(CodeVerification),
    Done {
        email: String,
    },
}

impl LoginFlow {
    pub fn new() -> Self {
        LoginFlow::EnterEmail {
            email: String::new(),
            error: None,
            submitting: false,
        }
    }

    pub fn set_email(&mut self, value: &str) {
        if let LoginFlow::EnterEmail { email, error, .. } = self {
            *email = value.to_string();
            *error = None;
        }
    }

    /// Submit the email form; emits the login request when the input is
    /// acceptable.
    pub fn submit_email(&mut self) -> Option<AuthRequest> {
        match self {
            LoginFlow::EnterEmail {
                email,
                error,
                submitting,
            } => {
                if *submitting {
                    return None;
                }
                let trimmed = email.trim();
                if trimmed.is_empty() {
                    *error = Some("Please enter your email address".to_string());
                    return None;
                }
                *submitting = true;
                Some(AuthRequest::Login {
                    email: trimmed.to_string(),
                })
            }
            LoginFlow::VerifyCode(_) | LoginFlow::Done { .. } => None,
        }
    }

    /// Result of the login request: success moves to code entry.
    pub fn code_requested(&mut self, result: Result<(), String>) {
        let LoginFlow::EnterEmail {
            email,
            error,
            submitting,
        } = self
        else {
            return;
        };
        if !*submitting {
            return;
        }
        *submitting = false;
        match result {
            Err(message) => *error = Some(message),
            Ok(()) => {
                let email = std::mem::take(email);
                *self = LoginFlow::VerifyCode(CodeVerification::new(email));
            }
        }
    }

    pub fn verification(&self) -> Option<&CodeVerification> {
        match self {
            LoginFlow::VerifyCode(verification) => Some(verification),
            LoginFlow::EnterEmail { .. } | LoginFlow::Done { .. } => None,
        }
    }

    pub fn verification_mut(&mut self) -> Option<&mut CodeVerification> {
        match self {
            LoginFlow::VerifyCode(verification) => Some(verification),
            LoginFlow::EnterEmail { .. } | LoginFlow::Done { .. } => None,
        }
    }

    pub fn submit_code(&mut self) -> Option<AuthRequest> {
        self.verification_mut()?.submit_code()
    }

    pub fn code_verified(&mut self, result: Result<(), String>) {
        let LoginFlow::VerifyCode(verification) = self else {
            return;
        };
        if verification.code_verified(result) {
            let email = std::mem::take(&mut verification.email);
            *self = LoginFlow::Done { email };
        }
    }

    /// Re-request a code; gated by the cooldown.
    pub fn resend(&mut self) -> Option<AuthRequest> {
        let LoginFlow::VerifyCode(verification) = self else {
            return None;
        };
        if !verification.resend_allowed() {
            return None;
        }
        Some(AuthRequest::Login {
            email: verification.email.clone(),
        })
    }

    /// Back to the email form, keeping the address typed so far.
    pub fn back_to_email(&mut self) {
        let LoginFlow::VerifyCode(verification) = self else {
            return;
        };
        let email = std::mem::take(&mut verification.email);
        *self = LoginFlow::EnterEmail {
            email,
            error: None,
            submitting: false,
        };
    }

    pub fn is_done(&self) -> bool {
        matches!(self, LoginFlow::Done { .. })
    }
}

// ============================================================================
// Registration
// ============================================================================

#[derive(Debug, PartialEq, Eq)]
pub enum RegisterFlow {
    EnterDetails {
        first_name: String,
        last_name: String,
        email: String,
        error: Option<String>,
        submitting: bool,
    },
    VerifyCode(CodeVerification),
    Done {
        email: String,
    },
}

impl RegisterFlow {
    pub fn new() -> Self {
        RegisterFlow::EnterDetails {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            error: None,
            submitting: false,
        }
    }

    pub fn set_details(&mut self, first: &str, last: &str, address: &str) {
        if let RegisterFlow::EnterDetails {
            first_name,
            last_name,
            email,
            error,
            ..
        } = self
        {
            *first_name = first.to_string();
            *last_name = last.to_string();
            *email = address.to_string();
            *error = None;
        }
    }

    /// Submit the registration form; every field is required.
    pub fn submit_details(&mut self) -> Option<AuthRequest> {
        match self {
            RegisterFlow::EnterDetails {
                first_name,
                last_name,
                email,
                error,
                submitting,
            } => {
                if *submitting {
                    return None;
                }
                let first = first_name.trim();
                let last = last_name.trim();
                let address = email.trim();
                if first.is_empty() || last.is_empty() || address.is_empty() {
                    *error = Some("Please fill in all fields".to_string());
                    return None;
                }
                *submitting = true;
                Some(AuthRequest::Register {
                    first_name: first.to_string(),
                    last_name: last.to_string(),
                    email: address.to_string(),
                })
            }
            RegisterFlow::VerifyCode(_) | RegisterFlow::Done { .. } => None,
        }
    }

    /// Result of the registration request: success moves to code entry.
    pub fn registered(&mut self, result: Result<(), String>) {
        let RegisterFlow::EnterDetails {
            email,
            error,
            submitting,
            ..
        } = self
        else {
            return;
        };
        if !*submitting {
            return;
        }
        *submitting = false;
        match result {
            Err(message) => *error = Some(message),
            Ok(()) => {
                let email = std::mem::take(email);
                *self = RegisterFlow::VerifyCode(CodeVerification::new(email));
            }
        }
    }

    pub fn verification_mut(&mut self) -> Option<&mut CodeVerification> {
        match self {
            RegisterFlow::VerifyCode(verification) => Some(verification),
            RegisterFlow::EnterDetails { .. } | RegisterFlow::Done { .. } => None,
        }
    }

    pub fn submit_code(&mut self) -> Option<AuthRequest> {
        self.verification_mut()?.submit_code()
    }

    pub fn code_verified(&mut self, result: Result<(), String>) {
        let RegisterFlow::VerifyCode(verification) = self else {
            return;
        };
        if verification.code_verified(result) {
            let email = std::mem::take(&mut verification.email);
            *self = RegisterFlow::Done { email };
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, RegisterFlow::Done { .. })
    }
}

// ============================================================================
// Standalone verification screen
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationMethod {
    Otp,
    MagicLink,
}

/// The email-verification screen: pick a method, then either type a
/// short code or wait for a magic link.
#[derive(Debug, PartialEq, Eq)]
pub enum VerificationFlow {
    ChooseMethod {
        selected: Option<VerificationMethod>,
    },
    EnterCode {
        otp: OtpInput,
        verifying: bool,
    },
    LinkSent {
        cooldown: ResendCooldown,
    },
    Done,
}

impl VerificationFlow {
    pub fn new() -> Self {
        VerificationFlow::ChooseMethod { selected: None }
    }

    pub fn select(&mut self, method: VerificationMethod) {
        if let VerificationFlow::ChooseMethod { selected } = self {
            *selected = Some(method);
        }
    }

    /// Continue past the method chooser; ignored until a method is
    /// picked.
    pub fn proceed(&mut self) {
        let VerificationFlow::ChooseMethod { selected } = self else {
            return;
        };
        match *selected {
            Some(VerificationMethod::Otp) => {
                *self = VerificationFlow::EnterCode {
                    otp: OtpInput::new(SHORT_CODE_LENGTH),
                    verifying: false,
                };
            }
            Some(VerificationMethod::MagicLink) => {
                *self = VerificationFlow::LinkSent {
                    cooldown: ResendCooldown::start(),
                };
            }
            None => {}
        }
    }

    pub fn enter_digit(&mut self, digit: u8) {
        if let VerificationFlow::EnterCode { otp, verifying } = self
            && !*verifying
        {
            otp.enter_digit(digit);
        }
    }

    pub fn backspace(&mut self) {
        if let VerificationFlow::EnterCode { otp, verifying } = self
            && !*verifying
        {
            otp.backspace();
        }
    }

    /// Starts verification once the code is complete.
    pub fn submit_code(&mut self) -> bool {
        let VerificationFlow::EnterCode { otp, verifying } = self else {
            return false;
        };
        if *verifying || !otp.is_complete() {
            return false;
        }
        *verifying = true;
        true
    }

    /// Fires when the started verification completes.
    pub fn verification_complete(&mut self) {
        if let VerificationFlow::EnterCode { verifying: true, .. } = self {
            *self = VerificationFlow::Done;
        }
    }

    pub fn tick(&mut self) {
        if let VerificationFlow::LinkSent { cooldown } = self {
            cooldown.tick();
        }
    }

    pub fn resend_link(&mut self) -> bool {
        match self {
            VerificationFlow::LinkSent { cooldown } => cooldown.restart(),
            _ => false,
        }
    }

    /// Swap from waiting on the link to typing a code.
    pub fn switch_to_code(&mut self) {
        if let VerificationFlow::LinkSent { .. } = self {
            *self = VerificationFlow::EnterCode {
                otp: OtpInput::new(SHORT_CODE_LENGTH),
                verifying: false,
            };
        }
    }

    /// Back to the chooser, dropping the selection and any typed code.
    pub fn back(&mut self) {
        match self {
            VerificationFlow::EnterCode { .. } | VerificationFlow::LinkSent { .. } => {
                *self = VerificationFlow::ChooseMethod { selected: None };
            }
            VerificationFlow::ChooseMethod { .. } | VerificationFlow::Done => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::flows::otp::RESEND_COOLDOWN_SECS;

    fn verified_login() -> LoginFlow {
        let mut flow = LoginFlow::new();
        flow.set_email("user@example.com");
        flow.submit_email();
        flow.code_requested(Ok(()));
        flow
    }

    #[test]
    fn login_requires_an_email_before_requesting_a_code() {
        let mut flow = LoginFlow::new();

        assert_eq!(flow.submit_email(), None);
        assert!(matches!(
            flow,
            LoginFlow::EnterEmail { ref error, .. } if error.is_some()
        ));
    }

    #[test]
    fn login_happy_path_reaches_done() {
        let mut flow = LoginFlow::new();
        flow.set_email("user@example.com");

        assert_eq!(
            flow.submit_email(),
            Some(AuthRequest::Login {
                email: "user@example.com".to_string()
            })
        );
        // Double submit while the request is in flight is swallowed.
        assert_eq!(flow.submit_email(), None);

        flow.code_requested(Ok(()));
        let verification = flow.verification_mut().unwrap();
        verification.paste("123456");

        assert_eq!(
            flow.submit_code(),
            Some(AuthRequest::VerifyOtp {
                email: "user@example.com".to_string(),
                otp: "123456".to_string()
            })
        );

        flow.code_verified(Ok(()));
        assert!(flow.is_done());
    }

    #[test]
    fn login_failed_request_surfaces_error_and_stays_put() {
        let mut flow = LoginFlow::new();
        flow.set_email("user@example.com");
        flow.submit_email();

        flow.code_requested(Err("Login failed. Please try again.".to_string()));

        assert!(matches!(
            flow,
            LoginFlow::EnterEmail { ref error, .. }
                if error.as_deref() == Some("Login failed. Please try again.")
        ));
    }

    #[test]
    fn login_incomplete_code_does_not_submit() {
        let mut flow = verified_login();
        flow.verification_mut().unwrap().enter_digit(1);

        assert_eq!(flow.submit_code(), None);
    }

    #[test]
    fn login_rejected_code_clears_boxes_for_retry() {
        let mut flow = verified_login();
        flow.verification_mut().unwrap().paste("123456");
        flow.submit_code();

        flow.code_verified(Err("Invalid code".to_string()));

        let verification = flow.verification().unwrap();
        assert_eq!(verification.error(), Some("Invalid code"));
        assert!(verification.otp().is_empty());
        assert!(!flow.is_done());
    }

    #[test]
    fn login_resend_waits_for_cooldown() {
        let mut flow = verified_login();

        assert_eq!(flow.resend(), None);

        for _ in 0..RESEND_COOLDOWN_SECS {
            flow.verification_mut().unwrap().tick();
        }
        assert_eq!(
            flow.resend(),
            Some(AuthRequest::Login {
                email: "user@example.com".to_string()
            })
        );
        // Cooldown refilled by the resend.
        assert_eq!(flow.resend(), None);
    }

    #[test]
    fn login_back_keeps_the_email() {
        let mut flow = verified_login();
        flow.back_to_email();

        assert!(matches!(
            flow,
            LoginFlow::EnterEmail { ref email, .. } if email == "user@example.com"
        ));
    }

    #[test]
    fn register_requires_all_fields() {
        let mut flow = RegisterFlow::new();
        flow.set_details("Ada", "", "ada@example.com");

        assert_eq!(flow.submit_details(), None);
        assert!(matches!(
            flow,
            RegisterFlow::EnterDetails { ref error, .. } if error.is_some()
        ));
    }

    #[test]
    fn register_happy_path_reaches_done() {
        let mut flow = RegisterFlow::new();
        flow.set_details("Ada", "Lovelace", "ada@example.com");

        assert_eq!(
            flow.submit_details(),
            Some(AuthRequest::Register {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@example.com".to_string()
            })
        );

        flow.registered(Ok(()));
        flow.verification_mut().unwrap().paste("654321");
        assert_eq!(
            flow.submit_code(),
            Some(AuthRequest::VerifyOtp {
                email: "ada@example.com".to_string(),
                otp: "654321".to_string()
            })
        );

        flow.code_verified(Ok(()));
        assert!(flow.is_done());
    }

    #[test]
    fn register_failure_keeps_the_form() {
        let mut flow = RegisterFlow::new();
        flow.set_details("Ada", "Lovelace", "ada@example.com");
        flow.submit_details();

        flow.registered(Err("Registration failed. Please try again.".to_string()));

        assert!(matches!(flow, RegisterFlow::EnterDetails { .. }));
    }

    #[test]
    fn verification_chooser_requires_a_selection() {
        let mut flow = VerificationFlow::new();

        flow.proceed();
        assert!(matches!(flow, VerificationFlow::ChooseMethod { .. }));

        flow.select(VerificationMethod::Otp);
        flow.proceed();
        assert!(matches!(flow, VerificationFlow::EnterCode { .. }));
    }

    #[test]
    fn verification_code_path_completes() {
        let mut flow = VerificationFlow::new();
        flow.select(VerificationMethod::Otp);
        flow.proceed();

        for digit in [1, 2, 3] {
            flow.enter_digit(digit);
        }
        assert!(!flow.submit_code());

        flow.enter_digit(4);
        assert!(flow.submit_code());
        // Digits are frozen while verifying.
        flow.enter_digit(9);

        flow.verification_complete();
        assert!(matches!(flow, VerificationFlow::Done));
    }

    #[test]
    fn verification_magic_link_path_switches_and_resends() {
        let mut flow = VerificationFlow::new();
        flow.select(VerificationMethod::MagicLink);
        flow.proceed();

        assert!(!flow.resend_link());
        for _ in 0..RESEND_COOLDOWN_SECS {
            flow.tick();
        }
        assert!(flow.resend_link());

        flow.switch_to_code();
        assert!(matches!(flow, VerificationFlow::EnterCode { .. }));
    }

    #[test]
    fn verification_back_clears_the_selection() {
        let mut flow = VerificationFlow::new();
        flow.select(VerificationMethod::MagicLink);
        flow.proceed();

        flow.back();
        assert!(matches!(
            flow,
            VerificationFlow::ChooseMethod { selected: None }
        ));
    }
}
