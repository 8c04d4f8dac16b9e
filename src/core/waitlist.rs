//! Waitlist submission state machine
//!
//! A waitlist form moves through `Idle -> Submitting -> Succeeded` exactly
//! once per page life. The POST itself goes to a cross-origin form processor
//! through a hidden frame, so its response is unreadable: completion is
//! whichever comes first of the frame's `load` event or a fallback timer.
//! There is deliberately no failure state.

use std::fmt;
use std::future::Future;

use futures::future::{Either, select};

/// Delay after which a submission is reported as successful without a frame load
pub const FALLBACK_SUCCESS_MS: u32 = 1500;

/// Name of the hidden frame the waitlist forms target
pub const HIDDEN_FRAME_NAME: &str = "hidden_iframe";

/// Name of the single form field sent to the form processor
pub const EMAIL_FIELD: &str = "email";

/// Submit button label while idle
pub const IDLE_LABEL: &str = "Join the Waitlist";

/// Submit button label while the submission is in flight
pub const BUSY_LABEL: &str = "Joining...";

/// Opacity of the submit button while the submission is in flight
pub const BUSY_OPACITY: &str = "0.7";

/// Confirmation shown in place of the form once the submission settles
pub const SUCCESS_MESSAGE: &str = "You're on the list!";

/// Errors raised when a submission cannot start
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WaitlistError {
    #[error("Email address is required")]
    EmptyEmail,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("This form has already been submitted")]
    AlreadySubmitted,
}

/// Validated email address
///
/// Accepts the same shape browsers accept for `<input type="email">`:
/// a non-empty local part of printable characters, an `@`, and a domain made
/// of dot-separated alphanumeric labels that may contain inner hyphens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(raw: &str) -> Result<Self, WaitlistError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(WaitlistError::EmptyEmail);
        }

        let invalid = || WaitlistError::InvalidEmail(trimmed.to_string());

        let (local, domain) = trimmed.split_once('@').ok_or_else(invalid)?;
        if local.is_empty() || !local.chars().all(is_local_char) {
            return Err(invalid());
        }
        if domain.is_empty() || !domain.split('.').all(is_domain_label) {
            return Err(invalid());
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Which signal settled a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The hidden frame finished loading the form processor's response
    FrameLoaded,
    /// The fallback timer elapsed first
    FallbackElapsed,
}

/// Lifecycle of one waitlist submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded(Completion),
}

/// State of a single waitlist form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistSubmission {
    email: Option<EmailAddress>,
    phase: SubmissionPhase,
}

impl WaitlistSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    /// Start the submission for `raw_email`
    ///
    /// Only an idle form can start; on error the state is left untouched.
    pub fn begin(&mut self, raw_email: &str) -> Result<&EmailAddress, WaitlistError> {
        if self.phase != SubmissionPhase::Idle {
            return Err(WaitlistError::AlreadySubmitted);
        }
        let email = EmailAddress::parse(raw_email)?;
        self.phase = SubmissionPhase::Submitting;
        Ok(self.email.insert(email))
    }

    /// Settle the submission
    ///
    /// Returns `true` only for the call that moves `Submitting` to
    /// `Succeeded`; every later signal is ignored.
    pub fn complete(&mut self, by: Completion) -> bool {
        if self.phase != SubmissionPhase::Submitting {
            return false;
        }
        self.phase = SubmissionPhase::Succeeded(by);
        true
    }

    pub fn is_idle(&self) -> bool {
        self.phase == SubmissionPhase::Idle
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Succeeded(_))
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_idle() { IDLE_LABEL } else { BUSY_LABEL }
    }

    pub fn submit_disabled(&self) -> bool {
        !self.is_idle()
    }

    pub fn submit_opacity(&self) -> &'static str {
        if self.is_idle() { "1" } else { BUSY_OPACITY }
    }
}

/// Wait for whichever completion signal arrives first
///
/// The losing future is dropped before this returns, so a frame-load future
/// that detaches its listener on drop is cleaned up here as well.
pub async fn race_completion<L, T>(frame_load: L, fallback: T) -> Completion
where
    L: Future<Output = ()>,
    T: Future<Output = ()>,
{
    let frame_load = std::pin::pin!(frame_load);
    let fallback = std::pin::pin!(fallback);

    match select(frame_load, fallback).await {
        Either::Left(((), _)) => Completion::FrameLoaded,
        Either::Right(((), _)) => Completion::FallbackElapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn submitting() -> WaitlistSubmission {
        let mut submission = WaitlistSubmission::new();
        submission.begin("test@example.com").unwrap();
        submission
    }

    #[test]
    fn test_email_accepts_common_addresses() {
        for raw in [
            "test@example.com",
            "first.last+tag@sub.example.co.uk",
            "o'brien@example.io",
            "x@localhost",
        ] {
            assert!(EmailAddress::parse(raw).is_ok(), "{raw} should be accepted");
        }
    }

    #[test]
    fn test_email_is_trimmed() {
        let email = EmailAddress::parse("  test@example.com \n").unwrap();
        assert_eq!(email.as_str(), "test@example.com");
        assert_eq!(email.to_string(), "test@example.com");
    }

    #[test]
    fn test_email_rejects_empty() {
        assert_eq!(EmailAddress::parse(""), Err(WaitlistError::EmptyEmail));
        assert_eq!(EmailAddress::parse("   "), Err(WaitlistError::EmptyEmail));
    }

    #[test]
    fn test_email_rejects_malformed() {
        for raw in [
            "plainaddress",
            "@example.com",
            "user@",
            "user@@example.com",
            "user name@example.com",
            "user@exa mple.com",
            "user@.example.com",
            "user@example..com",
            "user@-example.com",
        ] {
            assert!(
                matches!(EmailAddress::parse(raw), Err(WaitlistError::InvalidEmail(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_new_submission_is_idle() {
        let submission = WaitlistSubmission::new();
        assert!(submission.is_idle());
        assert!(submission.email().is_none());
        assert_eq!(submission.submit_label(), IDLE_LABEL);
        assert!(!submission.submit_disabled());
        assert_eq!(submission.submit_opacity(), "1");
    }

    #[test]
    fn test_begin_switches_button_to_busy_immediately() {
        let mut submission = WaitlistSubmission::new();
        let email = submission.begin("test@example.com").unwrap();
        assert_eq!(email.as_str(), "test@example.com");

        assert_eq!(submission.phase(), SubmissionPhase::Submitting);
        assert_eq!(submission.submit_label(), "Joining...");
        assert!(submission.submit_disabled());
        assert_eq!(submission.submit_opacity(), BUSY_OPACITY);
    }

    #[test]
    fn test_begin_with_invalid_email_stays_idle() {
        let mut submission = WaitlistSubmission::new();
        assert!(submission.begin("not-an-email").is_err());
        assert!(submission.is_idle());
        assert!(submission.email().is_none());
    }

    #[test]
    fn test_begin_twice_is_rejected() {
        let mut submission = submitting();
        assert_eq!(
            submission.begin("other@example.com"),
            Err(WaitlistError::AlreadySubmitted)
        );
        assert_eq!(submission.email().unwrap().as_str(), "test@example.com");
    }

    #[test]
    fn test_complete_requires_submitting() {
        let mut submission = WaitlistSubmission::new();
        assert!(!submission.complete(Completion::FrameLoaded));
        assert!(submission.is_idle());
    }

    #[test]
    fn test_complete_fires_exactly_once() {
        let mut submission = submitting();

        assert!(submission.complete(Completion::FrameLoaded));
        assert!(!submission.complete(Completion::FallbackElapsed));
        assert!(!submission.complete(Completion::FrameLoaded));

        assert_eq!(
            submission.phase(),
            SubmissionPhase::Succeeded(Completion::FrameLoaded)
        );
    }

    #[test]
    fn test_succeeded_form_cannot_be_reused() {
        let mut submission = submitting();
        submission.complete(Completion::FallbackElapsed);

        assert_eq!(
            submission.begin("again@example.com"),
            Err(WaitlistError::AlreadySubmitted)
        );
        assert!(submission.submit_disabled());
    }

    // Success is reported even if the POST never reached the form processor:
    // the cross-origin response cannot be read, so a bare timeout counts.
    #[test]
    fn test_timeout_alone_reports_success() {
        let mut submission = submitting();
        assert!(submission.complete(Completion::FallbackElapsed));
        assert!(submission.is_succeeded());
    }

    #[tokio::test(start_paused = true)]
    async fn test_race_frame_load_first() {
        let started = tokio::time::Instant::now();
        let by = race_completion(
            tokio::time::sleep(Duration::from_millis(200)),
            tokio::time::sleep(Duration::from_millis(FALLBACK_SUCCESS_MS as u64)),
        )
        .await;

        assert_eq!(by, Completion::FrameLoaded);
        assert!(started.elapsed() >= Duration::from_millis(200));
        assert!(started.elapsed() < Duration::from_millis(FALLBACK_SUCCESS_MS as u64));
    }

    #[tokio::test(start_paused = true)]
    async fn test_race_fallback_first() {
        let started = tokio::time::Instant::now();
        let by = race_completion(
            futures::future::pending::<()>(),
            tokio::time::sleep(Duration::from_millis(FALLBACK_SUCCESS_MS as u64)),
        )
        .await;

        assert_eq!(by, Completion::FallbackElapsed);
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_race_drops_losing_future() {
        struct DropFlag(std::rc::Rc<std::cell::Cell<bool>>);
        impl Drop for DropFlag {
            fn drop(&mut self) {
                self.0.set(true);
            }
        }

        let dropped = std::rc::Rc::new(std::cell::Cell::new(false));
        let guard = DropFlag(dropped.clone());
        let frame_load = async move {
            let _guard = guard;
            futures::future::pending::<()>().await
        };

        let by = race_completion(frame_load, tokio::time::sleep(Duration::from_millis(10))).await;

        assert_eq!(by, Completion::FallbackElapsed);
        assert!(dropped.get());
    }
}
