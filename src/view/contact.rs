//! Contact form lifecycle: idle → submitting → success → idle.
//!
//! Validation gates the first edge. The second edge fires when the
//! [`SubmissionBackend`] completes; the UI thread picks the completion up in
//! [`ContactFormMachine::poll`]. The last edge is the explicit "send another"
//! reset. No other transition exists.

use regex::Regex;
use std::sync::{Arc, LazyLock};
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use super::backend::{Receipt, SubmissionBackend};

/// Same grammar browsers apply to `<input type="email">`
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Missing(Field),

    #[error("Enter a valid email address")]
    InvalidEmail,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Missing(field) => *field,
            FieldError::InvalidEmail => Field::Email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(Vec<FieldError>),

    #[error("a submission is only accepted while idle (currently {0:?})")]
    NotIdle(FormStatus),
}

#[cfg(test)]
impl ContactForm {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }
}

impl ContactForm {
    /// All field errors, in field order. Empty means the form may be submitted.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.name.is_empty() {
            errors.push(FieldError::Missing(Field::Name));
        }

        // Email values are stripped of surrounding whitespace before checking
        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::Missing(Field::Email));
        } else if !EMAIL_PATTERN.is_match(email) {
            errors.push(FieldError::InvalidEmail);
        }

        if self.message.is_empty() {
            errors.push(FieldError::Missing(Field::Message));
        }

        errors
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

struct InFlight {
    ticket: u64,
    completion: oneshot::Receiver<Receipt>,
    task: JoinHandle<()>,
}

pub struct ContactFormMachine {
    status: FormStatus,
    backend: Arc<dyn SubmissionBackend>,
    runtime: Handle,
    next_ticket: u64,
    in_flight: Option<InFlight>,
}

impl ContactFormMachine {
    pub fn new(backend: Arc<dyn SubmissionBackend>, runtime: Handle) -> Self {
        Self {
            status: FormStatus::Idle,
            backend,
            runtime,
            next_ticket: 1,
            in_flight: None,
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        self.status == FormStatus::Idle
    }

    /// `idle --submit--> submitting`. Returns the submission ticket.
    ///
    /// Rejected without any effect when not idle or when a field is invalid;
    /// no backend call is started in either case.
    pub fn submit(&mut self, form: &ContactForm) -> Result<u64, SubmitError> {
        if self.status != FormStatus::Idle {
            debug!(status = ?self.status, "Submit ignored, form not idle");
            return Err(SubmitError::NotIdle(self.status));
        }

        let errors = form.validate();
        if !errors.is_empty() {
            debug!(errors = errors.len(), "Submit blocked by validation");
            return Err(SubmitError::Invalid(errors));
        }

        let ticket = self.next_ticket;
        self.next_ticket += 1;

        let (tx, rx) = oneshot::channel();
        let backend = Arc::clone(&self.backend);
        let form = form.clone();
        let task = self.runtime.spawn(async move {
            let receipt = backend.submit(ticket, form).await;
            // Receiver is gone if the form was torn down meanwhile
            let _ = tx.send(receipt);
        });

        self.in_flight = Some(InFlight {
            ticket,
            completion: rx,
            task,
        });
        self.status = FormStatus::Submitting;
        info!(ticket, "Contact form submitting");
        Ok(ticket)
    }

    /// `submitting --complete--> success`, if the backend has finished.
    /// Returns true when the status changed.
    pub fn poll(&mut self) -> bool {
        let Some(in_flight) = self.in_flight.as_mut() else {
            return false;
        };

        match in_flight.completion.try_recv() {
            Ok(receipt) => {
                if receipt.ticket != in_flight.ticket {
                    debug!(expected = in_flight.ticket, got = receipt.ticket, "Stale submission receipt ignored");
                    return false;
                }
                self.in_flight = None;
                self.status = FormStatus::Success;
                info!(ticket = receipt.ticket, "Contact form submitted");
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Closed) => {
                // Backend task died without completing; nothing left to wait for
                error!(ticket = in_flight.ticket, "Submission task ended without a receipt");
                self.in_flight = None;
                false
            }
        }
    }

    /// `success --reset--> idle` ("send another"). Ignored in other states.
    pub fn reset(&mut self) -> bool {
        if self.status != FormStatus::Success {
            debug!(status = ?self.status, "Reset ignored, form not in success state");
            return false;
        }
        self.status = FormStatus::Idle;
        info!("Contact form reset");
        true
    }

    /// Cancel any in-flight submission so it can never complete into this machine
    pub fn dispose(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.task.abort();
            info!(ticket = in_flight.ticket, "In-flight submission cancelled");
        }
    }
}

impl Drop for ContactFormMachine {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::contact::SUBMIT_DELAY_MS;
    use crate::view::backend::SimulatedBackend;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn valid_form() -> ContactForm {
        ContactForm::new("John Doe", "john@company.com", "Tell me about your project")
    }

    fn machine() -> ContactFormMachine {
        let backend = SimulatedBackend::new(Duration::from_millis(SUBMIT_DELAY_MS));
        ContactFormMachine::new(Arc::new(backend), Handle::current())
    }

    /// Counts how many submissions reached it
    struct CountingBackend {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl SubmissionBackend for CountingBackend {
        async fn submit(&self, ticket: u64, _form: ContactForm) -> Receipt {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(SUBMIT_DELAY_MS)).await;
            Receipt { ticket }
        }
    }

    async fn advance(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        tokio::task::yield_now().await;
    }

    #[test]
    fn test_validate_accepts_complete_form() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_each_missing_field() {
        let errors = ContactForm::new("", "", "").validate();
        assert_eq!(
            errors,
            vec![
                FieldError::Missing(Field::Name),
                FieldError::Missing(Field::Email),
                FieldError::Missing(Field::Message),
            ]
        );
        assert_eq!(errors[0].to_string(), "Name is required");

        // A blank email is stripped to nothing
        let errors = ContactForm::new("John", "   ", "Hi").validate();
        assert_eq!(errors, vec![FieldError::Missing(Field::Email)]);
    }

    #[test]
    fn test_validate_accepts_whitespace_name_and_message() {
        let form = ContactForm::new("   ", "ada@example.com", "\n");
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_validate_email_format() {
        for bad in ["john", "john@", "@company.com", "john@@company.com", "john doe@company.com", "john@-company.com"] {
            let form = ContactForm::new("John", bad, "Hi");
            assert_eq!(form.validate(), vec![FieldError::InvalidEmail], "accepted {bad:?}");
        }
        for good in ["john@company.com", "j.doe+tag@mail.company.co", "john@localhost", "  john@company.com "] {
            let form = ContactForm::new("John", good, "Hi");
            assert!(form.validate().is_empty(), "rejected {good:?}");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_lifecycle() {
        let mut machine = machine();
        assert_eq!(machine.status(), FormStatus::Idle);
        assert!(machine.can_submit());

        machine.submit(&valid_form()).unwrap();
        assert_eq!(machine.status(), FormStatus::Submitting);
        assert!(!machine.can_submit());

        // Still in flight before the delay elapses, control stays disabled
        advance(1000).await;
        assert!(!machine.poll());
        assert_eq!(machine.status(), FormStatus::Submitting);
        assert!(!machine.can_submit());

        advance(600).await;
        assert!(machine.poll());
        assert_eq!(machine.status(), FormStatus::Success);

        assert!(machine.reset());
        assert_eq!(machine.status(), FormStatus::Idle);
        assert!(machine.can_submit());
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_form_stays_idle_without_backend_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let backend = CountingBackend { calls: Arc::clone(&calls) };
        let mut machine = ContactFormMachine::new(Arc::new(backend), Handle::current());

        let form = ContactForm::new("John", "john@company.com", "");
        let result = machine.submit(&form);
        assert_eq!(
            result,
            Err(SubmitError::Invalid(vec![FieldError::Missing(Field::Message)]))
        );
        assert_eq!(machine.status(), FormStatus::Idle);

        advance(2000).await;
        assert!(!machine.poll());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_while_submitting_has_no_effect() {
        let calls = Arc::new(AtomicUsize::new(0));
        let backend = CountingBackend { calls: Arc::clone(&calls) };
        let mut machine = ContactFormMachine::new(Arc::new(backend), Handle::current());

        let ticket = machine.submit(&valid_form()).unwrap();
        let second = machine.submit(&valid_form());
        assert_eq!(second, Err(SubmitError::NotIdle(FormStatus::Submitting)));

        advance(1600).await;
        assert!(machine.poll());
        assert_eq!(machine.status(), FormStatus::Success);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(ticket, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_in_success_state_rejected() {
        let mut machine = machine();
        machine.submit(&valid_form()).unwrap();
        advance(1600).await;
        machine.poll();

        assert_eq!(
            machine.submit(&valid_form()),
            Err(SubmitError::NotIdle(FormStatus::Success))
        );
        assert_eq!(machine.status(), FormStatus::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_only_from_success() {
        let mut machine = machine();
        assert!(!machine.reset());
        assert_eq!(machine.status(), FormStatus::Idle);

        machine.submit(&valid_form()).unwrap();
        assert!(!machine.reset());
        assert_eq!(machine.status(), FormStatus::Submitting);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispose_cancels_pending_completion() {
        let mut machine = machine();
        machine.submit(&valid_form()).unwrap();

        machine.dispose();
        advance(2000).await;

        // The timer never lands in the machine
        assert!(!machine.poll());
        assert_eq!(machine.status(), FormStatus::Submitting);
    }
}
