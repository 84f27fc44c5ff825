//! Contact submission backends

use async_trait::async_trait;
use std::time::Duration;
use tracing::info;

use super::contact::ContactForm;

/// Acknowledgement returned by a backend once a submission completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub ticket: u64,
}

/// Capability the contact form hands validated messages to.
///
/// Submissions always complete; there is no failure outcome.
#[async_trait]
pub trait SubmissionBackend: Send + Sync {
    async fn submit(&self, ticket: u64, form: ContactForm) -> Receipt;
}

/// Stand-in backend: waits a fixed delay and reports success without
/// sending anything anywhere.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
}

impl SimulatedBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl SubmissionBackend for SimulatedBackend {
    async fn submit(&self, ticket: u64, form: ContactForm) -> Receipt {
        tokio::time::sleep(self.delay).await;
        info!(ticket, from = %form.email, "Simulated contact submission completed");
        Receipt { ticket }
    }
}
