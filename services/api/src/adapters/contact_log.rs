//! services/api/src/adapters/contact_log.rs
//!
//! The default `ContactNotifier`: records each submission in the service log.
//! Nothing is persisted and no email is sent.

use async_trait::async_trait;
use portfolio_core::domain::ContactSubmission;
use portfolio_core::ports::{ContactNotifier, PortResult};
use tracing::info;

#[derive(Clone, Default)]
pub struct LogContactNotifier;

#[async_trait]
impl ContactNotifier for LogContactNotifier {
    async fn notify(&self, submission: &ContactSubmission) -> PortResult<()> {
        info!(
            name = %submission.name,
            email = %submission.email,
            message = %submission.message,
            "Contact form submission"
        );
        Ok(())
    }
}
