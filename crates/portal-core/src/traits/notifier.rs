//! Notifier port - outbound email dispatch
//!
//! The notifier is an external collaborator that may fail independently of
//! persistence. It is always invoked outside the store transaction.

use async_trait::async_trait;
use thiserror::Error;

/// An email to deliver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl Mail {
    pub fn new(
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Notification dispatch failure
#[derive(Debug, Clone, Error)]
#[error("Notification failed: {0}")]
pub struct NotifyError(pub String);

/// Outbound notification port
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a single email. Success says nothing about persisted state,
    /// and vice versa.
    async fn send(&self, mail: &Mail) -> Result<(), NotifyError>;
}
