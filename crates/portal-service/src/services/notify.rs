//! Applicant notification
//!
//! The default notifier writes the mail to the structured log instead of an
//! SMTP transport; the admission flow only depends on the `Notifier` port.

use async_trait::async_trait;
use portal_core::{Mail, Notifier, NotifyError};
use tracing::info;

/// Notifier that records outbound mail in the application log
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, mail: &Mail) -> Result<(), NotifyError> {
        info!(to = %mail.to, subject = %mail.subject, "Notification dispatched");
        Ok(())
    }
}

/// Mail sent to an approved applicant who needs to complete registration
pub fn invitation_mail(to: &str, name: &str, registration_url: &str) -> Mail {
    Mail::new(
        to,
        "Your membership application was approved",
        format!(
            "Hello {name},\n\n\
             your application has been approved. Complete your registration \
             within the validity window using the link below:\n\n\
             {registration_url}\n"
        ),
    )
}

/// Mail sent to an approved applicant whose existing account was linked
pub fn welcome_back_mail(to: &str, name: &str) -> Mail {
    Mail::new(
        to,
        "Your membership application was approved",
        format!(
            "Hello {name},\n\n\
             your application has been approved and your existing account is \
             now linked to your member profile. No further steps are needed.\n"
        ),
    )
}

/// Mail sent to a rejected applicant, carrying the reviewer's reason
pub fn rejection_mail(to: &str, name: &str, reason: &str) -> Mail {
    Mail::new(
        to,
        "Your membership application was declined",
        format!(
            "Hello {name},\n\n\
             unfortunately your application was declined.\n\n\
             Reason: {reason}\n"
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invitation_mail_carries_link() {
        let mail = invitation_mail(
            "jane@example.com",
            "Jane",
            "https://portal.example.com/register?token=abc",
        );
        assert_eq!(mail.to, "jane@example.com");
        assert!(mail.body.contains("register?token=abc"));
    }

    #[test]
    fn test_rejection_mail_carries_reason() {
        let mail = rejection_mail("jane@example.com", "Jane", "Application form incomplete");
        assert!(mail.body.contains("Application form incomplete"));
    }

    #[tokio::test]
    async fn test_log_notifier_always_succeeds() {
        let notifier = LogNotifier::new();
        let mail = Mail::new("jane@example.com", "subject", "body");
        assert!(notifier.send(&mail).await.is_ok());
    }
}
