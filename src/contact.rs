use thiserror::Error;

/// Form post target baked in at build time. Without one the form only
/// validates and acknowledges locally.
pub const CONTACT_FORM_ACTION: Option<&str> = option_env!("CONTACT_FORM_ACTION");

/// Shown after a valid submit when no form endpoint is configured.
pub const UNSENT_NOTICE: &str =
    "This form isn't connected to a mailbox yet, so your message was not sent. Please reach out on LinkedIn instead.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please tell me your name")]
    MissingName,
    #[error("An email address is required")]
    MissingEmail,
    #[error("That email address doesn't look right")]
    InvalidEmail,
    #[error("The message is empty")]
    MissingMessage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

fn plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !email.contains(char::is_whitespace)
                && domain.split('.').count() > 1
                && domain.split('.').all(|label| !label.is_empty())
        }
        _ => false,
    }
}

impl ContactDraft {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// Checks fields in display order and reports the first problem.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !plausible_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_draft() {
        let draft = ContactDraft::new("  Ada ", " ada@example.com ", "Hello there");
        assert_eq!(draft.name, "Ada");
        assert_eq!(draft.email, "ada@example.com");
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            ContactDraft::new("", "a@b.co", "hi").validate(),
            Err(ContactError::MissingName)
        );
        assert_eq!(
            ContactDraft::new("Ada", "   ", "hi").validate(),
            Err(ContactError::MissingEmail)
        );
        assert_eq!(
            ContactDraft::new("Ada", "a@b.co", "\n\t").validate(),
            Err(ContactError::MissingMessage)
        );
        // first problem wins
        assert_eq!(
            ContactDraft::default().validate(),
            Err(ContactError::MissingName)
        );
    }

    #[test]
    fn test_email_shape() {
        let bad_emails = [
            "ada",
            "@example.com",
            "ada@",
            "ada@example",
            "a@b@c.com",
            "ada@.com",
            "a da@b.com",
        ];
        for bad in bad_emails {
            assert_eq!(
                ContactDraft::new("Ada", bad, "hi").validate(),
                Err(ContactError::InvalidEmail),
                "{bad} should be rejected"
            );
        }
        for good in ["ada@example.com", "first.last@mail.example.org"] {
            assert!(ContactDraft::new("Ada", good, "hi").validate().is_ok());
        }
    }

    #[test]
    fn test_unsent_notice_points_elsewhere() {
        assert!(UNSENT_NOTICE.contains("not sent"));
        assert!(UNSENT_NOTICE.contains("LinkedIn"));
        assert!(!UNSENT_NOTICE.contains("in touch soon"));
    }
}
