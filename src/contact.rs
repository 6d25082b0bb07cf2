use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_MESSAGE_LEN: usize = 5_000;

/// How long the easter egg stays on screen.
pub const KONAMI_CELEBRATION_MS: u64 = 3_000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{0} is required")]
    Missing(Field),
    #[error("{0} must be at most {1} characters")]
    TooLong(Field, usize),
    #[error("email address is not valid")]
    InvalidEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        };
        write!(f, "{s}")
    }
}

impl ContactForm {
    /// Copy with surrounding whitespace stripped from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            (Field::Name, self.name.trim(), MAX_NAME_LEN),
            (Field::Email, self.email.trim(), MAX_EMAIL_LEN),
            (Field::Message, self.message.trim(), MAX_MESSAGE_LEN),
        ];
        for (field, value, max) in fields {
            if value.is_empty() {
                return Err(ContactError::Missing(field));
            }
            if value.chars().count() > max {
                return Err(ContactError::TooLong(field, max));
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmitStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

const KONAMI_CODE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Watches key presses for ↑↑↓↓←→←→BA.
#[derive(Debug, Clone, Default)]
pub struct KonamiTracker {
    progress: usize,
}

impl KonamiTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one `KeyboardEvent.key` value. Returns true on the key that
    /// completes the code.
    pub fn press(&mut self, key: &str) -> bool {
        let matches = |i: usize| KONAMI_CODE[i].eq_ignore_ascii_case(key);
        if matches(self.progress) {
            self.progress += 1;
        } else {
            // a wrong key may still be the start of a new attempt
            self.progress = usize::from(matches(0));
        }
        if self.progress == KONAMI_CODE.len() {
            self.progress = 0;
            return true;
        }
        false
    }

    pub fn progress(&self) -> usize {
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(form("Ada", "ada@example.com", "Hello").validate(), Ok(()));
        assert_eq!(
            form("  Ada ", " ada@mail.example.org ", " hi ").validate(),
            Ok(())
        );
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            form(" ", "a@b.co", "hi").validate(),
            Err(ContactError::Missing(Field::Name))
        );
        assert_eq!(
            form("Ada", "", "hi").validate(),
            Err(ContactError::Missing(Field::Email))
        );
        assert_eq!(
            form("Ada", "a@b.co", "\n\t").validate(),
            Err(ContactError::Missing(Field::Message))
        );
    }

    #[test]
    fn test_rejects_bad_emails() {
        for email in ["ada", "@example.com", "ada@", "ada@example", "ada@.com", "a b@c.de", "a@b@c.de"] {
            assert_eq!(
                form("Ada", email, "hi").validate(),
                Err(ContactError::InvalidEmail),
                "{email}"
            );
        }
    }

    #[test]
    fn test_length_caps() {
        let long_name = "x".repeat(MAX_NAME_LEN + 1);
        assert_eq!(
            form(&long_name, "a@b.co", "hi").validate(),
            Err(ContactError::TooLong(Field::Name, MAX_NAME_LEN))
        );
        let message = "é".repeat(MAX_MESSAGE_LEN);
        assert_eq!(form("Ada", "a@b.co", &message).validate(), Ok(()));
        assert_eq!(
            ContactError::TooLong(Field::Message, 5_000).to_string(),
            "message must be at most 5000 characters"
        );
    }

    #[test]
    fn test_trimmed() {
        assert_eq!(
            form(" Ada ", " a@b.co", "hi\n").trimmed(),
            form("Ada", "a@b.co", "hi")
        );
    }

    #[test]
    fn test_konami_completes_once() {
        let mut tracker = KonamiTracker::new();
        let fired = KONAMI_CODE
            .iter()
            .map(|key| tracker.press(key))
            .collect::<Vec<_>>();
        assert_eq!(fired.iter().filter(|f| **f).count(), 1);
        assert_eq!(fired.last(), Some(&true));
        assert_eq!(tracker.progress(), 0);
    }

    #[test]
    fn test_konami_wrong_key_resets() {
        let mut tracker = KonamiTracker::new();
        for key in ["ArrowUp", "ArrowUp", "ArrowDown", "x"] {
            assert!(!tracker.press(key));
        }
        assert_eq!(tracker.progress(), 0);

        // an extra ArrowUp still leaves room for the full code
        tracker.press("ArrowUp");
        tracker.press("ArrowUp");
        tracker.press("ArrowUp");
        assert_eq!(tracker.progress(), 1);
    }

    #[test]
    fn test_konami_accepts_uppercase_letters() {
        let mut tracker = KonamiTracker::new();
        let keys = [
            "ArrowUp",
            "ArrowUp",
            "ArrowDown",
            "ArrowDown",
            "ArrowLeft",
            "ArrowRight",
            "ArrowLeft",
            "ArrowRight",
            "B",
        ];
        for key in keys {
            assert!(!tracker.press(key));
        }
        assert!(tracker.press("A"));
    }
}
