//! Contact form validation and simulated submission.
//!
//! Nothing is sent anywhere: a valid form is acknowledged and reset.

use std::sync::OnceLock;

use regex::Regex;

/// Acknowledgement shown after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

/// Validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex"))
}

/// Loose address check: something, `@`, something, `.`, something.
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Form field, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    pub fn next(&self) -> Field {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }

    pub fn prev(&self) -> Field {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Message => Field::Email,
        }
    }
}

/// The contact form's contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Check the form in the same order the page does: presence first,
    /// then the email shape.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// Validate and, on success, reset the form.
    ///
    /// Returns the acknowledgement text. The form is left untouched on
    /// failure so the visitor can fix it.
    pub fn submit(&mut self) -> Result<&'static str, ContactError> {
        self.validate()?;
        tracing::info!("contact form accepted");
        *self = Self::default();
        Ok(SUCCESS_MESSAGE)
    }
}
