//! Contact form state.
//!
//! Shares the donation form's submit phases: `begin_submit` arms the pending
//! flag, the component waits out [`SIMULATED_SEND_DELAY`], then
//! `finish_submit` shows the confirmation and clears the message fields.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::time::Duration;

use super::donation::SubmitPhase;

pub const SIMULATED_SEND_DELAY: Duration = Duration::from_secs(1);

pub const SENT_MESSAGE: &str =
    "Thank you for reaching out! We'll get back to you within 24 hours.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "contact-name",
            Self::Email => "contact-email",
            Self::Subject => "contact-subject",
            Self::Message => "contact-message",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name *",
            Self::Email => "Email Address *",
            Self::Subject => "Subject",
            Self::Message => "Message *",
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "you@example.com",
            Self::Subject => "How can we help?",
            Self::Message => "Tell us more about your question or idea...",
        }
    }

    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }

    #[must_use]
    pub fn required(self) -> bool {
        !matches!(self, Self::Subject)
    }

    /// Rendered as a `<textarea>` rather than an `<input>`.
    #[must_use]
    pub fn is_multiline(self) -> bool {
        matches!(self, Self::Message)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub phase: SubmitPhase,
}

impl ContactFormState {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Required fields are filled and the email looks like `local@domain`.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        if self.is_submitting() {
            return false;
        }
        let filled = ContactField::ALL
            .into_iter()
            .filter(|field| field.required())
            .all(|field| !self.get(field).trim().is_empty());
        filled && looks_like_email(&self.email)
    }

    pub fn begin_submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.phase = SubmitPhase::Submitting;
        true
    }

    /// Confirm a pending send and clear the fields for the next message.
    pub fn finish_submit(&mut self) {
        if self.phase != SubmitPhase::Submitting {
            return;
        }
        *self = Self {
            phase: SubmitPhase::Confirmed,
            ..Self::default()
        };
    }

    pub fn dismiss_confirmation(&mut self) {
        if self.phase == SubmitPhase::Confirmed {
            self.phase = SubmitPhase::Idle;
        }
    }

    #[must_use]
    pub fn confirmation(&self) -> Option<&'static str> {
        (self.phase == SubmitPhase::Confirmed).then_some(SENT_MESSAGE)
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Sending..."
        } else {
            "Send Message"
        }
    }
}

fn looks_like_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.trim().split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
