use std::fmt;

use thiserror::Error;

/// Acknowledgment shown after every accepted submission. Nothing is sent.
pub const SENT_MESSAGE: &str = "Message sent! (This is a UI demonstration only)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in your {0}")]
    MissingField(Field),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Checks that every field is present. Only presence is enforced, so any
    /// non-blank email text is accepted.
    pub fn submit(&self) -> Result<&'static str, ContactError> {
        let fields = [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ContactError::MissingField(*field));
        }
        Ok(SENT_MESSAGE)
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }
}

/// Single dialog; open while it holds a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    message: Option<String>,
}

impl ModalState {
    pub fn open(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn close(&mut self) {
        self.message = None;
    }

    pub fn is_open(&self) -> bool {
        self.message.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn complete_form_is_acknowledged() {
        assert_eq!(filled().submit(), Ok(SENT_MESSAGE));
        assert_eq!(
            SENT_MESSAGE,
            "Message sent! (This is a UI demonstration only)"
        );
    }

    #[test]
    fn email_format_is_not_checked() {
        let mut form = filled();
        form.set(Field::Email, "not an email".to_string());
        assert!(form.submit().is_ok());
    }

    #[test]
    fn blank_fields_are_reported_in_order() {
        assert_eq!(
            ContactForm::default().submit(),
            Err(ContactError::MissingField(Field::Name))
        );
        let mut form = filled();
        form.set(Field::Message, "   \n".to_string());
        assert_eq!(form.submit(), Err(ContactError::MissingField(Field::Message)));
        assert_eq!(
            ContactError::MissingField(Field::Message).to_string(),
            "Please fill in your message"
        );
    }

    #[test]
    fn field_accessors() {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Ada".to_string());
        assert_eq!(form.get(Field::Name), "Ada");
        assert_eq!(form.get(Field::Email), "");
    }

    #[test]
    fn modal_open_close_is_idempotent() {
        let mut modal = ModalState::default();
        assert!(!modal.is_open());
        modal.close();
        assert_eq!(modal, ModalState::default());

        modal.open(SENT_MESSAGE);
        modal.open(SENT_MESSAGE);
        assert!(modal.is_open());
        assert_eq!(modal.message(), Some(SENT_MESSAGE));

        modal.close();
        modal.close();
        assert!(!modal.is_open());
        assert_eq!(modal.message(), None);
    }

    #[test]
    fn resubmitting_shows_the_same_text() {
        let mut modal = ModalState::default();
        let form = filled();
        modal.open(form.submit().expect("filled form"));
        modal.close();
        modal.open(form.submit().expect("filled form"));
        assert_eq!(modal.message(), Some(SENT_MESSAGE));
    }
}
