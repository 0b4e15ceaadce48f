//! Contact form handling.
//!
//! Messages never leave the browser: a valid submission is stored under
//! `portfolio_contacts`, newest first, and counted as an analytics event.

use chrono::{DateTime, Utc};
use folio_store::json::{self, Order};
use folio_store::KeyValueStore;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::analytics::Analytics;
use crate::error::ContactError;
use crate::util::validate_email;

pub const CONTACTS_KEY: &str = "portfolio_contacts";
pub const CONTACT_LOG_CAP: usize = 50;
pub const CONTACT_SUBMIT_EVENT: &str = "contact_form_submit";

/// The fields of the contact form as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A stored contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Checks required fields in form order, then the email format.
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField { field });
            }
        }

        let email = self.email.trim();
        if !validate_email(email) {
            return Err(ContactError::InvalidEmail {
                email: email.to_string(),
            });
        }
        Ok(())
    }

    /// Validates and stores the message, recording a submit event.
    ///
    /// Stored values are trimmed. The id is the submission time in
    /// milliseconds.
    pub fn submit<S: KeyValueStore>(
        &self,
        analytics: &mut Analytics<S>,
        now: DateTime<Utc>,
    ) -> Result<ContactMessage, ContactError> {
        self.validate()?;

        let message = ContactMessage {
            id: now.timestamp_millis().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
            timestamp: now,
        };

        json::push_capped(
            analytics.store_mut(),
            CONTACTS_KEY,
            &message,
            CONTACT_LOG_CAP,
            Order::Prepend,
        );
        analytics.track_event(
            CONTACT_SUBMIT_EVENT,
            json!({ "subject": message.subject }),
            now,
        );

        tracing::info!(id = %message.id, "stored contact message");
        Ok(message)
    }
}

/// Stored contact messages, newest first.
pub fn stored_messages<S: KeyValueStore + ?Sized>(store: &S) -> Vec<ContactMessage> {
    json::read_list::<serde_json::Value, _>(store, CONTACTS_KEY)
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;
    use chrono::TimeZone;
    use folio_store::MemoryStore;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    fn form() -> ContactForm {
        ContactForm::new("Ada", " ada@example.com ", "Hello", "A message")
    }

    #[test]
    fn test_validate_ok() {
        assert_eq!(form().validate(), Ok(()));
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut form = form();
        form.subject = "   ".into();
        form.message = String::new();
        assert_eq!(
            form.validate(),
            Err(ContactError::MissingField { field: "subject" })
        );
    }

    #[test]
    fn test_validate_email() {
        let mut form = form();
        form.email = "ada.example.com".into();
        assert_eq!(
            form.validate(),
            Err(ContactError::InvalidEmail {
                email: "ada.example.com".into()
            })
        );
    }

    #[test]
    fn test_submit_stores_trimmed_message() {
        let mut analytics = Analytics::new(MemoryStore::new(), Page::Contact);
        let message = form().submit(&mut analytics, at(1_700_000_000_123)).unwrap();

        assert_eq!(message.id, "1700000000123");
        assert_eq!(message.email, "ada@example.com");
        assert_eq!(stored_messages(analytics.store()), vec![message]);

        let events = analytics.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, CONTACT_SUBMIT_EVENT);
        assert_eq!(events[0].data, json!({"subject": "Hello"}));
    }

    #[test]
    fn test_submit_newest_first_and_capped() {
        let mut analytics = Analytics::new(MemoryStore::new(), Page::Contact);
        for i in 0..(CONTACT_LOG_CAP as i64 + 3) {
            form().submit(&mut analytics, at(i)).unwrap();
        }

        let messages = stored_messages(analytics.store());
        assert_eq!(messages.len(), CONTACT_LOG_CAP);
        assert_eq!(messages[0].id, (CONTACT_LOG_CAP + 2).to_string());
        assert_eq!(messages[CONTACT_LOG_CAP - 1].id, "3");
    }

    #[test]
    fn test_invalid_submit_stores_nothing() {
        let mut analytics = Analytics::new(MemoryStore::new(), Page::Contact);
        let form = ContactForm::new("", "", "", "");

        assert!(form.submit(&mut analytics, at(0)).is_err());
        assert!(analytics.store().is_empty());
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let mut analytics = Analytics::new(MemoryStore::new(), Page::Contact);
        form().submit(&mut analytics, at(0)).unwrap();

        let raw = analytics.store().get(CONTACTS_KEY).unwrap();
        assert!(raw.contains("\"timestamp\":\"1970-01-01T00:00:00Z\""));
    }
}
