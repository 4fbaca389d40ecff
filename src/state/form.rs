//! Simulated form submission.
//!
//! Forms on the page have no backend. A submission collects the fields,
//! reports success, and the browser layer resets the form.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use serde_json::{Map, Value};

use crate::state::notification::NotificationKind;

pub const FORM_SUCCESS_MESSAGE: &str = "Form submitted successfully!";

/// Field values captured from one submit event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormSubmission {
    fields: Map<String, Value>,
}

impl FormSubmission {
    /// Collect `(name, value)` pairs. A repeated name keeps its last value.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields = fields
            .into_iter()
            .map(|(name, value)| (name.into(), Value::String(value.into())))
            .collect();
        Self { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Notification shown for every submission.
    pub fn notification(&self) -> (&'static str, NotificationKind) {
        (FORM_SUCCESS_MESSAGE, NotificationKind::Success)
    }

    /// Compact JSON of the captured fields, for debug logging.
    pub fn to_json(&self) -> String {
        Value::Object(self.fields.clone()).to_string()
    }
}
