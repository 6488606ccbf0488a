//! Accumulator for per-field validation messages.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::field::Field;

/// Maps a field to the ordered list of messages recorded against it.
///
/// Fields keep the order in which their first message was added. Messages
/// are never deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorCollector {
    errors: Vec<(Field, Vec<String>)>,
}

impl ErrorCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the list for `field`, creating the list if needed.
    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        let message = message.into();
        match self.errors.iter_mut().find(|(f, _)| *f == field) {
            Some((_, messages)) => messages.push(message),
            None => self.errors.push((field, vec![message])),
        }
    }

    /// Returns the number of distinct fields in error.
    pub fn count(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no field has been recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the full field to messages mapping, in field insertion order.
    pub fn messages(&self) -> &[(Field, Vec<String>)] {
        &self.errors
    }

    /// Returns the messages recorded for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&[String]> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, messages)| messages.as_slice())
    }

    /// Returns true if at least one message is recorded for `field`.
    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// Returns every message prefixed with its field name,
    /// e.g. `"first_name was not found"`.
    pub fn full_messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .flat_map(|(field, messages)| {
                messages
                    .iter()
                    .map(move |message| format!("{} {}", field, message))
            })
            .collect()
    }

    /// Renders the mapping as a JSON object of field name to message array.
    pub fn to_json(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .errors
            .iter()
            .map(|(field, messages)| {
                (
                    field.as_str().to_string(),
                    serde_json::Value::from(messages.clone()),
                )
            })
            .collect();
        serde_json::Value::Object(map)
    }
}

impl std::fmt::Display for ErrorCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, message) in self.full_messages().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", message)?;
        }
        Ok(())
    }
}

impl Serialize for ErrorCollector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, messages) in &self.errors {
            map.serialize_entry(field, messages)?;
        }
        map.end()
    }
}
