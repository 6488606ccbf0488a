//! The canonical card fields.

use serde::{Deserialize, Serialize};

/// One of the six canonical fields extracted from a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Track 1 format code (e.g. `B` for bank cards).
    FormatCode,
    /// Primary account number.
    Number,
    /// Expiration date, `YYMM`.
    Expiration,
    /// Cardholder surname.
    LastName,
    /// Cardholder given name.
    FirstName,
    /// Three-digit service code.
    ServiceCode,
}

impl Field {
    /// All canonical fields, in presence-check order.
    pub const ALL: [Field; 6] = [
        Field::FormatCode,
        Field::Number,
        Field::Expiration,
        Field::LastName,
        Field::FirstName,
        Field::ServiceCode,
    ];

    /// Returns the snake_case field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FormatCode => "format_code",
            Field::Number => "number",
            Field::Expiration => "expiration",
            Field::LastName => "last_name",
            Field::FirstName => "first_name",
            Field::ServiceCode => "service_code",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
