//! The parsed swipe and its canonical fields.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::field::Field;
use crate::track::{split_tracks, Track1Record, Track2Record};
use crate::validation::{validate_record, ValidationReport};

/// Century prefixed to the two-digit expiration year.
pub const CENTURY: &str = "20";

/// The six canonical card fields.
///
/// `None` means the field is absent; `Some("")` means it was present but
/// empty. Validation treats both as "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFields {
    /// Format code, from track 1.
    pub format_code: Option<String>,
    /// Account number, from track 2.
    pub number: Option<String>,
    /// Expiration `YYMM`, from track 2.
    pub expiration: Option<String>,
    /// Surname, from track 1.
    pub last_name: Option<String>,
    /// Given name, from track 1.
    pub first_name: Option<String>,
    /// Service code, from track 2.
    pub service_code: Option<String>,
}

impl CardFields {
    /// Promotes canonical values from the two tracks: format code and names
    /// from track 1; number, expiration and service code from track 2.
    pub fn from_tracks(track1: &Track1Record, track2: &Track2Record) -> Self {
        Self {
            format_code: Some(track1.format_code.clone()),
            number: Some(track2.number.clone()),
            expiration: Some(track2.expiration.clone()),
            last_name: Some(track1.last_name.clone()),
            first_name: Some(track1.first_name.clone()),
            service_code: Some(track2.service_code.clone()),
        }
    }

    /// Returns the value of `field`.
    pub fn get(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::FormatCode => &self.format_code,
            Field::Number => &self.number,
            Field::Expiration => &self.expiration,
            Field::LastName => &self.last_name,
            Field::FirstName => &self.first_name,
            Field::ServiceCode => &self.service_code,
        };
        value.as_deref()
    }

    /// Returns true if `field` is absent or empty.
    pub fn is_missing(&self, field: Field) -> bool {
        self.get(field).map_or(true, str::is_empty)
    }

    /// Four-digit expiration year, e.g. `"2015"` for expiration `1503`.
    ///
    /// Returns `None` when the expiration is absent or empty.
    pub fn year(&self) -> Option<String> {
        let expiration = self.non_empty_expiration()?;
        Some(format!("{}{}", CENTURY, char_slice(expiration, 0, 2)))
    }

    /// Two-digit expiration month, e.g. `"03"` for expiration `1503`.
    ///
    /// Returns `None` when the expiration is absent or empty.
    pub fn month(&self) -> Option<String> {
        let expiration = self.non_empty_expiration()?;
        Some(char_slice(expiration, 2, 4).to_string())
    }

    fn non_empty_expiration(&self) -> Option<&str> {
        self.expiration.as_deref().filter(|e| !e.is_empty())
    }
}

/// Characters `start..end` of `s`, clamped to its length.
fn char_slice(s: &str, start: usize, end: usize) -> &str {
    let offset = |n: usize| s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    &s[offset(start)..offset(end)]
}

/// A swipe parsed into both tracks and its canonical fields.
///
/// Construction parses eagerly and fails on the first structural problem;
/// a `TrackRecord` always holds two successfully parsed tracks.
///
/// # Example
/// ```
/// use magstripe_track::TrackRecord;
///
/// let record: TrackRecord =
///     "%B4111111111111111^LAST/FIRST^15031019999900888000000?;4111111111111111=150310199999888?"
///         .parse()
///         .unwrap();
///
/// assert_eq!(record.number(), Some("4111111111111111"));
/// assert_eq!(record.year().as_deref(), Some("2015"));
/// assert!(record.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackRecord {
    track_data: String,
    track1: Track1Record,
    track2: Track2Record,
    fields: CardFields,
}

impl TrackRecord {
    /// Parses raw track data.
    ///
    /// # Errors
    /// * [`ParseError::NotACreditCard`] if the envelope does not match.
    /// * [`ParseError::UnparseableTrackOne`] if the track 1 body does not match.
    /// * [`ParseError::UnparseableTrackTwo`] if the track 2 body does not match.
    pub fn parse(track_data: &str) -> Result<Self, ParseError> {
        let (raw1, raw2) = split_tracks(track_data)?;
        let track1 = Track1Record::parse(raw1)?;
        let track2 = Track2Record::parse(raw2)?;
        let fields = CardFields::from_tracks(&track1, &track2);

        Ok(Self {
            track_data: track_data.to_string(),
            track1,
            track2,
            fields,
        })
    }

    /// The swipe exactly as supplied.
    pub fn track_data(&self) -> &str {
        &self.track_data
    }

    /// The parsed track 1 sub-record.
    pub fn track1(&self) -> &Track1Record {
        &self.track1
    }

    /// The parsed track 2 sub-record.
    pub fn track2(&self) -> &Track2Record {
        &self.track2
    }

    /// The canonical fields.
    pub fn fields(&self) -> &CardFields {
        &self.fields
    }

    /// Canonical format code.
    pub fn format_code(&self) -> Option<&str> {
        self.fields.get(Field::FormatCode)
    }

    /// Canonical account number.
    pub fn number(&self) -> Option<&str> {
        self.fields.get(Field::Number)
    }

    /// Canonical expiration, `YYMM`.
    pub fn expiration(&self) -> Option<&str> {
        self.fields.get(Field::Expiration)
    }

    /// Cardholder surname.
    pub fn last_name(&self) -> Option<&str> {
        self.fields.get(Field::LastName)
    }

    /// Cardholder given name.
    pub fn first_name(&self) -> Option<&str> {
        self.fields.get(Field::FirstName)
    }

    /// Canonical service code.
    pub fn service_code(&self) -> Option<&str> {
        self.fields.get(Field::ServiceCode)
    }

    /// See [`CardFields::year`].
    pub fn year(&self) -> Option<String> {
        self.fields.year()
    }

    /// See [`CardFields::month`].
    pub fn month(&self) -> Option<String> {
        self.fields.month()
    }

    /// Runs presence and cross-track checks, returning a fresh report.
    pub fn validate(&self) -> ValidationReport {
        validate_record(self)
    }

    /// Returns true if every field is present and both tracks agree.
    pub fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }

    /// See [`ValidationReport::is_minimally_valid`].
    pub fn is_minimally_valid(&self) -> bool {
        self.validate().is_minimally_valid()
    }
}

impl FromStr for TrackRecord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for TrackRecord {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;
    use pretty_assertions::assert_eq;

    const VISA: &str =
        "%B4111111111111111^LAST/FIRST^15031019999900888000000?;4111111111111111=150310199999888?";

    fn fields_with_expiration(expiration: Option<&str>) -> CardFields {
        CardFields {
            expiration: expiration.map(str::to_string),
            ..CardFields::default()
        }
    }

    #[test]
    fn test_parse_promotes_fields() {
        let record = TrackRecord::parse(VISA).unwrap();
        assert_eq!(record.track_data(), VISA);
        assert_eq!(record.format_code(), Some("B"));
        assert_eq!(record.number(), Some("4111111111111111"));
        assert_eq!(record.expiration(), Some("1503"));
        assert_eq!(record.last_name(), Some("LAST"));
        assert_eq!(record.first_name(), Some("FIRST"));
        assert_eq!(record.service_code(), Some("101"));
        assert_eq!(record.month().as_deref(), Some("03"));
        assert_eq!(record.year().as_deref(), Some("2015"));
    }

    #[test]
    fn test_canonical_values_come_from_track2() {
        let record = TrackRecord::parse(
            "%B2222211111111111^LAST/^15039999900888000000?;4111111111111111=150310199999888?",
        )
        .unwrap();
        assert_eq!(record.track1().number, "2222211111111111");
        assert_eq!(record.number(), Some("4111111111111111"));
        assert_eq!(record.track1().service_code, "999");
        assert_eq!(record.service_code(), Some("101"));
        assert_eq!(record.first_name(), Some(""));
    }

    #[test]
    fn test_parse_error_order() {
        let err = TrackRecord::parse("foo").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::NotACreditCard);

        let err = TrackRecord::parse("%garbage?;4111=1503101?").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::UnparseableTrackOne);
        assert_eq!(err.input(), "garbage");

        // Track 1 is checked first even when both are bad.
        let err = TrackRecord::parse("%garbage?;garbage?").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::UnparseableTrackOne);

        let err = TrackRecord::parse("%B4111^LAST/FIRST^1503101?;garbage?").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::UnparseableTrackTwo);
        assert_eq!(err.input(), "garbage");
    }

    #[test]
    fn test_from_str_and_try_from() {
        let a: TrackRecord = VISA.parse().unwrap();
        let b = TrackRecord::try_from(VISA).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_year_month_without_expiration() {
        let fields = fields_with_expiration(None);
        assert_eq!(fields.year(), None);
        assert_eq!(fields.month(), None);

        let fields = fields_with_expiration(Some(""));
        assert_eq!(fields.year(), None);
        assert_eq!(fields.month(), None);
    }

    #[test]
    fn test_year_month_short_expiration() {
        let fields = fields_with_expiration(Some("15"));
        assert_eq!(fields.year().as_deref(), Some("2015"));
        assert_eq!(fields.month().as_deref(), Some(""));

        let fields = fields_with_expiration(Some("1"));
        assert_eq!(fields.year().as_deref(), Some("201"));
        assert_eq!(fields.month().as_deref(), Some(""));
    }

    #[test]
    fn test_year_month_multibyte_expiration() {
        let fields = fields_with_expiration(Some("é5ü3"));
        assert_eq!(fields.year().as_deref(), Some("20é5"));
        assert_eq!(fields.month().as_deref(), Some("ü3"));
    }

    #[test]
    fn test_is_missing() {
        let fields = CardFields {
            number: Some("4111".to_string()),
            first_name: Some(String::new()),
            ..CardFields::default()
        };
        assert!(!fields.is_missing(Field::Number));
        assert!(fields.is_missing(Field::FirstName));
        assert!(fields.is_missing(Field::LastName));
    }
}
