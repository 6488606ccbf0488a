//! Track record validation logic.

use serde::Serialize;

use crate::collector::ErrorCollector;
use crate::field::Field;
use crate::record::TrackRecord;

/// Message recorded for a field that is absent or empty.
pub const NOT_FOUND: &str = "was not found";

/// Message recorded for a field whose track 1 and track 2 values disagree.
pub const DIFFERS_BETWEEN_TRACKS: &str = "differs between tracks one and two";

/// Result of validating a [`TrackRecord`].
///
/// Each call to [`validate_record`] builds a new report; nothing is cached
/// on the record itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Findings per field.
    pub errors: ErrorCollector,
    tracks_present: bool,
}

impl ValidationReport {
    /// Returns true if no field is in error.
    pub fn is_valid(&self) -> bool {
        self.errors.count() == 0
    }

    /// Returns true if the swipe is usable for charging: both track bodies
    /// are non-empty and neither the number nor the expiration is in error.
    /// Name and service code findings do not count against this.
    pub fn is_minimally_valid(&self) -> bool {
        self.tracks_present
            && !self.errors.contains(Field::Number)
            && !self.errors.contains(Field::Expiration)
    }
}

/// Validates a parsed track record.
///
/// # Example
/// ```
/// use magstripe_track::{Field, TrackRecord};
/// use magstripe_track::validation::validate_record;
///
/// let record = TrackRecord::parse(
///     "%B4111111111111111^/^1503110?;4111111111111111=150310199999888?",
/// )
/// .unwrap();
///
/// let report = validate_record(&record);
/// assert!(!report.is_valid());
/// assert!(report.is_minimally_valid());
/// assert!(report.errors.contains(Field::FirstName));
/// ```
pub fn validate_record(record: &TrackRecord) -> ValidationReport {
    let mut errors = ErrorCollector::new();

    check_presence(record, &mut errors);
    check_cross_track(record, &mut errors);

    ValidationReport {
        errors,
        tracks_present: !record.track1().raw().is_empty() && !record.track2().raw().is_empty(),
    }
}

/// Records every canonical field that is absent or empty.
fn check_presence(record: &TrackRecord, errors: &mut ErrorCollector) {
    for field in Field::ALL {
        if record.fields().is_missing(field) {
            errors.add(field, NOT_FOUND);
        }
    }
}

/// Compares the track 1 and track 2 values of the redundant fields.
///
/// This looks at the sub-records, not the canonical values, so it reports
/// disagreement even when the canonical value is well-formed.
fn check_cross_track(record: &TrackRecord, errors: &mut ErrorCollector) {
    let (track1, track2) = (record.track1(), record.track2());
    let pairs = [
        (Field::Number, &track1.number, &track2.number),
        (Field::Expiration, &track1.expiration, &track2.expiration),
        (Field::ServiceCode, &track1.service_code, &track2.service_code),
    ];
    for (field, one, two) in pairs {
        if one != two {
            errors.add(field, DIFFERS_BETWEEN_TRACKS);
        }
    }
}
