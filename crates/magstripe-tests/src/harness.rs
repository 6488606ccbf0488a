//! Assertions shared by the integration tests.

use magstripe_track::{Field, TrackRecord};

use crate::fixtures::GoldenSwipe;

/// Parse a golden swipe, panicking with its name on failure.
pub fn parse_golden(swipe: &GoldenSwipe) -> TrackRecord {
    TrackRecord::parse(&swipe.track_data)
        .unwrap_or_else(|e| panic!("golden swipe '{}' failed to parse: {}", swipe.name, e))
}

/// Assert that a golden swipe parses and validates exactly as recorded.
pub fn assert_matches_golden(swipe: &GoldenSwipe) {
    let record = parse_golden(swipe);
    let name = &swipe.name;

    assert_eq!(record.track_data(), swipe.track_data, "{}: track_data", name);
    assert_eq!(record.track1().raw(), swipe.track1, "{}: track1 raw", name);
    assert_eq!(record.track2().raw(), swipe.track2, "{}: track2 raw", name);

    for field in Field::ALL {
        assert_eq!(
            record.fields().get(field),
            swipe.fields.get(field),
            "{}: field {}",
            name,
            field
        );
    }
    assert_eq!(record.month(), swipe.month, "{}: month", name);
    assert_eq!(record.year(), swipe.year, "{}: year", name);

    let report = record.validate();
    assert_eq!(report.is_valid(), swipe.valid, "{}: is_valid", name);
    assert_eq!(
        report.is_minimally_valid(),
        swipe.minimally_valid,
        "{}: is_minimally_valid",
        name
    );
    assert_eq!(report.errors.to_json(), swipe.errors, "{}: errors", name);
}
