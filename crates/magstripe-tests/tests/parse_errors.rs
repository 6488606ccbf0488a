//! Structural error tests.
//!
//! Verifies that each kind of malformed swipe is rejected at construction
//! with the matching error kind and the offending input attached.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p magstripe-tests --test parse_errors
//! ```

use magstripe_track::{ParseError, ParseErrorKind, TrackRecord};

/// Test that non-track input is rejected as not a credit card.
#[test]
fn test_not_a_credit_card() {
    let err = TrackRecord::parse("foo").unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::NotACreditCard);
    assert_eq!(err.kind().code(), "CCTD:NotACreditCard");
    assert_eq!(
        err,
        ParseError::NotACreditCard {
            input: "foo".to_string()
        }
    );
}

/// Test envelope variants that are close to valid but not anchored correctly.
#[test]
fn test_envelope_must_cover_whole_input() {
    let valid = "%B4111111111111111^LAST/FIRST^15031019999900888000000?;4111111111111111=150310199999888?";
    assert!(TrackRecord::parse(valid).is_ok());

    let cases = vec![
        format!(" {}", valid),
        format!("{} ", valid),
        format!("{}\n", valid),
        valid.trim_start_matches('%').to_string(),
        valid.trim_end_matches('?').to_string(),
        valid.replace("?;", ";"),
    ];

    for input in cases {
        let err = TrackRecord::parse(&input).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::NotACreditCard, "input: {:?}", input);
        assert_eq!(err.input(), input);
    }
}

/// Test that a bad track 1 body is reported with the body, not the whole swipe.
#[test]
fn test_unparseable_track_one() {
    let cases = vec![
        "%B4111111111111111LAST/FIRST^1503101?;4111111111111111=1503101?",
        "%B4111111111111111^LASTFIRST^1503101?;4111111111111111=1503101?",
        "%B4111111111111111^LAST/FIRST^150310?;4111111111111111=1503101?",
        "%?;4111111111111111=1503101?",
    ];

    for input in cases {
        let err = TrackRecord::parse(input).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::UnparseableTrackOne, "input: {}", input);
        let (track1, _) = magstripe_track::split_tracks(input).unwrap();
        assert_eq!(err.input(), track1);
    }
}

/// Test that a bad track 2 body is reported once track 1 parses.
#[test]
fn test_unparseable_track_two() {
    let cases = vec![
        ("%B4111111111111111^LAST/FIRST^1503101?;4111111111111111?", "4111111111111111"),
        ("%B4111111111111111^LAST/FIRST^1503101?;4111=150310?", "4111=150310"),
        ("%B4111111111111111^LAST/FIRST^1503101?;41x1=1503101?", "41x1=1503101"),
        ("%B4111111111111111^LAST/FIRST^1503101?;?", ""),
    ];

    for (input, track2) in cases {
        let err = TrackRecord::parse(input).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::UnparseableTrackTwo, "input: {}", input);
        assert_eq!(err.input(), track2);
        assert_eq!(err.to_string(), format!("unparseable track two: {:?}", track2));
    }
}

/// Test that account numbers must be ASCII digits on either track.
#[test]
fn test_non_ascii_digits_are_rejected() {
    let arabic = "\u{0664}\u{0661}\u{0661}\u{0661}";

    let input = format!("%B{n}^LAST/FIRST^1503101?;{n}=1503101?", n = arabic);
    let err = TrackRecord::parse(&input).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::UnparseableTrackOne);
    assert_eq!(err.input(), format!("B{}^LAST/FIRST^1503101", arabic));

    let input = format!("%B4111^LAST/FIRST^1503101?;{}=1503101?", arabic);
    let err = TrackRecord::parse(&input).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::UnparseableTrackTwo);
    assert_eq!(err.input(), format!("{}=1503101", arabic));
}
