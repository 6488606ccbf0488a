//! Track 1 / Track 2 sub-records and the grammars that produce them.
//!
//! A raw swipe carries two tracks inside a single envelope:
//!
//! ```text
//! %<track 1 body>?;<track 2 body>?
//! ```
//!
//! Each body is matched against its own fixed grammar. All matching is
//! anchored to the whole input; partial matches are rejected.

use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde::Serialize;

use crate::error::ParseError;

/// Envelope pattern splitting a swipe into its two track bodies.
pub const ENVELOPE_PATTERN: &str = r"^%(.*)\?;(.*)\?$";

/// Track 1 pattern: format code, number, `last/first` name, expiration,
/// service code, discretionary data.
///
/// Account numbers are ASCII digits only.
pub const TRACK1_PATTERN: &str = r"^(.)([0-9]*)\^([^/]*)/(.*)\^(.{4})(.{3})(.*)$";

/// Track 2 pattern: number, expiration, service code, discretionary data.
pub const TRACK2_PATTERN: &str = r"^([0-9]*)=(.{4})(.{3})(.*)$";

static ENVELOPE_REGEX: OnceLock<Regex> = OnceLock::new();
static TRACK1_REGEX: OnceLock<Regex> = OnceLock::new();
static TRACK2_REGEX: OnceLock<Regex> = OnceLock::new();

fn envelope_regex() -> &'static Regex {
    ENVELOPE_REGEX.get_or_init(|| Regex::new(ENVELOPE_PATTERN).expect("invalid regex pattern"))
}

fn track1_regex() -> &'static Regex {
    TRACK1_REGEX.get_or_init(|| Regex::new(TRACK1_PATTERN).expect("invalid regex pattern"))
}

fn track2_regex() -> &'static Regex {
    TRACK2_REGEX.get_or_init(|| Regex::new(TRACK2_PATTERN).expect("invalid regex pattern"))
}

/// Collects capture groups 1.. as owned strings. Groups that did not
/// participate become empty strings.
fn capture_groups(caps: &Captures<'_>) -> Vec<String> {
    caps.iter()
        .skip(1)
        .map(|m| m.map(|m| m.as_str().to_string()).unwrap_or_default())
        .collect()
}

/// Splits a raw swipe into its track 1 and track 2 bodies.
///
/// # Example
/// ```
/// use magstripe_track::track::split_tracks;
///
/// let (t1, t2) = split_tracks("%B4111^LAST/FIRST^1503101?;4111=1503101?").unwrap();
/// assert_eq!(t1, "B4111^LAST/FIRST^1503101");
/// assert_eq!(t2, "4111=1503101");
/// ```
pub fn split_tracks(input: &str) -> Result<(&str, &str), ParseError> {
    let caps = envelope_regex()
        .captures(input)
        .ok_or_else(|| ParseError::NotACreditCard {
            input: input.to_string(),
        })?;
    match (caps.get(1), caps.get(2)) {
        (Some(t1), Some(t2)) => Ok((t1.as_str(), t2.as_str())),
        _ => Err(ParseError::NotACreditCard {
            input: input.to_string(),
        }),
    }
}

/// Fields decoded from a track 1 body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track1Record {
    raw: String,
    captures: Vec<String>,
    /// Single-character format code.
    pub format_code: String,
    /// Account number digits.
    pub number: String,
    /// Surname, text before the `/`.
    pub last_name: String,
    /// Given name, text after the `/`.
    pub first_name: String,
    /// Four characters, `YYMM`.
    pub expiration: String,
    /// Three characters.
    pub service_code: String,
    /// Everything after the service code.
    pub discretionary: String,
}

impl Track1Record {
    /// Parses a track 1 body (the text between `%` and `?;`).
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let caps = track1_regex()
            .captures(raw)
            .ok_or_else(|| ParseError::UnparseableTrackOne {
                track: raw.to_string(),
            })?;
        let captures = capture_groups(&caps);
        let [format_code, number, last_name, first_name, expiration, service_code, discretionary] =
            <[String; 7]>::try_from(captures.clone()).map_err(|_| {
                ParseError::UnparseableTrackOne {
                    track: raw.to_string(),
                }
            })?;

        Ok(Self {
            raw: raw.to_string(),
            captures,
            format_code,
            number,
            last_name,
            first_name,
            expiration,
            service_code,
            discretionary,
        })
    }

    /// The track 1 body exactly as it appeared in the swipe.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Capture groups 1 through 7 of the track 1 grammar, in order.
    pub fn captures(&self) -> &[String] {
        &self.captures
    }
}

/// Fields decoded from a track 2 body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track2Record {
    raw: String,
    captures: Vec<String>,
    /// Account number digits.
    pub number: String,
    /// Four characters, `YYMM`.
    pub expiration: String,
    /// Three characters.
    pub service_code: String,
    /// Everything after the service code.
    pub discretionary: String,
}

impl Track2Record {
    /// Parses a track 2 body (the text between `;` and the final `?`).
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let caps = track2_regex()
            .captures(raw)
            .ok_or_else(|| ParseError::UnparseableTrackTwo {
                track: raw.to_string(),
            })?;
        let captures = capture_groups(&caps);
        let [number, expiration, service_code, discretionary] =
            <[String; 4]>::try_from(captures.clone()).map_err(|_| {
                ParseError::UnparseableTrackTwo {
                    track: raw.to_string(),
                }
            })?;

        Ok(Self {
            raw: raw.to_string(),
            captures,
            number,
            expiration,
            service_code,
            discretionary,
        })
    }

    /// The track 2 body exactly as it appeared in the swipe.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Capture groups 1 through 4 of the track 2 grammar, in order.
    pub fn captures(&self) -> &[String] {
        &self.captures
    }
}
