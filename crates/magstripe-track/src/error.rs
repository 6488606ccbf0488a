//! Error types for track data parsing.

use thiserror::Error;

/// The structural failure classes for raw track data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The input is not wrapped in the `%...?;...?` envelope.
    NotACreditCard,
    /// The track 1 body does not match the track 1 grammar.
    UnparseableTrackOne,
    /// The track 2 body does not match the track 2 grammar.
    UnparseableTrackTwo,
}

impl ParseErrorKind {
    /// Returns the stable error code string (e.g., "CCTD:NotACreditCard").
    pub fn code(&self) -> &'static str {
        match self {
            ParseErrorKind::NotACreditCard => "CCTD:NotACreditCard",
            ParseErrorKind::UnparseableTrackOne => "CCTD:UnparseableTrackOne",
            ParseErrorKind::UnparseableTrackTwo => "CCTD:UnparseableTrackTwo",
        }
    }
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error returned when raw track data cannot be parsed.
///
/// Parsing is all-or-nothing: any of these aborts construction of a
/// [`TrackRecord`](crate::record::TrackRecord). Each variant carries the
/// input that failed to match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The whole swipe did not match the envelope.
    #[error("not credit card track data: {input:?}")]
    NotACreditCard {
        /// The full raw input.
        input: String,
    },

    /// The track 1 body did not match its grammar.
    #[error("unparseable track one: {track:?}")]
    UnparseableTrackOne {
        /// The track 1 body.
        track: String,
    },

    /// The track 2 body did not match its grammar.
    #[error("unparseable track two: {track:?}")]
    UnparseableTrackTwo {
        /// The track 2 body.
        track: String,
    },
}

impl ParseError {
    /// Returns the failure class of this error.
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::NotACreditCard { .. } => ParseErrorKind::NotACreditCard,
            ParseError::UnparseableTrackOne { .. } => ParseErrorKind::UnparseableTrackOne,
            ParseError::UnparseableTrackTwo { .. } => ParseErrorKind::UnparseableTrackTwo,
        }
    }

    /// Returns the input that failed to match.
    pub fn input(&self) -> &str {
        match self {
            ParseError::NotACreditCard { input } => input,
            ParseError::UnparseableTrackOne { track } => track,
            ParseError::UnparseableTrackTwo { track } => track,
        }
    }
}
