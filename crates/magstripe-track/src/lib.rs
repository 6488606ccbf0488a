//! Magnetic-Stripe Track Data Library
//!
//! This crate parses and validates payment-card track data (ISO/IEC 7811/7813)
//! as read from a magnetic-stripe reader.
//!
//! # Overview
//!
//! A raw swipe carries two tracks inside one envelope, `%<track 1>?;<track 2>?`:
//!
//! - **Track 1**: format code, account number, `LAST/FIRST` name, expiration,
//!   service code and discretionary data
//! - **Track 2**: account number, expiration, service code and discretionary data
//!
//! Parsing is eager and all-or-nothing. Validation is on demand and returns
//! per-field findings rather than failing.
//!
//! # Example
//!
//! ```
//! use magstripe_track::{Field, TrackRecord};
//!
//! let record = TrackRecord::parse(
//!     "%B2222211111111111^LAST/^15039999900888000000?;4111111111111111=150310199999888?",
//! )
//! .unwrap();
//!
//! let report = record.validate();
//! assert!(!report.is_valid());
//! assert_eq!(report.errors.count(), 3);
//! assert_eq!(
//!     report.errors.get(Field::FirstName),
//!     Some(&["was not found".to_string()][..])
//! );
//! ```
//!
//! # Modules
//!
//! - [`error`]: Parse error types
//! - [`field`]: The six canonical card fields
//! - [`collector`]: Per-field message accumulator
//! - [`track`]: Track 1 and track 2 grammars and sub-records
//! - [`record`]: Parsed swipe and canonical field promotion
//! - [`validation`]: Full and minimal validity checks

pub mod collector;
pub mod error;
pub mod field;
pub mod record;
pub mod track;
pub mod validation;

// Re-export commonly used types at the crate root
pub use collector::ErrorCollector;
pub use error::{ParseError, ParseErrorKind};
pub use field::Field;
pub use record::{CardFields, TrackRecord, CENTURY};
pub use track::{split_tracks, Track1Record, Track2Record};
pub use validation::{validate_record, ValidationReport};
