//! Magstripe Integration Test Infrastructure
//!
//! This crate holds the golden swipe fixtures and shared assertions used by
//! the integration and property tests:
//!
//! - Golden: every swipe in `golden/swipes.json` parses and validates as recorded
//! - Errors: malformed envelopes and track bodies are rejected with the right kind
//! - **Properties**: arbitrary input never panics and validation is repeatable
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p magstripe-tests
//! ```

pub mod fixtures;
pub mod harness;

pub use fixtures::{GoldenFixtures, GoldenSwipe};
pub use harness::{assert_matches_golden, parse_golden};
