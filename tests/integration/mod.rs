//! Integration tests
//!
//! Full-router tests grouped by API area.
