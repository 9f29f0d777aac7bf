//! Integration tests for CSV parsing
//!
//! These tests run whole documents through the parser, covering header
//! fallback, partial-row tolerance and the quoting rules together.
