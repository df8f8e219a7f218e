//! Unit test target
//!
//! Exercises the public API piece by piece: domain validation, storage
//! operations, and command parsing.

mod basic_tests;
