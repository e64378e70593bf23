//! Unit tests for `casewise_core` types.

mod handler_tests;
mod key_tests;
