//! Unit tests for the `casewise` facade.

mod support;

mod unreachable_tests;

mod behaviour;
