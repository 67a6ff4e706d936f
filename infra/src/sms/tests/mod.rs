//! Unit tests for SMS module

mod adapter_tests;
