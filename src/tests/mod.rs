//! Test modules for the Kumu gradebook.
//!
//! This module contains the cross-component test suites:
//! - Property-based tests of the record store using proptest
//! - Configuration loading and validation tests
//! - Error reporting tests
//! - Shell session tests
//! - Shared fixtures and strategies

pub mod config_tests;
pub mod shell_tests;
pub mod test_utils;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{fields_strategy, name_strategy, TestFixture};
