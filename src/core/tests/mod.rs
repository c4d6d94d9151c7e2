//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Listener registry tests
//! - Field validation tests
//! - Type tests (SessionUser, Settings, FlowPhase)
//! - Property tests for validators and notification order

#[cfg(test)]
mod observer_tests;
