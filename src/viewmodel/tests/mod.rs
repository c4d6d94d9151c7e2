//! View model tests
//!
//! One suite per flow container, plus shared helpers for counting
//! notifications and injecting failing collaborators.

#[cfg(test)]
mod helpers;
