// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Collaborators behind the composite actions
//!
//! The view models only know these traits. The demo implementations accept
//! everything, which is all the login and settings screens ever needed;
//! tests swap in failing ones to drive the error paths.

use std::cell::RefCell;

use tracing::debug;

use super::error::OperationError;
use crate::core::types::{SessionUser, Settings};

/// Checks credentials and produces the logged-in user
pub trait Authenticator {
    fn authenticate(&self, email: &str, password: &str) -> Result<SessionUser, OperationError>;
}

/// Accepts any credentials that made it past validation
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoAuthenticator;

impl Authenticator for DemoAuthenticator {
    fn authenticate(&self, email: &str, _password: &str) -> Result<SessionUser, OperationError> {
        Ok(SessionUser::from_email(email))
    }
}

/// Receives settings when the user saves them
pub trait SettingsStore {
    fn save(&self, settings: &Settings) -> Result<(), OperationError>;
}

/// Keeps the last saved settings in memory
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    saved: RefCell<Option<Settings>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently saved settings, if any
    pub fn last_saved(&self) -> Option<Settings> {
        self.saved.borrow().clone()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn save(&self, settings: &Settings) -> Result<(), OperationError> {
        debug!(%settings, "storing settings in memory");
        *self.saved.borrow_mut() = Some(settings.clone());
        Ok(())
    }
}
