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

//! Test helpers shared by the view model suites

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::core::observer::{Listener, Observable};
use crate::core::types::{SessionUser, Settings};
use crate::viewmodel::error::OperationError;
use crate::viewmodel::services::{Authenticator, SettingsStore};

/// Registers a listener on `container` and returns its call counter
pub fn count_notifications(container: &impl Observable) -> Rc<Cell<usize>> {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let listener: Listener = Rc::new(move || counter.set(counter.get() + 1));
    container.add_listener(listener);
    calls
}

/// Authenticator that always refuses
pub struct RejectingAuthenticator(pub &'static str);

impl Authenticator for RejectingAuthenticator {
    fn authenticate(&self, _email: &str, _password: &str) -> Result<SessionUser, OperationError> {
        Err(OperationError::Rejected(self.0.to_string()))
    }
}

/// Authenticator that remembers the credentials it saw
#[derive(Default)]
pub struct RecordingAuthenticator {
    pub seen: RefCell<Vec<(String, String)>>,
}

impl Authenticator for RecordingAuthenticator {
    fn authenticate(&self, email: &str, password: &str) -> Result<SessionUser, OperationError> {
        self.seen
            .borrow_mut()
            .push((email.to_string(), password.to_string()));
        Ok(SessionUser::from_email(email))
    }
}

/// Store that is never reachable
pub struct OfflineStore;

impl SettingsStore for OfflineStore {
    fn save(&self, _settings: &Settings) -> Result<(), OperationError> {
        Err(OperationError::Unavailable("disk offline".to_string()))
    }
}
