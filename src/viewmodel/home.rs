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

//! Home screen state: the logged-in user and the greeting built from it

use std::cell::RefCell;

use tracing::debug;

use crate::core::observer::{ListenerRegistry, Observable};
use crate::core::types::{SessionUser, UserInfo};

/// State container for the home screen
///
/// Created by the caller after a successful login and dropped (after
/// [`Observable::dispose`]) on logout.
pub struct HomeViewModel {
    user: RefCell<SessionUser>,
    welcome_message: RefCell<String>,
    listeners: ListenerRegistry,
}

impl Observable for HomeViewModel {
    fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }
}

fn welcome_for(user: &SessionUser) -> String {
    format!("Welcome back, {}!", user.display_name())
}

impl HomeViewModel {
    pub fn new(user: SessionUser) -> Self {
        Self {
            welcome_message: RefCell::new(welcome_for(&user)),
            user: RefCell::new(user),
            listeners: ListenerRegistry::new(),
        }
    }

    /// Copy of the current user
    pub fn user(&self) -> SessionUser {
        self.user.borrow().clone()
    }

    pub fn welcome_message(&self) -> String {
        self.welcome_message.borrow().clone()
    }

    /// Replaces the user, rebuilds the greeting and notifies
    pub fn update_user(&self, user: SessionUser) {
        debug!(email = %user.email, "updating home user");
        *self.welcome_message.borrow_mut() = welcome_for(&user);
        *self.user.borrow_mut() = user;
        self.notify_listeners();
    }

    /// Display fields for the user card
    pub fn user_info(&self) -> UserInfo {
        self.user.borrow().info()
    }
}
