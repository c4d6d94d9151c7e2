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

//! Login flow state
//!
//! Holds the email/password form, per-field errors, the flow-level error
//! and the loading flag. The view registers a listener, forwards edits as
//! [`LoginEdit`]s and calls [`LoginViewModel::login`] when the button is
//! pressed.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::services::{Authenticator, DemoAuthenticator};
use crate::core::observer::{ListenerRegistry, Observable};
use crate::core::types::{ActionOutcome, FlowPhase, SessionUser};
use crate::core::validator::{field_error, validate_email, validate_password};

/// A single edit coming from the login form
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LoginEdit {
    Email(String),
    Password(String),
}

/// Everything the login screen renders
///
/// Serialises without the password.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct LoginState {
    pub email: String,
    #[serde(skip)]
    pub password: String,
    pub email_error: String,
    pub password_error: String,
    /// Flow-level failure from the authenticator
    pub login_error: String,
    pub is_loading: bool,
    pub phase: FlowPhase,
}

impl LoginState {
    fn clear_errors(&mut self) {
        self.email_error.clear();
        self.password_error.clear();
        self.login_error.clear();
    }

    /// Clears errors left by the last attempt once the user edits again
    fn begin_edit(&mut self) {
        if self.phase.is_settled() {
            self.clear_errors();
            self.phase = FlowPhase::Idle;
        }
    }

    /// Runs both validators and records every failure before returning
    fn run_validators(&mut self) -> bool {
        let email = validate_email(&self.email);
        let password = validate_password(&self.password);

        self.email_error = field_error(&email);
        self.password_error = field_error(&password);

        email.is_ok() && password.is_ok()
    }
}

/// State container for the login screen
pub struct LoginViewModel {
    state: RefCell<LoginState>,
    listeners: ListenerRegistry,
    authenticator: Rc<dyn Authenticator>,
}

impl Observable for LoginViewModel {
    fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }
}

impl Default for LoginViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginViewModel {
    /// Creates an empty login form backed by [`DemoAuthenticator`]
    pub fn new() -> Self {
        Self::with_authenticator(Rc::new(DemoAuthenticator))
    }

    /// Creates an empty login form backed by `authenticator`
    pub fn with_authenticator(authenticator: Rc<dyn Authenticator>) -> Self {
        Self {
            state: RefCell::new(LoginState::default()),
            listeners: ListenerRegistry::new(),
            authenticator,
        }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> LoginState {
        self.state.borrow().clone()
    }

    pub fn email(&self) -> String {
        self.state.borrow().email.clone()
    }

    pub fn password(&self) -> String {
        self.state.borrow().password.clone()
    }

    pub fn email_error(&self) -> String {
        self.state.borrow().email_error.clone()
    }

    pub fn password_error(&self) -> String {
        self.state.borrow().password_error.clone()
    }

    pub fn login_error(&self) -> String {
        self.state.borrow().login_error.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn phase(&self) -> FlowPhase {
        self.state.borrow().phase
    }

    pub fn set_email(&self, email: impl Into<String>) {
        self.apply(LoginEdit::Email(email.into()));
    }

    pub fn set_password(&self, password: impl Into<String>) {
        self.apply(LoginEdit::Password(password.into()));
    }

    /// Applies one form edit and notifies
    ///
    /// Errors from a finished attempt are cleared; validation does not run
    /// again until the next [`login`](Self::login). Ignored while a login
    /// is in progress.
    pub fn apply(&self, edit: LoginEdit) {
        if self.refuse_while_loading("edit") {
            return;
        }
        {
            let mut state = self.state.borrow_mut();
            state.begin_edit();
            match edit {
                LoginEdit::Email(email) => state.email = email,
                LoginEdit::Password(password) => state.password = password,
            }
        }
        self.notify_listeners();
    }

    /// Validates both fields, records any errors and notifies once
    ///
    /// Returns true if the form is valid.
    pub fn validate_form(&self) -> bool {
        if self.refuse_while_loading("validation") {
            return false;
        }
        let valid = {
            let mut state = self.state.borrow_mut();
            state.clear_errors();
            let valid = state.run_validators();
            state.phase = if valid { FlowPhase::Idle } else { FlowPhase::Invalid };
            valid
        };
        self.notify_listeners();
        valid
    }

    /// Validates the form and authenticates
    ///
    /// Notifies once if validation fails, otherwise twice: when loading
    /// starts and when the result is in. On success the password is cleared
    /// and the user is handed to the caller; this container keeps no copy.
    /// Returns [`ActionOutcome::Busy`] without touching state if a login is
    /// already running.
    pub fn login(&self) -> ActionOutcome<SessionUser> {
        let credentials = {
            let mut state = self.state.borrow_mut();
            if state.is_loading {
                warn!("login requested while another login is in progress");
                return ActionOutcome::Busy;
            }

            state.clear_errors();
            state.phase = FlowPhase::Validating;

            if state.run_validators() {
                state.is_loading = true;
                state.phase = FlowPhase::InProgress;
                Some((state.email.clone(), state.password.clone()))
            } else {
                state.phase = FlowPhase::Invalid;
                None
            }
        };

        let Some((email, password)) = credentials else {
            debug!("login form invalid");
            self.notify_listeners();
            return ActionOutcome::Invalid;
        };

        self.notify_listeners();

        let result = self.authenticator.authenticate(&email, &password);

        let outcome = {
            let mut state = self.state.borrow_mut();
            state.is_loading = false;
            match result {
                Ok(user) => {
                    info!(email = %user.email, "login succeeded");
                    state.password.clear();
                    state.phase = FlowPhase::Success;
                    ActionOutcome::Completed(user)
                }
                Err(e) => {
                    warn!(error = %e, "login failed");
                    state.login_error = format!("Login failed: {}", e);
                    state.phase = FlowPhase::Failed;
                    ActionOutcome::Failed
                }
            }
        };
        self.notify_listeners();
        outcome
    }

    /// Resets the form to its initial empty state and notifies
    pub fn logout(&self) {
        if self.refuse_while_loading("logout") {
            return;
        }
        debug!("resetting login form");
        *self.state.borrow_mut() = LoginState::default();
        self.notify_listeners();
    }

    /// Clears all error messages and notifies
    pub fn clear_errors(&self) {
        if self.refuse_while_loading("clearing errors") {
            return;
        }
        {
            let mut state = self.state.borrow_mut();
            state.clear_errors();
            if state.phase.is_settled() {
                state.phase = FlowPhase::Idle;
            }
        }
        self.notify_listeners();
    }

    /// Returns true (and logs) if a login is running
    ///
    /// Every mutation goes through this so the result of the pending login
    /// cannot overwrite an edit made while it ran.
    fn refuse_while_loading(&self, action: &str) -> bool {
        let loading = self.state.borrow().is_loading;
        if loading {
            warn!(action, "ignored while a login is in progress");
        }
        loading
    }
}
