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

//! Flow ownership and the navigation boundary
//!
//! `App` decides which flow containers exist and when. It is not a router:
//! it only tracks the current [`Screen`] and hands the right container to
//! whatever draws it.
//!
//! # Lifecycle
//!
//! ```text
//! App::new
//!   ├─ LoginViewModel     lives until shutdown
//!   ├─ SettingsViewModel  lives until shutdown
//!   └─ HomeViewModel      created on login, disposed on logout
//! ```

use std::fmt;
use std::rc::Rc;

use tracing::{debug, info};

use crate::core::observer::Observable;
use crate::core::types::{ActionOutcome, Settings};
use crate::viewmodel::{HomeViewModel, LoginViewModel, SettingsViewModel};

/// Screen currently shown
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Screen {
    #[default]
    Login,
    Home,
    Settings,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Login => write!(f, "login"),
            Screen::Home => write!(f, "home"),
            Screen::Settings => write!(f, "settings"),
        }
    }
}

/// Owner of every flow container
pub struct App {
    login: Rc<LoginViewModel>,
    settings: Rc<SettingsViewModel>,
    home: Option<Rc<HomeViewModel>>,
    screen: Screen,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl App {
    /// Starts on the login screen with the given initial settings
    pub fn new(settings: Settings) -> Self {
        Self::with_flows(
            Rc::new(LoginViewModel::new()),
            Rc::new(SettingsViewModel::new(settings)),
        )
    }

    /// Starts on the login screen with caller-built containers
    pub fn with_flows(login: Rc<LoginViewModel>, settings: Rc<SettingsViewModel>) -> Self {
        Self {
            login,
            settings,
            home: None,
            screen: Screen::Login,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn login(&self) -> &Rc<LoginViewModel> {
        &self.login
    }

    pub fn settings(&self) -> &Rc<SettingsViewModel> {
        &self.settings
    }

    /// Home container, present only while someone is logged in
    pub fn home(&self) -> Option<&Rc<HomeViewModel>> {
        self.home.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.home.is_some()
    }

    /// Runs the login action and moves to Home on success
    ///
    /// Returns true if the screen changed.
    pub fn submit_login(&mut self) -> bool {
        match self.login.login() {
            ActionOutcome::Completed(user) => {
                info!(user = %user, "entering home screen");
                if let Some(previous) = self.home.take() {
                    previous.dispose();
                }
                self.home = Some(Rc::new(HomeViewModel::new(user)));
                self.go_to(Screen::Home);
                true
            }
            outcome => {
                debug!(?outcome, "staying on login screen");
                false
            }
        }
    }

    /// Shows the settings screen
    pub fn open_settings(&mut self) {
        self.go_to(Screen::Settings);
    }

    /// Leaves settings: Home if logged in, Login otherwise
    pub fn close_settings(&mut self) {
        let target = if self.is_logged_in() {
            Screen::Home
        } else {
            Screen::Login
        };
        self.go_to(target);
    }

    /// Ends the session: disposes Home and resets the login form
    pub fn logout(&mut self) {
        if let Some(home) = self.home.take() {
            home.dispose();
        }
        self.login.logout();
        self.go_to(Screen::Login);
    }

    /// Disposes every container. Safe to call more than once.
    pub fn shutdown(&mut self) {
        debug!("shutting down flows");
        if let Some(home) = self.home.take() {
            home.dispose();
        }
        self.login.dispose();
        self.settings.dispose();
    }

    fn go_to(&mut self, screen: Screen) {
        debug!(from = %self.screen, to = %screen, "navigating");
        self.screen = screen;
    }
}

#[cfg(test)]
mod tests;
