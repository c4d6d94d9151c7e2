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

//! Settings flow state
//!
//! Wraps a [`Settings`] value with the presentation fields the settings
//! screen needs: the display-name error, the save result messages and the
//! saving flag.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::services::{MemorySettingsStore, SettingsStore};
use crate::core::observer::{ListenerRegistry, Observable};
use crate::core::types::{ActionOutcome, FlowPhase, Settings};
use crate::core::validator::{field_error, validate_required};

/// Message shown after a successful save
pub const SAVE_SUCCESS_MESSAGE: &str = "Settings saved successfully!";

/// A single edit coming from the settings form
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SettingsEdit {
    DarkMode(bool),
    DisplayName(String),
    Bio(String),
    Language(String),
    Notifications(bool),
}

/// Everything the settings screen renders
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct SettingsState {
    pub settings: Settings,
    pub display_name_error: String,
    /// Set only after a successful save
    pub save_message: String,
    /// Flow-level failure from the store
    pub save_error: String,
    pub is_saving: bool,
    pub phase: FlowPhase,
}

impl SettingsState {
    fn clear_messages(&mut self) {
        self.display_name_error.clear();
        self.save_message.clear();
        self.save_error.clear();
    }

    fn begin_edit(&mut self) {
        if self.phase.is_settled() {
            self.clear_messages();
            self.phase = FlowPhase::Idle;
        }
    }

    /// Display name is optional, but if present it must not be blank
    fn run_validators(&mut self) -> bool {
        if self.settings.display_name.is_empty() {
            return true;
        }

        let result = validate_required(&self.settings.display_name, "Display Name");
        self.display_name_error = field_error(&result);
        result.is_ok()
    }
}

/// State container for the settings screen
pub struct SettingsViewModel {
    state: RefCell<SettingsState>,
    listeners: ListenerRegistry,
    store: Rc<dyn SettingsStore>,
}

impl Observable for SettingsViewModel {
    fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }
}

impl Default for SettingsViewModel {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl SettingsViewModel {
    /// Creates a container for `settings` that saves into memory
    pub fn new(settings: Settings) -> Self {
        Self::with_store(settings, Rc::new(MemorySettingsStore::new()))
    }

    pub fn with_store(settings: Settings, store: Rc<dyn SettingsStore>) -> Self {
        Self {
            state: RefCell::new(SettingsState {
                settings,
                ..SettingsState::default()
            }),
            listeners: ListenerRegistry::new(),
            store,
        }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> SettingsState {
        self.state.borrow().clone()
    }

    /// Copy of the settings being edited
    pub fn settings(&self) -> Settings {
        self.state.borrow().settings.clone()
    }

    pub fn dark_mode(&self) -> bool {
        self.state.borrow().settings.dark_mode
    }

    pub fn display_name(&self) -> String {
        self.state.borrow().settings.display_name.clone()
    }

    pub fn bio(&self) -> String {
        self.state.borrow().settings.bio.clone()
    }

    pub fn language(&self) -> String {
        self.state.borrow().settings.language.clone()
    }

    pub fn notifications_enabled(&self) -> bool {
        self.state.borrow().settings.notifications_enabled
    }

    pub fn display_name_error(&self) -> String {
        self.state.borrow().display_name_error.clone()
    }

    pub fn save_message(&self) -> String {
        self.state.borrow().save_message.clone()
    }

    pub fn save_error(&self) -> String {
        self.state.borrow().save_error.clone()
    }

    pub fn is_saving(&self) -> bool {
        self.state.borrow().is_saving
    }

    pub fn phase(&self) -> FlowPhase {
        self.state.borrow().phase
    }

    pub fn set_dark_mode(&self, value: bool) {
        self.apply(SettingsEdit::DarkMode(value));
    }

    pub fn set_display_name(&self, value: impl Into<String>) {
        self.apply(SettingsEdit::DisplayName(value.into()));
    }

    pub fn set_bio(&self, value: impl Into<String>) {
        self.apply(SettingsEdit::Bio(value.into()));
    }

    pub fn set_language(&self, value: impl Into<String>) {
        self.apply(SettingsEdit::Language(value.into()));
    }

    pub fn set_notifications_enabled(&self, value: bool) {
        self.apply(SettingsEdit::Notifications(value));
    }

    /// Flips dark mode and notifies
    pub fn toggle_dark_mode(&self) {
        let value = !self.dark_mode();
        self.apply(SettingsEdit::DarkMode(value));
    }

    /// Applies one form edit and notifies
    ///
    /// Ignored while a save is in progress.
    pub fn apply(&self, edit: SettingsEdit) {
        if self.refuse_while_saving("edit") {
            return;
        }
        {
            let mut state = self.state.borrow_mut();
            state.begin_edit();
            let settings = &mut state.settings;
            match edit {
                SettingsEdit::DarkMode(value) => settings.dark_mode = value,
                SettingsEdit::DisplayName(value) => settings.display_name = value,
                SettingsEdit::Bio(value) => settings.bio = value,
                SettingsEdit::Language(value) => settings.language = value,
                SettingsEdit::Notifications(value) => settings.notifications_enabled = value,
            }
        }
        self.notify_listeners();
    }

    /// Validates the settings, records any error and notifies once
    ///
    /// Returns true if the settings are valid.
    pub fn validate_settings(&self) -> bool {
        if self.refuse_while_saving("validation") {
            return false;
        }
        let valid = {
            let mut state = self.state.borrow_mut();
            state.clear_messages();
            let valid = state.run_validators();
            state.phase = if valid { FlowPhase::Idle } else { FlowPhase::Invalid };
            valid
        };
        self.notify_listeners();
        valid
    }

    /// Validates and hands the settings to the store
    ///
    /// Same notification shape as login: once on invalid input, otherwise
    /// once when saving starts and once with the result. A store failure
    /// lands in [`save_error`](Self::save_error) and leaves the edited
    /// values untouched.
    pub fn save_settings(&self) -> ActionOutcome<Settings> {
        let pending = {
            let mut state = self.state.borrow_mut();
            if state.is_saving {
                warn!("save requested while another save is in progress");
                return ActionOutcome::Busy;
            }

            state.clear_messages();
            state.phase = FlowPhase::Validating;

            if state.run_validators() {
                state.is_saving = true;
                state.phase = FlowPhase::InProgress;
                Some(state.settings.clone())
            } else {
                state.phase = FlowPhase::Invalid;
                None
            }
        };

        let Some(settings) = pending else {
            debug!("settings form invalid");
            self.notify_listeners();
            return ActionOutcome::Invalid;
        };

        self.notify_listeners();

        let result = self.store.save(&settings);

        let outcome = {
            let mut state = self.state.borrow_mut();
            state.is_saving = false;
            match result {
                Ok(()) => {
                    info!(%settings, "settings saved");
                    state.save_message = SAVE_SUCCESS_MESSAGE.to_string();
                    state.phase = FlowPhase::Success;
                    ActionOutcome::Completed(settings)
                }
                Err(e) => {
                    warn!(error = %e, "saving settings failed");
                    state.save_error = format!("Failed to save settings: {}", e);
                    state.phase = FlowPhase::Failed;
                    ActionOutcome::Failed
                }
            }
        };
        self.notify_listeners();
        outcome
    }

    /// Replaces everything with [`Settings::default`] and notifies
    pub fn reset_to_defaults(&self) {
        if self.refuse_while_saving("reset") {
            return;
        }
        debug!("resetting settings to defaults");
        {
            let mut state = self.state.borrow_mut();
            state.settings = Settings::default();
            state.clear_messages();
            state.phase = FlowPhase::Idle;
        }
        self.notify_listeners();
    }

    /// Replaces the edited settings wholesale and notifies
    pub fn load_settings(&self, settings: Settings) {
        if self.refuse_while_saving("load") {
            return;
        }
        {
            let mut state = self.state.borrow_mut();
            state.settings = settings;
            state.begin_edit();
        }
        self.notify_listeners();
    }

    /// Returns true (and logs) if a save is running
    fn refuse_while_saving(&self, action: &str) -> bool {
        let saving = self.state.borrow().is_saving;
        if saving {
            warn!(action, "ignored while a save is in progress");
        }
        saving
    }
}
