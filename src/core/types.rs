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

//! src/core/types.rs
//!
//! Core type definitions shared by every flow
//!
//! - `SessionUser`: who logged in, handed from the login flow to the caller
//! - `UserInfo`: flat projection of a `SessionUser` for display
//! - `Settings`: user preferences edited by the settings flow
//! - `FlowPhase`: where a flow sits in its validate/run/report cycle
//! - `ActionOutcome`: result of a composite action (login, save)

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Authenticated user produced by a successful login
///
/// The login container never keeps one; ownership passes to whoever
/// navigates to the next screen.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SessionUser {
    /// Address the user logged in with
    pub email: String,
    /// Chosen name, may be empty
    pub name: String,
    /// Free-form profile text
    pub bio: String,
    /// When this session value was created
    pub created_at: DateTime<Local>,
}

impl SessionUser {
    /// Creates a user with an explicit name
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            bio: String::new(),
            created_at: Local::now(),
        }
    }

    /// Creates a user whose name is derived from the email
    ///
    /// The local part is capitalised: `"demo@example.com"` → `"Demo"`.
    pub fn from_email(email: impl Into<String>) -> Self {
        let email = email.into();
        let name = capitalize(local_part(&email));
        Self::new(email, name)
    }

    /// Name to show in the UI, falling back to the email's local part
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            local_part(&self.email).to_string()
        } else {
            self.name.clone()
        }
    }

    /// Flat view of this user for rendering
    pub fn info(&self) -> UserInfo {
        UserInfo {
            email: self.email.clone(),
            name: self.name.clone(),
            display_name: self.display_name(),
            bio: self.bio.clone(),
        }
    }
}

impl fmt::Display for SessionUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.display_name(), self.email)
    }
}

/// Display-ready user fields
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct UserInfo {
    pub email: String,
    pub name: String,
    pub display_name: String,
    pub bio: String,
}

/// Part of an email before the first `@` (whole string if there is none)
pub fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Upper-cases the first character and lower-cases the rest
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// User preferences
///
/// Missing keys deserialise to their defaults, so partial maps load fine.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Settings {
    pub dark_mode: bool,
    /// Optional; when set it must not be whitespace-only
    pub display_name: String,
    pub bio: String,
    /// Language tag, e.g. "en"
    pub language: String,
    pub notifications_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            display_name: String::new(),
            bio: String::new(),
            language: "en".to_string(),
            notifications_enabled: true,
        }
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dark_mode={} display_name={:?} language={} notifications={}",
            self.dark_mode, self.display_name, self.language, self.notifications_enabled
        )
    }
}

/// Lifecycle of a flow between user edits
///
/// ```text
/// Idle → Validating → Invalid ──(edit)──→ Idle
///                   └→ InProgress → Success
///                                 └→ Failed ──(edit)──→ Idle
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum FlowPhase {
    /// Waiting for input
    #[default]
    Idle,
    /// Validators are running
    Validating,
    /// At least one field failed validation
    Invalid,
    /// Validation passed, operation running
    InProgress,
    /// Operation completed
    Success,
    /// Operation reported an error
    Failed,
}

impl FlowPhase {
    /// Phases an edit resets back to `Idle`
    pub fn is_settled(self) -> bool {
        matches!(self, FlowPhase::Invalid | FlowPhase::Failed | FlowPhase::Success)
    }
}

impl fmt::Display for FlowPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowPhase::Idle => write!(f, "idle"),
            FlowPhase::Validating => write!(f, "validating"),
            FlowPhase::Invalid => write!(f, "invalid"),
            FlowPhase::InProgress => write!(f, "in progress"),
            FlowPhase::Success => write!(f, "success"),
            FlowPhase::Failed => write!(f, "failed"),
        }
    }
}

/// Result of a composite action
///
/// Failure details live in the container's error fields; this only says
/// which way the action went.
#[derive(Clone, Debug, PartialEq)]
pub enum ActionOutcome<T> {
    /// Validation passed and the operation succeeded
    Completed(T),
    /// One or more fields failed validation
    Invalid,
    /// The operation itself failed
    Failed,
    /// Another action on the same container is still running
    Busy,
}

impl<T> ActionOutcome<T> {
    /// Returns true for `Completed`
    pub fn is_completed(&self) -> bool {
        matches!(self, ActionOutcome::Completed(_))
    }

    /// Short lowercase name of the outcome, e.g. for machine output
    pub fn label(&self) -> &'static str {
        match self {
            ActionOutcome::Completed(_) => "completed",
            ActionOutcome::Invalid => "invalid",
            ActionOutcome::Failed => "failed",
            ActionOutcome::Busy => "busy",
        }
    }

    /// Extracts the completed value, if any
    pub fn completed(self) -> Option<T> {
        match self {
            ActionOutcome::Completed(value) => Some(value),
            _ => None,
        }
    }
}
