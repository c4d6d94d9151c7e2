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

//! State containers for each flow
//!
//! # Architecture
//!
//! - **State**: a plain struct per flow, kept in a `RefCell`
//! - **Container**: owns the state and a listener registry, exposes setters
//!   and composite actions that mutate, then notify
//! - **Collaborators**: `Authenticator` and `SettingsStore`, injected so
//!   failures can be simulated
//!
//! Containers know nothing about widgets. A view holds an `Rc` to one,
//! registers a listener, and re-reads the fields it shows every time the
//! listener fires.
//!
//! # Module Structure
//!
//! ```text
//! viewmodel/
//! ├── mod.rs       // This file - exports
//! ├── error.rs     // OperationError
//! ├── services.rs  // Authenticator, SettingsStore and demo implementations
//! ├── login.rs     // LoginViewModel
//! ├── home.rs      // HomeViewModel
//! └── settings.rs  // SettingsViewModel
//! ```

pub mod error;
pub mod home;
pub mod login;
pub mod services;
pub mod settings;

pub use error::OperationError;
pub use home::HomeViewModel;
pub use login::{LoginEdit, LoginState, LoginViewModel};
pub use services::{Authenticator, DemoAuthenticator, MemorySettingsStore, SettingsStore};
pub use settings::{SettingsEdit, SettingsState, SettingsViewModel, SAVE_SUCCESS_MESSAGE};

#[cfg(test)]
mod tests;
