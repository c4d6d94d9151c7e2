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

//! Flowstate
//!
//! Observable state containers for a small login → home → settings
//! application, with no dependency on any UI toolkit.
//!
//! # Features
//!
//! - **Listener registry:** ordered, duplicate-free, safe to modify mid-notify
//! - **Field validation:** pure email, password and required-field checks
//! - **Flow containers:** login, home and settings view models that mutate,
//!   then notify, and report failures through state instead of errors
//! - **Busy guard:** a second login or save while one is running is refused
//! - **Explicit ownership:** `App` creates and disposes each flow's container
//!
//! # Architecture
//!
//! - **`core`:** Observer plumbing, validators, shared types
//! - **`viewmodel`:** One state container per flow, plus collaborator traits
//! - **`app`:** Which containers exist and which screen is showing
//!
//! # Examples
//!
//! ## Driving the login flow
//!
//! ```
//! use flowstate::core::{ActionOutcome, Observable};
//! use flowstate::viewmodel::LoginViewModel;
//! use std::rc::Rc;
//!
//! let vm = LoginViewModel::new();
//! vm.add_listener(Rc::new(|| println!("re-render")));
//!
//! vm.set_email("demo@example.com");
//! vm.set_password("password123");
//!
//! match vm.login() {
//!     ActionOutcome::Completed(user) => assert_eq!(user.display_name(), "Demo"),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```
//!
//! ## Validating a field
//!
//! ```
//! use flowstate::core::validator::{field_error, validate_password};
//!
//! assert_eq!(
//!     field_error(&validate_password("12345")),
//!     "Password must be at least 6 characters"
//! );
//! ```

pub mod app;
pub mod core;
pub mod viewmodel;

// Re-export commonly used types for convenience
pub use crate::app::{App, Screen};
pub use crate::core::{ActionOutcome, FlowPhase, Listener, Observable, SessionUser, Settings};
pub use crate::viewmodel::{HomeViewModel, LoginViewModel, SettingsViewModel};
