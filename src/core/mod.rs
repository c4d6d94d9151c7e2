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

//! src/core/mod.rs
//!
//! Core building blocks
//!
//! This module contains everything the flows are made of, with no
//! knowledge of any particular screen:
//! - Listener registry and the `Observable` capability
//! - Pure field validators
//! - Shared data types (session user, settings, flow phase)
//!
//! Nothing here touches a UI toolkit, so it all tests without a display.

pub mod observer;
pub mod types;
pub mod validator;

pub use observer::{Listener, ListenerRegistry, Observable, Observer};
pub use types::*;
pub use validator::{validate_email, validate_password, validate_required, ValidationError};

#[cfg(test)]
mod tests;
