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

use thiserror::Error;

/// Failures reported by the collaborators behind a composite action.
///
/// View models never propagate these: they are turned into a flow-level
/// error message and a `Failed` phase.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum OperationError {
    /// The backend understood the request and refused it.
    #[error("{0}")]
    Rejected(String),
    /// The backend could not be reached or is not ready.
    #[error("service unavailable: {0}")]
    Unavailable(String),
}
