// Copyright 2025 eraflo
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

//! # Ludus Core
//!
//! Foundational crate containing the data model and the interface contracts
//! that the rest of the workspace is built on: the game state and its
//! transition rule, the agent strategy trait, and the display surface
//! abstraction the loop renders into.
//!
//! Nothing in this crate depends on a windowing or rendering library.

#![warn(missing_docs)]

pub mod action;
pub mod agent;
pub mod color;
pub mod config;
pub mod platform;
pub mod state;

pub use action::ActionLabel;
pub use agent::{Agent, AgentMemory};
pub use color::LinearRgba;
pub use config::{ConfigError, GameConfig};
pub use platform::surface::{
    DisplaySurface, SurfaceBackend, SurfaceCreationError, SurfaceDescriptor,
};
pub use state::GameState;
