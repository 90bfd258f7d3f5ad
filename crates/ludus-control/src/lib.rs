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

//! The control loop: a [`GameMonitor`] owns a game state, an agent and a
//! display surface, and drives the per-frame cycle
//! (observe → decide → apply → evaluate → present) until the surface closes.

#![warn(missing_docs)]

pub mod monitor;
pub mod telemetry;

pub use monitor::{
    FrameReport, GameMonitor, MonitorError, RunState, CLEAR_COLOR, WINDOW_TITLE,
};
pub use telemetry::{FrameTelemetry, TelemetrySummary};
