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

//! Packaged strategies implementing [`ludus_core::Agent`].
//!
//! Every strategy here is a pure function of the state it is handed, so they
//! are interchangeable inside the loop controller.

#![warn(missing_docs)]

pub mod target;
pub mod threshold;

pub use target::TargetAgent;
pub use threshold::ThresholdAgent;

use ludus_core::Agent;

/// Returns the agent the loop controller uses when none is supplied.
pub fn default_agent() -> Box<dyn Agent> {
    Box::new(ThresholdAgent::default())
}
