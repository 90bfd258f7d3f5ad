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

//! The reference threshold strategy.

use ludus_core::{ActionLabel, Agent, GameState};

/// Score below which [`ThresholdAgent`] keeps moving up.
pub const DEFAULT_THRESHOLD: i64 = 10;

/// Moves the score up while it is below a threshold, down otherwise.
///
/// The reward is the score itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdAgent {
    name: &'static str,
    threshold: i64,
}

impl ThresholdAgent {
    /// Creates the reference agent (threshold 10).
    pub fn new() -> Self {
        Self {
            name: "Basic AI",
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Sets the score at which the agent switches to `MoveDown`.
    pub fn with_threshold(mut self, threshold: i64) -> Self {
        self.threshold = threshold;
        self
    }

    /// The switching score.
    pub fn threshold(&self) -> i64 {
        self.threshold
    }
}

impl Default for ThresholdAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for ThresholdAgent {
    fn name(&self) -> &str {
        self.name
    }

    fn decide(&self, state: &GameState) -> ActionLabel {
        if state.score < self.threshold {
            ActionLabel::MOVE_UP
        } else {
            ActionLabel::MOVE_DOWN
        }
    }

    fn evaluate(&self, state: &GameState) -> f64 {
        state.score as f64
    }
}
