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

//! A strategy that steers the score toward a fixed target and holds it there.

use ludus_core::{ActionLabel, Agent, GameState};

/// Emitted when the score is on target. The transition rule has no entry for
/// it, so the state stays put.
pub const HOLD: ActionLabel = ActionLabel::from_static("Hold");

/// Steers the score toward `target`.
///
/// The reward is the negated distance to the target, so `0.0` is the best
/// possible outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetAgent {
    name: String,
    target: i64,
}

impl TargetAgent {
    /// Creates an agent aiming for `target`.
    pub fn new(target: i64) -> Self {
        Self {
            name: format!("Target({target})"),
            target,
        }
    }

    /// The score this agent is aiming for.
    pub fn target(&self) -> i64 {
        self.target
    }
}

impl Agent for TargetAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(&self, state: &GameState) -> ActionLabel {
        match state.score.cmp(&self.target) {
            std::cmp::Ordering::Less => ActionLabel::MOVE_UP,
            std::cmp::Ordering::Greater => ActionLabel::MOVE_DOWN,
            std::cmp::Ordering::Equal => HOLD,
        }
    }

    fn evaluate(&self, state: &GameState) -> f64 {
        -(state.score.abs_diff(self.target) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn steers_toward_the_target() {
        let agent = TargetAgent::new(5);
        assert_eq!(agent.decide(&GameState::new(0)), ActionLabel::MOVE_UP);
        assert_eq!(agent.decide(&GameState::new(9)), ActionLabel::MOVE_DOWN);
        assert_eq!(agent.decide(&GameState::new(5)), HOLD);
    }

    #[test]
    fn holding_leaves_the_state_unchanged() {
        let agent = TargetAgent::new(-4);
        let state = GameState::new(-4);
        assert_eq!(state.apply(&agent.decide(&state)), state);
    }

    #[test]
    fn reward_peaks_at_the_target() {
        let agent = TargetAgent::new(3);
        assert_relative_eq!(agent.evaluate(&GameState::new(3)), 0.0);
        assert_relative_eq!(agent.evaluate(&GameState::new(0)), -3.0);
        assert_relative_eq!(agent.evaluate(&GameState::new(7)), -4.0);
    }

    #[test]
    fn converges_and_stays() {
        let agent = TargetAgent::new(-3);
        let mut state = GameState::new(4);
        for _ in 0..20 {
            state = state.apply(&agent.decide(&state));
        }
        assert_eq!(state.score, agent.target());
        assert_eq!(agent.name(), "Target(-3)");
    }
}
