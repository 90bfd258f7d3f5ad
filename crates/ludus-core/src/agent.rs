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

//! Traits for the decision-making agents driven by the control loop.

use crate::action::ActionLabel;
use crate::state::GameState;

/// The interface every decision/evaluation strategy implements.
///
/// The loop controller calls [`Agent::decide`] once per frame on the current
/// state, applies the returned action, then calls [`Agent::evaluate`] on the
/// resulting state. Both methods take `&self` and a shared state, so a
/// strategy cannot mutate the state or keep hidden per-call counters; the
/// record of what happened lives in [`AgentMemory`], owned by the controller.
///
/// Strategies that need randomness own an explicitly seeded source handed to
/// them at construction.
pub trait Agent: Send {
    /// Returns the identifying label of this agent. Not used for dispatch.
    fn name(&self) -> &str;

    /// Chooses the action to take from the observed state.
    fn decide(&self, state: &GameState) -> ActionLabel;

    /// Scores the state produced by the last transition.
    fn evaluate(&self, state: &GameState) -> f64;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn decide(&self, state: &GameState) -> ActionLabel {
        (**self).decide(state)
    }

    fn evaluate(&self, state: &GameState) -> f64 {
        (**self).evaluate(state)
    }
}

/// The controller-owned record of an agent's most recent frame.
///
/// Before the first frame `last_action` is `None` and `last_reward` is `0.0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentMemory {
    last_action: Option<ActionLabel>,
    last_reward: f64,
}

impl AgentMemory {
    /// Creates an empty memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// The action chosen in the most recently completed frame.
    pub fn last_action(&self) -> Option<&ActionLabel> {
        self.last_action.as_ref()
    }

    /// The reward computed in the most recently completed frame.
    pub fn last_reward(&self) -> f64 {
        self.last_reward
    }

    /// Records the action decided for the current frame.
    pub fn record_action(&mut self, action: ActionLabel) {
        self.last_action = Some(action);
    }

    /// Records the reward evaluated for the current frame.
    pub fn record_reward(&mut self, reward: f64) {
        self.last_reward = reward;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Mirror;

    impl Agent for Mirror {
        fn name(&self) -> &str {
            "mirror"
        }

        fn decide(&self, state: &GameState) -> ActionLabel {
            ActionLabel::new(state.score.to_string())
        }

        fn evaluate(&self, state: &GameState) -> f64 {
            state.score as f64 * 0.5
        }
    }

    #[test]
    fn memory_starts_unset() {
        let memory = AgentMemory::new();
        assert!(memory.last_action().is_none());
        assert_eq!(memory.last_reward(), 0.0);
    }

    #[test]
    fn memory_keeps_only_the_latest_frame() {
        let mut memory = AgentMemory::new();
        memory.record_action(ActionLabel::MOVE_UP);
        memory.record_reward(1.0);
        memory.record_action(ActionLabel::MOVE_DOWN);
        memory.record_reward(-3.5);

        assert_eq!(memory.last_action(), Some(&ActionLabel::MOVE_DOWN));
        assert_eq!(memory.last_reward(), -3.5);
    }

    #[test]
    fn boxed_agents_forward_to_the_strategy() {
        let agent: Box<dyn Agent> = Box::new(Mirror);
        let state = GameState::new(4);
        assert_eq!(agent.name(), "mirror");
        assert_eq!(agent.decide(&state), ActionLabel::new("4"));
        assert_eq!(agent.evaluate(&state), 2.0);
    }
}
