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

//! The observable game state and the rule that turns an action into a new state.

use crate::action::ActionLabel;

/// The mutable world the control loop evolves, one frame at a time.
///
/// The loop controller is the only writer; agents only ever see a shared
/// reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    /// The running score. Unbounded in both directions.
    pub score: i64,
}

impl GameState {
    /// Creates a state with the given score.
    #[inline]
    pub const fn new(score: i64) -> Self {
        Self { score }
    }

    /// Returns the state that results from applying `action` to `self`.
    ///
    /// See [`transition::apply`].
    #[inline]
    pub fn apply(&self, action: &ActionLabel) -> GameState {
        transition::apply(self, action)
    }
}

/// The transition rule.
pub mod transition {
    use super::GameState;
    use crate::action::ActionLabel;

    /// Computes the next state for `action`.
    ///
    /// * `MoveUp` increments the score.
    /// * `MoveDown` decrements the score.
    /// * Every other label leaves the state unchanged.
    ///
    /// The step saturates at the `i64` limits instead of overflowing.
    pub fn apply(state: &GameState, action: &ActionLabel) -> GameState {
        if *action == ActionLabel::MOVE_UP {
            GameState::new(state.score.saturating_add(1))
        } else if *action == ActionLabel::MOVE_DOWN {
            GameState::new(state.score.saturating_sub(1))
        } else {
            log::trace!("Action '{action}' has no transition; state unchanged.");
            *state
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_has_zero_score() {
        assert_eq!(GameState::default().score, 0);
    }

    #[test]
    fn move_up_and_move_down_step_by_one() {
        let state = GameState::new(3);
        assert_eq!(state.apply(&ActionLabel::MOVE_UP), GameState::new(4));
        assert_eq!(state.apply(&ActionLabel::MOVE_DOWN), GameState::new(2));
    }

    #[test]
    fn apply_is_deterministic_and_leaves_input_untouched() {
        let state = GameState::new(-7);
        let first = transition::apply(&state, &ActionLabel::MOVE_UP);
        let second = transition::apply(&state, &ActionLabel::MOVE_UP);
        assert_eq!(first, second);
        assert_eq!(state, GameState::new(-7));
    }

    #[test]
    fn unknown_labels_are_a_no_op() {
        let state = GameState::new(42);
        for label in ["Jump", "", " MoveUp", "moveup", "MoveDown "] {
            assert_eq!(
                state.apply(&ActionLabel::new(label)),
                state,
                "label {label:?} should not change the state"
            );
        }
    }

    #[test]
    fn score_is_unbounded_in_both_directions() {
        let mut state = GameState::default();
        for _ in 0..25 {
            state = state.apply(&ActionLabel::MOVE_DOWN);
        }
        assert_eq!(state.score, -25);

        let top = GameState::new(i64::MAX);
        assert_eq!(top.apply(&ActionLabel::MOVE_UP).score, i64::MAX);
        let bottom = GameState::new(i64::MIN);
        assert_eq!(bottom.apply(&ActionLabel::MOVE_DOWN).score, i64::MIN);
    }
}
