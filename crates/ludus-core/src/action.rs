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

//! Defines the `ActionLabel` token an agent emits once per frame.

use std::borrow::Cow;
use std::fmt;

/// An opaque token naming the action chosen for one frame.
///
/// Labels are compared by their token only; they carry no display formatting.
/// The set of labels is open: any string is a valid label, and the transition
/// rule decides which ones have an effect (see [`crate::state::GameState::apply`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionLabel(Cow<'static, str>);

impl ActionLabel {
    /// Increments the score by one.
    pub const MOVE_UP: Self = Self::from_static("MoveUp");
    /// Decrements the score by one.
    pub const MOVE_DOWN: Self = Self::from_static("MoveDown");

    /// Creates a label from a static string without allocating.
    #[inline]
    pub const fn from_static(token: &'static str) -> Self {
        Self(Cow::Borrowed(token))
    }

    /// Creates a label from any owned or borrowed string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(Cow::Owned(token.into()))
    }

    /// Returns the raw token.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ActionLabel {
    fn from(token: &'static str) -> Self {
        Self::from_static(token)
    }
}

impl From<String> for ActionLabel {
    fn from(token: String) -> Self {
        Self(Cow::Owned(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrowed_and_owned_labels_compare_by_token() {
        assert_eq!(ActionLabel::new("MoveUp"), ActionLabel::MOVE_UP);
        assert_eq!(ActionLabel::from(String::from("MoveDown")), ActionLabel::MOVE_DOWN);
        assert_ne!(ActionLabel::MOVE_UP, ActionLabel::MOVE_DOWN);
    }

    #[test]
    fn labels_are_tokens_not_display_text() {
        // A leading space makes a different label.
        assert_ne!(ActionLabel::new(" MoveUp"), ActionLabel::MOVE_UP);
        assert_eq!(ActionLabel::MOVE_UP.to_string(), "MoveUp");
        assert_eq!(ActionLabel::from("Jump").as_str(), "Jump");
    }
}
