// Copyright 2024 Felix Engl
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

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The sentiment category of a post, derived from the sign of its polarity.
///
/// The declaration order is the display order of a report.
#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum Category {
    Positive,
    Neutral,
    Negative,
}

impl Category {
    /// Positive above zero, negative below zero, neutral otherwise.
    /// Zero (including `-0.0`) always belongs to neutral, as does NaN.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Category::Positive
        } else if polarity < 0.0 {
            Category::Negative
        } else {
            Category::Neutral
        }
    }
}

#[inline]
pub fn categorize(polarity: f64) -> Category {
    Category::from_polarity(polarity)
}
