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

mod lexicon;

pub use lexicon::{LexiconAnalyzer, LexiconEntry, LexiconError};

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const SUBJECTIVITY_RANGE: RangeInclusive<f64> = 0.0..=1.0;
pub const POLARITY_RANGE: RangeInclusive<f64> = -1.0..=1.0;

/// Subjectivity and polarity of a text.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// 0.0 is factual, 1.0 is opinionated
    pub subjectivity: f64,
    /// -1.0 is negative, 1.0 is positive
    pub polarity: f64,
}

impl Sentiment {
    pub const NEUTRAL: Sentiment = Sentiment::new(0.0, 0.0);

    pub const fn new(subjectivity: f64, polarity: f64) -> Self {
        Self {
            subjectivity,
            polarity,
        }
    }

    /// True if both values are inside of their ranges.
    pub fn is_valid(&self) -> bool {
        SUBJECTIVITY_RANGE.contains(&self.subjectivity) && POLARITY_RANGE.contains(&self.polarity)
    }

    /// Moves both values into their ranges, NaN becomes 0.0.
    pub fn clamped(self) -> Self {
        fn clamp(value: f64, range: &RangeInclusive<f64>) -> f64 {
            if value.is_nan() {
                0.0
            } else {
                value.clamp(*range.start(), *range.end())
            }
        }
        Self {
            subjectivity: clamp(self.subjectivity, &SUBJECTIVITY_RANGE),
            polarity: clamp(self.polarity, &POLARITY_RANGE),
        }
    }
}

/// Some capability able to rate the sentiment of a text.
/// The returned values are not trusted, see [SentimentScorer].
#[cfg_attr(test, mockall::automock)]
pub trait SentimentCapability {
    fn analyze(&self, text: &str) -> Sentiment;
}

impl<T: SentimentCapability + ?Sized> SentimentCapability for Box<T> {
    fn analyze(&self, text: &str) -> Sentiment {
        self.as_ref().analyze(text)
    }
}

/// Wraps a [SentimentCapability] and guarantees valid results.
///
/// Blank texts are never passed to the capability and rate as
/// [Sentiment::NEUTRAL]. Values outside of the valid ranges are clamped.
/// Every call is forwarded, nothing is cached.
#[derive(Debug, Clone)]
pub struct SentimentScorer<C> {
    capability: C,
}

impl<C: SentimentCapability> SentimentScorer<C> {
    pub fn new(capability: C) -> Self {
        Self { capability }
    }

    pub fn capability(&self) -> &C {
        &self.capability
    }

    pub fn score(&self, text: &str) -> Sentiment {
        if text.trim().is_empty() {
            return Sentiment::NEUTRAL;
        }
        let sentiment = self.capability.analyze(text);
        if sentiment.is_valid() {
            sentiment
        } else {
            log::warn!(
                "The sentiment capability returned {sentiment:?} for {text:?}, clamping it."
            );
            sentiment.clamped()
        }
    }
}
