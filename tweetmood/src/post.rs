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

use crate::category::Category;
use crate::sentiment::{Sentiment, SentimentCapability, SentimentScorer};
use serde::{Deserialize, Serialize};
use text_processing::TextNormalizer;

/// Marks a post as retrieved, nothing is derived yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Raw;

/// A post with its normalized text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Normalized {
    normalized_text: String,
}

/// A normalized post with subjectivity and polarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scored {
    normalized_text: String,
    #[serde(flatten)]
    sentiment: Sentiment,
}

/// A scored post with its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Categorized {
    normalized_text: String,
    #[serde(flatten)]
    sentiment: Sentiment,
    category: Category,
}

/// A stage that knows the normalized text.
pub trait HasNormalizedText {
    fn normalized_text(&self) -> &str;
}

/// A stage that knows the sentiment.
pub trait HasSentiment {
    fn sentiment(&self) -> Sentiment;
}

impl HasNormalizedText for Normalized {
    fn normalized_text(&self) -> &str {
        &self.normalized_text
    }
}

impl HasNormalizedText for Scored {
    fn normalized_text(&self) -> &str {
        &self.normalized_text
    }
}

impl HasNormalizedText for Categorized {
    fn normalized_text(&self) -> &str {
        &self.normalized_text
    }
}

impl HasSentiment for Scored {
    fn sentiment(&self) -> Sentiment {
        self.sentiment
    }
}

impl HasSentiment for Categorized {
    fn sentiment(&self) -> Sentiment {
        self.sentiment
    }
}

/// A single post. The stage `S` holds everything derived so far,
/// every transition creates a new post and leaves `self` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post<S> {
    id: usize,
    raw_text: String,
    #[serde(flatten)]
    stage: S,
}

impl<S> Post<S> {
    /// The position in the retrieval order.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }
}

impl Post<Raw> {
    pub fn new(id: usize, raw_text: impl Into<String>) -> Self {
        Self {
            id,
            raw_text: raw_text.into(),
            stage: Raw,
        }
    }

    pub fn normalize(&self, normalizer: &TextNormalizer) -> Post<Normalized> {
        Post {
            id: self.id,
            raw_text: self.raw_text.clone(),
            stage: Normalized {
                normalized_text: normalizer.normalize(&self.raw_text),
            },
        }
    }
}

impl Post<Normalized> {
    pub fn score<C: SentimentCapability>(&self, scorer: &SentimentScorer<C>) -> Post<Scored> {
        Post {
            id: self.id,
            raw_text: self.raw_text.clone(),
            stage: Scored {
                sentiment: scorer.score(&self.stage.normalized_text),
                normalized_text: self.stage.normalized_text.clone(),
            },
        }
    }
}

impl Post<Scored> {
    pub fn categorize(&self) -> Post<Categorized> {
        Post {
            id: self.id,
            raw_text: self.raw_text.clone(),
            stage: Categorized {
                normalized_text: self.stage.normalized_text.clone(),
                sentiment: self.stage.sentiment,
                category: Category::from_polarity(self.stage.sentiment.polarity),
            },
        }
    }
}

impl Post<Categorized> {
    pub fn category(&self) -> Category {
        self.stage.category
    }
}

impl<S: HasNormalizedText> Post<S> {
    pub fn normalized_text(&self) -> &str {
        self.stage.normalized_text()
    }
}

impl<S: HasSentiment> Post<S> {
    pub fn sentiment(&self) -> Sentiment {
        self.stage.sentiment()
    }

    pub fn polarity(&self) -> f64 {
        self.stage.sentiment().polarity
    }

    pub fn subjectivity(&self) -> f64 {
        self.stage.sentiment().subjectivity
    }
}

#[cfg(test)]
mod test {
    use super::Post;
    use crate::category::Category;
    use crate::sentiment::{MockSentimentCapability, Sentiment, SentimentScorer};
    use text_processing::TextNormalizer;

    #[test]
    fn stages_derive_new_posts() {
        let mut capability = MockSentimentCapability::new();
        capability
            .expect_analyze()
            .withf(|text| text == "news  health ")
            .times(1)
            .returning(|_| Sentiment::new(0.4, -0.2));
        let scorer = SentimentScorer::new(capability);

        let raw = Post::new(7, "#news @bob health https://t.co/1");
        let normalized = raw.normalize(&TextNormalizer::default());
        let scored = normalized.score(&scorer);
        let categorized = scored.categorize();

        assert_eq!("#news @bob health https://t.co/1", raw.raw_text());
        assert_eq!("news  health ", normalized.normalized_text());
        assert_eq!(7, categorized.id());
        assert_eq!(-0.2, categorized.polarity());
        assert_eq!(0.4, categorized.subjectivity());
        assert_eq!(Category::Negative, categorized.category());
    }

    #[test]
    fn serializes_flat() {
        let mut capability = MockSentimentCapability::new();
        capability
            .expect_analyze()
            .returning(|_| Sentiment::new(0.5, 0.25));
        let post = Post::new(0, "fine")
            .normalize(&TextNormalizer::default())
            .score(&SentimentScorer::new(capability))
            .categorize();
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(0, value["id"]);
        assert_eq!("fine", value["raw_text"]);
        assert_eq!("fine", value["normalized_text"]);
        assert_eq!(0.25, value["polarity"]);
        assert_eq!(0.5, value["subjectivity"]);
        assert_eq!("Positive", value["category"]);
    }
}
