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
use crate::corpus::Corpus;
use crate::post::{Categorized, Post};
use crate::report::{percentage, CategorySummary, Report};
use std::cmp::Ordering;
use text_processing::{Tokenizer, WordFrequencies};

/// Builds a [Report] from a categorized corpus.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    cloud_words: usize,
    tokenizer: Tokenizer,
}

impl Aggregator {
    /// `cloud_words` is the number of word frequencies in a report, 0 disables them.
    pub fn new(cloud_words: usize, tokenizer: Tokenizer) -> Self {
        Self {
            cloud_words,
            tokenizer,
        }
    }

    /// Positive posts are ordered by polarity descending, neutral and
    /// negative posts ascending. Equal polarities keep the corpus order.
    pub fn order(category: Category, a: &Post<Categorized>, b: &Post<Categorized>) -> Ordering {
        match category {
            Category::Positive => b
                .polarity()
                .partial_cmp(&a.polarity())
                .unwrap_or(Ordering::Equal),
            Category::Neutral | Category::Negative => a
                .polarity()
                .partial_cmp(&b.polarity())
                .unwrap_or(Ordering::Equal),
        }
    }

    pub fn aggregate(&self, corpus: &Corpus<Categorized>) -> Report {
        let total = corpus.len();
        let mut positive = CategorySummary::empty(Category::Positive);
        let mut neutral = CategorySummary::empty(Category::Neutral);
        let mut negative = CategorySummary::empty(Category::Negative);

        for post in corpus {
            let summary = match post.category() {
                Category::Positive => &mut positive,
                Category::Neutral => &mut neutral,
                Category::Negative => &mut negative,
            };
            summary.posts.push(post.clone());
        }

        for summary in [&mut positive, &mut neutral, &mut negative] {
            let category = summary.category;
            summary.posts.sort_by(|a, b| Self::order(category, a, b));
            summary.count = summary.posts.len();
            summary.percentage = percentage(summary.count, total);
        }

        let joined_text = corpus.joined_text();
        let word_frequencies = if self.cloud_words == 0 {
            Vec::new()
        } else {
            WordFrequencies::from_text(&self.tokenizer, &joined_text).top(self.cloud_words)
        };

        log::debug!(
            "Aggregated {total} posts: {} positive, {} neutral, {} negative.",
            positive.count,
            neutral.count,
            negative.count
        );

        Report {
            total,
            positive,
            neutral,
            negative,
            joined_text,
            word_frequencies,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Aggregator;
    use crate::category::Category;
    use crate::corpus::Corpus;
    use crate::post::Categorized;
    use crate::sentiment::{MockSentimentCapability, Sentiment, SentimentScorer};
    use std::collections::HashMap;
    use strum::IntoEnumIterator;
    use text_processing::{TextNormalizer, Tokenizer};

    /// Scores every text by a fixed table, unknown texts are neutral.
    fn categorized(texts: &[(&str, f64)]) -> Corpus<Categorized> {
        let table: HashMap<String, f64> = texts
            .iter()
            .map(|(text, polarity)| (text.to_string(), *polarity))
            .collect();
        let mut capability = MockSentimentCapability::new();
        capability.expect_analyze().returning(move |text| {
            Sentiment::new(0.5, table.get(text).copied().unwrap_or_default())
        });
        Corpus::from_texts(texts.iter().map(|(text, _)| *text))
            .normalize(&TextNormalizer::default())
            .score(&SentimentScorer::new(capability))
            .categorize()
    }

    fn polarities(report: &crate::report::Report, category: Category) -> Vec<f64> {
        report
            .posts(category)
            .iter()
            .map(|post| post.polarity())
            .collect()
    }

    #[test]
    fn empty_corpus_gives_a_zero_report() {
        let report = Aggregator::default().aggregate(&categorized(&[]));
        assert_eq!(0, report.total);
        for category in Category::iter() {
            assert_eq!(0, report.count(category));
            assert_eq!(0.0, report.percentage(category));
            assert!(report.posts(category).is_empty());
        }
        assert_eq!("", report.joined_text);
        assert!(report.word_frequencies.is_empty());
    }

    #[test]
    fn every_post_is_in_exactly_one_category() {
        let corpus = categorized(&[
            ("a", 0.5),
            ("b", -0.25),
            ("c", 0.0),
            ("d", 0.0001),
            ("e", -0.0001),
            ("f", 1.0),
            ("g", -1.0),
        ]);
        let report = Aggregator::default().aggregate(&corpus);

        let counts: usize = Category::iter().map(|category| report.count(category)).sum();
        assert_eq!(report.total, counts);
        assert_eq!(7, report.total);

        for post in &corpus {
            let containing = Category::iter()
                .filter(|category| {
                    report
                        .posts(*category)
                        .iter()
                        .any(|value| value.id() == post.id())
                })
                .collect::<Vec<_>>();
            assert_eq!(vec![post.category()], containing);
        }
        assert_eq!(4, report.count(Category::Positive) + report.count(Category::Neutral));
    }

    #[test]
    fn orders_positive_descending_and_the_others_ascending() {
        let corpus = categorized(&[
            ("p1", 0.2),
            ("n1", -0.3),
            ("p2", 0.9),
            ("n2", -0.9),
            ("z1", 0.0),
            ("p3", 0.5),
            ("n3", -0.1),
            ("z2", 0.0),
        ]);
        let report = Aggregator::default().aggregate(&corpus);

        assert_eq!(vec![0.9, 0.5, 0.2], polarities(&report, Category::Positive));
        assert_eq!(vec![-0.9, -0.3, -0.1], polarities(&report, Category::Negative));
        assert_eq!(vec![0.0, 0.0], polarities(&report, Category::Neutral));

        for category in Category::iter() {
            for pair in report.posts(category).windows(2) {
                match category {
                    Category::Positive => assert!(pair[0].polarity() >= pair[1].polarity()),
                    _ => assert!(pair[0].polarity() <= pair[1].polarity()),
                }
            }
        }
    }

    #[test]
    fn equal_polarities_keep_corpus_order() {
        let corpus = categorized(&[
            ("a", 0.4),
            ("b", 0.4),
            ("c", 0.0),
            ("d", 0.0),
            ("e", 0.4),
            ("f", -0.0),
            ("g", 0.0),
        ]);
        let report = Aggregator::default().aggregate(&corpus);
        let ids: Vec<_> = report
            .posts(Category::Positive)
            .iter()
            .map(|post| post.id())
            .collect();
        assert_eq!(vec![0, 1, 4], ids);
        let ids: Vec<_> = report
            .posts(Category::Neutral)
            .iter()
            .map(|post| post.id())
            .collect();
        assert_eq!(vec![2, 3, 5, 6], ids);
    }

    #[test]
    fn word_frequencies_of_the_joined_text() {
        let corpus = categorized(&[("rust rust crab", 0.1), ("#rust", 0.0)]);
        let report = Aggregator::new(1, Tokenizer::new(true, 2, None)).aggregate(&corpus);
        assert_eq!("rust rust crab rust", report.joined_text);
        assert_eq!(1, report.word_frequencies.len());
        assert_eq!("rust", report.word_frequencies[0].word.as_str());
        assert_eq!(3, report.word_frequencies[0].count);
    }
}
