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
use crate::post::{Categorized, Post};
use serde::{Deserialize, Serialize};
use text_processing::WordCount;

/// The summary of a single category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: Category,
    pub count: usize,
    /// count / total * 100, rounded to 2 decimals
    pub percentage: f64,
    /// The posts of this category, most extreme first
    pub posts: Vec<Post<Categorized>>,
}

impl CategorySummary {
    pub fn empty(category: Category) -> Self {
        Self {
            category,
            count: 0,
            percentage: 0.0,
            posts: Vec::new(),
        }
    }
}

/// The aggregated result over a whole corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub total: usize,
    pub positive: CategorySummary,
    pub neutral: CategorySummary,
    pub negative: CategorySummary,
    /// The normalized texts joined by a single space, the input for a word cloud.
    pub joined_text: String,
    /// The most frequent words of [Report::joined_text]
    pub word_frequencies: Vec<WordCount>,
}

impl Report {
    pub fn summary(&self, category: Category) -> &CategorySummary {
        match category {
            Category::Positive => &self.positive,
            Category::Neutral => &self.neutral,
            Category::Negative => &self.negative,
        }
    }

    /// The summaries in display order.
    pub fn summaries(&self) -> [&CategorySummary; 3] {
        [&self.positive, &self.neutral, &self.negative]
    }

    pub fn count(&self, category: Category) -> usize {
        self.summary(category).count
    }

    pub fn percentage(&self, category: Category) -> f64 {
        self.summary(category).percentage
    }

    pub fn posts(&self, category: Category) -> &[Post<Categorized>] {
        &self.summary(category).posts
    }
}

/// count * 100 / total rounded to two decimals, halves to even.
/// 0.0 for an empty total.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 * 100.0 / total as f64 * 100.0).round_ties_even() / 100.0
}
