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

use crate::tokenizer::Tokenizer;
use compact_str::CompactString;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// A word and how often it occurs.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct WordCount {
    pub word: CompactString,
    pub count: u64,
}

/// Collects the word frequencies in a corpus, used as input for word clouds.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct WordFrequencies {
    document_count: u64,
    word_count: u64,
    word_counts: HashMap<CompactString, u64>,
}

impl WordFrequencies {
    /// Counts the words of a single text.
    pub fn from_text(tokenizer: &Tokenizer, text: &str) -> Self {
        let mut new = Self::default();
        new.add(tokenizer.tokenize(text));
        new
    }

    pub fn add<D: IntoIterator<Item = W>, W: Into<CompactString>>(&mut self, doc: D) {
        self.document_count = self.document_count.saturating_add(1);
        for value in doc {
            self.word_count = self.word_count.saturating_add(1);
            self.word_counts
                .entry(value.into())
                .and_modify(|value| *value = value.saturating_add(1))
                .or_insert(1);
        }
    }

    /// The number of documents added
    pub fn document_count(&self) -> u64 {
        self.document_count
    }

    /// The number of words in all documents
    pub fn word_count(&self) -> u64 {
        self.word_count
    }

    /// The number of distinct words
    pub fn unique_word_count(&self) -> usize {
        self.word_counts.len()
    }

    pub fn word_frequency(&self, word: &str) -> Option<u64> {
        self.word_counts.get(word).copied()
    }

    /// The `n` most frequent words, by count descending and word ascending.
    pub fn top(&self, n: usize) -> Vec<WordCount> {
        self.word_counts
            .iter()
            .sorted_by(|(word_a, count_a), (word_b, count_b)| {
                count_b.cmp(count_a).then_with(|| word_a.cmp(word_b))
            })
            .take(n)
            .map(|(word, count)| WordCount {
                word: word.clone(),
                count: *count,
            })
            .collect()
    }
}

impl Display for WordFrequencies {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Document Count: {}", self.document_count)?;
        writeln!(f, "Word Count: {}", self.word_count)?;
        write!(f, "Unique Word Count: {}", self.unique_word_count())
    }
}

#[cfg(test)]
mod test {
    use super::WordFrequencies;
    use crate::stopword_registry::StopWordList;
    use crate::tokenizer::Tokenizer;
    use std::sync::Arc;

    #[test]
    fn counts_words_without_stopwords() {
        let stop_words: StopWordList = ["is", "the"].into_iter().collect();
        let tokenizer = Tokenizer::new(true, 2, Some(Arc::new(stop_words)));
        let frequencies =
            WordFrequencies::from_text(&tokenizer, "Rust is great. The crab is great, rust rust!");

        assert_eq!(1, frequencies.document_count());
        assert_eq!(6, frequencies.word_count());
        assert_eq!(3, frequencies.unique_word_count());
        assert_eq!(Some(3), frequencies.word_frequency("rust"));
        assert_eq!(None, frequencies.word_frequency("is"));

        let top = frequencies.top(2);
        assert_eq!(2, top.len());
        assert_eq!("rust", top[0].word.as_str());
        assert_eq!(3, top[0].count);
        assert_eq!("great", top[1].word.as_str());
    }

    #[test]
    fn ties_are_sorted_by_word() {
        let tokenizer = Tokenizer::new(false, 1, None);
        let frequencies = WordFrequencies::from_text(&tokenizer, "b a c");
        let words: Vec<_> = frequencies
            .top(10)
            .into_iter()
            .map(|value| value.word.to_string())
            .collect();
        assert_eq!(vec!["a", "b", "c"], words);
        assert!(frequencies.top(0).is_empty());
    }
}
