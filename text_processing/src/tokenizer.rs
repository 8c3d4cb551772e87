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

use crate::configs::TokenizerConfig;
use crate::stopword_registry::StopWordList;
use std::borrow::Cow;
use std::sync::Arc;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

/// Splits a text into lowercase words.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    normalize: bool,
    min_token_length: usize,
    stop_words: Option<Arc<StopWordList>>,
}

impl Tokenizer {
    pub fn new(
        normalize: bool,
        min_token_length: usize,
        stop_words: Option<Arc<StopWordList>>,
    ) -> Self {
        Self {
            normalize,
            min_token_length,
            stop_words,
        }
    }

    pub fn with_config(cfg: &TokenizerConfig, stop_words: Option<Arc<StopWordList>>) -> Self {
        Self::new(cfg.normalize_text, cfg.min_token_length, stop_words)
    }

    /// Tokenizes a text
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text = if self.normalize {
            Cow::Owned(text.nfc().collect::<String>())
        } else {
            Cow::Borrowed(text)
        };

        text.unicode_words()
            .map(str::to_lowercase)
            .filter(|value| value.chars().count() >= self.min_token_length)
            .filter(|value| match &self.stop_words {
                Some(stop_words) => !stop_words.contains(value.as_str()),
                None => true,
            })
            .collect()
    }
}
