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

use crate::normalizer::{LinkRemoval, TextNormalizer};
use crate::stopword_registry::StopWordRepository;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// The config for a stopword registry
#[derive(Debug, Clone, Serialize, Deserialize, Eq)]
#[serde(transparent)]
pub struct StopwordRegistryConfig {
    pub registries: Vec<StopWordRepository>,
}

impl Default for StopwordRegistryConfig {
    fn default() -> Self {
        Self {
            registries: vec![StopWordRepository::Embedded],
        }
    }
}

impl PartialEq for StopwordRegistryConfig {
    fn eq(&self, other: &Self) -> bool {
        self.registries.len() == other.registries.len()
            && self
                .registries
                .iter()
                .all(|value| other.registries.contains(value))
    }
}

impl Deref for StopwordRegistryConfig {
    type Target = [StopWordRepository];

    fn deref(&self) -> &Self::Target {
        &self.registries
    }
}

/// The config of the text normalizer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct NormalizerConfig {
    /// How hyperlinks are removed (default: token)
    pub link_removal: LinkRemoval,
}

impl NormalizerConfig {
    pub fn create_normalizer(&self) -> TextNormalizer {
        TextNormalizer::new(self.link_removal)
    }
}

/// The config for the tokenizer used by other modules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct TokenizerConfig {
    /// If set to true the text is NFC normalized before splitting
    pub normalize_text: bool,
    /// Tokens with fewer characters are dropped
    pub min_token_length: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            normalize_text: true,
            min_token_length: 2,
        }
    }
}
