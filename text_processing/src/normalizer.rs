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

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::LazyLock;
use strum::{Display, EnumString};

/// A leading retweet header like `RT @user: `.
static RETWEET_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*RT\s+(?:@[A-Za-z0-9]+)?(?::\s*)?").unwrap());
static MENTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@[A-Za-z0-9]+").unwrap());
static HASHTAG_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#").unwrap());
static LINK_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());
static LINK_SINGLE_CHARACTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S").unwrap());

/// How much of a hyperlink is removed.
#[derive(
    Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LinkRemoval {
    /// Removes the scheme and the complete non-whitespace run after it.
    #[default]
    Token,
    /// Removes the scheme and exactly one non-whitespace character.
    /// Only a prefix of most urls is removed, the rest stays in the text.
    SingleCharacter,
}

impl LinkRemoval {
    fn pattern(self) -> &'static Regex {
        match self {
            LinkRemoval::Token => &LINK_TOKEN,
            LinkRemoval::SingleCharacter => &LINK_SINGLE_CHARACTER,
        }
    }
}

/// Cleans up social media posts.
///
/// Removes `@handle` mentions, `#` markers (the tag word stays), a leading
/// `RT` retweet header and hyperlinks. The rules are repeated until nothing
/// changes anymore, therefore `normalize(normalize(x)) == normalize(x)`.
///
/// Whitespace left at the start of the text by a removal is trimmed, every
/// other whitespace is kept as it is. A text without any match is returned
/// unchanged.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct TextNormalizer {
    link_removal: LinkRemoval,
}

impl TextNormalizer {
    pub const fn new(link_removal: LinkRemoval) -> Self {
        Self { link_removal }
    }

    pub fn link_removal(&self) -> LinkRemoval {
        self.link_removal
    }

    /// Normalizes a single text.
    pub fn normalize(&self, text: &str) -> String {
        let mut cleaned: Option<String> = None;
        loop {
            let current = cleaned.as_deref().unwrap_or(text);
            match self.apply_rules(current) {
                Some(next) => cleaned = Some(next),
                None => break,
            }
        }
        match cleaned {
            Some(value) => value.trim_start().to_string(),
            None => text.to_string(),
        }
    }

    /// A single pass over all rules, returns [None] if nothing matched.
    fn apply_rules(&self, text: &str) -> Option<String> {
        let rules: [&Regex; 4] = [
            &HASHTAG_MARKER,
            &RETWEET_HEADER,
            &MENTION,
            self.link_removal.pattern(),
        ];

        let mut cleaned: Option<String> = None;
        for rule in rules {
            let current = cleaned.as_deref().unwrap_or(text);
            if let Cow::Owned(next) = rule.replace_all(current, "") {
                cleaned = Some(next);
            }
        }
        cleaned
    }
}
