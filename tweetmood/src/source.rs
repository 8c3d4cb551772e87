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

use camino::{Utf8Path, Utf8PathBuf};
use isolang::Language;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use strum::{Display, EnumString};
use thiserror::Error;

/// The default number of posts taken from a source
pub const DEFAULT_MAX_POSTS: usize = 100;

/// An error while retrieving posts, always fatal.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Bounds what is taken from a source.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct SourceSettings {
    /// The maximum number of posts (default: 100)
    pub max_posts: usize,
    /// Only posts in this language are kept, if set. (default: eng)
    pub language: Option<Language>,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            max_posts: DEFAULT_MAX_POSTS,
            language: Some(Language::Eng),
        }
    }
}

impl SourceSettings {
    /// Checks the language of a post.
    /// A declared language has to match, otherwise the language is detected
    /// and the post is only dropped if the detection is reliable and differs.
    pub fn accepts(&self, post: &SourcePost) -> bool {
        let Some(target) = self.language else {
            return true;
        };
        match post.lang.as_deref().and_then(parse_language) {
            Some(declared) => declared == target,
            None => match whatlang::detect(&post.text) {
                Some(info) if info.is_reliable() => Language::from_639_3(info.lang().code())
                    .map_or(true, |detected| detected == target),
                _ => true,
            },
        }
    }
}

fn parse_language(code: &str) -> Option<Language> {
    let code = code.trim().to_lowercase();
    Language::from_639_1(&code).or_else(|| Language::from_639_3(&code))
}

/// A single retrieved post.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SourcePost {
    pub text: String,
    /// The language declared by the source, ISO 639-1 or 639-3.
    pub lang: Option<String>,
}

impl SourcePost {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: None,
        }
    }

    pub fn with_lang(text: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: Some(lang.into()),
        }
    }
}

/// Provides the raw posts.
pub trait PostSource {
    /// Everything the source has, in retrieval order.
    fn read_posts(&self) -> Result<Vec<SourcePost>, SourceError>;

    /// The texts accepted by the settings, at most `settings.max_posts`.
    fn fetch(&self, settings: &SourceSettings) -> Result<Vec<String>, SourceError> {
        let posts = self.read_posts()?;
        let available = posts.len();
        let texts: Vec<String> = posts
            .into_iter()
            .filter(|post| settings.accepts(post))
            .map(|post| post.text)
            .take(settings.max_posts)
            .collect();
        log::info!("Retrieved {} posts, {} available.", texts.len(), available);
        Ok(texts)
    }
}

/// The supported input formats.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum InputFormat {
    /// One post per line
    #[default]
    Lines,
    /// A json array of strings or objects with `full_text`/`text` and `lang`
    Json,
}

impl InputFormat {
    pub fn create_source(self, path: impl Into<Utf8PathBuf>) -> Box<dyn PostSource> {
        match self {
            InputFormat::Lines => Box::new(LineFileSource::new(path)),
            InputFormat::Json => Box::new(JsonFileSource::new(path)),
        }
    }
}

/// A text file with one post per line, blank lines are skipped.
#[derive(Debug, Clone)]
pub struct LineFileSource {
    path: Utf8PathBuf,
}

impl LineFileSource {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl PostSource for LineFileSource {
    fn read_posts(&self) -> Result<Vec<SourcePost>, SourceError> {
        let reader = BufReader::new(File::options().read(true).open(&self.path)?);
        let mut posts = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                posts.push(SourcePost::new(line));
            }
        }
        Ok(posts)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonPost {
    Text(String),
    Record {
        #[serde(alias = "text")]
        full_text: String,
        #[serde(default)]
        lang: Option<String>,
    },
}

impl From<JsonPost> for SourcePost {
    fn from(value: JsonPost) -> Self {
        match value {
            JsonPost::Text(text) => SourcePost::new(text),
            JsonPost::Record { full_text, lang } => SourcePost {
                text: full_text,
                lang,
            },
        }
    }
}

/// A json export of posts.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: Utf8PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl PostSource for JsonFileSource {
    fn read_posts(&self) -> Result<Vec<SourcePost>, SourceError> {
        let reader = BufReader::new(File::options().read(true).open(&self.path)?);
        let posts: Vec<JsonPost> = serde_json::from_reader(reader)?;
        Ok(posts.into_iter().map(SourcePost::from).collect())
    }
}
