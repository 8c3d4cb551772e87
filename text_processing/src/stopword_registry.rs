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

use camino::Utf8PathBuf;
use compact_str::{CompactString, ToCompactString};
use isolang::Language;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::hash::Hash;
use std::io::{BufRead, BufReader};
use std::sync::{Arc, PoisonError, RwLock};

use crate::configs::StopwordRegistryConfig;

const EMBEDDED_ENGLISH: &str = include_str!("../data/stopwords/eng.txt");

/// A registry for stopwords.
/// May have multiple repositories, the lists of all repositories providing
/// words for a language are combined.
#[derive(Debug, Default, Clone)]
pub struct StopWordRegistry {
    cached_stop_words: Arc<RwLock<HashMap<Language, Arc<StopWordList>>>>,
    repositories: Vec<StopWordRepository>,
}

impl StopWordRegistry {
    pub fn initialize(cfg: &StopwordRegistryConfig) -> Self {
        Self {
            repositories: cfg.to_vec(),
            ..Self::default()
        }
    }

    pub fn register(&mut self, repository: StopWordRepository) {
        self.repositories.push(repository)
    }

    fn load_stop_words(&self, language: &Language) -> Option<Vec<String>> {
        let mut collection = Vec::new();
        for repo in &self.repositories {
            if let Some(found) = repo.load_raw_stop_words(language) {
                collection.extend(found)
            }
        }
        (!collection.is_empty()).then_some(collection)
    }

    pub fn get_or_load(&self, language: &Language) -> Option<Arc<StopWordList>> {
        let lock = self
            .cached_stop_words
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(found) = lock.get(language).cloned() {
            return Some(found);
        }
        drop(lock);
        let mut lock = self
            .cached_stop_words
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        match lock.entry(*language) {
            Entry::Occupied(value) => Some(value.get().clone()),
            Entry::Vacant(value) => {
                let words = self.load_stop_words(language)?;
                log::debug!("Loaded {} stopwords for {}.", words.len(), language.to_639_3());
                Some(value.insert(Arc::new(words.into_iter().collect())).clone())
            }
        }
    }
}

/// A set of stopwords, stored lowercase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StopWordList {
    words: HashSet<CompactString>,
}

impl StopWordList {
    #[inline]
    pub fn contains<Q: ?Sized>(&self, value: &Q) -> bool
    where
        CompactString: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.words.contains(value)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<Q> Extend<Q> for StopWordList
where
    Q: ToCompactString,
{
    fn extend<T: IntoIterator<Item = Q>>(&mut self, iter: T) {
        for value in iter.into_iter() {
            let word = value.to_compact_string();
            let word = word.trim();
            if !word.is_empty() {
                self.words.insert(word.to_lowercase().to_compact_string());
            }
        }
        self.words.shrink_to_fit();
    }
}

impl<Q> FromIterator<Q> for StopWordList
where
    Q: ToCompactString,
{
    fn from_iter<T: IntoIterator<Item = Q>>(iter: T) -> Self {
        let mut new = Self::default();
        new.extend(iter);
        new
    }
}

/// A source of stopwords.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StopWordRepository {
    /// The list shipped with the binary, only english.
    Embedded,
    /// A file with one word per line for a single language.
    File {
        language: Language,
        file: Utf8PathBuf,
    },
}

/// Provides stop word lists for a specific language
pub trait StopWordListRepository {
    fn load_raw_stop_words(&self, language: &Language) -> Option<Vec<String>>;
}

impl StopWordListRepository for StopWordRepository {
    fn load_raw_stop_words(&self, language: &Language) -> Option<Vec<String>> {
        match self {
            StopWordRepository::Embedded => (*language == Language::Eng).then(|| {
                EMBEDDED_ENGLISH
                    .lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(str::to_owned)
                    .collect()
            }),
            StopWordRepository::File {
                language: file_lang,
                file,
            } => {
                if language != file_lang {
                    None
                } else if file.exists() {
                    BufReader::new(File::open(file).ok()?)
                        .lines()
                        .collect::<Result<Vec<_>, _>>()
                        .ok()
                } else {
                    log::warn!("The stopword file {} does not exist!", file);
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::{StopWordListRepository, StopWordRegistry, StopWordRepository};
    use crate::configs::StopwordRegistryConfig;
    use camino_tempfile::NamedUtf8TempFile;
    use isolang::Language;
    use std::io::Write;
    use std::sync::Arc;

    #[test]
    fn embedded_list_is_english_only() {
        let repo = StopWordRepository::Embedded;
        let english = repo.load_raw_stop_words(&Language::Eng).unwrap();
        assert!(english.iter().any(|value| value == "the"));
        assert!(repo.load_raw_stop_words(&Language::Deu).is_none());
    }

    #[test]
    fn combines_repositories_and_caches() {
        let mut file = NamedUtf8TempFile::new().unwrap();
        writeln!(file, "Tuesday").unwrap();
        writeln!(file, "  ").unwrap();
        file.flush().unwrap();

        let mut registry = StopWordRegistry::initialize(&StopwordRegistryConfig::default());
        registry.register(StopWordRepository::File {
            language: Language::Eng,
            file: file.path().to_path_buf(),
        });

        let list = registry.get_or_load(&Language::Eng).unwrap();
        assert!(list.contains("the"));
        assert!(list.contains("tuesday"));
        assert!(!list.contains(""));
        assert!(Arc::ptr_eq(&list, &registry.get_or_load(&Language::Eng).unwrap()));
        assert!(registry.get_or_load(&Language::Fra).is_none());
    }

    #[test]
    fn repository_config_roundtrips_through_json() {
        let cfg: StopwordRegistryConfig = serde_json::from_str(
            r#"[{"kind":"embedded"},{"kind":"file","language":"eng","file":"words.txt"}]"#,
        )
        .unwrap();
        assert_eq!(2, cfg.len());
        assert_eq!(StopWordRepository::Embedded, cfg[0]);
    }
}
