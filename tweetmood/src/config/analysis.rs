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

use crate::sentiment::{LexiconAnalyzer, LexiconError};
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use text_processing::configs::{StopwordRegistryConfig, TokenizerConfig};

/// The default number of raw posts logged before the analysis
pub const DEFAULT_PREVIEW: usize = 5;
/// The default number of words in the word frequencies of a report
pub const DEFAULT_CLOUD_WORDS: usize = 50;

/// Config of the sentiment scorer.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ScorerConfig {
    /// A csv lexicon replacing the embedded one.
    pub lexicon: Option<Utf8PathBuf>,
}

impl ScorerConfig {
    pub fn create_analyzer(&self) -> Result<LexiconAnalyzer, LexiconError> {
        match &self.lexicon {
            None => LexiconAnalyzer::embedded(),
            Some(path) => {
                log::debug!("Loading the lexicon from {path}.");
                LexiconAnalyzer::load(path)
            }
        }
    }
}

/// Config of the report.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// The number of raw posts logged before the analysis (default: 5)
    pub preview: usize,
    /// The number of most frequent words in the report (default: 50)
    pub cloud_words: usize,
    /// How the joined text is split into words
    pub tokenizer: TokenizerConfig,
    /// Where the stop words for the word frequencies come from
    pub stopwords: StopwordRegistryConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            preview: DEFAULT_PREVIEW,
            cloud_words: DEFAULT_CLOUD_WORDS,
            tokenizer: TokenizerConfig::default(),
            stopwords: StopwordRegistryConfig::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{ReportConfig, ScorerConfig};
    use crate::sentiment::LexiconError;
    use camino_tempfile::NamedUtf8TempFile;
    use std::io::Write;

    #[test]
    fn creates_the_embedded_analyzer_by_default() {
        let analyzer = ScorerConfig::default().create_analyzer().unwrap();
        assert!(!analyzer.is_empty());
    }

    #[test]
    fn loads_a_configured_lexicon() {
        let mut file = NamedUtf8TempFile::new().unwrap();
        writeln!(file, "word,polarity,subjectivity,intensity").unwrap();
        writeln!(file, "sunny,0.5,0.5,1.0").unwrap();
        file.flush().unwrap();
        let config = ScorerConfig {
            lexicon: Some(file.path().to_path_buf()),
        };
        let analyzer = config.create_analyzer().unwrap();
        assert_eq!(1, analyzer.len());
        assert!(analyzer.get("sunny").is_some());

        let missing = ScorerConfig {
            lexicon: Some("does/not/exist.csv".into()),
        };
        assert!(matches!(missing.create_analyzer(), Err(LexiconError::IO(_))));
    }

    #[test]
    fn partial_report_config_uses_defaults() {
        let config: ReportConfig = serde_json::from_str(r#"{"preview": 2}"#).unwrap();
        assert_eq!(2, config.preview);
        assert_eq!(50, config.cloud_words);
        assert_eq!(ReportConfig::default().tokenizer, config.tokenizer);
    }
}
