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

use crate::config::analysis::{ReportConfig, ScorerConfig};
use crate::config::SystemConfig;
use crate::source::SourceSettings;
use serde::{Deserialize, Serialize};
use text_processing::configs::NormalizerConfig;

/// A collection of all config used in an analysis.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename(serialize = "Config"))]
pub struct Config {
    #[serde(default)]
    pub system: SystemConfig,
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub normalizer: NormalizerConfig,
    #[serde(default)]
    pub scorer: ScorerConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[cfg(test)]
mod test {
    use super::Config;
    use isolang::Language;
    use text_processing::LinkRemoval;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(log::LevelFilter::Info, config.system.log_level);
        assert!(!config.system.log_to_file);
        assert_eq!(100, config.source.max_posts);
        assert_eq!(Some(Language::Eng), config.source.language);
        assert_eq!(LinkRemoval::Token, config.normalizer.link_removal);
        assert_eq!(None, config.scorer.lexicon);
        assert_eq!(5, config.report.preview);
        assert_eq!(50, config.report.cloud_words);
    }

    #[test]
    fn empty_json_is_the_default() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(Config::default(), config);
    }

    #[test]
    fn can_be_written_and_read_again() {
        let mut config = Config::default();
        config.source.max_posts = 1000;
        config.source.language = None;
        config.normalizer.link_removal = LinkRemoval::SingleCharacter;
        let serialized = serde_json::to_string_pretty(&config).unwrap();
        let read: Config = serde_json::from_str(&serialized).unwrap();
        assert_eq!(config, read);
    }
}
