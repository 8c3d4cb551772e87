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

use crate::aggregator::Aggregator;
use crate::config::Config;
use crate::corpus::Corpus;
use crate::post::Categorized;
use crate::report::Report;
use crate::sentiment::{SentimentCapability, SentimentScorer};
use isolang::Language;
use text_processing::stopword_registry::StopWordRegistry;
use text_processing::{TextNormalizer, Tokenizer};

/// normalize → score → categorize → aggregate
#[derive(Debug, Clone)]
pub struct Pipeline<C> {
    normalizer: TextNormalizer,
    scorer: SentimentScorer<C>,
    aggregator: Aggregator,
}

impl<C: SentimentCapability> Pipeline<C> {
    pub fn new(normalizer: TextNormalizer, capability: C, aggregator: Aggregator) -> Self {
        Self {
            normalizer,
            scorer: SentimentScorer::new(capability),
            aggregator,
        }
    }

    pub fn with_config(config: &Config, capability: C) -> Self {
        let registry = StopWordRegistry::initialize(&config.report.stopwords);
        let language = config.source.language.unwrap_or(Language::Eng);
        let stop_words = registry.get_or_load(&language);
        if stop_words.is_none() {
            log::warn!(
                "No stopwords found for {}, the word frequencies are unfiltered.",
                language.to_639_3()
            );
        }
        let tokenizer = Tokenizer::with_config(&config.report.tokenizer, stop_words);
        Self::new(
            config.normalizer.create_normalizer(),
            capability,
            Aggregator::new(config.report.cloud_words, tokenizer),
        )
    }

    /// Runs every stage except the aggregation.
    pub fn categorize<I, T>(&self, texts: I) -> Corpus<Categorized>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let raw = Corpus::from_texts(texts);
        log::debug!("Normalizing {} posts.", raw.len());
        let normalized = raw.normalize(&self.normalizer);
        log::debug!("Scoring {} posts.", normalized.len());
        normalized.score(&self.scorer).categorize()
    }

    pub fn run<I, T>(&self, texts: I) -> Report
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.aggregator.aggregate(&self.categorize(texts))
    }
}
