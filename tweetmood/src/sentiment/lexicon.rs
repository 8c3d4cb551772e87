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

use crate::sentiment::{Sentiment, SentimentCapability};
use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use text_processing::Tokenizer;
use thiserror::Error;

const EMBEDDED_LEXICON: &str = include_str!("../../data/lexicon.csv");

/// Words flipping the polarity of the following rated word.
const NEGATIONS: [&str; 8] = ["not", "no", "never", "nothing", "nobody", "none", "neither", "nor"];

/// Factor applied to the polarity of a negated word.
const NEGATION_FACTOR: f64 = -0.5;

/// An error while loading a lexicon
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    CSV(#[from] csv::Error),
    #[error("The lexicon does not contain any entry!")]
    Empty,
}

/// A single row of a lexicon csv (`word,polarity,subjectivity,intensity`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub word: String,
    pub polarity: f64,
    pub subjectivity: f64,
    /// Everything except 1.0 marks an intensifier, which scales the next rated word.
    #[serde(default = "_default_intensity")]
    pub intensity: f64,
}

fn _default_intensity() -> f64 {
    1.0
}

impl LexiconEntry {
    pub fn is_intensifier(&self) -> bool {
        self.intensity != 1.0
    }
}

/// A fixed, lexicon based [SentimentCapability].
///
/// Every rated word contributes its polarity and subjectivity, the result is
/// the mean over all rated words. Intensifiers scale the next rated word,
/// a negation flips its polarity by [NEGATION_FACTOR].
#[derive(Debug, Clone)]
pub struct LexiconAnalyzer {
    entries: HashMap<String, LexiconEntry>,
    tokenizer: Tokenizer,
}

impl LexiconAnalyzer {
    /// The lexicon shipped with the binary
    pub fn embedded() -> Result<Self, LexiconError> {
        Self::from_reader(EMBEDDED_LEXICON.as_bytes())
    }

    /// Loads a csv lexicon from `path`
    pub fn load<P: AsRef<Utf8Path>>(path: P) -> Result<Self, LexiconError> {
        let file = File::options().read(true).open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LexiconError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);
        let entries = reader
            .deserialize()
            .collect::<Result<Vec<LexiconEntry>, _>>()?;
        if entries.is_empty() {
            return Err(LexiconError::Empty);
        }
        Ok(Self::from_entries(entries))
    }

    pub fn from_entries<I: IntoIterator<Item = LexiconEntry>>(entries: I) -> Self {
        let entries: HashMap<_, _> = entries
            .into_iter()
            .map(|entry| (entry.word.to_lowercase(), entry))
            .collect();
        log::debug!("Created a lexicon with {} entries.", entries.len());
        Self {
            entries,
            tokenizer: Tokenizer::new(true, 1, None),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.get(word)
    }

    fn is_negation(token: &str) -> bool {
        NEGATIONS.contains(&token) || token.ends_with("n't") || token.ends_with("n\u{2019}t")
    }
}

impl SentimentCapability for LexiconAnalyzer {
    fn analyze(&self, text: &str) -> Sentiment {
        let mut polarity = 0.0;
        let mut subjectivity = 0.0;
        let mut rated = 0usize;

        let mut negated = false;
        let mut intensity = 1.0;
        for token in self.tokenizer.tokenize(text) {
            if Self::is_negation(&token) {
                negated = true;
                continue;
            }
            match self.entries.get(&token) {
                Some(entry) if entry.is_intensifier() => {
                    intensity *= entry.intensity;
                    continue;
                }
                Some(entry) => {
                    let mut word_polarity = entry.polarity * intensity;
                    if negated {
                        word_polarity *= NEGATION_FACTOR;
                    }
                    polarity += word_polarity;
                    subjectivity += (entry.subjectivity * intensity).min(1.0);
                    rated += 1;
                }
                None => {}
            }
            negated = false;
            intensity = 1.0;
        }

        if rated == 0 {
            return Sentiment::NEUTRAL;
        }
        Sentiment::new(subjectivity / rated as f64, polarity / rated as f64).clamped()
    }
}

#[cfg(test)]
mod test {
    use super::{LexiconAnalyzer, LexiconEntry, LexiconError};
    use crate::sentiment::{Sentiment, SentimentCapability};
    use float_cmp::approx_eq;

    fn entry(word: &str, polarity: f64, subjectivity: f64, intensity: f64) -> LexiconEntry {
        LexiconEntry {
            word: word.to_string(),
            polarity,
            subjectivity,
            intensity,
        }
    }

    fn small_lexicon() -> LexiconAnalyzer {
        LexiconAnalyzer::from_entries([
            entry("good", 0.7, 0.6, 1.0),
            entry("bad", -0.7, 0.6, 1.0),
            entry("excellent", 1.0, 1.0, 1.0),
            entry("very", 0.2, 0.3, 1.3),
        ])
    }

    fn assert_sentiment(expected: Sentiment, actual: Sentiment) {
        assert!(
            approx_eq!(f64, expected.subjectivity, actual.subjectivity, epsilon = 1e-9)
                && approx_eq!(f64, expected.polarity, actual.polarity, epsilon = 1e-9),
            "expected {expected:?} but got {actual:?}"
        );
    }

    #[test]
    fn embedded_lexicon_loads() {
        let lexicon = LexiconAnalyzer::embedded().unwrap();
        assert!(!lexicon.is_empty());
        assert!(lexicon.get("great").is_some());
        assert!(lexicon.get("very").unwrap().is_intensifier());
        assert!(lexicon.analyze("Great news! health ").polarity > 0.0);
        assert!(lexicon.analyze("I hate delays.").polarity < 0.0);
        assert_eq!(Sentiment::NEUTRAL, lexicon.analyze("It is Tuesday."));
    }

    #[test]
    fn averages_rated_words() {
        let lexicon = small_lexicon();
        assert_sentiment(Sentiment::new(0.6, 0.7), lexicon.analyze("Good"));
        assert_sentiment(
            Sentiment::new(2.2 / 3.0, 1.0 / 3.0),
            lexicon.analyze("good, but excellent... BAD"),
        );
        assert_sentiment(Sentiment::NEUTRAL, lexicon.analyze("nothing rated here"));
    }

    #[test]
    fn negation_and_intensifiers() {
        let lexicon = small_lexicon();
        assert_sentiment(Sentiment::new(0.6, -0.35), lexicon.analyze("not good"));
        assert_sentiment(Sentiment::new(0.6, -0.35), lexicon.analyze("isn't good"));
        assert_sentiment(Sentiment::new(0.78, 0.91), lexicon.analyze("very good"));
        assert_sentiment(Sentiment::new(0.78, -0.455), lexicon.analyze("not very good"));
        assert_sentiment(Sentiment::new(1.0, 1.0), lexicon.analyze("very very excellent"));
        assert_sentiment(Sentiment::NEUTRAL, lexicon.analyze("very"));
    }

    #[test]
    fn loads_custom_csv() {
        let csv = "word, polarity, subjectivity\nYay, 0.9, 0.8\nmeh, -0.1, 0.4\n";
        let lexicon = LexiconAnalyzer::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(2, lexicon.len());
        assert!(!lexicon.get("yay").unwrap().is_intensifier());
        assert_sentiment(Sentiment::new(0.6, 0.4), lexicon.analyze("yay meh"));
    }

    #[test]
    fn rejects_empty_or_broken_csv() {
        assert!(matches!(
            LexiconAnalyzer::from_reader("word,polarity,subjectivity\n".as_bytes()),
            Err(LexiconError::Empty)
        ));
        assert!(matches!(
            LexiconAnalyzer::from_reader("word,polarity,subjectivity\ngood,high,0.5\n".as_bytes()),
            Err(LexiconError::CSV(_))
        ));
        assert!(matches!(
            LexiconAnalyzer::load("does/not/exist.csv"),
            Err(LexiconError::IO(_))
        ));
    }
}
