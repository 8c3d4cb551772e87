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

use crate::post::{Categorized, HasNormalizedText, Normalized, Post, Raw, Scored};
use crate::sentiment::{SentimentCapability, SentimentScorer};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use text_processing::TextNormalizer;

/// An ordered collection of posts, the order is the retrieval order.
///
/// Every stage returns a new corpus, the consumed one stays as it is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus<S> {
    posts: Vec<Post<S>>,
}

impl<S> Corpus<S> {
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn posts(&self) -> &[Post<S>] {
        &self.posts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Post<S>> {
        self.posts.iter()
    }

    /// The first `n` posts in retrieval order.
    pub fn first(&self, n: usize) -> &[Post<S>] {
        &self.posts[..n.min(self.posts.len())]
    }
}

impl<'a, S> IntoIterator for &'a Corpus<S> {
    type Item = &'a Post<S>;
    type IntoIter = std::slice::Iter<'a, Post<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.iter()
    }
}

impl Corpus<Raw> {
    /// Creates a corpus, the ids are the positions in `texts`.
    pub fn from_texts<I, T>(texts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            posts: texts
                .into_iter()
                .enumerate()
                .map(|(id, text)| Post::new(id, text))
                .collect(),
        }
    }

    pub fn normalize(&self, normalizer: &TextNormalizer) -> Corpus<Normalized> {
        Corpus {
            posts: self
                .posts
                .iter()
                .map(|post| post.normalize(normalizer))
                .collect(),
        }
    }
}

impl Corpus<Normalized> {
    pub fn score<C: SentimentCapability>(&self, scorer: &SentimentScorer<C>) -> Corpus<Scored> {
        Corpus {
            posts: self.posts.iter().map(|post| post.score(scorer)).collect(),
        }
    }
}

impl Corpus<Scored> {
    pub fn categorize(&self) -> Corpus<Categorized> {
        Corpus {
            posts: self.posts.iter().map(Post::categorize).collect(),
        }
    }
}

impl<S: HasNormalizedText> Corpus<S> {
    /// All normalized texts joined by a single space, in corpus order.
    pub fn joined_text(&self) -> String {
        self.posts.iter().map(Post::normalized_text).join(" ")
    }
}
