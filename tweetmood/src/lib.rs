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

//! Sentiment analysis for short social media posts.
//!
//! Posts run through a pipeline of immutable stages: normalization,
//! scoring, categorization and aggregation into a [report::Report].

pub mod aggregator;
pub mod app;
pub mod category;
pub mod config;
pub mod corpus;
pub mod pipeline;
pub mod post;
pub mod report;
pub mod sentiment;
pub mod source;

pub use app::exec_args;
