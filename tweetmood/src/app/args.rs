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

use clap::{Parser, Subcommand};
use std::str::FromStr;

use crate::source::InputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Welcome to tweetmood, the sentiment of your posts at a glance.
pub struct TweetmoodArgs {
    /// The mode of tweetmood
    #[command(subcommand)]
    pub mode: RunMode,
}

#[derive(Subcommand, Debug)]
pub enum RunMode {
    /// Analyzes the posts of a file and reports the sentiment categories.
    ANALYZE {
        /// The file containing the posts.
        input: String,
        /// The format of the input file.
        #[arg(
            short, long, value_parser = InputFormat::from_str, default_value_t = InputFormat::Lines
        )]
        format: InputFormat,
        /// The folder containing the config.
        #[arg(short, long)]
        config: Option<String>,
        /// Overrides the maximum number of analyzed posts.
        #[arg(short, long)]
        max_posts: Option<usize>,
        /// Keeps posts of any language.
        #[arg(long)]
        any_language: bool,
        /// Writes the report to this file instead of stdout.
        #[arg(short, long)]
        output: Option<String>,
        /// Writes the full report as json instead of a summary.
        #[arg(long)]
        json: bool,
        /// Overrides the number of posts logged before the analysis.
        #[arg(short, long)]
        preview: Option<usize>,
        /// Overrides the log level from the config.
        #[arg(long)]
        log_level: Option<log::LevelFilter>,
        /// Log to file
        #[arg(long)]
        log_to_file: bool,
    },
    /// Initializes tweetmood by creating the default config file.
    INIT {
        /// The folder for the config, the working directory if not set.
        #[arg(short, long)]
        dir: Option<String>,
    },
}

#[cfg(test)]
mod test {
    use super::{RunMode, TweetmoodArgs};
    use crate::source::InputFormat;
    use clap::{CommandFactory, Parser};

    #[test]
    fn args_are_consistent() {
        TweetmoodArgs::command().debug_assert();
    }

    #[test]
    fn can_parse_analyze() {
        let args = TweetmoodArgs::try_parse_from([
            "tweetmood",
            "analyze",
            "posts.json",
            "--format",
            "json",
            "--max-posts",
            "1000",
            "--json",
            "--log-level",
            "debug",
        ])
        .unwrap();
        match args.mode {
            RunMode::ANALYZE {
                input,
                format,
                max_posts,
                json,
                log_level,
                config,
                any_language,
                ..
            } => {
                assert_eq!("posts.json", input);
                assert_eq!(InputFormat::Json, format);
                assert_eq!(Some(1000), max_posts);
                assert!(json);
                assert_eq!(Some(log::LevelFilter::Debug), log_level);
                assert_eq!(None, config);
                assert!(!any_language);
            }
            other => panic!("Unexpected mode {other:?}"),
        }
    }

    #[test]
    fn format_defaults_to_lines() {
        let args = TweetmoodArgs::try_parse_from(["tweetmood", "analyze", "posts.txt"]).unwrap();
        assert!(matches!(
            args.mode,
            RunMode::ANALYZE {
                format: InputFormat::Lines,
                ..
            }
        ));
        assert!(TweetmoodArgs::try_parse_from(["tweetmood", "analyze"]).is_err());
        assert!(
            TweetmoodArgs::try_parse_from(["tweetmood", "analyze", "x", "--format", "csv"])
                .is_err()
        );
    }
}
