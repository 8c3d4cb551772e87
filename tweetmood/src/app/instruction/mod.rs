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

mod error;
mod instruction;

use crate::app::args::{RunMode, TweetmoodArgs};
use crate::app::config::{discover_or_default, try_load_from_path};
use crate::config::Config;
use camino::Utf8PathBuf;
pub use error::*;
pub use instruction::*;
use std::fs::File;
use std::io::BufWriter;

/// The name of the config file written by INIT
pub const CONFIG_FILE_NAME: &str = "tweetmood_config.json";

/// Consumes the args and returns everything necessary to execute tweetmood
pub(crate) fn prepare_instruction(args: TweetmoodArgs) -> Result<Instruction, InstructionError> {
    match args.mode {
        RunMode::ANALYZE {
            input,
            format,
            config: config_folder,
            max_posts,
            any_language,
            output,
            json,
            preview,
            log_level,
            log_to_file,
        } => {
            let mut config = match config_folder {
                None => discover_or_default(),
                Some(path) => try_load_from_path(Utf8PathBuf::from(path)),
            }?;

            if let Some(max_posts) = max_posts {
                config.source.max_posts = max_posts;
            }

            if any_language {
                config.source.language = None;
            }

            if let Some(preview) = preview {
                config.report.preview = preview;
            }

            if let Some(log_level) = log_level {
                config.system.log_level = log_level;
            }

            if log_to_file {
                config.system.log_to_file = log_to_file;
            }

            Ok(Instruction::RunInstruction(RunInstruction {
                config,
                input: Utf8PathBuf::from(input),
                format,
                output: output.map(Utf8PathBuf::from),
                json,
            }))
        }
        RunMode::INIT { dir } => {
            println!("Start creating the default config.");
            let root = dir.map_or_else(|| Utf8PathBuf::from("."), Utf8PathBuf::from);
            std::fs::create_dir_all(&root)?;
            let path = root.join(CONFIG_FILE_NAME);
            if path.exists() {
                println!(
                    "The default config already exists in {path}.\nDelete it before regenerating."
                )
            } else {
                let file = File::options().create_new(true).write(true).open(&path)?;
                serde_json::to_writer_pretty(BufWriter::new(file), &Config::default())?;
                println!("Created the default config at {path}.");
            }
            Ok(Instruction::Nothing)
        }
    }
}
