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

mod args;
mod config;
mod instruction;
mod logging;
mod render;

pub use args::{RunMode, TweetmoodArgs};
pub use instruction::{Instruction, InstructionError, RunInstruction};
pub use render::{render_summary, write_report};

use crate::app::instruction::prepare_instruction;
use crate::app::logging::configure_logging;
use crate::pipeline::Pipeline;
use crate::report::Report;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::process::ExitCode;

pub fn exec_args(args: TweetmoodArgs) -> ExitCode {
    match prepare_instruction(args) {
        Ok(Instruction::RunInstruction(instruction)) => {
            if let Err(err) = configure_logging(&instruction.config) {
                eprintln!("Failed to configure the logging: {err}");
                return ExitCode::FAILURE;
            }
            match execute(instruction) {
                Ok(_) => ExitCode::SUCCESS,
                Err(err) => {
                    log::error!("Failed with: {err}");
                    ExitCode::FAILURE
                }
            }
        }
        Ok(Instruction::Nothing) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Failed with: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Execute the analysis and write the report.
pub fn execute(instruction: RunInstruction) -> Result<Report, InstructionError> {
    execute_with_stdout(instruction, std::io::stdout().lock())
}

/// Execute the analysis, `stdout` receives the report if no output file is set.
pub fn execute_with_stdout<W: Write>(
    instruction: RunInstruction,
    stdout: W,
) -> Result<Report, InstructionError> {
    let RunInstruction {
        config,
        input,
        format,
        output,
        json,
    } = instruction;

    log::info!("Reading {format} posts from {input}.");
    let texts = format.create_source(input).fetch(&config.source)?;
    for (idx, text) in texts.iter().take(config.report.preview).enumerate() {
        log::info!("Post {}: {}", idx + 1, text);
    }

    let pipeline = Pipeline::with_config(&config, config.scorer.create_analyzer()?);
    let report = pipeline.run(texts);

    match output {
        None => write_report(&report, json, stdout)?,
        Some(path) => {
            let file = File::create(&path)?;
            write_report(&report, json, BufWriter::new(file))?;
            log::info!("Written the report to {path}.");
        }
    }

    Ok(report)
}
