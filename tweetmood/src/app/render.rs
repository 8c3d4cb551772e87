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

use crate::report::Report;
use itertools::Itertools;
use std::io::Write;

/// The number of words shown in the text summary
pub const SUMMARY_WORDS: usize = 10;

/// A console summary of the report, mirroring the labels of a bar chart.
pub fn render_summary(report: &Report) -> String {
    let mut lines = vec![format!("Total: {} posts", report.total)];
    lines.extend(report.summaries().iter().map(|summary| {
        format!(
            "{}: {} ({:.2} %)",
            summary.category, summary.count, summary.percentage
        )
    }));
    if !report.word_frequencies.is_empty() {
        lines.push(format!(
            "Top words: {}",
            report
                .word_frequencies
                .iter()
                .take(SUMMARY_WORDS)
                .map(|value| format!("{} ({})", value.word, value.count))
                .join(", ")
        ));
    }
    lines.iter().map(|line| format!("{line}\n")).collect()
}

/// Writes the report either as summary or as pretty json.
pub fn write_report<W: Write>(report: &Report, json: bool, mut writer: W) -> std::io::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut writer, report)?;
        writeln!(writer)?;
    } else {
        writer.write_all(render_summary(report).as_bytes())?;
    }
    writer.flush()
}
