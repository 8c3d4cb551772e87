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

use crate::config::Config as TweetmoodConfig;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::runtime::ConfigErrors;
use log4rs::config::{Appender, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Config;
use thiserror::Error;

/// The file used when logging to a file
pub const LOG_FILE: &str = "tweetmood.log";

const PATTERN: &str = "{l}@Thread{I} - {d} - {m}{n}";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigErrors),
    #[error(transparent)]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

fn create_logging_config(configs: &TweetmoodConfig) -> Result<Config, LoggingError> {
    let config = Config::builder();

    let config = if configs.system.log_to_file {
        eprintln!("Logging to {LOG_FILE}!");
        let file_logger = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build(LOG_FILE)?;
        config.appender(Appender::builder().build("out", Box::new(file_logger)))
    } else {
        let console_logger = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build();
        config.appender(Appender::builder().build("out", Box::new(console_logger)))
    };

    Ok(config
        .logger(Logger::builder().build("tweetmood", configs.system.log_level))
        .build(Root::builder().appender("out").build(LevelFilter::Warn))?)
}

/// Configure the logging, can only be called once per process.
/// The console is stderr, stdout belongs to the report.
pub fn configure_logging(configs: &TweetmoodConfig) -> Result<(), LoggingError> {
    log4rs::init_config(create_logging_config(configs)?)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::create_logging_config;
    use crate::config::Config;

    #[test]
    fn console_logging_uses_the_configured_level() {
        let mut config = Config::default();
        config.system.log_level = log::LevelFilter::Debug;
        let logging = create_logging_config(&config).unwrap();
        assert_eq!(1, logging.appenders().len());
        let logger = logging
            .loggers()
            .iter()
            .find(|logger| logger.name() == "tweetmood")
            .unwrap();
        assert_eq!(log::LevelFilter::Debug, logger.level());
        assert_eq!(log::LevelFilter::Warn, logging.root().level());
    }
}
