// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "component_kit_log.txt";

/// Configure where component logs go, and at what level:
/// 1. a (daily rolling) file,
/// 2. stdout or stderr,
/// 3. both.
///
/// Use [`crate::try_initialize_logging_global`] for apps and
/// [`crate::try_initialize_logging_thread_local`] for tests. Both accept anything that is
/// [`Into<TracingConfig>`], so a bare [`tracing::Level`] or [`DisplayPreference`] works:
///
/// ```no_run
/// use component_kit::{DisplayPreference, TracingConfig, WriterConfig};
///
/// let from_level: TracingConfig = tracing::Level::DEBUG.into();
/// let from_display: TracingConfig = DisplayPreference::Stderr.into();
/// let to_file: TracingConfig = WriterConfig::File("fields.log".to_string()).into();
///
/// let composed = from_display + to_file;
/// component_kit::try_initialize_logging_global(composed).ok();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String /* tracing_log_file_path_and_prefix */),
    DisplayAndFile(DisplayPreference, String /* tracing_log_file_path_and_prefix */),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_file(filename: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self {
        Self {
            level_filter: level.into(),
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<DisplayPreference> for TracingConfig {
    fn from(preferred_display: DisplayPreference) -> Self {
        Self::new_display(preferred_display)
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

/// The more verbose level filter wins, and writer configs are merged with
/// [`WriterConfig`]'s `Add` rules.
impl Add<TracingConfig> for TracingConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            level_filter: self.level_filter.max(rhs.level_filter),
            writer_config: self.writer_config + rhs.writer_config,
        }
    }
}

/// `rhs` has higher specificity: when both sides set the same thing (a display, or a
/// file), the `rhs` value is kept. When they set different things, they are combined.
impl Add<WriterConfig> for WriterConfig {
    type Output = Self;

    fn add(self, rhs: WriterConfig) -> Self::Output {
        use WriterConfig::{Display, DisplayAndFile, File, None};

        match (self, rhs) {
            (None, it) | (it, None) => it,
            (Display(dp), File(f)) | (File(f), Display(dp)) => DisplayAndFile(dp, f),
            (Display(_) | File(_) | DisplayAndFile(..), DisplayAndFile(dp, f))
            | (DisplayAndFile(_, f), Display(dp))
            | (DisplayAndFile(dp, _), File(f)) => DisplayAndFile(dp, f),
            (Display(_), Display(dp)) => Display(dp),
            (File(_), File(f)) => File(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_add_writer_configs() {
        let stdout = WriterConfig::Display(DisplayPreference::Stdout);
        let stderr = WriterConfig::Display(DisplayPreference::Stderr);
        let file = WriterConfig::File("a.log".to_string());
        let stdout_and_file =
            WriterConfig::DisplayAndFile(DisplayPreference::Stdout, "a.log".to_string());
        let stderr_and_file =
            WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "a.log".to_string());

        // No collision.
        assert_eq!(WriterConfig::None + file.clone(), file);
        assert_eq!(stdout.clone() + WriterConfig::None, stdout);
        assert_eq!(stdout.clone() + file.clone(), stdout_and_file);
        assert_eq!(file.clone() + stderr.clone(), stderr_and_file);

        // Collision, rhs wins.
        assert_eq!(stdout.clone() + stderr.clone(), stderr);
        assert_eq!(stdout_and_file.clone() + stderr.clone(), stderr_and_file);
        assert_eq!(
            stderr_and_file + WriterConfig::File("b.log".to_string()),
            WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "b.log".to_string())
        );
        assert_eq!(file + stdout_and_file.clone(), stdout_and_file);
    }

    #[test]
    fn test_add_tracing_configs_keeps_more_verbose_level() {
        let lhs: TracingConfig = LevelFilter::WARN.into();
        let rhs: TracingConfig = DisplayPreference::Stdout.into();
        let it = lhs + rhs;
        assert_eq!(it.get_level_filter(), LevelFilter::DEBUG);
        assert_eq!(
            it.get_writer_config(),
            WriterConfig::DisplayAndFile(
                DisplayPreference::Stdout,
                DEFAULT_LOG_FILE_NAME.to_string()
            )
        );
    }
}
