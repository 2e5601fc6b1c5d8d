//! Logging setup for the Piste dashboard
//!
//! Structured logging over the `tracing` ecosystem:
//!
//! - **Console output**: pretty human-readable format in development,
//!   JSON lines otherwise.
//! - **File output**: JSON lines to a daily-rotated file with a bounded
//!   number of retained files, written through a non-blocking worker.
//! - **Email obfuscation**: every sink is wrapped in a
//!   [`RedactingWriter`], so email addresses never reach a log in full.
//!   Development keeps two visible characters of the local part, other
//!   profiles none.
//!
//! # Quick start
//!
//! ```ignore
//! use piste_logging::{LogConfig, PisteSubscriberBuilder};
//!
//! // Hold the guard for the lifetime of the program.
//! let _guard = PisteSubscriberBuilder::new()
//!     .with_config(LogConfig::development())
//!     .init();
//! ```

pub mod config;
pub mod redact;

pub use config::{ConsoleConfig, FileConfig, LogConfig};
pub use redact::{obfuscate_email, RedactingWriter};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Builder for configuring and initializing the Piste subscriber
pub struct PisteSubscriberBuilder {
    config: LogConfig,
}

impl PisteSubscriberBuilder {
    /// Create a new subscriber builder with default configuration
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
        }
    }

    /// Use a specific configuration
    pub fn with_config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the default log level
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config.default_level = level.into();
        self
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.config.console.enabled = enabled;
        self
    }

    /// Configure file output
    pub fn with_file_output(mut self, config: FileConfig) -> Self {
        self.config.file = Some(config);
        self
    }

    /// Initialize the subscriber globally
    ///
    /// Returns a guard that must be kept alive for the duration of the
    /// program when file output is enabled.
    ///
    /// # Panics
    ///
    /// Panics if a global subscriber has already been set, or if the
    /// log directory cannot be created.
    pub fn init(self) -> Option<WorkerGuard> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.config.default_level));

        let visible = self.config.obfuscated_length;
        let registry = Registry::default().with(env_filter);

        // Separate match arms for pretty vs JSON console to satisfy the
        // type system.
        let mut guard = None;
        match (
            self.config.console.enabled,
            self.config.console.pretty,
            &self.config.file,
        ) {
            (true, true, Some(file_config)) => {
                let (non_blocking, g) = file_writer(file_config);
                guard = Some(g);

                let console_layer = tracing_subscriber::fmt::layer()
                    .with_ansi(self.config.console.ansi)
                    .with_target(true)
                    .with_writer(RedactingWriter::new(std::io::stdout, visible));
                let file_layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(RedactingWriter::new(non_blocking, visible));
                registry.with(console_layer).with(file_layer).init();
            }

            (true, false, Some(file_config)) => {
                let (non_blocking, g) = file_writer(file_config);
                guard = Some(g);

                let console_layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(RedactingWriter::new(std::io::stdout, visible));
                let file_layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(RedactingWriter::new(non_blocking, visible));
                registry.with(console_layer).with(file_layer).init();
            }

            (true, true, None) => {
                let console_layer = tracing_subscriber::fmt::layer()
                    .with_ansi(self.config.console.ansi)
                    .with_target(true)
                    .with_writer(RedactingWriter::new(std::io::stdout, visible));
                registry.with(console_layer).init();
            }

            (true, false, None) => {
                let console_layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(RedactingWriter::new(std::io::stdout, visible));
                registry.with(console_layer).init();
            }

            (false, _, Some(file_config)) => {
                let (non_blocking, g) = file_writer(file_config);
                guard = Some(g);

                let file_layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(RedactingWriter::new(non_blocking, visible));
                registry.with(file_layer).init();
            }

            (false, _, None) => {
                registry.init();
            }
        }

        guard
    }
}

impl Default for PisteSubscriberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the daily-rotating non-blocking file writer
fn file_writer(
    config: &FileConfig,
) -> (tracing_appender::non_blocking::NonBlocking, WorkerGuard) {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(&config.prefix)
        .max_log_files(config.max_files)
        .build(&config.directory)
        .expect("Failed to create rotating log file");
    tracing_appender::non_blocking(appender)
}

/// Initialize logging for the given configuration profile
///
/// Convenience wrapper used by the binaries: dev gets pretty console
/// output, test a quiet console, prod rotating JSON files.
pub fn init_for_profile(
    profile: piste_core::Profile,
    log_dir: std::path::PathBuf,
) -> Option<WorkerGuard> {
    PisteSubscriberBuilder::new()
        .with_config(LogConfig::for_profile(profile, log_dir))
        .init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_creation() {
        let builder = PisteSubscriberBuilder::new();
        assert_eq!(builder.config.default_level, "info");
    }

    #[test]
    fn test_builder_with_config() {
        let builder = PisteSubscriberBuilder::new().with_config(LogConfig::development());
        assert_eq!(builder.config.default_level, "debug");
        assert!(builder.config.console.pretty);
    }

    #[test]
    fn test_builder_with_level() {
        let builder = PisteSubscriberBuilder::new().with_level("trace");
        assert_eq!(builder.config.default_level, "trace");
    }

    #[test]
    fn test_builder_with_file_output() {
        let dir = tempfile::tempdir().unwrap();
        let builder = PisteSubscriberBuilder::new().with_file_output(FileConfig {
            directory: dir.path().to_path_buf(),
            ..Default::default()
        });
        assert!(builder.config.file.is_some());
    }
}
