//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `error`: profile failures, comparative shape mismatches
//! - `warn`: missing categories counted as zero, unknown median bins
//! - `info`: profile and section progress
//! - `debug`: per-query details
//! - `trace`: everything else
//!
//! The profile builder opens one span per profile and one per section. With
//! [`LogConfig::with_span_timings`] each closing span reports its busy and
//! idle time.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Crates whose events follow the configured level; everything else stays at
/// `warn`.
const WORKSPACE_CRATES: &[&str] = &[
    "census_cli",
    "census_core",
    "census_ingest",
    "census_model",
    "census_recode",
    "census_transform",
];

/// Formatting layer with its filter, ready to stack on the registry.
pub type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Maximum level emitted by the workspace crates.
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` override `level_filter` when set.
    pub use_env_filter: bool,
    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
    /// Whether to include target (module path) in log output.
    pub with_target: bool,
    /// Whether to use ANSI colors in output. Ignored for JSON.
    pub with_ansi: bool,
    /// Emit an event with busy and idle time when a profile or section span
    /// closes.
    pub with_span_timings: bool,
    pub format: LogFormat,
    /// Optional log file path. When set, logs are appended to the file.
    pub log_file: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-field format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON lines for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_timestamps: false,
            with_target: false,
            with_ansi: true,
            with_span_timings: false,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let layer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            build_layer(config, Mutex::new(file))
        }
        None => build_layer(config, io::stderr),
    };
    tracing_subscriber::registry().with(layer).init();
    Ok(())
}

/// The formatting layer for `config`, writing to `writer` and filtered by
/// [`default_directives`] (or `RUST_LOG` when allowed).
pub fn build_layer<W>(config: &LogConfig, writer: W) -> BoxedLayer
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let span_events = if config.with_span_timings {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };
    let base = fmt::layer()
        .with_writer(writer)
        .with_target(config.with_target)
        .with_ansi(config.with_ansi && config.format != LogFormat::Json)
        .with_span_events(span_events);

    let filter = build_env_filter(config);
    match (config.format, config.with_timestamps) {
        (LogFormat::Json, _) => base.json().with_filter(filter).boxed(),
        (LogFormat::Compact, true) => base.compact().with_filter(filter).boxed(),
        (LogFormat::Compact, false) => base
            .compact()
            .without_time()
            .with_filter(filter)
            .boxed(),
        (LogFormat::Pretty, true) => base.with_filter(filter).boxed(),
        (LogFormat::Pretty, false) => base.without_time().with_filter(filter).boxed(),
    }
}

/// Default filter directives: warn for dependencies, `level` for the
/// workspace crates.
pub fn default_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    let mut directives = vec!["warn".to_string()];
    directives.extend(
        WORKSPACE_CRATES
            .iter()
            .map(|krate| format!("{krate}={level}")),
    );
    directives.join(",")
}

fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let fallback = || EnvFilter::new(default_directives(config.level_filter));
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use super::*;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Buffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(config: &LogConfig) -> String {
        let buffer = Buffer::default();
        let writer = buffer.clone();
        let subscriber =
            tracing_subscriber::registry().with(build_layer(config, move || writer.clone()));
        tracing::subscriber::with_default(subscriber, || {
            let span = tracing::info_span!(target: "census_core", "section", section = "crime");
            span.in_scope(|| {
                tracing::info!(target: "census_core", "section built");
                tracing::debug!(target: "census_core", "stat query");
                tracing::info!(target: "hyper", "dependency chatter");
            });
        });
        buffer.contents()
    }

    fn config(format: LogFormat, level: LevelFilter) -> LogConfig {
        LogConfig {
            level_filter: level,
            use_env_filter: false,
            with_ansi: false,
            format,
            ..LogConfig::default()
        }
    }

    #[test]
    fn directives_cover_workspace_crates() {
        let directives = default_directives(LevelFilter::DEBUG);
        assert!(directives.starts_with("warn,"));
        assert!(directives.contains("census_core=debug"));
        assert!(directives.contains("census_transform=debug"));
    }

    #[test]
    fn off_silences_workspace_crates() {
        let directives = default_directives(LevelFilter::OFF);
        assert!(directives.contains("census_cli=off"));
    }

    #[test]
    fn json_span_timings_report_section_close() {
        let mut json = config(LogFormat::Json, LevelFilter::INFO);
        json.with_span_timings = true;
        let output = capture(&json);

        assert!(output.contains(r#""message":"section built""#));
        assert!(output.contains(r#""message":"close""#));
        assert!(output.contains("time.busy"));
        assert!(!output.contains("stat query"));
        assert!(!output.contains("dependency chatter"));
    }

    #[test]
    fn compact_without_span_timings() {
        let output = capture(&config(LogFormat::Compact, LevelFilter::DEBUG));

        assert!(output.contains("section built"));
        assert!(output.contains("stat query"));
        assert!(!output.contains("time.busy"));
        assert!(!output.contains("dependency chatter"));
    }
}
