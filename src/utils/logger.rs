use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    /// One JSON object per line, for log collectors.
    Json,
}

/// Filter directive for this crate: the configured level, raised to `debug`
/// when `verbose` is set. Unknown levels fall back to `info`.
pub fn filter_directive(level: &str, verbose: bool) -> String {
    let level = level.to_ascii_lowercase();
    let rank = LEVELS.iter().position(|l| *l == level).unwrap_or(2);
    let effective = if verbose { rank.max(3) } else { rank };
    format!("topic_analyzer={}", LEVELS[effective])
}

fn fmt_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

/// `RUST_LOG` takes precedence over `level` and `verbose`.
pub fn init_logger(level: &str, verbose: bool, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level, verbose)));

    tracing_subscriber::registry()
        .with(fmt_layer(format))
        .with(filter)
        .init();
}
