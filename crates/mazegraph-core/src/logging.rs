use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable consulted when `RUST_LOG` is not set
pub const LOG_ENV_VAR: &str = "MAZEGRAPH_LOG";

/// Log the milliseconds elapsed since `$start` as a trace event
///
/// ```rust,ignore
/// let started = Instant::now();
/// trace_time!(started, "dijkstra_over", finished = finished.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr $(, $field:ident = $value:expr)* $(,)?) => {
        tracing::trace!(
            elapsed_ms = $start.elapsed().as_secs_f64() * 1000.0,
            $($field = $value,)*
            $name
        )
    };
}

/// Build the default filter directive for the given verbosity settings
pub fn filter_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("mazegraph={}", level),
        (true, None) => "mazegraph=debug".to_string(),
        (false, None) => "mazegraph=warn".to_string(),
    }
}

/// Initialize structured logging
///
/// `RUST_LOG` and then `MAZEGRAPH_LOG` take precedence over the arguments.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV_VAR))
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, log_level)));

    // Exactly one of the two stderr layers is present
    let json_layer = log_json.then(|| {
        fmt::layer()
            .json()
            .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
            .with_writer(std::io::stderr)
    });
    let compact_layer = (!log_json).then(|| {
        fmt::layer()
            .compact()
            .with_target(false)
            .with_ansi(false)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(compact_layer)
        .try_init()?;

    Ok(())
}
