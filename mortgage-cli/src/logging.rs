use std::io::{self, IsTerminal};

use anyhow::Result;
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

// --- Formatter ---

/// Local timestamp, colored level and the emitting crate, then fields.
struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();

        if ansi {
            write!(writer, "\x1b[2m")?
        }
        write!(writer, "{} ", Local::now().format("%H:%M:%S%.3f"))?;
        if ansi {
            write!(writer, "\x1b[0m")?
        }

        let (pre, post) = if ansi {
            match *meta.level() {
                Level::ERROR => ("\x1b[1;31m", "\x1b[0m"),
                Level::WARN => ("\x1b[1;33m", "\x1b[0m"),
                Level::INFO => ("\x1b[1;32m", "\x1b[0m"),
                Level::DEBUG => ("\x1b[1;34m", "\x1b[0m"),
                Level::TRACE => ("\x1b[1;35m", "\x1b[0m"),
            }
        } else {
            ("", "")
        };
        write!(writer, "{}{:>5}{} ", pre, meta.level(), post)?;

        write!(writer, "{}: ", crate_name(meta.target()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// First path segment of an event target, e.g. `mortgage_core`.
fn crate_name(target: &str) -> &str {
    target.split_once("::").map_or(target, |(krate, _)| krate)
}

/// Picks the active filter.
///
/// An explicit `--log-level` wins, then `RUST_LOG`, then the configured level.
fn make_filter(
    cli_level: Option<&str>,
    config_level: &str,
) -> Result<EnvFilter> {
    if let Some(level) = cli_level {
        return EnvFilter::try_new(level)
            .map_err(|e| anyhow::anyhow!("invalid log level '{level}': {e}"));
    }
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(config_level)
            .map_err(|e| anyhow::anyhow!("invalid configured log level '{config_level}': {e}")),
    }
}

/// Initializes logging to stderr. Call once at startup.
///
/// Output is colored when stderr is a terminal and plain when redirected,
/// so the report on stdout stays clean.
pub fn init_logging(
    cli_level: Option<&str>,
    config_level: &str,
) -> Result<()> {
    let filter = make_filter(cli_level, config_level)?;

    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("logging already initialized: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_name_keeps_first_path_segment() {
        assert_eq!(crate_name("mortgage_core::session"), "mortgage_core");
        assert_eq!(crate_name("mortgage_cli"), "mortgage_cli");
    }

    #[test]
    fn cli_level_takes_precedence_over_config() {
        // The configured directive is never parsed when a CLI level is given.
        assert!(make_filter(Some("debug"), "mortgage_core=loud").is_ok());
    }

    #[test]
    fn invalid_cli_level_is_rejected() {
        assert!(make_filter(Some("mortgage_core=loud"), "info").is_err());
    }
}
