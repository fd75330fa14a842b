use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use super::spinner::SpinnerWriter;

const OWN_CRATES: &[&str] = &["nbinv", "nbinv_core", "nbinv_common"];

pub struct NbinvFormatter;

impl<S, N> FormatEvent<S, N> for NbinvFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Logs go to stderr; stdout is reserved for the inventory JSON.
///
/// `RUST_LOG` wins over the command line flags when set.
pub fn init_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(verbose, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(|| SpinnerWriter)
        .event_format(NbinvFormatter)
        .try_init();
}

fn directives(verbose: u8, quiet: bool) -> String {
    let level: &str = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    let own: Vec<String> = OWN_CRATES.iter().map(|krate| format!("{krate}={level}")).collect();
    format!("error,{}", own.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_own_crates_only() {
        assert_eq!(directives(0, false), "error,nbinv=warn,nbinv_core=warn,nbinv_common=warn");
        assert_eq!(directives(2, false), "error,nbinv=debug,nbinv_core=debug,nbinv_common=debug");
        assert_eq!(directives(9, true), "error,nbinv=error,nbinv_core=error,nbinv_common=error");
    }
}
