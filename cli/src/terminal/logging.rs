use std::fmt;

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::print::PRINT_TARGET;

const COMMANDS_TARGET: &str = "square::commands";

/// Installs the global subscriber.
///
/// A set `RUST_LOG` replaces the quiet-derived default entirely, so
/// `RUST_LOG=off` also hides the overflow `[-]` lines. Printed output is
/// always let through.
pub fn init_logging(quiet: u8) {
    let rust_log: Option<String> = std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|spec| !spec.trim().is_empty());

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(quiet, rust_log.as_deref()))
        .event_format(SquareFormatter)
        .init();
}

/// Quiet 0 shows everything at `info`. Above that only warnings and the
/// commands' own status lines (summaries) pass.
pub fn build_filter(quiet: u8, rust_log: Option<&str>) -> EnvFilter {
    let mut filter: EnvFilter = match rust_log {
        Some(spec) => EnvFilter::new(spec),
        None if quiet == 0 => EnvFilter::new("info"),
        None => EnvFilter::new(format!("warn,{COMMANDS_TARGET}=info")),
    };
    if let Ok(directive) = format!("{PRINT_TARGET}=info").parse::<Directive>() {
        filter = filter.add_directive(directive);
    }
    filter
}

pub struct SquareFormatter;

impl<S, N> FormatEvent<S, N> for SquareFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        let mut fields = EventFields::default();
        event.record(&mut fields);

        if meta.target() == PRINT_TARGET {
            if let Some(raw) = fields.raw_msg {
                return writeln!(writer, "{raw}");
            }
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        if fields.success {
            write!(writer, "{}", fields.message.bold())?;
        } else {
            write!(writer, "{}", fields.message)?;
        }

        for extra in &fields.extra {
            write!(writer, " {}", extra.dimmed())?;
        }

        writeln!(writer)
    }
}

#[derive(Default)]
struct EventFields {
    message: String,
    raw_msg: Option<String>,
    success: bool,
    extra: Vec<String>,
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "raw_msg" => self.raw_msg = Some(value.to_string()),
            "message" => self.message = value.to_string(),
            name => self.extra.push(format!("{name}={value}")),
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "success" => self.success = value,
            name => self.extra.push(format!("{name}={value}")),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{value:?}"),
            name => self.extra.push(format!("{name}={value:?}")),
        }
    }
}
