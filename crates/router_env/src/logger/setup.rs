//!
//! Setup logging subsystem.
//!

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::{config, Level};

/// Keeps the non-blocking log writers flushing until it is dropped.
#[derive(Debug)]
pub struct TelemetryGuard {
    _log_guards: Vec<WorkerGuard>,
}

///
/// Setup logging sub-system specifying.
/// Expects config and list of names of crates to watch.
///
/// Console output goes to stderr so that command output on stdout stays machine readable.
/// When `RUST_LOG` is set it replaces the configured level and filtering directive.
///
pub fn setup<Str: AsRef<str>>(
    conf: &config::Log,
    service_name: &str,
    crates_to_watch: impl IntoIterator<Item = Str>,
) -> TelemetryGuard {
    let mut guards = Vec::new();

    let env_override = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::TRACE.into())
        .from_env_lossy();

    if !conf.console.enabled {
        // Filter only, no output layer.
        let init_result = tracing_subscriber::registry().with(env_filter).try_init();
        report_init_error(init_result);
        return TelemetryGuard {
            _log_guards: guards,
        };
    }

    let (console_writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    guards.push(guard);

    let (console_filter, invalid_directive) =
        console_filter(&conf.console, crates_to_watch, env_override);

    let subscriber = tracing_subscriber::registry().with(env_filter);

    // `try_init` so that a second setup in the same process (tests) is not fatal.
    let init_result = match conf.console.log_format {
        config::LogFormat::Default => {
            let logging_layer = fmt::layer()
                .with_timer(fmt::time::time())
                .with_writer(console_writer)
                .with_filter(console_filter);

            subscriber.with(logging_layer).try_init()
        }
        config::LogFormat::Json => {
            let logging_layer = fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(true)
                .with_writer(console_writer)
                .with_filter(console_filter);

            subscriber.with(logging_layer).try_init()
        }
    };

    report_init_error(init_result);

    if let Some((directive, error)) = invalid_directive {
        tracing::warn!(%error, %directive, "ignoring invalid log filtering directive");
    }
    tracing::debug!(service = service_name, "logger initialized");

    TelemetryGuard {
        _log_guards: guards,
    }
}

/// Per-target filter of the console layer. An environment override lets every event the
/// `EnvFilter` accepts through.
fn console_filter<Str: AsRef<str>>(
    console: &config::LogConsole,
    crates_to_watch: impl IntoIterator<Item = Str>,
    env_override: bool,
) -> (filter::Targets, Option<(String, filter::ParseError)>) {
    if env_override {
        return (filter::Targets::new().with_default(Level::TRACE), None);
    }

    let level = console.level.into_level();
    let mut targets = filter::Targets::new().with_default(Level::WARN);
    for acrate in crates_to_watch {
        targets = targets.with_target(acrate.as_ref(), level);
    }

    match &console.filtering_directive {
        Some(directive) => match directive.parse::<filter::Targets>() {
            Ok(parsed) => (parsed, None),
            Err(error) => (targets, Some((directive.clone(), error))),
        },
        None => (targets, None),
    }
}

fn report_init_error(init_result: Result<(), tracing_subscriber::util::TryInitError>) {
    if let Err(error) = init_result {
        tracing::debug!(%error, "global subscriber already installed");
    }
}
