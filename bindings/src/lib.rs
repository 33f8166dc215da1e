use std::fmt::Display;
use std::process::ExitCode;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

mod args;
pub use args::*;

pub mod config;
pub use config::get_config_value;

mod context;
pub use context::*;

mod error;
pub use error::Error;

pub mod log;

const DEFAULT_LOG_LEVEL: &str = "info";

pub fn internal_init() {
    let (level, config_error) = log_level(get_config_value("log_level"));

    let env = env_logger::Env::default().default_filter_or(level);
    // A second init (e.g. from a test harness) is harmless
    let _ = env_logger::Builder::from_env(env).try_init();

    if let Some(err) = config_error {
        crate::log::warn!("Ignoring configured log level: {err}");
    }

    set_panic_handler();
}

/// Picks the default log filter. Config errors are handed back so they can
/// be reported once logging is up.
fn log_level(configured: Result<Option<String>, Error>) -> (String, Option<Error>) {
    match configured {
        Ok(Some(level)) => (level, None),
        Ok(None) => (DEFAULT_LOG_LEVEL.to_string(), None),
        Err(err) => (DEFAULT_LOG_LEVEL.to_string(), Some(err)),
    }
}

#[inline]
pub fn rng() -> SmallRng {
    SmallRng::from_entropy()
}

#[inline]
pub fn random<T>() -> T
where
    rand::distributions::Standard: rand::distributions::Distribution<T>,
{
    rng().gen()
}

pub fn set_panic_handler() {
    std::panic::set_hook(Box::new(|err| {
        crate::log::error!("Got panic: {err}");
    }));
}

/// Runs a single invocation of `handler`.
///
/// The event is taken from the command line (an empty object if none was
/// given) and whatever the handler returns is stored with [`set_result`].
/// Handler failures are passed on untouched; no result is written for them.
pub fn run<F, R, E>(handler: F) -> Result<(), Error>
where
    F: FnOnce(json::Value, &Context) -> Result<R, E>,
    R: serde::Serialize,
    E: std::error::Error + Send + Sync + 'static,
{
    let event = get_args()?.unwrap_or_else(|| {
        crate::log::debug!("No event given; using an empty one");
        json::Value::Object(json::Map::new())
    });

    let context = Context::new();
    crate::log::info!(
        "Invoking {} (invocation {})",
        context.function_name(),
        context.invocation_id()
    );

    let output = handler(event, &context).map_err(|err| Error::Handler(Box::new(err)))?;
    let value = json::to_value(output).map_err(Error::Serialize)?;

    set_result(&value)
}

/// Maps the outcome of a function's `main` onto the process exit status.
pub fn exit_code<E: Display>(result: Result<(), E>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            crate::log::error!("Function failed: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_falls_back_to_default() {
        assert_eq!(log_level(Ok(Some("trace".to_string()))).0, "trace");
        assert_eq!(log_level(Ok(None)).0, DEFAULT_LOG_LEVEL);

        let (level, err) = log_level(Err(Error::Config("bad toml".to_string())));
        assert_eq!(level, DEFAULT_LOG_LEVEL);
        assert!(matches!(err, Some(Error::Config(msg)) if msg == "bad toml"));
    }

    #[test]
    fn random_values_differ() {
        let values: Vec<u64> = (0..4).map(|_| random()).collect();
        assert!(values.windows(2).any(|w| w[0] != w[1]));
    }
}
