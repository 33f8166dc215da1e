pub use serde_json as json;

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use crate::Error;

const DEFAULT_OUTPUT_PATH: &str = "/tmp/output";

/// Returns the invocation event passed as the first command-line argument.
pub fn get_args() -> Result<Option<json::Value>, Error> {
    parse_args(std::env::args().skip(1))
}

pub(crate) fn parse_args<I>(mut args: I) -> Result<Option<json::Value>, Error>
where
    I: Iterator<Item = String>,
{
    match args.next() {
        Some(arg) => json::from_str(&arg).map(Some).map_err(Error::InvalidArgs),
        None => Ok(None),
    }
}

pub fn output_path() -> Result<PathBuf, Error> {
    let path = crate::get_config_value("output_path")?
        .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());
    Ok(PathBuf::from(path))
}

pub fn set_result(value: &json::Value) -> Result<(), Error> {
    let jstr = json::to_string(value).map_err(Error::Serialize)?;
    let path = output_path()?;

    let mut file = File::create(&path).map_err(|error| Error::Output {
        path: path.clone(),
        error,
    })?;
    file.write_all(jstr.as_bytes())
        .and_then(|()| file.sync_all())
        .map_err(|error| Error::Output {
            path: path.clone(),
            error,
        })?;

    log::debug!("Created output file at {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn no_argument_means_no_event() {
        assert!(parse_args(args(&[])).unwrap().is_none());
    }

    #[test]
    fn first_argument_is_the_event() {
        let event = parse_args(args(&[r#"{"num1": 3}"#, "ignored"]))
            .unwrap()
            .unwrap();
        assert_eq!(event, json::json!({"num1": 3}));
    }

    #[test]
    fn malformed_event_is_rejected() {
        let err = parse_args(args(&["{num1"])).unwrap_err();
        assert!(matches!(err, Error::InvalidArgs(_)));
    }
}
