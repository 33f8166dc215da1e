use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("parsing invocation event: {0}")]
    InvalidArgs(serde_json::Error),
    #[error("serializing result: {0}")]
    Serialize(serde_json::Error),
    #[error("writing output file {path}: {error}")]
    Output {
        path: PathBuf,
        error: std::io::Error,
    },
    #[error("loading config: {0}")]
    Config(String),
    #[error(transparent)]
    Handler(Box<dyn std::error::Error + Send + Sync>),
}
