use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopybenchError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Encoding error: symbol {symbol} is outside alphabet [0, {alphabet_size})")]
    Encoding { symbol: usize, alphabet_size: usize },

    #[error("Predictor contract violation: {0}")]
    PredictorContract(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Config source error: {0}")]
    ConfigSource(#[from] ::config::ConfigError),
}

pub type Result<T> = std::result::Result<T, CopybenchError>;
