use crate::error::CopybenchError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Clone {
    fn validate(&self) -> Result<(), CopybenchError>;
}
