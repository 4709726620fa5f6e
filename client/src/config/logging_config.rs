use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    pub enabled: bool,
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
