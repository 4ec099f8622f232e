use crate::error::{ErrorCode, IndentError, Result};
use serde::{Deserialize, Serialize};

/// No size limit; any valid text is processed.
pub const UNLIMITED: usize = usize::MAX;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Opt-in ceiling on input length. Longer inputs make `change` fail and
    /// leave `indent`/`unindent` as no-ops.
    pub max_input_bytes: usize,
    /// Skip single-space indents on the first detection pass (comment
    /// continuation lines such as ` * text`).
    pub ignore_single_spaces: bool,
}

impl Config {
    pub fn new() -> Self {
        Self {
            max_input_bytes: UNLIMITED,
            ignore_single_spaces: true,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_input_bytes == 0 {
            return Err(IndentError::Config {
                code: ErrorCode::InvalidConfig,
                message: "must be at least 1".to_string(),
                field: "max_input_bytes".to_string(),
            });
        }
        Ok(())
    }

    /// Parses and validates a JSON config; absent fields keep their defaults.
    pub fn from_json(input: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
