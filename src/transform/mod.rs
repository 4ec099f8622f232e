use crate::config::Config;
use crate::detect::Detector;
use crate::error::{ErrorCode, IndentError, Result};
use crate::logger::{Logger, SILENT};
use crate::style::IndentationStyle;

mod transform_change;
mod transform_indent;
mod transform_unindent;

pub use transform_change::convert;
pub use transform_indent::prefix_lines;
pub use transform_unindent::{common_indent, strip_common};

/// Style-preserving rewrites of a whole text.
///
/// Nothing is ever partially rewritten: when the operation cannot be
/// carried out safely the input comes back unchanged.
pub struct Transformer<'a> {
    config: Config,
    logger: &'a Logger,
}

impl<'a> Transformer<'a> {
    pub fn new(config: Config, logger: &'a Logger) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, logger })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn detector(&self) -> Detector<'a> {
        Detector::new(&self.config, self.logger)
    }

    /// Re-indents `text` from its detected style to `target`.
    pub fn change(&self, text: &str, target: IndentationStyle) -> Result<String> {
        self.check_bounds(text, "change")?;

        let old = self.detector().detect(text);
        if old.is_empty() {
            self.logger.info("transform", "change_skipped", "no indentation detected");
            return Ok(text.to_string());
        }
        Ok(convert(text, old, target))
    }

    /// Like [`Transformer::change`] with a known source style.
    pub fn change_from(
        &self,
        text: &str,
        from: IndentationStyle,
        target: IndentationStyle,
    ) -> Result<String> {
        self.check_bounds(text, "change_from")?;

        if from.is_empty() {
            self.logger.info("transform", "change_skipped", "source style renders empty");
            return Ok(text.to_string());
        }
        Ok(convert(text, from, target))
    }

    /// Prefixes every non-empty line with `style`.
    pub fn indent(&self, text: &str, style: IndentationStyle) -> String {
        if let Err(e) = self.check_bounds(text, "indent") {
            self.logger.error("transform", "indent_skipped", &e.to_string());
            return text.to_string();
        }
        prefix_lines(text, style)
    }

    /// Removes the indentation shared by every non-empty line.
    pub fn unindent(&self, text: &str) -> String {
        if let Err(e) = self.check_bounds(text, "unindent") {
            self.logger.error("transform", "unindent_skipped", &e.to_string());
            return text.to_string();
        }

        match strip_common(text) {
            Some(out) => out,
            None => {
                self.logger.info("transform", "unindent_skipped", "no common indentation");
                text.to_string()
            }
        }
    }

    fn check_bounds(&self, text: &str, op: &str) -> Result<()> {
        if text.len() > self.config.max_input_bytes {
            return Err(IndentError::Validation {
                code: ErrorCode::BoundsExceeded,
                message: format!(
                    "input of {} bytes exceeds limit of {}",
                    text.len(),
                    self.config.max_input_bytes
                ),
                context: op.to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Transformer<'static> {
    fn default() -> Self {
        Self { config: Config::default(), logger: &SILENT }
    }
}
