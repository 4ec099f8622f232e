#![deny(warnings)]
//! Detects the indentation style of a text and re-indents text with it.
//!
//! ```
//! use indentation::{change, detect, IndentationStyle};
//!
//! let text = "<div>\n  <ul>\n    <li>yay</li>\n  </ul>\n</div>";
//! assert_eq!(detect(text), IndentationStyle::spaces(2));
//! assert_eq!(
//!     change(text, IndentationStyle::spaces(4)).unwrap(),
//!     "<div>\n    <ul>\n        <li>yay</li>\n    </ul>\n</div>",
//! );
//! ```

pub mod config;
pub mod detect;
pub mod error;
pub mod lines;
pub mod logger;
pub mod style;
pub mod transform;

pub use config::Config;
pub use detect::{Detection, Detector};
pub use error::{ErrorCode, IndentError, Result};
pub use logger::Logger;
pub use style::{IndentKind, IndentationStyle};
pub use transform::Transformer;

/// Most representative indentation unit of `text`, or `(0, Unknown)`.
pub fn detect(text: &str) -> IndentationStyle {
    Detector::default().detect(text)
}

/// Converts `text` from its detected style to `target`.
pub fn change(text: &str, target: IndentationStyle) -> Result<String> {
    Transformer::default().change(text, target)
}

pub fn indent(text: &str, style: IndentationStyle) -> String {
    Transformer::default().indent(text, style)
}

pub fn unindent(text: &str) -> String {
    Transformer::default().unindent(text)
}
