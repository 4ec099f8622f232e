use crate::error::{ErrorCode, IndentError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Character used for one level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentKind {
    Space,
    Tab,
    Unknown,
}

impl IndentKind {
    pub fn as_char(self) -> Option<char> {
        match self {
            IndentKind::Space => Some(' '),
            IndentKind::Tab => Some('\t'),
            IndentKind::Unknown => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IndentKind::Space => "space",
            IndentKind::Tab => "tab",
            IndentKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for IndentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndentKind {
    type Err = IndentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "space" | "spaces" => Ok(IndentKind::Space),
            "tab" | "tabs" => Ok(IndentKind::Tab),
            "unknown" => Ok(IndentKind::Unknown),
            _ => Err(IndentError::Parse {
                code: ErrorCode::InvalidStyle,
                message: "expected 'space', 'tab' or 'unknown'".to_string(),
                input: s.to_string(),
            }),
        }
    }
}

/// An indentation unit: `amount` repetitions of the `kind` character.
///
/// A style with `Unknown` kind or zero amount renders to the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndentationStyle {
    amount: usize,
    kind: IndentKind,
}

impl IndentationStyle {
    pub const fn new(amount: usize, kind: IndentKind) -> Self {
        Self { amount, kind }
    }

    pub const fn spaces(amount: usize) -> Self {
        Self::new(amount, IndentKind::Space)
    }

    pub const fn tabs(amount: usize) -> Self {
        Self::new(amount, IndentKind::Tab)
    }

    /// The result of detecting nothing: `(0, Unknown)`.
    pub const fn unknown() -> Self {
        Self::new(0, IndentKind::Unknown)
    }

    pub fn amount(&self) -> usize {
        self.amount
    }

    pub fn kind(&self) -> IndentKind {
        self.kind
    }

    /// True when the rendered unit is the empty string.
    pub fn is_empty(&self) -> bool {
        self.amount == 0 || self.kind == IndentKind::Unknown
    }

    pub fn render(&self) -> String {
        match self.kind.as_char() {
            Some(c) if self.amount > 0 => std::iter::repeat(c).take(self.amount).collect(),
            _ => String::new(),
        }
    }
}

impl Default for IndentationStyle {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for IndentationStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Parses descriptions such as `"4 spaces"`, `"1 tab"`, `"tab"` or `"unknown"`.
/// A bare kind means an amount of one (zero for `unknown`).
impl FromStr for IndentationStyle {
    type Err = IndentError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace();
        let invalid = || IndentError::Parse {
            code: ErrorCode::InvalidStyle,
            message: "expected '<amount> <space|tab>' or a bare kind".to_string(),
            input: s.to_string(),
        };

        let (amount, kind) = match (parts.next(), parts.next(), parts.next()) {
            (Some(kind), None, None) => {
                let kind: IndentKind = kind.parse()?;
                (usize::from(kind != IndentKind::Unknown), kind)
            }
            (Some(amount), Some(kind), None) => {
                let amount = amount.parse::<usize>().map_err(|_| invalid())?;
                (amount, kind.parse::<IndentKind>()?)
            }
            _ => return Err(invalid()),
        };

        Ok(Self::new(amount, kind))
    }
}
