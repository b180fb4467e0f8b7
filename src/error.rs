use std::fmt::Display;

use crate::report::builder;

/// errors raised while constructing a [crate::types::CostModel]
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// a cost weight is negative or NaN
    InvalidCost { op: &'static str, value: f64 },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCost { op, value } => write!(
                f,
                "invalid {} cost {}, all costs must be non negative",
                op, value
            ),
        }
    }
}

#[derive(Debug)]
pub enum Color {
    Reset,

    // used for error display:
    Red,
    Blue,
    Cyan,
    Green,
    Yellow,

    // used for timing information
    Grey,
}

impl Color {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Reset => "\x1b[0m",
            Self::Red => "\x1b[31m",
            Self::Blue => "\x1b[94m",
            Self::Green => "\x1b[92m",
            Self::Yellow => "\x1b[93m",
            Self::Cyan => "\x1b[96m",
            Self::Grey => "\x1b[90m",
        }
    }
}

pub fn warn(b: &mut builder::Builder, s: &str) {
    print_str_colored(b, "warn", Color::Yellow);
    b.write_str(": ");
    b.write_str(s);
    b.write_char('\n');
}

pub fn err(b: &mut builder::Builder, s: &str) {
    print_str_colored(b, "error", Color::Red);
    b.write_str(": ");
    b.write_str(s);
    b.write_char('\n');
}

pub fn print_str_colored(b: &mut builder::Builder, s: &str, c: Color) {
    b.write_str(c.as_str());
    b.write_str(s);
    b.write_str(Color::Reset.as_str());
}
