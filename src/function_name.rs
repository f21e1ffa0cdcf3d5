use std::{fmt, str::FromStr};

use crate::error::InvalidArgument;

/// A SystemVerilog simple identifier used as the emitted function's name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionName(String);

impl FunctionName {
    pub const DEFAULT: &'static str = "fair_hash";

    pub fn new(name: impl Into<String>) -> Result<Self, InvalidArgument> {
        let name = name.into();
        let mut chars = name.chars();
        let valid_head = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        if valid_head && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
            Ok(Self(name))
        } else {
            Err(InvalidArgument::FunctionName { name })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FunctionName {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl FromStr for FunctionName {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
