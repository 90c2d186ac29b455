use std::fmt;

use serde::{Deserialize, Serialize};

/// Alert category as reported by the backend.
///
/// Only `BLOCK` and `UNBLOCK` get dedicated styling; everything else
/// (`ARP_FLOOD`, ...) keeps its raw label for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AlertKind {
    Block,
    Unblock,
    Other(String),
}

impl AlertKind {
    pub fn as_str(&self) -> &str {
        match self {
            AlertKind::Block => "BLOCK",
            AlertKind::Unblock => "UNBLOCK",
            AlertKind::Other(label) => label,
        }
    }
}

impl From<String> for AlertKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "BLOCK" => AlertKind::Block,
            "UNBLOCK" => AlertKind::Unblock,
            _ => AlertKind::Other(value),
        }
    }
}

impl From<AlertKind> for String {
    fn from(kind: AlertKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,

    #[serde(default)]
    pub message: String,

    /// Backend-formatted wall-clock string; displayed verbatim.
    #[serde(default)]
    pub timestamp: String,
}

/// A blocked source MAC in colon-hex form. Identity is the string value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MacAddress(String);

impl MacAddress {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
