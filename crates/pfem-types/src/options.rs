use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reading level; selects the glossary used for vocabulary substitution.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Kid,
    #[default]
    Beginner,
    Intermediate,
}

impl Audience {
    /// Parse an audience tag. Unrecognized tags behave like the default audience.
    pub fn parse_lenient(v: &str) -> Self {
        match v.trim().to_ascii_lowercase().as_str() {
            "kid" => Audience::Kid,
            "intermediate" => Audience::Intermediate,
            _ => Audience::Beginner,
        }
    }

    /// Glossary key in the copy deck.
    pub fn as_str(self) -> &'static str {
        match self {
            Audience::Kid => "kid",
            Audience::Beginner => "beginner",
            Audience::Intermediate => "intermediate",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much of an explanation is returned. Only `Brief` changes the output today.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Brief,
    #[default]
    Standard,
    Guided,
}

impl Verbosity {
    pub fn parse_lenient(v: &str) -> Self {
        match v.trim().to_ascii_lowercase().as_str() {
            "brief" => Verbosity::Brief,
            "guided" => Verbosity::Guided,
            _ => Verbosity::Standard,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verbosity::Brief => "brief",
            Verbosity::Standard => "standard",
            Verbosity::Guided => "guided",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
