use std::fmt;

use crate::property::ValueType;

/// Which property map an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapKind {
    VertexBetweenness,
    EdgeBetweenness,
    Weight,
}

impl fmt::Display for MapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::VertexBetweenness => "vertex betweenness",
            Self::EdgeBetweenness => "edge betweenness",
            Self::Weight => "edge weight",
        })
    }
}

/// Validation failures reported before any output map is touched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CentralityError {
    #[error("{map} property must be of {expected} value type, found {found}")]
    PropertyType {
        map: MapKind,
        expected: &'static str,
        found: ValueType,
    },

    #[error("{map} property has {found} entries, graph has {expected}")]
    SizeMismatch {
        map: MapKind,
        expected: usize,
        found: usize,
    },

    #[error("edge {edge} has weight {weight}; weights must be non-negative numbers")]
    NegativeWeight { edge: usize, weight: f64 },
}

impl CentralityError {
    /// Machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::PropertyType { .. } => ErrorCode::PropertyType,
            Self::SizeMismatch { .. } => ErrorCode::SizeMismatch,
            Self::NegativeWeight { .. } => ErrorCode::NegativeWeight,
        }
    }
}

/// Machine-readable error codes for scripts and agents driving the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigParseError,
    InputParseError,
    PropertyType,
    SizeMismatch,
    NegativeWeight,
    InternalUnexpected,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ConfigParseError => "E1001",
            Self::InputParseError => "E1002",
            Self::PropertyType => "E2001",
            Self::SizeMismatch => "E2002",
            Self::NegativeWeight => "E2003",
            Self::InternalUnexpected => "E9001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConfigParseError => "Config file parse error",
            Self::InputParseError => "Edge list parse error",
            Self::PropertyType => "Property map has the wrong value type",
            Self::SizeMismatch => "Property map does not match the graph",
            Self::NegativeWeight => "Negative or NaN edge weight",
            Self::InternalUnexpected => "Internal unexpected error",
        }
    }

    /// Optional remediation hint.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ConfigParseError => Some("Fix syntax in centrality.toml and retry."),
            Self::InputParseError => {
                Some("Use one `SOURCE TARGET [WEIGHT]` edge per line; `#` starts a comment.")
            }
            Self::PropertyType => Some("Betweenness outputs must be `float` or `double` maps."),
            Self::SizeMismatch => Some("Allocate one entry per vertex or edge of the graph."),
            Self::NegativeWeight => {
                Some("Shortest paths are undefined with negative weights; drop --weighted or fix the input.")
            }
            Self::InternalUnexpected => Some("Retry once. If persistent, report a bug with logs."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
