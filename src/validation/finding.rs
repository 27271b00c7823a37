use serde::Serialize;
use std::fmt;

/// How a finding affects the run: fatal findings block normalization,
/// warnings are surfaced alongside a successful normalized model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    // Ord matters here: Fatal sorts before Warning
    Fatal,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, thiserror::Error)]
pub enum FindingKind {
    /// Required field missing or conditional-requirement pair violated.
    #[error("structural error")]
    Structural,
    /// An identifier field fails the directory/class-name pattern rules.
    #[error("naming error")]
    Naming,
    /// Ambiguous transition, isolated state, or reachability advisory.
    #[error("state machine error")]
    StateMachine,
    /// Dangling reference or duplicate identifier.
    #[error("referential integrity error")]
    ReferentialIntegrity,
    /// Cross-field rule violation.
    #[error("consistency error")]
    Consistency,
}

/// A single defect, tagged with the dotted path to the offending field
/// (e.g. `domains[1].entities[0].states[2].englishName`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub path: String,
    pub kind: FindingKind,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn fatal(path: impl Into<String>, kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            severity: Severity::Fatal,
            message: message.into(),
        }
    }

    pub fn warning(path: impl Into<String>, kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Fatal
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Fatal => f.write_str("fatal"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} at {}: {}",
            self.severity, self.kind, self.path, self.message
        )
    }
}
