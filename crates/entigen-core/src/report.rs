//! Generation report schema (stable v1)
//!
//! This schema is STABLE and VERSIONED.
//! Breaking changes require a new version.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Report schema version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportVersion {
    /// Major version (breaking changes)
    pub major: u32,

    /// Minor version (backward-compatible additions)
    pub minor: u32,
}

impl ReportVersion {
    /// Current report schema version
    pub const CURRENT: ReportVersion = ReportVersion { major: 1, minor: 0 };
}

impl std::fmt::Display for ReportVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// What happened to one selected class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum ClassOutcome {
    /// Source file written
    Generated { class: String, path: PathBuf },

    /// Generation aborted for this class
    Failed { class: String, message: String },
}

impl ClassOutcome {
    pub fn class(&self) -> &str {
        match self {
            Self::Generated { class, .. } | Self::Failed { class, .. } => class,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Summary statistics for a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Number of classes selected
    pub selected: usize,

    /// Number of files written
    pub generated: usize,

    /// Number of classes that failed
    pub failed: usize,
}

/// Generation report (report.json v1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Schema version
    pub version: ReportVersion,

    /// Timestamp (RFC 3339)
    pub timestamp: String,

    /// Summary statistics
    pub summary: GenerationSummary,

    /// Per-class outcomes in processing order
    pub outcomes: Vec<ClassOutcome>,
}

impl GenerationReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self {
            version: ReportVersion::CURRENT,
            timestamp: chrono::Utc::now().to_rfc3339(),
            summary: GenerationSummary::default(),
            outcomes: Vec::new(),
        }
    }

    /// Record a class outcome
    pub fn add_outcome(&mut self, outcome: ClassOutcome) {
        match outcome {
            ClassOutcome::Generated { .. } => self.summary.generated += 1,
            ClassOutcome::Failed { .. } => self.summary.failed += 1,
        }

        self.summary.selected += 1;
        self.outcomes.push(outcome);
    }

    /// Check if any class failed
    pub fn has_failures(&self) -> bool {
        self.summary.failed > 0
    }

    /// Failed outcomes only
    pub fn failures(&self) -> impl Iterator<Item = &ClassOutcome> {
        self.outcomes.iter().filter(|o| o.is_failure())
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Save to file
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let json = self.to_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, json)
    }
}

impl Default for GenerationReport {
    fn default() -> Self {
        Self::new()
    }
}
