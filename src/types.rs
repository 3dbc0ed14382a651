use clap::ValueEnum;
use serde::Deserialize;

/// How strictly the dependency table is checked when a timeline file loads.
///
/// - `Strict`: exactly one root, no unknown or forward `depends_on`
///   references, no cycles. Violations fail with `InvalidDependencyGraph`.
/// - `Lenient`: only the structural checks (non-empty table, unique names).
///   Broken references surface later as per-task diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    #[default]
    Strict,
    Lenient,
}

/// Output encoding for a resolved schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// How dates are printed in text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DateStyle {
    /// `January 1st, 2025`
    #[default]
    Long,
    /// `2025-01-01`
    Iso,
}
