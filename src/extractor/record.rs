use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fields extracted from one safety data sheet. Optional fields stay `None`
/// when their extractor fails; failures are reported separately.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SdsRecord {
    pub name: Option<String>,
    pub signal_word: Option<SignalWord>,
    pub storage_class: Option<String>,
    pub h_statements: Vec<String>,
    pub p_statements: Vec<String>,
    pub ghs_codes: Vec<String>,
    pub water_hazard_class: Option<char>,
}

/// GHS signal word ("Gefahr" / "Achtung" on the sheet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalWord {
    Danger,
    Warning,
}

/// Target field group of one extractor. Each extractor owns exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Name,
    SignalWord,
    StorageClass,
    Statements,
    GhsCodes,
    WaterHazardClass,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldKind::Name => "name",
            FieldKind::SignalWord => "signal word",
            FieldKind::StorageClass => "storage class",
            FieldKind::Statements => "h/p statements",
            FieldKind::GhsCodes => "ghs codes",
            FieldKind::WaterHazardClass => "water hazard class",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtractError {
    #[error("pattern produced no matches")]
    NotFound,
    #[error("all candidates were filtered out")]
    NoValidCandidate,
}

/// One failed field, reported alongside the record instead of inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub field: FieldKind,
    pub error: ExtractError,
}
