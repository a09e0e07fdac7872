pub mod dedup;
pub mod fields;
pub mod patterns;
pub mod record;

use serde::Serialize;
use tracing::warn;

use fields::statements::Statements;
use record::{Diagnostic, ExtractError, FieldKind, SdsRecord};

/// Extraction policy switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Dedupe pictogram codes like the H/P lists. Off by default: repeated
    /// pictograms are kept in document order.
    pub dedupe_ghs: bool,
}

/// Everything one extraction run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extraction {
    pub record: SdsRecord,
    pub diagnostics: Vec<Diagnostic>,
}

/// Run all six field extractors concurrently over `text` and merge their
/// results. Always returns a record; per-field failures land in
/// `diagnostics` and never abort the sibling extractors.
pub fn extract(text: &str, opts: &ExtractOptions) -> Extraction {
    let mut name: Result<String, ExtractError> = Err(ExtractError::NotFound);
    let mut signal_word = Err(ExtractError::NotFound);
    let mut storage_class = Err(ExtractError::NotFound);
    let mut statements: Result<Statements, ExtractError> = Err(ExtractError::NotFound);
    let mut ghs_codes: Result<Vec<String>, ExtractError> = Err(ExtractError::NotFound);
    let mut water_hazard = Err(ExtractError::NotFound);

    // Fan-out/join: one task per extractor, the scope exit is the barrier.
    // Each task owns its slot, so the merge below sees all six results.
    rayon::scope(|s| {
        s.spawn(|_| name = fields::name::extract(text));
        s.spawn(|_| signal_word = fields::signal_word::extract(text));
        s.spawn(|_| storage_class = fields::storage_class::extract(text));
        s.spawn(|_| statements = fields::statements::extract(text));
        s.spawn(|_| ghs_codes = fields::ghs::extract(text));
        s.spawn(|_| water_hazard = fields::water_hazard::extract(text));
    });

    let mut record = SdsRecord::default();
    let mut diagnostics = Vec::new();

    match name {
        Ok(v) => record.name = Some(v),
        Err(e) => fail(&mut diagnostics, FieldKind::Name, e),
    }
    match signal_word {
        Ok(v) => record.signal_word = Some(v),
        Err(e) => fail(&mut diagnostics, FieldKind::SignalWord, e),
    }
    match storage_class {
        Ok(v) => record.storage_class = Some(v.to_string()),
        Err(e) => fail(&mut diagnostics, FieldKind::StorageClass, e),
    }
    match statements {
        Ok(st) => {
            record.h_statements = st.hazard;
            record.p_statements = st.precautionary;
        }
        Err(e) => fail(&mut diagnostics, FieldKind::Statements, e),
    }
    match ghs_codes {
        Ok(codes) => {
            record.ghs_codes = if opts.dedupe_ghs {
                dedup::dedupe(codes)
            } else {
                codes
            };
        }
        Err(e) => fail(&mut diagnostics, FieldKind::GhsCodes, e),
    }
    match water_hazard {
        Ok(v) => record.water_hazard_class = Some(v),
        Err(e) => fail(&mut diagnostics, FieldKind::WaterHazardClass, e),
    }

    Extraction { record, diagnostics }
}

fn fail(diagnostics: &mut Vec<Diagnostic>, field: FieldKind, error: ExtractError) {
    warn!("could not extract {}: {}", field, error);
    diagnostics.push(Diagnostic { field, error });
}

// ── Tests ──
