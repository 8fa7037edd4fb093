//! LEO classification over scanned catalog records

use crate::orbit::{perigee_altitude_km, ElementError};
use tletext::{decode_elements, FieldError};
use tletypes::prelude::*;
use tracing::debug;

/// Altitude threshold plus optional name predicate
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Inclusive perigee altitude upper bound [km]
    pub max_perigee_km: f64,

    /// Case-insensitive substring of the record name; absent or empty
    /// matches every record
    pub name_contains: Option<String>,
}

/// Per-record classification outcome
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Classification {
    pub perigee_altitude_km: f64,
    pub passes: bool,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifyError {
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error(transparent)]
    Element(#[from] ElementError),
}

/// Classify a single record against the filter criteria.
///
/// Decode and derivation failures surface as an `Err` for this record
/// only; the caller decides whether to drop or report them.
pub fn classify(
    record: &TleRecord,
    body: &ReferenceBody,
    criteria: &FilterCriteria,
) -> Result<Classification, ClassifyError> {
    let elements = decode_elements(record)?;
    let perigee_altitude_km = perigee_altitude_km(body, &elements)?;

    let name_matches = match criteria.name_contains.as_deref() {
        None | Some("") => true,
        Some(needle) => record
            .name
            .to_lowercase()
            .contains(&needle.to_lowercase()),
    };

    Ok(Classification {
        perigee_altitude_km,
        passes: perigee_altitude_km <= criteria.max_perigee_km && name_matches,
    })
}

/// The matching subset plus the counts the presentation layer reports
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    /// Records scanned from the input, before filtering
    pub total: usize,

    /// Matching records, in input order
    pub matched: Vec<TleRecord>,
}

/// Stable filter over the record sequence.
///
/// Records whose decode or altitude derivation fails are dropped without
/// affecting any other record in the batch; they show up only as a lower
/// matched count.
pub fn filter_catalog(
    records: Vec<TleRecord>,
    body: &ReferenceBody,
    criteria: &FilterCriteria,
) -> FilterOutcome {
    let total = records.len();
    let matched = records
        .into_iter()
        .filter(|record| match classify(record, body, criteria) {
            Ok(classification) => classification.passes,
            Err(e) => {
                debug!(record = %record.name, error = %e, "Excluding undecodable record");
                false
            }
        })
        .collect();
    FilterOutcome { total, matched }
}
