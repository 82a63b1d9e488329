//! Per-field resolver chains.
//!
//! Each resolver walks the same explicit precedence ladder and stops at the
//! first rung that can produce the field, tagging the value with that rung.

pub mod duty;
pub mod freight;
pub mod packaging;

use landed_core::models::{InferredInput, Provenance};

use crate::spread;

/// Resolve a scalar field through the user → category → fallback chain.
///
/// The market rung is field-specific and handled by the dedicated resolvers;
/// this covers the common tail of every chain.
pub(crate) fn resolve_scalar(
    field: &str,
    user: Option<f64>,
    category: Option<(f64, &str)>,
    fallback: f64,
) -> InferredInput<f64> {
    if let Some(value) = user {
        return spread::user_numeric(value, format!("{field} declared by user"));
    }
    if let Some((value, key)) = category {
        return spread::numeric(
            value,
            Provenance::FromCategory,
            format!("{field} from {key} category defaults"),
        );
    }
    spread::numeric(
        fallback,
        Provenance::Assumed,
        format!("{field} assumed from general merchandise baseline"),
    )
}
