//! Next-action derivation.
//!
//! Ordering is deterministic and stable across repeated calls with the same
//! input — the UI diffs action lists between report versions.
//!
//! Priority rules: collecting inputs ranks first when no similar records
//! exist at all; otherwise HS confirmation ranks first whenever the
//! classification is ambiguous or unknown.

use landed_core::models::{NextAction, NextActionKind};

const PRIORITY_URGENT: u8 = 10;
const PRIORITY_HIGH: u8 = 20;
const PRIORITY_NORMAL: u8 = 30;
const PRIORITY_LOW: u8 = 40;

/// Derive the ordered action list from the report's signals.
pub fn derive(
    hs_candidate_count: usize,
    similar_record_count: u32,
    cost_estimated: bool,
    has_suppliers: bool,
) -> Vec<NextAction> {
    let mut actions = Vec::new();

    let collect_priority = if similar_record_count == 0 {
        PRIORITY_URGENT
    } else {
        PRIORITY_LOW
    };
    actions.push(NextAction {
        kind: NextActionKind::CollectInputs,
        title: "Provide product details".to_string(),
        detail: "Confirm weight, dimensions, and packaging to tighten the cost range."
            .to_string(),
        priority: collect_priority,
    });

    if hs_candidate_count != 1 {
        actions.push(NextAction {
            kind: NextActionKind::ConfirmHsCode,
            title: "Confirm HS classification".to_string(),
            detail: if hs_candidate_count == 0 {
                "No HS candidate was found; classify the product to pin down duty."
                    .to_string()
            } else {
                format!(
                    "{hs_candidate_count} HS candidates conflict; confirm which applies."
                )
            },
            priority: PRIORITY_HIGH,
        });
    }

    if has_suppliers {
        actions.push(NextAction {
            kind: NextActionKind::RequestSupplierQuotes,
            title: "Request supplier quotes".to_string(),
            detail: "Suppliers with matching import history were found; request quotes."
                .to_string(),
            priority: PRIORITY_NORMAL,
        });
    }

    if cost_estimated {
        actions.push(NextAction {
            kind: NextActionKind::VerifySampleOrder,
            title: "Verify with a sample order".to_string(),
            detail: "Place a sample order to convert the estimate into verified quotes."
                .to_string(),
            priority: PRIORITY_LOW,
        });
    }

    // Stable sort: equal priorities keep their insertion order.
    actions.sort_by_key(|a| a.priority);
    actions
}
