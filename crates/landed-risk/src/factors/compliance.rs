/// Fixed compliance-risk baseline.
///
/// A known simplification pending a per-category rules table (labeling,
/// certifications, restricted substances), not a bug.
pub const BASELINE: u8 = 40;

pub fn calculate() -> u8 {
    BASELINE
}
