/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Schema version stamped on every `Report`. Consumers must tolerate unknown
/// additional fields and must not assume fields beyond what this guarantees.
pub const REPORT_SCHEMA_VERSION: u32 = 2;

/// Dimensional-weight conversion factor for volumetric freight billing
/// (6000 cm³/kg divisor, expressed per cubic metre).
pub const VOLUMETRIC_KG_PER_M3: f64 = 167.0;

/// Category key used when image analysis yields an unrecognized category.
pub const GENERAL_MERCHANDISE: &str = "general_merchandise";
