//! Category-keyed default rows for cost-model inputs.
//!
//! Values are trade-lane-typical figures per unit. An unrecognized category
//! does NOT resolve here — it falls through to [`GENERAL`], whose values are
//! global assumptions, not category knowledge.

use landed_core::models::ShippingMode;

/// Default cost-model inputs for one product category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryDefaults {
    pub key: &'static str,
    pub shipping_mode: ShippingMode,
    /// Per-unit actual weight in grams.
    pub unit_weight_g: f64,
    /// Per-unit packed volume in cubic metres.
    pub unit_volume_m3: f64,
    /// Units per export carton.
    pub carton_pack: u32,
    /// Ad-valorem duty rate fraction.
    pub duty_rate: f64,
    /// Per-unit port/handling/brokerage fees.
    pub fees_per_unit: f64,
}

/// Global fallback row used when the category is unrecognized.
pub const GENERAL: CategoryDefaults = CategoryDefaults {
    key: landed_core::constants::GENERAL_MERCHANDISE,
    shipping_mode: ShippingMode::Sea,
    unit_weight_g: 400.0,
    unit_volume_m3: 0.002,
    carton_pack: 40,
    duty_rate: 0.05,
    fees_per_unit: 0.35,
};

static TABLE: &[CategoryDefaults] = &[
    CategoryDefaults {
        key: "apparel",
        shipping_mode: ShippingMode::Sea,
        unit_weight_g: 250.0,
        unit_volume_m3: 0.0015,
        carton_pack: 60,
        duty_rate: 0.16,
        fees_per_unit: 0.25,
    },
    CategoryDefaults {
        key: "electronics",
        shipping_mode: ShippingMode::Air,
        unit_weight_g: 350.0,
        unit_volume_m3: 0.0012,
        carton_pack: 50,
        duty_rate: 0.026,
        fees_per_unit: 0.55,
    },
    CategoryDefaults {
        key: "home_goods",
        shipping_mode: ShippingMode::Sea,
        unit_weight_g: 900.0,
        unit_volume_m3: 0.006,
        carton_pack: 24,
        duty_rate: 0.045,
        fees_per_unit: 0.4,
    },
    CategoryDefaults {
        key: "toys",
        shipping_mode: ShippingMode::Sea,
        unit_weight_g: 300.0,
        unit_volume_m3: 0.003,
        carton_pack: 48,
        duty_rate: 0.0,
        fees_per_unit: 0.3,
    },
    CategoryDefaults {
        key: "beauty",
        shipping_mode: ShippingMode::Air,
        unit_weight_g: 120.0,
        unit_volume_m3: 0.0004,
        carton_pack: 120,
        duty_rate: 0.02,
        fees_per_unit: 0.45,
    },
    CategoryDefaults {
        key: "footwear",
        shipping_mode: ShippingMode::Sea,
        unit_weight_g: 700.0,
        unit_volume_m3: 0.005,
        carton_pack: 24,
        duty_rate: 0.12,
        fees_per_unit: 0.35,
    },
    CategoryDefaults {
        key: "furniture",
        shipping_mode: ShippingMode::Sea,
        unit_weight_g: 8000.0,
        unit_volume_m3: 0.12,
        carton_pack: 1,
        duty_rate: 0.029,
        fees_per_unit: 2.5,
    },
];

/// Look up the default row for a recognized category. Keys are matched on a
/// normalized form (lowercase, spaces/hyphens as underscores).
pub fn lookup(category: &str) -> Option<&'static CategoryDefaults> {
    let normalized = normalize(category);
    TABLE.iter().find(|row| row.key == normalized)
}

fn normalize(category: &str) -> String {
    category
        .trim()
        .to_lowercase()
        .replace([' ', '-'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_categories_resolve() {
        assert!(lookup("apparel").is_some());
        assert!(lookup("Home Goods").is_some());
        assert!(lookup(" electronics ").is_some());
    }

    #[test]
    fn unrecognized_category_falls_through() {
        assert!(lookup("confectionery").is_none());
        assert!(lookup("").is_none());
    }
}
