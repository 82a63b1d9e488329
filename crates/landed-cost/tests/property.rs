#[path = "property/cost_properties.rs"]
mod cost_properties;
