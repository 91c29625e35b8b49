//! Container fill ratios shared by the loading rules.

/// Share of `max_payload` a non-hazardous liquid container may be filled to.
pub const LIQUID_SAFE_FILL_RATIO: f64 = 0.9;

/// Share of `max_payload` a hazardous liquid container may be filled to.
pub const LIQUID_HAZARDOUS_FILL_RATIO: f64 = 0.5;

/// Share of the cargo a gas container keeps after being emptied.
///
/// Gas containers are never vented completely; a residual 5% stays behind to
/// keep the tank pressurised.
pub const GAS_RESIDUAL_RATIO: f64 = 0.05;
