//! Constant values shared by fixtures.

/// Publication tiers seeded with the listing tables, mirrors the tier migration
///
/// (slug, name, price_cents, duration_days, featured)
pub const TEST_TIERS: [(&str, &str, i32, i32, bool); 3] = [
    ("basic", "Basic", 0, 30, false),
    ("featured", "Featured", 9900, 30, true),
    ("premium", "Premium", 24900, 60, true),
];

/// Password hash stored for fixture principals that never log in
pub static TEST_PASSWORD_HASH: &str = "fixture-password-hash";

/// Days a published fixture listing stays up
pub const TEST_LISTING_DAYS: i64 = 30;
