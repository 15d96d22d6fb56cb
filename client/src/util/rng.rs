#[cfg(test)]
#[path = "rng_test.rs"]
mod rng_test;

use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Fold two browser entropy readings into one seed.
pub fn mix_seed(random: f64, now_ms: f64) -> u64 {
    random.to_bits() ^ now_ms.to_bits().rotate_left(29)
}

/// Generator for one batch of tray polygons.
pub fn seeded(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Generator seeded from `Math.random()` and the wall clock.
#[cfg(feature = "csr")]
pub fn fresh() -> SmallRng {
    seeded(mix_seed(js_sys::Math::random(), js_sys::Date::now()))
}
