#![allow(dead_code)] // each test binary uses a different subset

use curve_lib::{OptionParameters, OptionType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The textbook contract: S=100, K=100, T=1, r=5%, sigma=20%
pub fn reference_params(option_type: OptionType) -> OptionParameters {
    OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, option_type)
        .expect("reference parameters are valid")
}

/// Deterministic generator so failures reproduce
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_b5)
}

/// Parameters drawn from a broad but practical region
pub fn random_params(rng: &mut StdRng, option_type: OptionType) -> OptionParameters {
    OptionParameters::new(
        rng.gen_range(1.0..500.0),
        rng.gen_range(1.0..500.0),
        rng.gen_range(0.01..5.0),
        rng.gen_range(-0.02..0.10),
        rng.gen_range(0.01..1.5),
        option_type,
    )
    .expect("generated parameters are valid")
}

/// Parameters close to the money, where prices stay well above rounding noise
/// across the whole `[0.5·S, 1.5·S]` curve
pub fn near_money_params(rng: &mut StdRng, option_type: OptionType) -> OptionParameters {
    OptionParameters::new(
        100.0,
        rng.gen_range(90.0..110.0),
        rng.gen_range(0.5..2.0),
        rng.gen_range(0.0..0.08),
        rng.gen_range(0.2..0.5),
        option_type,
    )
    .expect("generated parameters are valid")
}

pub fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{what}: expected {expected}, got {actual} (tol {tol})"
    );
}
