mod test_utils;

use curve_lib::{
    price, sample, sample_with_config, CurveConfig, CurveSampler, DomainError, OptionType,
};
use test_utils::{near_money_params, reference_params, seeded_rng};

/// The standard curve has N ascending points whose ends price the 0.5·S and
/// 1.5·S contracts.
#[test]
fn test_curve_shape_and_endpoints() {
    for option_type in [OptionType::Call, OptionType::Put] {
        let params = reference_params(option_type);
        let points = sample(&params, 100).unwrap();

        assert_eq!(points.len(), 100);
        assert!(points
            .windows(2)
            .all(|w| w[0].underlying_price < w[1].underlying_price));

        let first = points.first().unwrap();
        let last = points.last().unwrap();
        assert_eq!(first.underlying_price, 50.0);
        assert_eq!(last.underlying_price, 150.0);
        assert_eq!(
            first.price,
            price(&params.with_underlying_price(0.5 * params.underlying_price)).unwrap()
        );
        assert_eq!(
            last.price,
            price(&params.with_underlying_price(1.5 * params.underlying_price)).unwrap()
        );
    }
}

/// Every sample is the engine's price at that spot.
#[test]
fn test_each_point_matches_engine() {
    let params = reference_params(OptionType::Call).with_underlying_price(42.0);
    for point in sample(&params, 37).unwrap() {
        let expected = price(&params.with_underlying_price(point.underlying_price)).unwrap();
        assert_eq!(point.price, expected);
    }
}

/// Along the curve calls rise and puts fall.
#[test]
fn test_curve_monotonicity() {
    let mut rng = seeded_rng();
    for _ in 0..50 {
        let call = near_money_params(&mut rng, OptionType::Call);
        let points = sample(&call, 100).unwrap();
        assert!(points.windows(2).all(|w| w[0].price < w[1].price), "{call:?}");

        let put = call.with_option_type(OptionType::Put);
        let points = sample(&put, 100).unwrap();
        assert!(points.windows(2).all(|w| w[0].price > w[1].price), "{put:?}");
    }
}

#[test]
fn test_too_few_points() {
    let params = reference_params(OptionType::Call);
    assert_eq!(sample(&params, 1), Err(DomainError::TooFewPoints(1)));
    assert_eq!(sample(&params, 0), Err(DomainError::TooFewPoints(0)));

    let two = sample(&params, 2).unwrap();
    assert_eq!(two.len(), 2);
    assert_eq!(two[0].underlying_price, 50.0);
    assert_eq!(two[1].underlying_price, 150.0);
}

/// An invalid contract fails the whole curve.
#[test]
fn test_invalid_params_fail_atomically() {
    let mut params = reference_params(OptionType::Put);
    params.volatility = 0.0;
    assert!(sample(&params, 100).is_err());

    params.volatility = 0.2;
    params.time_to_maturity = 1e-30;
    assert!(matches!(
        sample(&params, 100),
        Err(DomainError::DegenerateDiffusion { .. })
    ));
}

/// Parallel and sequential evaluation give identical, ordered results.
#[test]
fn test_parallel_matches_sequential() {
    let params = reference_params(OptionType::Put);
    let sequential = CurveConfig {
        point_count: 1001,
        parallel_eval: false,
        ..CurveConfig::standard()
    };
    let parallel = CurveConfig {
        parallel_eval: true,
        ..sequential.clone()
    };
    assert_eq!(
        sample_with_config(&params, &sequential).unwrap(),
        sample_with_config(&params, &parallel).unwrap()
    );
}

/// Custom range factors move the endpoints.
#[test]
fn test_custom_range() {
    let params = reference_params(OptionType::Call);
    let config = CurveConfig::from_toml_str("point_count = 5\nlower_factor = 0.8\nupper_factor = 1.2")
        .unwrap();
    let points = CurveSampler::new(config).run(&params).unwrap();
    let xs: Vec<f64> = points.iter().map(|p| p.underlying_price).collect();
    assert_eq!(xs.len(), 5);
    assert_eq!(xs[0], 80.0);
    assert_eq!(xs[4], 120.0);
    assert!((xs[2] - 100.0).abs() < 1e-12);
}

/// Sampling is a pure function of its inputs.
#[test]
fn test_sampling_is_idempotent() {
    let params = reference_params(OptionType::Call);
    assert_eq!(sample(&params, 100).unwrap(), sample(&params, 100).unwrap());
}
