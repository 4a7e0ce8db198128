use curve_lib::{default_configs, sample_with_config, CurveConfig, OptionParameters, OptionType};

fn main() -> anyhow::Result<()> {
    let params = OptionParameters::new(100.0, 105.0, 0.25, 0.02, 0.3, OptionType::Put)?;

    println!("Curve-lib Default Configuration Examples\n");

    for (name, config) in [
        ("Standard", default_configs::standard()),
        ("Coarse", default_configs::coarse()),
        ("Fine", default_configs::fine()),
    ] {
        let points = sample_with_config(&params, &config)?;
        println!("{name} configuration:");
        println!("   Points: {}", config.point_count);
        println!(
            "   Range: [{:.2}, {:.2}]",
            points[0].underlying_price,
            points[points.len() - 1].underlying_price
        );
        println!("   Parallel: {}", config.parallel_eval);
        println!(
            "   Put price at lower/upper end: {:.4} / {:.4}\n",
            points[0].price,
            points[points.len() - 1].price
        );
    }

    println!("Custom configuration from TOML:");
    let custom = CurveConfig::from_toml_str(
        r#"
        point_count = 21
        lower_factor = 0.8
        upper_factor = 1.2

        [chart]
        title = "Put price near the money"
        "#,
    )?;
    let points = sample_with_config(&params, &custom)?;
    println!("   {} points, title '{}'", points.len(), custom.chart.title);
    Ok(())
}
