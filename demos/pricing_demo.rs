// demos/pricing_demo.rs

//! Demonstration of Black-Scholes pricing and curve sampling
//!
//! This example shows how to:
//! 1. Price a call and a put for the same contract
//! 2. Check put-call parity on the result
//! 3. Sample the price curve around the spot
//! 4. Build the JSON reply a web front-end would chart

use anyhow::Result;
use curve_lib::{
    calculate, default_configs, price, sample, CalculateRequest, CalculateResponse,
    OptionParameters, OptionType,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    let call = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call)?;
    let put = call.with_option_type(OptionType::Put);

    let call_price = price(&call)?;
    let put_price = price(&put)?;
    println!("S=100 K=100 T=1y r=5% sigma=20%");
    println!("  Call: {:.4}", call_price);
    println!("  Put:  {:.4}", put_price);
    println!(
        "  Parity gap (C - P - (S - K·e^-rT)): {:.2e}",
        call_price - put_price - (call.underlying_price - call.discounted_strike())
    );

    println!("\nCall price curve (11 points):");
    println!("{:<12} {:<12} {:<12}", "Spot", "Price", "Intrinsic");
    println!("{}", "-".repeat(36));
    for point in sample(&call, 11)? {
        println!(
            "{:<12.2} {:<12.4} {:<12.4}",
            point.underlying_price,
            point.price,
            OptionType::Call.intrinsic(point.underlying_price, call.strike_price)
        );
    }

    println!("\nDegenerate input:");
    let mut expiring = call;
    expiring.time_to_maturity = 1e-30;
    match price(&expiring) {
        Ok(p) => println!("  unexpected price {p}"),
        Err(e) => println!("  rejected: {e}"),
    }

    println!("\nJSON round trip:");
    let request = CalculateRequest::from_json(
        r#"{"S": "120", "K": "100", "T": "0.5", "r": "0.03", "sigma": "0.25", "optionType": "call"}"#,
    )?;
    let config = default_configs::coarse();
    let result = calculate(&request, &config)?;
    let body = CalculateResponse::new(&result, &config.chart).to_json()?;
    println!("  price = {:.4}", result.price);
    println!("  {} bytes of response, first 120: {}", body.len(), &body[..body.len().min(120)]);

    Ok(())
}
