use gamma_black::{AppConfig, Black, GammaBlack, MarketInputs, PricingModel, PricingResult};

fn main() {
    // Logs go to stderr so stdout carries only JSON quotes
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cfg = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("config error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        forward = cfg.forward,
        sigma = cfg.sigma,
        ttl_years = cfg.ttl_years,
        strikes = cfg.strikes.len(),
        "pricing strike strip"
    );

    if let Err(e) = run(&cfg) {
        tracing::error!("pricing error: {e}");
        std::process::exit(1);
    }
}

fn run(cfg: &AppConfig) -> PricingResult<()> {
    let models: [Box<dyn PricingModel>; 2] = [Box::new(GammaBlack::new()), Box::new(Black::new())];

    // Validate the market once at the money, then swap strikes along the strip
    let atm = MarketInputs::new(cfg.forward, cfg.sigma, cfg.forward, cfg.ttl_years)?;

    for &strike in &cfg.strikes {
        let inputs = atm.with_strike(strike)?;

        let mut puts = [0.0; 2];
        for (model, put) in models.iter().zip(puts.iter_mut()) {
            let quote = model.quote(&inputs);
            tracing::info!(model = quote.model, strike, put = quote.put, call = quote.call, "quote");
            *put = quote.put;
            println!("{}", serde_json::to_string(&quote)?);
        }

        tracing::debug!(strike, diff = puts[0] - puts[1], "gamma minus black put");
    }

    Ok(())
}
