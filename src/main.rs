use anyhow::Result;
use shape_report::app;
use shape_report::config::Config;

fn main() -> Result<()> {
    // Load .env file (ignored if absent)
    let _ = dotenvy::dotenv();

    // Initialize logging (stderr, so stdout only carries the report)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("shape_report=info".parse()?),
        )
        .init();

    let config = Config::from_env()?.with_args(std::env::args().skip(1));
    let report = app::run(&config, std::io::stdin().lock())?;

    println!("{}", report);
    Ok(())
}
