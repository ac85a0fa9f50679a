use config::{Args, TracelistenerConfig};
use tracelistener::{app, logging};

fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();
    let config = TracelistenerConfig::from_env_file(&args.env_file)?;
    logging::init(&config.log.level, config.log.json, config.log.strip_ansi)?;

    tracing::debug!("Bech32 prefix: {}", config.chain.bech32_prefix);

    let output = app::run(&args, &config)?;
    println!("{}", output);

    Ok(())
}
