use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use monoline::{App, Args, Config};
use std::io::{self, Write};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<()> {
    // Quiet stderr logging unless RUST_LOG says otherwise
    let mut logger = env_logger::Builder::from_default_env();
    if std::env::var_os("RUST_LOG").is_none() {
        logger.filter_level(LevelFilter::Warn);
        logger.filter_module("monoline", LevelFilter::Info);
    }
    logger.init();

    let args = Args::parse();

    if args.write_default_config {
        let path = Config::default().save(args.config.as_deref()).await?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let mut config = Config::load(args.config.as_deref()).await?;
    if args.no_color {
        config.display.use_color = false;
    }

    let mut stdout = io::stdout();
    let mut app = App::new(config).with_echo(args.script.is_some());

    let res = match &args.script {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open script: {}", path.display()))?;
            log::info!("Running commands from {}", path.display());
            app.run(BufReader::new(file), &mut stdout).await
        }
        None => app.run(BufReader::new(tokio::io::stdin()), &mut stdout).await,
    };

    if let Err(err) = res {
        log::error!("Application error: {:#}", err);
        return Err(err);
    }

    if args.dump_state {
        let report = serde_json::to_string_pretty(&app.state().report())
            .context("Failed to serialize editor state")?;
        writeln!(stdout, "{}", report)?;
    }

    Ok(())
}
