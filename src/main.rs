use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use bom_dashboard::{dashboard, to_html, PageServer, Settings};

#[derive(Parser, Debug)]
#[command(name = "bom-dashboard", version, about = "Serve the Bill of Materials dashboard page")]
struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to listen on, overrides the settings file
    #[arg(long)]
    address: Option<String>,

    /// Port to listen on, overrides the settings file (0 = any free port)
    #[arg(long)]
    port: Option<u16>,

    /// Print the rendered page to stdout and exit
    #[arg(long)]
    render: bool,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    save_config: bool,
}

fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // The fmt subscriber also installs the `log` bridge, so log:: macros land here.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(Settings::default_path);

    // Settings decide the log level, so logging starts only after they are read.
    let loaded = Settings::try_load(&config_path);
    let mut settings = match &loaded {
        Ok(Some(s)) => s.clone(),
        _ => Settings::default(),
    };

    init_logging(&settings.log_level);

    match loaded {
        Ok(Some(_)) => log::info!("[Settings] Loaded {}", config_path.display()),
        Ok(None) => log::debug!("[Settings] No file at {}, using defaults", config_path.display()),
        Err(e) => log::warn!(
            "[Settings] Failed to load {}: {}, using defaults",
            config_path.display(),
            e
        ),
    }

    if let Some(address) = cli.address {
        settings.address = address;
    }
    if let Some(port) = cli.port {
        settings.port = port;
    }

    if cli.save_config {
        settings
            .save(&config_path)
            .with_context(|| format!("failed to write {}", config_path.display()))?;
        log::info!("[Settings] Saved {}", config_path.display());
    }

    if cli.render {
        print!("{}", to_html(&dashboard()));
        return Ok(());
    }

    let server = PageServer::bind(&settings)
        .with_context(|| format!("failed to start on {}:{}", settings.address, settings.port))?;
    server.run().context("page host stopped")?;

    Ok(())
}
