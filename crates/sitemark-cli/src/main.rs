use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use log::info;

mod config;
mod site;

use config::Config;

#[derive(Parser)]
#[command(name = "sitemark")]
#[command(about = "Build a static HTML site from Markdown content")]
struct Cli {
    /// Config file (defaults to sitemark.toml in the working directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the Markdown pages
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory of static assets copied into the output
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Output directory (replaced on every build)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Flags win over the config file
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(content) = &self.content {
            config.content = content.clone();
        }
        if let Some(static_dir) = &self.static_dir {
            config.static_dir = static_dir.clone();
        }
        if let Some(template) = &self.template {
            config.template = template.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(Config::FILE_NAME));
    let mut config = Config::load_from_path(&config_path)?;
    cli.apply_overrides(&mut config);

    site::copy_dir(&config.static_dir, &config.output).with_context(|| {
        format!(
            "copying static assets from {} to {}",
            config.static_dir.display(),
            config.output.display()
        )
    })?;

    let pages = site::generate_pages_recursive(&config.content, &config.template, &config.output)
        .with_context(|| format!("generating pages from {}", config.content.display()))?;

    info!("Created {} pages in {}", pages, config.output.display());
    Ok(())
}
