use anyhow::{bail, Result};
use clap::ArgMatches;
use colored::Colorize;
use std::path::PathBuf;

use crate::core::MonitorConfig;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("show", sub_matches)) => show(sub_matches),
        Some(("init", sub_matches)) => init(sub_matches),
        Some(("path", _)) => {
            println!("{}", MonitorConfig::default_path()?.display());
            Ok(())
        }
        _ => {
            println!("Use 'sensorwatch config --help' for more information.");
            Ok(())
        }
    }
}

fn show(matches: &ArgMatches) -> Result<()> {
    let config = super::load_config(matches)?;
    print!("{}", config.to_toml()?);

    match config.sender.delivery_method()? {
        Some(method) => println!(
            "\n{} alerts go to {} channel '{}'",
            "→".cyan(),
            method,
            config.sender.channel.as_deref().unwrap_or("<unset>")
        ),
        None => println!("\n{} alerts are only logged", "→".cyan()),
    }
    Ok(())
}

fn init(matches: &ArgMatches) -> Result<()> {
    let path = match matches.get_one::<PathBuf>("config") {
        Some(path) => path.clone(),
        None => MonitorConfig::default_path()?,
    };

    if path.exists() && !matches.get_flag("force") {
        bail!("{:?} already exists, use --force to overwrite", path);
    }

    MonitorConfig::default().save_to(&path)?;
    println!("{} {}", "Wrote default config to".green(), path.display());
    Ok(())
}
