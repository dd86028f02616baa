use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

use sensorwatch::commands;

fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .value_name("FILE")
        .help("Path to the config file (defaults to the user config directory)")
        .value_parser(clap::value_parser!(PathBuf))
}

fn main() -> Result<()> {
    sensorwatch::init_logging();

    let matches = Command::new("sensorwatch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("State monitor and alert dispatcher for remote sensors")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue)
        )
        .subcommand(
            Command::new("version")
                .about("Shows version information")
        )
        .subcommand(
            Command::new("run")
                .about("Run one monitoring cycle per JSON sample line")
                .arg(config_arg())
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .value_name("FILE")
                        .help("File with one JSON sample per line (defaults to stdin)")
                        .value_parser(clap::value_parser!(PathBuf))
                )
                .arg(
                    Arg::new("interval")
                        .long("interval")
                        .value_name("MS")
                        .help("Pause between cycles in milliseconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("0")
                )
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .help("Only log alerts, never send them")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("send")
                .about("Send a status message through the configured backend")
                .arg(config_arg())
                .arg(
                    Arg::new("message")
                        .short('m')
                        .long("message")
                        .value_name("TEXT")
                        .help("Custom status message to send")
                        .conflicts_with("hello")
                )
                .arg(
                    Arg::new("hello")
                        .long("hello")
                        .help("Send a test message")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("battery")
                        .long("battery")
                        .value_name("VOLTAGE")
                        .help("Report a battery voltage")
                        .conflicts_with("lowbattery")
                )
                .arg(
                    Arg::new("lowbattery")
                        .long("lowbattery")
                        .help("Report a low battery")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("offline")
                        .long("offline")
                        .help("Mark the sensor as offline")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("config")
                .about("Inspect or create the config file")
                .subcommand(
                    Command::new("show")
                        .about("Print the resolved configuration")
                        .arg(config_arg())
                )
                .subcommand(
                    Command::new("init")
                        .about("Write a default config file")
                        .arg(config_arg())
                        .arg(
                            Arg::new("force")
                                .short('f')
                                .long("force")
                                .help("Overwrite an existing file")
                                .action(ArgAction::SetTrue)
                        )
                )
                .subcommand(
                    Command::new("path")
                        .about("Print the default config file location")
                )
        )
        .get_matches();

    if matches.get_flag("version") {
        return commands::version();
    }

    match matches.subcommand() {
        Some(("version", _)) => commands::version()?,
        Some(("run", sub_matches)) => commands::run::execute(sub_matches)?,
        Some(("send", sub_matches)) => commands::send::execute(sub_matches)?,
        Some(("config", sub_matches)) => commands::config::execute(sub_matches)?,
        _ => {
            println!("Welcome to sensorwatch!");
            println!("Use 'sensorwatch --help' for more information.");
        }
    }

    Ok(())
}
