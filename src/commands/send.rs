//! Send an ad-hoc status message through the configured backend.

use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use colored::Colorize;

use crate::core::dispatch::Dispatcher;
use crate::core::state_monitor::MessageFormatter;
use crate::core::status::StatusMessage;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = super::load_config(matches)?;
    let message = status_from_args(matches);

    if message.is_empty() {
        bail!("Nothing to send. Use --message, --hello, --battery or --offline.");
    }

    let text = message.render(&MessageFormatter::new(config.identity.clone()));

    let dispatcher = Dispatcher::from_config(&config.sender)?;
    let backend = match dispatcher.backend_name() {
        Some(name) => name,
        None => bail!("No delivery backend available; check [sender] in the config"),
    };

    dispatcher
        .deliver(&text)
        .with_context(|| format!("Failed to send message via {}", backend))?;

    println!(
        "{} via {} to '{}'",
        "Message sent".green().bold(),
        backend,
        dispatcher.channel()
    );
    Ok(())
}

fn status_from_args(matches: &ArgMatches) -> StatusMessage {
    let status = if matches.get_flag("hello") {
        Some("Hello World".to_string())
    } else {
        matches.get_one::<String>("message").cloned()
    };

    let battery = if matches.get_flag("lowbattery") {
        Some("low".to_string())
    } else {
        matches.get_one::<String>("battery").cloned()
    };

    StatusMessage {
        status,
        battery,
        offline: matches.get_flag("offline"),
    }
}
