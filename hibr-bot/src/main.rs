//! `hibr` binary: run the bot, list styles, or decorate a sample offline.

use anyhow::Result;
use clap::Parser;
use decoration::{decorate, normalize, StyleId};
use hibr_bot::{load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Styles => {
            for style in StyleId::ALL {
                println!("{:<28} {}", style.id(), style.label());
            }
            Ok(())
        }
        Commands::Decorate { text, style } => {
            let style: StyleId = style.parse()?;
            println!("{}", decorate(&normalize(&text), style));
            Ok(())
        }
    }
}
