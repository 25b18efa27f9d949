mod display;
mod interactive;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use quickpick_core::Session;

use crate::display::{display_frequency, display_history, display_quick_pick, display_suggestion};

#[derive(Parser)]
#[command(name = "quickpick", about = "Tirages rapides à 3 numéros et suggestions")]
struct Cli {
    /// Seed pour la reproductibilité
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Mode interactif (par défaut)
    Interactive,

    /// Enchaîner des tirages rapides puis une suggestion
    Simulate {
        /// Nombre de tirages rapides
        #[arg(short, long, default_value = "10")]
        draws: usize,

        /// Sortie JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut session = Session::new(cli.seed);

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => interactive::run_interactive(&mut session),
        Command::Simulate { draws, json } => cmd_simulate(&mut session, draws, json),
    }
}

fn cmd_simulate(session: &mut Session, draws: usize, json: bool) -> Result<()> {
    for _ in 0..draws {
        session.quick_pick();
    }
    let suggestion = session.suggested_pick();
    log::info!("{} tirages simulés, suggestion {}", session.history().len(), suggestion.pick);

    if json {
        let report = serde_json::to_string_pretty(&session.report())
            .context("Échec de la sérialisation JSON")?;
        println!("{report}");
        return Ok(());
    }

    display_history(session.history());
    display_frequency(&session.frequency());
    if let Some(pick) = session.last_pick() {
        display_quick_pick(&pick);
    }
    if !suggestion.is_fallback() {
        display_suggestion(&suggestion);
    }
    Ok(())
}
