use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use quickpick_core::Session;

use crate::display::{display_frequency, display_history, display_quick_pick, display_suggestion};

#[derive(Debug, PartialEq)]
enum InteractiveCommand {
    QuickPick,
    Suggest,
    History,
    Frequency,
    Quit,
}

fn parse_command(input: &str) -> Option<InteractiveCommand> {
    match input.trim().to_lowercase().as_str() {
        "1" | "tirage" | "rapide" | "quick" | "pick" => Some(InteractiveCommand::QuickPick),
        "2" | "suggestion" | "suggerer" | "suggérer" | "suggest" | "sug" => {
            Some(InteractiveCommand::Suggest)
        }
        "3" | "historique" | "history" | "hist" => Some(InteractiveCommand::History),
        "4" | "frequences" | "fréquences" | "frequency" | "freq" => {
            Some(InteractiveCommand::Frequency)
        }
        "5" | "quitter" | "quit" | "q" | "exit" => Some(InteractiveCommand::Quit),
        _ => None,
    }
}

fn display_menu() {
    println!();
    println!("── Mode interactif ──");
    println!("  1. tirage     Tirage rapide");
    println!("  2. suggestion Suggestion d'après les fréquences");
    println!("  3. historique Tirages de la session");
    println!("  4. frequences Fréquence des numéros");
    println!("  5. quitter    Quitter");
    println!();
}

/// `Ok(None)` at end of input.
fn prompt<R: BufRead>(reader: &mut R, msg: &str) -> Result<Option<String>> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut input = String::new();
    let read = reader.read_line(&mut input).context("Erreur de lecture")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

pub fn run_interactive(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    run_session(session, &mut stdin.lock())
}

fn run_session<R: BufRead>(session: &mut Session, reader: &mut R) -> Result<()> {
    println!("Bienvenue dans quickpick ! Tirages de 3 numéros entre 0 et 9.");

    loop {
        display_menu();
        let Some(input) = prompt(reader, "> ")? else {
            break; // EOF / Ctrl+D
        };

        if input.is_empty() {
            continue;
        }

        match parse_command(&input) {
            Some(InteractiveCommand::Quit) => {
                println!("Au revoir !");
                break;
            }
            Some(InteractiveCommand::QuickPick) => {
                let pick = session.quick_pick();
                display_quick_pick(&pick);
                display_history(session.history());
            }
            Some(InteractiveCommand::Suggest) => {
                let suggestion = session.suggested_pick();
                display_suggestion(&suggestion);
                if suggestion.is_fallback() {
                    display_history(session.history());
                }
            }
            Some(InteractiveCommand::History) => display_history(session.history()),
            Some(InteractiveCommand::Frequency) => display_frequency(&session.frequency()),
            None => {
                println!(
                    "Commande inconnue : '{}'. Tapez un numéro (1-5) ou un nom de commande.",
                    input
                );
            }
        }
    }

    log::debug!("session terminée après {} tirages", session.history().len());
    Ok(())
}
