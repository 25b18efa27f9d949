use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};

use quickpick_core::models::{FrequencyEntry, History, Pick, Suggestion};

pub fn display_quick_pick(pick: &Pick) {
    println!("\n🎲 Tirage rapide : {}", pick);
}

pub fn display_suggestion(suggestion: &Suggestion) {
    if suggestion.is_fallback() {
        println!("\nHistorique vide, tirage rapide à la place.");
        display_quick_pick(&suggestion.pick);
        return;
    }
    println!("\n⭐ Suggestion : {}  ({})", suggestion.pick, suggestion.source);
}

pub fn display_history(history: &History) {
    if history.is_empty() {
        println!("Aucun tirage dans l'historique.");
        return;
    }

    println!("\n📜 Historique ({} tirages)\n", history.len());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Tirage"]);

    for (i, pick) in history.iter().enumerate() {
        table.add_row(vec![format!("{}", i + 1), pick.to_string()]);
    }
    println!("{table}");
}

pub fn display_frequency(frequency: &[FrequencyEntry]) {
    if frequency.is_empty() {
        println!("Aucune fréquence à afficher.");
        return;
    }

    println!("\n📊 Fréquences\n");

    let top = frequency.first().map(|e| e.count).unwrap_or(0);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Numéro", "Fréquence"]);

    for entry in frequency {
        let color = if entry.count == top { Color::Green } else { Color::White };
        table.add_row(vec![
            Cell::new(format!("{:2}", entry.number)),
            Cell::new(format!("{} fois", entry.count)).fg(color),
        ]);
    }
    println!("{table}");
}
