//! Headless runs driven by a key script.

use combobox::message::{BlurMsg, FocusMsg};
use combobox::simulator::ProgramSimulator;
use combobox::{ChangeEvent, Combobox, KeyMsg, KeyType, Message};

/// Parses a comma-separated key script into messages.
///
/// Named tokens become key or focus messages; any other token is typed
/// character by character. Empty tokens are skipped.
pub fn parse(script: &str) -> Vec<Message> {
    script
        .split(',')
        .filter(|token| !token.is_empty())
        .flat_map(|token| match token.trim() {
            "down" => vec![key(KeyType::Down)],
            "up" => vec![key(KeyType::Up)],
            "enter" => vec![key(KeyType::Enter)],
            "esc" => vec![key(KeyType::Esc)],
            "backspace" => vec![key(KeyType::Backspace)],
            "focus" => vec![Message::new(FocusMsg)],
            "blur" => vec![Message::new(BlurMsg)],
            _ => token.chars().map(|c| Message::new(KeyMsg::from_char(c))).collect(),
        })
        .collect()
}

fn key(key_type: KeyType) -> Message {
    Message::new(KeyMsg::from_type(key_type))
}

/// Runs a script against a focused combobox and returns the last committed
/// value, along with the final view.
pub fn run(mut combo: Combobox, script: &str) -> (Option<ChangeEvent>, String) {
    combo.on_focus();
    let mut sim = ProgramSimulator::new(combo);
    for msg in parse(script) {
        sim.send(msg);
    }
    let processed = sim.run_until_empty();
    tracing::info!(
        processed,
        updates = sim.stats().update_calls,
        commits = sim.changes().len(),
        "script finished"
    );

    let view = sim.last_view().unwrap_or_default().to_string();
    (sim.changes().last().cloned(), view)
}
