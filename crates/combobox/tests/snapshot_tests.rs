//! Snapshot tests for the terminal view.
//!
//! Views are rendered with plain styles and trailing padding trimmed so the
//! snapshots show structure, not colors.

use combobox::config::ComboboxConfig;
use combobox::style::Styles;
use combobox::{Combobox, KeyMsg, KeyType};

fn snapshot_view(combo: &Combobox) -> String {
    combo
        .view()
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

fn cities() -> Combobox {
    let config = ComboboxConfig {
        placeholder: "Pick a city".to_string(),
        list_height: 3,
        show_help: true,
        ..ComboboxConfig::with_id("city")
    };
    let mut combo = Combobox::from_config(&config)
        .unwrap()
        .with_styles(Styles::plain());
    combo.set_options(["Amsterdam", "Berlin", "Canberra", "Dublin", "Edinburgh"]);
    combo
}

#[test]
fn snapshot_collapsed_placeholder() {
    let combo = cities();
    insta::assert_snapshot!(snapshot_view(&combo), @"> Pick a city");
}

#[test]
fn snapshot_expanded_scrolled() {
    let mut combo = cities();
    combo.on_focus();
    for _ in 0..4 {
        combo.on_keydown(&KeyMsg::from_type(KeyType::Down));
    }
    insta::assert_snapshot!(snapshot_view(&combo), @r"
    > Pick a city
      Berlin
      Canberra
    › Dublin
    ↓ next option • ↑ previous option • enter select • esc close
    ");
}

#[test]
fn snapshot_filtered() {
    let mut combo = cities();
    combo.on_focus();
    combo.on_input("ber");
    insta::assert_snapshot!(snapshot_view(&combo), @r"
    > ber
      Berlin
      Canberra
    ↓ next option • ↑ previous option • enter select • esc close
    ");
}

#[test]
fn snapshot_no_matches() {
    let mut combo = cities();
    combo.on_focus();
    combo.on_input("zz");
    insta::assert_snapshot!(snapshot_view(&combo), @r"
    > zz
      No matches
    ↓ next option • ↑ previous option • enter select • esc close
    ");
}
