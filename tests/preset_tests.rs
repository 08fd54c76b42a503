// Host-side tests for preset selection.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/preset.rs"]
mod preset;

use preset::*;

#[test]
fn known_attribute_values_select_their_preset() {
    assert_eq!(Preset::from_attr(Some("ember")), Preset::Ember);
}

#[test]
fn missing_or_unknown_values_fall_back_to_default() {
    assert_eq!(Preset::from_attr(None), Preset::default());
    assert_eq!(Preset::from_attr(Some("")), Preset::default());
    assert_eq!(Preset::from_attr(Some("neon")), Preset::default());
    assert_eq!(Preset::default(), Preset::Orchid);
}

#[test]
fn fragment_entries_are_distinct() {
    let orchid = Preset::Orchid.fragment_entry();
    let ember = Preset::Ember.fragment_entry();
    assert_ne!(orchid, ember);
    assert!(orchid.starts_with("fs_"));
    assert!(ember.starts_with("fs_"));
}
