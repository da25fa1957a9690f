
use scrollnav::host::{Lifecycle, SettingsPanel, ViewMode};
use scrollnav::plugin::ScrollNav;
use scrollnav::settings::{ButtonSize, Settings};
use scrollnav::settings_editor::SettingsEditor;
use sim_host::{ScriptedUi, SimHost, SimStorage};

fn activated(ws: &mut SimHost, storage: SimStorage) -> ScrollNav {
    let mut plugin = ScrollNav::new(Box::new(storage));
    plugin.activate(ws);
    plugin
}

#[test]
fn an_untouched_form_changes_nothing() {
    let mut ws = SimHost::new();
    ws.add_pane(ViewMode::Source);
    let storage = SimStorage::new();
    let mut plugin = activated(&mut ws, storage.clone());
    let mounts_before = ws.mounts;

    let mut form = ScriptedUi::new();
    plugin.render_settings(&mut ws, &mut form);

    assert_eq!(storage.saved(), None);
    assert_eq!(ws.style_installs, 1);
    assert_eq!(ws.mounts, mounts_before);
}

#[test]
fn a_toggle_flip_persists_restyles_and_rebuilds() {
    let mut ws = SimHost::new();
    ws.add_pane(ViewMode::Source);
    ws.add_pane(ViewMode::Preview);
    let storage = SimStorage::new();
    let mut plugin = activated(&mut ws, storage.clone());

    let mut form = ScriptedUi::new();
    form.set_toggle("Show scroll-to-bottom button", false);
    plugin.render_settings(&mut ws, &mut form);

    let saved = storage.saved().expect("edit persisted");
    assert_eq!(saved["show_bottom_button"], serde_json::Value::Bool(false));
    assert_eq!(ws.style_installs, 2);
    assert_eq!(ws.live_elements(), 2);
    for model in ws.overlay_models() {
        assert_eq!(model.buttons.len(), 1);
    }
}

#[test]
fn padding_edits_land_in_the_stylesheet() {
    let mut ws = SimHost::new();
    ws.add_pane(ViewMode::Source);
    let mut plugin = activated(&mut ws, SimStorage::new());

    let mut form = ScriptedUi::new();
    form.set_number("Horizontal padding", 40.0);
    plugin.render_settings(&mut ws, &mut form);

    let css = ws.stylesheet.as_deref().unwrap();
    assert!(css.contains("right: 40px;"));
}

#[test]
fn tooltip_edits_flow_into_rebuilt_overlays() {
    let mut ws = SimHost::new();
    ws.add_pane(ViewMode::Source);
    let mut plugin = activated(&mut ws, SimStorage::new());

    let mut form = ScriptedUi::new();
    form.set_text("Top button tooltip", "Up we go");
    plugin.render_settings(&mut ws, &mut form);

    let models = ws.overlay_models();
    assert_eq!(models[0].buttons[0].tooltip, "Up we go");
}

#[test]
fn size_select_maps_option_indices() {
    let mut settings = Settings::default();
    let mut editor = SettingsEditor::new();

    let mut form = ScriptedUi::new();
    form.set_select("Button size", 2);
    assert!(editor.render(&mut form, &mut settings));
    assert_eq!(settings.button_size, ButtonSize::Large);

    // An out-of-range index from a confused host collapses to the default.
    let mut form = ScriptedUi::new();
    form.set_select("Button size", 9);
    editor.render(&mut form, &mut settings);
    assert_eq!(settings.button_size, ButtonSize::Medium);
}

#[test]
fn number_rows_round_and_clamp() {
    let mut settings = Settings::default();
    let mut editor = SettingsEditor::new();

    let mut form = ScriptedUi::new();
    form.set_number("Button spacing", 500.0);
    form.set_number("Fade duration", -10.0);
    form.set_number("Vertical padding", 19.4);
    assert!(editor.render(&mut form, &mut settings));

    assert_eq!(settings.button_spacing, 64);
    assert_eq!(settings.fade_duration_ms, 0);
    assert_eq!(settings.vertical_padding, 19);
}

#[test]
fn invalid_color_is_rejected_with_a_message() {
    let mut settings = Settings {
        use_custom_color: true,
        ..Settings::default()
    };
    let mut editor = SettingsEditor::new();

    let mut form = ScriptedUi::new();
    form.set_text("Button color", "not-a-color");
    let changed = editor.render(&mut form, &mut settings);

    assert!(!changed);
    assert_eq!(settings.button_color, "#7c3aed");
    assert!(editor.last_error().unwrap().contains("not-a-color"));
}

#[test]
fn valid_color_clears_the_error() {
    let mut settings = Settings {
        use_custom_color: true,
        ..Settings::default()
    };
    let mut editor = SettingsEditor::new();

    let mut form = ScriptedUi::new();
    form.set_text("Button color", "bogus");
    editor.render(&mut form, &mut settings);
    assert!(editor.last_error().is_some());

    let mut form = ScriptedUi::new();
    form.set_text("Button color", "#0a0b0c");
    assert!(editor.render(&mut form, &mut settings));
    assert_eq!(settings.button_color, "#0a0b0c");
    assert_eq!(editor.last_error(), None);
}

#[test]
fn color_row_is_hidden_while_theme_colors_are_in_use() {
    let mut settings = Settings::default();
    let mut editor = SettingsEditor::new();

    let mut form = ScriptedUi::new();
    editor.render(&mut form, &mut settings);
    assert!(!form.rows_drawn.iter().any(|r| r == "Button color"));

    let mut form = ScriptedUi::new();
    form.set_toggle("Custom button color", true);
    editor.render(&mut form, &mut settings);
    assert!(form.rows_drawn.iter().any(|r| r == "Button color"));
}

#[test]
fn auto_hide_delay_row_appears_with_the_feature() {
    let mut settings = Settings::default();
    let mut editor = SettingsEditor::new();

    let mut form = ScriptedUi::new();
    editor.render(&mut form, &mut settings);
    assert!(!form.rows_drawn.iter().any(|r| r == "Auto-hide delay"));

    let mut form = ScriptedUi::new();
    form.set_toggle("Auto-hide buttons", true);
    form.set_number("Auto-hide delay", 4000.0);
    assert!(editor.render(&mut form, &mut settings));
    assert!(settings.auto_hide);
    assert_eq!(settings.auto_hide_delay_ms, 4000);
}
