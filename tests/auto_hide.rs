
use std::time::{Duration, Instant};

use scrollnav::host::{Lifecycle, PaneId, ViewMode};
use scrollnav::plugin::ScrollNav;
use serde_json::json;
use sim_host::{SimHost, SimStorage};

fn auto_hiding_plugin(ws: &mut SimHost) -> (ScrollNav, PaneId) {
    let pane = ws.add_pane(ViewMode::Source);
    ws.focus(Some(pane));
    let storage = SimStorage::preloaded(json!({ "auto_hide": true }));
    let mut plugin = ScrollNav::new(Box::new(storage));
    plugin.activate(ws);
    (plugin, pane)
}

#[test]
fn buttons_fade_after_the_idle_delay() {
    let mut ws = SimHost::new();
    let (mut plugin, pane) = auto_hiding_plugin(&mut ws);

    let t0 = Instant::now();
    plugin.on_active_pane_changed(&mut ws, Some(pane), t0);

    plugin.tick(&mut ws, t0 + Duration::from_millis(1999));
    assert_eq!(ws.faded_elements(), 0);

    plugin.tick(&mut ws, t0 + Duration::from_millis(2000));
    assert_eq!(ws.faded_elements(), 1);
}

#[test]
fn activity_restarts_the_countdown() {
    let mut ws = SimHost::new();
    let (mut plugin, pane) = auto_hiding_plugin(&mut ws);

    let t0 = Instant::now();
    plugin.on_active_pane_changed(&mut ws, Some(pane), t0);
    plugin.on_scroll_activity(&mut ws, t0 + Duration::from_millis(1500));

    plugin.tick(&mut ws, t0 + Duration::from_millis(2500));
    assert_eq!(ws.faded_elements(), 0);

    plugin.tick(&mut ws, t0 + Duration::from_millis(3500));
    assert_eq!(ws.faded_elements(), 1);
}

#[test]
fn interaction_brings_faded_buttons_back() {
    let mut ws = SimHost::new();
    let (mut plugin, pane) = auto_hiding_plugin(&mut ws);

    let t0 = Instant::now();
    plugin.on_active_pane_changed(&mut ws, Some(pane), t0);
    plugin.tick(&mut ws, t0 + Duration::from_secs(3));
    assert_eq!(ws.faded_elements(), 1);

    let t1 = t0 + Duration::from_secs(4);
    plugin.on_pointer_activity(&mut ws, t1);
    assert_eq!(ws.faded_elements(), 0);

    plugin.tick(&mut ws, t1 + Duration::from_secs(2));
    assert_eq!(ws.faded_elements(), 1);
}

#[test]
fn focus_switches_reset_fades() {
    let mut ws = SimHost::new();
    let (mut plugin, pane) = auto_hiding_plugin(&mut ws);
    let other = ws.add_pane(ViewMode::Source);

    let t0 = Instant::now();
    plugin.on_layout_changed(t0);
    plugin.tick(&mut ws, t0 + scrollnav::debounce::RECONCILE_DEBOUNCE);
    plugin.on_active_pane_changed(&mut ws, Some(pane), t0 + Duration::from_secs(1));
    plugin.tick(&mut ws, t0 + Duration::from_secs(4));
    assert_eq!(ws.faded_elements(), 1);

    plugin.on_active_pane_changed(&mut ws, Some(other), t0 + Duration::from_secs(5));
    assert_eq!(ws.faded_elements(), 0);
    let active = ws.active_elements();
    assert_eq!(active.len(), 1);
    assert_eq!(Some(active[0]), plugin.tracker().element_for(other));
}

#[test]
fn disabled_auto_hide_never_fades() {
    let mut ws = SimHost::new();
    let pane = ws.add_pane(ViewMode::Source);
    ws.focus(Some(pane));
    let mut plugin = ScrollNav::new(Box::new(SimStorage::new()));
    plugin.activate(&mut ws);

    let t0 = Instant::now();
    plugin.on_active_pane_changed(&mut ws, Some(pane), t0);
    plugin.tick(&mut ws, t0 + Duration::from_secs(60));
    assert_eq!(ws.faded_elements(), 0);
}

#[test]
fn custom_delay_is_honoured() {
    let mut ws = SimHost::new();
    let pane = ws.add_pane(ViewMode::Source);
    ws.focus(Some(pane));
    let storage = SimStorage::preloaded(json!({
        "auto_hide": true,
        "auto_hide_delay_ms": 500,
    }));
    let mut plugin = ScrollNav::new(Box::new(storage));
    plugin.activate(&mut ws);

    let t0 = Instant::now();
    plugin.on_active_pane_changed(&mut ws, Some(pane), t0);
    plugin.tick(&mut ws, t0 + Duration::from_millis(499));
    assert_eq!(ws.faded_elements(), 0);
    plugin.tick(&mut ws, t0 + Duration::from_millis(500));
    assert_eq!(ws.faded_elements(), 1);
}
