use std::time::Instant;

use crate::debounce::{Debouncer, RECONCILE_DEBOUNCE};
use crate::host::{
    CommandSpec, Lifecycle, PaneId, ScrollTarget, SettingsPanel, SettingsStorage, Workspace,
};
use crate::logging;
use crate::scroll;
use crate::settings::Settings;
use crate::settings_editor::{SettingsEditor, SettingsUi};
use crate::stylesheet::StylesheetSync;
use crate::tracker::PaneTracker;

pub const CMD_SCROLL_TOP: &str = "scrollnav:scroll-to-top";
pub const CMD_SCROLL_BOTTOM: &str = "scrollnav:scroll-to-bottom";

/// Palette commands registered on activation. They mirror the overlay
/// buttons but work from the keyboard, focused pane only.
pub const COMMANDS: [CommandSpec; 2] = [
    CommandSpec {
        id: CMD_SCROLL_TOP,
        title: "Scroll active pane to top",
        target: ScrollTarget::Top,
    },
    CommandSpec {
        id: CMD_SCROLL_BOTTOM,
        title: "Scroll active pane to bottom",
        target: ScrollTarget::Bottom,
    },
];

/// The plugin. The host owns one instance, registers it for lifecycle and
/// settings-panel callbacks, and forwards workspace events to the entry
/// points below. Every entry point that depends on time takes `now` from
/// the caller.
pub struct ScrollNav {
    settings: Settings,
    tracker: PaneTracker,
    debouncer: Debouncer,
    stylesheet: StylesheetSync,
    editor: SettingsEditor,
    storage: Box<dyn SettingsStorage>,
}

impl ScrollNav {
    pub fn new(storage: Box<dyn SettingsStorage>) -> Self {
        Self {
            settings: Settings::default(),
            tracker: PaneTracker::new(),
            debouncer: Debouncer::new(RECONCILE_DEBOUNCE),
            stylesheet: StylesheetSync::new(),
            editor: SettingsEditor::new(),
            storage,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn tracker(&self) -> &PaneTracker {
        &self.tracker
    }

    /// The host's layout changed: a pane opened, closed, split or moved.
    /// Collapses event bursts; the actual reconcile runs from `tick` once
    /// the burst has been quiet for [`RECONCILE_DEBOUNCE`].
    pub fn on_layout_changed(&mut self, now: Instant) {
        self.debouncer.trigger(now);
    }

    /// Focus moved to `pane` (or away from every pane).
    pub fn on_active_pane_changed(
        &mut self,
        ws: &mut dyn Workspace,
        pane: Option<PaneId>,
        now: Instant,
    ) {
        self.tracker.set_focus(ws, pane);
        self.tracker.note_activity(ws, now, &self.settings);
    }

    pub fn on_pointer_activity(&mut self, ws: &mut dyn Workspace, now: Instant) {
        self.tracker.note_activity(ws, now, &self.settings);
    }

    pub fn on_scroll_activity(&mut self, ws: &mut dyn Workspace, now: Instant) {
        self.tracker.note_activity(ws, now, &self.settings);
    }

    /// Host heartbeat. Runs a pending reconcile once its quiet period has
    /// elapsed, then applies any expired auto-hide countdown.
    pub fn tick(&mut self, ws: &mut dyn Workspace, now: Instant) {
        if self.debouncer.fire(now) {
            self.tracker.reconcile(ws, &self.settings);
            let active = ws.active_pane();
            self.tracker.set_focus(ws, active);
            self.tracker.note_activity(ws, now, &self.settings);
        }
        self.tracker.tick(ws, now, &self.settings);
    }

    /// A click on one of the overlay buttons.
    pub fn on_overlay_click(
        &mut self,
        ws: &mut dyn Workspace,
        pane: PaneId,
        target: ScrollTarget,
        now: Instant,
    ) {
        scroll::scroll_to(ws, Some(pane), target, &self.settings);
        self.tracker.note_activity(ws, now, &self.settings);
    }

    /// A palette command fired. Unknown ids are ignored; the id namespace
    /// belongs to the host and collisions are its problem, not ours.
    pub fn run_command(&mut self, ws: &mut dyn Workspace, id: &str) {
        let Some(command) = COMMANDS.iter().find(|c| c.id == id) else {
            tracing::debug!(id, "command does not belong to this plugin; ignoring");
            return;
        };
        let active = ws.active_pane();
        scroll::scroll_to(ws, active, command.target, &self.settings);
    }

    fn persist(&self) {
        match serde_json::to_value(&self.settings) {
            Ok(value) => self.storage.save(&value),
            Err(err) => tracing::warn!("could not serialise settings: {err}"),
        }
    }
}

impl Lifecycle for ScrollNav {
    fn activate(&mut self, ws: &mut dyn Workspace) {
        self.settings = Settings::from_persisted(self.storage.load());
        logging::init(self.settings.debug_logging);
        self.stylesheet.sync(ws, &self.settings);
        for command in &COMMANDS {
            ws.register_command(command);
        }
        self.tracker.reconcile(ws, &self.settings);
        let active = ws.active_pane();
        self.tracker.set_focus(ws, active);
        tracing::info!(tracked = self.tracker.len(), "scrollnav activated");
    }

    fn deactivate(&mut self, ws: &mut dyn Workspace) {
        self.debouncer.cancel();
        self.tracker.clear(ws);
        self.stylesheet.remove(ws);
        tracing::info!("scrollnav deactivated");
    }
}

impl SettingsPanel for ScrollNav {
    fn render_settings(&mut self, ws: &mut dyn Workspace, ui: &mut dyn SettingsUi) {
        let was_debug = self.settings.debug_logging;
        if self.editor.render(ui, &mut self.settings) {
            self.persist();
            self.stylesheet.sync(ws, &self.settings);
            self.tracker.rebuild_all(ws, &self.settings);
            if self.settings.debug_logging != was_debug {
                logging::init(self.settings.debug_logging);
            }
        }
    }
}
