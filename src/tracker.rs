use std::time::{Duration, Instant};

use hashlink::LinkedHashMap;

use crate::host::{AnchorId, ElementId, PaneId, Workspace};
use crate::overlay::build_overlay;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy)]
struct OverlayEntry {
    anchor: AnchorId,
    element: ElementId,
    faded: bool,
}

/// What one reconcile pass actually did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub mounted: usize,
    pub dismounted: usize,
}

impl ReconcileOutcome {
    pub fn changed(&self) -> bool {
        self.mounted > 0 || self.dismounted > 0
    }
}

/// Keeps the set of mounted overlays equal to the set of open panes.
///
/// Entries live in insertion order so every pass over the table is
/// deterministic. The tracker owns no host objects; it only remembers the
/// handles the host issued, and hands them back when something must change.
pub struct PaneTracker {
    overlays: LinkedHashMap<PaneId, OverlayEntry>,
    focused: Option<PaneId>,
    hide_deadline: Option<Instant>,
}

impl Default for PaneTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PaneTracker {
    pub fn new() -> Self {
        Self {
            overlays: LinkedHashMap::new(),
            focused: None,
            hide_deadline: None,
        }
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    pub fn focused(&self) -> Option<PaneId> {
        self.focused
    }

    /// Panes with a mounted overlay, oldest first.
    pub fn tracked_panes(&self) -> Vec<PaneId> {
        self.overlays.keys().copied().collect()
    }

    pub fn element_for(&self, pane: PaneId) -> Option<ElementId> {
        self.overlays.get(&pane).map(|entry| entry.element)
    }

    /// Diff the tracked set against the panes the host reports open, then
    /// dismount overlays for closed panes and mount overlays for new ones.
    /// Running it twice against an unchanged workspace does nothing the
    /// second time.
    ///
    /// A pane whose anchor is not ready yet is skipped, not failed; it gets
    /// picked up on whichever later pass finds the anchor.
    pub fn reconcile(&mut self, ws: &mut dyn Workspace, settings: &Settings) -> ReconcileOutcome {
        let open = ws.open_panes();
        let mut outcome = ReconcileOutcome::default();

        let closed: Vec<PaneId> = self
            .overlays
            .keys()
            .copied()
            .filter(|pane| !open.contains(pane))
            .collect();
        for pane in closed {
            if let Some(entry) = self.overlays.remove(&pane) {
                ws.dismount_overlay(entry.element);
                outcome.dismounted += 1;
            }
        }

        let model = build_overlay(settings);
        for pane in open {
            if self.overlays.contains_key(&pane) {
                continue;
            }
            let Some(anchor) = ws.overlay_anchor(pane) else {
                tracing::debug!(pane = pane.0, "no overlay anchor yet; will retry");
                continue;
            };
            let element = ws.mount_overlay(anchor, &model);
            ws.set_overlay_active(element, self.focused == Some(pane));
            self.overlays.insert(
                pane,
                OverlayEntry {
                    anchor,
                    element,
                    faded: false,
                },
            );
            outcome.mounted += 1;
        }

        if let Some(pane) = self.focused {
            if !self.overlays.contains_key(&pane) {
                self.focused = None;
                self.hide_deadline = None;
            }
        }

        if outcome.changed() {
            tracing::debug!(
                mounted = outcome.mounted,
                dismounted = outcome.dismounted,
                tracked = self.overlays.len(),
                "reconciled overlays"
            );
        }
        outcome
    }

    /// Tear down and remount every tracked overlay against its existing
    /// anchor. Used after a settings change, when the overlay contents are
    /// stale but the pane set is not.
    pub fn rebuild_all(&mut self, ws: &mut dyn Workspace, settings: &Settings) {
        let model = build_overlay(settings);
        for (pane, entry) in self.overlays.iter_mut() {
            ws.dismount_overlay(entry.element);
            let element = ws.mount_overlay(entry.anchor, &model);
            ws.set_overlay_active(element, self.focused == Some(*pane));
            entry.element = element;
            entry.faded = false;
        }
        self.hide_deadline = None;
        tracing::debug!(tracked = self.overlays.len(), "rebuilt overlays");
    }

    /// Mark `pane`'s overlay as the active one and every other overlay as
    /// inactive. `None` deactivates them all. Fade state resets alongside,
    /// so a focus switch always starts from visible buttons.
    pub fn set_focus(&mut self, ws: &mut dyn Workspace, pane: Option<PaneId>) {
        self.focused = pane;
        self.hide_deadline = None;
        for (tracked, entry) in self.overlays.iter_mut() {
            ws.set_overlay_active(entry.element, Some(*tracked) == pane);
            if entry.faded {
                ws.set_overlay_faded(entry.element, false);
                entry.faded = false;
            }
        }
    }

    /// Pointer or scroll traffic in the focused pane. Restarts the
    /// auto-hide countdown and brings a faded overlay back.
    pub fn note_activity(&mut self, ws: &mut dyn Workspace, now: Instant, settings: &Settings) {
        if !settings.auto_hide {
            return;
        }
        if let Some(entry) = self.focused.and_then(|pane| self.overlays.get_mut(&pane)) {
            if entry.faded {
                ws.set_overlay_faded(entry.element, false);
                entry.faded = false;
            }
            self.hide_deadline = Some(now + Duration::from_millis(settings.auto_hide_delay_ms));
        }
    }

    /// Apply an expired auto-hide countdown by fading the focused overlay.
    pub fn tick(&mut self, ws: &mut dyn Workspace, now: Instant, settings: &Settings) {
        if !settings.auto_hide {
            self.hide_deadline = None;
            return;
        }
        let Some(deadline) = self.hide_deadline else {
            return;
        };
        if now < deadline {
            return;
        }
        self.hide_deadline = None;
        if let Some(entry) = self.focused.and_then(|pane| self.overlays.get_mut(&pane)) {
            if !entry.faded {
                ws.set_overlay_faded(entry.element, true);
                entry.faded = true;
                tracing::debug!("auto-hid overlay after idle period");
            }
        }
    }

    /// Dismount everything, oldest first. Leaves the tracker empty.
    pub fn clear(&mut self, ws: &mut dyn Workspace) {
        while let Some((_, entry)) = self.overlays.pop_front() {
            ws.dismount_overlay(entry.element);
        }
        self.focused = None;
        self.hide_deadline = None;
    }
}
