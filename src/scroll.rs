use crate::host::{PaneId, ScrollTarget, ViewMode, Workspace};
use crate::settings::Settings;

/// Send `pane` to the top or bottom of its document, using whichever
/// mechanism its current view supports. A missing pane is a no-op; scroll
/// requests race against pane teardown all the time and losing one is fine.
pub fn scroll_to(
    ws: &mut dyn Workspace,
    pane: Option<PaneId>,
    target: ScrollTarget,
    settings: &Settings,
) {
    let Some(pane) = pane else {
        tracing::debug!(?target, "scroll requested without a pane; ignoring");
        return;
    };
    match ws.view_mode(pane) {
        Some(ViewMode::Source) => {
            let line = match target {
                ScrollTarget::Top => 0,
                ScrollTarget::Bottom => ws.last_line(pane),
            };
            ws.move_cursor(pane, line);
            ws.reveal_line(pane, line);
        }
        Some(ViewMode::Preview) => {
            let offset = match target {
                ScrollTarget::Top => 0.0,
                ScrollTarget::Bottom => ws.preview_scroll_height(pane),
            };
            ws.preview_scroll_to(pane, offset, settings.animate_scroll);
        }
        None => {
            tracing::debug!(pane = pane.0, "scroll target pane is gone; ignoring");
        }
    }
}
