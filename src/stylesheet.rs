use std::fmt::Write as _;

use crate::host::Workspace;
use crate::settings::{ButtonSize, Settings};

/// Render the full rule set for the current settings. Deterministic, and
/// always the complete sheet; callers replace rather than patch.
pub fn render_stylesheet(settings: &Settings) -> String {
    let mut css = String::with_capacity(1024);
    let _ = write!(
        css,
        ".scrollnav-overlay {{\n  position: absolute;\n  right: {h}px;\n  bottom: {v}px;\n  display: flex;\n  flex-direction: column;\n  gap: {gap}px;\n  z-index: var(--layer-popover, 30);\n}}\n",
        h = settings.horizontal_padding,
        v = settings.vertical_padding,
        gap = settings.button_spacing,
    );
    css.push_str(
        ".scrollnav-overlay.scrollnav-inactive {\n  opacity: 0;\n  pointer-events: none;\n}\n",
    );
    css.push_str(".scrollnav-overlay.scrollnav-faded {\n  opacity: 0;\n}\n");
    let _ = write!(
        css,
        ".scrollnav-button {{\n  display: flex;\n  align-items: center;\n  justify-content: center;\n  border-radius: 50%;\n  cursor: pointer;\n  box-shadow: 0 2px 8px rgba(0, 0, 0, 0.15);\n  transition: opacity {fade}ms ease-in-out;\n}}\n",
        fade = settings.fade_duration_ms,
    );
    for size in ButtonSize::ALL {
        let _ = write!(
            css,
            ".scrollnav-button.{class} {{\n  width: {px}px;\n  height: {px}px;\n}}\n",
            class = size_class(size),
            px = size.px(),
        );
    }
    css
}

/// CSS modifier class the host puts on each button for its size preset.
pub const fn size_class(size: ButtonSize) -> &'static str {
    match size {
        ButtonSize::Small => "scrollnav-small",
        ButtonSize::Medium => "scrollnav-medium",
        ButtonSize::Large => "scrollnav-large",
    }
}

/// Keeps the host's copy of our stylesheet in step with the settings.
/// There is at most one installed sheet; every sync replaces it wholesale
/// so stale rules cannot linger.
#[derive(Debug, Default)]
pub struct StylesheetSync {
    installed: bool,
}

impl StylesheetSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sync(&mut self, ws: &mut dyn Workspace, settings: &Settings) {
        ws.install_stylesheet(&render_stylesheet(settings));
        self.installed = true;
    }

    pub fn remove(&mut self, ws: &mut dyn Workspace) {
        if self.installed {
            ws.remove_stylesheet();
            self.installed = false;
        }
    }
}
