use crate::overlay::OverlayModel;
use crate::settings_editor::SettingsUi;

/// Opaque handle to an open editor pane. Issued by the host; never
/// dereferenced on our side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaneId(pub u64);

/// Opaque handle to the container inside a pane that overlays attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorId(pub u64);

/// Opaque handle to a mounted overlay element. Valid until dismounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// Editing surface a pane is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Raw text with a cursor.
    Source,
    /// Rendered read-only view with pixel scrolling.
    Preview,
}

/// Where a scroll request should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Bottom,
}

/// A palette command we ask the host to expose.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub target: ScrollTarget,
}

/// Everything the plugin needs from the surrounding application. The host
/// hands an implementation to every entry point; the plugin holds no
/// reference of its own between calls.
pub trait Workspace {
    /// Panes currently open, in the host's layout order.
    fn open_panes(&self) -> Vec<PaneId>;
    /// The pane with input focus, if any pane has it.
    fn active_pane(&self) -> Option<PaneId>;
    /// `None` when the pane no longer exists.
    fn view_mode(&self, pane: PaneId) -> Option<ViewMode>;
    /// Index of the last line of the pane's document (0-based).
    fn last_line(&self, pane: PaneId) -> u32;
    fn move_cursor(&mut self, pane: PaneId, line: u32);
    fn reveal_line(&mut self, pane: PaneId, line: u32);
    /// Total scrollable height of the pane's rendered preview, in pixels.
    fn preview_scroll_height(&self, pane: PaneId) -> f64;
    fn preview_scroll_to(&mut self, pane: PaneId, offset: f64, animate: bool);
    /// Container overlays attach to. `None` while the pane's chrome is
    /// still being built; callers retry on a later pass.
    fn overlay_anchor(&self, pane: PaneId) -> Option<AnchorId>;
    fn mount_overlay(&mut self, anchor: AnchorId, overlay: &OverlayModel) -> ElementId;
    fn dismount_overlay(&mut self, element: ElementId);
    fn set_overlay_active(&mut self, element: ElementId, active: bool);
    fn set_overlay_faded(&mut self, element: ElementId, faded: bool);
    /// Replace the plugin's style rules wholesale. A second call swaps the
    /// previous sheet out.
    fn install_stylesheet(&mut self, css: &str);
    fn remove_stylesheet(&mut self);
    fn register_command(&mut self, command: &CommandSpec);
}

/// Persistence surface for the settings record. Writes are fire-and-forget;
/// a dropped write only costs the user their preferences on the next load.
pub trait SettingsStorage {
    fn load(&self) -> Option<serde_json::Value>;
    fn save(&self, value: &serde_json::Value);
}

/// Activation contract the host drives. `activate` may run before, during
/// or after the workspace finishes its initial layout; the plugin must not
/// assume panes are ready.
pub trait Lifecycle {
    fn activate(&mut self, ws: &mut dyn Workspace);
    fn deactivate(&mut self, ws: &mut dyn Workspace);
}

/// Settings-panel contract. The host calls this whenever it (re)draws the
/// plugin's settings page.
pub trait SettingsPanel {
    fn render_settings(&mut self, ws: &mut dyn Workspace, ui: &mut dyn SettingsUi);
}
