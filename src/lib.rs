pub mod color;
pub mod debounce;
pub mod host;
pub mod logging;
pub mod overlay;
pub mod plugin;
pub mod scroll;
pub mod settings;
pub mod settings_editor;
pub mod stylesheet;
pub mod tracker;

pub use host::{Lifecycle, SettingsPanel, SettingsStorage, Workspace};
pub use plugin::ScrollNav;
