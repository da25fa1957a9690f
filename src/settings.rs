use serde::{Deserialize, Serialize};

/// Diameter preset for the overlay buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

impl Default for ButtonSize {
    fn default() -> Self {
        ButtonSize::Medium
    }
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 3] = [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large];

    /// Button diameter in pixels.
    pub const fn px(self) -> u32 {
        match self {
            ButtonSize::Small => 28,
            ButtonSize::Medium => 34,
            ButtonSize::Large => 42,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Offer a scroll-to-top button on each pane.
    #[serde(default = "default_show_button")]
    pub show_top_button: bool,
    /// Offer a scroll-to-bottom button on each pane.
    #[serde(default = "default_show_button")]
    pub show_bottom_button: bool,
    #[serde(default)]
    pub button_size: ButtonSize,
    /// Swap the top/bottom button order inside the overlay.
    #[serde(default)]
    pub invert_order: bool,
    /// When false the buttons take their colors from the host theme and
    /// `button_color` is ignored.
    #[serde(default)]
    pub use_custom_color: bool,
    #[serde(default = "default_button_color")]
    pub button_color: String,
    #[serde(default = "default_top_tooltip")]
    pub top_tooltip: String,
    #[serde(default = "default_bottom_tooltip")]
    pub bottom_tooltip: String,
    /// Animate preview-mode scrolling instead of jumping.
    #[serde(default = "default_animate_scroll")]
    pub animate_scroll: bool,
    /// Fade in/out transition length in milliseconds.
    #[serde(default = "default_fade_duration")]
    pub fade_duration_ms: u32,
    /// Distance from the pane's right edge in pixels.
    #[serde(default = "default_horizontal_padding")]
    pub horizontal_padding: u32,
    /// Distance from the pane's bottom edge in pixels.
    #[serde(default = "default_vertical_padding")]
    pub vertical_padding: u32,
    #[serde(default = "default_button_spacing")]
    pub button_spacing: u32,
    /// Fade the buttons out after a stretch with no pointer or scroll
    /// activity; they come back on the next interaction.
    #[serde(default)]
    pub auto_hide: bool,
    #[serde(default = "default_auto_hide_delay")]
    pub auto_hide_delay_ms: u64,
    /// When enabled the plugin initialises its logger at debug level.
    /// Defaults to `false` when the field is missing in the stored blob.
    #[serde(default)]
    pub debug_logging: bool,
}

fn default_show_button() -> bool {
    true
}

fn default_button_color() -> String {
    "#7c3aed".into()
}

fn default_top_tooltip() -> String {
    "Scroll to top".into()
}

fn default_bottom_tooltip() -> String {
    "Scroll to bottom".into()
}

fn default_animate_scroll() -> bool {
    true
}

fn default_fade_duration() -> u32 {
    150
}

fn default_horizontal_padding() -> u32 {
    16
}

fn default_vertical_padding() -> u32 {
    24
}

fn default_button_spacing() -> u32 {
    8
}

fn default_auto_hide_delay() -> u64 {
    2000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_top_button: true,
            show_bottom_button: true,
            button_size: ButtonSize::default(),
            invert_order: false,
            use_custom_color: false,
            button_color: default_button_color(),
            top_tooltip: default_top_tooltip(),
            bottom_tooltip: default_bottom_tooltip(),
            animate_scroll: true,
            fade_duration_ms: default_fade_duration(),
            horizontal_padding: default_horizontal_padding(),
            vertical_padding: default_vertical_padding(),
            button_spacing: default_button_spacing(),
            auto_hide: false,
            auto_hide_delay_ms: default_auto_hide_delay(),
            debug_logging: false,
        }
    }
}

impl Settings {
    /// Rehydrate from whatever the host persisted. `None` (first run) and
    /// unreadable blobs both land on the defaults; a partial blob keeps the
    /// fields it carries and defaults the rest.
    pub fn from_persisted(raw: Option<serde_json::Value>) -> Self {
        match raw {
            None => Self::default(),
            Some(value) => match serde_json::from_value(value) {
                Ok(settings) => settings,
                Err(err) => {
                    tracing::warn!("stored settings are unreadable; using defaults: {err}");
                    Self::default()
                }
            },
        }
    }

    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
