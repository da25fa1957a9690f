use crate::color::is_valid_hex;
use crate::settings::{ButtonSize, Settings};

const SIZE_OPTIONS: [&str; 3] = ["Small", "Medium", "Large"];

/// Form primitives the host's settings page exposes. Immediate-mode: each
/// call draws one row with the current value and returns the value after
/// any user edit (unchanged rows echo their input back).
pub trait SettingsUi {
    fn toggle(&mut self, label: &str, desc: &str, value: bool) -> bool;
    fn select(&mut self, label: &str, desc: &str, options: &[&str], selected: usize) -> usize;
    fn number(&mut self, label: &str, desc: &str, value: f64, min: f64, max: f64) -> f64;
    fn text(&mut self, label: &str, desc: &str, value: &str) -> String;
    fn color(&mut self, label: &str, desc: &str, value: &str) -> String;
}

/// Draws the settings form and folds edits back into the record.
#[derive(Debug, Default)]
pub struct SettingsEditor {
    last_error: Option<String>,
}

impl SettingsEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validation message from the most recent render, if an edit was
    /// rejected.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Draw every row and apply the edits. Returns true when any field
    /// actually changed, so the caller knows to persist and re-render.
    pub fn render(&mut self, ui: &mut dyn SettingsUi, settings: &mut Settings) -> bool {
        let mut changed = false;

        let next = ui.toggle(
            "Show scroll-to-top button",
            "Each pane gets a button that jumps to the first line.",
            settings.show_top_button,
        );
        changed |= commit(&mut settings.show_top_button, next);

        let next = ui.toggle(
            "Show scroll-to-bottom button",
            "Each pane gets a button that jumps to the last line.",
            settings.show_bottom_button,
        );
        changed |= commit(&mut settings.show_bottom_button, next);

        let current = ButtonSize::ALL
            .iter()
            .position(|s| *s == settings.button_size)
            .unwrap_or(1);
        let picked = ui.select("Button size", "Diameter of the buttons.", &SIZE_OPTIONS, current);
        let size = ButtonSize::ALL.get(picked).copied().unwrap_or_default();
        changed |= commit(&mut settings.button_size, size);

        let next = ui.toggle(
            "Invert button order",
            "Show the bottom button above the top button.",
            settings.invert_order,
        );
        changed |= commit(&mut settings.invert_order, next);

        let next = ui.toggle(
            "Custom button color",
            "Override the host theme's button colors.",
            settings.use_custom_color,
        );
        changed |= commit(&mut settings.use_custom_color, next);

        if settings.use_custom_color {
            let next = ui.color(
                "Button color",
                "Background color; the icon color is derived for contrast.",
                &settings.button_color,
            );
            if next != settings.button_color {
                if is_valid_hex(&next) {
                    settings.button_color = next;
                    self.last_error = None;
                    changed = true;
                } else {
                    tracing::warn!("rejected button color '{next}': not a hex color");
                    self.last_error = Some(format!("'{next}' is not a valid hex color"));
                }
            }
        }

        let next = ui.text(
            "Top button tooltip",
            "Hover text for the scroll-to-top button.",
            &settings.top_tooltip,
        );
        changed |= commit(&mut settings.top_tooltip, next);

        let next = ui.text(
            "Bottom button tooltip",
            "Hover text for the scroll-to-bottom button.",
            &settings.bottom_tooltip,
        );
        changed |= commit(&mut settings.bottom_tooltip, next);

        let next = ui.toggle(
            "Animate preview scrolling",
            "Glide to the target in reading view instead of jumping.",
            settings.animate_scroll,
        );
        changed |= commit(&mut settings.animate_scroll, next);

        let next = ui.number(
            "Fade duration",
            "Show/hide transition length in milliseconds.",
            f64::from(settings.fade_duration_ms),
            0.0,
            1000.0,
        );
        changed |= commit(&mut settings.fade_duration_ms, clamp_u32(next, 0, 1000));

        let next = ui.number(
            "Horizontal padding",
            "Distance from the pane's right edge in pixels.",
            f64::from(settings.horizontal_padding),
            0.0,
            128.0,
        );
        changed |= commit(&mut settings.horizontal_padding, clamp_u32(next, 0, 128));

        let next = ui.number(
            "Vertical padding",
            "Distance from the pane's bottom edge in pixels.",
            f64::from(settings.vertical_padding),
            0.0,
            128.0,
        );
        changed |= commit(&mut settings.vertical_padding, clamp_u32(next, 0, 128));

        let next = ui.number(
            "Button spacing",
            "Gap between the two buttons in pixels.",
            f64::from(settings.button_spacing),
            0.0,
            64.0,
        );
        changed |= commit(&mut settings.button_spacing, clamp_u32(next, 0, 64));

        let next = ui.toggle(
            "Auto-hide buttons",
            "Fade the buttons out while the pane is idle.",
            settings.auto_hide,
        );
        changed |= commit(&mut settings.auto_hide, next);

        if settings.auto_hide {
            let next = ui.number(
                "Auto-hide delay",
                "Idle time before the buttons fade, in milliseconds.",
                settings.auto_hide_delay_ms as f64,
                250.0,
                10_000.0,
            );
            let delay = next.round().clamp(250.0, 10_000.0) as u64;
            changed |= commit(&mut settings.auto_hide_delay_ms, delay);
        }

        let next = ui.toggle(
            "Debug logging",
            "Log at debug level; useful when reporting problems.",
            settings.debug_logging,
        );
        changed |= commit(&mut settings.debug_logging, next);

        changed
    }
}

fn commit<T: PartialEq>(slot: &mut T, next: T) -> bool {
    if *slot == next {
        false
    } else {
        *slot = next;
        true
    }
}

fn clamp_u32(value: f64, min: u32, max: u32) -> u32 {
    value.round().clamp(f64::from(min), f64::from(max)) as u32
}
