use crate::color::contrast_color;
use crate::host::ScrollTarget;
use crate::settings::{ButtonSize, Settings};

pub const ICON_SCROLL_TOP: &str = "arrow-up-to-line";
pub const ICON_SCROLL_BOTTOM: &str = "arrow-down-to-line";

/// One button inside the overlay, fully described. The host materialises
/// these; nothing here touches the host.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonModel {
    pub icon: &'static str,
    pub tooltip: String,
    pub action: ScrollTarget,
    /// Position inside the overlay, ascending top to bottom.
    pub order: i8,
}

/// Explicit colors, present only when the user opted out of theme colors.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayColors {
    pub background: String,
    /// Black or white, whichever stays readable on `background`.
    pub foreground: String,
}

/// Everything the host needs to mount one pane's overlay. Buttons are
/// already sorted; an empty list still mounts so the pane stays tracked.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayModel {
    pub size: ButtonSize,
    pub colors: Option<OverlayColors>,
    pub buttons: Vec<ButtonModel>,
}

/// Build the overlay description for the current settings. Pure; the same
/// settings always produce the same model.
pub fn build_overlay(settings: &Settings) -> OverlayModel {
    let mut buttons = Vec::with_capacity(2);
    if settings.show_top_button {
        buttons.push(ButtonModel {
            icon: ICON_SCROLL_TOP,
            tooltip: settings.top_tooltip.clone(),
            action: ScrollTarget::Top,
            order: sort_key(0, settings.invert_order),
        });
    }
    if settings.show_bottom_button {
        buttons.push(ButtonModel {
            icon: ICON_SCROLL_BOTTOM,
            tooltip: settings.bottom_tooltip.clone(),
            action: ScrollTarget::Bottom,
            order: sort_key(1, settings.invert_order),
        });
    }
    buttons.sort_by_key(|b| b.order);

    let colors = if settings.use_custom_color {
        Some(OverlayColors {
            foreground: contrast_color(&settings.button_color).to_owned(),
            background: settings.button_color.clone(),
        })
    } else {
        None
    };

    OverlayModel {
        size: settings.button_size,
        colors,
        buttons,
    }
}

fn sort_key(base: i8, invert: bool) -> i8 {
    if invert {
        -base
    } else {
        base
    }
}
