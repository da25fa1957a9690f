use once_cell::sync::Lazy;
use regex::Regex;

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("invalid color regex"));

/// Accepts `#RGB` and `#RRGGBB`, nothing else.
pub fn is_valid_hex(value: &str) -> bool {
    HEX_COLOR_RE.is_match(value)
}

/// Pick a foreground that stays readable on `background`.
///
/// Perceived luminance is `0.299*R + 0.587*G + 0.114*B` scaled to `0..=1`;
/// at or below 0.5 the background counts as dark and white is returned,
/// above it black. Malformed input also yields black, which keeps icons
/// legible on the light themes that ship as defaults.
pub fn contrast_color(background: &str) -> &'static str {
    const DARK: &str = "#000000";
    const LIGHT: &str = "#FFFFFF";

    let Some(hex) = expand_hex(background) else {
        return DARK;
    };
    let (Ok(r), Ok(g), Ok(b)) = (
        u8::from_str_radix(&hex[0..2], 16),
        u8::from_str_radix(&hex[2..4], 16),
        u8::from_str_radix(&hex[4..6], 16),
    ) else {
        return DARK;
    };
    let luminance = (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0;
    if luminance <= 0.5 {
        LIGHT
    } else {
        DARK
    }
}

/// Strip the leading `#` and widen shorthand to six digits by doubling
/// each nibble, so `#abc` reads as `#aabbcc`.
fn expand_hex(value: &str) -> Option<String> {
    let rest = value.strip_prefix('#')?;
    if !rest.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match rest.len() {
        3 => {
            let mut full = String::with_capacity(6);
            for c in rest.chars() {
                full.push(c);
                full.push(c);
            }
            Some(full)
        }
        6 => Some(rest.to_owned()),
        _ => None,
    }
}
