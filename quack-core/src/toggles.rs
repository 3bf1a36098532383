//! What each overlay checkbox does to the page, independent of the DOM.

/// Viewer overlay ids of the full-page blown masks.
pub const MASK_OVERLAY_IDS: [&str; 2] = ["black", "white"];

pub fn is_mask_overlay(id: &str) -> bool {
    MASK_OVERLAY_IDS.contains(&id)
}

/// CSS `display` value a toggle assigns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

impl Display {
    pub fn shown(checked: bool) -> Self {
        if checked { Display::Block } else { Display::None }
    }

    pub fn as_css(self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::None => "none",
        }
    }
}

/// Opacity handed to the viewer for a checkbox state.
pub fn overlay_opacity(checked: bool) -> f64 {
    if checked { 100.0 } else { 0.0 }
}

/// Display of the `(thumbs, histograms)` panels; only one of them is visible.
pub fn panel_display(show_histograms: bool) -> (Display, Display) {
    if show_histograms {
        (Display::None, Display::Block)
    } else {
        (Display::Block, Display::None)
    }
}

/// Background image to assign to a blown-mask element, if it still needs one.
pub fn mask_background(current: &str, shown: Display, url: Option<&str>) -> Option<String> {
    if !current.is_empty() || shown != Display::Block {
        return None;
    }
    url.map(|u| format!("url('{}')", u))
}

/// Overlay checkboxes on image and folder pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Grid,
    Blown,
    TextBlock,
    BlownThumbs,
    Histograms,
}

impl Toggle {
    pub const ALL: [Toggle; 5] = [
        Toggle::Grid,
        Toggle::Blown,
        Toggle::TextBlock,
        Toggle::BlownThumbs,
        Toggle::Histograms,
    ];

    /// Id of the controlling checkbox.
    pub fn checkbox_id(self) -> &'static str {
        match self {
            Toggle::Grid => "toggle_grid",
            Toggle::Blown => "toggle_blown",
            Toggle::TextBlock => "toggle_textblock",
            Toggle::BlownThumbs => "toggle_blown_thumbs",
            Toggle::Histograms => "toggle_histograms",
        }
    }

    /// Element classes whose `display` follows the checkbox directly.
    pub fn display_classes(self) -> &'static [&'static str] {
        match self {
            Toggle::Grid => &["gridline"],
            Toggle::Blown => &["whiteoverlay", "blackoverlay"],
            Toggle::BlownThumbs => &["thumboverlay"],
            Toggle::TextBlock | Toggle::Histograms => &[],
        }
    }

    /// Whether the toggle applies to `overlay_id` among the viewer overlays.
    pub fn affects_viewer_overlay(self, overlay_id: &str) -> bool {
        match self {
            Toggle::Blown => is_mask_overlay(overlay_id),
            Toggle::TextBlock => !is_mask_overlay(overlay_id),
            _ => false,
        }
    }
}
