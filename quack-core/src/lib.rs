//! Browser-independent logic of the Quack image and folder pages.

pub mod boxes;
pub mod classes;
pub mod gallery;
pub mod groups;
pub mod linker;
pub mod query;
pub mod setup;
pub mod toggles;

pub use boxes::{BoxParseError, ResultBox, result_boxes};
pub use groups::{OverlayGroup, OverlayGroups, PageData, PageDataError};
pub use linker::{GROUP_TAG, HIGHLIGHT_CLASS, Linker, NEXT_TAG, Page, StatusField};
pub use setup::SetupQueue;
pub use toggles::{Display, Toggle};

/// Group key of a viewer overlay id: the last `/` segment.
pub fn short_id(overlay_id: &str) -> &str {
    overlay_id.rsplit('/').next().unwrap_or(overlay_id)
}
