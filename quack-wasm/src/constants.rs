/// Element ids and class names of the generated image and folder pages.
pub const PAGE_DATA_ID: &str = "quack-data";
/// Window property a page may set instead of embedding a data script.
pub const PAGE_DATA_GLOBAL: &str = "__QUACK_DATA";

pub const ID_BOX: &str = "idbox";
pub const ID_NEXT_BOX: &str = "idnextbox";
pub const OCR_BOX: &str = "ocrbox";

pub const WHITE_OVERLAY_CLASS: &str = "whiteoverlay";
pub const BLACK_OVERLAY_CLASS: &str = "blackoverlay";
pub const THUMBS_CLASS: &str = "thumbs";
pub const HISTOGRAMS_CLASS: &str = "histograms";
pub const THUMB_LINK_CLASS: &str = "thumblink";
pub const THUMB_IMG_CLASS: &str = "thumbimg";
pub const THUMB_OVERLAY_CLASS: &str = "thumboverlay";
pub const SORTABLE_CLASS: &str = "sortable";
pub const PASSIVE_CLASS: &str = "passive";
pub const RESULT_BOX_CLASS: &str = "searchresultbox";
