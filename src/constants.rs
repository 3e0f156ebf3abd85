//! Application-wide constants

/// Number of skeleton placeholder cards shown while a page is loading
pub const SKELETON_TILES: usize = 4;

/// Seconds before a flipped tile automatically returns to its front face
pub const FLIP_BACK_SECS: u64 = 5;

/// Seconds before an open toast dismisses itself
pub const TOAST_TIMEOUT_SECS: u64 = 6;

/// Characters of description shown on a tile's front face
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Maximum width for the responsive card grid
pub const MAX_GRID_WIDTH: f32 = 1600.0;

/// Maximum number of entries (pages and gaps) in the pagination row
pub const PAGINATION_WINDOW: usize = 7;

/// Frames of the slide transition played after a page change
pub const SLIDE_FRAMES: usize = 12;
