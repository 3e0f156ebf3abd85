//! UI-related modules

pub mod grid;
pub use grid::GridMetrics;

pub mod pagination;
pub use pagination::pagination_row;

pub mod skeleton;
pub use skeleton::skeleton_card;

pub mod tile;
pub use tile::tile_view;
