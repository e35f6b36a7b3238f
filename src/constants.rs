//! Crate-wide constants.

/// Display name of the extension, used in headers and legend titles.
pub const ADDON_NAME: &str = "Memory Mosaic";

/// Message prefix for webview commands emitted by the rendered grid.
pub const COMMAND_PREFIX: &str = "memorymosaic_";

/// Tile border width in pixels. The grid CSS hardcodes a 1px border, and the
/// layout solver must account for it when computing tile footprints.
pub const TILE_BORDER_WIDTH_PX: u32 = 1;

/// Padding the host applies to the table cell the grid is injected into,
/// on each side.
pub const HOST_CELL_PADDING_PX: u32 = 5;

/// Estimated height of the title/controls row rendered above the grid.
pub const TITLE_AREA_HEIGHT_PX: u32 = 35;

/// Review cards with an interval of at least this many days count as mature.
pub const MATURE_INTERVAL_DAYS: i32 = 21;
