//! Host configuration document handling.
//!
//! The host application persists the extension's settings as a flat JSON
//! document and hands it to this crate as a string. This module parses that
//! document into a typed [`MosaicConfig`], filling defaults for missing
//! keys and validating everything that must not reach the render path in a
//! malformed state (hex colors in particular — the color core treats
//! malformed stops as a precondition violation, so they are rejected here).
//!
//! Invalid *choice* values (sort order, view mode, gradient field) follow
//! the host's convention of degrading gracefully: they fall back to the
//! documented default with a warning instead of failing the load.

use crate::models::RgbColor;
use crate::mosaic::{CardStatus, GradientStops};
use crate::options::{GradientField, RampOrder, SortOrder, ViewMode};
use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;

/// The six categorical tile colors plus the tile border color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Color for new cards
    pub new: RgbColor,
    /// Color for young and learning cards
    pub young: RgbColor,
    /// Color for mature cards
    pub mature: RgbColor,
    /// Color for relearning (lapsed) cards
    pub relearning: RgbColor,
    /// Color for suspended and buried cards
    pub suspended: RgbColor,
    /// Fallback color
    pub default_bg: RgbColor,
    /// Tile border color
    pub border: RgbColor,
}

impl Palette {
    /// Color assigned to a classification status.
    #[must_use]
    pub const fn status_color(&self, status: CardStatus) -> RgbColor {
        match status {
            CardStatus::New => self.new,
            CardStatus::Young => self.young,
            CardStatus::Mature => self.mature,
            CardStatus::Relearning => self.relearning,
            CardStatus::Suspended => self.suspended,
            CardStatus::Default => self.default_bg,
        }
    }
}

/// Tile and grid sizing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSizing {
    /// Largest (and preferred) tile edge in pixels
    pub default_size_px: u32,
    /// Smallest acceptable tile edge in pixels
    pub min_size_px: u32,
    /// Gap between adjacent tiles in pixels
    pub gap_px: u32,
    /// Maximum grid width in pixels
    pub grid_max_width_px: u32,
    /// Maximum grid height in pixels
    pub grid_max_height_px: u32,
    /// Padding inside the grid container in pixels
    pub grid_padding_px: u32,
}

/// Normalization range and ramp direction for one gradient field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldScale {
    /// Value mapped to the start of the ramp
    pub min: f64,
    /// Value mapped to the end of the ramp
    pub max: f64,
    /// Ramp direction; `Desc` inverts the ramp
    pub order: RampOrder,
}

/// Due indicator settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DueIndicator {
    /// Whether the indicator is drawn at all
    pub enabled: bool,
    /// Indicator dot color
    pub color: RgbColor,
    /// Dot diameter as a fraction of the tile edge
    pub size_ratio: f64,
}

impl DueIndicator {
    /// Dot diameter in pixels for the given tile size, at least 1.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn size_px(&self, tile_size_px: u32) -> u32 {
        ((f64::from(tile_size_px) * self.size_ratio).floor() as u32).max(1)
    }
}

/// Typed, validated extension configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct MosaicConfig {
    /// Categorical colors
    pub palette: Palette,
    /// Tile and grid dimensions
    pub tiles: TileSizing,
    /// Due indicator settings
    pub due_indicator: DueIndicator,
    /// Gradient ramp stops
    pub gradient_stops: GradientStops,
    /// Per-field gradient scales
    factor_scale: FieldScale,
    ivl_scale: FieldScale,
    lapses_scale: FieldScale,
    due_scale: FieldScale,
    /// Whether the interval scale is recomputed from the rendered cards
    pub normalize_interval: bool,
    /// Deck filter applied on the deck-list screen, if any
    pub default_deck_filter: Option<String>,
    /// Configured default sort order
    pub default_sort_order: SortOrder,
    /// Configured default view mode
    pub default_view_mode: ViewMode,
    /// Configured default gradient field
    pub default_gradient_field: GradientField,
    /// Cards rendered before the first "show more"
    pub initial_load_count: usize,
    /// Cards added per "show more"
    pub incremental_load_count: usize,
    /// Caption next to the sort dropdown
    pub sort_label: String,
}

/// Raw document shape; every key optional so partial documents load.
///
/// Key names match the document the host persists, which is why they carry
/// the `memorymosaic_` prefixes rather than idiomatic Rust names.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    color_new: Option<String>,
    color_young_learn: Option<String>,
    color_mature: Option<String>,
    color_relearning_lapse: Option<String>,
    color_suspended_buried: Option<String>,
    color_default_bg: Option<String>,
    tile_border_color: Option<String>,

    tile_default_size_px: Option<u32>,
    tile_min_size_px: Option<u32>,
    tile_default_gap_px: Option<u32>,
    grid_max_width_px: Option<u32>,
    grid_max_height_px: Option<u32>,
    grid_padding_px: Option<u32>,

    show_due_indicator: Option<bool>,
    due_indicator_color: Option<String>,
    due_indicator_size_ratio: Option<f64>,

    gradient_color_start: Option<String>,
    gradient_color_mid: Option<String>,
    gradient_color_end: Option<String>,

    gradient_factor_min: Option<f64>,
    gradient_factor_max: Option<f64>,
    gradient_factor_order: Option<String>,
    gradient_ivl_min: Option<f64>,
    gradient_ivl_max: Option<f64>,
    gradient_ivl_order: Option<String>,
    gradient_ivl_normalize: Option<bool>,
    gradient_lapses_min: Option<f64>,
    gradient_lapses_max: Option<f64>,
    gradient_lapses_order: Option<String>,
    gradient_due_min: Option<f64>,
    gradient_due_max: Option<f64>,
    gradient_due_order: Option<String>,

    memorymosaic_default_deck_filter: Option<String>,
    memorymosaic_default_sort_order: Option<String>,
    memorymosaic_default_view_mode: Option<String>,
    memorymosaic_default_gradient_field: Option<String>,

    initial_card_load_count: Option<usize>,
    incremental_card_load_count: Option<usize>,

    label_sort_order_group: Option<String>,
}

impl MosaicConfig {
    /// Parses and validates the host's JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error when the document is not valid JSON or a color
    /// value is not a parseable hex string. Invalid choice values (sort
    /// order, view mode, gradient field) are not errors; they fall back to
    /// defaults with a logged warning.
    pub fn from_json(document: &str) -> Result<Self> {
        let raw: RawConfig =
            serde_json::from_str(document).context("Failed to parse mosaic configuration JSON")?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self> {
        let palette = Palette {
            new: parse_color(raw.color_new.as_deref(), "color_new", "#2196f3")?,
            young: parse_color(raw.color_young_learn.as_deref(), "color_young_learn", "#8bc34a")?,
            mature: parse_color(raw.color_mature.as_deref(), "color_mature", "#1b5e20")?,
            relearning: parse_color(
                raw.color_relearning_lapse.as_deref(),
                "color_relearning_lapse",
                "#ff9800",
            )?,
            suspended: parse_color(
                raw.color_suspended_buried.as_deref(),
                "color_suspended_buried",
                "#9e9e9e",
            )?,
            default_bg: parse_color(raw.color_default_bg.as_deref(), "color_default_bg", "#e0e0e0")?,
            border: parse_color(raw.tile_border_color.as_deref(), "tile_border_color", "#888888")?,
        };

        let default_size_px = raw.tile_default_size_px.unwrap_or(14);
        let mut min_size_px = raw.tile_min_size_px.unwrap_or(5);
        if min_size_px > default_size_px {
            warn!(
                min_size_px,
                default_size_px, "tile_min_size_px exceeds tile_default_size_px; clamping"
            );
            min_size_px = default_size_px;
        }

        let tiles = TileSizing {
            default_size_px,
            min_size_px,
            gap_px: raw.tile_default_gap_px.unwrap_or(2),
            grid_max_width_px: raw.grid_max_width_px.unwrap_or(900),
            grid_max_height_px: raw.grid_max_height_px.unwrap_or(600),
            grid_padding_px: raw.grid_padding_px.unwrap_or(10),
        };

        let due_indicator = DueIndicator {
            enabled: raw.show_due_indicator.unwrap_or(true),
            color: parse_color(raw.due_indicator_color.as_deref(), "due_indicator_color", "#ff0000")?,
            size_ratio: raw.due_indicator_size_ratio.unwrap_or(0.25),
        };

        let gradient_stops = GradientStops {
            start: parse_color(raw.gradient_color_start.as_deref(), "gradient_color_start", "#ffeb3b")?,
            mid: parse_color(raw.gradient_color_mid.as_deref(), "gradient_color_mid", "#4caf50")?,
            end: parse_color(raw.gradient_color_end.as_deref(), "gradient_color_end", "#2196f3")?,
        };

        let default_deck_filter = raw
            .memorymosaic_default_deck_filter
            .filter(|name| !name.trim().is_empty());

        Ok(Self {
            palette,
            tiles,
            due_indicator,
            gradient_stops,
            factor_scale: FieldScale {
                min: raw.gradient_factor_min.unwrap_or(1300.0),
                max: raw.gradient_factor_max.unwrap_or(2900.0),
                order: parse_order(raw.gradient_factor_order.as_deref(), RampOrder::Asc),
            },
            ivl_scale: FieldScale {
                min: raw.gradient_ivl_min.unwrap_or(0.0),
                max: raw.gradient_ivl_max.unwrap_or(365.0),
                order: parse_order(raw.gradient_ivl_order.as_deref(), RampOrder::Asc),
            },
            lapses_scale: FieldScale {
                min: raw.gradient_lapses_min.unwrap_or(0.0),
                max: raw.gradient_lapses_max.unwrap_or(10.0),
                // For lapses, fewer is better, so the ramp runs backward
                // unless the document says otherwise.
                order: parse_order(raw.gradient_lapses_order.as_deref(), RampOrder::Desc),
            },
            due_scale: FieldScale {
                min: raw.gradient_due_min.unwrap_or(0.0),
                max: raw.gradient_due_max.unwrap_or(30.0),
                order: parse_order(raw.gradient_due_order.as_deref(), RampOrder::Asc),
            },
            normalize_interval: raw.gradient_ivl_normalize.unwrap_or(true),
            default_deck_filter,
            default_sort_order: parse_choice(
                raw.memorymosaic_default_sort_order.as_deref(),
                "memorymosaic_default_sort_order",
                SortOrder::from_key,
            ),
            default_view_mode: parse_choice(
                raw.memorymosaic_default_view_mode.as_deref(),
                "memorymosaic_default_view_mode",
                ViewMode::from_key,
            ),
            default_gradient_field: parse_choice(
                raw.memorymosaic_default_gradient_field.as_deref(),
                "memorymosaic_default_gradient_field",
                GradientField::from_key,
            ),
            initial_load_count: raw.initial_card_load_count.unwrap_or(1000),
            incremental_load_count: raw.incremental_card_load_count.unwrap_or(1000).max(1),
            sort_label: raw
                .label_sort_order_group
                .unwrap_or_else(|| "Sort:".to_string()),
        })
    }

    /// Gradient scale configured for a field.
    #[must_use]
    pub const fn scale(&self, field: GradientField) -> FieldScale {
        match field {
            GradientField::Factor => self.factor_scale,
            GradientField::Interval => self.ivl_scale,
            GradientField::Lapses => self.lapses_scale,
            GradientField::Due => self.due_scale,
        }
    }
}

impl Default for MosaicConfig {
    /// The configuration an empty document resolves to.
    fn default() -> Self {
        Self::from_raw(RawConfig::default()).expect("built-in defaults are valid")
    }
}

fn parse_color(value: Option<&str>, key: &str, fallback: &str) -> Result<RgbColor> {
    match value {
        Some(hex) => {
            RgbColor::from_hex(hex).with_context(|| format!("Invalid color for '{key}'"))
        }
        None => RgbColor::from_hex(fallback).with_context(|| format!("Bad fallback for '{key}'")),
    }
}

fn parse_order(value: Option<&str>, fallback: RampOrder) -> RampOrder {
    match value {
        Some("desc") => RampOrder::Desc,
        Some("asc") => RampOrder::Asc,
        Some(other) => {
            warn!(value = other, "Unrecognized gradient order; using default");
            fallback
        }
        None => fallback,
    }
}

fn parse_choice<T: Default>(value: Option<&str>, key: &str, parse: fn(&str) -> Option<T>) -> T {
    match value {
        None => T::default(),
        Some(raw) => parse(raw).unwrap_or_else(|| {
            warn!(key, value = raw, "Invalid configured value; using default");
            T::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_loads_defaults() {
        let config = MosaicConfig::from_json("{}").unwrap();
        assert_eq!(config, MosaicConfig::default());
        assert_eq!(config.default_sort_order, SortOrder::CreationAsc);
        assert_eq!(config.default_view_mode, ViewMode::Categorical);
        assert_eq!(config.default_gradient_field, GradientField::Interval);
        assert!(config.normalize_interval);
        assert_eq!(config.default_deck_filter, None);
    }

    #[test]
    fn test_document_overrides_defaults() {
        let config = MosaicConfig::from_json(
            r##"{
                "color_new": "#112233",
                "tile_default_size_px": 20,
                "tile_min_size_px": 8,
                "memorymosaic_default_sort_order": "ivl_desc",
                "memorymosaic_default_view_mode": "gradient",
                "memorymosaic_default_gradient_field": "lapses",
                "memorymosaic_default_deck_filter": "Japanese",
                "gradient_due_max": 60
            }"##,
        )
        .unwrap();

        assert_eq!(config.palette.new, RgbColor::new(0x11, 0x22, 0x33));
        assert_eq!(config.tiles.default_size_px, 20);
        assert_eq!(config.tiles.min_size_px, 8);
        assert_eq!(config.default_sort_order, SortOrder::IntervalDesc);
        assert_eq!(config.default_view_mode, ViewMode::Gradient);
        assert_eq!(config.default_gradient_field, GradientField::Lapses);
        assert_eq!(config.default_deck_filter.as_deref(), Some("Japanese"));
        assert!((config.scale(GradientField::Due).max - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_choices_fall_back_with_defaults() {
        let config = MosaicConfig::from_json(
            r#"{
                "memorymosaic_default_sort_order": "random",
                "memorymosaic_default_view_mode": "3d",
                "memorymosaic_default_gradient_field": "reps"
            }"#,
        )
        .unwrap();
        assert_eq!(config.default_sort_order, SortOrder::CreationAsc);
        assert_eq!(config.default_view_mode, ViewMode::Categorical);
        assert_eq!(config.default_gradient_field, GradientField::Interval);
    }

    #[test]
    fn test_malformed_color_is_a_load_error() {
        let err = MosaicConfig::from_json(r#"{"color_new": "notacolor"}"#).unwrap_err();
        assert!(err.to_string().contains("color_new"));
    }

    #[test]
    fn test_malformed_json_is_a_load_error() {
        assert!(MosaicConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_min_size_clamped_to_default_size() {
        let config = MosaicConfig::from_json(
            r#"{"tile_default_size_px": 10, "tile_min_size_px": 50}"#,
        )
        .unwrap();
        assert_eq!(config.tiles.min_size_px, 10);
    }

    #[test]
    fn test_blank_deck_filter_means_none() {
        let config =
            MosaicConfig::from_json(r#"{"memorymosaic_default_deck_filter": "  "}"#).unwrap();
        assert_eq!(config.default_deck_filter, None);
    }

    #[test]
    fn test_lapses_ramp_defaults_backward() {
        let config = MosaicConfig::default();
        assert_eq!(config.scale(GradientField::Lapses).order, RampOrder::Desc);
        assert_eq!(config.scale(GradientField::Factor).order, RampOrder::Asc);
    }

    #[test]
    fn test_status_colors_cover_all_statuses() {
        let palette = MosaicConfig::default().palette;
        for status in CardStatus::ALL {
            // Each status resolves to some color without panicking.
            let _ = palette.status_color(status);
        }
    }

    #[test]
    fn test_due_indicator_size_has_floor() {
        let indicator = DueIndicator {
            enabled: true,
            color: RgbColor::new(255, 0, 0),
            size_ratio: 0.25,
        };
        assert_eq!(indicator.size_px(2), 1); // 0.5 floors to 0, clamped to 1
        assert_eq!(indicator.size_px(16), 4);
    }
}
