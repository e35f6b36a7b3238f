//! Tile grid rendering: per-card color dispatch, tooltips and the due dot.

use super::escape_html;
use crate::config::{FieldScale, MosaicConfig};
use crate::constants::TILE_BORDER_WIDTH_PX;
use crate::i18n::{tr, tr_args, Language};
use crate::models::{CardId, CardQueue, CardSnapshot, CardType, RgbColor};
use crate::mosaic::{classify, gradient_color};
use crate::options::{GradientField, ViewMode};
use chrono::{DateTime, Local};
use std::collections::HashMap;
use std::fmt::Write as _;

/// Everything a tile needs besides the card itself.
pub(super) struct TileInputs<'a> {
    pub config: &'a MosaicConfig,
    pub language: Language,
    pub view: ViewMode,
    pub field: GradientField,
    /// Effective scale for the active gradient field, after any dynamic
    /// recomputation from the rendered cards.
    pub scale: FieldScale,
    pub today: i32,
    pub tile_size_px: u32,
}

/// Renders the grid container with one tile per card.
pub(super) fn render_grid(
    cards: &[CardSnapshot],
    last_reviews: &HashMap<CardId, i64>,
    inputs: &TileInputs<'_>,
) -> String {
    let tiles = inputs.config.tiles;
    let mut html = format!(
        "<div class=\"mosaic-grid\" style=\"display:flex;flex-wrap:wrap;\
         gap:{gap}px;align-content:flex-start;max-width:{w}px;max-height:{h}px;\
         overflow-y:auto;padding:{pad}px;\">",
        gap = tiles.gap_px,
        w = tiles.grid_max_width_px,
        h = tiles.grid_max_height_px,
        pad = tiles.grid_padding_px,
    );
    for card in cards {
        html.push_str(&render_tile(card, last_reviews.get(&card.id).copied(), inputs));
    }
    html.push_str("</div>");
    html
}

fn render_tile(
    card: &CardSnapshot,
    last_review_ms: Option<i64>,
    inputs: &TileInputs<'_>,
) -> String {
    let background = tile_color(card, inputs);
    let tooltip = tooltip_text(card, last_review_ms, inputs);

    let indicator = if inputs.config.due_indicator.enabled && card.is_due(inputs.today) {
        let dot = inputs.config.due_indicator.size_px(inputs.tile_size_px);
        format!(
            "<div class=\"mosaic-due-dot\" style=\"position:absolute;top:50%;left:50%;\
             transform:translate(-50%,-50%);\
             width:{dot}px;height:{dot}px;border-radius:50%;background-color:{color};\"></div>",
            color = inputs.config.due_indicator.color,
        )
    } else {
        String::new()
    };

    format!(
        "<div class=\"mosaic-tile\" title=\"{tooltip}\" \
         onclick=\"onMemoryMosaicTileClick({id})\" \
         style=\"position:relative;width:{size}px;height:{size}px;\
         background-color:{background};\
         border:{border_w}px solid {border};cursor:pointer;\">{indicator}</div>",
        id = card.id,
        size = inputs.tile_size_px,
        border_w = TILE_BORDER_WIDTH_PX,
        border = inputs.config.palette.border,
    )
}

/// Background color of one tile under the active view mode.
pub(super) fn tile_color(card: &CardSnapshot, inputs: &TileInputs<'_>) -> RgbColor {
    match inputs.view {
        ViewMode::Categorical => inputs
            .config
            .palette
            .status_color(classify(card.queue, card.card_type, card.interval_days)),
        ViewMode::Gradient => gradient_tile_color(card, inputs),
    }
}

fn gradient_tile_color(card: &CardSnapshot, inputs: &TileInputs<'_>) -> RgbColor {
    // Parked and new cards keep their categorical colors even in gradient
    // mode; their metric values carry no signal.
    if card.queue.is_suspended_or_buried() {
        return inputs.config.palette.suspended;
    }
    if card.card_type == CardType::New {
        return inputs.config.palette.new;
    }

    // A due position is only meaningful for review-queue cards; the rest sit
    // at the neutral middle of the ramp.
    if inputs.field == GradientField::Due && card.queue != CardQueue::Review {
        return inputs.config.gradient_stops.mid;
    }

    match gradient_value(card, inputs.field, inputs.today) {
        Some(value) => gradient_color(
            value,
            inputs.scale.min,
            inputs.scale.max,
            &inputs.config.gradient_stops,
            inputs.scale.order.inverts(),
        ),
        None => inputs.config.palette.default_bg,
    }
}

/// The card's value for a gradient field, when it has a meaningful one.
pub(super) fn gradient_value(
    card: &CardSnapshot,
    field: GradientField,
    today: i32,
) -> Option<f64> {
    match field {
        // An ease factor of zero means the card never graduated.
        GradientField::Factor => {
            (card.ease_factor > 0).then(|| f64::from(card.ease_factor))
        }
        GradientField::Interval => Some(f64::from(card.interval_days)),
        GradientField::Lapses => Some(f64::from(card.lapses)),
        GradientField::Due => {
            (card.queue == CardQueue::Review).then(|| f64::from(card.days_until_due(today)))
        }
    }
}

fn tooltip_text(
    card: &CardSnapshot,
    last_review_ms: Option<i64>,
    inputs: &TileInputs<'_>,
) -> String {
    let lang = inputs.language;
    let mut lines = vec![
        tr_args(lang, "tooltip_card_id", &[("cid", &card.id.to_string())]),
        tr_args(lang, "tooltip_deck", &[("deck", &card.deck_name)]),
    ];

    lines.push(match last_review_ms.and_then(format_review_time) {
        Some(date) => tr_args(lang, "tooltip_last_review", &[("date", &date)]),
        None => tr(lang, "tooltip_never_reviewed"),
    });

    lines.push(tr_args(lang, "tooltip_due", &[("due", &card.due.to_string())]));
    lines.push(tr_args(lang, "tooltip_queue", &[("queue", &card.queue.code().to_string())]));
    lines.push(tr_args(lang, "tooltip_type", &[("type", &card.card_type.code().to_string())]));
    lines.push(tr_args(
        lang,
        "tooltip_interval",
        &[("interval", &card.interval_days.to_string())],
    ));
    lines.push(tr_args(
        lang,
        "tooltip_factor",
        &[("factor", &card.ease_factor.to_string())],
    ));

    if inputs.view == ViewMode::Gradient {
        if let Some(value) = gradient_value(card, inputs.field, inputs.today) {
            lines.push(tr_args(
                lang,
                "gradient_tooltip_value",
                &[("value", &format_value(value))],
            ));
            lines.push(tr_args(
                lang,
                "gradient_tooltip_range",
                &[
                    ("min", &format_value(inputs.scale.min)),
                    ("max", &format_value(inputs.scale.max)),
                ],
            ));
            if value < inputs.scale.min || value > inputs.scale.max {
                lines.push(tr_args(
                    lang,
                    "gradient_normalized_value",
                    &[("real", &format_value(value))],
                ));
            }
        }
    }

    let mut tooltip = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            tooltip.push_str("&#10;");
        }
        let _ = write!(tooltip, "{}", escape_html(line));
    }
    tooltip
}

fn format_review_time(epoch_ms: i64) -> Option<String> {
    DateTime::from_timestamp_millis(epoch_ms)
        .map(|utc| utc.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
}

/// Field values are integral in practice; render them without a fraction.
pub(super) fn format_value(value: f64) -> String {
    format!("{value:.0}")
}
