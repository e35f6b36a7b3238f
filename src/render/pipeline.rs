//! Top-level render pass: from a card query to the final HTML fragment.

use super::controls::{footer, header_controls, pagination};
use super::grid::{render_grid, TileInputs};
use super::legend::{categorical_legend, gradient_legend};
use super::script::command_script;
use super::escape_html;
use crate::config::{FieldScale, MosaicConfig};
use crate::constants::{
    ADDON_NAME, HOST_CELL_PADDING_PX, TILE_BORDER_WIDTH_PX, TITLE_AREA_HEIGHT_PX,
};
use crate::host::CardSource;
use crate::i18n::{tr, tr_args, Language};
use crate::models::{CardSnapshot, CardType};
use crate::mosaic::{solve, LayoutRequest};
use crate::options::{GradientField, ViewMode};
use crate::session::{FilterFingerprint, HostPhase, SessionState};
use anyhow::Result;
use tracing::debug;

/// Host screen the fragment is injected into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// The deck list; shows the configured default filter or the whole
    /// collection.
    DeckBrowser,
    /// A single deck's overview; shows that deck and its subdecks.
    DeckOverview {
        /// Full deck name as the host reports it
        deck_name: String,
    },
}

impl Screen {
    /// Deck name constraining this screen, if any.
    fn deck_filter<'a>(&'a self, config: &'a MosaicConfig) -> Option<&'a str> {
        match self {
            Self::DeckBrowser => config.default_deck_filter.as_deref(),
            Self::DeckOverview { deck_name } => Some(deck_name),
        }
    }

    /// Search query in the host's syntax; empty means the whole collection.
    fn query(&self, config: &MosaicConfig) -> String {
        self.deck_filter(config)
            .map(deck_query)
            .unwrap_or_default()
    }
}

fn deck_query(deck_name: &str) -> String {
    // Quotes in deck names must be escaped for the host's search parser.
    format!("deck:\"{}\"", deck_name.replace('"', "\\\""))
}

/// Renders the mosaic fragment for one host screen.
///
/// Pagination state in `session` is reconciled with the current filter as a
/// side effect. While the host is syncing or closing an empty fragment is
/// returned so the caller never touches the collection.
///
/// # Errors
///
/// Fails when the card search itself fails; everything past that point
/// degrades instead of erroring.
pub fn render_mosaic(
    source: &dyn CardSource,
    config: &MosaicConfig,
    session: &mut SessionState,
    phase: &HostPhase,
    screen: &Screen,
    language: Language,
) -> Result<String> {
    if !phase.is_usable() {
        debug!("collection not usable; rendering nothing");
        return Ok(String::new());
    }

    let query = screen.query(config);
    let sort = session.effective_sort(config);
    let view = session.effective_view(config);
    let field = session.effective_field(config);

    let ids = source.find_cards(&query, sort)?;
    let total = ids.len();

    let limit = session.limit_for(
        FilterFingerprint {
            query: query.clone(),
            sort,
            view,
            field,
        },
        config.initial_load_count,
    );
    let shown = limit.take_from(total);

    let deck_filter = screen.deck_filter(config);
    if total == 0 {
        return Ok(empty_fragment(
            &tr(language, "no_cards"),
            deck_filter,
            0,
            language,
        ));
    }
    if shown == 0 {
        // A zero initial load count leaves everything behind the buttons.
        let message = tr_args(
            language,
            "no_cards_in_initial_load",
            &[("count", &total.to_string())],
        );
        let mut fragment = empty_fragment(&message, deck_filter, total, language);
        fragment.push_str(&pagination(0, total, config.incremental_load_count, language));
        fragment.push_str(&command_script(sort, view, field));
        return Ok(fragment);
    }

    let cards: Vec<CardSnapshot> = ids[..shown]
        .iter()
        .filter_map(|&id| source.card(id))
        .collect();
    if cards.is_empty() {
        return Ok(empty_fragment(
            &tr(language, "no_cards"),
            deck_filter,
            total,
            language,
        ));
    }
    let card_ids: Vec<_> = cards.iter().map(|card| card.id).collect();
    let last_reviews = source.last_review_times(&card_ids);
    let today = source.today();

    let (scale, dynamic_scale) = effective_scale(config, view, field, &cards);
    let tile_size_px = solve_tile_size(config, cards.len());
    debug!(
        total,
        displayed = cards.len(),
        tile_size_px,
        ?view,
        "rendering mosaic"
    );

    let inputs = TileInputs {
        config,
        language,
        view,
        field,
        scale,
        today,
        tile_size_px,
    };

    let legend = match view {
        ViewMode::Categorical => categorical_legend(&cards, config, language, today),
        ViewMode::Gradient => gradient_legend(
            field,
            scale,
            dynamic_scale,
            &config.gradient_stops,
            &config.due_indicator,
            language,
        ),
    };

    let mut fragment = String::from("<div class=\"mosaic-spacer\" style=\"height:8px;\"></div>");
    fragment.push_str(&header_controls(config, language, sort, view, field));
    fragment.push_str(&legend);
    fragment.push_str(&render_grid(&cards, &last_reviews, &inputs));
    fragment.push_str(&pagination(shown, total, config.incremental_load_count, language));
    fragment.push_str(&footer(deck_filter, cards.len(), total, language));
    fragment.push_str(&command_script(sort, view, field));
    Ok(fragment)
}

fn empty_fragment(
    message: &str,
    deck_filter: Option<&str>,
    total: usize,
    language: Language,
) -> String {
    format!(
        "<div class=\"mosaic-spacer\" style=\"height:8px;\"></div>\
         <div class=\"mosaic-header\"><b>{title}</b></div>\
         <div class=\"mosaic-empty\">{message}</div>{footer}",
        title = escape_html(ADDON_NAME),
        message = escape_html(message),
        footer = footer(deck_filter, 0, total, language),
    )
}

/// The scale the gradient actually renders with. Interval normalization
/// replaces the configured range with the range of the rendered cards.
///
/// Only cards with a meaningful interval take part: new and parked cards
/// keep their categorical colors in gradient mode, so their zero intervals
/// must not drag the range down. When no rendered card applies, the
/// configured range stays in force.
fn effective_scale(
    config: &MosaicConfig,
    view: ViewMode,
    field: GradientField,
    cards: &[CardSnapshot],
) -> (FieldScale, bool) {
    let configured = config.scale(field);
    if view != ViewMode::Gradient || field != GradientField::Interval || !config.normalize_interval
    {
        return (configured, false);
    }

    let mut min = i32::MAX;
    let mut max = i32::MIN;
    for card in cards.iter().filter(|card| {
        card.card_type != CardType::New && !card.queue.is_suspended_or_buried()
    }) {
        min = min.min(card.interval_days);
        max = max.max(card.interval_days);
    }
    if min > max {
        return (configured, false);
    }
    (
        FieldScale {
            min: f64::from(min),
            max: f64::from(max),
            order: configured.order,
        },
        true,
    )
}

/// Solves the tile size against the box left after the host's chrome.
fn solve_tile_size(config: &MosaicConfig, item_count: usize) -> u32 {
    let tiles = config.tiles;
    let horizontal_chrome = 2 * (HOST_CELL_PADDING_PX + tiles.grid_padding_px);
    let vertical_chrome = horizontal_chrome + TITLE_AREA_HEIGHT_PX;
    solve(&LayoutRequest {
        item_count,
        box_width_px: tiles.grid_max_width_px.saturating_sub(horizontal_chrome),
        box_height_px: tiles.grid_max_height_px.saturating_sub(vertical_chrome),
        min_tile_px: tiles.min_size_px,
        max_tile_px: tiles.default_size_px,
        gap_px: tiles.gap_px,
        border_px: TILE_BORDER_WIDTH_PX,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_query_quotes_and_escapes() {
        assert_eq!(deck_query("Japanese"), "deck:\"Japanese\"");
        assert_eq!(deck_query("My \"deck\""), "deck:\"My \\\"deck\\\"\"");
    }

    #[test]
    fn test_screen_query_resolution() {
        let mut config = MosaicConfig::default();
        assert_eq!(Screen::DeckBrowser.query(&config), "");

        config.default_deck_filter = Some("Core".to_string());
        assert_eq!(Screen::DeckBrowser.query(&config), "deck:\"Core\"");

        let overview = Screen::DeckOverview {
            deck_name: "Japanese::N5".to_string(),
        };
        // The overview deck wins over the configured default filter.
        assert_eq!(overview.query(&config), "deck:\"Japanese::N5\"");
    }

    fn snapshot(id: i64, queue: crate::models::CardQueue, card_type: CardType, interval_days: i32) -> CardSnapshot {
        CardSnapshot {
            id,
            queue,
            card_type,
            interval_days,
            ease_factor: 2500,
            lapses: 0,
            due: 0,
            deck_name: String::new(),
        }
    }

    #[test]
    fn test_effective_scale_normalizes_interval_range() {
        use crate::models::CardQueue;

        let config = MosaicConfig::default();
        let cards: Vec<CardSnapshot> = [5, 80, 30]
            .into_iter()
            .map(|ivl| snapshot(i64::from(ivl), CardQueue::Review, CardType::Review, ivl))
            .collect();

        let (scale, dynamic) =
            effective_scale(&config, ViewMode::Gradient, GradientField::Interval, &cards);
        assert!(dynamic);
        assert!((scale.min - 5.0).abs() < f64::EPSILON);
        assert!((scale.max - 80.0).abs() < f64::EPSILON);

        let (scale, dynamic) =
            effective_scale(&config, ViewMode::Gradient, GradientField::Lapses, &cards);
        assert!(!dynamic);
        assert!((scale.max - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_normalization_ignores_new_and_parked_cards() {
        use crate::models::CardQueue;

        let config = MosaicConfig::default();
        let cards = vec![
            snapshot(1, CardQueue::Review, CardType::Review, 100),
            snapshot(2, CardQueue::Review, CardType::Review, 200),
            // Zero intervals with no signal; they render categorically.
            snapshot(3, CardQueue::New, CardType::New, 0),
            snapshot(4, CardQueue::Suspended, CardType::Review, 0),
        ];

        let (scale, dynamic) =
            effective_scale(&config, ViewMode::Gradient, GradientField::Interval, &cards);
        assert!(dynamic);
        assert!((scale.min - 100.0).abs() < f64::EPSILON);
        assert!((scale.max - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_normalization_falls_back_when_no_card_applies() {
        use crate::models::CardQueue;

        let config = MosaicConfig::default();
        let cards = vec![
            snapshot(1, CardQueue::New, CardType::New, 0),
            snapshot(2, CardQueue::New, CardType::New, 0),
        ];

        let (scale, dynamic) =
            effective_scale(&config, ViewMode::Gradient, GradientField::Interval, &cards);
        assert!(!dynamic);
        assert!((scale.min - 0.0).abs() < f64::EPSILON);
        assert!((scale.max - 365.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tile_size_stays_within_configured_bounds() {
        let config = MosaicConfig::default();
        for count in [1, 100, 10_000, 1_000_000] {
            let size = solve_tile_size(&config, count);
            assert!(size >= config.tiles.min_size_px);
            assert!(size <= config.tiles.default_size_px);
        }
    }
}
