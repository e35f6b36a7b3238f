//! Summary legend: categorical counts or the gradient ramp bar.

use super::escape_html;
use crate::config::{DueIndicator, FieldScale, MosaicConfig};
use crate::i18n::{status_label_key, tr, Language};
use crate::models::CardSnapshot;
use crate::mosaic::{classify, CardStatus, GradientStops};
use crate::options::{GradientField, RampOrder};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Renders the per-status color legend with counts, plus a due-dot entry.
pub(super) fn categorical_legend(
    cards: &[CardSnapshot],
    config: &MosaicConfig,
    language: Language,
    today: i32,
) -> String {
    let mut counts: BTreeMap<CardStatus, usize> = BTreeMap::new();
    for card in cards {
        *counts
            .entry(classify(card.queue, card.card_type, card.interval_days))
            .or_default() += 1;
    }

    // Entries sort by their localized label, matching the dropdown language.
    let mut entries: Vec<(String, String, usize)> = counts
        .into_iter()
        .map(|(status, count)| {
            let label = tr(language, status_label_key(status));
            let color = config.palette.status_color(status).to_hex();
            (label, color, count)
        })
        .collect();
    entries.sort();

    let mut html = format!(
        "<div class=\"mosaic-legend\"><b>{}</b>",
        escape_html(&tr(language, "summary_title"))
    );
    for (label, color, count) in entries {
        let _ = write!(
            html,
            "<span class=\"mosaic-legend-entry\">\
             <span class=\"mosaic-legend-swatch\" \
             style=\"display:inline-block;width:10px;height:10px;\
             background-color:{color};border:1px solid {border};\"></span> \
             {label}: {count}</span>",
            border = config.palette.border,
            label = escape_html(&label),
        );
    }
    if config.due_indicator.enabled {
        let due_count = cards.iter().filter(|card| card.is_due(today)).count();
        if due_count > 0 {
            let _ = write!(
                html,
                "<span class=\"mosaic-legend-entry\">\
                 <span class=\"mosaic-legend-swatch\" \
                 style=\"display:inline-block;width:10px;height:10px;\
                 border-radius:50%;background-color:{color};\"></span> \
                 {label}: {due_count}</span>",
                color = config.due_indicator.color,
                label = escape_html(&tr(language, "card_status_due")),
            );
        }
    }
    html.push_str("</div>");
    html
}

/// Renders the gradient ramp bar with min/mid/max captions and annotations.
pub(super) fn gradient_legend(
    field: GradientField,
    scale: FieldScale,
    dynamic_scale: bool,
    stops: &GradientStops,
    due_indicator: &DueIndicator,
    language: Language,
) -> String {
    // A backward ramp swaps the displayed ends so the bar always reads
    // left-to-right in value order.
    let (left, right) = match scale.order {
        RampOrder::Asc => (stops.start, stops.end),
        RampOrder::Desc => (stops.end, stops.start),
    };

    let mut annotations = vec![tr(language, field.label_key())];
    if dynamic_scale {
        annotations.push(tr(language, "legend_dynamic_scale"));
    }
    annotations.push(tr(
        language,
        match scale.order {
            RampOrder::Asc => "legend_higher_is_better",
            RampOrder::Desc => "legend_lower_is_better",
        },
    ));

    // Midpoint caption uses floor division, like the field values it sits
    // between.
    let mid_value = ((scale.min + scale.max) / 2.0).floor();
    let mut html = format!(
        "<div class=\"mosaic-legend mosaic-gradient-legend\"><b>{title}</b> \
         <span>{annotations}</span>\
         <div class=\"mosaic-gradient-bar\" \
         style=\"height:12px;max-width:300px;\
         background:linear-gradient(to right, {left}, {mid}, {right});\
         border:1px solid #888888;\"></div>\
         <div class=\"mosaic-gradient-captions\" \
         style=\"display:flex;justify-content:space-between;max-width:300px;\">\
         <span>{min}</span><span>{midpoint}</span><span>{max}</span></div>",
        title = escape_html(&tr(language, "summary_title")),
        annotations = escape_html(&annotations.join(" ")),
        mid = stops.mid,
        min = super::grid::format_value(scale.min),
        midpoint = super::grid::format_value(mid_value),
        max = super::grid::format_value(scale.max),
    );
    if due_indicator.enabled {
        let _ = write!(
            html,
            "<span class=\"mosaic-legend-entry\">\
             <span class=\"mosaic-legend-swatch\" \
             style=\"display:inline-block;width:10px;height:10px;\
             border-radius:50%;background-color:{color};\"></span> \
             {label}</span>",
            color = due_indicator.color,
            label = escape_html(&tr(language, "card_status_due")),
        );
    }
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CardQueue, CardType};

    fn card(queue: CardQueue, card_type: CardType, interval_days: i32) -> CardSnapshot {
        CardSnapshot {
            id: 1,
            queue,
            card_type,
            interval_days,
            ease_factor: 2500,
            lapses: 0,
            due: 999,
            deck_name: "Default".to_string(),
        }
    }

    #[test]
    fn test_categorical_legend_counts_by_status() {
        let config = MosaicConfig::default();
        let cards = vec![
            card(CardQueue::New, CardType::New, 0),
            card(CardQueue::New, CardType::New, 0),
            card(CardQueue::Review, CardType::Review, 50),
            card(CardQueue::Suspended, CardType::Review, 50),
        ];
        let html = categorical_legend(&cards, &config, Language::En, 0);
        assert!(html.contains("New: 2"));
        assert!(html.contains("Mature: 1"));
        assert!(html.contains("Suspended/Buried: 1"));
        assert!(!html.contains("Relearning/Lapse"));
    }

    #[test]
    fn test_categorical_legend_due_entry_only_when_present() {
        let config = MosaicConfig::default();
        let mut due_card = card(CardQueue::Review, CardType::Review, 50);
        due_card.due = 5;
        let html = categorical_legend(&[due_card], &config, Language::En, 10);
        assert!(html.contains("Due Today: 1"));

        let html = categorical_legend(
            &[card(CardQueue::Review, CardType::Review, 50)],
            &config,
            Language::En,
            10,
        );
        assert!(!html.contains("Due Today"));
    }

    #[test]
    fn test_gradient_legend_captions_and_annotations() {
        let config = MosaicConfig::default();
        let scale = FieldScale {
            min: 0.0,
            max: 365.0,
            order: RampOrder::Asc,
        };
        let html = gradient_legend(
            GradientField::Interval,
            scale,
            true,
            &config.gradient_stops,
            &config.due_indicator,
            Language::En,
        );
        assert!(html.contains("<span>0</span>"));
        assert!(html.contains("<span>182</span>")); // (0 + 365) / 2 displayed as integer
        assert!(html.contains("<span>365</span>"));
        assert!(html.contains("(dynamic scale)"));
        assert!(html.contains("(higher is better)"));
        // Ascending ramp: start stop is the left end of the bar.
        assert!(html.contains(&format!(
            "linear-gradient(to right, {}, {}, {})",
            config.gradient_stops.start, config.gradient_stops.mid, config.gradient_stops.end
        )));
    }

    #[test]
    fn test_gradient_legend_swaps_ends_for_backward_ramp() {
        let config = MosaicConfig::default();
        let scale = FieldScale {
            min: 0.0,
            max: 10.0,
            order: RampOrder::Desc,
        };
        let html = gradient_legend(
            GradientField::Lapses,
            scale,
            false,
            &config.gradient_stops,
            &config.due_indicator,
            Language::En,
        );
        assert!(html.contains("(lower is better)"));
        assert!(!html.contains("(dynamic scale)"));
        assert!(html.contains(&format!(
            "linear-gradient(to right, {}, {}, {})",
            config.gradient_stops.end, config.gradient_stops.mid, config.gradient_stops.start
        )));
    }

    #[test]
    fn test_midpoint_caption_floors() {
        let config = MosaicConfig::default();
        let scale = FieldScale {
            min: 0.0,
            max: 3.0,
            order: RampOrder::Asc,
        };
        let html = gradient_legend(
            GradientField::Lapses,
            scale,
            false,
            &config.gradient_stops,
            &config.due_indicator,
            Language::En,
        );
        // (0 + 3) / 2 floors to 1, it does not round to 2.
        assert!(html.contains("<span>1</span>"));
        assert!(!html.contains("<span>2</span>"));
    }
}
