//! Header dropdowns, pagination buttons and the filter footer.

use super::escape_html;
use crate::config::MosaicConfig;
use crate::constants::ADDON_NAME;
use crate::i18n::{tr, tr_args, Language};
use crate::options::{GradientField, SortOrder, ViewMode};
use std::fmt::Write as _;

/// Renders the title row with the three option dropdowns.
///
/// The gradient-field dropdown is always present so the sync script can
/// address it, but it is hidden while the categorical view is active.
pub(super) fn header_controls(
    config: &MosaicConfig,
    language: Language,
    sort: SortOrder,
    view: ViewMode,
    field: GradientField,
) -> String {
    let mut html = format!(
        "<div class=\"mosaic-header\" style=\"display:flex;align-items:center;gap:8px;\">\
         <b>{title}</b>",
        title = escape_html(ADDON_NAME),
    );

    let _ = write!(
        html,
        "<label>{label} <select id=\"mosaic-sort-select\" \
         onchange=\"onMemoryMosaicSortChange(this.value)\">{options}</select></label>",
        label = escape_html(&config.sort_label),
        options = select_options(
            SortOrder::ALL.iter().map(|order| (order.key(), order.label_key())),
            sort.key(),
            language,
        ),
    );

    let _ = write!(
        html,
        "<label>{label} <select id=\"mosaic-view-select\" \
         onchange=\"onMemoryMosaicViewModeChange(this.value)\">{options}</select></label>",
        label = escape_html(&tr(language, "view_mode")),
        options = select_options(
            ViewMode::ALL.iter().map(|mode| (mode.key(), mode.label_key())),
            view.key(),
            language,
        ),
    );

    let hidden = if view == ViewMode::Gradient { "" } else { "display:none;" };
    let _ = write!(
        html,
        "<label style=\"{hidden}\">{label} <select id=\"mosaic-field-select\" \
         onchange=\"onMemoryMosaicGradientFieldChange(this.value)\">{options}</select></label>",
        label = escape_html(&tr(language, "gradient_field")),
        options = select_options(
            GradientField::ALL.iter().map(|f| (f.key(), f.label_key())),
            field.key(),
            language,
        ),
    );

    html.push_str("</div>");
    html
}

fn select_options<'a>(
    entries: impl Iterator<Item = (&'a str, &'a str)>,
    selected_key: &str,
    language: Language,
) -> String {
    let mut html = String::new();
    for (key, label_key) in entries {
        let selected = if key == selected_key { " selected" } else { "" };
        let _ = write!(
            html,
            "<option value=\"{key}\"{selected}>{label}</option>",
            label = escape_html(&tr(language, label_key)),
        );
    }
    html
}

/// Renders the "show more" / "show all" buttons when cards remain hidden.
pub(super) fn pagination(
    shown: usize,
    total: usize,
    increment: usize,
    language: Language,
) -> String {
    if shown >= total {
        return String::new();
    }
    let next = increment.min(total - shown);
    format!(
        "<div class=\"mosaic-pagination\">\
         <button onclick=\"onMemoryMosaicLoadMore()\">{more}</button> \
         <button onclick=\"onMemoryMosaicLoadAll()\">{all}</button></div>",
        more = escape_html(&tr_args(
            language,
            "pagination_show_more",
            &[("count", &next.to_string())],
        )),
        all = escape_html(&tr_args(
            language,
            "pagination_show_all",
            &[("count", &total.to_string())],
        )),
    )
}

/// Renders the footer describing the active filter and the shown/total count.
pub(super) fn footer(
    deck_filter: Option<&str>,
    shown: usize,
    total: usize,
    language: Language,
) -> String {
    let filter_text = match deck_filter {
        Some(deck) => format!(
            "{} ({})",
            escape_html(deck),
            escape_html(&tr(language, "filter_subdecks"))
        ),
        None => escape_html(&tr(language, "all_decks")),
    };
    format!(
        "<div class=\"mosaic-footer\" style=\"font-size:small;\">\
         {filter} &mdash; {showing} {counts}</div>",
        filter = tr_args(language, "current_filter", &[("filter", &filter_text)]),
        showing = escape_html(&tr(language, "showing")),
        counts = escape_html(&tr_args(
            language,
            "cards_shown_of_total",
            &[
                ("count_shown", &shown.to_string()),
                ("count_total", &total.to_string()),
            ],
        )),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_marks_current_selection() {
        let config = MosaicConfig::default();
        let html = header_controls(
            &config,
            Language::En,
            SortOrder::IntervalDesc,
            ViewMode::Gradient,
            GradientField::Lapses,
        );
        assert!(html.contains("<option value=\"ivl_desc\" selected>"));
        assert!(html.contains("<option value=\"lapses\" selected>"));
        assert!(!html.contains("display:none"));
    }

    #[test]
    fn test_field_dropdown_hidden_in_categorical_view() {
        let config = MosaicConfig::default();
        let html = header_controls(
            &config,
            Language::En,
            SortOrder::CreationAsc,
            ViewMode::Categorical,
            GradientField::Interval,
        );
        assert!(html.contains("display:none"));
        assert!(html.contains("mosaic-field-select"));
    }

    #[test]
    fn test_pagination_appears_only_with_hidden_cards() {
        assert_eq!(pagination(200, 200, 100, Language::En), "");
        let html = pagination(200, 250, 100, Language::En);
        assert!(html.contains("Show 50 more"));
        assert!(html.contains("Show all (250)"));
    }

    #[test]
    fn test_footer_describes_filter() {
        let html = footer(Some("Japanese"), 50, 200, Language::En);
        assert!(html.contains("Current filter: Japanese (including subdecks)"));
        assert!(html.contains("50 of 200 cards"));

        let html = footer(None, 10, 10, Language::PtBr);
        assert!(html.contains("Todos os cartões da coleção"));
    }
}
