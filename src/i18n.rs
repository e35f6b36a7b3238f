//! Static translation tables for the rendered UI text.
//!
//! The host resolves the user's language and hands this crate a language
//! tag; everything the grid renders (labels, tooltips, legends, buttons) is
//! looked up here. Lookups fall back to English, and then to the key
//! itself, so a missing entry degrades to something greppable rather than
//! an error.

use crate::mosaic::CardStatus;
use serde::{Deserialize, Serialize};

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// English (fallback)
    #[default]
    En,
    /// Brazilian Portuguese
    PtBr,
}

impl Language {
    /// Resolves a host language tag (e.g. "en_US", "pt_BR", "pt") to a
    /// supported language. Anything outside the Portuguese family maps to
    /// English.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag.starts_with("pt") {
            Self::PtBr
        } else {
            Self::En
        }
    }
}

/// Translation key of a card status label in the summary legend.
#[must_use]
pub const fn status_label_key(status: CardStatus) -> &'static str {
    match status {
        CardStatus::New => "card_status_new",
        CardStatus::Young => "card_status_young",
        CardStatus::Mature => "card_status_mature",
        CardStatus::Relearning => "card_status_relearning",
        CardStatus::Suspended => "card_status_suspended",
        CardStatus::Default => "card_status_default",
    }
}

/// Translates a key without parameters.
#[must_use]
pub fn tr(language: Language, key: &str) -> String {
    lookup(language, key)
        .or_else(|| lookup(Language::En, key))
        .unwrap_or(key)
        .to_string()
}

/// Translates a key, substituting `{name}` placeholders from `args`.
///
/// # Examples
///
/// ```
/// use memomosaic::i18n::{tr_args, Language};
///
/// let text = tr_args(Language::En, "tooltip_deck", &[("deck", "Japanese")]);
/// assert_eq!(text, "Deck: Japanese");
/// ```
#[must_use]
pub fn tr_args(language: Language, key: &str, args: &[(&str, &str)]) -> String {
    let mut text = tr(language, key);
    for (name, value) in args {
        text = text.replace(&format!("{{{name}}}"), value);
    }
    text
}

fn lookup(language: Language, key: &str) -> Option<&'static str> {
    match language {
        Language::En => english(key),
        Language::PtBr => portuguese(key),
    }
}

#[allow(clippy::too_many_lines)]
fn english(key: &str) -> Option<&'static str> {
    Some(match key {
        // Titles and headers
        "addon_title" => "Memory Mosaic",
        "summary_title" => "Card Summary",

        // Deck filter and footer
        "current_filter" => "Current filter: {filter}",
        "all_decks" => "All cards in collection",
        "filter_subdecks" => "including subdecks",
        "showing" => "Showing",
        "cards_shown_of_total" => "{count_shown} of {count_total} cards",

        // Tooltips
        "tooltip_card_id" => "Card ID: {cid}",
        "tooltip_deck" => "Deck: {deck}",
        "tooltip_last_review" => "Last Review: {date}",
        "tooltip_never_reviewed" => "Never reviewed",
        "tooltip_due" => "Due: {due}",
        "tooltip_queue" => "Queue: {queue}",
        "tooltip_type" => "Type: {type}",
        "tooltip_interval" => "Interval: {interval} days",
        "tooltip_factor" => "Ease: {factor}",

        // Card statuses (for the summary legend)
        "card_status_new" => "New",
        "card_status_mature" => "Mature",
        "card_status_young" => "Young/Learning",
        "card_status_relearning" => "Relearning/Lapse",
        "card_status_suspended" => "Suspended/Buried",
        "card_status_default" => "Default/Error",
        "card_status_due" => "Due Today",

        // Sorting
        "sort_by_creation" => "Creation",
        "sort_by_interval_asc" => "Interval (Asc.)",
        "sort_by_interval_desc" => "Interval (Desc.)",
        "sort_by_due_date" => "Due Date",

        // View modes and gradient fields
        "view_mode" => "View Mode",
        "view_categorical" => "Categories",
        "view_gradient" => "Gradient",
        "gradient_field" => "Gradient Field",
        "gradient_field_factor" => "Ease Factor",
        "gradient_field_ivl" => "Interval/Maturity",
        "gradient_field_lapses" => "Lapses",
        "gradient_field_due" => "Time Until Due",
        "gradient_tooltip_value" => "Value: {value}",
        "gradient_tooltip_range" => "Gradient Range: {min} to {max}",
        "gradient_normalized_value" => "Normalized value (actual: {real})",
        "legend_dynamic_scale" => "(dynamic scale)",
        "legend_higher_is_better" => "(higher is better)",
        "legend_lower_is_better" => "(lower is better)",

        // Pagination
        "pagination_show_more" => "Show {count} more",
        "pagination_show_all" => "Show all ({count})",

        // Messages
        "no_cards" => "No cards found to display.",
        "no_cards_in_initial_load" => {
            "The current filter holds {count} cards; use \"Show all\" to load them."
        }

        _ => return None,
    })
}

#[allow(clippy::too_many_lines)]
fn portuguese(key: &str) -> Option<&'static str> {
    Some(match key {
        // Títulos e cabeçalhos
        "addon_title" => "Memory Mosaic",
        "summary_title" => "Sumário de Cartões",

        // Filtro de deck e rodapé
        "current_filter" => "Filtro atual: {filter}",
        "all_decks" => "Todos os cartões da coleção",
        "filter_subdecks" => "incluindo subdecks",
        "showing" => "Exibindo",
        "cards_shown_of_total" => "{count_shown} de {count_total} cartões",

        // Tooltips
        "tooltip_card_id" => "ID do Cartão: {cid}",
        "tooltip_deck" => "Deck: {deck}",
        "tooltip_last_review" => "Última Revisão: {date}",
        "tooltip_never_reviewed" => "Nunca revisado",
        "tooltip_due" => "Vencimento: {due}",
        "tooltip_queue" => "Fila: {queue}",
        "tooltip_type" => "Tipo: {type}",
        "tooltip_interval" => "Intervalo: {interval} dias",
        "tooltip_factor" => "Facilidade: {factor}",

        // Status dos cartões (para o sumário)
        "card_status_new" => "Novos",
        "card_status_mature" => "Maduros",
        "card_status_young" => "Jovens/Aprend.",
        "card_status_relearning" => "Reaprend./Lapso",
        "card_status_suspended" => "Suspensos/Enterrados",
        "card_status_default" => "Padrão/Erro",
        "card_status_due" => "Vencido Hoje",

        // Ordenação
        "sort_by_creation" => "Criação",
        "sort_by_interval_asc" => "Intervalo (Cresc.)",
        "sort_by_interval_desc" => "Intervalo (Decresc.)",
        "sort_by_due_date" => "Vencimento",

        // Modos de visualização e campos de gradiente
        "view_mode" => "Modo de Visualização",
        "view_categorical" => "Categorias",
        "view_gradient" => "Gradiente",
        "gradient_field" => "Campo para Gradiente",
        "gradient_field_factor" => "Facilidade",
        "gradient_field_ivl" => "Intervalo/Maturidade",
        "gradient_field_lapses" => "Lapsos",
        "gradient_field_due" => "Tempo até Vencimento",
        "gradient_tooltip_value" => "Valor: {value}",
        "gradient_tooltip_range" => "Faixa do Gradiente: {min} a {max}",
        "gradient_normalized_value" => "Valor normalizado (real: {real})",
        "legend_dynamic_scale" => "(escala dinâmica)",
        "legend_higher_is_better" => "(maior é melhor)",
        "legend_lower_is_better" => "(menor é melhor)",

        // Paginação
        "pagination_show_more" => "Mostrar mais {count}",
        "pagination_show_all" => "Mostrar todos ({count})",

        // Mensagens
        "no_cards" => "Nenhum cartão encontrado para exibir.",
        "no_cards_in_initial_load" => {
            "O filtro atual contém {count} cartões; use \"Mostrar todos\" para carregá-los."
        }

        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_tag() {
        assert_eq!(Language::from_tag("en_US"), Language::En);
        assert_eq!(Language::from_tag("pt_BR"), Language::PtBr);
        assert_eq!(Language::from_tag("pt"), Language::PtBr);
        assert_eq!(Language::from_tag("de"), Language::En);
        assert_eq!(Language::from_tag(""), Language::En);
    }

    #[test]
    fn test_tr_basic_lookup() {
        assert_eq!(tr(Language::En, "addon_title"), "Memory Mosaic");
        assert_eq!(tr(Language::PtBr, "summary_title"), "Sumário de Cartões");
    }

    #[test]
    fn test_tr_unknown_key_returns_key() {
        assert_eq!(tr(Language::En, "definitely_missing"), "definitely_missing");
        assert_eq!(tr(Language::PtBr, "definitely_missing"), "definitely_missing");
    }

    #[test]
    fn test_tr_args_substitution() {
        let text = tr_args(
            Language::En,
            "cards_shown_of_total",
            &[("count_shown", "50"), ("count_total", "200")],
        );
        assert_eq!(text, "50 of 200 cards");
    }

    #[test]
    fn test_tr_args_multiple_placeholders() {
        let text = tr_args(
            Language::PtBr,
            "gradient_tooltip_range",
            &[("min", "0"), ("max", "365")],
        );
        assert_eq!(text, "Faixa do Gradiente: 0 a 365");
    }

    #[test]
    fn test_portuguese_covers_every_english_key() {
        // Spot the keys the render layer uses; both tables must answer.
        let keys = [
            "addon_title",
            "summary_title",
            "current_filter",
            "all_decks",
            "filter_subdecks",
            "showing",
            "cards_shown_of_total",
            "tooltip_card_id",
            "tooltip_deck",
            "tooltip_last_review",
            "tooltip_never_reviewed",
            "tooltip_due",
            "tooltip_queue",
            "tooltip_type",
            "tooltip_interval",
            "tooltip_factor",
            "card_status_new",
            "card_status_mature",
            "card_status_young",
            "card_status_relearning",
            "card_status_suspended",
            "card_status_default",
            "card_status_due",
            "sort_by_creation",
            "sort_by_interval_asc",
            "sort_by_interval_desc",
            "sort_by_due_date",
            "view_mode",
            "view_categorical",
            "view_gradient",
            "gradient_field",
            "gradient_field_factor",
            "gradient_field_ivl",
            "gradient_field_lapses",
            "gradient_field_due",
            "gradient_tooltip_value",
            "gradient_tooltip_range",
            "gradient_normalized_value",
            "legend_dynamic_scale",
            "legend_higher_is_better",
            "legend_lower_is_better",
            "pagination_show_more",
            "pagination_show_all",
            "no_cards",
            "no_cards_in_initial_load",
        ];
        for key in keys {
            assert!(english(key).is_some(), "missing English entry: {key}");
            assert!(portuguese(key).is_some(), "missing Portuguese entry: {key}");
        }
    }

    #[test]
    fn test_status_label_keys_resolve() {
        for status in CardStatus::ALL {
            let key = status_label_key(status);
            assert_ne!(tr(Language::En, key), key);
        }
    }
}
