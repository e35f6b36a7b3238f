//! Webview command handling.
//!
//! The rendered grid emits `memorymosaic_*` messages through the host's
//! webview channel; the host forwards every message it receives to
//! [`handle_message`]. Messages outside the family, and family messages
//! with an unknown subcommand, are declined so other handlers can claim
//! them; a known subcommand with a malformed payload is consumed without
//! effect, so a stray payload never leaks into another handler.

use crate::config::MosaicConfig;
use crate::constants::COMMAND_PREFIX;
use crate::models::CardId;
use crate::options::{GradientField, SortOrder, ViewMode};
use crate::session::{HostPhase, SessionState};

/// A parsed grid command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Open a card in the host's card browser
    OpenCard(CardId),
    /// Override the session sort order
    SetSortOrder(SortOrder),
    /// Override the session view mode
    SetViewMode(ViewMode),
    /// Override the session gradient field
    SetGradientField(GradientField),
    /// Extend pagination by the configured increment
    LoadMore,
    /// Show the whole filtered list
    LoadAll,
}

impl Command {
    /// Parses a webview message into a command, if it is a well-formed
    /// member of the `memorymosaic_*` family.
    #[must_use]
    pub fn parse(message: &str) -> Option<Self> {
        let rest = message.strip_prefix(COMMAND_PREFIX)?;

        if let Some(payload) = rest.strip_prefix("open_card:") {
            return payload.trim().parse().ok().map(Self::OpenCard);
        }
        if let Some(payload) = rest.strip_prefix("sort_change:") {
            return SortOrder::from_key(payload).map(Self::SetSortOrder);
        }
        if let Some(payload) = rest.strip_prefix("view_mode_change:") {
            return ViewMode::from_key(payload).map(Self::SetViewMode);
        }
        if let Some(payload) = rest.strip_prefix("gradient_field_change:") {
            return GradientField::from_key(payload).map(Self::SetGradientField);
        }

        match rest {
            "load_more" => Some(Self::LoadMore),
            "load_all" => Some(Self::LoadAll),
            _ => None,
        }
    }

    /// Whether a stripped message names one of our subcommands, well-formed
    /// or not.
    fn is_known_subcommand(rest: &str) -> bool {
        rest == "load_more"
            || rest == "load_all"
            || ["open_card:", "sort_change:", "view_mode_change:", "gradient_field_change:"]
                .iter()
                .any(|prefix| rest.starts_with(prefix))
    }
}

/// What the integration layer should do after a command was applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Re-render the visible screen
    pub refresh: bool,
    /// Open this card in the host's card browser
    pub open_card: Option<CardId>,
}

/// Handles one webview message.
///
/// Returns `None` when the message is not one of our subcommands and should
/// be passed on to other handlers. Returns `Some` when the message was
/// consumed; the outcome says whether the screen needs a refresh and
/// whether a card browser should be opened. While the host is syncing or
/// closing, commands are consumed but ignored.
pub fn handle_message(
    message: &str,
    config: &MosaicConfig,
    session: &mut SessionState,
    phase: &HostPhase,
) -> Option<CommandOutcome> {
    let rest = message.strip_prefix(COMMAND_PREFIX)?;
    if !Command::is_known_subcommand(rest) {
        return None;
    }
    if !phase.is_usable() {
        return Some(CommandOutcome::default());
    }

    // A known subcommand with a malformed payload is consumed without
    // effect.
    let Some(command) = Command::parse(message) else {
        return Some(CommandOutcome::default());
    };

    let mut outcome = CommandOutcome::default();
    match command {
        Command::OpenCard(id) => outcome.open_card = Some(id),
        Command::SetSortOrder(order) => {
            session.set_sort(order);
            outcome.refresh = true;
        }
        Command::SetViewMode(mode) => {
            session.set_view(mode);
            outcome.refresh = true;
        }
        Command::SetGradientField(field) => {
            session.set_field(field);
            outcome.refresh = true;
        }
        Command::LoadMore => {
            session.extend_limit(config.incremental_load_count, config.initial_load_count);
            outcome.refresh = true;
        }
        Command::LoadAll => {
            session.show_all();
            outcome.refresh = true;
        }
    }
    Some(outcome)
}
