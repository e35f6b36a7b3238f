//! Memory Mosaic: a host-embeddable engine that renders a flashcard
//! collection as a grid of color-coded tiles.
//!
//! The host application owns the card database, scheduler, configuration
//! persistence and the webview; this crate owns everything in between. It
//! consumes a JSON configuration document and read-only card snapshots
//! (through the [`host::CardSource`] trait) and produces the HTML fragment
//! for the host's deck screens, plus the handling of the webview messages
//! that fragment emits.
//!
//! The interesting parts are pure functions: the tile layout solver
//! ([`mosaic::solve`]), the gradient color mapper ([`mosaic::gradient_color`])
//! and the categorical classifier ([`mosaic::classify`]). The render layer
//! composes them into a fragment; [`session::SessionState`] and
//! [`session::HostPhase`] carry the per-session view state and lifecycle
//! gating that the integration layer threads through each call.

pub mod commands;
pub mod config;
pub mod constants;
pub mod host;
pub mod i18n;
pub mod models;
pub mod mosaic;
pub mod options;
pub mod render;
pub mod session;
