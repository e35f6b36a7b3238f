//! The pure computational core of the mosaic.
//!
//! Three components, all pure functions over their explicit arguments with
//! no I/O and no shared state: the tile layout solver, the gradient color
//! mapper and the categorical classifier. They may be called from any
//! thread without synchronization.

pub mod classify;
pub mod gradient;
pub mod layout;

pub use classify::{classify, CardStatus};
pub use gradient::{gradient_color, GradientStops};
pub use layout::{solve, LayoutRequest};
