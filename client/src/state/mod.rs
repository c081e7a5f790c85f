//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Each module is a plain Rust model with no browser dependency so it can be
//! unit tested natively. `view` composes `theme` and `scroll` into the one
//! struct the page chrome renders from; `typing` drives the hero banner.

pub mod scroll;
pub mod theme;
pub mod typing;
pub mod view;
