//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components read page chrome state from the `RwSignal<SiteView>` context
//! and change it only through `ViewController` operations.

pub mod cards;
pub mod nav_bar;
pub mod typed_banner;
