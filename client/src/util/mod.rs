//! Browser-facing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `web-sys` glue from state and components. Each
//! one compiles to a no-op outside the `hydrate` build.

pub mod dom;
pub mod reveal;
pub mod storage;
pub mod throttle;
