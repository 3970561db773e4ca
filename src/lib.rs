//! Umwero engine: UniFFI bindings over the Latin <-> Umwero codec in
//! `umwero-core`, for the web and app frontends that render Umwero text.

uniffi::setup_scaffolding!();

pub mod api;
mod trace_init;

pub use umwero_core::{transliterate_forward, transliterate_reverse};
