//! Kinyarwanda Latin <-> Umwero script codec.
//!
//! Pure functions over a process-wide, read-only mapping registry. See
//! [`translit::transliterate_forward`] and [`translit::transliterate_reverse`].

pub mod normalize;
pub mod numeral;
pub mod registry;
pub mod settings;
pub mod translit;
pub mod unicode;

pub use translit::{transliterate_forward, transliterate_reverse};
