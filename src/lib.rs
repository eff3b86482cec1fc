//! pseudopy — translates English-like pseudocode into Python source.

pub mod config;
pub mod translate;

pub use translate::{translate, Translation, TranslateError, Translator};
