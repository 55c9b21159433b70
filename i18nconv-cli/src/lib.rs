//! CLI library for testing purposes

pub mod args;
pub mod logging;

pub use args::{Args, USAGE};
pub use i18nconv::Config;
