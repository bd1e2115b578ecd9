//! Rendering of fetched articles and static help text.
//!
//! Every renderer returns a `String`; printing is left to `main`.
//!
//! # Submodules
//!
//! - [`listing`]: Numbered, human-readable article listing
//! - [`json`]: Pretty JSON dump of the articles (`--json`)
//! - [`guide`]: Text for the `list` and `help` subcommands

pub mod guide;
pub mod json;
pub mod listing;
