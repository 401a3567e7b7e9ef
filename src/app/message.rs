// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::about;
use crate::ui::gallery::component;
use crate::ui::navbar;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(component::Message),
    Navbar(navbar::Message),
    About(about::Message),
}

/// Command-line flags collected by `main` before the event loop starts.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale override in BCP-47 form.
    pub lang: Option<String>,
    /// Photo directory or gallery manifest to load.
    pub source: Option<String>,
}
