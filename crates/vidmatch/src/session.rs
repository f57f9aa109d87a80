//! Session context for the rendering layer.
//!
//! Built once in `main` from the config and the `--guest` flag, then
//! passed by reference to the commands that render a personalized
//! screen. There is no process-global session state.

use serde::Serialize;

/// Who is looking at the catalogue.
#[derive(Debug, Clone, Serialize)]
pub struct SessionContext {
    pub registered: bool,
    pub display_name: Option<String>,
}

impl SessionContext {
    pub fn registered(display_name: Option<String>) -> Self {
        Self {
            registered: true,
            display_name,
        }
    }

    pub fn guest() -> Self {
        Self {
            registered: false,
            display_name: None,
        }
    }

    /// One-line greeting for the browse screen.
    pub fn greeting(&self) -> String {
        match (self.registered, self.display_name.as_deref()) {
            (true, Some(name)) => format!("Signed in as {}.", name),
            (true, None) => "Signed in.".to_string(),
            (false, _) => "Browsing as guest.".to_string(),
        }
    }
}
