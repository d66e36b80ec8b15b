//! Shared contract types between the desktop window manager runtime and hosted apps.
//!
//! The window manager treats every app as opaque window content: it keys
//! deduplication on [`AppId`] and mounts [`AppContent`] into the window body
//! without inspecting what the content renders.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::View;
use serde::{Deserialize, Serialize};

/// Stable string identifier for a registered application.
///
/// Used as the single-instance deduplication key by the session store: opening
/// an app whose id already owns a window focuses that window instead of
/// creating a second one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppId(String);

impl AppId {
    /// Creates an app id from its raw string form.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AppId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// Mount function supplied by an app crate. The runtime calls it once per
/// window body render and never looks inside the returned view.
pub type AppMountFn = fn() -> View;

/// Opaque mount capability wrapping an [`AppMountFn`].
#[derive(Debug, Clone, Copy)]
pub struct AppContent {
    mount_fn: AppMountFn,
}

impl AppContent {
    /// Creates window content from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the content into a window body.
    pub fn mount(self) -> View {
        (self.mount_fn)()
    }
}

/// Registration metadata for one launchable application.
#[derive(Debug, Clone, Copy)]
pub struct AppDescriptor {
    /// Dedup key and stable identity.
    pub id: &'static str,
    /// Launcher, titlebar, and dock label.
    pub name: &'static str,
    /// Icon token resolved by the shell's icon set.
    pub icon_id: &'static str,
    /// Opaque window content.
    pub content: AppContent,
}

impl AppDescriptor {
    /// Returns the typed app id for this descriptor.
    pub fn app_id(&self) -> AppId {
        AppId::new(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_id_round_trips_through_string_form() {
        let id = AppId::new("calculator");
        assert_eq!(id.as_str(), "calculator");
        assert_eq!(id.to_string(), "calculator");
        assert_eq!(AppId::from("calculator"), id);
    }
}
