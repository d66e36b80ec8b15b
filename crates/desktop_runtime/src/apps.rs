//! Built-in application registry.
//!
//! The shell iterates this table for the launcher, desktop icons, and dock.
//! Calculator is a real app crate; the remaining entries mount lightweight
//! placeholder content through the same opaque [`AppContent`] contract, so the
//! runtime treats all of them identically.

use desktop_app_contract::{AppContent, AppDescriptor, AppId};
use leptos::*;

const APP_REGISTRY: [AppDescriptor; 10] = [
    AppDescriptor {
        id: "notes",
        name: "Notes",
        icon_id: "notes",
        content: AppContent::new(mount_notes),
    },
    AppDescriptor {
        id: "browser",
        name: "Browser",
        icon_id: "browser",
        content: AppContent::new(mount_browser),
    },
    AppDescriptor {
        id: "files",
        name: "Files",
        icon_id: "files",
        content: AppContent::new(mount_files),
    },
    AppDescriptor {
        id: "calculator",
        name: "Calculator",
        icon_id: "calculator",
        content: desktop_app_calculator::CONTENT,
    },
    AppDescriptor {
        id: "terminal",
        name: "Terminal",
        icon_id: "terminal",
        content: AppContent::new(mount_terminal),
    },
    AppDescriptor {
        id: "calendar",
        name: "Calendar",
        icon_id: "calendar",
        content: AppContent::new(mount_calendar),
    },
    AppDescriptor {
        id: "photos",
        name: "Photos",
        icon_id: "photos",
        content: AppContent::new(mount_photos),
    },
    AppDescriptor {
        id: "mail",
        name: "Mail",
        icon_id: "mail",
        content: AppContent::new(mount_mail),
    },
    AppDescriptor {
        id: "weather",
        name: "Weather",
        icon_id: "weather",
        content: AppContent::new(mount_weather),
    },
    AppDescriptor {
        id: "settings",
        name: "Settings",
        icon_id: "settings",
        content: AppContent::new(mount_settings),
    },
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn descriptor_for(app_id: &AppId) -> Option<&'static AppDescriptor> {
    app_registry()
        .iter()
        .find(|entry| entry.id == app_id.as_str())
}

fn mount_notes() -> View {
    placeholder("Notes", "Jot something down. Notes are not saved yet.")
}

fn mount_browser() -> View {
    placeholder("Browser", "Browsing is simulated; no pages are fetched.")
}

fn mount_files() -> View {
    placeholder("Files", "Your files would live here.")
}

fn mount_terminal() -> View {
    placeholder("Terminal", "No shell is attached to this terminal.")
}

fn mount_calendar() -> View {
    placeholder("Calendar", "Nothing scheduled.")
}

fn mount_photos() -> View {
    placeholder("Photos", "Your library is empty.")
}

fn mount_mail() -> View {
    placeholder("Mail", "Inbox zero, permanently.")
}

fn mount_weather() -> View {
    placeholder("Weather", "72\u{b0} and sunny, as always.")
}

fn mount_settings() -> View {
    placeholder("Settings", "No preferences to change yet.")
}

fn placeholder(name: &'static str, blurb: &'static str) -> View {
    view! {
        <div class="app-placeholder" data-app-placeholder=name>
            <p class="app-placeholder-name">{name}</p>
            <p class="app-placeholder-blurb">{blurb}</p>
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_ids_are_unique() {
        let mut ids: Vec<&str> = app_registry().iter().map(|entry| entry.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), app_registry().len());
    }

    #[test]
    fn descriptor_lookup_uses_the_app_id() {
        let id = AppId::from("calculator");
        let descriptor = descriptor_for(&id).expect("calculator registered");
        assert_eq!(descriptor.name, "Calculator");
        assert!(descriptor_for(&AppId::from("missing")).is_none());
    }
}
