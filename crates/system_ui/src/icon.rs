//! Centralized inline-SVG icon API shared by the shell and built-in apps.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Named icons available to shell and app surfaces.
pub enum IconName {
    /// Launcher orb / brand mark.
    Launcher,
    /// Magnifier for search fields.
    Search,
    /// Close (dismiss) control.
    Dismiss,
    /// Minimize window control.
    WindowMinimize,
    /// Maximize window control.
    WindowMaximize,
    /// Sign-out action.
    SignOut,
    /// Generic user avatar.
    User,
    /// Notes app.
    Notes,
    /// Browser app.
    Browser,
    /// File manager app.
    Files,
    /// Settings app.
    Settings,
    /// Calendar app.
    Calendar,
    /// Terminal app.
    Terminal,
    /// Calculator app.
    Calculator,
    /// Photos app.
    Photos,
    /// Mail app.
    Mail,
    /// Weather app.
    Weather,
}

impl IconName {
    /// Returns the stable token used by the `data-ui-icon` DOM contract.
    pub fn token(self) -> &'static str {
        match self {
            Self::Launcher => "launcher",
            Self::Search => "search",
            Self::Dismiss => "dismiss",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::SignOut => "sign-out",
            Self::User => "user",
            Self::Notes => "notes",
            Self::Browser => "browser",
            Self::Files => "files",
            Self::Settings => "settings",
            Self::Calendar => "calendar",
            Self::Terminal => "terminal",
            Self::Calculator => "calculator",
            Self::Photos => "photos",
            Self::Mail => "mail",
            Self::Weather => "weather",
        }
    }

    /// Resolves a token produced by [`IconName::token`] back to its icon.
    pub fn from_token(token: &str) -> Option<Self> {
        [
            Self::Launcher,
            Self::Search,
            Self::Dismiss,
            Self::WindowMinimize,
            Self::WindowMaximize,
            Self::SignOut,
            Self::User,
            Self::Notes,
            Self::Browser,
            Self::Files,
            Self::Settings,
            Self::Calendar,
            Self::Terminal,
            Self::Calculator,
            Self::Photos,
            Self::Mail,
            Self::Weather,
        ]
        .into_iter()
        .find(|icon| icon.token() == token)
    }

    fn path_data(self) -> &'static str {
        match self {
            Self::Launcher => {
                "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm0 4a6 6 0 1 1 0 12 6 6 0 0 1 0-12zm0 4a2 2 0 1 0 0 4 2 2 0 0 0 0-4z"
            }
            Self::Search => {
                "M10 2a8 8 0 1 0 4.9 14.3l5.4 5.4 1.4-1.4-5.4-5.4A8 8 0 0 0 10 2zm0 2a6 6 0 1 1 0 12 6 6 0 0 1 0-12z"
            }
            Self::Dismiss => "M5.3 3.9 3.9 5.3 10.6 12l-6.7 6.7 1.4 1.4 6.7-6.7 6.7 6.7 1.4-1.4-6.7-6.7 6.7-6.7-1.4-1.4L12 10.6z",
            Self::WindowMinimize => "M4 13h16v2H4z",
            Self::WindowMaximize => "M4 4h16v16H4zm2 2v12h12V6z",
            Self::SignOut => {
                "M10 3H5a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h5v-2H5V5h5zm6.4 4.6L15 9l2 2H9v2h8l-2 2 1.4 1.4L20.8 12z"
            }
            Self::User => {
                "M12 3a4 4 0 1 1 0 8 4 4 0 0 1 0-8zm0 10c4.4 0 8 2.2 8 5v3H4v-3c0-2.8 3.6-5 8-5z"
            }
            Self::Notes => "M5 3h14a1 1 0 0 1 1 1v16a1 1 0 0 1-1 1H5a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1zm2 4v2h10V7zm0 4v2h10v-2zm0 4v2h7v-2z",
            Self::Browser => {
                "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm7.9 9h-3a15 15 0 0 0-1.6-6.2A8 8 0 0 1 19.9 11zM12 4.2c1 1.4 1.8 3.9 2 6.8h-4c.2-2.9 1-5.4 2-6.8zM8.7 4.8A15 15 0 0 0 7.1 11h-3a8 8 0 0 1 4.6-6.2zM4.1 13h3a15 15 0 0 0 1.6 6.2A8 8 0 0 1 4.1 13zM12 19.8c-1-1.4-1.8-3.9-2-6.8h4c-.2 2.9-1 5.4-2 6.8zm3.3-.6a15 15 0 0 0 1.6-6.2h3a8 8 0 0 1-4.6 6.2z"
            }
            Self::Files => "M3 5a2 2 0 0 1 2-2h5l2 3h7a2 2 0 0 1 2 2v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
            Self::Settings => {
                "M12 8a4 4 0 1 0 0 8 4 4 0 0 0 0-8zm9 4-.1 1.6 2 1.6-2 3.4-2.4-1a8 8 0 0 1-2.7 1.6L15.4 22H8.6l-.4-2.8a8 8 0 0 1-2.7-1.6l-2.4 1-2-3.4 2-1.6L3 12l.1-1.6-2-1.6 2-3.4 2.4 1a8 8 0 0 1 2.7-1.6L8.6 2h6.8l.4 2.8a8 8 0 0 1 2.7 1.6l2.4-1 2 3.4-2 1.6z"
            }
            Self::Calendar => "M7 2v2H5a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6a2 2 0 0 0-2-2h-2V2h-2v2H9V2zM5 9h14v11H5z",
            Self::Terminal => "M3 4h18a1 1 0 0 1 1 1v14a1 1 0 0 1-1 1H3a1 1 0 0 1-1-1V5a1 1 0 0 1 1-1zm3 4 4 4-4 4 1.4 1.4L12.8 12 7.4 6.6zM13 16h6v2h-6z",
            Self::Calculator => "M6 2h12a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2zm1 3v3h10V5zm0 6v2h2v-2zm4 0v2h2v-2zm4 0v2h2v-2zm-8 4v2h2v-2zm4 0v2h2v-2zm4 0v4h2v-4z",
            Self::Photos => "M4 5h16a1 1 0 0 1 1 1v12a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1V6a1 1 0 0 1 1-1zm4 3a2 2 0 1 0 0 4 2 2 0 0 0 0-4zm-3 9h14l-5-6-3.5 4L9 13z",
            Self::Mail => "M3 5h18a1 1 0 0 1 1 1v12a1 1 0 0 1-1 1H3a1 1 0 0 1-1-1V6a1 1 0 0 1 1-1zm1.5 2.5L12 13l7.5-5.5",
            Self::Weather => {
                "M12 3v3m6.4-.4-2.1 2.1M21 12h-3M6 12H3m3.7-5.3 2.1 2.1M12 8a4 4 0 0 1 4 4h1a3 3 0 0 1 0 6H8a4 4 0 0 1-.8-7.9A4 4 0 0 1 12 8z"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared icon sizing tokens.
pub enum IconSize {
    /// 12 px glyph.
    Xs,
    /// 16 px glyph.
    Sm,
    /// 20 px glyph.
    #[default]
    Md,
    /// 32 px glyph.
    Lg,
}

impl IconSize {
    fn px(self) -> u32 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 32,
        }
    }
}

#[component]
/// Renders a named icon as inline SVG.
pub fn Icon(icon: IconName, #[prop(optional)] size: IconSize) -> impl IntoView {
    let px = size.px();
    view! {
        <svg
            class="ui-icon"
            data-ui-icon=icon.token()
            width=px
            height=px
            viewBox="0 0 24 24"
            fill="currentColor"
            aria-hidden="true"
            focusable="false"
        >
            <path d=icon.path_data() />
        </svg>
    }
}
