//! Shared UI primitive library for the desktop shell and built-in applications.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the
//! stable `data-ui-*` DOM contract consumed by the shell CSS layers. Shell and
//! app crates compose these primitives instead of emitting ad hoc markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Button, ButtonSize, ButtonVariant, Card, DesktopBackdrop, DesktopIconButton, DesktopIconGrid,
    DesktopWindowLayer, Dock, DockButton, DockSection, MenuBar, MenuItem, MenuSurface,
    ResizeHandle, TextField, WindowBody, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};
