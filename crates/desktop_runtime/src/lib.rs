pub mod accounts;
pub mod apps;
pub mod components;
pub mod model;
pub mod reducer;
pub mod runtime_context;

pub use components::{DesktopShell, LoginScreen};
pub use model::*;
pub use reducer::{reduce_session, LaunchRequest, RuntimeEffect, SessionAction};
pub use runtime_context::{use_session_runtime, SessionProvider, SessionRuntimeContext};
