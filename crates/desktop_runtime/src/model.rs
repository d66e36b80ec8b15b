//! Session and interaction state for the window-manager runtime.

use desktop_app_contract::AppId;
use serde::{Deserialize, Serialize};

pub const MIN_WINDOW_WIDTH: i32 = 300;
pub const MIN_WINDOW_HEIGHT: i32 = 200;
pub const DEFAULT_WINDOW_WIDTH: i32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 500;

/// Cascade stride for newly opened windows, in logical pixels.
pub const CASCADE_STEP: i32 = 20;
/// Cascade offsets wrap after this many pixels so windows stay near the origin.
pub const CASCADE_SPAN: i32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn resized_by(self, dw: i32, dh: i32) -> Self {
        Self {
            w: self.w + dw,
            h: self.h + dh,
            ..self
        }
    }

    /// Pulls the rect back inside the model's floor: the origin never goes
    /// negative and the size never drops below 300x200. Out-of-range input is
    /// clamped, never rejected.
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.max(0),
            y: self.y.max(0),
            w: self.w.max(MIN_WINDOW_WIDTH),
            h: self.h.max(MIN_WINDOW_HEIGHT),
        }
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 100,
            y: 100,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: AppId,
    pub title: String,
    pub icon_id: String,
    pub rect: WindowRect,
    /// Paint-order key. Assigned only from [`SessionState::next_z`]; strictly
    /// increases on open, focus, and restore, and is never reused.
    pub z_index: u32,
    pub is_active: bool,
    pub minimized: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub next_window_id: u64,
    /// Running maximum z-index. Monotonic across the session, not rewound on
    /// close or logout.
    pub next_z: u32,
    /// Open windows in insertion order. Paint order comes from `z_index`, not
    /// from this ordering; the vector order only feeds cascade placement.
    pub windows: Vec<WindowRecord>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            next_window_id: 1,
            next_z: 0,
            windows: Vec::new(),
        }
    }
}

impl SessionState {
    pub fn active_window_id(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.is_active).map(|w| w.id)
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub fn window_for_app(&self, app_id: &AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.app_id == app_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
    /// Visual-only rect while the drag is in flight. Committed to
    /// [`SessionState`] only when the gesture ends.
    pub live_rect: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
    /// Visual-only rect while the resize is in flight.
    pub live_rect: WindowRect,
}

/// Pointer gesture state machine. Idle is both sessions `None`; at most one
/// session is live at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        self.dragging.is_none() && self.resizing.is_none()
    }

    /// Live rect override for the given window, if a gesture currently targets it.
    pub fn live_rect_for(&self, window_id: WindowId) -> Option<WindowRect> {
        if let Some(session) = self.dragging.as_ref() {
            if session.window_id == window_id {
                return Some(session.live_rect);
            }
        }
        if let Some(session) = self.resizing.as_ref() {
            if session.window_id == window_id {
                return Some(session.live_rect);
            }
        }
        None
    }
}

/// Cascade origin for the `count`-th window opened into the session.
pub fn cascade_origin(count: usize) -> (i32, i32) {
    let offset = 100 + (count as i32 * CASCADE_STEP) % CASCADE_SPAN;
    (offset, offset)
}
