//! Callback slots, decoded events and handlers
//!
//! A [`Slot`] names one native callback kind. Every native invocation is
//! decoded into a [`CallbackEvent`] before it reaches a [`Handler`]; handlers
//! registered from a dynamic-language host see the same payload flattened into
//! [`CallbackArg`]s.

use crate::keys::KeyValue;
use crate::types::{Action, Modifiers, MonitorHandle, MonitorStatus, WindowHandle};
use serde::Serialize;
use std::fmt;

/// Error a handler may return; it is reported through the error slot
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Return type of every handler
pub type HandlerResult = std::result::Result<(), HandlerError>;

/// One native callback kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Error,
    Monitor,
    WindowPos,
    WindowSize,
    WindowClose,
    WindowRefresh,
    WindowFocus,
    WindowIconify,
    FramebufferSize,
    Key,
    Char,
    MouseButton,
    CursorPos,
    CursorEnter,
    Scroll,
}

impl Slot {
    /// All slots, global ones first
    pub const ALL: [Slot; 15] = [
        Slot::Error,
        Slot::Monitor,
        Slot::WindowPos,
        Slot::WindowSize,
        Slot::WindowClose,
        Slot::WindowRefresh,
        Slot::WindowFocus,
        Slot::WindowIconify,
        Slot::FramebufferSize,
        Slot::Key,
        Slot::Char,
        Slot::MouseButton,
        Slot::CursorPos,
        Slot::CursorEnter,
        Slot::Scroll,
    ];

    /// Number of arguments a handler for this slot receives
    pub fn arity(self) -> usize {
        match self {
            Slot::WindowClose | Slot::WindowRefresh => 1,
            Slot::Error
            | Slot::Monitor
            | Slot::WindowFocus
            | Slot::WindowIconify
            | Slot::CursorEnter => 2,
            Slot::WindowPos
            | Slot::WindowSize
            | Slot::FramebufferSize
            | Slot::Char
            | Slot::CursorPos
            | Slot::Scroll => 3,
            Slot::MouseButton => 4,
            Slot::Key => 5,
        }
    }

    /// True for slots that are not tied to a window
    pub fn is_global(self) -> bool {
        matches!(self, Slot::Error | Slot::Monitor)
    }

    /// Stable lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Slot::Error => "error",
            Slot::Monitor => "monitor",
            Slot::WindowPos => "window-pos",
            Slot::WindowSize => "window-size",
            Slot::WindowClose => "window-close",
            Slot::WindowRefresh => "window-refresh",
            Slot::WindowFocus => "window-focus",
            Slot::WindowIconify => "window-iconify",
            Slot::FramebufferSize => "framebuffer-size",
            Slot::Key => "key",
            Slot::Char => "char",
            Slot::MouseButton => "mouse-button",
            Slot::CursorPos => "cursor-pos",
            Slot::CursorEnter => "cursor-enter",
            Slot::Scroll => "scroll",
        }
    }

    /// Parse a slot from its name
    pub fn from_name(name: &str) -> Option<Self> {
        Slot::ALL.iter().copied().find(|slot| slot.name() == name)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scope a callback is registered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventSource {
    /// Library-wide slots (error, monitor)
    Global,
    /// A single window
    Window(WindowHandle),
}

impl EventSource {
    /// Source for a slot, as passed to the registration functions
    pub fn for_window(window: Option<WindowHandle>) -> Self {
        match window {
            Some(window) => EventSource::Window(window),
            None => EventSource::Global,
        }
    }

    /// The window, if this is a per-window source
    pub fn window(&self) -> Option<WindowHandle> {
        match self {
            EventSource::Global => None,
            EventSource::Window(window) => Some(*window),
        }
    }
}

/// A native callback invocation, decoded
#[derive(Debug, Clone, PartialEq)]
pub enum CallbackEvent {
    Error {
        code: i32,
        description: String,
    },
    Monitor {
        monitor: MonitorHandle,
        status: MonitorStatus,
    },
    WindowPos {
        window: WindowHandle,
        x: i32,
        y: i32,
    },
    WindowSize {
        window: WindowHandle,
        width: i32,
        height: i32,
    },
    WindowClose {
        window: WindowHandle,
    },
    WindowRefresh {
        window: WindowHandle,
    },
    WindowFocus {
        window: WindowHandle,
        focused: bool,
    },
    WindowIconify {
        window: WindowHandle,
        iconified: bool,
    },
    FramebufferSize {
        window: WindowHandle,
        width: i32,
        height: i32,
    },
    Key {
        window: WindowHandle,
        key: KeyValue,
        scancode: i32,
        action: Action,
        mods: Modifiers,
    },
    Char {
        window: WindowHandle,
        character: char,
        mods: Modifiers,
    },
    MouseButton {
        window: WindowHandle,
        button: i32,
        action: Action,
        mods: Modifiers,
    },
    CursorPos {
        window: WindowHandle,
        x: f64,
        y: f64,
    },
    CursorEnter {
        window: WindowHandle,
        entered: bool,
    },
    Scroll {
        window: WindowHandle,
        dx: f64,
        dy: f64,
    },
}

impl CallbackEvent {
    /// Slot this event is delivered to
    pub fn slot(&self) -> Slot {
        match self {
            CallbackEvent::Error { .. } => Slot::Error,
            CallbackEvent::Monitor { .. } => Slot::Monitor,
            CallbackEvent::WindowPos { .. } => Slot::WindowPos,
            CallbackEvent::WindowSize { .. } => Slot::WindowSize,
            CallbackEvent::WindowClose { .. } => Slot::WindowClose,
            CallbackEvent::WindowRefresh { .. } => Slot::WindowRefresh,
            CallbackEvent::WindowFocus { .. } => Slot::WindowFocus,
            CallbackEvent::WindowIconify { .. } => Slot::WindowIconify,
            CallbackEvent::FramebufferSize { .. } => Slot::FramebufferSize,
            CallbackEvent::Key { .. } => Slot::Key,
            CallbackEvent::Char { .. } => Slot::Char,
            CallbackEvent::MouseButton { .. } => Slot::MouseButton,
            CallbackEvent::CursorPos { .. } => Slot::CursorPos,
            CallbackEvent::CursorEnter { .. } => Slot::CursorEnter,
            CallbackEvent::Scroll { .. } => Slot::Scroll,
        }
    }

    /// Event source the event was fired for
    pub fn source(&self) -> EventSource {
        EventSource::for_window(self.window())
    }

    /// Window the event belongs to, `None` for global events
    pub fn window(&self) -> Option<WindowHandle> {
        match self {
            CallbackEvent::Error { .. } | CallbackEvent::Monitor { .. } => None,
            CallbackEvent::WindowPos { window, .. }
            | CallbackEvent::WindowSize { window, .. }
            | CallbackEvent::WindowClose { window }
            | CallbackEvent::WindowRefresh { window }
            | CallbackEvent::WindowFocus { window, .. }
            | CallbackEvent::WindowIconify { window, .. }
            | CallbackEvent::FramebufferSize { window, .. }
            | CallbackEvent::Key { window, .. }
            | CallbackEvent::Char { window, .. }
            | CallbackEvent::MouseButton { window, .. }
            | CallbackEvent::CursorPos { window, .. }
            | CallbackEvent::CursorEnter { window, .. }
            | CallbackEvent::Scroll { window, .. } => Some(*window),
        }
    }

    /// Handler arguments in slot order
    ///
    /// The length always equals `self.slot().arity()`. Keys below 256 and
    /// characters become one-character text; actions and modifiers stay raw
    /// integers.
    pub fn args(&self) -> Vec<CallbackArg> {
        use CallbackArg as A;
        match self {
            CallbackEvent::Error { code, description } => {
                vec![A::Int(*code), A::Text(description.clone())]
            }
            CallbackEvent::Monitor { monitor, status } => {
                vec![A::Monitor(*monitor), A::Status(*status)]
            }
            CallbackEvent::WindowPos { window, x, y } => {
                vec![A::Window(*window), A::Int(*x), A::Int(*y)]
            }
            CallbackEvent::WindowSize {
                window,
                width,
                height,
            }
            | CallbackEvent::FramebufferSize {
                window,
                width,
                height,
            } => vec![A::Window(*window), A::Int(*width), A::Int(*height)],
            CallbackEvent::WindowClose { window } | CallbackEvent::WindowRefresh { window } => {
                vec![A::Window(*window)]
            }
            CallbackEvent::WindowFocus { window, focused } => {
                vec![A::Window(*window), A::Bool(*focused)]
            }
            CallbackEvent::WindowIconify { window, iconified } => {
                vec![A::Window(*window), A::Bool(*iconified)]
            }
            CallbackEvent::Key {
                window,
                key,
                scancode,
                action,
                mods,
            } => vec![
                A::Window(*window),
                A::from(*key),
                A::Int(*scancode),
                A::Int(action.to_raw()),
                A::Int(mods.bits()),
            ],
            CallbackEvent::Char {
                window,
                character,
                mods,
            } => vec![
                A::Window(*window),
                A::Text(character.to_string()),
                A::Int(mods.bits()),
            ],
            CallbackEvent::MouseButton {
                window,
                button,
                action,
                mods,
            } => vec![
                A::Window(*window),
                A::Int(*button),
                A::Int(action.to_raw()),
                A::Int(mods.bits()),
            ],
            CallbackEvent::CursorPos { window, x, y } => {
                vec![A::Window(*window), A::Float(*x), A::Float(*y)]
            }
            CallbackEvent::CursorEnter { window, entered } => {
                vec![A::Window(*window), A::Bool(*entered)]
            }
            CallbackEvent::Scroll { window, dx, dy } => {
                vec![A::Window(*window), A::Float(*dx), A::Float(*dy)]
            }
        }
    }
}

impl fmt::Display for CallbackEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallbackEvent::Error { code, description } => {
                match crate::constants::error_name(*code) {
                    Some(name) => write!(f, "error {} (0x{:X}): {}", name, code, description),
                    None => write!(f, "error 0x{:X}: {}", code, description),
                }
            }
            CallbackEvent::Key {
                window,
                key,
                scancode,
                action,
                mods,
            } => write!(
                f,
                "key {} key={} scancode={} action={} mods={}",
                window, key, scancode, action, mods
            ),
            CallbackEvent::Char {
                window,
                character,
                mods,
            } => write!(f, "char {} char={:?} mods={}", window, character, mods),
            CallbackEvent::MouseButton {
                window,
                button,
                action,
                mods,
            } => write!(
                f,
                "mouse-button {} button={} action={} mods={}",
                window, button, action, mods
            ),
            other => {
                write!(f, "{}", other.slot())?;
                for arg in other.args() {
                    write!(f, " {}", arg)?;
                }
                Ok(())
            }
        }
    }
}

/// One handler argument for dynamically typed handlers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CallbackArg {
    Window(WindowHandle),
    Monitor(MonitorHandle),
    Status(MonitorStatus),
    Int(i32),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl From<KeyValue> for CallbackArg {
    fn from(key: KeyValue) -> Self {
        match key {
            KeyValue::Char(c) => CallbackArg::Text(c.to_string()),
            KeyValue::Code(code) => CallbackArg::Int(code),
        }
    }
}

impl fmt::Display for CallbackArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallbackArg::Window(window) => write!(f, "{}", window),
            CallbackArg::Monitor(monitor) => write!(f, "{}", monitor),
            CallbackArg::Status(status) => write!(f, "{}", status),
            CallbackArg::Int(v) => write!(f, "{}", v),
            CallbackArg::Float(v) => write!(f, "{:.3}", v),
            CallbackArg::Bool(v) => write!(f, "{}", v),
            CallbackArg::Text(v) => write!(f, "{:?}", v),
        }
    }
}

/// A caller-supplied handler with its declared arity
pub struct Handler {
    arity: usize,
    slot: Option<Slot>,
    call: Box<dyn FnMut(&CallbackEvent) -> HandlerResult>,
}

impl Handler {
    /// Handler that receives the decoded event for `slot`
    pub fn for_event<F>(slot: Slot, f: F) -> Self
    where
        F: FnMut(&CallbackEvent) -> HandlerResult + 'static,
    {
        Self {
            arity: slot.arity(),
            slot: Some(slot),
            call: Box::new(f),
        }
    }

    /// Handler taking `arity` positional arguments
    ///
    /// Registration fails unless `arity` matches the slot's arity.
    pub fn dynamic<F>(arity: usize, mut f: F) -> Self
    where
        F: FnMut(&[CallbackArg]) -> HandlerResult + 'static,
    {
        Self {
            arity,
            slot: None,
            call: Box::new(move |event| f(&event.args())),
        }
    }

    /// Declared number of arguments
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Slot the handler was built for, `None` for dynamic handlers
    pub fn slot(&self) -> Option<Slot> {
        self.slot
    }

    pub(crate) fn into_callback(self) -> Box<dyn FnMut(&CallbackEvent) -> HandlerResult> {
        self.call
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("arity", &self.arity)
            .field("slot", &self.slot)
            .finish_non_exhaustive()
    }
}
