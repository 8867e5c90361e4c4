//! Core types for the GLFW binding
//!
//! Handles are non-owning: the native library owns windows and monitors, and
//! the binding only compares and passes them through. Everything decoded from
//! a native callback lives here as well.

use crate::callback::Slot;
use crate::constants;
use crate::ffi::{GLFWgammaramp, GLFWmonitor, GLFWvidmode, GLFWwindow};
use bitflags::bitflags;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::os::raw::c_int;
use std::ptr::NonNull;

/// Result type for binding operations
pub type Result<T> = std::result::Result<T, BindingError>;

/// Errors reported by the binding
#[derive(Debug, thiserror::Error)]
pub enum BindingError {
    #[error("No GLFW shared library found (tried: {})", .tried.join(", "))]
    LibraryNotFound { tried: Vec<String> },

    #[error("Failed to load GLFW library {path}: {source}")]
    LibraryLoad {
        path: String,
        #[source]
        source: libloading::Error,
    },

    #[error("GLFW library is missing symbol {name}: {source}")]
    MissingSymbol {
        name: &'static str,
        #[source]
        source: libloading::Error,
    },

    #[error("Couldn't initialize GLFW")]
    InitFailed,

    #[error("GLFW is not initialized")]
    NotInitialized,

    #[error("Couldn't open GLFW window")]
    WindowCreationFailed,

    #[error("Incompatible {slot} callback: a handler taking {expected} arguments is required, got {got}")]
    ArityMismatch {
        slot: Slot,
        expected: usize,
        got: usize,
    },

    #[error("A handler built for the {handler} callback can't be registered as {slot}")]
    SlotMismatch { slot: Slot, handler: Slot },

    #[error("The {0} callback is per-window and needs a window")]
    MissingSource(Slot),

    #[error("The {0} callback is global and takes no window")]
    UnexpectedSource(Slot),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl BindingError {
    /// True for errors caused by how the binding was called
    ///
    /// These are always raised before any native call is made.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            BindingError::ArityMismatch { .. }
                | BindingError::SlotMismatch { .. }
                | BindingError::MissingSource(_)
                | BindingError::UnexpectedSource(_)
                | BindingError::InvalidArgument(_)
                | BindingError::NotInitialized
        )
    }
}

/// Non-owning handle to a native window
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(NonNull<GLFWwindow>);

impl WindowHandle {
    /// Wrap a raw window pointer, `None` if it is null
    pub fn from_ptr(ptr: *mut GLFWwindow) -> Option<Self> {
        NonNull::new(ptr).map(WindowHandle)
    }

    /// Get the raw window pointer
    pub fn as_ptr(&self) -> *mut GLFWwindow {
        self.0.as_ptr()
    }
}

impl fmt::Debug for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Window({:p})", self.0)
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window@{:p}", self.0)
    }
}

impl Serialize for WindowHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:p}", self.0))
    }
}

/// Non-owning handle to a native monitor
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonitorHandle(NonNull<GLFWmonitor>);

impl MonitorHandle {
    /// Wrap a raw monitor pointer, `None` if it is null
    pub fn from_ptr(ptr: *mut GLFWmonitor) -> Option<Self> {
        NonNull::new(ptr).map(MonitorHandle)
    }

    /// Get the raw monitor pointer
    pub fn as_ptr(&self) -> *mut GLFWmonitor {
        self.0.as_ptr()
    }
}

impl fmt::Debug for MonitorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Monitor({:p})", self.0)
    }
}

impl fmt::Display for MonitorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "monitor@{:p}", self.0)
    }
}

impl Serialize for MonitorHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:p}", self.0))
    }
}

/// Key and mouse button state change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Release,
    Press,
    Repeat,
}

impl Action {
    /// Decode a native action code
    pub fn from_raw(raw: c_int) -> Option<Self> {
        match raw {
            constants::RELEASE => Some(Action::Release),
            constants::PRESS => Some(Action::Press),
            constants::REPEAT => Some(Action::Repeat),
            _ => None,
        }
    }

    /// Native action code
    pub fn to_raw(self) -> c_int {
        match self {
            Action::Release => constants::RELEASE,
            Action::Press => constants::PRESS,
            Action::Repeat => constants::REPEAT,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Release => write!(f, "release"),
            Action::Press => write!(f, "press"),
            Action::Repeat => write!(f, "repeat"),
        }
    }
}

bitflags! {
    /// Modifier key flags delivered with key, char and mouse button events
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Modifiers: i32 {
        const SHIFT = 0x0001;
        const CONTROL = 0x0002;
        const ALT = 0x0004;
        const SUPER = 0x0008;
    }
}

impl Modifiers {
    /// Decode native modifier bits, keeping bits this binding does not name
    pub fn from_raw(raw: c_int) -> Self {
        Modifiers::from_bits_retain(raw)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        let names: Vec<&str> = self.iter_names().map(|(name, _)| name).collect();
        write!(f, "{}", names.join("+"))
    }
}

/// Monitor hot-plug status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonitorStatus {
    Connected,
    Disconnected,
}

impl MonitorStatus {
    /// Decode a native monitor event code
    pub fn from_raw(raw: c_int) -> Option<Self> {
        match raw {
            constants::CONNECTED => Some(MonitorStatus::Connected),
            constants::DISCONNECTED => Some(MonitorStatus::Disconnected),
            _ => None,
        }
    }
}

impl fmt::Display for MonitorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorStatus::Connected => write!(f, "connected"),
            MonitorStatus::Disconnected => write!(f, "disconnected"),
        }
    }
}

/// Video mode of a monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMode {
    pub width: i32,
    pub height: i32,
    pub red_bits: i32,
    pub green_bits: i32,
    pub blue_bits: i32,
    pub refresh_rate: i32,
}

impl From<&GLFWvidmode> for VideoMode {
    fn from(mode: &GLFWvidmode) -> Self {
        Self {
            width: mode.width,
            height: mode.height,
            red_bits: mode.redBits,
            green_bits: mode.greenBits,
            blue_bits: mode.blueBits,
            refresh_rate: mode.refreshRate,
        }
    }
}

impl fmt::Display for VideoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} ({}/{}/{} bits) @ {} Hz",
            self.width,
            self.height,
            self.red_bits,
            self.green_bits,
            self.blue_bits,
            self.refresh_rate
        )
    }
}

/// Gamma ramp of a monitor, one entry per channel step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GammaRamp {
    pub red: Vec<u16>,
    pub green: Vec<u16>,
    pub blue: Vec<u16>,
}

impl GammaRamp {
    /// Copy a ramp owned by GLFW
    ///
    /// # Safety
    /// Each channel pointer must be valid for `ramp.size` reads.
    pub(crate) unsafe fn from_native(ramp: &GLFWgammaramp) -> Self {
        let channel = |ptr: *mut u16| {
            if ptr.is_null() || ramp.size == 0 {
                Vec::new()
            } else {
                std::slice::from_raw_parts(ptr, ramp.size as usize).to_vec()
            }
        };
        Self {
            red: channel(ramp.red),
            green: channel(ramp.green),
            blue: channel(ramp.blue),
        }
    }

    /// Number of steps, if all channels agree
    pub fn size(&self) -> Option<usize> {
        let size = self.red.len();
        (self.green.len() == size && self.blue.len() == size).then_some(size)
    }
}

/// Native library version triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Version {
    pub major: i32,
    pub minor: i32,
    pub revision: i32,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
    }
}
