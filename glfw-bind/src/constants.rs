//! GLFW header constants and the argument checks built on them
//!
//! GLFW validates very little on its own, so the binding checks hint targets
//! and input modes before passing them to C.

use std::os::raw::c_int;

pub const VERSION_MAJOR: c_int = 3;
pub const VERSION_MINOR: c_int = 0;

pub const RELEASE: c_int = 0;
pub const PRESS: c_int = 1;
pub const REPEAT: c_int = 2;

pub const GL_FALSE: c_int = 0;
pub const GL_TRUE: c_int = 1;

// Error codes
pub const NOT_INITIALIZED: c_int = 0x0001_0001;
pub const NO_CURRENT_CONTEXT: c_int = 0x0001_0002;
pub const INVALID_ENUM: c_int = 0x0001_0003;
pub const INVALID_VALUE: c_int = 0x0001_0004;
pub const OUT_OF_MEMORY: c_int = 0x0001_0005;
pub const API_UNAVAILABLE: c_int = 0x0001_0006;
pub const VERSION_UNAVAILABLE: c_int = 0x0001_0007;
pub const PLATFORM_ERROR: c_int = 0x0001_0008;
pub const FORMAT_UNAVAILABLE: c_int = 0x0001_0009;

/// Error code the binding reports when a callback handler fails
///
/// Sits above GLFW's own error range.
pub const HANDLER_FAILED: c_int = 0x0001_0100;

// Window attributes
pub const FOCUSED: c_int = 0x0002_0001;
pub const ICONIFIED: c_int = 0x0002_0002;
pub const RESIZABLE: c_int = 0x0002_0003;
pub const VISIBLE: c_int = 0x0002_0004;
pub const DECORATED: c_int = 0x0002_0005;

// Framebuffer hints
pub const RED_BITS: c_int = 0x0002_1001;
pub const GREEN_BITS: c_int = 0x0002_1002;
pub const BLUE_BITS: c_int = 0x0002_1003;
pub const ALPHA_BITS: c_int = 0x0002_1004;
pub const DEPTH_BITS: c_int = 0x0002_1005;
pub const STENCIL_BITS: c_int = 0x0002_1006;
pub const ACCUM_RED_BITS: c_int = 0x0002_1007;
pub const ACCUM_GREEN_BITS: c_int = 0x0002_1008;
pub const ACCUM_BLUE_BITS: c_int = 0x0002_1009;
pub const ACCUM_ALPHA_BITS: c_int = 0x0002_100A;
pub const AUX_BUFFERS: c_int = 0x0002_100B;
pub const STEREO: c_int = 0x0002_100C;
pub const SAMPLES: c_int = 0x0002_100D;
pub const SRGB_CAPABLE: c_int = 0x0002_100E;
pub const REFRESH_RATE: c_int = 0x0002_100F;

// Context hints
pub const CLIENT_API: c_int = 0x0002_2001;
pub const CONTEXT_VERSION_MAJOR: c_int = 0x0002_2002;
pub const CONTEXT_VERSION_MINOR: c_int = 0x0002_2003;
pub const CONTEXT_REVISION: c_int = 0x0002_2004;
pub const CONTEXT_ROBUSTNESS: c_int = 0x0002_2005;
pub const OPENGL_FORWARD_COMPAT: c_int = 0x0002_2006;
pub const OPENGL_DEBUG_CONTEXT: c_int = 0x0002_2007;
pub const OPENGL_PROFILE: c_int = 0x0002_2008;

pub const OPENGL_API: c_int = 0x0003_0001;
pub const OPENGL_ES_API: c_int = 0x0003_0002;

pub const NO_ROBUSTNESS: c_int = 0;
pub const NO_RESET_NOTIFICATION: c_int = 0x0003_1001;
pub const LOSE_CONTEXT_ON_RESET: c_int = 0x0003_1002;

pub const OPENGL_ANY_PROFILE: c_int = 0;
pub const OPENGL_CORE_PROFILE: c_int = 0x0003_2001;
pub const OPENGL_COMPAT_PROFILE: c_int = 0x0003_2002;

// Input modes
pub const CURSOR: c_int = 0x0003_3001;
pub const STICKY_KEYS: c_int = 0x0003_3002;
pub const STICKY_MOUSE_BUTTONS: c_int = 0x0003_3003;

pub const CURSOR_NORMAL: c_int = 0x0003_4001;
pub const CURSOR_HIDDEN: c_int = 0x0003_4002;
pub const CURSOR_DISABLED: c_int = 0x0003_4003;

// Monitor events
pub const CONNECTED: c_int = 0x0004_0001;
pub const DISCONNECTED: c_int = 0x0004_0002;

// Joysticks
pub const JOYSTICK_1: c_int = 0;
pub const JOYSTICK_2: c_int = 1;
pub const JOYSTICK_3: c_int = 2;
pub const JOYSTICK_4: c_int = 3;
pub const JOYSTICK_5: c_int = 4;
pub const JOYSTICK_6: c_int = 5;
pub const JOYSTICK_7: c_int = 6;
pub const JOYSTICK_8: c_int = 7;
pub const JOYSTICK_9: c_int = 8;
pub const JOYSTICK_10: c_int = 9;
pub const JOYSTICK_11: c_int = 10;
pub const JOYSTICK_12: c_int = 11;
pub const JOYSTICK_13: c_int = 12;
pub const JOYSTICK_14: c_int = 13;
pub const JOYSTICK_15: c_int = 14;
pub const JOYSTICK_16: c_int = 15;
pub const JOYSTICK_LAST: c_int = JOYSTICK_16;

/// Targets accepted by `glfwWindowHint`
pub const WINDOW_HINT_TARGETS: &[c_int] = &[
    RESIZABLE,
    VISIBLE,
    DECORATED,
    RED_BITS,
    GREEN_BITS,
    BLUE_BITS,
    ALPHA_BITS,
    DEPTH_BITS,
    STENCIL_BITS,
    ACCUM_RED_BITS,
    ACCUM_GREEN_BITS,
    ACCUM_BLUE_BITS,
    ACCUM_ALPHA_BITS,
    AUX_BUFFERS,
    STEREO,
    SAMPLES,
    SRGB_CAPABLE,
    REFRESH_RATE,
    CLIENT_API,
    OPENGL_FORWARD_COMPAT,
    OPENGL_PROFILE,
    OPENGL_DEBUG_CONTEXT,
    CONTEXT_VERSION_MAJOR,
    CONTEXT_VERSION_MINOR,
    CONTEXT_ROBUSTNESS,
];

/// Check if a window hint target is one GLFW accepts
pub fn is_window_hint_target(target: c_int) -> bool {
    WINDOW_HINT_TARGETS.contains(&target)
}

/// Attributes accepted by `glfwGetWindowAttrib`
pub const WINDOW_ATTRIBUTES: &[c_int] = &[
    FOCUSED,
    ICONIFIED,
    RESIZABLE,
    VISIBLE,
    DECORATED,
    SAMPLES,
    SRGB_CAPABLE,
    CLIENT_API,
    OPENGL_FORWARD_COMPAT,
    OPENGL_PROFILE,
    OPENGL_DEBUG_CONTEXT,
    CONTEXT_VERSION_MAJOR,
    CONTEXT_VERSION_MINOR,
    CONTEXT_ROBUSTNESS,
    CONTEXT_REVISION,
];

pub fn is_window_attribute(attrib: c_int) -> bool {
    WINDOW_ATTRIBUTES.contains(&attrib)
}

pub fn is_input_mode(mode: c_int) -> bool {
    matches!(mode, CURSOR | STICKY_KEYS | STICKY_MOUSE_BUTTONS)
}

pub fn is_joystick(joy: c_int) -> bool {
    (JOYSTICK_1..=JOYSTICK_LAST).contains(&joy)
}

/// Check an input mode and value pair
///
/// `CURSOR` takes one of the cursor modes, the sticky modes take a GL boolean.
pub fn check_input_mode(mode: c_int, value: c_int) -> Result<(), String> {
    match mode {
        CURSOR => {
            if [CURSOR_NORMAL, CURSOR_HIDDEN, CURSOR_DISABLED].contains(&value) {
                Ok(())
            } else {
                Err(format!("invalid cursor mode 0x{:X}", value))
            }
        }
        STICKY_KEYS | STICKY_MOUSE_BUTTONS => {
            if value == GL_TRUE || value == GL_FALSE {
                Ok(())
            } else {
                Err("sticky input modes take GL_TRUE or GL_FALSE".to_string())
            }
        }
        _ => Err(format!("input mode 0x{:X} is not valid", mode)),
    }
}

/// Human-readable name of a GLFW error code
pub fn error_name(code: c_int) -> Option<&'static str> {
    match code {
        NOT_INITIALIZED => Some("NOT_INITIALIZED"),
        NO_CURRENT_CONTEXT => Some("NO_CURRENT_CONTEXT"),
        INVALID_ENUM => Some("INVALID_ENUM"),
        INVALID_VALUE => Some("INVALID_VALUE"),
        OUT_OF_MEMORY => Some("OUT_OF_MEMORY"),
        API_UNAVAILABLE => Some("API_UNAVAILABLE"),
        VERSION_UNAVAILABLE => Some("VERSION_UNAVAILABLE"),
        PLATFORM_ERROR => Some("PLATFORM_ERROR"),
        FORMAT_UNAVAILABLE => Some("FORMAT_UNAVAILABLE"),
        HANDLER_FAILED => Some("HANDLER_FAILED"),
        _ => None,
    }
}
