//! Raw GLFW 3 C API types
//!
//! This module mirrors the parts of `glfw3.h` the binding calls into. The
//! native library is reached only through [`GlfwApi`], a table of function
//! pointers that is either resolved from a shared library (see `loader`) or
//! supplied directly by an embedder.

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

use std::os::raw::{c_char, c_double, c_float, c_int, c_uchar, c_uint, c_ushort};

// Opaque types
#[repr(C)]
pub struct GLFWwindow {
    _private: [u8; 0],
}

#[repr(C)]
pub struct GLFWmonitor {
    _private: [u8; 0],
}

/// `GLFWvidmode` as laid out in the C header
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GLFWvidmode {
    pub width: c_int,
    pub height: c_int,
    pub redBits: c_int,
    pub greenBits: c_int,
    pub blueBits: c_int,
    pub refreshRate: c_int,
}

/// `GLFWgammaramp` as laid out in the C header
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct GLFWgammaramp {
    pub red: *mut c_ushort,
    pub green: *mut c_ushort,
    pub blue: *mut c_ushort,
    pub size: c_uint,
}

/// Client API function returned by `glfwGetProcAddress`
pub type GLFWglproc = unsafe extern "C" fn();

// Callback signatures. GLFW accepts NULL wherever one of these is expected,
// so registration functions take and return `Option<...>`.
pub type GLFWerrorfun = unsafe extern "C" fn(c_int, *const c_char);
pub type GLFWmonitorfun = unsafe extern "C" fn(*mut GLFWmonitor, c_int);
pub type GLFWwindowposfun = unsafe extern "C" fn(*mut GLFWwindow, c_int, c_int);
pub type GLFWwindowsizefun = unsafe extern "C" fn(*mut GLFWwindow, c_int, c_int);
pub type GLFWwindowclosefun = unsafe extern "C" fn(*mut GLFWwindow);
pub type GLFWwindowrefreshfun = unsafe extern "C" fn(*mut GLFWwindow);
pub type GLFWwindowfocusfun = unsafe extern "C" fn(*mut GLFWwindow, c_int);
pub type GLFWwindowiconifyfun = unsafe extern "C" fn(*mut GLFWwindow, c_int);
pub type GLFWframebuffersizefun = unsafe extern "C" fn(*mut GLFWwindow, c_int, c_int);
pub type GLFWkeyfun = unsafe extern "C" fn(*mut GLFWwindow, c_int, c_int, c_int, c_int);
pub type GLFWcharfun = unsafe extern "C" fn(*mut GLFWwindow, c_uint);
// GLFW 3.1 and later
pub type GLFWcharmodsfun = unsafe extern "C" fn(*mut GLFWwindow, c_uint, c_int);
pub type GLFWmousebuttonfun = unsafe extern "C" fn(*mut GLFWwindow, c_int, c_int, c_int);
pub type GLFWcursorposfun = unsafe extern "C" fn(*mut GLFWwindow, c_double, c_double);
pub type GLFWcursorenterfun = unsafe extern "C" fn(*mut GLFWwindow, c_int);
pub type GLFWscrollfun = unsafe extern "C" fn(*mut GLFWwindow, c_double, c_double);

/// Function pointer table for every GLFW entry point the binding uses
///
/// All pointers must come from the same GLFW library instance. Entry points
/// added after GLFW 3.0 are `Option`s and may be missing.
#[derive(Clone, Copy)]
pub struct GlfwApi {
    // Initialization, termination and version querying
    pub init: unsafe extern "C" fn() -> c_int,
    pub terminate: unsafe extern "C" fn(),
    pub get_version: unsafe extern "C" fn(*mut c_int, *mut c_int, *mut c_int),
    pub get_version_string: unsafe extern "C" fn() -> *const c_char,

    // Monitors
    pub get_monitors: unsafe extern "C" fn(*mut c_int) -> *mut *mut GLFWmonitor,
    pub get_primary_monitor: unsafe extern "C" fn() -> *mut GLFWmonitor,
    pub get_monitor_name: unsafe extern "C" fn(*mut GLFWmonitor) -> *const c_char,
    pub get_video_modes: unsafe extern "C" fn(*mut GLFWmonitor, *mut c_int) -> *const GLFWvidmode,
    pub get_video_mode: unsafe extern "C" fn(*mut GLFWmonitor) -> *const GLFWvidmode,
    pub get_monitor_pos: unsafe extern "C" fn(*mut GLFWmonitor, *mut c_int, *mut c_int),
    pub get_monitor_physical_size: unsafe extern "C" fn(*mut GLFWmonitor, *mut c_int, *mut c_int),
    pub set_gamma: unsafe extern "C" fn(*mut GLFWmonitor, c_float),
    pub get_gamma_ramp: unsafe extern "C" fn(*mut GLFWmonitor) -> *const GLFWgammaramp,
    pub set_gamma_ramp: unsafe extern "C" fn(*mut GLFWmonitor, *const GLFWgammaramp),

    // Window handling
    pub default_window_hints: unsafe extern "C" fn(),
    pub window_hint: unsafe extern "C" fn(c_int, c_int),
    pub create_window: unsafe extern "C" fn(
        c_int,
        c_int,
        *const c_char,
        *mut GLFWmonitor,
        *mut GLFWwindow,
    ) -> *mut GLFWwindow,
    pub destroy_window: unsafe extern "C" fn(*mut GLFWwindow),
    pub window_should_close: unsafe extern "C" fn(*mut GLFWwindow) -> c_int,
    pub set_window_should_close: unsafe extern "C" fn(*mut GLFWwindow, c_int),
    pub set_window_title: unsafe extern "C" fn(*mut GLFWwindow, *const c_char),
    pub get_window_pos: unsafe extern "C" fn(*mut GLFWwindow, *mut c_int, *mut c_int),
    pub set_window_pos: unsafe extern "C" fn(*mut GLFWwindow, c_int, c_int),
    pub get_window_size: unsafe extern "C" fn(*mut GLFWwindow, *mut c_int, *mut c_int),
    pub set_window_size: unsafe extern "C" fn(*mut GLFWwindow, c_int, c_int),
    pub get_framebuffer_size: unsafe extern "C" fn(*mut GLFWwindow, *mut c_int, *mut c_int),
    pub iconify_window: unsafe extern "C" fn(*mut GLFWwindow),
    pub restore_window: unsafe extern "C" fn(*mut GLFWwindow),
    pub show_window: unsafe extern "C" fn(*mut GLFWwindow),
    pub hide_window: unsafe extern "C" fn(*mut GLFWwindow),
    pub get_window_monitor: unsafe extern "C" fn(*mut GLFWwindow) -> *mut GLFWmonitor,
    pub get_window_attrib: unsafe extern "C" fn(*mut GLFWwindow, c_int) -> c_int,

    // Context
    pub make_context_current: unsafe extern "C" fn(*mut GLFWwindow),
    pub get_current_context: unsafe extern "C" fn() -> *mut GLFWwindow,
    pub swap_buffers: unsafe extern "C" fn(*mut GLFWwindow),
    pub swap_interval: unsafe extern "C" fn(c_int),
    pub extension_supported: unsafe extern "C" fn(*const c_char) -> c_int,
    pub get_proc_address: unsafe extern "C" fn(*const c_char) -> Option<GLFWglproc>,

    // Input
    pub poll_events: unsafe extern "C" fn(),
    pub wait_events: unsafe extern "C" fn(),
    pub get_key: unsafe extern "C" fn(*mut GLFWwindow, c_int) -> c_int,
    pub get_mouse_button: unsafe extern "C" fn(*mut GLFWwindow, c_int) -> c_int,
    pub get_cursor_pos: unsafe extern "C" fn(*mut GLFWwindow, *mut c_double, *mut c_double),
    pub set_cursor_pos: unsafe extern "C" fn(*mut GLFWwindow, c_double, c_double),
    pub get_input_mode: unsafe extern "C" fn(*mut GLFWwindow, c_int) -> c_int,
    pub set_input_mode: unsafe extern "C" fn(*mut GLFWwindow, c_int, c_int),

    // Joysticks
    pub joystick_present: unsafe extern "C" fn(c_int) -> c_int,
    pub get_joystick_axes: unsafe extern "C" fn(c_int, *mut c_int) -> *const c_float,
    pub get_joystick_buttons: unsafe extern "C" fn(c_int, *mut c_int) -> *const c_uchar,
    pub get_joystick_name: unsafe extern "C" fn(c_int) -> *const c_char,

    // Clipboard
    pub set_clipboard_string: unsafe extern "C" fn(*mut GLFWwindow, *const c_char),
    pub get_clipboard_string: unsafe extern "C" fn(*mut GLFWwindow) -> *const c_char,

    // Callback registration
    pub set_error_callback: unsafe extern "C" fn(Option<GLFWerrorfun>) -> Option<GLFWerrorfun>,
    pub set_monitor_callback:
        unsafe extern "C" fn(Option<GLFWmonitorfun>) -> Option<GLFWmonitorfun>,
    pub set_window_pos_callback: unsafe extern "C" fn(
        *mut GLFWwindow,
        Option<GLFWwindowposfun>,
    ) -> Option<GLFWwindowposfun>,
    pub set_window_size_callback: unsafe extern "C" fn(
        *mut GLFWwindow,
        Option<GLFWwindowsizefun>,
    ) -> Option<GLFWwindowsizefun>,
    pub set_window_close_callback: unsafe extern "C" fn(
        *mut GLFWwindow,
        Option<GLFWwindowclosefun>,
    ) -> Option<GLFWwindowclosefun>,
    pub set_window_refresh_callback: unsafe extern "C" fn(
        *mut GLFWwindow,
        Option<GLFWwindowrefreshfun>,
    ) -> Option<GLFWwindowrefreshfun>,
    pub set_window_focus_callback: unsafe extern "C" fn(
        *mut GLFWwindow,
        Option<GLFWwindowfocusfun>,
    ) -> Option<GLFWwindowfocusfun>,
    pub set_window_iconify_callback: unsafe extern "C" fn(
        *mut GLFWwindow,
        Option<GLFWwindowiconifyfun>,
    ) -> Option<GLFWwindowiconifyfun>,
    pub set_framebuffer_size_callback: unsafe extern "C" fn(
        *mut GLFWwindow,
        Option<GLFWframebuffersizefun>,
    ) -> Option<GLFWframebuffersizefun>,
    pub set_key_callback:
        unsafe extern "C" fn(*mut GLFWwindow, Option<GLFWkeyfun>) -> Option<GLFWkeyfun>,
    pub set_char_callback:
        unsafe extern "C" fn(*mut GLFWwindow, Option<GLFWcharfun>) -> Option<GLFWcharfun>,
    pub set_char_mods_callback: Option<
        unsafe extern "C" fn(*mut GLFWwindow, Option<GLFWcharmodsfun>) -> Option<GLFWcharmodsfun>,
    >,
    pub set_mouse_button_callback: unsafe extern "C" fn(
        *mut GLFWwindow,
        Option<GLFWmousebuttonfun>,
    ) -> Option<GLFWmousebuttonfun>,
    pub set_cursor_pos_callback: unsafe extern "C" fn(
        *mut GLFWwindow,
        Option<GLFWcursorposfun>,
    ) -> Option<GLFWcursorposfun>,
    pub set_cursor_enter_callback: unsafe extern "C" fn(
        *mut GLFWwindow,
        Option<GLFWcursorenterfun>,
    ) -> Option<GLFWcursorenterfun>,
    pub set_scroll_callback:
        unsafe extern "C" fn(*mut GLFWwindow, Option<GLFWscrollfun>) -> Option<GLFWscrollfun>,
}

impl std::fmt::Debug for GlfwApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlfwApi")
            .field("init", &(self.init as *const ()))
            .field("char_mods", &self.set_char_mods_callback.is_some())
            .finish_non_exhaustive()
    }
}
