//! In-memory stand-in for the native library, used by the unit tests
//!
//! The fake records every callback registration, keeps the installed
//! trampolines per `(slot, window)` and fires queued events through them from
//! `poll_events`, the same way GLFW does.

use crate::callback::Slot;
use crate::constants::{
    CONNECTED, CONTEXT_VERSION_MAJOR, CURSOR, CURSOR_NORMAL, GL_FALSE, GL_TRUE, ICONIFIED, PRESS,
    RELEASE, VISIBLE,
};
use crate::ffi::*;
use crate::trampoline::NativeCallback;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_double, c_float, c_int, c_uchar, c_uint};

pub(crate) const MONITOR_1: usize = 0x9000;
pub(crate) const MONITOR_2: usize = 0x9010;

/// One call to a native `glfwSet*Callback` function
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Registration {
    pub slot: Slot,
    pub window: usize,
    pub installed: bool,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct FakeWindow {
    pub title: String,
    pub pos: (c_int, c_int),
    pub size: (c_int, c_int),
    pub should_close: c_int,
    pub iconified: bool,
    pub visible: bool,
    pub monitor: usize,
    pub clipboard: Option<CString>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct FakeJoystick {
    pub name: CString,
    pub axes: Vec<c_float>,
    pub buttons: Vec<c_uchar>,
}

/// Callback installed in the fake, as registered through the native table
#[derive(Debug, Clone, Copy)]
enum Installed {
    Native(NativeCallback),
    // `glfwSetCharCallback`, without modifiers
    Char(GLFWcharfun),
}

/// Raw event queued for the next poll
#[derive(Debug, Clone)]
pub(crate) enum FakeEvent {
    Error(c_int, Option<CString>),
    Monitor(usize, c_int),
    WindowPos(usize, c_int, c_int),
    WindowSize(usize, c_int, c_int),
    WindowClose(usize),
    WindowRefresh(usize),
    WindowFocus(usize, c_int),
    WindowIconify(usize, c_int),
    FramebufferSize(usize, c_int, c_int),
    Key(usize, c_int, c_int, c_int, c_int),
    Char(usize, c_uint, c_int),
    MouseButton(usize, c_int, c_int, c_int),
    CursorPos(usize, c_double, c_double),
    CursorEnter(usize, c_int),
    Scroll(usize, c_double, c_double),
}

impl FakeEvent {
    fn target(&self) -> (Slot, usize) {
        match *self {
            FakeEvent::Error(..) => (Slot::Error, 0),
            FakeEvent::Monitor(..) => (Slot::Monitor, 0),
            FakeEvent::WindowPos(w, ..) => (Slot::WindowPos, w),
            FakeEvent::WindowSize(w, ..) => (Slot::WindowSize, w),
            FakeEvent::WindowClose(w) => (Slot::WindowClose, w),
            FakeEvent::WindowRefresh(w) => (Slot::WindowRefresh, w),
            FakeEvent::WindowFocus(w, ..) => (Slot::WindowFocus, w),
            FakeEvent::WindowIconify(w, ..) => (Slot::WindowIconify, w),
            FakeEvent::FramebufferSize(w, ..) => (Slot::FramebufferSize, w),
            FakeEvent::Key(w, ..) => (Slot::Key, w),
            FakeEvent::Char(w, ..) => (Slot::Char, w),
            FakeEvent::MouseButton(w, ..) => (Slot::MouseButton, w),
            FakeEvent::CursorPos(w, ..) => (Slot::CursorPos, w),
            FakeEvent::CursorEnter(w, ..) => (Slot::CursorEnter, w),
            FakeEvent::Scroll(w, ..) => (Slot::Scroll, w),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct FakeNative {
    pub fail_init: bool,
    pub fail_create_window: bool,
    pub initialized: bool,
    pub init_calls: usize,
    pub terminate_calls: usize,
    pub polls: usize,
    pub registrations: Vec<Registration>,
    pub destroyed: Vec<usize>,
    pub hints: Vec<(c_int, c_int)>,
    pub input_modes: Vec<(usize, c_int, c_int)>,
    pub pressed_keys: Vec<c_int>,
    pub pressed_buttons: Vec<c_int>,
    pub cursor: (c_double, c_double),
    pub swap_interval: Option<c_int>,
    pub swaps: usize,
    pub current_context: usize,
    pub windows: HashMap<usize, FakeWindow>,
    pub joysticks: HashMap<c_int, FakeJoystick>,
    pub gamma: Option<c_float>,
    pub gamma_ramp: Option<(Vec<u16>, Vec<u16>, Vec<u16>)>,
    pub version: (c_int, c_int, c_int),
    installed: HashMap<(Slot, usize), Installed>,
    ramp_view: Option<GLFWgammaramp>,
    next_window: usize,
    pending: VecDeque<FakeEvent>,
    monitors: Vec<*mut GLFWmonitor>,
    monitor_names: HashMap<usize, CString>,
    modes: Vec<GLFWvidmode>,
}

thread_local! {
    static FAKE: RefCell<FakeNative> = RefCell::new(FakeNative::default());
}

pub(crate) fn with_fake<R>(f: impl FnOnce(&mut FakeNative) -> R) -> R {
    FAKE.with(|fake| f(&mut fake.borrow_mut()))
}

/// Fresh fake state with two monitors and one joystick attached
pub(crate) fn reset() {
    with_fake(|fake| {
        *fake = FakeNative::default();
        fake.version = (3, 1, 2);
        fake.joysticks.insert(
            0,
            FakeJoystick {
                name: CString::new("Fake Pad").unwrap(),
                axes: vec![0.0, -1.0],
                buttons: vec![PRESS as c_uchar, RELEASE as c_uchar],
            },
        );
        fake.monitors = vec![MONITOR_1 as *mut GLFWmonitor, MONITOR_2 as *mut GLFWmonitor];
        fake.monitor_names.insert(MONITOR_1, CString::new("Fake Monitor 1").unwrap());
        fake.monitor_names.insert(MONITOR_2, CString::new("Fake Monitor 2").unwrap());
        fake.modes = vec![
            GLFWvidmode {
                width: 1280,
                height: 720,
                redBits: 8,
                greenBits: 8,
                blueBits: 8,
                refreshRate: 60,
            },
            GLFWvidmode {
                width: 1920,
                height: 1080,
                redBits: 8,
                greenBits: 8,
                blueBits: 8,
                refreshRate: 60,
            },
        ];
    });
}

/// Queue an event for the next `poll_events`
pub(crate) fn queue(event: FakeEvent) {
    with_fake(|fake| fake.pending.push_back(event));
}

/// Number of native registration calls made for `slot`
pub(crate) fn registration_count(slot: Slot) -> usize {
    with_fake(|fake| fake.registrations.iter().filter(|r| r.slot == slot).count())
}

pub(crate) fn is_installed(slot: Slot, window: usize) -> bool {
    with_fake(|fake| fake.installed.contains_key(&(slot, window)))
}

/// Whether the char slot of `window` went through `glfwSetCharCallback`
pub(crate) fn has_plain_char_callback(window: usize) -> bool {
    with_fake(|fake| matches!(fake.installed.get(&(Slot::Char, window)), Some(Installed::Char(_))))
}

/// Fire an event through whatever trampoline is installed for it
///
/// Runs with the fake unborrowed so handlers may call back into the API.
pub(crate) fn fire(event: FakeEvent) {
    let (slot, window) = event.target();
    let Some(callback) = with_fake(|fake| fake.installed.get(&(slot, window)).copied()) else {
        return;
    };
    let w = |addr: usize| addr as *mut GLFWwindow;
    use self::Installed::Native;
    // SAFETY: installed callbacks are the crate's own trampolines
    unsafe {
        match (callback, event) {
            (Native(NativeCallback::Error(f)), FakeEvent::Error(code, description)) => f(
                code,
                description
                    .as_ref()
                    .map_or(std::ptr::null(), |d| d.as_ptr()),
            ),
            (Native(NativeCallback::Monitor(f)), FakeEvent::Monitor(m, status)) => {
                f(m as *mut GLFWmonitor, status)
            }
            (Native(NativeCallback::WindowPos(f)), FakeEvent::WindowPos(win, x, y)) => {
                f(w(win), x, y)
            }
            (Native(NativeCallback::WindowSize(f)), FakeEvent::WindowSize(win, x, y)) => {
                f(w(win), x, y)
            }
            (Native(NativeCallback::WindowClose(f)), FakeEvent::WindowClose(win)) => f(w(win)),
            (Native(NativeCallback::WindowRefresh(f)), FakeEvent::WindowRefresh(win)) => f(w(win)),
            (Native(NativeCallback::WindowFocus(f)), FakeEvent::WindowFocus(win, v)) => {
                f(w(win), v)
            }
            (Native(NativeCallback::WindowIconify(f)), FakeEvent::WindowIconify(win, v)) => {
                f(w(win), v)
            }
            (Native(NativeCallback::FramebufferSize(f)), FakeEvent::FramebufferSize(win, x, y)) => {
                f(w(win), x, y)
            }
            (Native(NativeCallback::Key(f)), FakeEvent::Key(win, key, scancode, action, mods)) => {
                f(w(win), key, scancode, action, mods)
            }
            (Native(NativeCallback::Char(f)), FakeEvent::Char(win, codepoint, mods)) => {
                f(w(win), codepoint, mods)
            }
            (Installed::Char(f), FakeEvent::Char(win, codepoint, _)) => f(w(win), codepoint),
            (
                Native(NativeCallback::MouseButton(f)),
                FakeEvent::MouseButton(win, button, action, mods),
            ) => f(w(win), button, action, mods),
            (Native(NativeCallback::CursorPos(f)), FakeEvent::CursorPos(win, x, y)) => {
                f(w(win), x, y)
            }
            (Native(NativeCallback::CursorEnter(f)), FakeEvent::CursorEnter(win, v)) => {
                f(w(win), v)
            }
            (Native(NativeCallback::Scroll(f)), FakeEvent::Scroll(win, x, y)) => f(w(win), x, y),
            (callback, event) => panic!("{:?} installed for {:?}", callback, event),
        }
    }
}

fn record(slot: Slot, window: usize, callback: Option<Installed>) -> Option<Installed> {
    with_fake(|fake| {
        fake.registrations.push(Registration {
            slot,
            window,
            installed: callback.is_some(),
        });
        match callback {
            Some(callback) => fake.installed.insert((slot, window), callback),
            None => fake.installed.remove(&(slot, window)),
        }
    })
}

macro_rules! fake_global_setter {
    ($name:ident, $slot:expr, $variant:ident, $fun:ty) => {
        unsafe extern "C" fn $name(callback: Option<$fun>) -> Option<$fun> {
            let callback = callback.map(|f| Installed::Native(NativeCallback::$variant(f)));
            match record($slot, 0, callback) {
                Some(Installed::Native(NativeCallback::$variant(previous))) => Some(previous),
                _ => None,
            }
        }
    };
}

macro_rules! fake_window_setter {
    ($name:ident, $slot:expr, $variant:ident, $fun:ty) => {
        unsafe extern "C" fn $name(window: *mut GLFWwindow, callback: Option<$fun>) -> Option<$fun> {
            let callback = callback.map(|f| Installed::Native(NativeCallback::$variant(f)));
            match record($slot, window as usize, callback) {
                Some(Installed::Native(NativeCallback::$variant(previous))) => Some(previous),
                _ => None,
            }
        }
    };
}

fake_global_setter!(fake_set_error_callback, Slot::Error, Error, GLFWerrorfun);
fake_global_setter!(fake_set_monitor_callback, Slot::Monitor, Monitor, GLFWmonitorfun);
fake_window_setter!(fake_set_window_pos_callback, Slot::WindowPos, WindowPos, GLFWwindowposfun);
fake_window_setter!(fake_set_window_size_callback, Slot::WindowSize, WindowSize, GLFWwindowsizefun);
fake_window_setter!(fake_set_window_close_callback, Slot::WindowClose, WindowClose, GLFWwindowclosefun);
fake_window_setter!(
    fake_set_window_refresh_callback,
    Slot::WindowRefresh,
    WindowRefresh,
    GLFWwindowrefreshfun
);
fake_window_setter!(fake_set_window_focus_callback, Slot::WindowFocus, WindowFocus, GLFWwindowfocusfun);
fake_window_setter!(
    fake_set_window_iconify_callback,
    Slot::WindowIconify,
    WindowIconify,
    GLFWwindowiconifyfun
);
fake_window_setter!(
    fake_set_framebuffer_size_callback,
    Slot::FramebufferSize,
    FramebufferSize,
    GLFWframebuffersizefun
);
fake_window_setter!(fake_set_key_callback, Slot::Key, Key, GLFWkeyfun);
fake_window_setter!(fake_set_char_mods_callback, Slot::Char, Char, GLFWcharmodsfun);
unsafe extern "C" fn fake_set_char_callback(
    window: *mut GLFWwindow,
    callback: Option<GLFWcharfun>,
) -> Option<GLFWcharfun> {
    match record(Slot::Char, window as usize, callback.map(Installed::Char)) {
        Some(Installed::Char(previous)) => Some(previous),
        _ => None,
    }
}

fake_window_setter!(fake_set_mouse_button_callback, Slot::MouseButton, MouseButton, GLFWmousebuttonfun);
fake_window_setter!(fake_set_cursor_pos_callback, Slot::CursorPos, CursorPos, GLFWcursorposfun);
fake_window_setter!(fake_set_cursor_enter_callback, Slot::CursorEnter, CursorEnter, GLFWcursorenterfun);
fake_window_setter!(fake_set_scroll_callback, Slot::Scroll, Scroll, GLFWscrollfun);

unsafe extern "C" fn fake_init() -> c_int {
    with_fake(|fake| {
        fake.init_calls += 1;
        if fake.fail_init {
            GL_FALSE
        } else {
            fake.initialized = true;
            GL_TRUE
        }
    })
}

unsafe extern "C" fn fake_terminate() {
    with_fake(|fake| {
        fake.terminate_calls += 1;
        fake.initialized = false;
    });
}

unsafe extern "C" fn fake_get_version(major: *mut c_int, minor: *mut c_int, rev: *mut c_int) {
    let version = with_fake(|fake| fake.version);
    *major = version.0;
    *minor = version.1;
    *rev = version.2;
}

unsafe extern "C" fn fake_get_version_string() -> *const c_char {
    b"3.1.2 Fake\0".as_ptr() as *const c_char
}

unsafe extern "C" fn fake_get_monitors(count: *mut c_int) -> *mut *mut GLFWmonitor {
    with_fake(|fake| {
        *count = fake.monitors.len() as c_int;
        fake.monitors.as_mut_ptr()
    })
}

unsafe extern "C" fn fake_get_primary_monitor() -> *mut GLFWmonitor {
    with_fake(|fake| fake.monitors.first().copied().unwrap_or(std::ptr::null_mut()))
}

unsafe extern "C" fn fake_get_monitor_name(monitor: *mut GLFWmonitor) -> *const c_char {
    with_fake(|fake| {
        fake.monitor_names
            .get(&(monitor as usize))
            .map_or(std::ptr::null(), |name| name.as_ptr())
    })
}

unsafe extern "C" fn fake_get_video_modes(_monitor: *mut GLFWmonitor, count: *mut c_int) -> *const GLFWvidmode {
    with_fake(|fake| {
        *count = fake.modes.len() as c_int;
        fake.modes.as_ptr()
    })
}

unsafe extern "C" fn fake_get_video_mode(_monitor: *mut GLFWmonitor) -> *const GLFWvidmode {
    with_fake(|fake| fake.modes.last().map_or(std::ptr::null(), |mode| mode as *const GLFWvidmode))
}

unsafe extern "C" fn fake_get_monitor_pos(monitor: *mut GLFWmonitor, x: *mut c_int, y: *mut c_int) {
    // Side by side, the second one right of the first
    *x = if monitor as usize == MONITOR_2 { 1920 } else { 0 };
    *y = 0;
}

unsafe extern "C" fn fake_get_monitor_physical_size(
    _monitor: *mut GLFWmonitor,
    width: *mut c_int,
    height: *mut c_int,
) {
    *width = 600;
    *height = 340;
}

unsafe extern "C" fn fake_set_gamma(_monitor: *mut GLFWmonitor, gamma: c_float) {
    with_fake(|fake| fake.gamma = Some(gamma));
}

unsafe extern "C" fn fake_get_gamma_ramp(_monitor: *mut GLFWmonitor) -> *const GLFWgammaramp {
    with_fake(|fake| {
        let FakeNative {
            gamma_ramp,
            ramp_view,
            ..
        } = fake;
        let Some((red, green, blue)) = gamma_ramp.as_mut() else {
            return std::ptr::null();
        };
        let view = ramp_view.insert(GLFWgammaramp {
            red: red.as_mut_ptr(),
            green: green.as_mut_ptr(),
            blue: blue.as_mut_ptr(),
            size: red.len() as c_uint,
        });
        view as *const GLFWgammaramp
    })
}

unsafe extern "C" fn fake_set_gamma_ramp(_monitor: *mut GLFWmonitor, ramp: *const GLFWgammaramp) {
    let ramp = &*ramp;
    let channel = |ptr: *mut u16| std::slice::from_raw_parts(ptr, ramp.size as usize).to_vec();
    let copy = (channel(ramp.red), channel(ramp.green), channel(ramp.blue));
    with_fake(|fake| fake.gamma_ramp = Some(copy));
}

unsafe extern "C" fn fake_default_window_hints() {
    with_fake(|fake| fake.hints.clear());
}

unsafe extern "C" fn fake_window_hint(target: c_int, hint: c_int) {
    with_fake(|fake| fake.hints.push((target, hint)));
}

unsafe extern "C" fn fake_create_window(
    width: c_int,
    height: c_int,
    title: *const c_char,
    monitor: *mut GLFWmonitor,
    _share: *mut GLFWwindow,
) -> *mut GLFWwindow {
    let title = CStr::from_ptr(title).to_string_lossy().into_owned();
    with_fake(|fake| {
        if fake.fail_create_window {
            return std::ptr::null_mut();
        }
        fake.next_window += 1;
        let addr = 0x1000 + fake.next_window * 0x10;
        fake.windows.insert(
            addr,
            FakeWindow {
                title,
                pos: (0, 0),
                size: (width, height),
                should_close: GL_FALSE,
                visible: true,
                monitor: monitor as usize,
                ..FakeWindow::default()
            },
        );
        addr as *mut GLFWwindow
    })
}

unsafe extern "C" fn fake_destroy_window(window: *mut GLFWwindow) {
    with_fake(|fake| {
        let addr = window as usize;
        fake.windows.remove(&addr);
        fake.installed.retain(|(_, w), _| *w != addr);
        fake.destroyed.push(addr);
    });
}

fn with_window<R: Default>(window: *mut GLFWwindow, f: impl FnOnce(&mut FakeWindow) -> R) -> R {
    with_fake(|fake| fake.windows.get_mut(&(window as usize)).map(f).unwrap_or_default())
}

unsafe extern "C" fn fake_window_should_close(window: *mut GLFWwindow) -> c_int {
    with_window(window, |w| w.should_close)
}

unsafe extern "C" fn fake_set_window_should_close(window: *mut GLFWwindow, value: c_int) {
    with_window(window, |w| w.should_close = value);
}

unsafe extern "C" fn fake_set_window_title(window: *mut GLFWwindow, title: *const c_char) {
    let title = CStr::from_ptr(title).to_string_lossy().into_owned();
    with_window(window, |w| w.title = title);
}

unsafe extern "C" fn fake_get_window_pos(window: *mut GLFWwindow, x: *mut c_int, y: *mut c_int) {
    let (px, py) = with_window(window, |w| w.pos);
    *x = px;
    *y = py;
}

unsafe extern "C" fn fake_set_window_pos(window: *mut GLFWwindow, x: c_int, y: c_int) {
    with_window(window, |w| w.pos = (x, y));
}

unsafe extern "C" fn fake_get_window_size(window: *mut GLFWwindow, width: *mut c_int, height: *mut c_int) {
    let (w, h) = with_window(window, |w| w.size);
    *width = w;
    *height = h;
}

unsafe extern "C" fn fake_set_window_size(window: *mut GLFWwindow, width: c_int, height: c_int) {
    with_window(window, |w| w.size = (width, height));
}

unsafe extern "C" fn fake_get_framebuffer_size(window: *mut GLFWwindow, width: *mut c_int, height: *mut c_int) {
    // A 2x content scale, like a high-DPI display
    let (w, h) = with_window(window, |w| w.size);
    *width = w * 2;
    *height = h * 2;
}

unsafe extern "C" fn fake_iconify_window(window: *mut GLFWwindow) {
    with_window(window, |w| w.iconified = true);
}

unsafe extern "C" fn fake_restore_window(window: *mut GLFWwindow) {
    with_window(window, |w| w.iconified = false);
}

unsafe extern "C" fn fake_show_window(window: *mut GLFWwindow) {
    with_window(window, |w| w.visible = true);
}

unsafe extern "C" fn fake_hide_window(window: *mut GLFWwindow) {
    with_window(window, |w| w.visible = false);
}

unsafe extern "C" fn fake_get_window_monitor(window: *mut GLFWwindow) -> *mut GLFWmonitor {
    with_window(window, |w| w.monitor) as *mut GLFWmonitor
}

unsafe extern "C" fn fake_get_window_attrib(window: *mut GLFWwindow, attrib: c_int) -> c_int {
    with_window(window, |w| match attrib {
        ICONIFIED => w.iconified as c_int,
        VISIBLE => w.visible as c_int,
        CONTEXT_VERSION_MAJOR => 3,
        _ => GL_FALSE,
    })
}

unsafe extern "C" fn fake_make_context_current(window: *mut GLFWwindow) {
    with_fake(|fake| fake.current_context = window as usize);
}

unsafe extern "C" fn fake_get_current_context() -> *mut GLFWwindow {
    with_fake(|fake| fake.current_context as *mut GLFWwindow)
}

unsafe extern "C" fn fake_extension_supported(extension: *const c_char) -> c_int {
    let extension = CStr::from_ptr(extension).to_bytes();
    let current = with_fake(|fake| fake.current_context != 0);
    (current && extension.starts_with(b"GL_ARB_")) as c_int
}

unsafe extern "C" fn fake_gl_clear() {}

unsafe extern "C" fn fake_get_proc_address(name: *const c_char) -> Option<GLFWglproc> {
    (CStr::from_ptr(name).to_bytes() == b"glClear").then_some(fake_gl_clear as GLFWglproc)
}

unsafe extern "C" fn fake_swap_buffers(_window: *mut GLFWwindow) {
    with_fake(|fake| fake.swaps += 1);
}

unsafe extern "C" fn fake_swap_interval(interval: c_int) {
    with_fake(|fake| fake.swap_interval = Some(interval));
}

unsafe extern "C" fn fake_poll_events() {
    with_fake(|fake| fake.polls += 1);
    while let Some(event) = with_fake(|fake| fake.pending.pop_front()) {
        fire(event);
    }
}

unsafe extern "C" fn fake_get_key(_window: *mut GLFWwindow, key: c_int) -> c_int {
    with_fake(|fake| if fake.pressed_keys.contains(&key) { PRESS } else { RELEASE })
}

unsafe extern "C" fn fake_get_mouse_button(_window: *mut GLFWwindow, button: c_int) -> c_int {
    with_fake(|fake| {
        if fake.pressed_buttons.contains(&button) {
            PRESS
        } else {
            RELEASE
        }
    })
}

unsafe extern "C" fn fake_get_cursor_pos(_window: *mut GLFWwindow, x: *mut c_double, y: *mut c_double) {
    let (cx, cy) = with_fake(|fake| fake.cursor);
    *x = cx;
    *y = cy;
}

unsafe extern "C" fn fake_set_cursor_pos(_window: *mut GLFWwindow, x: c_double, y: c_double) {
    with_fake(|fake| fake.cursor = (x, y));
}

unsafe extern "C" fn fake_get_input_mode(window: *mut GLFWwindow, mode: c_int) -> c_int {
    with_fake(|fake| {
        fake.input_modes
            .iter()
            .rev()
            .find(|&&(w, m, _)| w == window as usize && m == mode)
            .map(|&(_, _, value)| value)
            .unwrap_or(if mode == CURSOR { CURSOR_NORMAL } else { GL_FALSE })
    })
}

unsafe extern "C" fn fake_set_input_mode(window: *mut GLFWwindow, mode: c_int, value: c_int) {
    with_fake(|fake| fake.input_modes.push((window as usize, mode, value)));
}

unsafe extern "C" fn fake_joystick_present(joy: c_int) -> c_int {
    with_fake(|fake| fake.joysticks.contains_key(&joy) as c_int)
}

unsafe extern "C" fn fake_get_joystick_axes(joy: c_int, count: *mut c_int) -> *const c_float {
    with_fake(|fake| match fake.joysticks.get(&joy) {
        Some(joystick) => {
            *count = joystick.axes.len() as c_int;
            joystick.axes.as_ptr()
        }
        None => {
            *count = 0;
            std::ptr::null()
        }
    })
}

unsafe extern "C" fn fake_get_joystick_buttons(joy: c_int, count: *mut c_int) -> *const c_uchar {
    with_fake(|fake| match fake.joysticks.get(&joy) {
        Some(joystick) => {
            *count = joystick.buttons.len() as c_int;
            joystick.buttons.as_ptr()
        }
        None => {
            *count = 0;
            std::ptr::null()
        }
    })
}

unsafe extern "C" fn fake_get_joystick_name(joy: c_int) -> *const c_char {
    with_fake(|fake| fake.joysticks.get(&joy).map_or(std::ptr::null(), |j| j.name.as_ptr()))
}

unsafe extern "C" fn fake_set_clipboard_string(window: *mut GLFWwindow, text: *const c_char) {
    let text = CStr::from_ptr(text).to_owned();
    with_window(window, |w| w.clipboard = Some(text));
}

unsafe extern "C" fn fake_get_clipboard_string(window: *mut GLFWwindow) -> *const c_char {
    with_window(window, |w| w.clipboard.as_ref().map(|text| text.as_ptr())).unwrap_or(std::ptr::null())
}

/// Function table backed by the thread's fake
pub(crate) fn fake_api() -> GlfwApi {
    GlfwApi {
        init: fake_init,
        terminate: fake_terminate,
        get_version: fake_get_version,
        get_version_string: fake_get_version_string,
        get_monitors: fake_get_monitors,
        get_primary_monitor: fake_get_primary_monitor,
        get_monitor_name: fake_get_monitor_name,
        get_video_modes: fake_get_video_modes,
        get_video_mode: fake_get_video_mode,
        get_monitor_pos: fake_get_monitor_pos,
        get_monitor_physical_size: fake_get_monitor_physical_size,
        set_gamma: fake_set_gamma,
        get_gamma_ramp: fake_get_gamma_ramp,
        set_gamma_ramp: fake_set_gamma_ramp,
        default_window_hints: fake_default_window_hints,
        window_hint: fake_window_hint,
        create_window: fake_create_window,
        destroy_window: fake_destroy_window,
        window_should_close: fake_window_should_close,
        set_window_should_close: fake_set_window_should_close,
        set_window_title: fake_set_window_title,
        get_window_pos: fake_get_window_pos,
        set_window_pos: fake_set_window_pos,
        get_window_size: fake_get_window_size,
        set_window_size: fake_set_window_size,
        get_framebuffer_size: fake_get_framebuffer_size,
        iconify_window: fake_iconify_window,
        restore_window: fake_restore_window,
        show_window: fake_show_window,
        hide_window: fake_hide_window,
        get_window_monitor: fake_get_window_monitor,
        get_window_attrib: fake_get_window_attrib,
        make_context_current: fake_make_context_current,
        get_current_context: fake_get_current_context,
        swap_buffers: fake_swap_buffers,
        swap_interval: fake_swap_interval,
        extension_supported: fake_extension_supported,
        get_proc_address: fake_get_proc_address,
        poll_events: fake_poll_events,
        wait_events: fake_poll_events,
        get_key: fake_get_key,
        get_mouse_button: fake_get_mouse_button,
        get_cursor_pos: fake_get_cursor_pos,
        set_cursor_pos: fake_set_cursor_pos,
        get_input_mode: fake_get_input_mode,
        set_input_mode: fake_set_input_mode,
        joystick_present: fake_joystick_present,
        get_joystick_axes: fake_get_joystick_axes,
        get_joystick_buttons: fake_get_joystick_buttons,
        get_joystick_name: fake_get_joystick_name,
        set_clipboard_string: fake_set_clipboard_string,
        get_clipboard_string: fake_get_clipboard_string,
        set_error_callback: fake_set_error_callback,
        set_monitor_callback: fake_set_monitor_callback,
        set_window_pos_callback: fake_set_window_pos_callback,
        set_window_size_callback: fake_set_window_size_callback,
        set_window_close_callback: fake_set_window_close_callback,
        set_window_refresh_callback: fake_set_window_refresh_callback,
        set_window_focus_callback: fake_set_window_focus_callback,
        set_window_iconify_callback: fake_set_window_iconify_callback,
        set_framebuffer_size_callback: fake_set_framebuffer_size_callback,
        set_key_callback: fake_set_key_callback,
        set_char_callback: fake_set_char_callback,
        set_char_mods_callback: Some(fake_set_char_mods_callback),
        set_mouse_button_callback: fake_set_mouse_button_callback,
        set_cursor_pos_callback: fake_set_cursor_pos_callback,
        set_cursor_enter_callback: fake_set_cursor_enter_callback,
        set_scroll_callback: fake_set_scroll_callback,
    }
}

/// Table of a GLFW 3.0 library, which has no `glfwSetCharModsCallback`
pub(crate) fn fake_api_3_0() -> GlfwApi {
    with_fake(|fake| fake.version = (3, 0, 4));
    GlfwApi {
        set_char_mods_callback: None,
        ..fake_api()
    }
}

/// A monitor hot-plug event for the first fake monitor
pub(crate) fn monitor_connected() -> FakeEvent {
    FakeEvent::Monitor(MONITOR_1, CONNECTED)
}
