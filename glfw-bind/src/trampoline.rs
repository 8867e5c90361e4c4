//! Native entry points for every callback slot
//!
//! Each slot has one `extern "C"` trampoline with static lifetime. The native
//! library only ever holds pointers to these functions, never to a handler, so
//! a registration can be replaced or dropped at any time without leaving GLFW
//! with a dangling pointer. A trampoline decodes its raw arguments, looks up
//! the handler for `(source, slot)` at call time and runs it.

use crate::callback::{CallbackEvent, Slot};
use crate::constants::{self, GL_FALSE};
use crate::ffi::*;
use crate::keys::{decode_char, decode_key};
use crate::registry::{self, AdapterKey};
use crate::types::{Action, Modifiers, MonitorHandle, MonitorStatus, WindowHandle};
use std::any::Any;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::ffi::CStr;
use std::os::raw::{c_char, c_double, c_int, c_uint};
use std::panic::{self, AssertUnwindSafe};

/// Trampoline for one slot, typed for its native registration function
#[derive(Debug, Clone, Copy)]
pub(crate) enum NativeCallback {
    Error(GLFWerrorfun),
    Monitor(GLFWmonitorfun),
    WindowPos(GLFWwindowposfun),
    WindowSize(GLFWwindowsizefun),
    WindowClose(GLFWwindowclosefun),
    WindowRefresh(GLFWwindowrefreshfun),
    WindowFocus(GLFWwindowfocusfun),
    WindowIconify(GLFWwindowiconifyfun),
    FramebufferSize(GLFWframebuffersizefun),
    Key(GLFWkeyfun),
    Char(GLFWcharmodsfun),
    MouseButton(GLFWmousebuttonfun),
    CursorPos(GLFWcursorposfun),
    CursorEnter(GLFWcursorenterfun),
    Scroll(GLFWscrollfun),
}

impl NativeCallback {
    pub(crate) fn for_slot(slot: Slot) -> Self {
        match slot {
            Slot::Error => NativeCallback::Error(error_trampoline),
            Slot::Monitor => NativeCallback::Monitor(monitor_trampoline),
            Slot::WindowPos => NativeCallback::WindowPos(window_pos_trampoline),
            Slot::WindowSize => NativeCallback::WindowSize(window_size_trampoline),
            Slot::WindowClose => NativeCallback::WindowClose(window_close_trampoline),
            Slot::WindowRefresh => NativeCallback::WindowRefresh(window_refresh_trampoline),
            Slot::WindowFocus => NativeCallback::WindowFocus(window_focus_trampoline),
            Slot::WindowIconify => NativeCallback::WindowIconify(window_iconify_trampoline),
            Slot::FramebufferSize => NativeCallback::FramebufferSize(framebuffer_size_trampoline),
            Slot::Key => NativeCallback::Key(key_trampoline),
            Slot::Char => NativeCallback::Char(char_mods_trampoline),
            Slot::MouseButton => NativeCallback::MouseButton(mouse_button_trampoline),
            Slot::CursorPos => NativeCallback::CursorPos(cursor_pos_trampoline),
            Slot::CursorEnter => NativeCallback::CursorEnter(cursor_enter_trampoline),
            Slot::Scroll => NativeCallback::Scroll(scroll_trampoline),
        }
    }

    pub(crate) fn slot(&self) -> Slot {
        match self {
            NativeCallback::Error(_) => Slot::Error,
            NativeCallback::Monitor(_) => Slot::Monitor,
            NativeCallback::WindowPos(_) => Slot::WindowPos,
            NativeCallback::WindowSize(_) => Slot::WindowSize,
            NativeCallback::WindowClose(_) => Slot::WindowClose,
            NativeCallback::WindowRefresh(_) => Slot::WindowRefresh,
            NativeCallback::WindowFocus(_) => Slot::WindowFocus,
            NativeCallback::WindowIconify(_) => Slot::WindowIconify,
            NativeCallback::FramebufferSize(_) => Slot::FramebufferSize,
            NativeCallback::Key(_) => Slot::Key,
            NativeCallback::Char(_) => Slot::Char,
            NativeCallback::MouseButton(_) => Slot::MouseButton,
            NativeCallback::CursorPos(_) => Slot::CursorPos,
            NativeCallback::CursorEnter(_) => Slot::CursorEnter,
            NativeCallback::Scroll(_) => Slot::Scroll,
        }
    }

    /// Install (or with `install == false`, clear) this trampoline natively
    ///
    /// `window` is ignored for global slots. Returns whether a callback was
    /// previously registered for the slot. The char slot uses
    /// `glfwSetCharModsCallback` when the library has it and falls back to
    /// `glfwSetCharCallback` otherwise.
    ///
    /// # Safety
    /// `window` must be a live window of the library `api` came from, or
    /// null for global slots.
    pub(crate) unsafe fn register(self, api: &GlfwApi, window: *mut GLFWwindow, install: bool) -> bool {
        match self {
            NativeCallback::Error(f) => (api.set_error_callback)(install.then_some(f)).is_some(),
            NativeCallback::Monitor(f) => {
                (api.set_monitor_callback)(install.then_some(f)).is_some()
            }
            NativeCallback::WindowPos(f) => {
                (api.set_window_pos_callback)(window, install.then_some(f)).is_some()
            }
            NativeCallback::WindowSize(f) => {
                (api.set_window_size_callback)(window, install.then_some(f)).is_some()
            }
            NativeCallback::WindowClose(f) => {
                (api.set_window_close_callback)(window, install.then_some(f)).is_some()
            }
            NativeCallback::WindowRefresh(f) => {
                (api.set_window_refresh_callback)(window, install.then_some(f)).is_some()
            }
            NativeCallback::WindowFocus(f) => {
                (api.set_window_focus_callback)(window, install.then_some(f)).is_some()
            }
            NativeCallback::WindowIconify(f) => {
                (api.set_window_iconify_callback)(window, install.then_some(f)).is_some()
            }
            NativeCallback::FramebufferSize(f) => {
                (api.set_framebuffer_size_callback)(window, install.then_some(f)).is_some()
            }
            NativeCallback::Key(f) => {
                (api.set_key_callback)(window, install.then_some(f)).is_some()
            }
            NativeCallback::Char(f) => match api.set_char_mods_callback {
                Some(set_char_mods_callback) => {
                    set_char_mods_callback(window, install.then_some(f)).is_some()
                }
                // GLFW 3.0 only reports the code point
                None => {
                    let f: GLFWcharfun = char_trampoline;
                    (api.set_char_callback)(window, install.then_some(f)).is_some()
                }
            },
            NativeCallback::MouseButton(f) => {
                (api.set_mouse_button_callback)(window, install.then_some(f)).is_some()
            }
            NativeCallback::CursorPos(f) => {
                (api.set_cursor_pos_callback)(window, install.then_some(f)).is_some()
            }
            NativeCallback::CursorEnter(f) => {
                (api.set_cursor_enter_callback)(window, install.then_some(f)).is_some()
            }
            NativeCallback::Scroll(f) => {
                (api.set_scroll_callback)(window, install.then_some(f)).is_some()
            }
        }
    }
}

thread_local! {
    /// Events that arrived while the handler for their key was running
    static DEFERRED: RefCell<VecDeque<(AdapterKey, CallbackEvent)>> = RefCell::new(VecDeque::new());
}

/// Run the handler registered for the event's source and slot
///
/// Unwinding never crosses back into C. A handler that panics or returns an
/// error is reported through the error slot with [`constants::HANDLER_FAILED`].
///
/// An event for a handler that is still running (it polled events itself) is
/// deferred and delivered, in order, once that handler returns.
pub(crate) fn dispatch(event: CallbackEvent) {
    let key = AdapterKey::new(event.source(), event.slot());
    // Cloned out so the handler may re-register its own slot
    let Some(callback) = registry::with(|registry| registry.callback(&key)) else {
        log::trace!("No handler for {} event from {:?}", key.slot, key.source);
        return;
    };

    let outcome = {
        let Ok(mut handler) = callback.try_borrow_mut() else {
            log::debug!("Deferring nested {} event until its handler returns", key.slot);
            DEFERRED.with(|deferred| deferred.borrow_mut().push_back((key, event)));
            return;
        };
        panic::catch_unwind(AssertUnwindSafe(|| (&mut **handler)(&event)))
    };
    drop(callback);

    match outcome {
        Ok(Ok(())) => {}
        Ok(Err(e)) => report_handler_failure(key.slot, &e.to_string()),
        Err(payload) => report_handler_failure(key.slot, &panic_message(payload.as_ref())),
    }

    while let Some(event) = take_deferred(&key) {
        dispatch(event);
    }
}

fn take_deferred(key: &AdapterKey) -> Option<CallbackEvent> {
    DEFERRED.with(|deferred| {
        let mut deferred = deferred.borrow_mut();
        let index = deferred.iter().position(|(k, _)| k == key)?;
        deferred.remove(index).map(|(_, event)| event)
    })
}

fn report_handler_failure(slot: Slot, message: &str) {
    log::error!("{} handler failed: {}", slot, message);
    if slot != Slot::Error {
        dispatch(CallbackEvent::Error {
            code: constants::HANDLER_FAILED,
            description: format!("{} handler failed: {}", slot, message),
        });
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "handler panicked".to_string()
    }
}

fn window_for(ptr: *mut GLFWwindow, slot: Slot) -> Option<WindowHandle> {
    let window = WindowHandle::from_ptr(ptr);
    if window.is_none() {
        log::warn!("Dropping {} event with a null window", slot);
    }
    window
}

fn action_for(raw: c_int, slot: Slot) -> Option<Action> {
    let action = Action::from_raw(raw);
    if action.is_none() {
        log::warn!("Dropping {} event with unknown action {}", slot, raw);
    }
    action
}

extern "C" fn error_trampoline(code: c_int, description: *const c_char) {
    let description = if description.is_null() {
        String::new()
    } else {
        // SAFETY: GLFW passes a NUL-terminated string valid for this call
        unsafe { CStr::from_ptr(description) }
            .to_string_lossy()
            .into_owned()
    };
    dispatch(CallbackEvent::Error { code, description });
}

extern "C" fn monitor_trampoline(monitor: *mut GLFWmonitor, event: c_int) {
    let Some(monitor) = MonitorHandle::from_ptr(monitor) else {
        log::warn!("Dropping monitor event with a null monitor");
        return;
    };
    let Some(status) = MonitorStatus::from_raw(event) else {
        log::warn!("Dropping monitor event with unknown status 0x{:X}", event);
        return;
    };
    dispatch(CallbackEvent::Monitor { monitor, status });
}

extern "C" fn window_pos_trampoline(window: *mut GLFWwindow, x: c_int, y: c_int) {
    if let Some(window) = window_for(window, Slot::WindowPos) {
        dispatch(CallbackEvent::WindowPos { window, x, y });
    }
}

extern "C" fn window_size_trampoline(window: *mut GLFWwindow, width: c_int, height: c_int) {
    if let Some(window) = window_for(window, Slot::WindowSize) {
        dispatch(CallbackEvent::WindowSize {
            window,
            width,
            height,
        });
    }
}

extern "C" fn window_close_trampoline(window: *mut GLFWwindow) {
    if let Some(window) = window_for(window, Slot::WindowClose) {
        dispatch(CallbackEvent::WindowClose { window });
    }
}

extern "C" fn window_refresh_trampoline(window: *mut GLFWwindow) {
    if let Some(window) = window_for(window, Slot::WindowRefresh) {
        dispatch(CallbackEvent::WindowRefresh { window });
    }
}

extern "C" fn window_focus_trampoline(window: *mut GLFWwindow, focused: c_int) {
    if let Some(window) = window_for(window, Slot::WindowFocus) {
        dispatch(CallbackEvent::WindowFocus {
            window,
            focused: focused != GL_FALSE,
        });
    }
}

extern "C" fn window_iconify_trampoline(window: *mut GLFWwindow, iconified: c_int) {
    if let Some(window) = window_for(window, Slot::WindowIconify) {
        dispatch(CallbackEvent::WindowIconify {
            window,
            iconified: iconified != GL_FALSE,
        });
    }
}

extern "C" fn framebuffer_size_trampoline(window: *mut GLFWwindow, width: c_int, height: c_int) {
    if let Some(window) = window_for(window, Slot::FramebufferSize) {
        dispatch(CallbackEvent::FramebufferSize {
            window,
            width,
            height,
        });
    }
}

extern "C" fn key_trampoline(
    window: *mut GLFWwindow,
    key: c_int,
    scancode: c_int,
    action: c_int,
    mods: c_int,
) {
    let Some(window) = window_for(window, Slot::Key) else {
        return;
    };
    let Some(action) = action_for(action, Slot::Key) else {
        return;
    };
    dispatch(CallbackEvent::Key {
        window,
        key: decode_key(key),
        scancode,
        action,
        mods: Modifiers::from_raw(mods),
    });
}

extern "C" fn char_trampoline(window: *mut GLFWwindow, codepoint: c_uint) {
    char_mods_trampoline(window, codepoint, 0);
}

extern "C" fn char_mods_trampoline(window: *mut GLFWwindow, codepoint: c_uint, mods: c_int) {
    if let Some(window) = window_for(window, Slot::Char) {
        dispatch(CallbackEvent::Char {
            window,
            character: decode_char(codepoint),
            mods: Modifiers::from_raw(mods),
        });
    }
}

extern "C" fn mouse_button_trampoline(
    window: *mut GLFWwindow,
    button: c_int,
    action: c_int,
    mods: c_int,
) {
    let Some(window) = window_for(window, Slot::MouseButton) else {
        return;
    };
    let Some(action) = action_for(action, Slot::MouseButton) else {
        return;
    };
    dispatch(CallbackEvent::MouseButton {
        window,
        button,
        action,
        mods: Modifiers::from_raw(mods),
    });
}

extern "C" fn cursor_pos_trampoline(window: *mut GLFWwindow, x: c_double, y: c_double) {
    if let Some(window) = window_for(window, Slot::CursorPos) {
        dispatch(CallbackEvent::CursorPos { window, x, y });
    }
}

extern "C" fn cursor_enter_trampoline(window: *mut GLFWwindow, entered: c_int) {
    if let Some(window) = window_for(window, Slot::CursorEnter) {
        dispatch(CallbackEvent::CursorEnter {
            window,
            entered: entered != GL_FALSE,
        });
    }
}

extern "C" fn scroll_trampoline(window: *mut GLFWwindow, dx: c_double, dy: c_double) {
    if let Some(window) = window_for(window, Slot::Scroll) {
        dispatch(CallbackEvent::Scroll { window, dx, dy });
    }
}
