//! The GLFW context
//!
//! [`Glfw`] owns the loaded library and is the only way to reach it. It is
//! neither `Send` nor `Sync`: GLFW must be driven from the thread that
//! initialized it, and the callback registry is per-thread.

use crate::callback::{CallbackEvent, EventSource, Handler, Slot};
use crate::config::LoaderConfig;
use crate::constants::{self, GL_FALSE, GL_TRUE, PRESS};
use crate::ffi::{GLFWgammaramp, GLFWglproc, GLFWvidmode, GLFWwindow, GlfwApi};
use crate::keys::{self, KeyValue};
use crate::loader::{self, LibraryCandidate};
use crate::registry::{self, Adapter, AdapterKey};
use crate::trampoline::NativeCallback;
use crate::types::{
    Action, BindingError, GammaRamp, Modifiers, MonitorHandle, MonitorStatus, Result, Version,
    VideoMode, WindowHandle,
};
use libloading::Library;
use std::ffi::{CStr, CString};
use std::marker::PhantomData;
use std::os::raw::{c_char, c_int};
use std::ptr;

/// A loaded GLFW library
pub struct Glfw {
    api: GlfwApi,
    initialized: bool,
    origin: Option<LibraryCandidate>,
    // Dropped last; every pointer in `api` points into it
    _library: Option<Library>,
    _not_send: PhantomData<*const ()>,
}

impl Glfw {
    /// Locate and load the shared library
    pub fn load(config: &LoaderConfig) -> Result<Self> {
        let loaded = loader::load(config)?;
        Ok(Self {
            api: loaded.api,
            initialized: false,
            origin: Some(loaded.candidate),
            _library: Some(loaded.library),
            _not_send: PhantomData,
        })
    }

    /// Wrap an already resolved function table
    ///
    /// # Safety
    /// Every pointer in `api` must stay valid for the lifetime of the
    /// returned value and behave like the matching GLFW 3 function.
    pub unsafe fn from_api(api: GlfwApi) -> Self {
        Self {
            api,
            initialized: false,
            origin: None,
            _library: None,
            _not_send: PhantomData,
        }
    }

    /// Where the library was loaded from, `None` for [`Glfw::from_api`]
    pub fn origin(&self) -> Option<&LibraryCandidate> {
        self.origin.as_ref()
    }

    /// Initialize GLFW; calling it again is a no-op
    pub fn init(&mut self) -> Result<()> {
        if self.initialized {
            log::debug!("GLFW already initialized");
            return Ok(());
        }
        if unsafe { (self.api.init)() } == GL_FALSE {
            return Err(BindingError::InitFailed);
        }
        self.initialized = true;
        log::info!("GLFW {} initialized", self.version());
        Ok(())
    }

    /// Terminate GLFW, destroying all windows
    ///
    /// Window callbacks and the monitor callback are dropped with it; the
    /// error callback survives, as it does natively.
    pub fn terminate(&mut self) {
        if !self.initialized {
            return;
        }
        unsafe { (self.api.terminate)() };
        self.initialized = false;

        let released = registry::with(|r| r.remove_where(|key| key.slot != Slot::Error));
        log::debug!("GLFW terminated, released {} callback(s)", released.len());
        drop(released);
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn require_init(&self) -> Result<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(BindingError::NotInitialized)
        }
    }

    pub fn version(&self) -> Version {
        let (mut major, mut minor, mut revision) = (0, 0, 0);
        unsafe { (self.api.get_version)(&mut major, &mut minor, &mut revision) };
        Version {
            major,
            minor,
            revision,
        }
    }

    /// Compile-time version string of the library
    pub fn version_string(&self) -> String {
        unsafe { string_from_ptr((self.api.get_version_string)()) }.unwrap_or_default()
    }

    // ---------------------------------------------------------------------
    // Windows
    // ---------------------------------------------------------------------

    pub fn default_window_hints(&self) {
        unsafe { (self.api.default_window_hints)() };
    }

    /// Set a hint for the next created window
    pub fn window_hint(&self, target: c_int, hint: c_int) -> Result<()> {
        if !constants::is_window_hint_target(target) {
            return Err(BindingError::InvalidArgument(format!(
                "0x{:X} is not a window hint",
                target
            )));
        }
        unsafe { (self.api.window_hint)(target, hint) };
        Ok(())
    }

    /// Create a window, full screen on `monitor` if given
    pub fn create_window(
        &mut self,
        width: i32,
        height: i32,
        title: &str,
        monitor: Option<MonitorHandle>,
        share: Option<WindowHandle>,
    ) -> Result<WindowHandle> {
        self.require_init()?;
        check_size(width, height)?;
        let title = c_string(title, "window title")?;

        let window = unsafe {
            (self.api.create_window)(
                width,
                height,
                title.as_ptr(),
                monitor.map_or(ptr::null_mut(), |m| m.as_ptr()),
                share.map_or(ptr::null_mut(), |w| w.as_ptr()),
            )
        };
        let window = WindowHandle::from_ptr(window).ok_or(BindingError::WindowCreationFailed)?;
        log::debug!("Created {} ({}x{})", window, width, height);
        Ok(window)
    }

    /// Destroy a window and drop every callback registered for it
    pub fn destroy_window(&mut self, window: WindowHandle) {
        unsafe { (self.api.destroy_window)(window.as_ptr()) };
        let released = registry::with(|r| r.remove_window(window));
        log::debug!("Destroyed {}, released {} callback(s)", window, released.len());
        drop(released);
    }

    pub fn window_should_close(&self, window: WindowHandle) -> bool {
        unsafe { (self.api.window_should_close)(window.as_ptr()) != GL_FALSE }
    }

    pub fn set_window_should_close(&self, window: WindowHandle, value: bool) {
        let value = if value { GL_TRUE } else { GL_FALSE };
        unsafe { (self.api.set_window_should_close)(window.as_ptr(), value) };
    }

    pub fn set_window_title(&self, window: WindowHandle, title: &str) -> Result<()> {
        let title = c_string(title, "window title")?;
        unsafe { (self.api.set_window_title)(window.as_ptr(), title.as_ptr()) };
        Ok(())
    }

    pub fn window_pos(&self, window: WindowHandle) -> (i32, i32) {
        let (mut x, mut y) = (0, 0);
        unsafe { (self.api.get_window_pos)(window.as_ptr(), &mut x, &mut y) };
        (x, y)
    }

    pub fn set_window_pos(&self, window: WindowHandle, x: i32, y: i32) {
        unsafe { (self.api.set_window_pos)(window.as_ptr(), x, y) };
    }

    pub fn window_size(&self, window: WindowHandle) -> (i32, i32) {
        let (mut width, mut height) = (0, 0);
        unsafe { (self.api.get_window_size)(window.as_ptr(), &mut width, &mut height) };
        (width, height)
    }

    pub fn set_window_size(&self, window: WindowHandle, width: i32, height: i32) -> Result<()> {
        check_size(width, height)?;
        unsafe { (self.api.set_window_size)(window.as_ptr(), width, height) };
        Ok(())
    }

    /// Framebuffer size in pixels, which differs from the window size on
    /// high-DPI displays
    pub fn framebuffer_size(&self, window: WindowHandle) -> (i32, i32) {
        let (mut width, mut height) = (0, 0);
        unsafe { (self.api.get_framebuffer_size)(window.as_ptr(), &mut width, &mut height) };
        (width, height)
    }

    pub fn iconify_window(&self, window: WindowHandle) {
        unsafe { (self.api.iconify_window)(window.as_ptr()) };
    }

    pub fn restore_window(&self, window: WindowHandle) {
        unsafe { (self.api.restore_window)(window.as_ptr()) };
    }

    pub fn show_window(&self, window: WindowHandle) {
        unsafe { (self.api.show_window)(window.as_ptr()) };
    }

    pub fn hide_window(&self, window: WindowHandle) {
        unsafe { (self.api.hide_window)(window.as_ptr()) };
    }

    /// Monitor of a full screen window, `None` for a windowed one
    pub fn window_monitor(&self, window: WindowHandle) -> Option<MonitorHandle> {
        MonitorHandle::from_ptr(unsafe { (self.api.get_window_monitor)(window.as_ptr()) })
    }

    /// Query a window or context attribute such as `FOCUSED`
    pub fn window_attrib(&self, window: WindowHandle, attrib: c_int) -> Result<i32> {
        if !constants::is_window_attribute(attrib) {
            return Err(BindingError::InvalidArgument(format!(
                "0x{:X} is not a window attribute",
                attrib
            )));
        }
        Ok(unsafe { (self.api.get_window_attrib)(window.as_ptr(), attrib) })
    }

    // ---------------------------------------------------------------------
    // Context
    // ---------------------------------------------------------------------

    /// Make a window's context current, or detach the current one
    pub fn make_context_current(&self, window: Option<WindowHandle>) {
        let window = window.map_or(ptr::null_mut(), |w| w.as_ptr());
        unsafe { (self.api.make_context_current)(window) };
    }

    /// Window whose context is current on this thread
    pub fn current_context(&self) -> Option<WindowHandle> {
        WindowHandle::from_ptr(unsafe { (self.api.get_current_context)() })
    }

    pub fn swap_buffers(&self, window: WindowHandle) {
        unsafe { (self.api.swap_buffers)(window.as_ptr()) };
    }

    pub fn swap_interval(&self, interval: i32) -> Result<()> {
        if interval < 0 {
            return Err(BindingError::InvalidArgument(format!(
                "swap interval must be non-negative, got {}",
                interval
            )));
        }
        unsafe { (self.api.swap_interval)(interval) };
        Ok(())
    }

    /// Whether the current context supports a client API extension
    pub fn extension_supported(&self, extension: &str) -> Result<bool> {
        let extension = c_string(extension, "extension name")?;
        Ok(unsafe { (self.api.extension_supported)(extension.as_ptr()) } != GL_FALSE)
    }

    /// Address of a client API function for the current context
    pub fn proc_address(&self, name: &str) -> Result<Option<GLFWglproc>> {
        let name = c_string(name, "function name")?;
        Ok(unsafe { (self.api.get_proc_address)(name.as_ptr()) })
    }

    // ---------------------------------------------------------------------
    // Monitors
    // ---------------------------------------------------------------------

    /// Currently connected monitors, empty before init
    pub fn monitors(&self) -> Vec<MonitorHandle> {
        let mut count: c_int = 0;
        let monitors = unsafe { (self.api.get_monitors)(&mut count) };
        if monitors.is_null() || count <= 0 {
            return Vec::new();
        }
        // SAFETY: GLFW returns `count` monitor pointers valid until the next
        // monitor change
        unsafe { std::slice::from_raw_parts(monitors, count as usize) }
            .iter()
            .filter_map(|&monitor| MonitorHandle::from_ptr(monitor))
            .collect()
    }

    pub fn primary_monitor(&self) -> Option<MonitorHandle> {
        MonitorHandle::from_ptr(unsafe { (self.api.get_primary_monitor)() })
    }

    pub fn monitor_name(&self, monitor: MonitorHandle) -> Option<String> {
        unsafe { string_from_ptr((self.api.get_monitor_name)(monitor.as_ptr())) }
    }

    /// All video modes the monitor supports
    pub fn video_modes(&self, monitor: MonitorHandle) -> Vec<VideoMode> {
        let mut count: c_int = 0;
        let modes = unsafe { (self.api.get_video_modes)(monitor.as_ptr(), &mut count) };
        if modes.is_null() || count <= 0 {
            return Vec::new();
        }
        unsafe { std::slice::from_raw_parts(modes, count as usize) }
            .iter()
            .map(VideoMode::from)
            .collect()
    }

    /// Current video mode of the monitor
    pub fn video_mode(&self, monitor: MonitorHandle) -> Option<VideoMode> {
        let mode: *const GLFWvidmode = unsafe { (self.api.get_video_mode)(monitor.as_ptr()) };
        unsafe { mode.as_ref() }.map(VideoMode::from)
    }

    /// Position of the monitor on the virtual desktop
    pub fn monitor_pos(&self, monitor: MonitorHandle) -> (i32, i32) {
        let (mut x, mut y) = (0, 0);
        unsafe { (self.api.get_monitor_pos)(monitor.as_ptr(), &mut x, &mut y) };
        (x, y)
    }

    /// Physical size of the display area in millimetres
    pub fn monitor_physical_size(&self, monitor: MonitorHandle) -> (i32, i32) {
        let (mut width, mut height) = (0, 0);
        unsafe { (self.api.get_monitor_physical_size)(monitor.as_ptr(), &mut width, &mut height) };
        (width, height)
    }

    /// Generate a gamma ramp from an exponent and apply it
    pub fn set_gamma(&self, monitor: MonitorHandle, gamma: f32) -> Result<()> {
        if !gamma.is_finite() || gamma <= 0.0 {
            return Err(BindingError::InvalidArgument(format!(
                "gamma must be a positive number, got {}",
                gamma
            )));
        }
        unsafe { (self.api.set_gamma)(monitor.as_ptr(), gamma) };
        Ok(())
    }

    pub fn gamma_ramp(&self, monitor: MonitorHandle) -> Option<GammaRamp> {
        let ramp: *const GLFWgammaramp = unsafe { (self.api.get_gamma_ramp)(monitor.as_ptr()) };
        // SAFETY: GLFW keeps the ramp and its channels alive until the next call
        unsafe { ramp.as_ref().map(|ramp| GammaRamp::from_native(ramp)) }
    }

    pub fn set_gamma_ramp(&self, monitor: MonitorHandle, ramp: &GammaRamp) -> Result<()> {
        let size = match ramp.size() {
            Some(size) if size > 0 => size,
            _ => {
                return Err(BindingError::InvalidArgument(
                    "gamma ramp channels must be non-empty and of equal length".to_string(),
                ))
            }
        };
        // GLFW copies the channels and never writes through these pointers
        let native = GLFWgammaramp {
            red: ramp.red.as_ptr() as *mut u16,
            green: ramp.green.as_ptr() as *mut u16,
            blue: ramp.blue.as_ptr() as *mut u16,
            size: size as u32,
        };
        unsafe { (self.api.set_gamma_ramp)(monitor.as_ptr(), &native) };
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Input
    // ---------------------------------------------------------------------

    /// Process pending events, running callbacks on this thread
    ///
    /// Handlers may poll again. An event for a handler that is already
    /// running is delivered after that handler returns.
    pub fn poll_events(&self) {
        unsafe { (self.api.poll_events)() };
    }

    /// Block until at least one event arrives, then process it
    pub fn wait_events(&self) {
        unsafe { (self.api.wait_events)() };
    }

    /// Last reported state of a key
    ///
    /// Printable keys are given as characters (`'A'`, `' '`), others by code.
    pub fn key(&self, window: WindowHandle, key: impl Into<KeyValue>) -> Result<Action> {
        let code = key.into().to_native()?;
        let state = unsafe { (self.api.get_key)(window.as_ptr(), code) };
        Ok(if state == PRESS {
            Action::Press
        } else {
            Action::Release
        })
    }

    /// Last reported state of a mouse button
    pub fn mouse_button(&self, window: WindowHandle, button: i32) -> Result<Action> {
        if !(keys::MOUSE_BUTTON_1..=keys::MOUSE_BUTTON_LAST).contains(&button) {
            return Err(BindingError::InvalidArgument(format!(
                "mouse button {} is out of range",
                button
            )));
        }
        let state = unsafe { (self.api.get_mouse_button)(window.as_ptr(), button) };
        Ok(if state == PRESS {
            Action::Press
        } else {
            Action::Release
        })
    }

    pub fn cursor_pos(&self, window: WindowHandle) -> (f64, f64) {
        let (mut x, mut y) = (0.0, 0.0);
        unsafe { (self.api.get_cursor_pos)(window.as_ptr(), &mut x, &mut y) };
        (x, y)
    }

    /// Move the cursor, in screen coordinates relative to the client area
    pub fn set_cursor_pos(&self, window: WindowHandle, x: f64, y: f64) -> Result<()> {
        if !x.is_finite() || !y.is_finite() {
            return Err(BindingError::InvalidArgument(format!(
                "cursor position must be finite, got ({}, {})",
                x, y
            )));
        }
        unsafe { (self.api.set_cursor_pos)(window.as_ptr(), x, y) };
        Ok(())
    }

    pub fn input_mode(&self, window: WindowHandle, mode: c_int) -> Result<i32> {
        if !constants::is_input_mode(mode) {
            return Err(BindingError::InvalidArgument(format!(
                "input mode 0x{:X} is not valid",
                mode
            )));
        }
        Ok(unsafe { (self.api.get_input_mode)(window.as_ptr(), mode) })
    }

    pub fn set_input_mode(&self, window: WindowHandle, mode: c_int, value: c_int) -> Result<()> {
        constants::check_input_mode(mode, value).map_err(BindingError::InvalidArgument)?;
        unsafe { (self.api.set_input_mode)(window.as_ptr(), mode, value) };
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Joysticks
    // ---------------------------------------------------------------------

    pub fn joystick_present(&self, joy: i32) -> Result<bool> {
        check_joystick(joy)?;
        Ok(unsafe { (self.api.joystick_present)(joy) } != GL_FALSE)
    }

    /// Axis positions in `-1.0..=1.0`, empty if the joystick is absent
    pub fn joystick_axes(&self, joy: i32) -> Result<Vec<f32>> {
        check_joystick(joy)?;
        let mut count: c_int = 0;
        let axes = unsafe { (self.api.get_joystick_axes)(joy, &mut count) };
        if axes.is_null() || count <= 0 {
            return Ok(Vec::new());
        }
        Ok(unsafe { std::slice::from_raw_parts(axes, count as usize) }.to_vec())
    }

    pub fn joystick_buttons(&self, joy: i32) -> Result<Vec<Action>> {
        check_joystick(joy)?;
        let mut count: c_int = 0;
        let buttons = unsafe { (self.api.get_joystick_buttons)(joy, &mut count) };
        if buttons.is_null() || count <= 0 {
            return Ok(Vec::new());
        }
        Ok(unsafe { std::slice::from_raw_parts(buttons, count as usize) }
            .iter()
            .map(|&state| {
                if c_int::from(state) == PRESS {
                    Action::Press
                } else {
                    Action::Release
                }
            })
            .collect())
    }

    pub fn joystick_name(&self, joy: i32) -> Result<Option<String>> {
        check_joystick(joy)?;
        Ok(unsafe { string_from_ptr((self.api.get_joystick_name)(joy)) })
    }

    // ---------------------------------------------------------------------
    // Clipboard
    // ---------------------------------------------------------------------

    pub fn set_clipboard_string(&self, window: WindowHandle, text: &str) -> Result<()> {
        let text = c_string(text, "clipboard text")?;
        unsafe { (self.api.set_clipboard_string)(window.as_ptr(), text.as_ptr()) };
        Ok(())
    }

    /// Clipboard contents, `None` if empty or not text
    pub fn clipboard_string(&self, window: WindowHandle) -> Option<String> {
        unsafe { string_from_ptr((self.api.get_clipboard_string)(window.as_ptr())) }
    }

    // ---------------------------------------------------------------------
    // Callbacks
    // ---------------------------------------------------------------------

    /// Register, replace or (with `handler == None`) clear a callback
    ///
    /// `window` must be `None` for the global slots and `Some` for all
    /// others. Source, slot and arity are checked before the native library
    /// is touched. A replaced handler is dropped only after the native
    /// registration has returned, so a handler may replace itself.
    pub fn set_callback(
        &mut self,
        slot: Slot,
        window: Option<WindowHandle>,
        handler: Option<Handler>,
    ) -> Result<()> {
        let source = source_for(slot, window)?;
        if let Some(handler) = &handler {
            if let Some(built_for) = handler.slot().filter(|&built_for| built_for != slot) {
                return Err(BindingError::SlotMismatch {
                    slot,
                    handler: built_for,
                });
            }
            if handler.arity() != slot.arity() {
                return Err(BindingError::ArityMismatch {
                    slot,
                    expected: slot.arity(),
                    got: handler.arity(),
                });
            }
        }

        let key = AdapterKey::new(source, slot);
        let window_ptr: *mut GLFWwindow = window.map_or(ptr::null_mut(), |w| w.as_ptr());
        let released = match handler {
            Some(handler) => {
                let adapter = Adapter::new(key, handler);
                let native = adapter.native();
                let replaced = unsafe { native.register(&self.api, window_ptr, true) };
                log::debug!(
                    "Registered {} callback for {:?}{}",
                    native.slot(),
                    adapter.key().source,
                    if replaced { " (replaced)" } else { "" }
                );
                registry::with(|r| r.insert(adapter))
            }
            None => {
                unsafe { NativeCallback::for_slot(slot).register(&self.api, window_ptr, false) };
                log::debug!("Cleared {} callback for {:?}", slot, source);
                registry::with(|r| r.remove(&key))
            }
        };
        drop(released);
        Ok(())
    }

    /// Remove the callback for `slot`, if any
    pub fn clear_callback(&mut self, slot: Slot, window: Option<WindowHandle>) -> Result<()> {
        self.set_callback(slot, window, None)
    }

    /// Whether a handler is registered for `slot` on `window`
    pub fn has_callback(&self, slot: Slot, window: Option<WindowHandle>) -> bool {
        let key = AdapterKey::new(EventSource::for_window(window), slot);
        registry::with(|r| r.contains(&key))
    }

    /// Number of live handlers on this thread
    pub fn callback_count(&self) -> usize {
        registry::with(|r| r.len())
    }

    pub fn set_error_callback<F>(&mut self, mut f: F) -> Result<()>
    where
        F: FnMut(i32, &str) + 'static,
    {
        let handler = Handler::for_event(Slot::Error, move |event| {
            if let CallbackEvent::Error { code, description } = event {
                f(*code, description);
            }
            Ok(())
        });
        self.set_callback(Slot::Error, None, Some(handler))
    }

    pub fn set_monitor_callback<F>(&mut self, mut f: F) -> Result<()>
    where
        F: FnMut(MonitorHandle, MonitorStatus) + 'static,
    {
        let handler = Handler::for_event(Slot::Monitor, move |event| {
            if let CallbackEvent::Monitor { monitor, status } = event {
                f(*monitor, *status);
            }
            Ok(())
        });
        self.set_callback(Slot::Monitor, None, Some(handler))
    }

    pub fn set_window_pos_callback<F>(&mut self, window: WindowHandle, mut f: F) -> Result<()>
    where
        F: FnMut(WindowHandle, i32, i32) + 'static,
    {
        let handler = Handler::for_event(Slot::WindowPos, move |event| {
            if let CallbackEvent::WindowPos { window, x, y } = event {
                f(*window, *x, *y);
            }
            Ok(())
        });
        self.set_callback(Slot::WindowPos, Some(window), Some(handler))
    }

    pub fn set_window_size_callback<F>(&mut self, window: WindowHandle, mut f: F) -> Result<()>
    where
        F: FnMut(WindowHandle, i32, i32) + 'static,
    {
        let handler = Handler::for_event(Slot::WindowSize, move |event| {
            if let CallbackEvent::WindowSize {
                window,
                width,
                height,
            } = event
            {
                f(*window, *width, *height);
            }
            Ok(())
        });
        self.set_callback(Slot::WindowSize, Some(window), Some(handler))
    }

    pub fn set_window_close_callback<F>(&mut self, window: WindowHandle, mut f: F) -> Result<()>
    where
        F: FnMut(WindowHandle) + 'static,
    {
        let handler = Handler::for_event(Slot::WindowClose, move |event| {
            if let CallbackEvent::WindowClose { window } = event {
                f(*window);
            }
            Ok(())
        });
        self.set_callback(Slot::WindowClose, Some(window), Some(handler))
    }

    pub fn set_window_refresh_callback<F>(&mut self, window: WindowHandle, mut f: F) -> Result<()>
    where
        F: FnMut(WindowHandle) + 'static,
    {
        let handler = Handler::for_event(Slot::WindowRefresh, move |event| {
            if let CallbackEvent::WindowRefresh { window } = event {
                f(*window);
            }
            Ok(())
        });
        self.set_callback(Slot::WindowRefresh, Some(window), Some(handler))
    }

    pub fn set_window_focus_callback<F>(&mut self, window: WindowHandle, mut f: F) -> Result<()>
    where
        F: FnMut(WindowHandle, bool) + 'static,
    {
        let handler = Handler::for_event(Slot::WindowFocus, move |event| {
            if let CallbackEvent::WindowFocus { window, focused } = event {
                f(*window, *focused);
            }
            Ok(())
        });
        self.set_callback(Slot::WindowFocus, Some(window), Some(handler))
    }

    pub fn set_window_iconify_callback<F>(&mut self, window: WindowHandle, mut f: F) -> Result<()>
    where
        F: FnMut(WindowHandle, bool) + 'static,
    {
        let handler = Handler::for_event(Slot::WindowIconify, move |event| {
            if let CallbackEvent::WindowIconify { window, iconified } = event {
                f(*window, *iconified);
            }
            Ok(())
        });
        self.set_callback(Slot::WindowIconify, Some(window), Some(handler))
    }

    pub fn set_framebuffer_size_callback<F>(&mut self, window: WindowHandle, mut f: F) -> Result<()>
    where
        F: FnMut(WindowHandle, i32, i32) + 'static,
    {
        let handler = Handler::for_event(Slot::FramebufferSize, move |event| {
            if let CallbackEvent::FramebufferSize {
                window,
                width,
                height,
            } = event
            {
                f(*window, *width, *height);
            }
            Ok(())
        });
        self.set_callback(Slot::FramebufferSize, Some(window), Some(handler))
    }

    /// Key events; printable keys arrive as [`KeyValue::Char`]
    pub fn set_key_callback<F>(&mut self, window: WindowHandle, mut f: F) -> Result<()>
    where
        F: FnMut(WindowHandle, KeyValue, i32, Action, Modifiers) + 'static,
    {
        let handler = Handler::for_event(Slot::Key, move |event| {
            if let CallbackEvent::Key {
                window,
                key,
                scancode,
                action,
                mods,
            } = event
            {
                f(*window, *key, *scancode, *action, *mods);
            }
            Ok(())
        });
        self.set_callback(Slot::Key, Some(window), Some(handler))
    }

    /// Unicode character input
    ///
    /// With a GLFW 3.0 library the modifiers are always empty.
    pub fn set_char_callback<F>(&mut self, window: WindowHandle, mut f: F) -> Result<()>
    where
        F: FnMut(WindowHandle, char, Modifiers) + 'static,
    {
        let handler = Handler::for_event(Slot::Char, move |event| {
            if let CallbackEvent::Char {
                window,
                character,
                mods,
            } = event
            {
                f(*window, *character, *mods);
            }
            Ok(())
        });
        self.set_callback(Slot::Char, Some(window), Some(handler))
    }

    pub fn set_mouse_button_callback<F>(&mut self, window: WindowHandle, mut f: F) -> Result<()>
    where
        F: FnMut(WindowHandle, i32, Action, Modifiers) + 'static,
    {
        let handler = Handler::for_event(Slot::MouseButton, move |event| {
            if let CallbackEvent::MouseButton {
                window,
                button,
                action,
                mods,
            } = event
            {
                f(*window, *button, *action, *mods);
            }
            Ok(())
        });
        self.set_callback(Slot::MouseButton, Some(window), Some(handler))
    }

    pub fn set_cursor_pos_callback<F>(&mut self, window: WindowHandle, mut f: F) -> Result<()>
    where
        F: FnMut(WindowHandle, f64, f64) + 'static,
    {
        let handler = Handler::for_event(Slot::CursorPos, move |event| {
            if let CallbackEvent::CursorPos { window, x, y } = event {
                f(*window, *x, *y);
            }
            Ok(())
        });
        self.set_callback(Slot::CursorPos, Some(window), Some(handler))
    }

    pub fn set_cursor_enter_callback<F>(&mut self, window: WindowHandle, mut f: F) -> Result<()>
    where
        F: FnMut(WindowHandle, bool) + 'static,
    {
        let handler = Handler::for_event(Slot::CursorEnter, move |event| {
            if let CallbackEvent::CursorEnter { window, entered } = event {
                f(*window, *entered);
            }
            Ok(())
        });
        self.set_callback(Slot::CursorEnter, Some(window), Some(handler))
    }

    pub fn set_scroll_callback<F>(&mut self, window: WindowHandle, mut f: F) -> Result<()>
    where
        F: FnMut(WindowHandle, f64, f64) + 'static,
    {
        let handler = Handler::for_event(Slot::Scroll, move |event| {
            if let CallbackEvent::Scroll { window, dx, dy } = event {
                f(*window, *dx, *dy);
            }
            Ok(())
        });
        self.set_callback(Slot::Scroll, Some(window), Some(handler))
    }
}

impl Drop for Glfw {
    fn drop(&mut self) {
        self.terminate();
        if self.has_callback(Slot::Error, None) {
            unsafe { NativeCallback::for_slot(Slot::Error).register(&self.api, ptr::null_mut(), false) };
        }
        let released = registry::with(|r| r.remove_where(|_| true));
        drop(released);
        log::debug!("GLFW context released");
    }
}

impl std::fmt::Debug for Glfw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Glfw")
            .field("initialized", &self.initialized)
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

fn source_for(slot: Slot, window: Option<WindowHandle>) -> Result<EventSource> {
    match (slot.is_global(), window) {
        (true, None) => Ok(EventSource::Global),
        (true, Some(_)) => Err(BindingError::UnexpectedSource(slot)),
        (false, Some(window)) => Ok(EventSource::Window(window)),
        (false, None) => Err(BindingError::MissingSource(slot)),
    }
}

fn check_size(width: i32, height: i32) -> Result<()> {
    if width < 0 || height < 0 {
        return Err(BindingError::InvalidArgument(format!(
            "size must be non-negative, got {}x{}",
            width, height
        )));
    }
    Ok(())
}

fn check_joystick(joy: i32) -> Result<()> {
    if !constants::is_joystick(joy) {
        return Err(BindingError::InvalidArgument(format!(
            "joystick {} is out of range",
            joy
        )));
    }
    Ok(())
}

fn c_string(value: &str, what: &str) -> Result<CString> {
    CString::new(value)
        .map_err(|_| BindingError::InvalidArgument(format!("{} contains a NUL byte", what)))
}

/// Copy a C string owned by GLFW, `None` for null
unsafe fn string_from_ptr(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
}
