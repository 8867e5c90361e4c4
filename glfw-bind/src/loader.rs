//! Locating and opening the GLFW shared library
//!
//! Every entry point in [`GlfwApi`] is resolved when the library is opened, so
//! a library missing any of them is rejected up front instead of failing on
//! first use. The only exceptions are the entry points GLFW added after 3.0,
//! which resolve to `None` on older libraries.

use crate::config::LoaderConfig;
use crate::ffi::GlfwApi;
use crate::types::{BindingError, Result};
use libloading::Library;
use std::ffi::{c_void, OsString};
use std::fmt;
use std::mem;
use std::path::PathBuf;

/// File names tried for a bundled copy and for the system library
#[cfg(target_os = "windows")]
pub const LIBRARY_NAMES: &[&str] = &["glfw3.dll", "glfw.dll"];
#[cfg(target_os = "macos")]
pub const LIBRARY_NAMES: &[&str] = &["libglfw.3.dylib", "libglfw.dylib"];
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub const LIBRARY_NAMES: &[&str] = &["libglfw.so.3", "libglfw.so"];

/// Place a library may be loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryCandidate {
    /// Path given in the configuration
    Explicit(PathBuf),
    /// Copy shipped next to the application
    Bundled(PathBuf),
    /// Name resolved by the system's dynamic loader
    System(String),
}

impl LibraryCandidate {
    fn target(&self) -> OsString {
        match self {
            LibraryCandidate::Explicit(path) | LibraryCandidate::Bundled(path) => {
                path.clone().into_os_string()
            }
            LibraryCandidate::System(name) => OsString::from(name),
        }
    }
}

impl fmt::Display for LibraryCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryCandidate::Explicit(path) => write!(f, "{}", path.display()),
            LibraryCandidate::Bundled(path) => write!(f, "{} (bundled)", path.display()),
            LibraryCandidate::System(name) => write!(f, "{} (system)", name),
        }
    }
}

/// Candidates in the order they are tried
///
/// An explicit `library_path` is the only candidate when set.
pub fn candidates(config: &LoaderConfig) -> Vec<LibraryCandidate> {
    if let Some(path) = &config.library_path {
        return vec![LibraryCandidate::Explicit(path.clone())];
    }

    let mut candidates = Vec::new();
    if config.search_bundled {
        if let Some(dir) = config.effective_bundled_dir() {
            candidates.extend(
                LIBRARY_NAMES
                    .iter()
                    .map(|name| LibraryCandidate::Bundled(dir.join(name))),
            );
        }
    }
    if config.search_system {
        candidates.extend(
            LIBRARY_NAMES
                .iter()
                .map(|name| LibraryCandidate::System(name.to_string())),
        );
    }
    candidates
}

/// An opened library with its resolved entry points
pub struct LoadedLibrary {
    pub api: GlfwApi,
    pub candidate: LibraryCandidate,
    pub library: Library,
}

impl fmt::Debug for LoadedLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedLibrary")
            .field("candidate", &self.candidate)
            .finish_non_exhaustive()
    }
}

/// Open the first loadable candidate
pub fn load(config: &LoaderConfig) -> Result<LoadedLibrary> {
    let mut tried = Vec::new();

    for candidate in candidates(config) {
        if let LibraryCandidate::Bundled(path) = &candidate {
            if !path.is_file() {
                log::trace!("No bundled library at {}", path.display());
                tried.push(candidate.to_string());
                continue;
            }
        }

        log::debug!("Trying GLFW library: {}", candidate);
        // SAFETY: loading runs the library's initializers, which GLFW keeps trivial
        let library = match unsafe { Library::new(candidate.target()) } {
            Ok(library) => library,
            Err(source) => {
                if let LibraryCandidate::Explicit(path) = &candidate {
                    return Err(BindingError::LibraryLoad {
                        path: path.display().to_string(),
                        source,
                    });
                }
                log::debug!("Couldn't load {}: {}", candidate, source);
                tried.push(candidate.to_string());
                continue;
            }
        };

        if let LibraryCandidate::System(name) = &candidate {
            log::warn!(
                "No bundled GLFW library found, falling back to the system library {}",
                name
            );
        }

        // SAFETY: the symbol types below match glfw3.h
        let api = unsafe { resolve_api(&library)? };
        log::info!("Loaded GLFW library: {}", candidate);
        return Ok(LoadedLibrary {
            api,
            candidate,
            library,
        });
    }

    Err(BindingError::LibraryNotFound { tried })
}

/// Address of an exported symbol, as found by a symbol lookup
type SymbolLookup<'a> = dyn FnMut(&'static str) -> std::result::Result<*mut c_void, libloading::Error> + 'a;

unsafe fn symbol<T: Copy>(lookup: &mut SymbolLookup<'_>, name: &'static str) -> Result<T> {
    optional_symbol(lookup, name)?.ok_or(BindingError::MissingSymbol {
        name,
        source: libloading::Error::DlSymUnknown,
    })
}

/// Like `symbol`, but an entry point the library doesn't export is `None`
unsafe fn optional_symbol<T: Copy>(
    lookup: &mut SymbolLookup<'_>,
    name: &'static str,
) -> Result<Option<T>> {
    debug_assert_eq!(mem::size_of::<T>(), mem::size_of::<*mut c_void>());
    match lookup(name) {
        Ok(address) if address.is_null() => Ok(None),
        // SAFETY: `T` is a function pointer type of the same size
        Ok(address) => Ok(Some(mem::transmute_copy::<*mut c_void, T>(&address))),
        Err(source) => Err(BindingError::MissingSymbol { name, source }),
    }
}

/// Resolve every entry point of [`GlfwApi`] from `library`
///
/// # Safety
/// `library` must be a GLFW 3 build; the pointers are only valid while it
/// stays loaded.
pub unsafe fn resolve_api(library: &Library) -> Result<GlfwApi> {
    let api = resolve_api_with(|name| {
        library
            .get::<*mut c_void>(name.as_bytes())
            .map(|symbol| *symbol)
    })?;
    if api.set_char_mods_callback.is_none() {
        log::info!("GLFW library predates 3.1, character input will carry no modifiers");
    }
    Ok(api)
}

/// Resolve the table through `lookup`, which maps a symbol name to its address
///
/// A lookup error for an optional entry point (one added after GLFW 3.0)
/// leaves it `None`; for any other entry point it fails the whole table.
///
/// # Safety
/// Every address `lookup` returns must be the named GLFW function.
pub unsafe fn resolve_api_with<F>(mut lookup: F) -> Result<GlfwApi>
where
    F: FnMut(&'static str) -> std::result::Result<*mut c_void, libloading::Error>,
{
    let lookup: &mut SymbolLookup<'_> = &mut lookup;
    let set_char_mods_callback = match optional_symbol(lookup, "glfwSetCharModsCallback") {
        Err(BindingError::MissingSymbol { name, .. }) => {
            log::debug!("Optional GLFW symbol {} not exported", name);
            None
        }
        other => other?,
    };

    Ok(GlfwApi {
        init: symbol(lookup, "glfwInit")?,
        terminate: symbol(lookup, "glfwTerminate")?,
        get_version: symbol(lookup, "glfwGetVersion")?,
        get_version_string: symbol(lookup, "glfwGetVersionString")?,
        get_monitors: symbol(lookup, "glfwGetMonitors")?,
        get_primary_monitor: symbol(lookup, "glfwGetPrimaryMonitor")?,
        get_monitor_name: symbol(lookup, "glfwGetMonitorName")?,
        get_video_modes: symbol(lookup, "glfwGetVideoModes")?,
        get_video_mode: symbol(lookup, "glfwGetVideoMode")?,
        get_monitor_pos: symbol(lookup, "glfwGetMonitorPos")?,
        get_monitor_physical_size: symbol(lookup, "glfwGetMonitorPhysicalSize")?,
        set_gamma: symbol(lookup, "glfwSetGamma")?,
        get_gamma_ramp: symbol(lookup, "glfwGetGammaRamp")?,
        set_gamma_ramp: symbol(lookup, "glfwSetGammaRamp")?,
        default_window_hints: symbol(lookup, "glfwDefaultWindowHints")?,
        window_hint: symbol(lookup, "glfwWindowHint")?,
        create_window: symbol(lookup, "glfwCreateWindow")?,
        destroy_window: symbol(lookup, "glfwDestroyWindow")?,
        window_should_close: symbol(lookup, "glfwWindowShouldClose")?,
        set_window_should_close: symbol(lookup, "glfwSetWindowShouldClose")?,
        set_window_title: symbol(lookup, "glfwSetWindowTitle")?,
        get_window_pos: symbol(lookup, "glfwGetWindowPos")?,
        set_window_pos: symbol(lookup, "glfwSetWindowPos")?,
        get_window_size: symbol(lookup, "glfwGetWindowSize")?,
        set_window_size: symbol(lookup, "glfwSetWindowSize")?,
        get_framebuffer_size: symbol(lookup, "glfwGetFramebufferSize")?,
        iconify_window: symbol(lookup, "glfwIconifyWindow")?,
        restore_window: symbol(lookup, "glfwRestoreWindow")?,
        show_window: symbol(lookup, "glfwShowWindow")?,
        hide_window: symbol(lookup, "glfwHideWindow")?,
        get_window_monitor: symbol(lookup, "glfwGetWindowMonitor")?,
        get_window_attrib: symbol(lookup, "glfwGetWindowAttrib")?,
        make_context_current: symbol(lookup, "glfwMakeContextCurrent")?,
        get_current_context: symbol(lookup, "glfwGetCurrentContext")?,
        swap_buffers: symbol(lookup, "glfwSwapBuffers")?,
        swap_interval: symbol(lookup, "glfwSwapInterval")?,
        extension_supported: symbol(lookup, "glfwExtensionSupported")?,
        get_proc_address: symbol(lookup, "glfwGetProcAddress")?,
        poll_events: symbol(lookup, "glfwPollEvents")?,
        wait_events: symbol(lookup, "glfwWaitEvents")?,
        get_key: symbol(lookup, "glfwGetKey")?,
        get_mouse_button: symbol(lookup, "glfwGetMouseButton")?,
        get_cursor_pos: symbol(lookup, "glfwGetCursorPos")?,
        set_cursor_pos: symbol(lookup, "glfwSetCursorPos")?,
        get_input_mode: symbol(lookup, "glfwGetInputMode")?,
        set_input_mode: symbol(lookup, "glfwSetInputMode")?,
        joystick_present: symbol(lookup, "glfwJoystickPresent")?,
        get_joystick_axes: symbol(lookup, "glfwGetJoystickAxes")?,
        get_joystick_buttons: symbol(lookup, "glfwGetJoystickButtons")?,
        get_joystick_name: symbol(lookup, "glfwGetJoystickName")?,
        set_clipboard_string: symbol(lookup, "glfwSetClipboardString")?,
        get_clipboard_string: symbol(lookup, "glfwGetClipboardString")?,
        set_error_callback: symbol(lookup, "glfwSetErrorCallback")?,
        set_monitor_callback: symbol(lookup, "glfwSetMonitorCallback")?,
        set_window_pos_callback: symbol(lookup, "glfwSetWindowPosCallback")?,
        set_window_size_callback: symbol(lookup, "glfwSetWindowSizeCallback")?,
        set_window_close_callback: symbol(lookup, "glfwSetWindowCloseCallback")?,
        set_window_refresh_callback: symbol(lookup, "glfwSetWindowRefreshCallback")?,
        set_window_focus_callback: symbol(lookup, "glfwSetWindowFocusCallback")?,
        set_window_iconify_callback: symbol(lookup, "glfwSetWindowIconifyCallback")?,
        set_framebuffer_size_callback: symbol(lookup, "glfwSetFramebufferSizeCallback")?,
        set_key_callback: symbol(lookup, "glfwSetKeyCallback")?,
        set_char_callback: symbol(lookup, "glfwSetCharCallback")?,
        set_char_mods_callback,
        set_mouse_button_callback: symbol(lookup, "glfwSetMouseButtonCallback")?,
        set_cursor_pos_callback: symbol(lookup, "glfwSetCursorPosCallback")?,
        set_cursor_enter_callback: symbol(lookup, "glfwSetCursorEnterCallback")?,
        set_scroll_callback: symbol(lookup, "glfwSetScrollCallback")?,
    })
}
