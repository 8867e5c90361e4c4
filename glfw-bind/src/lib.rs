//! GLFW 3 Binding Library
//!
//! Loads the GLFW shared library at runtime and exposes windows, monitors,
//! input state and all fifteen GLFW callbacks through a safe API.
//!
//! # Architecture
//!
//! - The native library is reached through [`GlfwApi`], a table of function
//!   pointers resolved once at load time
//! - Each callback slot has one static `extern "C"` trampoline; the native
//!   side never holds a pointer to user code
//! - Handlers live in a per-thread registry keyed by event source and slot,
//!   so replacing or clearing a handler can never leave a dangling pointer
//! - A handler that panics or returns an error is reported through the error
//!   callback instead of unwinding into C
//!
//! The library does NOT:
//! - Wrap OpenGL or any other graphics API
//! - Bind timer or user pointer functions
//! - Allow use from more than one thread
//!
//! # Example Usage
//!
//! ```no_run
//! use glfw_bind::{keys, Glfw, KeyValue, LoaderConfig};
//!
//! let mut glfw = Glfw::load(&LoaderConfig::default()).unwrap();
//! glfw.set_error_callback(|code, description| eprintln!("GLFW error {}: {}", code, description))
//!     .unwrap();
//! glfw.init().unwrap();
//!
//! let window = glfw.create_window(640, 480, "Hello", None, None).unwrap();
//! glfw.set_key_callback(window, |window, key, _scancode, action, _mods| {
//!     if key == KeyValue::Code(keys::ESCAPE) {
//!         println!("{} escape {}", window, action);
//!     }
//! })
//! .unwrap();
//!
//! while !glfw.window_should_close(window) {
//!     glfw.poll_events();
//! }
//! ```

// Public modules
pub mod callback;
pub mod config;
pub mod constants;
pub mod ffi;
pub mod glfw;
pub mod keys;
pub mod loader;
pub mod types;

// Re-export main types for convenience
pub use callback::{CallbackArg, CallbackEvent, EventSource, Handler, HandlerError, HandlerResult, Slot};
pub use config::LoaderConfig;
pub use ffi::GlfwApi;
pub use glfw::Glfw;
pub use keys::KeyValue;
pub use loader::LibraryCandidate;
pub use registry::AdapterKey;
pub use types::{
    Action, BindingError, GammaRamp, Modifiers, MonitorHandle, MonitorStatus, Result, Version,
    VideoMode, WindowHandle,
};

// Internal modules (not exposed in public API)
mod registry;
mod trampoline;

#[cfg(test)]
mod testing;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: a context over the fake library starts empty
        testing::reset();
        let glfw = unsafe { Glfw::from_api(testing::fake_api()) };
        assert!(!glfw.is_initialized());
        assert_eq!(glfw.callback_count(), 0);
        assert!(glfw.origin().is_none());
        assert!(!VERSION.is_empty());
    }
}
