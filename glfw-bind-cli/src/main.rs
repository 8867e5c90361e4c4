//! GLFW Event Monitor CLI Application
//!
//! Command-line front end for the glfw-bind library. It loads GLFW, describes
//! the attached monitors, opens a window and prints every callback the
//! library delivers until the window is closed (ESC or the close button) or a
//! frame limit is reached.

use anyhow::{Context, Result};
use clap::Parser;
use glfw_bind::{
    constants, keys, Action, CallbackEvent, Glfw, Handler, KeyValue, Slot, WindowHandle,
};
use std::cell::{Cell, RefCell};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

mod config;
mod printer;

use config::AppConfig;
use printer::{EventPrinter, MonitorReport};

/// GLFW Event Monitor - Print GLFW callbacks as they happen
#[derive(Parser, Debug)]
#[command(name = "glfw-events")]
#[command(about = "Open a GLFW window and print every callback it receives", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the GLFW shared library (skips the bundled/system search)
    #[arg(short, long, value_name = "FILE")]
    library: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Window width
    #[arg(long, value_name = "PIXELS")]
    width: Option<i32>,

    /// Window height
    #[arg(long, value_name = "PIXELS")]
    height: Option<i32>,

    /// Window title
    #[arg(long)]
    title: Option<String>,

    /// Stop after this many frames
    #[arg(long, value_name = "COUNT")]
    frames: Option<u64>,

    /// Delay between polls in milliseconds
    #[arg(long, value_name = "MS")]
    interval_ms: Option<u64>,

    /// Block waiting for events instead of polling
    #[arg(long)]
    wait: bool,

    /// Print events as JSON lines
    #[arg(long)]
    json: bool,

    /// Callback slots to print, comma separated (default: all)
    #[arg(long, value_delimiter = ',', value_name = "SLOTS")]
    slots: Option<Vec<String>>,

    /// Describe the monitors and exit without opening a window
    #[arg(long)]
    list_monitors: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

type SharedPrinter = Rc<RefCell<EventPrinter<Stdout>>>;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("GLFW Event Monitor v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using glfw-bind library v{}", glfw_bind::VERSION);

    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };
    apply_args(&mut config, &args);

    run(&config, args.list_monitors)
}

/// Command line flags take precedence over the configuration file
fn apply_args(config: &mut AppConfig, args: &Args) {
    if let Some(path) = &args.library {
        config.library.library_path = Some(path.clone());
    }
    if let Some(width) = args.width {
        config.window.width = width;
    }
    if let Some(height) = args.height {
        config.window.height = height;
    }
    if let Some(title) = &args.title {
        config.window.title = title.clone();
    }
    if args.frames.is_some() {
        config.run.frames = args.frames;
    }
    if let Some(interval) = args.interval_ms {
        config.run.interval_ms = interval;
    }
    if let Some(slots) = &args.slots {
        config.run.slots = Some(slots.clone());
    }
    config.run.wait |= args.wait;
    config.run.json |= args.json;
}

fn run(config: &AppConfig, list_only: bool) -> Result<()> {
    let slots = config.run.selected_slots()?;
    let printer: SharedPrinter = Rc::new(RefCell::new(EventPrinter::new(io::stdout(), config.run.json)));
    let escape = Rc::new(Cell::new(false));

    let mut glfw = Glfw::load(&config.library).context("Failed to load the GLFW library")?;
    if let Some(origin) = glfw.origin() {
        log::debug!("GLFW library origin: {}", origin);
    }

    // Global handlers go in before init so init failures are reported
    for slot in [Slot::Error, Slot::Monitor] {
        if slots.contains(&slot) {
            glfw.set_callback(slot, None, Some(event_handler(slot, &printer, &escape, true)))?;
        }
    }
    glfw.init().context("Failed to initialize GLFW")?;
    log::info!("GLFW version: {}", glfw.version_string());

    describe_monitors(&glfw, &printer)?;
    if list_only {
        return Ok(());
    }

    let window = open_window(&mut glfw, config)?;
    for slot in Slot::ALL.into_iter().filter(|slot| !slot.is_global()) {
        let print = slots.contains(&slot);
        // The key handler also watches for ESC
        if print || slot == Slot::Key {
            let handler = event_handler(slot, &printer, &escape, print);
            glfw.set_callback(slot, Some(window), Some(handler))?;
        }
    }
    log::debug!("{} callback(s) registered", glfw.callback_count());

    let frames = event_loop(&glfw, window, config, &escape);

    glfw.destroy_window(window);
    glfw.terminate();
    log::info!(
        "Processed {} frame(s), printed {} event(s)",
        frames,
        printer.borrow().events()
    );
    Ok(())
}

fn event_handler(
    slot: Slot,
    printer: &SharedPrinter,
    escape: &Rc<Cell<bool>>,
    print: bool,
) -> Handler {
    let printer = Rc::clone(printer);
    let escape = Rc::clone(escape);
    Handler::for_event(slot, move |event| {
        if is_escape_press(event) {
            escape.set(true);
        }
        if print {
            printer.borrow_mut().print_event(event)?;
        }
        Ok(())
    })
}

fn is_escape_press(event: &CallbackEvent) -> bool {
    matches!(
        event,
        CallbackEvent::Key {
            key: KeyValue::Code(keys::ESCAPE),
            action: Action::Press,
            ..
        }
    )
}

fn describe_monitors(glfw: &Glfw, printer: &SharedPrinter) -> Result<()> {
    let primary = glfw.primary_monitor();
    let monitors = glfw.monitors();
    log::info!("{} monitor(s) connected", monitors.len());

    for monitor in monitors {
        let report = MonitorReport {
            name: glfw
                .monitor_name(monitor)
                .unwrap_or_else(|| monitor.to_string()),
            primary: Some(monitor) == primary,
            position: glfw.monitor_pos(monitor),
            physical_size: glfw.monitor_physical_size(monitor),
            current_mode: glfw.video_mode(monitor),
            modes: glfw.video_modes(monitor),
        };
        printer.borrow_mut().print_monitor(&report)?;
    }
    Ok(())
}

fn open_window(glfw: &mut Glfw, config: &AppConfig) -> Result<WindowHandle> {
    let bool_hint = |value: bool| if value { constants::GL_TRUE } else { constants::GL_FALSE };

    glfw.default_window_hints();
    glfw.window_hint(constants::RESIZABLE, bool_hint(config.window.resizable))?;
    glfw.window_hint(constants::DECORATED, bool_hint(config.window.decorated))?;

    let monitor = if config.window.fullscreen {
        glfw.primary_monitor()
    } else {
        None
    };
    let window = glfw
        .create_window(
            config.window.width,
            config.window.height,
            &config.window.title,
            monitor,
            None,
        )
        .context("Failed to create window")?;
    glfw.make_context_current(Some(window));

    log::info!(
        "Opened {} ({}x{}, framebuffer {:?})",
        window,
        config.window.width,
        config.window.height,
        glfw.framebuffer_size(window)
    );
    Ok(window)
}

/// Run until the window should close or the frame limit is hit
fn event_loop(glfw: &Glfw, window: WindowHandle, config: &AppConfig, escape: &Cell<bool>) -> u64 {
    let interval = Duration::from_millis(config.run.interval_ms);
    let mut frames = 0u64;

    while !glfw.window_should_close(window) {
        if frame_limit_reached(config.run.frames, frames) {
            log::info!("Frame limit reached");
            break;
        }
        if config.run.wait {
            glfw.wait_events();
        } else {
            glfw.poll_events();
        }
        if escape.get() {
            log::info!("ESC pressed, closing window");
            glfw.set_window_should_close(window, true);
        }
        glfw.swap_buffers(window);

        frames += 1;
        if !config.run.wait && !interval.is_zero() {
            std::thread::sleep(interval);
        }
    }
    frames
}

/// Checked before each frame, so a limit of 0 never polls
fn frame_limit_reached(limit: Option<u64>, frames: u64) -> bool {
    limit.is_some_and(|limit| frames >= limit)
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use glfw_bind::ffi::GLFWwindow;
    use glfw_bind::Modifiers;

    #[test]
    fn test_frame_limit_is_checked_before_polling() {
        assert!(frame_limit_reached(Some(0), 0));
        assert!(!frame_limit_reached(Some(2), 1));
        assert!(frame_limit_reached(Some(2), 2));
        assert!(!frame_limit_reached(None, u64::MAX));
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from([
            "glfw-events",
            "--library",
            "/tmp/libglfw.so.3",
            "--width",
            "320",
            "--slots",
            "key,char",
            "--json",
        ]);
        let mut config = AppConfig::default();
        config.window.height = 100;
        apply_args(&mut config, &args);

        assert_eq!(
            config.library.library_path,
            Some(PathBuf::from("/tmp/libglfw.so.3"))
        );
        assert_eq!(config.window.width, 320);
        assert_eq!(config.window.height, 100);
        assert!(config.run.json);
        assert!(!config.run.wait);
        assert_eq!(
            config.run.selected_slots().unwrap(),
            vec![Slot::Key, Slot::Char]
        );
    }

    #[test]
    fn test_escape_detection() {
        let window = WindowHandle::from_ptr(0x1000 as *mut GLFWwindow).unwrap();
        let key = |key, action| CallbackEvent::Key {
            window,
            key,
            scancode: 9,
            action,
            mods: Modifiers::empty(),
        };

        assert!(is_escape_press(&key(KeyValue::Code(keys::ESCAPE), Action::Press)));
        assert!(!is_escape_press(&key(KeyValue::Code(keys::ESCAPE), Action::Release)));
        assert!(!is_escape_press(&key(KeyValue::Char('Q'), Action::Press)));
    }
}
