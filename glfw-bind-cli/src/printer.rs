//! Event and monitor output, as text lines or JSON lines

use chrono::Local;
use glfw_bind::{CallbackArg, CallbackEvent, VideoMode};
use serde::Serialize;
use std::io::{self, Write};

/// One printed callback invocation
#[derive(Debug, Serialize)]
struct EventRecord<'a> {
    timestamp: String,
    slot: &'static str,
    args: &'a [CallbackArg],
}

/// What the CLI knows about one monitor
#[derive(Debug, Clone, Serialize)]
pub struct MonitorReport {
    pub name: String,
    pub primary: bool,
    pub position: (i32, i32),
    /// Millimetres
    pub physical_size: (i32, i32),
    pub current_mode: Option<VideoMode>,
    pub modes: Vec<VideoMode>,
}

pub struct EventPrinter<W: Write> {
    out: W,
    json: bool,
    events: u64,
}

impl<W: Write> EventPrinter<W> {
    pub fn new(out: W, json: bool) -> Self {
        Self {
            out,
            json,
            events: 0,
        }
    }

    /// Number of events printed so far
    pub fn events(&self) -> u64 {
        self.events
    }

    pub fn print_event(&mut self, event: &CallbackEvent) -> io::Result<()> {
        let timestamp = Local::now();
        if self.json {
            let args = event.args();
            let record = EventRecord {
                timestamp: timestamp.to_rfc3339(),
                slot: event.slot().name(),
                args: &args,
            };
            serde_json::to_writer(&mut self.out, &record)?;
            writeln!(self.out)?;
        } else {
            writeln!(self.out, "[{}] {}", timestamp.format("%H:%M:%S%.3f"), event)?;
        }
        self.events += 1;
        Ok(())
    }

    pub fn print_monitor(&mut self, monitor: &MonitorReport) -> io::Result<()> {
        if self.json {
            serde_json::to_writer(&mut self.out, monitor)?;
            return writeln!(self.out);
        }

        writeln!(
            self.out,
            "Monitor: {}{}",
            monitor.name,
            if monitor.primary { " (primary)" } else { "" }
        )?;
        writeln!(
            self.out,
            "  position: {},{}  physical size: {}x{} mm",
            monitor.position.0, monitor.position.1, monitor.physical_size.0, monitor.physical_size.1
        )?;
        match &monitor.current_mode {
            Some(mode) => writeln!(self.out, "  current mode: {}", mode)?,
            None => writeln!(self.out, "  current mode: unknown")?,
        }
        for mode in &monitor.modes {
            writeln!(self.out, "  mode: {}", mode)?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
