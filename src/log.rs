use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use once_cell::sync::Lazy;
use chrono::Local;

use crate::slider::SliderMode;

static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

/// Initialize logging to a file
pub fn init() -> std::io::Result<PathBuf> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pageslider")
        .join("logs");

    std::fs::create_dir_all(&log_dir)?;

    let log_path = log_dir.join(format!("pageslider_{}.log", timestamp));

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)?;

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = Some(file);
    }

    log("=== pageslider started ===");

    Ok(log_path)
}

/// Log a message with timestamp. Does nothing before `init`.
pub fn log(msg: &str) {
    let timestamp = Local::now().format("%H:%M:%S%.3f");
    let line = format!("[{}] {}\n", timestamp, msg);

    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
    }
}

/// Log an input event
pub fn log_event(event: &str) {
    log(&format!("[EVENT] {}", event));
}

/// Log an outbound selection from a slider
pub fn log_selection(mode: SliderMode, value: &str) {
    log(&format!("[{}] -> {}", mode.label().to_uppercase(), value));
}

/// Log a route change
pub fn log_navigation(from: &str, to: &str) {
    log(&format!("[ROUTE] {} -> {}", from, to));
}

/// Restore the terminal and record the panic before the default hook runs.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::event::DisableMouseCapture,
            crossterm::event::DisableFocusChange,
            crossterm::terminal::LeaveAlternateScreen
        );
        log(&format!("PANIC: {}", info));
        default_hook(info);
    }));
}
