pub mod banner;
pub mod gauge;
pub mod tui;

/// Prints the welcome banner. Call once at startup (e.g. in main after tracing init).
pub fn init_ui() {
    banner::print_welcome();
}
