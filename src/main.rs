mod check;
mod compare;
mod config;
mod error;
mod file_ops;
mod gui;
mod hashers;
mod logging;
mod models;

use iced::window;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = logging::init_logging() {
        eprintln!("sumcheck: {e:#}");
    }

    let config = config::UiConfig::default();
    let result = iced::application(config.title, gui::SumCheckApp::update, gui::SumCheckApp::view)
        .window(window::Settings {
            size: config.window_size,
            resizable: config.resizable,
            ..window::Settings::default()
        })
        .run_with(gui::SumCheckApp::new);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "could not start the windowing system");
            eprintln!("sumcheck: could not start the windowing system: {e}");
            ExitCode::FAILURE
        }
    }
}
