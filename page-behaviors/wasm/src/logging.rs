//! `tracing` output to the browser console.
//!
//! `tracing-web` routes each formatted event to the `console.*` method that
//! matches its level. The browser has no clock the fmt timer can read and no
//! ANSI support, so both are off.

use tracing::Level;
use tracing_web::MakeWebConsoleWriter;

/// Install the console subscriber. A second call keeps the first subscriber.
pub fn init(level: Level) {
    let installed = tracing_subscriber::fmt()
        .with_writer(MakeWebConsoleWriter::new())
        .without_time()
        .with_target(false)
        .with_max_level(level)
        .try_init();

    if installed.is_err() {
        tracing::debug!("console logger already installed");
    }
}
