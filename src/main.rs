#![windows_subsystem = "windows"]
use std::io::{self, BufRead, Write};

use synk_core::config::CoreConfig;
use synk_core::services::catalog::store;
use synk_core::{logging, protocol};

fn main() {
    logging::init();

    let config = CoreConfig::load();
    let catalog = match store::load(&config) {
        Ok(c) => c,
        Err(e) => {
            log::error!("failed to load catalog: {e}");
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                log::warn!("skipping unreadable input line: {e}");
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let result = std::panic::catch_unwind(|| protocol::handle(&catalog, &line));

        let response = match result {
            Ok(resp) => resp,
            Err(_) => {
                log::error!("handler panicked on request: {line}");
                serde_json::json!({
                    "status": "error",
                    "message": "internal core error"
                })
                .to_string()
            }
        };

        if writeln!(stdout, "{response}").is_err() {
            break;
        }

        let _ = stdout.flush();
    }

    log::info!("stdin closed, shutting down");
}
