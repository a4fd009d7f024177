use std::{panic, process};

use color_eyre::{config::HookBuilder, eyre::Result};
use tracing::error;

use crate::infrastructure::tui::real::RealTui;

/// Panic report footer; only points somewhere when the package names a repository.
fn bug_report_hint(repository: &str) -> String {
    if repository.is_empty() {
        "This is a bug.".to_string()
    } else {
        format!("This is a bug. Consider reporting it at {repository}")
    }
}

/// Install color-eyre hooks and a panic hook that puts the terminal back
/// before anything is printed.
pub fn initialize_panic_handler() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section(bug_report_hint(env!("CARGO_PKG_REPOSITORY")))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;

    panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = RealTui::restore() {
            error!("Unable to restore the terminal: {e:?}");
        }

        let report = panic_hook.panic_report(panic_info).to_string();
        log::error!("Panic: {}", strip_ansi_escapes::strip_str(&report));

        #[cfg(not(debug_assertions))]
        {
            use human_panic::{handle_dump, print_msg, Metadata};
            let mut meta = Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
                .authors(env!("CARGO_PKG_AUTHORS").replace(':', ", "));
            if !env!("CARGO_PKG_HOMEPAGE").is_empty() {
                meta = meta.homepage(env!("CARGO_PKG_HOMEPAGE"));
            }

            let file_path = handle_dump(&meta, panic_info);
            if print_msg(file_path, &meta).is_err() {
                eprintln!("{} panicked", env!("CARGO_PKG_NAME"));
            }
            eprintln!("{report}");
        }

        #[cfg(debug_assertions)]
        {
            better_panic::Settings::auto()
                .most_recent_first(false)
                .lineno_suffix(true)
                .verbosity(better_panic::Verbosity::Full)
                .create_panic_handler()(panic_info);
        }

        process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}
