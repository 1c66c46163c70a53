use dimap_laws::{LawError, LawProfile};
use serde::Serialize;
use std::path::Path;

/// Configuration errors exit with status 2; a rejected report exits with 1.
pub const EXIT_REJECTED: i32 = 1;
pub const EXIT_CONFIG: i32 = 2;

pub fn exit_config_error(err: LawError) -> ! {
    tracing::debug!(error = ?err, "configuration rejected");
    eprintln!("error: {err}");
    std::process::exit(EXIT_CONFIG);
}

pub fn load_profile_or_exit(path: Option<&str>) -> LawProfile {
    match path {
        Some(path) => LawProfile::load(Path::new(path)).unwrap_or_else(|err| exit_config_error(err)),
        None => LawProfile::default(),
    }
}

pub fn print_json_or_exit<T: Serialize>(value: &T, label: &str) {
    let rendered = serde_json::to_string_pretty(value).unwrap_or_else(|err| {
        eprintln!("error: failed to render {label}: {err}");
        std::process::exit(EXIT_CONFIG);
    });
    println!("{rendered}");
}
