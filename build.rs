use std::env;
use std::path::{Path, PathBuf};

const BUNDLED_AVAILABILITY: &str = "data/name_availability.json";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=data");
    println!("cargo:rerun-if-env-changed=SYMBOLPICKER_DATA_HINT");

    if !Path::new(BUNDLED_AVAILABILITY).is_file() {
        println!(
            "cargo:warning={BUNDLED_AVAILABILITY} is missing; symbol-query needs --data or SYMBOLPICKER_DATA"
        );
    }

    // Ignore hints without an availability file.
    let hint = env::var("SYMBOLPICKER_DATA_HINT")
        .ok()
        .map(PathBuf::from)
        .filter(|dir| dir.join("name_availability.json").is_file());

    if let Some(dir) = hint {
        let canonical = dir.canonicalize().unwrap_or(dir);
        println!(
            "cargo:rustc-env=SYMBOLPICKER_DATA_HINT={}",
            canonical.display()
        );
    }
}
