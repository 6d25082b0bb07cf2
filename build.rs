use chrono::Datelike;

const DEFAULT_AUTO_ADVANCE_MS: &str = "5000";

fn main() {
    // Capture the current timestamp as the build time
    let now = chrono::Utc::now();
    let build_time = now.to_rfc3339();

    // Also set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    // Hero slideshow interval, 0 turns auto-advance off
    let auto_advance = std::env::var("HERO_AUTO_ADVANCE_MS")
        .unwrap_or_else(|_| DEFAULT_AUTO_ADVANCE_MS.to_string());
    println!("cargo:rustc-env=HERO_AUTO_ADVANCE_MS={}", auto_advance);

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=HERO_AUTO_ADVANCE_MS");
}
