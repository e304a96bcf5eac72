use std::fs;
use std::path::Path;
use std::process::Command;

fn read_trimmed(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn main() {
    // Release version comes from the VERSION file, falling back to the manifest
    let version = read_trimmed(Path::new("VERSION"))
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    // CI sets SCYTALE_BUILD_NUMBER; local builds read BUILD_NUMBER if present
    let build_number = std::env::var("SCYTALE_BUILD_NUMBER")
        .ok()
        .or_else(|| read_trimmed(Path::new("BUILD_NUMBER")))
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0);

    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "debug".to_string());
    let profile_label = if profile == "release" { "release" } else { "development" };

    let git_hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=SCYTALE_VERSION={}", version);
    println!("cargo:rustc-env=SCYTALE_BUILD={}", build_number);
    println!("cargo:rustc-env=SCYTALE_PROFILE={}", profile_label);
    println!("cargo:rustc-env=SCYTALE_GIT_HASH={}", git_hash);

    println!("cargo:rerun-if-changed=VERSION");
    println!("cargo:rerun-if-changed=BUILD_NUMBER");
    println!("cargo:rerun-if-env-changed=SCYTALE_BUILD_NUMBER");
    println!("cargo:rerun-if-env-changed=PROFILE");
}
