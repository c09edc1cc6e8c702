use std::path::Path;
use std::process::Command;

/// Embeds the short commit hash as `SKETCHLOOP_GIT_HASH` for `--version`.
fn main() {
    let hash = std::env::var("SKETCHLOOP_GIT_HASH")
        .ok()
        .filter(|s| !s.is_empty())
        .or_else(git_short_hash)
        .unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=SKETCHLOOP_GIT_HASH={hash}");
    println!("cargo:rerun-if-env-changed=SKETCHLOOP_GIT_HASH");

    for tracked in [".git/HEAD", ".git/packed-refs"] {
        if Path::new(tracked).exists() {
            println!("cargo:rerun-if-changed={tracked}");
        }
    }
}

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!hash.is_empty()).then_some(hash)
}
