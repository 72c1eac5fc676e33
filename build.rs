use std::path::Path;
use std::process::Command;

/// Embeds the short commit id into `INKPAD_GIT_HASH` for `--version` output.
fn main() {
    let describe = git(&["describe", "--always", "--dirty", "--abbrev=8"])
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=INKPAD_GIT_HASH={describe}");

    let Some(git_dir) = git(&["rev-parse", "--git-dir"]) else {
        return;
    };
    for tracked in ["HEAD", "index", "packed-refs"] {
        let path = Path::new(&git_dir).join(tracked);
        if path.exists() {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}
