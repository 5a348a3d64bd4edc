// Embed git hash for --version. Optional; no git = plain package version.
fn main() {
    let version = env!("CARGO_PKG_VERSION");
    let hash = std::process::Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty());

    match hash {
        Some(hash) => {
            println!("cargo:rustc-env=SCENE_DIRECTOR_GIT_HASH={hash}");
            println!("cargo:rustc-env=SCENE_DIRECTOR_VERSION={version} ({hash})");
        }
        None => println!("cargo:rustc-env=SCENE_DIRECTOR_VERSION={version}"),
    }
}
