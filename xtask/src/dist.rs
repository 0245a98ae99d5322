use std::fs;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use clap::ValueEnum;
use log::info;
use xshell::{cmd, Shell};

use opensesamenative::platform::Platform;

use crate::XTaskConfig;

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Profile {
    Debug,
    Release,
}

impl Profile {
    fn target_subdir(&self) -> &'static str {
        match self {
            Profile::Debug => "debug",
            Profile::Release => "release",
        }
    }
}

pub fn target_platform(target: Option<&str>) -> anyhow::Result<Platform> {
    Ok(match target {
        None => Platform::current()?,
        Some(triple) => Platform::from_target_triple(triple)?,
    })
}

/// Where cargo leaves the library for this target and profile.
pub fn artifact_path(workspace_dir: &Path, target: Option<&str>, profile: Profile, platform: &Platform) -> PathBuf {
    let mut dir = workspace_dir.join("target");
    if let Some(triple) = target {
        dir.push(triple);
    }
    dir.join(profile.target_subdir()).join(platform.library_file_name())
}

pub fn build_library(workspace_dir: &Path, target: Option<&str>, profile: Profile) -> anyhow::Result<()> {
    let sh = Shell::new()?;
    sh.change_dir(workspace_dir);
    let mut args = vec![];
    if let Some(triple) = target {
        args.push("--target".to_string());
        args.push(triple.to_string());
    }
    if profile == Profile::Release {
        args.push("--release".to_string());
    }
    cmd!(sh, "cargo build -p opensesame-native --lib {args...}").run()?;
    Ok(())
}

/// Builds the library and lays it out under the resources dir the way the managed loader looks for it.
pub fn dist(workspace_dir: &Path, config: &XTaskConfig, target: Option<&str>, profile: Profile) -> anyhow::Result<PathBuf> {
    let platform = target_platform(target)?;
    build_library(workspace_dir, target, profile)?;
    let artifact = artifact_path(workspace_dir, target, profile, &platform);
    if !artifact.exists() {
        return Err(anyhow!("expected build output at {}", artifact.display()));
    }
    let destination = config.resources_dir.join(platform.resource_path());
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(&artifact, &destination)?;
    info!("packaged {} for {} at {}", artifact.display(), platform, destination.display());
    Ok(destination)
}

#[cfg(test)]
pub mod test {
    use std::path::Path;

    use crate::dist::{artifact_path, Profile, target_platform};

    #[test]
    pub fn test_cross_artifact_path() {
        let platform = target_platform(Some("aarch64-apple-darwin")).unwrap();
        let path = artifact_path(Path::new("/ws"), Some("aarch64-apple-darwin"), Profile::Release, &platform);
        assert_eq!(path, Path::new("/ws/target/aarch64-apple-darwin/release/libopensesamenative.dylib"));
    }

    #[test]
    pub fn test_host_artifact_path() {
        let platform = target_platform(Some("x86_64-pc-windows-msvc")).unwrap();
        let path = artifact_path(Path::new("/ws"), None, Profile::Debug, &platform);
        assert_eq!(path, Path::new("/ws/target/debug/opensesamenative.dll"));
    }
}
