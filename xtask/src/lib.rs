use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};
use xshell::Shell;

pub mod dist;
pub mod java_compilation;
pub mod verify;

fn default_resources_dir(workspace_dir: &Path) -> PathBuf {
    workspace_dir.join("target/natives-resources")
}

pub fn java_test_classes_dir(workspace_dir: &Path) -> PathBuf {
    workspace_dir.join("target/java-test-classes")
}

pub fn clean(workspace_dir: &Path, config: &XTaskConfig) -> anyhow::Result<()> {
    let sh = Shell::new()?;
    sh.change_dir(workspace_dir);
    for dir in [config.resources_dir.clone(), java_test_classes_dir(workspace_dir)] {
        info!("removing {}", dir.display());
        sh.remove_path(&dir)?;
    }
    Ok(())
}

fn xtask_config_path(workspace_dir: &Path) -> PathBuf {
    workspace_dir.join("xtask.config")
}

pub fn load_xtask_config(workspace_dir: &Path) -> anyhow::Result<Option<XTaskConfig>> {
    let xtask_config_path = xtask_config_path(workspace_dir);
    if xtask_config_path.exists() {
        let xtask_config_string = std::fs::read_to_string(&xtask_config_path)?;
        return Ok(Some(ron::from_str(xtask_config_string.as_str())?));
    }
    Ok(None)
}

pub fn load_or_create_xtask_config(workspace_dir: &Path) -> anyhow::Result<XTaskConfig> {
    match load_xtask_config(workspace_dir)? {
        None => {
            let config = XTaskConfig {
                resources_dir: default_resources_dir(workspace_dir),
                java_home: None,
            };
            write_xtask_config(workspace_dir, &config)?;
            Ok(config)
        }
        Some(config) => Ok(config),
    }
}

pub fn write_xtask_config(workspace_dir: &Path, config: &XTaskConfig) -> anyhow::Result<()> {
    std::fs::write(xtask_config_path(workspace_dir), ron::to_string(config)?)?;
    Ok(())
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct XTaskConfig {
    pub resources_dir: PathBuf,
    pub java_home: Option<PathBuf>,
}
