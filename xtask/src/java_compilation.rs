use std::path::{Path, PathBuf};

use anyhow::anyhow;
use log::info;
use xshell::{cmd, Shell};

use crate::XTaskConfig;

pub const SMOKE_TEST_CLASS: &str = "dev.lukebemish.opensesame.test.natives.ImplLookupSmokeTest";

#[derive(Clone, Debug)]
pub struct JavaTools {
    pub javac: PathBuf,
    pub java: PathBuf,
}

impl JavaTools {
    pub fn from_config(config: &XTaskConfig) -> Self {
        match &config.java_home {
            Some(java_home) => JavaTools {
                javac: java_home.join("bin/javac"),
                java: java_home.join("bin/java"),
            },
            None => JavaTools {
                javac: PathBuf::from("javac"),
                java: PathBuf::from("java"),
            },
        }
    }
}

pub fn java_sources(source_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let sources = glob::glob(format!("{}/**/*.java", source_dir.to_string_lossy()).as_str())?.map(|globbed_path| {
        Ok(globbed_path?)
    }).collect::<Result<Vec<PathBuf>, anyhow::Error>>()?;
    if sources.is_empty() {
        return Err(anyhow!("no java sources under {}", source_dir.display()));
    }
    Ok(sources)
}

pub fn compile(tools: &JavaTools, to_compile: Vec<PathBuf>, compilation_target_dir: &Path) -> anyhow::Result<()> {
    let sh = Shell::new()?;
    sh.create_dir(compilation_target_dir)?;
    let javac = &tools.javac;
    info!("compiling {} java sources into {}", to_compile.len(), compilation_target_dir.display());
    cmd!(sh, "{javac} -g -d {compilation_target_dir} {to_compile...}").run()?;
    Ok(())
}

/// Runs the smoke test against the library found in `library_dir`.
pub fn run_smoke_test(tools: &JavaTools, classes_dir: &Path, library_dir: &Path) -> anyhow::Result<()> {
    let sh = Shell::new()?;
    let java = &tools.java;
    let library_path = format!("-Djava.library.path={}", library_dir.display());
    cmd!(sh, "{java} {library_path} -cp {classes_dir} {SMOKE_TEST_CLASS}").run()?;
    Ok(())
}
