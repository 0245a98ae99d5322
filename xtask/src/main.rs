use std::env;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

use xtask::{clean, java_test_classes_dir, load_or_create_xtask_config, write_xtask_config, XTaskConfig};
use xtask::dist::{artifact_path, build_library, dist, Profile, target_platform};
use xtask::java_compilation::{compile, java_sources, JavaTools, run_smoke_test};
use xtask::verify::verify;

#[derive(Parser)]
pub struct OptsOuter {
    #[clap(short, long, help = "log at debug level")]
    verbose: bool,
    #[clap(subcommand)]
    xtask: OptsInner,
}

#[derive(Subcommand)]
pub enum OptsInner {
    #[clap(about = "build the native library and copy it into the resource layout")]
    Dist {
        #[clap(long, help = "rustc target triple, defaults to the host")]
        target: Option<String>,
        #[clap(long, value_enum, default_value_t = Profile::Release)]
        profile: Profile,
    },
    #[clap(about = "check a built library exports every entry point")]
    Verify {
        library: Option<PathBuf>,
    },
    #[clap(about = "call both entry points from a real jvm")]
    JavaTest {},
    #[clap(about = "set jdk used for javac and java")]
    SetJavaHome {
        java_home: PathBuf
    },
    #[clap(about = "set dir dist copies libraries into")]
    SetResourcesDir {
        resources_dir: PathBuf
    },
    #[clap(about = "removes packaged libraries and compiled test classes")]
    Clean {},
}

fn change_config_option(workspace_dir: &Path, changer: impl FnOnce(&mut XTaskConfig)) -> anyhow::Result<()> {
    let mut config = load_or_create_xtask_config(workspace_dir)?;
    changer(&mut config);
    write_xtask_config(workspace_dir, &config)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let opts: OptsOuter = OptsOuter::parse();
    SimpleLogger::new()
        .with_level(if opts.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .init()?;
    let workspace_dir = workspace_dir()?;
    let workspace_dir = &workspace_dir;
    match opts.xtask {
        OptsInner::Dist { target, profile } => {
            let config = load_or_create_xtask_config(workspace_dir)?;
            dist(workspace_dir, &config, target.as_deref(), profile)?;
        }
        OptsInner::Verify { library } => {
            let library = match library {
                Some(library) => library,
                None => {
                    let platform = target_platform(None)?;
                    let built = artifact_path(workspace_dir, None, Profile::Debug, &platform);
                    if !built.exists() {
                        build_library(workspace_dir, None, Profile::Debug)?;
                    }
                    built
                }
            };
            verify(&library)?;
        }
        OptsInner::JavaTest {} => {
            let config = load_or_create_xtask_config(workspace_dir)?;
            let tools = JavaTools::from_config(&config);
            build_library(workspace_dir, None, Profile::Debug)?;
            let platform = target_platform(None)?;
            let library = artifact_path(workspace_dir, None, Profile::Debug, &platform);
            let library_dir = library.parent().ok_or_else(|| anyhow!("no parent for {}", library.display()))?;
            let classes_dir = java_test_classes_dir(workspace_dir);
            compile(&tools, java_sources(&workspace_dir.join("tests/java"))?, &classes_dir)?;
            run_smoke_test(&tools, &classes_dir, library_dir)?;
            info!("java smoke test passed on {}", platform);
        }
        OptsInner::SetJavaHome { java_home } => {
            change_config_option(workspace_dir, |config| {
                config.java_home = Some(java_home)
            })?;
        }
        OptsInner::SetResourcesDir { resources_dir } => {
            change_config_option(workspace_dir, |config| {
                config.resources_dir = resources_dir
            })?;
        }
        OptsInner::Clean {} => {
            let config = load_or_create_xtask_config(workspace_dir)?;
            clean(workspace_dir, &config)?;
        }
    }
    Ok(())
}

fn xtask_dir() -> anyhow::Result<PathBuf> {
    Ok(PathBuf::from(env::var("CARGO_MANIFEST_DIR")?))
}

fn workspace_dir() -> anyhow::Result<PathBuf> {
    let xtask_dir = xtask_dir()?;
    Ok(xtask_dir.parent().ok_or_else(|| anyhow!("xtask has no parent dir"))?.to_path_buf())
}
