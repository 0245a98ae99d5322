//! Where the packaged library lives for each operating system and architecture.
//!
//! The managed loader picks `dev/lukebemish/opensesame/natives/<os>/<arch>/<file>` from the jar,
//! so these names have to stay in step with it.

use std::fmt::{Display, Formatter};

use crate::errors::PlatformError;

pub const LIBRARY_NAME: &str = "opensesamenative";
pub const RESOURCE_ROOT: &str = "dev/lukebemish/opensesame/natives";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Architecture {
    I386,
    X86_64,
    Arm,
    Aarch64,
}

impl Architecture {
    pub fn name(&self) -> &'static str {
        match self {
            Architecture::I386 => "i386",
            Architecture::X86_64 => "x86_64",
            Architecture::Arm => "arm",
            Architecture::Aarch64 => "aarch64",
        }
    }

    /// Parses the value of the `os.arch` system property.
    pub fn from_os_arch(os_arch: &str) -> Result<Self, PlatformError> {
        let is_64_bit = os_arch.contains("64") || os_arch.starts_with("armv8");
        if os_arch.starts_with("aarch") || os_arch.starts_with("arm") {
            Ok(if is_64_bit { Architecture::Aarch64 } else { Architecture::Arm })
        } else if os_arch.starts_with("ppc") || os_arch.starts_with("riscv") {
            Err(PlatformError::UnsupportedArchitecture(os_arch.to_string()))
        } else {
            Ok(if is_64_bit { Architecture::X86_64 } else { Architecture::I386 })
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum OperatingSystem {
    Windows,
    Linux,
    MacOs,
}

impl OperatingSystem {
    pub fn name(&self) -> &'static str {
        match self {
            OperatingSystem::Windows => "windows",
            OperatingSystem::Linux => "linux",
            OperatingSystem::MacOs => "macos",
        }
    }

    pub fn architectures(&self) -> &'static [Architecture] {
        match self {
            OperatingSystem::Windows => &[Architecture::I386, Architecture::X86_64, Architecture::Aarch64],
            OperatingSystem::Linux => &[Architecture::I386, Architecture::X86_64, Architecture::Aarch64, Architecture::Arm],
            OperatingSystem::MacOs => &[Architecture::X86_64, Architecture::Aarch64],
        }
    }

    /// Parses the value of the `os.name` system property.
    pub fn from_os_name(os_name: &str) -> Result<Self, PlatformError> {
        let lower = os_name.to_lowercase();
        if lower.starts_with("windows") {
            Ok(OperatingSystem::Windows)
        } else if lower.starts_with("linux") {
            Ok(OperatingSystem::Linux)
        } else if lower.starts_with("mac") {
            Ok(OperatingSystem::MacOs)
        } else {
            Err(PlatformError::UnsupportedOperatingSystem(os_name.to_string()))
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Platform {
    pub os: OperatingSystem,
    pub arch: Architecture,
}

impl Platform {
    pub fn new(os: OperatingSystem, arch: Architecture) -> Result<Self, PlatformError> {
        Self::checked(os, arch, os.name(), arch.name())
    }

    /// Errors name the properties as given, not the normalized names.
    pub fn from_properties(os_name: &str, os_arch: &str) -> Result<Self, PlatformError> {
        let os = OperatingSystem::from_os_name(os_name)?;
        let arch = Architecture::from_os_arch(os_arch)?;
        Self::checked(os, arch, os_name, os_arch)
    }

    fn checked(os: OperatingSystem, arch: Architecture, os_name: &str, os_arch: &str) -> Result<Self, PlatformError> {
        if !os.architectures().contains(&arch) {
            return Err(PlatformError::UnsupportedCombination {
                os: os_name.to_string(),
                arch: os_arch.to_string(),
            });
        }
        Ok(Self { os, arch })
    }

    pub fn current() -> Result<Self, PlatformError> {
        let arch = match std::env::consts::ARCH {
            "x86" => "i386",
            other => other,
        };
        Self::from_properties(std::env::consts::OS, arch)
    }

    /// Accepts rustc target triples such as `x86_64-unknown-linux-gnu` or `aarch64-apple-darwin`.
    pub fn from_target_triple(triple: &str) -> Result<Self, PlatformError> {
        let unknown = || PlatformError::UnknownTargetTriple(triple.to_string());
        let mut parts = triple.split('-');
        let arch = parts.next().filter(|arch| !arch.is_empty()).ok_or_else(unknown)?;
        let rest = parts.collect::<Vec<_>>();
        let os = if rest.contains(&"windows") {
            OperatingSystem::Windows
        } else if rest.contains(&"linux") {
            OperatingSystem::Linux
        } else if rest.contains(&"darwin") {
            OperatingSystem::MacOs
        } else {
            return Err(unknown());
        };
        let arch = match arch {
            "i386" | "i586" | "i686" => Architecture::I386,
            "x86_64" => Architecture::X86_64,
            "aarch64" => Architecture::Aarch64,
            arm if arm.starts_with("arm") || arm.starts_with("thumbv7") => Architecture::Arm,
            _ => return Err(PlatformError::UnsupportedArchitecture(arch.to_string())),
        };
        Self::new(os, arch)
    }

    pub fn library_file_name(&self) -> String {
        match self.os {
            OperatingSystem::Linux => format!("lib{}.so", LIBRARY_NAME),
            OperatingSystem::MacOs => format!("lib{}.dylib", LIBRARY_NAME),
            OperatingSystem::Windows => format!("{}.dll", LIBRARY_NAME),
        }
    }

    pub fn resource_path(&self) -> String {
        format!("{}/{}/{}/{}", RESOURCE_ROOT, self.os.name(), self.arch.name(), self.library_file_name())
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.os.name(), self.arch.name())
    }
}
