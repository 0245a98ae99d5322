use jni::JNIEnv;
use log::{debug, error, warn};
use thiserror::Error;

pub const ILLEGAL_STATE_EXCEPTION: &str = "java/lang/IllegalStateException";

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("could not resolve class {class}")]
    ClassNotResolved {
        class: &'static str,
        #[source]
        source: jni::errors::Error,
    },
    #[error("could not resolve static field {class}.{name}:{descriptor}")]
    FieldNotResolved {
        class: &'static str,
        name: &'static str,
        descriptor: &'static str,
        #[source]
        source: jni::errors::Error,
    },
    #[error("could not read static field {class}.{name}")]
    FieldNotRead {
        class: &'static str,
        name: &'static str,
        #[source]
        source: jni::errors::Error,
    },
    #[error("static field {class}.{name} is null")]
    NullValue {
        class: &'static str,
        name: &'static str,
    },
}

impl LookupError {
    fn jni_source(&self) -> Option<&jni::errors::Error> {
        match self {
            LookupError::ClassNotResolved { source, .. } |
            LookupError::FieldNotResolved { source, .. } |
            LookupError::FieldNotRead { source, .. } => Some(source),
            LookupError::NullValue { .. } => None,
        }
    }

    /// True when the host already holds a pending exception describing this failure.
    pub fn is_pending(&self) -> bool {
        matches!(self.jni_source(), Some(jni::errors::Error::JavaException))
    }

    /// Leaves the caller's environment with an exception pending for this error.
    pub fn raise(&self, env: &mut JNIEnv) {
        if self.is_pending() {
            debug!("{}, leaving pending exception to caller", self);
            return;
        }
        warn!("{}, throwing {}", self, ILLEGAL_STATE_EXCEPTION);
        if let Err(err) = env.throw_new(ILLEGAL_STATE_EXCEPTION, self.to_string()) {
            error!("failed to throw {}: {}", ILLEGAL_STATE_EXCEPTION, err);
        }
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum PlatformError {
    #[error("unsupported operating system for opensesame native lookup provider: {0}")]
    UnsupportedOperatingSystem(String),
    #[error("unsupported architecture for opensesame native lookup provider: {0}")]
    UnsupportedArchitecture(String),
    #[error("unsupported architecture and operating system combination for opensesame native lookup provider: {arch}, {os}")]
    UnsupportedCombination {
        os: String,
        arch: String,
    },
    #[error("unrecognized target triple: {0}")]
    UnknownTargetTriple(String),
}
