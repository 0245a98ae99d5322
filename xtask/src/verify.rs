use std::path::Path;

use itertools::Itertools;
use libloading::Library;
use log::info;
use thiserror::Error;

use opensesamenative::EXPORTED_SYMBOLS;

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error(transparent)]
    Load(#[from] libloading::Error),
    #[error("library is missing symbols: {}", .0.iter().join(", "))]
    MissingSymbols(Vec<String>),
}

/// Checks the built library exports every `nativeImplLookup` binding.
pub fn verify(library: &Path) -> Result<(), VerifyError> {
    let lib = unsafe { Library::new(library) }?;
    let missing = EXPORTED_SYMBOLS.iter().filter(|symbol| {
        unsafe { lib.get::<unsafe extern "system" fn()>(symbol.as_bytes()) }.is_err()
    }).map(|symbol| symbol.to_string()).collect_vec();
    if !missing.is_empty() {
        return Err(VerifyError::MissingSymbols(missing));
    }
    info!("{} exports {}", library.display(), EXPORTED_SYMBOLS.iter().join(", "));
    Ok(())
}
