use std::{io, path::PathBuf};

use gamewith_weapons_utils::fs_text_util::ReadTextError;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error(transparent)]
    ReadInput(#[from] ReadTextError),
    #[error("Failed to write the weapon list to {path:?}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to print the summary: {0}")]
    Console(io::Error),
}
