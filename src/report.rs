use std::{
    io::{self, Write},
    path::Path,
};

use gamewith_weapons_utils::fs_text_util::write_lines_with_bom;
use log::info;

use crate::{error::ExtractError, extract::WeaponNames};

pub const DEFAULT_PREVIEW: usize = 20;

/// Prints the number of names and the first `preview` of them.
pub fn print_summary(
    out: &mut impl Write,
    names: &WeaponNames,
    preview: usize,
) -> io::Result<()> {
    writeln!(out, "extracted weapon count: {}", names.len())?;
    for (i, name) in (1..).zip(names.iter().take(preview)) {
        writeln!(out, "{i}. {name}")?;
    }
    if names.len() > preview {
        writeln!(out, "... and {} more", names.len() - preview)?;
    }
    Ok(())
}

pub fn write_names(path: &Path, names: &WeaponNames) -> Result<(), ExtractError> {
    write_lines_with_bom(path, names).map_err(|source| ExtractError::WriteOutput {
        path: path.to_owned(),
        source,
    })?;
    info!("Wrote {} names to {path:?}", names.len());
    Ok(())
}
