use std::{io::Write, path::Path};

use crate::{
    error::ExtractError,
    extract::{extract_from_file, WeaponNames},
    report::{print_summary, write_names},
};

pub mod error;
pub mod extract;
pub mod report;

/// Reads `input`, prints the summary to `out` and writes the names to `output`.
///
/// `output` is not touched unless `input` was read and scanned successfully.
pub fn run(
    input: &Path,
    output: &Path,
    preview: usize,
    out: &mut impl Write,
) -> Result<WeaponNames, ExtractError> {
    let names = extract_from_file(input)?;
    print_summary(out, &names, preview).map_err(ExtractError::Console)?;
    write_names(output, &names)?;
    writeln!(out, "\nsaved to: {}", output.display()).map_err(ExtractError::Console)?;
    Ok(names)
}
