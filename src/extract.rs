use std::path::Path;

use derive_more::{AsRef, Display, From};
use gamewith_weapons_utils::{fs_text_util::read_utf8, regex};
use indexmap::IndexSet;
use itertools::Itertools;
use log::{debug, info};

use crate::error::ExtractError;

/// Separates the icon caption from the weapon name in the first column.
pub const ICON_MARKER: &str = "のアイコン";

#[derive(Clone, PartialEq, Eq, Hash, Debug, From, AsRef, Display)]
#[as_ref(forward)]
pub struct WeaponName(String);

/// Weapon names without duplicates, in the order they were first seen.
#[derive(Clone, Default, Debug)]
pub struct WeaponNames(IndexSet<WeaponName>);

impl WeaponNames {
    /// Returns `false` (and leaves the list untouched) if `name` was already collected.
    pub fn insert(&mut self, name: WeaponName) -> bool {
        self.0.insert(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &WeaponName> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a WeaponNames {
    type Item = &'a WeaponName;
    type IntoIter = indexmap::set::Iter<'a, WeaponName>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// `line` must already be trimmed.
pub fn is_score_line(line: &str) -> bool {
    regex!(r"^\d+(?:\.\d+)?点$").is_match(line)
}

/// Takes the line right above a score line and returns the text after the
/// first [`ICON_MARKER`] in its first tab-separated column.
pub fn extract_name(prev_line: &str) -> Option<WeaponName> {
    let first_col = prev_line.trim().split('\t').next()?;
    let (_, name) = first_col.split_once(ICON_MARKER)?;
    (!name.is_empty()).then(|| name.to_owned().into())
}

/// Splits on `\n`, `\r\n` and lone `\r`. A trailing terminator does not
/// produce an empty last line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = regex!(r"\r\n|\r|\n").split(text).collect_vec();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

pub fn extract_weapon_names(text: &str) -> WeaponNames {
    let lines = split_lines(text);
    let mut names = WeaponNames::default();

    if lines.first().is_some_and(|line| is_score_line(line.trim())) {
        debug!("Line 1: score line has no line above it, skipped");
    }
    // Line numbers are 1-based and refer to the score line.
    for (line_no, (prev, line)) in (2..).zip(lines.iter().tuple_windows()) {
        if !is_score_line(line.trim()) {
            continue;
        }
        match extract_name(prev) {
            Some(name) => {
                debug!("Line {line_no}: {name}");
                if !names.insert(name) {
                    debug!("Line {line_no}: already collected");
                }
            }
            None => debug!("Line {line_no}: no weapon name in {prev:?}"),
        }
    }
    names
}

pub fn extract_from_file(path: &Path) -> Result<WeaponNames, ExtractError> {
    let text = read_utf8(path)?;
    info!("Read {} bytes from {path:?}", text.len());
    let names = extract_weapon_names(&text);
    info!("Extracted {} weapon names", names.len());
    Ok(names)
}
