#[macro_use]
pub mod macros;

pub mod fs_text_util;
