use std::{
    io::{self, BufWriter, Write},
    path::PathBuf,
    string::FromUtf8Error,
};

use fs_err::File;

/// Byte-order mark prepended to written files so that spreadsheet tools
/// detect UTF-8.
pub const UTF8_BOM: &str = "\u{feff}";

#[derive(Debug, thiserror::Error)]
pub enum ReadTextError {
    #[error("Input file was not found: {0:?}")]
    NotFound(PathBuf),
    #[error("An I/O error occurred when reading the input file: {0}")]
    IOError(io::Error),
    #[error("Input file {path:?} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
}

/// Reads the whole file into memory. A leading BOM, if any, is kept.
pub fn read_utf8(path: impl Into<PathBuf>) -> Result<String, ReadTextError> {
    let path = path.into();
    let bytes = fs_err::read(&path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ReadTextError::NotFound(path.clone()),
        _ => ReadTextError::IOError(e),
    })?;
    String::from_utf8(bytes).map_err(|source| ReadTextError::InvalidUtf8 { path, source })
}

/// Creates (or truncates) `path` and writes the BOM followed by each line
/// terminated with `\n`.
pub fn write_lines_with_bom<P, I>(path: P, lines: I) -> io::Result<()>
where
    P: Into<PathBuf>,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(UTF8_BOM.as_bytes())?;
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::{read_utf8, write_lines_with_bom, ReadTextError};

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_lines_with_bom(&path, ["ドラゴンソード", "まもりの盾"]).unwrap();

        let bytes = fs_err::read(&path).unwrap();
        assert_eq!(&bytes[..3], b"\xEF\xBB\xBF");
        assert_eq!(
            read_utf8(&path).unwrap(),
            "\u{feff}ドラゴンソード\nまもりの盾\n"
        );
    }

    #[test]
    fn test_write_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs_err::write(&path, "a much longer previous content\n".repeat(10)).unwrap();
        write_lines_with_bom(&path, ["x"]).unwrap();
        assert_eq!(fs_err::read(&path).unwrap(), b"\xEF\xBB\xBFx\n");
    }

    #[test]
    fn test_write_empty_list_is_only_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_lines_with_bom(&path, Vec::<String>::new()).unwrap();
        assert_eq!(fs_err::read(&path).unwrap(), b"\xEF\xBB\xBF");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.txt");
        assert!(write_lines_with_bom(&path, ["x"]).is_err());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        match read_utf8(&path) {
            Err(ReadTextError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("Unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sjis.txt");
        // "剣" in Shift_JIS
        fs_err::write(&path, b"\x8c\x95\n4\x93\x5f\n").unwrap();
        assert!(matches!(
            read_utf8(&path),
            Err(ReadTextError::InvalidUtf8 { .. })
        ));
    }
}
