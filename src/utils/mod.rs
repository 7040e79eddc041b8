use std::fs;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use log::trace;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

pub fn toml_from_reader<R, T>(reader: R) -> anyhow::Result<T>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut reader = BufReader::new(reader);
    let mut data = String::with_capacity(4 * 1024);
    reader.read_to_string(&mut data)?;
    Ok(toml::from_str(&data)?)
}

/// Writes the `contents` to a temporary file next to `path` and moves it to
/// `path` once everything has been written, so `path` never holds a partial file.
///
/// Missing parent directories are created.
pub fn write_atomic(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> io::Result<()> {
    let path = path.as_ref();
    trace!("writing to: {}", path.display());

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut file = NamedTempFile::new_in(parent)?;
    file.write_all(contents.as_ref())?;
    file.flush()?;
    file.persist(path).map_err(|error| error.error)?;

    Ok(())
}
