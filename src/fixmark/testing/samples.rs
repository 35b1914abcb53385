//! Curated generated-fix samples
//!
//! Samples live in `samples/` at the crate root, one generated fix per `.txt` file. Tests load
//! them by file name instead of pasting model output inline, so every test reads the same
//! vetted inputs.

use std::fs;
use std::io;
use std::path::PathBuf;

pub struct Samples;

impl Samples {
    /// Directory holding the sample files
    pub fn dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples")
    }

    /// Read one sample by file name (e.g. `"010-comment-and-fence.txt"`)
    pub fn get(name: &str) -> io::Result<String> {
        fs::read_to_string(Self::dir().join(name))
    }

    /// All sample file names, sorted
    pub fn list() -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(Self::dir())? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(".txt") {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    /// Every sample as `(name, content)`, sorted by name
    pub fn all() -> io::Result<Vec<(String, String)>> {
        Self::list()?
            .into_iter()
            .map(|name| Self::get(&name).map(|content| (name, content)))
            .collect()
    }
}
