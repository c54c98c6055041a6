//! Destinations for exported palette files.
//!
//! Palette export depends on nothing more than [`FileSink`], the capability to
//! write some text under some file name. This module provides two
//! implementations: [`DirectorySink`] writes files into a directory on disk,
//! whereas [`MemorySink`] keeps them in memory.
use std::path::{Component, Path, PathBuf};

/// The capability to write a text file.
pub trait FileSink {
    /// Write the content to a file with the given name.
    ///
    /// Implementations perform the write exactly once and do not retry. An
    /// error means the file could not be written.
    fn write(&mut self, filename: &str, content: &str) -> std::io::Result<()>;
}

impl<S: FileSink + ?Sized> FileSink for &mut S {
    fn write(&mut self, filename: &str, content: &str) -> std::io::Result<()> {
        (**self).write(filename, content)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A file sink writing into a directory.
///
/// The directory must exist. A file with the same name is overwritten. Files
/// are only ever written directly into the directory.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    /// Create a new sink for the given directory.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Access the directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileSink for DirectorySink {
    /// Write the file into this sink's directory.
    ///
    /// The file name must be a single, normal path component. Names with path
    /// separators, `.` or `..`, a root, or a prefix are rejected with
    /// [`ErrorKind::InvalidInput`](std::io::ErrorKind::InvalidInput), so that
    /// the file never ends up outside the directory.
    fn write(&mut self, filename: &str, content: &str) -> std::io::Result<()> {
        let mut components = Path::new(filename).components();
        let (Some(Component::Normal(_)), None) = (components.next(), components.next()) else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("file name {:?} is not a plain file name", filename),
            ));
        };

        let path = self.root.join(filename);
        log::debug!("writing {} bytes to {}", content.len(), path.display());
        std::fs::write(path, content)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A file sink keeping files in memory.
///
/// ```
/// # use swatchbook::sink::{FileSink, MemorySink};
/// let mut sink = MemorySink::new();
/// sink.write("empty.gpl", "GIMP Palette\n")?;
/// assert_eq!(sink.get("empty.gpl"), Some("GIMP Palette\n"));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    files: Vec<(String, String)>,
}

impl MemorySink {
    /// Create a new, empty memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the content most recently written under the file name.
    pub fn get(&self, filename: &str) -> Option<&str> {
        self.files
            .iter()
            .rev()
            .find(|(name, _)| name == filename)
            .map(|(_, content)| content.as_str())
    }

    /// Get all writes in order.
    pub fn files(&self) -> &[(String, String)] {
        &self.files
    }

    /// Determine the number of writes.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Determine whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FileSink for MemorySink {
    fn write(&mut self, filename: &str, content: &str) -> std::io::Result<()> {
        self.files.push((filename.to_string(), content.to_string()));
        Ok(())
    }
}

// ====================================================================================================================
