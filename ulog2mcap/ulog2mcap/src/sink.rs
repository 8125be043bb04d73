//! Destinations for finalized containers.

use std::{
    collections::BTreeMap,
    fs,
    io::{self, Write},
    path::{Component, Path, PathBuf},
    sync::{Mutex, PoisonError},
};

/// Receives finalized containers from conversion workers.
///
/// Only finalized bytes ever reach a sink; a topic that fails is never
/// handed over.
pub trait ContainerSink: Send + Sync {
    /// Store `container` under `file_name` and return where it ended up.
    fn persist(&self, file_name: &str, container: &[u8]) -> io::Result<PathBuf>;
}

/// Reject names that would leave the sink's namespace: `file_name` must be
/// exactly one normal path component.
fn check_file_name(file_name: &str) -> io::Result<()> {
    let mut components = Path::new(file_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{file_name}' is not a plain file name"),
        )),
    }
}

/// Writes containers into a directory.
///
/// Each container goes to a temporary file in the same directory first and
/// is renamed into place once fully written.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    /// Use `root` as output directory, creating it if needed.
    pub fn new(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContainerSink for DirectorySink {
    fn persist(&self, file_name: &str, container: &[u8]) -> io::Result<PathBuf> {
        check_file_name(file_name)?;
        let target = self.root.join(file_name);
        let mut file = tempfile::NamedTempFile::new_in(&self.root)?;
        file.write_all(container)?;
        file.as_file().sync_all()?;
        file.persist(&target).map_err(|e| e.error)?;
        Ok(target)
    }
}

/// Keeps containers in memory, keyed by file name.
#[derive(Debug, Default)]
pub struct MemorySink {
    containers: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, file_name: &str) -> Option<Vec<u8>> {
        self.containers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(file_name)
            .cloned()
    }

    pub fn file_names(&self) -> Vec<String> {
        self.containers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<u8>> {
        self.containers
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl ContainerSink for MemorySink {
    fn persist(&self, file_name: &str, container: &[u8]) -> io::Result<PathBuf> {
        check_file_name(file_name)?;
        self.containers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(file_name.to_string(), container.to_vec());
        Ok(PathBuf::from(file_name))
    }
}
