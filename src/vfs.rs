use std::path::{Path, PathBuf};

/// A single file or directory staged in memory before anything touches disk.
#[derive(Debug, Clone)]
pub enum VirtualEntry {
    Dir {
        destination: PathBuf,
    },
    File {
        destination: PathBuf,
        contents: String,
    },
}

/// Everything one scaffold run will create, staged up front so that every
/// template read happens before the first write.
#[derive(Debug, Clone, Default)]
pub struct VirtualFS {
    pub entries: Vec<VirtualEntry>,
}
impl VirtualFS {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push_dir(&mut self, destination: PathBuf) {
        self.entries.push(VirtualEntry::Dir { destination });
    }

    pub fn push_file(&mut self, destination: PathBuf, contents: String) {
        self.entries.push(VirtualEntry::File {
            destination,
            contents,
        });
    }

    /// Relative destinations of all staged directories, in walk order.
    pub fn directories(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().filter_map(|entry| match entry {
            VirtualEntry::Dir { destination } => Some(destination.as_path()),
            VirtualEntry::File { .. } => None,
        })
    }

    /// Relative destinations and contents of all staged files, in walk order.
    pub fn files(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.entries.iter().filter_map(|entry| match entry {
            VirtualEntry::File {
                destination,
                contents,
            } => Some((destination.as_path(), contents.as_str())),
            VirtualEntry::Dir { .. } => None,
        })
    }
}
