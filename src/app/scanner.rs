use crate::app::models::FolderEntry;
use ignore::WalkBuilder;
use std::collections::HashMap;
use std::path::PathBuf;

pub struct Scanner {
    root: PathBuf,
}

impl Scanner {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Walks the tree pre-order. Folders are recorded in first-encounter
    /// order (parents before children), and every file is appended to its
    /// parent folder's entry, so each folder ends up listing exactly its
    /// immediate files no matter how the walker interleaves entries.
    ///
    /// Unreadable entries are logged and skipped; the report covers
    /// everything that could be read. Non-UTF-8 file names are rendered
    /// lossily (invalid bytes become U+FFFD).
    pub fn scan(&self) -> Vec<FolderEntry> {
        let mut folders: Vec<FolderEntry> = Vec::new();
        let mut index: HashMap<PathBuf, usize> = HashMap::new();

        // standard_filters(false) turns off gitignore and hidden-file
        // filtering; this tool reports everything.
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .build();

        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("Skipping unreadable entry: {}", err);
                    continue;
                }
            };

            let is_dir = entry.file_type().map_or(false, |ty| ty.is_dir());
            if is_dir {
                index.insert(entry.path().to_path_buf(), folders.len());
                folders.push(FolderEntry {
                    path: entry.path().to_path_buf(),
                    files: Vec::new(),
                });
            } else {
                let parent = entry.path().parent().and_then(|p| index.get(p).copied());
                match parent {
                    Some(i) => folders[i]
                        .files
                        .push(entry.file_name().to_string_lossy().into_owned()),
                    None => log::warn!(
                        "File outside any visited folder: {}",
                        entry.path().display()
                    ),
                }
            }
        }

        folders
    }
}
