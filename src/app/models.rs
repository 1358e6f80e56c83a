use std::path::PathBuf;

/// One visited directory: its path and the names of the files directly
/// inside it, in file-system enumeration order.
#[derive(Debug)]
pub struct FolderEntry {
    pub path: PathBuf,
    pub files: Vec<String>,
}

impl FolderEntry {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// The finished report: an ordered sequence of text lines, each carrying
/// its own newline. Console display and file output are both the plain
/// concatenation, so the two are byte-identical.
#[derive(Debug)]
pub struct Report {
    pub lines: Vec<String>,
    pub total_files: usize,
}

impl Report {
    pub fn as_text(&self) -> String {
        self.lines.concat()
    }
}
