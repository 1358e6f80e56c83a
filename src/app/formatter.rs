use crate::app::models::{FolderEntry, Report};

pub struct OutputGenerator;

impl OutputGenerator {
    /// Renders the visited folders into the report line sequence: one block
    /// per folder (header, indented file names, count) plus the trailing
    /// total. Each line carries its own newline so the report can be
    /// printed or written verbatim.
    pub fn generate_report(folders: &[FolderEntry]) -> Report {
        let mut lines = Vec::new();
        let mut total_files = 0;

        for folder in folders {
            total_files += folder.file_count();

            lines.push(format!("\nFolder: {}\n", folder.path.display()));
            for name in &folder.files {
                lines.push(format!("  {}\n", name));
            }
            lines.push(format!(
                "Number of files in this folder: {}\n",
                folder.file_count()
            ));
        }

        lines.push(format!("\nTotal number of files: {}\n", total_files));

        Report { lines, total_files }
    }
}
