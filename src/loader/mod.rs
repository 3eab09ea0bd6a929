pub mod jokes;
pub mod question_bank;

use crate::error::PortfolioError;
use std::io::ErrorKind;
use std::path::Path;

/// Reads a whole data file, turning "not there" into `MissingFile`.
pub(crate) fn read_data_file(path: &Path) -> Result<String, PortfolioError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PortfolioError::MissingFile {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            path: path.to_path_buf(),
        },
        _ => PortfolioError::Io(e),
    })
}
