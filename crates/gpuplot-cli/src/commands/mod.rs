pub mod chart;
pub mod extract;
pub mod filter;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Treat `-` (argparse convention) or an absent argument as stdio.
pub fn stdio_path(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| p.as_os_str() != "-")
}

/// Open a buffered line reader over a file or stdin.
pub fn open_input(path: Option<&Path>) -> io::Result<Box<dyn BufRead>> {
    match stdio_path(path) {
        Some(p) => Ok(Box::new(BufReader::new(File::open(p)?))),
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Open a buffered writer over a file or stdout.
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match stdio_path(path) {
        Some(p) => Ok(Box::new(BufWriter::new(File::create(p)?))),
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_stdio_path_dash_means_stdio() {
        let dash = PathBuf::from("-");
        assert!(stdio_path(Some(&dash)).is_none());
    }

    #[test]
    fn test_stdio_path_none_means_stdio() {
        assert!(stdio_path(None).is_none());
    }

    #[test]
    fn test_stdio_path_passes_real_paths() {
        let p = PathBuf::from("monitor.log");
        assert_eq!(stdio_path(Some(&p)), Some(p.as_path()));
    }
}
