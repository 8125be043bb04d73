//! Decoded-log discovery and loading.

use std::{
    fs,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use ulog2mcap::core::DecodedLog;

/// Extension of decoded-log documents.
pub const INPUT_EXTENSION: &str = "json";

/// One decoded log found under the input path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub path: PathBuf,
    /// Parent directory relative to the input root, empty for a single file.
    pub relative_dir: PathBuf,
}

impl InputFile {
    fn stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("log")
    }

    /// Directory receiving this log's containers: `<out>/<rel>/<stem>`.
    pub fn output_dir(&self, output_root: &Path) -> PathBuf {
        output_root.join(&self.relative_dir).join(self.stem())
    }
}

/// List decoded logs: `input` itself when it is a file, otherwise every
/// `*.json` below it, sorted by path.
pub fn discover_inputs(input: &Path) -> Result<Vec<InputFile>> {
    if input.is_file() {
        return Ok(vec![InputFile {
            path: input.to_path_buf(),
            relative_dir: PathBuf::new(),
        }]);
    }
    if !input.is_dir() {
        bail!("input path {} does not exist", input.display());
    }

    let pattern = input.join("**").join(format!("*.{INPUT_EXTENSION}"));
    let pattern = pattern
        .to_str()
        .with_context(|| format!("input path {} is not valid UTF-8", input.display()))?;

    let mut files = Vec::new();
    for entry in glob::glob(pattern)? {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        let relative_dir = path
            .parent()
            .and_then(|parent| parent.strip_prefix(input).ok())
            .map(Path::to_path_buf)
            .unwrap_or_default();
        files.push(InputFile { path, relative_dir });
    }
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

pub fn load_log(path: &Path) -> Result<DecodedLog> {
    let file = fs::File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse decoded log {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_file_maps_to_stem_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flight_01.json");
        fs::write(&path, "{}").unwrap();

        let inputs = discover_inputs(&path).unwrap();

        assert_eq!(inputs.len(), 1);
        assert_eq!(
            inputs[0].output_dir(Path::new("out")),
            Path::new("out/flight_01")
        );
    }

    #[test]
    fn directory_is_walked_recursively() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("day1/drone_a")).unwrap();
        fs::write(dir.path().join("top.json"), "{}").unwrap();
        fs::write(dir.path().join("day1/drone_a/run.json"), "{}").unwrap();
        fs::write(dir.path().join("day1/notes.txt"), "").unwrap();

        let inputs = discover_inputs(dir.path()).unwrap();
        let outputs: Vec<_> = inputs
            .iter()
            .map(|i| i.output_dir(Path::new("out")))
            .collect();

        assert_eq!(
            outputs,
            vec![
                PathBuf::from("out/day1/drone_a/run"),
                PathBuf::from("out/top"),
            ]
        );
    }

    #[test]
    fn missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_inputs(&dir.path().join("absent")).is_err());
    }
}
