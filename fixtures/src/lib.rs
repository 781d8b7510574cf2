//! Golden cases for the summary tests: every `<name>.txt` under a root
//! directory paired with the expected report in `<name>.out`.

use std::path::{Path, PathBuf};
use std::{fs, io};

#[derive(Debug, Clone)]
pub struct Case {
    pub name: String,
    pub input: PathBuf,
    /// Expected report, without the trailing newline.
    pub expected: String,
}

/// Walks `root` recursively. A `.txt` without a matching `.out` is an error.
pub fn cases(root: &Path) -> io::Result<Vec<Case>> {
    let mut inputs = Vec::new();
    walk(root, &mut inputs)?;
    inputs.sort();

    inputs
        .into_iter()
        .map(|input| {
            let expected_path = input.with_extension("out");
            let expected = fs::read_to_string(&expected_path).map_err(|e| {
                io::Error::new(e.kind(), format!("{}: {e}", expected_path.display()))
            })?;
            let name = input
                .strip_prefix(root)
                .unwrap_or(&input)
                .with_extension("")
                .display()
                .to_string();
            Ok(Case {
                name,
                input,
                expected: expected.trim_end_matches(['\r', '\n']).to_string(),
            })
        })
        .collect()
}

fn walk(dir: &Path, out: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            walk(&path, out)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some("txt") {
            out.push(path);
        }
    }
    Ok(())
}
