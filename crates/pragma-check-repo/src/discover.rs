use crate::error::LoadError;
use camino::{Utf8Path, Utf8PathBuf};
use walkdir::WalkDir;

/// Expand artifact arguments relative to `root`.
///
/// Files are kept as given. A directory stands for every `*.json` file below
/// it, in sorted order (Hardhat writes one build-info per compilation). Input
/// order is preserved across arguments.
pub fn expand_inputs(
    root: &Utf8Path,
    inputs: &[Utf8PathBuf],
) -> Result<Vec<Utf8PathBuf>, LoadError> {
    let mut out = Vec::new();

    for input in inputs {
        let abs = root.join(input);
        if !abs.is_dir() {
            out.push(input.clone());
            continue;
        }

        let mut found = Vec::new();
        for entry in WalkDir::new(&abs) {
            let entry = entry.map_err(|source| LoadError::Walk {
                path: input.clone(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(rel) = entry
                .path()
                .strip_prefix(&abs)
                .ok()
                .and_then(|p| Utf8Path::from_path(p))
            else {
                continue;
            };
            if rel.extension() == Some("json") {
                found.push(input.join(rel));
            }
        }

        if found.is_empty() {
            return Err(LoadError::Shape {
                path: input.clone(),
                reason: "directory contains no .json artifacts".to_string(),
            });
        }

        found.sort();
        tracing::debug!(dir = %input, artifacts = found.len(), "expanded artifact directory");
        out.extend(found);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    fn write_file(path: &Utf8Path, contents: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, contents).expect("write file");
    }

    #[test]
    fn directories_expand_to_sorted_json_files() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("build-info/b.json"), "{}");
        write_file(&root.join("build-info/a.json"), "{}");
        write_file(&root.join("build-info/nested/c.json"), "{}");
        write_file(&root.join("build-info/notes.txt"), "");

        let inputs = vec![Utf8PathBuf::from("single.json"), Utf8PathBuf::from("build-info")];
        let expanded = expand_inputs(&root, &inputs).expect("expand");
        assert_eq!(
            expanded,
            vec![
                Utf8PathBuf::from("single.json"),
                Utf8PathBuf::from("build-info/a.json"),
                Utf8PathBuf::from("build-info/b.json"),
                Utf8PathBuf::from("build-info/nested/c.json"),
            ]
        );
    }

    #[test]
    fn empty_directory_is_an_error() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        std::fs::create_dir_all(root.join("empty")).expect("mkdir");

        let err = expand_inputs(&root, &[Utf8PathBuf::from("empty")]).expect_err("no artifacts");
        assert!(matches!(err, LoadError::Shape { .. }));
    }
}
