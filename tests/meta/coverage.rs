//! Keeps `tests/unit` a mirror of `src`: every source file has a unit test
//! file at the same relative path and every test file contains tests

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Relative paths of every `.rs` file and directory below `base`
    fn mirror_paths(base: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        let mut pending = vec![base.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                let relative = path
                    .strip_prefix(base)
                    .map_err(|error| io::Error::other(error.to_string()))?
                    .to_string_lossy()
                    .into_owned();

                if path.is_dir() {
                    paths.insert(relative);
                    pending.push(path);
                } else if is_rust_file(&path) {
                    paths.insert(relative);
                }
            }
        }

        Ok(paths)
    }

    fn rust_files(base: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut pending = vec![base.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if is_rust_file(&path) {
                    files.push(path);
                }
            }
        }

        files.sort();
        Ok(files)
    }

    fn is_rust_file(path: &Path) -> bool {
        path.extension().and_then(|ext| ext.to_str()) == Some("rs")
    }

    fn is_module_file(path: &str) -> bool {
        path == "mod.rs" || path.ends_with("/mod.rs")
    }

    // Tests every source file has a unit test counterpart
    // Verified by adding a source file without a test file
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let src = mirror_paths(Path::new(SRC_DIR)).unwrap();
        let unit = mirror_paths(Path::new(UNIT_DIR)).unwrap();

        let missing: Vec<String> = src
            .iter()
            .filter(|path| !matches!(path.as_str(), "main.rs" | "lib.rs"))
            .filter(|path| !is_module_file(path))
            .filter(|path| !unit.contains(*path))
            .map(|path| format!("  - src/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    // Tests every unit test file has a source counterpart
    // Verified by adding a test file for a deleted module
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src = mirror_paths(Path::new(SRC_DIR)).unwrap();
        let unit = mirror_paths(Path::new(UNIT_DIR)).unwrap();

        let orphaned: Vec<String> = unit
            .iter()
            .filter(|path| !is_module_file(path))
            .filter(|path| !src.contains(*path))
            .map(|path| format!("  - {UNIT_DIR}/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without source files:\n{}",
            orphaned.join("\n")
        );
    }

    // Tests no test file is left without a #[test] function
    // Verified by emptying a unit test module
    #[test]
    fn test_all_test_files_contain_tests() {
        let mut empty = Vec::new();

        for path in rust_files(Path::new("tests")).unwrap() {
            if path.file_name().and_then(|name| name.to_str()) == Some("mod.rs") {
                continue;
            }
            let content = fs::read_to_string(&path).unwrap();
            if !content.contains("#[test]") {
                empty.push(format!("  - {}", path.display()));
            }
        }

        assert!(
            empty.is_empty(),
            "Test files without any #[test] functions:\n{}",
            empty.join("\n")
        );
    }
}
