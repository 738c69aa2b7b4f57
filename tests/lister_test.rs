use std::fs;
use tempfile::TempDir;
use workergen::error::Error;
use workergen::lister::list_files;

#[test]
fn test_list_files_pre_order() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("tpl");
    fs::create_dir_all(root.join("src/nested")).unwrap();
    fs::create_dir_all(root.join("test")).unwrap();
    fs::write(root.join("package.json"), "{}").unwrap();
    fs::write(root.join("src/index.ts"), "").unwrap();
    fs::write(root.join("src/nested/util.ts"), "").unwrap();
    fs::write(root.join("test/index.spec.ts"), "").unwrap();

    let files = list_files(&root).unwrap();

    assert_eq!(
        files,
        vec![
            root.clone(),
            root.join("package.json"),
            root.join("src"),
            root.join("src/index.ts"),
            root.join("src/nested"),
            root.join("src/nested/util.ts"),
            root.join("test"),
            root.join("test/index.spec.ts"),
        ]
    );
}

#[test]
fn test_list_files_is_deterministic() {
    let temp_dir = TempDir::new().unwrap();
    for name in ["c", "a", "b"] {
        fs::write(temp_dir.path().join(name), name).unwrap();
    }

    let first = list_files(temp_dir.path()).unwrap();
    let second = list_files(temp_dir.path()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first[0], temp_dir.path());
}

#[test]
fn test_list_files_missing_root() {
    let temp_dir = TempDir::new().unwrap();
    let result = list_files(temp_dir.path().join("missing"));

    assert!(matches!(result, Err(Error::TraversalError { .. })));
}
