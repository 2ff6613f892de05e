//! End-to-end tests for the scan -> group -> report pipeline.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use dupelist::cli::CliArgs;
use dupelist::duplicates::FileMap;
use dupelist::error::ExitCode;
use dupelist::output::FileCollection;

fn write_file(path: &Path, content: &[u8]) {
    File::create(path).unwrap().write_all(content).unwrap();
}

/// Locate the artifacts written into a save directory.
fn find_artifacts(save_dir: &Path) -> (PathBuf, PathBuf, PathBuf) {
    let map_json = fs::read_dir(save_dir)
        .unwrap()
        .filter_map(Result::ok)
        .map(|e| e.path())
        .find(|p| {
            let name = p.file_name().unwrap().to_string_lossy();
            name.starts_with("filelist-") && name.ends_with(".json") && !name.contains(".list.")
        })
        .expect("map artifact not found");

    let mut txt = map_json.as_os_str().to_os_string();
    txt.push(".txt");
    let mut list = map_json.as_os_str().to_os_string();
    list.push(".list.json");
    (map_json, PathBuf::from(txt), PathBuf::from(list))
}

fn run(dir: &Path, types: &[&str], save: &Path) -> ExitCode {
    let args = CliArgs {
        dir: Some(dir.to_path_buf()),
        types: types.iter().map(|t| t.to_string()).collect(),
        savepath: Some(save.to_path_buf()),
    };
    dupelist::run_app(args).unwrap()
}

#[test]
fn test_duplicates_grouped_by_content() {
    let scan = tempdir().unwrap();
    let save = tempdir().unwrap();

    // a.txt and b.txt share content; c.log is filtered out entirely
    write_file(&scan.path().join("a.txt"), b"X");
    write_file(&scan.path().join("b.txt"), b"X");
    write_file(&scan.path().join("c.log"), b"Y");

    let code = run(scan.path(), &["txt"], save.path());
    assert_eq!(code, ExitCode::Success);

    let (map_json, _, list_json) = find_artifacts(save.path());
    let map: FileMap = serde_json::from_str(&fs::read_to_string(map_json).unwrap()).unwrap();

    assert_eq!(map.len(), 1);
    let bucket = map.values().next().unwrap();
    assert_eq!(bucket.instances.len(), 2);
    let names: Vec<_> = bucket
        .instances
        .iter()
        .map(|i| i.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert!(names.contains(&"a.txt".to_string()));
    assert!(names.contains(&"b.txt".to_string()));

    let collection: FileCollection =
        serde_json::from_str(&fs::read_to_string(list_json).unwrap()).unwrap();
    assert_eq!(collection.file_types, vec!["txt"]);
    assert_eq!(collection.dir_path, scan.path());
}

#[test]
fn test_different_content_lands_in_different_buckets() {
    let scan = tempdir().unwrap();
    let save = tempdir().unwrap();

    write_file(&scan.path().join("a.txt"), b"first");
    write_file(&scan.path().join("b.txt"), b"second");

    run(scan.path(), &["all"], save.path());

    let (map_json, _, _) = find_artifacts(save.path());
    let map: FileMap = serde_json::from_str(&fs::read_to_string(map_json).unwrap()).unwrap();
    assert_eq!(map.len(), 2);
    assert!(map.values().all(|b| b.instances.len() == 1));
}

#[test]
fn test_hidden_files_excluded_even_with_all() {
    let scan = tempdir().unwrap();
    let save = tempdir().unwrap();

    write_file(&scan.path().join(".hidden.txt"), b"invisible");
    write_file(&scan.path().join("shown.txt"), b"visible");

    run(scan.path(), &["all"], save.path());

    let (map_json, txt, list_json) = find_artifacts(save.path());
    for artifact in [&map_json, &txt, &list_json] {
        let content = fs::read_to_string(artifact).unwrap();
        assert!(
            !content.contains(".hidden.txt"),
            "{} must not mention hidden files",
            artifact.display()
        );
    }

    let map: FileMap = serde_json::from_str(&fs::read_to_string(map_json).unwrap()).unwrap();
    assert_eq!(map.values().map(|b| b.instances.len()).sum::<usize>(), 1);
}

#[test]
fn test_empty_directory_produces_empty_report() {
    let scan = tempdir().unwrap();
    let save = tempdir().unwrap();

    run(scan.path(), &["all"], save.path());

    let (map_json, txt, list_json) = find_artifacts(save.path());
    let map: FileMap = serde_json::from_str(&fs::read_to_string(map_json).unwrap()).unwrap();
    assert!(map.is_empty());

    let collection: FileCollection =
        serde_json::from_str(&fs::read_to_string(list_json).unwrap()).unwrap();
    assert!(collection.files.is_empty());
    assert!(collection.file_types.is_empty());

    assert_eq!(fs::read_to_string(txt).unwrap(), "{}");
}

#[test]
fn test_list_json_round_trip_matches_map() {
    let scan = tempdir().unwrap();
    let save = tempdir().unwrap();

    write_file(&scan.path().join("a.txt"), b"X");
    write_file(&scan.path().join("b.txt"), b"X");
    let sub = scan.path().join("nested");
    fs::create_dir(&sub).unwrap();
    write_file(&sub.join("c.log"), b"Y");
    write_file(&sub.join("d.log"), b"Z");

    run(scan.path(), &["all"], save.path());

    let (map_json, _, list_json) = find_artifacts(save.path());
    let map: FileMap = serde_json::from_str(&fs::read_to_string(map_json).unwrap()).unwrap();
    let collection: FileCollection =
        serde_json::from_str(&fs::read_to_string(list_json).unwrap()).unwrap();

    let map_total: usize = map.values().map(|b| b.instances.len()).sum();
    assert_eq!(collection.instance_count(), map_total);
    assert_eq!(map_total, 4);
}

#[test]
fn test_every_file_appears_exactly_once() {
    let scan = tempdir().unwrap();
    let save = tempdir().unwrap();

    let sub = scan.path().join("deep");
    fs::create_dir(&sub).unwrap();
    write_file(&scan.path().join("one.txt"), b"1");
    write_file(&sub.join("two.txt"), b"2");
    write_file(&sub.join("three.md"), b"3");

    run(scan.path(), &["all"], save.path());

    let (map_json, _, _) = find_artifacts(save.path());
    let map: FileMap = serde_json::from_str(&fs::read_to_string(map_json).unwrap()).unwrap();

    let mut paths: Vec<_> = map
        .values()
        .flat_map(|b| b.instances.iter().map(|i| i.path.clone()))
        .collect();
    paths.sort();
    let before = paths.len();
    paths.dedup();
    assert_eq!(before, paths.len(), "no file may appear twice");
    assert_eq!(before, 3);
}

#[test]
fn test_no_types_token_accepts_nothing() {
    let scan = tempdir().unwrap();
    let save = tempdir().unwrap();

    write_file(&scan.path().join("a.txt"), b"content");

    run(scan.path(), &[], save.path());

    let (map_json, _, _) = find_artifacts(save.path());
    let map: FileMap = serde_json::from_str(&fs::read_to_string(map_json).unwrap()).unwrap();
    assert!(map.is_empty());
}

#[test]
fn test_missing_save_dir_is_an_error() {
    let scan = tempdir().unwrap();
    let save = tempdir().unwrap();
    write_file(&scan.path().join("a.txt"), b"content");

    let args = CliArgs {
        dir: Some(scan.path().to_path_buf()),
        types: vec!["all".to_string()],
        savepath: Some(save.path().join("does-not-exist")),
    };
    assert!(dupelist::run_app(args).is_err());
}
