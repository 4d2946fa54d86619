use super::*;

fn item(n: usize) -> HistoryItem {
    HistoryItem {
        message: format!("m{n}"),
        response: format!("r{n}"),
        category: "brakes".to_owned(),
        timestamp: format!("t{n}"),
    }
}

#[test]
fn missing_file_loads_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().join("history.json"));
    assert!(store.load().is_empty());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().join("history.json"));
    let items = vec![item(2), item(1)];

    store.save(&items).expect("save");

    assert_eq!(store.load(), items);
    assert!(!dir.path().join("history.json.tmp").exists());
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("mechanic").join("history.json");
    let store = JsonFileStore::new(&path);

    store.save(&[item(1)]).expect("save");

    assert!(path.exists());
    assert_eq!(store.path(), path.as_path());
}

#[test]
fn corrupt_file_loads_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("history.json");
    fs::write(&path, "[{\"message\": ").expect("write");

    assert!(JsonFileStore::new(&path).load().is_empty());
}

#[test]
fn save_overwrites_previous_history() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().join("history.json"));

    store.save(&[item(1), item(0)]).expect("first save");
    store.save(&[item(2)]).expect("second save");

    assert_eq!(store.load(), vec![item(2)]);
}

#[test]
fn default_path_ends_with_history_file() {
    if let Some(path) = default_history_path() {
        assert!(path.ends_with("mechanic/history.json"));
    }
}
