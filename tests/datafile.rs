use std::fs;

use hematite_db::store::{DataFile, DbError, MemStore, Table, TableStore};

fn _row(values: Vec<&str>) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn _sample_table(name: &str) -> Table {
    let mut table = Table::new(name.to_string(), _row(vec!["id", "name"])).unwrap();
    table.add_row(_row(vec!["1", "Jansen"])).unwrap();
    table.add_row(_row(vec!["2", "Bonega"])).unwrap();
    table
}

#[test]
fn datafile_save_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = DataFile::new(dir.path()).unwrap();

    let table = _sample_table("people");
    store.save(&table, "people").unwrap();

    let loaded = store.load("people").unwrap();
    assert_eq!(loaded.columns(), table.columns());
    assert_eq!(loaded.rows(), table.rows());
}

#[test]
fn datafile_save_overwrites_existing_blob() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = DataFile::new(dir.path()).unwrap();

    let mut table = _sample_table("people");
    store.save(&table, "people").unwrap();

    table.add_row(_row(vec!["3", "Malaika"])).unwrap();
    store.save(&table, "people").unwrap();

    assert_eq!(store.load("people").unwrap().row_count(), 3);
    assert_eq!(store.list().unwrap(), vec!["people".to_string()]);
}

#[test]
fn datafile_lists_stored_names_sorted() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = DataFile::new(dir.path()).unwrap();

    store.save(&_sample_table("zebra"), "zebra").unwrap();
    store.save(&_sample_table("apple"), "apple").unwrap();

    assert_eq!(
        store.list().unwrap(),
        vec!["apple".to_string(), "zebra".to_string()]
    );
}

#[test]
fn datafile_load_missing_blob() {
    let dir = tempfile::tempdir().unwrap();
    let store = DataFile::new(dir.path()).unwrap();

    assert!(matches!(store.load("ghost"), Err(DbError::NotFound(_))));
}

#[test]
fn datafile_load_corrupt_blob() {
    let dir = tempfile::tempdir().unwrap();
    let store = DataFile::new(dir.path()).unwrap();

    fs::write(dir.path().join("broken.json"), "not a table at all").unwrap();
    assert!(matches!(store.load("broken"), Err(DbError::CorruptData(_))));
}

#[test]
fn datafile_delete_removes_blob() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = DataFile::new(dir.path()).unwrap();

    store.save(&_sample_table("people"), "people").unwrap();
    store.delete("people").unwrap();

    assert!(store.list().unwrap().is_empty());
    assert!(matches!(store.delete("people"), Err(DbError::NotFound(_))));
}

#[test]
fn mem_store_behaves_like_a_blob_store() {
    let mut store = MemStore::new();

    store.save(&_sample_table("people"), "people").unwrap();
    assert_eq!(store.list().unwrap(), vec!["people".to_string()]);

    let loaded = store.load("people").unwrap();
    assert_eq!(loaded.rows(), _sample_table("people").rows());

    store.delete("people").unwrap();
    assert!(matches!(store.load("people"), Err(DbError::NotFound(_))));
}
