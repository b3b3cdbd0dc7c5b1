use hematite_db::store::{DbError, Record, ResultTable, Table};

fn _create_table(columns: Vec<&str>) -> Table {
    Table::new(
        "test_tb1".to_string(),
        columns.iter().map(|column| column.to_string()).collect(),
    )
    .unwrap()
}

fn _row(values: Vec<&str>) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn record_positional_access() {
    let mut record = Record::new(_row(vec!["one", "two", "three"]));

    assert_eq!(record.get(0).unwrap(), "one");
    assert!(matches!(record.get(3), Err(DbError::OutOfRange(3))));

    record.set(2, "four".to_string()).unwrap();
    assert_eq!(record.get(2).unwrap(), "four");
    assert!(matches!(
        record.set(5, "x".to_string()),
        Err(DbError::OutOfRange(5))
    ));
}

#[test]
fn record_grows_and_shrinks() {
    let mut record = Record::new(_row(vec!["one", "two", "three"]));

    record.remove_field(1).unwrap();
    assert_eq!(record.len(), 2);
    assert_eq!(record.get(1).unwrap(), "three");

    record.append_field(Some("test"));
    assert_eq!(record.get(2).unwrap(), "test");

    record.append_field(None);
    assert_eq!(record.get(3).unwrap(), "");

    assert!(matches!(record.remove_field(9), Err(DbError::OutOfRange(9))));
}

#[test]
fn table_rejects_empty_column_list() {
    let result = Table::new("empty".to_string(), vec![]);
    assert!(matches!(
        result,
        Err(DbError::ArityMismatch { expected: 1, got: 0 })
    ));
}

#[test]
fn table_add_row_grows_by_one_in_order() {
    let mut table = _create_table(vec!["id", "name"]);

    table.add_row(_row(vec!["1", "Jansen"])).unwrap();
    assert_eq!(table.row_count(), 1);

    table.add_row(_row(vec!["2", "Bonega"])).unwrap();
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows()[1], _row(vec!["2", "Bonega"]));
}

#[test]
fn table_add_row_checks_arity() {
    let mut table = _create_table(vec!["id", "name"]);

    let result = table.add_row(_row(vec!["1", "Jansen", "extra"]));
    assert!(matches!(
        result,
        Err(DbError::ArityMismatch { expected: 2, got: 3 })
    ));
    assert_eq!(table.row_count(), 0);
}

#[test]
fn table_add_row_rejects_duplicate_key_and_stays_unchanged() {
    let mut table = _create_table(vec!["id", "name"]);
    table.add_row(_row(vec!["1", "Jansen"])).unwrap();

    let result = table.add_row(_row(vec!["1", "Bonega"]));
    assert!(matches!(result, Err(DbError::DuplicateKey(key)) if key == "1"));

    assert_eq!(table.row_count(), 1);
    assert_eq!(table.rows()[0], _row(vec!["1", "Jansen"]));
}

#[test]
fn table_delete_row_by_key() {
    let mut table = _create_table(vec!["id", "name"]);
    table.add_row(_row(vec!["1", "Jansen"])).unwrap();
    table.add_row(_row(vec!["2", "Bonega"])).unwrap();

    let deleted = table.delete_row("1").unwrap();
    assert_eq!(deleted.get(1).unwrap(), "Jansen");
    assert_eq!(table.row_count(), 1);

    assert!(matches!(table.delete_row("1"), Err(DbError::NotFound(_))));
}

#[test]
fn table_add_column_extends_every_row() {
    let mut table = _create_table(vec!["id", "name"]);
    table.add_row(_row(vec!["1", "Jansen"])).unwrap();
    table.add_row(_row(vec!["2", "Bonega"])).unwrap();

    table.add_column("age", Some("0"));
    assert_eq!(table.columns(), _row(vec!["id", "name", "age"]));
    assert_eq!(table.rows()[0], _row(vec!["1", "Jansen", "0"]));

    table.add_column("note", None);
    assert_eq!(table.rows()[1], _row(vec!["2", "Bonega", "0", ""]));
}

#[test]
fn table_add_then_delete_column_restores_shape() {
    let mut table = _create_table(vec!["id", "name"]);
    table.add_row(_row(vec!["1", "Jansen"])).unwrap();

    let columns_before = table.columns();
    table.add_column("age", Some("30"));
    table.delete_column("age").unwrap();

    assert_eq!(table.columns(), columns_before);
    assert_eq!(table.rows()[0].len(), columns_before.len());
}

#[test]
fn table_delete_column_protects_primary_key() {
    let mut table = _create_table(vec!["id", "name"]);

    let result = table.delete_column("id");
    assert!(matches!(result, Err(DbError::PrimaryKeyProtected(name)) if name == "id"));
    assert_eq!(table.columns(), _row(vec!["id", "name"]));
}

#[test]
fn table_delete_column_unknown_name() {
    let mut table = _create_table(vec!["id", "name"]);
    assert!(matches!(
        table.delete_column("ghost"),
        Err(DbError::NotFound(_))
    ));
}

#[test]
fn table_rename_column_is_metadata_only() {
    let mut table = _create_table(vec!["id", "name"]);
    table.add_row(_row(vec!["1", "Jansen"])).unwrap();

    table.rename_column("name", "full_name").unwrap();
    assert_eq!(table.columns(), _row(vec!["id", "full_name"]));
    assert_eq!(table.rows()[0], _row(vec!["1", "Jansen"]));

    assert!(matches!(
        table.rename_column("ghost", "x"),
        Err(DbError::NotFound(_))
    ));
}

#[test]
fn table_getters_return_defensive_copies() {
    let mut table = _create_table(vec!["id", "name"]);
    table.add_row(_row(vec!["1", "Jansen"])).unwrap();

    let mut columns = table.columns();
    columns.push("intruder".to_string());
    let mut rows = table.rows();
    rows[0][1] = "mutated".to_string();
    let mut records = table.records();
    records[0].set(0, "mutated".to_string()).unwrap();

    assert_eq!(table.columns(), _row(vec!["id", "name"]));
    assert_eq!(table.rows()[0], _row(vec!["1", "Jansen"]));
}

#[test]
fn result_table_allows_duplicate_keys() {
    let mut result = ResultTable::new(_row(vec!["name"]));

    result.add_row(_row(vec!["Jansen"])).unwrap();
    result.add_row(_row(vec!["Jansen"])).unwrap();
    assert_eq!(result.row_count(), 2);
}

#[test]
fn result_table_checks_arity_only() {
    let mut result = ResultTable::new(_row(vec!["id", "name"]));

    let outcome = result.add_row(_row(vec!["1"]));
    assert!(matches!(
        outcome,
        Err(DbError::ArityMismatch { expected: 2, got: 1 })
    ));
}

#[test]
fn result_table_deletes_rows_by_position() {
    let mut result = ResultTable::new(_row(vec!["id", "name"]));
    result.add_row(_row(vec!["1", "Jansen"])).unwrap();
    result.add_row(_row(vec!["2", "Bonega"])).unwrap();

    let removed = result.delete_row(0).unwrap();
    assert_eq!(removed.get(1).unwrap(), "Jansen");
    assert_eq!(result.rows()[0], _row(vec!["2", "Bonega"]));

    assert!(matches!(result.delete_row(7), Err(DbError::OutOfRange(7))));
}

#[test]
fn result_table_may_drop_its_first_column() {
    let mut result = ResultTable::new(_row(vec!["id", "name"]));
    result.add_row(_row(vec!["1", "Jansen"])).unwrap();

    result.delete_column("id").unwrap();
    assert_eq!(result.columns(), _row(vec!["name"]));
    assert_eq!(result.rows()[0], _row(vec!["Jansen"]));
}
