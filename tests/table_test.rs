use rowdb::common::DbError;
use rowdb::row::{Row, RowLayout};
use rowdb::storage::Table;

fn sample_row(i: u32) -> Row {
    Row::new(i, &format!("user{i}"), &format!("person{i}@example.com"))
}

#[test]
fn test_capacity_invariant_packed() {
    let layout = RowLayout::packed();
    let mut table = Table::new(layout);

    for i in 0..layout.max_rows() as u32 {
        table.insert(&sample_row(i)).unwrap();
        assert_eq!(table.num_rows(), i + 1);
    }

    assert_eq!(table.num_rows(), 1400);
    assert!(table.is_full());

    let err = table.insert(&sample_row(9999)).unwrap_err();
    assert!(matches!(err, DbError::TableFull));
    assert_eq!(table.num_rows(), 1400);
}

#[test]
fn test_capacity_invariant_nul_terminated() {
    let layout = RowLayout::nul_terminated();
    let mut table = Table::new(layout);

    for i in 0..layout.max_rows() as u32 {
        table.insert(&sample_row(i)).unwrap();
    }

    assert_eq!(table.num_rows(), 1300);
    assert!(matches!(
        table.insert(&sample_row(9999)),
        Err(DbError::TableFull)
    ));
}

#[test]
fn test_failed_insert_mutates_nothing() {
    let layout = RowLayout::packed();
    let mut table = Table::new(layout);
    for i in 0..layout.max_rows() as u32 {
        table.insert(&sample_row(i)).unwrap();
    }
    let pages_before = table.allocated_pages();

    assert!(table.insert(&sample_row(9999)).is_err());

    assert_eq!(table.num_rows(), layout.max_rows() as u32);
    assert_eq!(table.allocated_pages(), pages_before);
}

#[test]
fn test_scan_preserves_insertion_order() {
    let mut table = Table::new(RowLayout::packed());
    let rows: Vec<Row> = (0..50).map(sample_row).collect();

    for row in &rows {
        table.insert(row).unwrap();
    }

    assert_eq!(table.scan().collect::<Vec<_>>(), rows);
    // Every scan restarts from row zero and yields the same sequence.
    assert_eq!(table.scan().collect::<Vec<_>>(), rows);
}

#[test]
fn test_scan_reflects_rows_present_at_call_time() {
    let mut table = Table::new(RowLayout::packed());
    table.insert(&sample_row(0)).unwrap();
    assert_eq!(table.scan().count(), 1);

    table.insert(&sample_row(1)).unwrap();
    assert_eq!(table.scan().count(), 2);
}

#[test]
fn test_pages_allocate_lazily() {
    let layout = RowLayout::packed();
    let mut table = Table::new(layout);
    assert_eq!(table.allocated_pages(), 0);

    let rows_per_page = layout.rows_per_page() as u32;

    // Filling the first page allocates exactly one page.
    for i in 0..rows_per_page {
        table.insert(&sample_row(i)).unwrap();
        assert_eq!(table.allocated_pages(), 1);
    }

    // The next row touches page 1 for the first time.
    table.insert(&sample_row(rows_per_page)).unwrap();
    assert_eq!(table.allocated_pages(), 2);
}

#[test]
fn test_page_count_tracks_fill_level() {
    let layout = RowLayout::packed();
    let mut table = Table::new(layout);
    let rows_per_page = layout.rows_per_page() as u32;

    for i in 0..rows_per_page * 5 {
        table.insert(&sample_row(i)).unwrap();
        let expected = (i / rows_per_page + 1) as usize;
        assert_eq!(table.allocated_pages(), expected);
    }
}

#[test]
fn test_full_table_allocates_every_page() {
    let layout = RowLayout::packed();
    let mut table = Table::new(layout);
    for i in 0..layout.max_rows() as u32 {
        table.insert(&sample_row(i)).unwrap();
    }

    assert_eq!(table.allocated_pages(), rowdb::TABLE_MAX_PAGES);
}

#[test]
fn test_boundary_username_survives_page_storage() {
    let mut table = Table::new(RowLayout::packed());
    let username = "u".repeat(rowdb::COLUMN_USERNAME_SIZE);
    let email = "boundary@example.com";
    table.insert(&Row::new(1, &username, email)).unwrap();

    let row = table.scan().next().unwrap();
    assert_eq!(row.username, username);
    assert_eq!(row.email, email);
}

#[test]
fn test_rows_spanning_pages_roundtrip() {
    let layout = RowLayout::packed();
    let mut table = Table::new(layout);
    let count = layout.rows_per_page() as u32 * 3 + 5;

    for i in 0..count {
        table.insert(&sample_row(i)).unwrap();
    }

    for (i, row) in table.scan().enumerate() {
        assert_eq!(row, sample_row(i as u32));
    }
}
