mod common;
use common::{day, many};
use rattendance::core::{clamp_page, paginate, total_pages};

#[test]
fn test_twenty_five_records_page_size_ten() {
    let records = many(25, day(2026, 10, 21));

    let first = paginate(&records, 1, 10);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.items[0].id, 1);

    let last = paginate(&records, 3, 10);
    assert_eq!(last.items.len(), 5);
    assert_eq!(last.items.first().map(|r| r.id), Some(21));
    assert_eq!(last.items.last().map(|r| r.id), Some(25));

    let past = paginate(&records, 4, 10);
    assert!(past.items.is_empty());
    assert_eq!(past.total_pages, 3);
}

#[test]
fn test_pages_partition_the_input() {
    let records = many(23, day(2026, 10, 21));
    let pages = total_pages(records.len(), 4);
    assert_eq!(pages, 6);

    let ids: Vec<u64> = (1..=pages)
        .flat_map(|p| paginate(&records, p, 4).items)
        .map(|r| r.id)
        .collect();

    let expected: Vec<u64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_empty_input_has_one_empty_page() {
    let records = many(0, day(2026, 10, 21));
    let slice = paginate(&records, 1, 10);

    assert_eq!(slice.total_pages, 1);
    assert!(slice.items.is_empty());
}

#[test]
fn test_exact_multiple() {
    assert_eq!(total_pages(20, 10), 2);
    assert_eq!(total_pages(21, 10), 3);
    assert_eq!(total_pages(1, 10), 1);
}

#[test]
fn test_degenerate_arguments_never_panic() {
    let records = many(5, day(2026, 10, 21));

    let page_zero = paginate(&records, 0, 10);
    assert!(page_zero.items.is_empty());

    let size_zero = paginate(&records, 1, 0);
    assert!(size_zero.items.is_empty());
    assert_eq!(size_zero.total_pages, 1);

    let huge = paginate(&records, usize::MAX, usize::MAX);
    assert!(huge.items.is_empty());
}

#[test]
fn test_clamp_page() {
    assert_eq!(clamp_page(0, 3), 1);
    assert_eq!(clamp_page(2, 3), 2);
    assert_eq!(clamp_page(9, 3), 3);
    assert_eq!(clamp_page(5, 0), 1);
}
