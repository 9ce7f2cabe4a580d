use crate::fixtures::{ids, Item};
use listkit::derive::group_into_board;
use listkit::{derive_board, FilterState, SortKey};

const COLUMNS: [&str; 3] = ["todo", "doing", "done"];

#[test]
fn test_every_bucket_present_in_declared_order() {
    let items = vec![Item::new("1", "x").category("done").value(5.0)];
    let board = derive_board(&items, &FilterState::default(), &COLUMNS[..], |i| i.value.unwrap_or(0.0));

    let keys: Vec<&str> = board.buckets.iter().map(|b| b.key.as_str()).collect();
    assert_eq!(keys, vec!["todo", "doing", "done"]);
    assert!(board.bucket("todo").unwrap().is_empty());
    assert!(board.bucket("doing").unwrap().is_empty());
    assert_eq!(board.bucket("done").unwrap().len(), 1);
}

#[test]
fn test_bucket_totals_and_order() {
    let items = vec![
        Item::new("1", "x").category("doing").value(10.0),
        Item::new("2", "x").category("todo").value(3.0),
        Item::new("3", "x").category("doing").value(40.0),
    ];
    let state = FilterState::new(SortKey::ValueDesc);
    let board = derive_board(&items, &state, &COLUMNS[..], |i| i.value.unwrap_or(0.0));

    let doing = board.bucket("doing").unwrap();
    assert_eq!(ids(&doing.records), vec!["3", "1"]);
    assert_eq!(doing.total, 50.0);
    assert_eq!(board.bucket("todo").unwrap().total, 3.0);
    assert_eq!(board.bucket("done").unwrap().total, 0.0);
    assert_eq!(board.grand_total(), 53.0);
}

#[test]
fn test_unknown_categories_are_kept_unassigned() {
    let items = vec![
        Item::new("1", "x").category("todo"),
        Item::new("2", "x").category("blocked"),
        Item::new("3", "x"),
    ];
    let board = group_into_board(items.iter().collect(), &COLUMNS[..], |_| 1.0);

    assert_eq!(ids(&board.unassigned), vec!["2", "3"]);
    assert_eq!(board.record_count(), 3);
    assert_eq!(board.grand_total(), 1.0);
}
