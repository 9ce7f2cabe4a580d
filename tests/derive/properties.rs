use crate::fixtures::{deal, ids, Item};
use listkit::entities::{deal_board, DealStage};
use listkit::{derive_list, FilterState, SortKey};

fn catalog() -> Vec<Item> {
    vec![
        Item::new("1", "Alpha box").category("a").value(10.0).date(5).created(1).tags(&["blue"]),
        Item::new("2", "Beta box").category("b").value(10.0).date(5).created(1),
        Item::new("3", "Gamma crate").category("a").value(30.0).featured(Some(4.0)),
        Item::new("4", "Delta box").category("a").value(10.0).created(1).tags(&["boxed"]),
        Item::new("5", "Epsilon").category("b").value(30.0).date(5),
        Item::new("6", "Zeta box").value(10.0).featured(Some(4.0)),
    ]
}

#[test]
fn test_filtering_is_idempotent() {
    let items = catalog();
    let state = FilterState::new(SortKey::ValueDesc).with_query("box").with_category("a");
    let first = derive_list(&items, &state);
    let second = derive_list(&items, &state);
    assert_eq!(first, second);
    // Inputs are untouched
    assert_eq!(items, catalog());
}

#[test]
fn test_longer_query_never_matches_more() {
    let items = catalog();
    for query in ["b", "bo", "box", "a", "al", "e"] {
        let broad = derive_list(&items, &FilterState::default().with_query(query));
        let narrow = derive_list(&items, &FilterState::default().with_query(&format!("{}x", query)));
        for row in &narrow {
            assert!(broad.contains(row), "query '{}x' matched {} but '{}' did not", query, row.id, query);
        }
    }
}

#[test]
fn test_category_filter_is_exclusive() {
    let items = catalog();
    let rows = derive_list(&items, &FilterState::default().with_category("a"));
    assert!(!rows.is_empty());
    assert!(rows.iter().all(|r| r.category.as_deref() == Some("a")));

    let unfiltered = derive_list(&items, &FilterState::default());
    assert_eq!(unfiltered.len(), items.len());
}

#[test]
fn test_every_sort_key_is_stable() {
    let items = catalog();
    for key in SortKey::ALL {
        let rows = derive_list(&items, &FilterState::new(key));
        let compare = key.comparator::<Item>();
        for pair in rows.windows(2) {
            if compare(pair[0], pair[1]) == std::cmp::Ordering::Equal {
                let a = items.iter().position(|i| i.id == pair[0].id).unwrap();
                let b = items.iter().position(|i| i.id == pair[1].id).unwrap();
                assert!(a < b, "{} reordered equal records {} and {}", key, pair[0].id, pair[1].id);
            }
        }
    }
}

#[test]
fn test_price_low_uses_discounted_price() {
    let products = vec![
        crate::fixtures::product("A", 100.0, Some(0.0)),
        crate::fixtures::product("B", 100.0, Some(50.0)),
    ];
    let rows = derive_list(&products, &FilterState::new(SortKey::PriceLow));
    assert_eq!(ids(&rows), vec!["B", "A"]);
}

#[test]
fn test_board_partition_is_complete() {
    let deals = vec![
        deal("1", 100.0, 0.0, DealStage::Proposal),
        deal("2", 200.0, 50.0, DealStage::Lead),
        deal("3", 50.0, 0.0, DealStage::ClosedWon),
        deal("4", 75.0, 0.0, DealStage::Proposal),
    ];
    let state = FilterState::new(SortKey::ValueDesc);
    let filtered = derive_list(&deals, &state);
    let board = deal_board(&deals, &state);

    assert_eq!(board.buckets.len(), 6);
    assert!(board.unassigned.is_empty());
    let mut flattened: Vec<&str> = board
        .buckets
        .iter()
        .flat_map(|b| b.records.iter().map(|d| d.id.as_str()))
        .collect();
    let mut expected: Vec<&str> = filtered.iter().map(|d| d.id.as_str()).collect();
    flattened.sort();
    expected.sort();
    assert_eq!(flattened, expected);
}

#[test]
fn test_proposal_deals_sorted_by_effective_value() {
    let deals = vec![
        deal("1", 100.0, 0.0, DealStage::Proposal),
        deal("2", 200.0, 50.0, DealStage::Proposal),
        deal("3", 50.0, 0.0, DealStage::ClosedWon),
    ];
    let state = FilterState::new(SortKey::ValueDesc).with_category("proposal");
    let rows = derive_list(&deals, &state);

    assert_eq!(ids(&rows), vec!["1", "2"]);
    assert_eq!(rows[0].effective_value(), 100.0);
    assert_eq!(rows[1].effective_value(), 100.0);
}
