use crate::fixtures::{customer, ids};
use listkit::entities::{Customer, CustomerStatus};
use listkit::{derive_list, FilterState, Record, SortKey};

#[test]
fn test_subtitle_falls_back_to_email() {
    let mut c = customer("1", "Ada", "ada@example.com", CustomerStatus::Active);
    assert_eq!(c.subtitle(), "ada@example.com");

    c.company = Some(String::new());
    assert_eq!(c.subtitle(), "ada@example.com");

    c.company = Some("Analytical Engines".to_string());
    assert_eq!(c.subtitle(), "Analytical Engines");
}

#[test]
fn test_search_covers_contact_fields_and_tags() {
    let mut c = customer("1", "Ada Lovelace", "ada@example.com", CustomerStatus::Lead);
    c.phone = Some("+44 20 7946 0000".to_string());
    c.tags = vec!["VIP".to_string()];

    for query in ["lovelace", "EXAMPLE.COM", "7946", "vip"] {
        assert!(FilterState::default().with_query(query).matches(&c), "query {}", query);
    }
    assert!(!FilterState::default().with_query("babbage").matches(&c));
}

#[test]
fn test_status_filter_uses_kebab_values() {
    let customers = vec![
        customer("1", "A", "a@x.io", CustomerStatus::Lead),
        customer("2", "B", "b@x.io", CustomerStatus::Churned),
        customer("3", "C", "c@x.io", CustomerStatus::Lead),
    ];
    let rows = derive_list(&customers, &FilterState::default().with_category("lead"));
    assert_eq!(ids(&rows), vec!["1", "3"]);
    assert_eq!(customers[1].category(), Some("churned"));
}

#[test]
fn test_deserialize_with_missing_and_malformed_fields() {
    let json = r#"{
        "id": "c-1",
        "name": "Grace",
        "email": "grace@example.com",
        "status": "prospect",
        "last_contact": "not a date",
        "created_at": "2025-02-01"
    }"#;
    let c: Customer = serde_json::from_str(json).unwrap();

    assert_eq!(c.status, CustomerStatus::Prospect);
    assert!(c.company.is_none());
    assert!(c.last_contact.is_none());
    assert!(c.created_at.is_some());
    assert!(c.tags.is_empty());
}

#[test]
fn test_name_sort() {
    let customers = vec![
        customer("1", "zoe", "z@x.io", CustomerStatus::Lead),
        customer("2", "Adam", "a@x.io", CustomerStatus::Lead),
    ];
    assert_eq!(ids(&derive_list(&customers, &FilterState::new(SortKey::NameAsc))), vec!["2", "1"]);
}
