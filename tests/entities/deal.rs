use crate::fixtures::{close_on, deal, ids};
use listkit::entities::{deal_board, Deal, DealStage};
use listkit::{derive_list, FilterState, SortKey};

#[test]
fn test_stage_order_and_names() {
    let names: Vec<&str> = DealStage::ALL.iter().map(|s| s.as_str()).collect();
    assert_eq!(
        names,
        vec!["lead", "qualified", "proposal", "negotiation", "closed-won", "closed-lost"]
    );
    assert_eq!(serde_json::to_string(&DealStage::ClosedWon).unwrap(), "\"closed-won\"");
}

#[test]
fn test_move_to_stage_returns_new_deal() {
    let original = deal("1", 1000.0, 0.0, DealStage::Qualified);
    let moved = original.move_to_stage(DealStage::Negotiation);

    assert_eq!(original.stage, DealStage::Qualified);
    assert_eq!(moved.stage, DealStage::Negotiation);
    assert_eq!(moved.probability, Some(75));
    assert_eq!(moved.id, original.id);
}

#[test]
fn test_advance_stops_at_closed() {
    let negotiating = deal("1", 10.0, 0.0, DealStage::Negotiation);
    let won = negotiating.advance().unwrap();
    assert_eq!(won.stage, DealStage::ClosedWon);
    assert!(won.stage.is_closed());
    assert!(won.advance().is_none());
    assert!(deal("2", 10.0, 0.0, DealStage::ClosedLost).advance().is_none());
}

#[test]
fn test_weighted_value() {
    let mut d = deal("1", 200.0, 50.0, DealStage::Proposal);
    assert_eq!(d.weighted_value(), 50.0);
    d.probability = Some(20);
    assert_eq!(d.weighted_value(), 20.0);
}

#[test]
fn test_closing_soon_puts_undated_last() {
    let deals = vec![
        deal("undated", 1.0, 0.0, DealStage::Lead),
        close_on(deal("june", 1.0, 0.0, DealStage::Lead), 2025, 6, 1),
        close_on(deal("may", 1.0, 0.0, DealStage::Lead), 2025, 5, 1),
    ];
    let rows = derive_list(&deals, &FilterState::new(SortKey::ClosingSoon));
    assert_eq!(ids(&rows), vec!["may", "june", "undated"]);
}

#[test]
fn test_board_totals_use_effective_value() {
    let deals = vec![
        deal("1", 100.0, 0.0, DealStage::Proposal),
        deal("2", 200.0, 50.0, DealStage::Proposal),
        deal("3", 50.0, 0.0, DealStage::ClosedWon),
    ];
    let board = deal_board(&deals, &FilterState::default());

    let keys: Vec<&str> = board.buckets.iter().map(|b| b.key.as_str()).collect();
    assert_eq!(keys, vec!["lead", "qualified", "proposal", "negotiation", "closed-won", "closed-lost"]);
    assert_eq!(board.bucket("proposal").unwrap().total, 200.0);
    assert_eq!(board.bucket("closed-won").unwrap().total, 50.0);
    assert_eq!(board.bucket("lead").unwrap().total, 0.0);
}

#[test]
fn test_board_respects_query() {
    let mut tagged = deal("1", 100.0, 0.0, DealStage::Lead);
    tagged.tags = vec!["renewal".to_string()];
    let deals = vec![tagged, deal("2", 100.0, 0.0, DealStage::Lead)];

    let board = deal_board(&deals, &FilterState::default().with_query("renewal"));
    assert_eq!(ids(&board.bucket("lead").unwrap().records), vec!["1"]);
}

#[test]
fn test_deserialize_deal() {
    let json = r#"{"id": "d1", "title": "Big one", "value": 5000, "stage": "negotiation", "expected_close_date": "2025-09-30"}"#;
    let d: Deal = serde_json::from_str(json).unwrap();
    assert_eq!(d.stage, DealStage::Negotiation);
    assert_eq!(d.effective_value(), 5000.0);
    assert!(d.expected_close_date.is_some());
}
