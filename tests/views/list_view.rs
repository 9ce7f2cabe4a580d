use crate::fixtures::{deal, ids};
use async_trait::async_trait;
use listkit::config::ViewsConfig;
use listkit::constants::DEAL_STAGES;
use listkit::entities::{Deal, DealStage};
use listkit::source::{Capabilities, InMemorySource, Operation, RecordSource, SourceError};
use std::sync::atomic::{AtomicBool, Ordering};
use listkit::views::ListView;
use listkit::{CategoryFilter, SortKey};

fn pipeline() -> Vec<Deal> {
    vec![
        deal("1", 100.0, 0.0, DealStage::Proposal),
        deal("2", 200.0, 50.0, DealStage::Proposal),
        deal("3", 50.0, 0.0, DealStage::ClosedWon),
    ]
}

#[test]
fn test_rows_follow_filter_setters() {
    let mut view = ListView::with_records(pipeline(), SortKey::ValueAsc);
    assert_eq!(ids(&view.rows()), vec!["3", "1", "2"]);

    view.set_category("proposal");
    view.set_sort(SortKey::ValueDesc);
    assert_eq!(ids(&view.rows()), vec!["1", "2"]);

    view.set_query("DEAL 2");
    assert_eq!(ids(&view.rows()), vec!["2"]);
    assert_eq!(view.filter_state().query(), "deal 2");
}

#[test]
fn test_reset_restores_defaults() {
    let mut view = ListView::with_records(pipeline(), SortKey::ValueAsc);
    view.set_category("closed-won");
    view.set_query("zzz");
    view.set_sort(SortKey::Newest);

    view.reset_filters();
    let state = view.filter_state();
    assert_eq!(state.query(), "");
    assert_eq!(state.category, CategoryFilter::All);
    assert_eq!(state.sort, SortKey::ValueAsc);
    assert_eq!(view.rows().len(), 3);
}

#[test]
fn test_board_from_view() {
    let view = ListView::with_records(pipeline(), SortKey::ValueDesc);
    let board = view.board(&DEAL_STAGES[..], Deal::effective_value);
    assert_eq!(ids(&board.bucket("proposal").unwrap().records), vec!["1", "2"]);
    assert_eq!(board.grand_total(), 250.0);
}

#[test]
fn test_from_config_uses_default_sort() {
    let config = ViewsConfig {
        default_sort: SortKey::ClosingSoon,
        ..ViewsConfig::default()
    };
    let view: ListView<Deal> = ListView::from_config(&config);
    assert_eq!(view.filter_state().sort, SortKey::ClosingSoon);
    assert!(view.records().is_empty());
}

#[tokio::test]
async fn test_load_picks_up_records_and_capabilities() {
    let source = InMemorySource::new("crm", pipeline());
    let mut view = ListView::new(SortKey::None);
    assert!(!view.can(Operation::Create));

    let count = view.load(&source).await.unwrap();
    assert_eq!(count, 3);
    assert_eq!(view.capabilities(), Capabilities::FULL);
    assert!(view.can(Operation::Delete));
}

#[tokio::test]
async fn test_create_assigns_id_and_reloads() {
    let source = InMemorySource::new("crm", pipeline());
    let mut view = ListView::new(SortKey::None);
    view.load(&source).await.unwrap();

    let created = view.create(&source, deal("", 10.0, 0.0, DealStage::Lead)).await.unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(view.records().len(), 4);
    assert!(view.find(&created.id).is_some());
}

#[tokio::test]
async fn test_stage_move_goes_through_update() {
    let source = InMemorySource::new("crm", pipeline());
    let mut view = ListView::new(SortKey::None);
    view.load(&source).await.unwrap();

    let moved = view.find("1").unwrap().move_to_stage(DealStage::Negotiation);
    view.update(&source, moved).await.unwrap();

    assert_eq!(view.find("1").unwrap().stage, DealStage::Negotiation);
    view.set_category("negotiation");
    assert_eq!(ids(&view.rows()), vec!["1"]);
}

#[tokio::test]
async fn test_delete_and_missing_record() {
    let source = InMemorySource::new("crm", pipeline());
    let mut view = ListView::new(SortKey::None);
    view.load(&source).await.unwrap();

    view.delete(&source, "3").await.unwrap();
    assert_eq!(view.records().len(), 2);

    let err = view.delete(&source, "3").await.unwrap_err();
    assert!(matches!(err, SourceError::NotFound(_)));
    assert_eq!(view.records().len(), 2);
}

#[tokio::test]
async fn test_read_only_source_refuses_mutations() {
    let source = InMemorySource::new("crm", pipeline()).with_capabilities(Capabilities::READ_ONLY);
    let mut view = ListView::new(SortKey::None);
    view.load(&source).await.unwrap();

    assert!(!view.can(Operation::Update));
    let err = view.update(&source, deal("1", 1.0, 0.0, DealStage::Lead)).await.unwrap_err();
    assert!(matches!(err, SourceError::Unsupported("update")));
    assert_eq!(source.len().await, 3);
    assert_eq!(view.find("1").unwrap().value, 100.0);
}

/// Accepts writes, but its reads go down right after the first write lands
struct ReadsFailAfterWrite {
    inner: InMemorySource<Deal>,
    reads_down: AtomicBool,
}

#[async_trait]
impl RecordSource<Deal> for ReadsFailAfterWrite {
    fn source_name(&self) -> &str {
        "crm"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::FULL
    }

    async fn fetch_all(&self) -> Result<Vec<Deal>, SourceError> {
        if self.reads_down.load(Ordering::SeqCst) {
            return Err(SourceError::Backend("timeout".to_string()));
        }
        self.inner.fetch_all().await
    }

    async fn create(&self, record: Deal) -> Result<Deal, SourceError> {
        let created = self.inner.create(record).await?;
        self.reads_down.store(true, Ordering::SeqCst);
        Ok(created)
    }
}

#[tokio::test]
async fn test_create_succeeds_when_only_the_reload_fails() {
    let source = ReadsFailAfterWrite {
        inner: InMemorySource::new("crm", pipeline()),
        reads_down: AtomicBool::new(false),
    };
    let mut view = ListView::new(SortKey::None);
    view.load(&source).await.unwrap();

    let created = view.create(&source, deal("", 10.0, 0.0, DealStage::Lead)).await.unwrap();

    assert!(!created.id.is_empty());
    assert_eq!(source.inner.len().await, 4);
    // The stale snapshot stays in place until a later load succeeds
    assert_eq!(view.records().len(), 3);
}
