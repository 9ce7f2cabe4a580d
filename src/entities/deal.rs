use crate::constants::DEAL_STAGES;
use crate::derive::{derive_board, effective_value, Board, FilterState, Record};
use crate::source::AssignId;
use crate::utils::datetime;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Pipeline stage of a deal, in board column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DealStage {
    #[default]
    Lead,
    Qualified,
    Proposal,
    Negotiation,
    ClosedWon,
    ClosedLost,
}

impl DealStage {
    pub const ALL: [DealStage; 6] = [
        DealStage::Lead,
        DealStage::Qualified,
        DealStage::Proposal,
        DealStage::Negotiation,
        DealStage::ClosedWon,
        DealStage::ClosedLost,
    ];

    pub fn as_str(&self) -> &'static str {
        DEAL_STAGES[*self as usize]
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, DealStage::ClosedWon | DealStage::ClosedLost)
    }

    /// Next stage along the pipeline, `None` once the deal is closed
    pub fn next(&self) -> Option<DealStage> {
        match self {
            DealStage::Lead => Some(DealStage::Qualified),
            DealStage::Qualified => Some(DealStage::Proposal),
            DealStage::Proposal => Some(DealStage::Negotiation),
            DealStage::Negotiation => Some(DealStage::ClosedWon),
            DealStage::ClosedWon | DealStage::ClosedLost => None,
        }
    }

    /// Win probability (percent) a deal gets when moved into this stage
    pub fn default_probability(&self) -> u8 {
        match self {
            DealStage::Lead => 10,
            DealStage::Qualified => 25,
            DealStage::Proposal => 50,
            DealStage::Negotiation => 75,
            DealStage::ClosedWon => 100,
            DealStage::ClosedLost => 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    pub value: f64,
    /// Percentage discount applied to `value`
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(default)]
    pub stage: DealStage,
    #[serde(default)]
    pub probability: Option<u8>,
    #[serde(default)]
    pub expected_close_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "datetime::deserialize_lenient")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Deal {
    pub fn effective_value(&self) -> f64 {
        effective_value(self.value, self.discount)
    }

    /// A copy of this deal moved to `stage`, as a kanban drop produces it.
    ///
    /// The probability is reset to the stage default. The original is left
    /// untouched; the caller hands the copy to its update callback.
    pub fn move_to_stage(&self, stage: DealStage) -> Deal {
        Deal {
            stage,
            probability: Some(stage.default_probability()),
            ..self.clone()
        }
    }

    /// Advance one stage, or `None` when the deal is already closed
    pub fn advance(&self) -> Option<Deal> {
        self.stage.next().map(|stage| self.move_to_stage(stage))
    }

    /// Value weighted by win probability (stage default when unset)
    pub fn weighted_value(&self) -> f64 {
        let probability = self.probability.unwrap_or_else(|| self.stage.default_probability());
        self.effective_value() * f64::from(probability.min(100)) / 100.0
    }
}

impl Record for Deal {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.title.as_str()),
            self.customer_name.as_deref(),
            self.notes.as_deref(),
        ]
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn category(&self) -> Option<&str> {
        Some(self.stage.as_str())
    }

    fn sort_value(&self) -> Option<f64> {
        Some(self.effective_value())
    }

    fn sort_date(&self) -> Option<i64> {
        self.expected_close_date.map(datetime::date_timestamp_millis)
    }

    fn created_at(&self) -> Option<i64> {
        self.created_at.as_ref().map(datetime::timestamp_millis)
    }

    fn label(&self) -> &str {
        &self.title
    }
}

impl AssignId for Deal {
    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Derive the deal board: one column per stage, totals in effective value
pub fn deal_board<'a>(deals: &'a [Deal], state: &FilterState) -> Board<'a, Deal> {
    derive_board(deals, state, &DEAL_STAGES[..], Deal::effective_value)
}
