use crate::derive::{Record, Timeline};
use crate::source::AssignId;
use crate::utils::datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One chat message in a conversation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    #[serde(default)]
    pub sender_name: Option<String>,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl Timeline for Message {
    fn sender(&self) -> &str {
        &self.sender_id
    }

    fn sent_at(&self) -> &DateTime<Utc> {
        &self.sent_at
    }
}

impl Record for Message {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.text.as_str()), self.sender_name.as_deref()]
    }

    fn sort_date(&self) -> Option<i64> {
        Some(datetime::timestamp_millis(&self.sent_at))
    }
}

impl AssignId for Message {
    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}
