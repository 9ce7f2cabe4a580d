//! Day bucketing for chat transcripts.
//!
//! Messages are split by calendar day and, inside each day, a message is
//! flagged `grouped` when it directly follows one from the same sender within
//! the grouping window. Renderers use the flag to skip repeated avatars and
//! sender names.

use crate::constants::{DAY_KEY_FORMAT, DEFAULT_MESSAGE_GROUP_WINDOW_MINUTES};
use crate::utils::datetime;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// A message that can be placed on a conversation timeline.
pub trait Timeline {
    fn sender(&self) -> &str;
    fn sent_at(&self) -> &DateTime<Utc>;
}

/// Options controlling day bucketing.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGrouping {
    /// Maximum gap between two messages of the same sender to group them
    pub window: Duration,
    /// chrono format used to build day keys
    pub day_format: String,
}

impl Default for DayGrouping {
    fn default() -> Self {
        Self {
            window: Duration::minutes(DEFAULT_MESSAGE_GROUP_WINDOW_MINUTES),
            day_format: DAY_KEY_FORMAT.to_string(),
        }
    }
}

impl DayGrouping {
    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupedMessage<'a, M> {
    pub message: &'a M,
    /// Same sender as the previous message of the day, within the window
    pub grouped: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket<'a, M> {
    pub day: String,
    pub messages: Vec<GroupedMessage<'a, M>>,
}

/// Bucket messages by day in first-seen order and flag grouped runs.
///
/// Each message is compared only with the message immediately before it in
/// the same day bucket.
pub fn group_by_day<'a, M: Timeline>(messages: &'a [M], options: &DayGrouping) -> Vec<DayBucket<'a, M>> {
    let mut buckets: Vec<DayBucket<'a, M>> = Vec::new();
    let mut index_by_day: HashMap<String, usize> = HashMap::new();

    for message in messages {
        let day = datetime::day_key(message.sent_at(), &options.day_format);
        let index = *index_by_day.entry(day.clone()).or_insert_with(|| {
            buckets.push(DayBucket {
                day,
                messages: Vec::new(),
            });
            buckets.len() - 1
        });

        let bucket = &mut buckets[index];
        let grouped = bucket
            .messages
            .last()
            .is_some_and(|prev| continues_run(prev.message, message, options.window));
        bucket.messages.push(GroupedMessage { message, grouped });
    }

    buckets
}

fn continues_run<M: Timeline>(prev: &M, current: &M, window: Duration) -> bool {
    prev.sender() == current.sender() && (*current.sent_at() - *prev.sent_at()).abs() < window
}
