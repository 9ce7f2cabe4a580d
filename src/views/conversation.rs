use crate::config::ViewsConfig;
use crate::derive::{group_by_day, DayBucket, DayGrouping, Timeline};

/// State of a chat conversation panel.
#[derive(Debug, Clone)]
pub struct ConversationView<M> {
    messages: Vec<M>,
    grouping: DayGrouping,
}

impl<M> Default for ConversationView<M> {
    fn default() -> Self {
        Self::new(DayGrouping::default())
    }
}

impl<M> ConversationView<M> {
    pub fn new(grouping: DayGrouping) -> Self {
        Self {
            messages: Vec::new(),
            grouping,
        }
    }

    pub fn from_config(config: &ViewsConfig) -> Self {
        Self::new(config.day_grouping())
    }

    pub fn messages(&self) -> &[M] {
        &self.messages
    }

    pub fn set_messages(&mut self, messages: Vec<M>) {
        self.messages = messages;
    }

    /// Append a message as it arrives
    pub fn push(&mut self, message: M) {
        self.messages.push(message);
    }
}

impl<M: Timeline> ConversationView<M> {
    /// Messages bucketed by day with sender runs flagged
    pub fn days(&self) -> Vec<DayBucket<'_, M>> {
        group_by_day(&self.messages, &self.grouping)
    }
}
