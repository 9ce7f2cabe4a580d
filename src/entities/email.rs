use crate::constants::EMAIL_FOLDERS;
use crate::derive::Record;
use crate::source::AssignId;
use crate::utils::datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Folder {
    #[default]
    Inbox,
    Sent,
    Drafts,
    Archive,
    Spam,
    Trash,
}

impl Folder {
    pub const ALL: [Folder; 6] = [
        Folder::Inbox,
        Folder::Sent,
        Folder::Drafts,
        Folder::Archive,
        Folder::Spam,
        Folder::Trash,
    ];

    pub fn as_str(&self) -> &'static str {
        EMAIL_FOLDERS[*self as usize]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Email {
    pub id: String,
    pub subject: String,
    #[serde(default)]
    pub from_name: Option<String>,
    pub from_address: String,
    /// First line(s) of the body shown in the list
    #[serde(default)]
    pub preview: Option<String>,
    #[serde(default)]
    pub folder: Folder,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub starred: bool,
    #[serde(default)]
    pub has_attachments: bool,
    pub received_at: DateTime<Utc>,
}

impl Email {
    /// Sender shown in the list: display name, falling back to the address
    pub fn sender_display(&self) -> &str {
        self.from_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.from_address)
    }

    /// A copy marked read or unread
    pub fn with_read(&self, read: bool) -> Email {
        Email { read, ..self.clone() }
    }

    /// A copy moved to another folder
    pub fn move_to(&self, folder: Folder) -> Email {
        Email { folder, ..self.clone() }
    }
}

impl Record for Email {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.subject.as_str()),
            self.from_name.as_deref(),
            Some(self.from_address.as_str()),
            self.preview.as_deref(),
        ]
    }

    fn tags(&self) -> &[String] {
        &self.labels
    }

    fn category(&self) -> Option<&str> {
        Some(self.folder.as_str())
    }

    fn sort_date(&self) -> Option<i64> {
        Some(datetime::timestamp_millis(&self.received_at))
    }

    fn created_at(&self) -> Option<i64> {
        self.sort_date()
    }

    fn label(&self) -> &str {
        &self.subject
    }
}

impl AssignId for Email {
    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Unread count per folder, in sidebar order, every folder present
pub fn unread_counts(emails: &[Email]) -> Vec<(Folder, usize)> {
    Folder::ALL
        .into_iter()
        .map(|folder| {
            let unread = emails.iter().filter(|e| e.folder == folder && !e.read).count();
            (folder, unread)
        })
        .collect()
}
