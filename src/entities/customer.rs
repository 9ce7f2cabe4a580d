use crate::derive::Record;
use crate::source::AssignId;
use crate::utils::datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a customer sits in the CRM lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CustomerStatus {
    #[default]
    Lead,
    Prospect,
    Active,
    Inactive,
    Churned,
}

impl CustomerStatus {
    pub const ALL: [CustomerStatus; 5] = [
        CustomerStatus::Lead,
        CustomerStatus::Prospect,
        CustomerStatus::Active,
        CustomerStatus::Inactive,
        CustomerStatus::Churned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Lead => "lead",
            CustomerStatus::Prospect => "prospect",
            CustomerStatus::Active => "active",
            CustomerStatus::Inactive => "inactive",
            CustomerStatus::Churned => "churned",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: CustomerStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Lifetime value
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default, deserialize_with = "datetime::deserialize_lenient")]
    pub last_contact: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "datetime::deserialize_lenient")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Customer {
    /// Secondary line shown under the name: company, falling back to email
    pub fn subtitle(&self) -> &str {
        self.company.as_deref().filter(|c| !c.is_empty()).unwrap_or(&self.email)
    }
}

impl Record for Customer {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.name.as_str()),
            Some(self.email.as_str()),
            self.company.as_deref(),
            self.phone.as_deref(),
        ]
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn category(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn sort_value(&self) -> Option<f64> {
        self.value
    }

    fn sort_date(&self) -> Option<i64> {
        self.last_contact.as_ref().map(datetime::timestamp_millis)
    }

    fn created_at(&self) -> Option<i64> {
        self.created_at.as_ref().map(datetime::timestamp_millis)
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl AssignId for Customer {
    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}
