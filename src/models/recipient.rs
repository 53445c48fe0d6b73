use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The person receiving provisions in Guinea-Bissau.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipient {
    pub name: String,
    pub location: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedRecipient {
    pub id: String,
    #[serde(flatten)]
    pub recipient: Recipient,
    pub customer_name: String,
    pub added_at: DateTime<Utc>,
}

impl SavedRecipient {
    pub fn is_same_contact(&self, phone: &str, customer_name: &str) -> bool {
        self.recipient.phone == phone && self.customer_name == customer_name
    }

    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        needle.is_empty()
            || self.recipient.name.to_lowercase().contains(&needle)
            || self.customer_name.to_lowercase().contains(&needle)
            || self.recipient.phone.contains(term.trim())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SaveOutcome {
    Saved { recipient: SavedRecipient },
    AlreadyExists,
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved { .. })
    }
}
