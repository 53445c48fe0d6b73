use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::models::recipient::{Recipient, SaveOutcome, SavedRecipient};

/// Recipients linked to the expat customers who send to them, keyed on
/// `(phone, customer_name)`. Entries are inserted once and never updated.
#[derive(Default)]
pub struct RecipientDirectory {
    saved: RwLock<Vec<SavedRecipient>>,
}

impl RecipientDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, entries: Vec<SavedRecipient>) {
        self.saved.write().extend(entries);
    }

    pub fn save(&self, recipient: Recipient, customer_name: &str) -> SaveOutcome {
        let mut saved = self.saved.write();

        if saved
            .iter()
            .any(|entry| entry.is_same_contact(&recipient.phone, customer_name))
        {
            return SaveOutcome::AlreadyExists;
        }

        let entry = SavedRecipient {
            id: Uuid::new_v4().to_string(),
            recipient,
            customer_name: customer_name.to_string(),
            added_at: Utc::now(),
        };
        saved.insert(0, entry.clone());

        SaveOutcome::Saved { recipient: entry }
    }

    pub fn contains(&self, phone: &str, customer_name: &str) -> bool {
        self.saved
            .read()
            .iter()
            .any(|entry| entry.is_same_contact(phone, customer_name))
    }

    pub fn list(&self) -> Vec<SavedRecipient> {
        self.saved.read().clone()
    }

    pub fn search(&self, term: &str) -> Vec<SavedRecipient> {
        self.saved
            .read()
            .iter()
            .filter(|entry| entry.matches_search(term))
            .cloned()
            .collect()
    }

    pub fn for_customer(&self, customer_name: &str) -> Vec<SavedRecipient> {
        self.saved
            .read()
            .iter()
            .filter(|entry| entry.customer_name == customer_name)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.saved.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.saved.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::RecipientDirectory;
    use crate::models::recipient::{Recipient, SaveOutcome};

    fn maria() -> Recipient {
        Recipient {
            name: "Maria Dinis".to_string(),
            location: "Bissau - Praça".to_string(),
            phone: "+245 95551234".to_string(),
        }
    }

    #[test]
    fn same_phone_and_customer_is_saved_once() {
        let directory = RecipientDirectory::new();

        let first = directory.save(maria(), "Kojo Mensah");
        let second = directory.save(maria(), "Kojo Mensah");

        assert!(first.is_saved());
        assert!(matches!(second, SaveOutcome::AlreadyExists));
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn same_phone_for_another_customer_is_a_new_entry() {
        let directory = RecipientDirectory::new();
        directory.save(maria(), "Kojo Mensah");

        let other = directory.save(maria(), "Sarah Jalloh");

        assert!(other.is_saved());
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.for_customer("Sarah Jalloh").len(), 1);
    }

    #[test]
    fn existing_entry_is_not_updated() {
        let directory = RecipientDirectory::new();
        directory.save(maria(), "Kojo Mensah");

        let mut moved = maria();
        moved.location = "Gabú".to_string();
        directory.save(moved, "Kojo Mensah");

        assert_eq!(directory.list()[0].recipient.location, "Bissau - Praça");
    }

    #[test]
    fn search_covers_name_customer_and_phone() {
        let directory = RecipientDirectory::new();
        directory.save(maria(), "Kojo Mensah");

        assert_eq!(directory.search("maria").len(), 1);
        assert_eq!(directory.search("KOJO").len(), 1);
        assert_eq!(directory.search("9555").len(), 1);
        assert!(directory.search("nobody").is_empty());
    }
}
