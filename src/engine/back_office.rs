use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::customer::{Customer, CustomerStatus};
use crate::models::inventory::InventoryItem;
use crate::models::recipient::{Recipient, SaveOutcome};
use crate::models::staff::{NewStaffMember, StaffMember, StaffStatus};
use crate::store::activity::ActivityLog;
use crate::store::directory::{CustomerDirectory, StaffDirectory};
use crate::store::inventory::InventoryStore;
use crate::store::recipients::RecipientDirectory;

/// Directory and warehouse mutations that are audited alongside order changes.
pub struct BackOffice {
    recipients: Arc<RecipientDirectory>,
    inventory: Arc<InventoryStore>,
    staff: Arc<StaffDirectory>,
    customers: Arc<CustomerDirectory>,
    activity: Arc<ActivityLog>,
}

impl BackOffice {
    pub fn new(
        recipients: Arc<RecipientDirectory>,
        inventory: Arc<InventoryStore>,
        staff: Arc<StaffDirectory>,
        customers: Arc<CustomerDirectory>,
        activity: Arc<ActivityLog>,
    ) -> Self {
        Self {
            recipients,
            inventory,
            staff,
            customers,
            activity,
        }
    }

    /// A duplicate `(phone, customer_name)` pair is reported, not rejected.
    pub fn save_recipient(
        &self,
        recipient: Recipient,
        customer_name: &str,
    ) -> Result<SaveOutcome, AppError> {
        if recipient.phone.trim().is_empty() {
            return Err(AppError::BadRequest("recipient phone cannot be empty".to_string()));
        }
        if customer_name.trim().is_empty() {
            return Err(AppError::BadRequest("customer name cannot be empty".to_string()));
        }

        let name = recipient.name.clone();
        let outcome = self.recipients.save(recipient, customer_name);

        match &outcome {
            SaveOutcome::Saved { recipient } => {
                self.activity.record(
                    format!("Saved new recipient {name} for {customer_name}"),
                    None,
                );
                info!(recipient_id = %recipient.id, customer = %customer_name, "recipient saved");
            }
            SaveOutcome::AlreadyExists => {
                info!(customer = %customer_name, "recipient already in contacts");
            }
        }

        Ok(outcome)
    }

    pub fn add_sku(&self, item: InventoryItem) -> Result<InventoryItem, AppError> {
        let item = self.inventory.add(item)?;
        self.activity
            .record(format!("Added new SKU: {}", item.product_name), Some(&item.id));
        info!(sku = %item.id, stock = item.current_stock, "sku added");
        Ok(item)
    }

    pub fn update_sku(&self, item: InventoryItem) -> Result<InventoryItem, AppError> {
        let item = self.inventory.update(item)?;
        self.activity
            .record(format!("Updated SKU: {}", item.product_name), Some(&item.id));
        info!(sku = %item.id, stock = item.current_stock, "sku updated");
        Ok(item)
    }

    pub fn add_staff(&self, request: NewStaffMember) -> Result<StaffMember, AppError> {
        let member = self.staff.add(StaffMember {
            id: Uuid::new_v4().to_string(),
            name: request.name.trim().to_string(),
            email: request.email.trim().to_lowercase(),
            role: request.role,
            hub: request.hub,
            status: StaffStatus::Active,
            last_login: Utc::now(),
        })?;

        self.activity.record(
            format!(
                "Provisioned new staff account: {} ({})",
                member.name, member.role
            ),
            Some(&member.id),
        );
        info!(staff_id = %member.id, role = %member.role, "staff account provisioned");
        Ok(member)
    }

    pub fn set_staff_status(&self, id: &str, status: StaffStatus) -> Result<StaffMember, AppError> {
        let member = self.staff.set_status(id, status)?;
        let verb = match status {
            StaffStatus::Active => "Activated",
            StaffStatus::Inactive => "Suspended",
        };
        self.activity
            .record(format!("{verb} staff account: {}", member.name), Some(id));
        Ok(member)
    }

    pub fn set_customer_status(
        &self,
        id: &str,
        status: CustomerStatus,
    ) -> Result<Customer, AppError> {
        let customer = self.customers.set_status(id, status)?;
        let verb = match status {
            CustomerStatus::Active => "Unblocked",
            CustomerStatus::Blocked => "Blocked",
        };
        self.activity
            .record(format!("{verb} customer: {}", customer.name), Some(id));
        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;

    use super::BackOffice;
    use crate::error::AppError;
    use crate::models::customer::{Customer, CustomerStatus};
    use crate::models::inventory::{InventoryItem, SkuType};
    use crate::models::recipient::{Recipient, SaveOutcome};
    use crate::models::staff::{Hub, NewStaffMember, StaffRole, StaffStatus};
    use crate::store::activity::ActivityLog;
    use crate::store::activity::tests::activity_log;
    use crate::store::directory::{CustomerDirectory, StaffDirectory};
    use crate::store::inventory::InventoryStore;
    use crate::store::recipients::RecipientDirectory;

    fn back_office() -> (BackOffice, Arc<ActivityLog>) {
        let activity = Arc::new(activity_log());
        let customers = Arc::new(CustomerDirectory::new());
        customers.seed(vec![Customer {
            id: "c4".to_string(),
            name: "Ricardo Silva".to_string(),
            email: "r.silva@example.com".to_string(),
            phone: "+44 7700 900456".to_string(),
            country: "UK".to_string(),
            status: CustomerStatus::Blocked,
            total_orders: 1,
            total_spent_gbp: 45.0,
            joined_at: Utc::now(),
        }]);

        let office = BackOffice::new(
            Arc::new(RecipientDirectory::new()),
            Arc::new(InventoryStore::new()),
            Arc::new(StaffDirectory::new()),
            customers,
            activity.clone(),
        );
        (office, activity)
    }

    fn recipient() -> Recipient {
        Recipient {
            name: "Ibrahim Jalloh".to_string(),
            location: "Gabú".to_string(),
            phone: "+245 96667890".to_string(),
        }
    }

    #[test]
    fn duplicate_recipient_is_reported_without_logging() {
        let (office, activity) = back_office();

        let first = office.save_recipient(recipient(), "Sarah Jalloh").unwrap();
        let second = office.save_recipient(recipient(), "Sarah Jalloh").unwrap();

        assert!(first.is_saved());
        assert!(matches!(second, SaveOutcome::AlreadyExists));
        assert_eq!(activity.len(), 1);
        assert_eq!(
            activity.latest().unwrap().action,
            "Saved new recipient Ibrahim Jalloh for Sarah Jalloh"
        );
    }

    #[test]
    fn recipient_without_phone_is_rejected() {
        let (office, activity) = back_office();
        let mut no_phone = recipient();
        no_phone.phone = " ".to_string();

        let result = office.save_recipient(no_phone, "Sarah Jalloh");

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert!(activity.is_empty());
    }

    #[test]
    fn provisioning_staff_logs_name_and_role() {
        let (office, activity) = back_office();

        let member = office
            .add_staff(NewStaffMember {
                name: "Elena Costa".to_string(),
                email: "Elena@NhaKinhon.com".to_string(),
                role: StaffRole::OperationsSpecialist,
                hub: Hub::Bissau,
            })
            .unwrap();

        assert_eq!(member.status, StaffStatus::Active);
        assert_eq!(member.email, "elena@nhakinhon.com");
        assert_eq!(
            activity.latest().unwrap().action,
            "Provisioned new staff account: Elena Costa (Operations Specialist)"
        );

        office.set_staff_status(&member.id, StaffStatus::Inactive).unwrap();
        assert_eq!(
            activity.latest().unwrap().action,
            "Suspended staff account: Elena Costa"
        );
    }

    #[test]
    fn unblocking_customer_is_audited() {
        let (office, activity) = back_office();

        let customer = office
            .set_customer_status("c4", CustomerStatus::Active)
            .unwrap();

        assert_eq!(customer.status, CustomerStatus::Active);
        let entry = activity.latest().unwrap();
        assert_eq!(entry.action, "Unblocked customer: Ricardo Silva");
        assert_eq!(entry.target_id.as_deref(), Some("c4"));
    }

    #[test]
    fn sku_changes_are_audited() {
        let (office, activity) = back_office();
        let mut item = InventoryItem {
            id: "i9".to_string(),
            product_name: "Tomato Paste (1kg)".to_string(),
            current_stock: 40,
            min_threshold: 50,
            warehouse_location: "Bissau Central".to_string(),
            sku_type: SkuType::Individual,
            bundle_items: Vec::new(),
            category: None,
            procurement_type: None,
        };

        office.add_sku(item.clone()).unwrap();
        item.current_stock = 90;
        office.update_sku(item).unwrap();

        let entries = activity.entries(None);
        assert_eq!(entries[0].action, "Updated SKU: Tomato Paste (1kg)");
        assert_eq!(entries[1].action, "Added new SKU: Tomato Paste (1kg)");
    }
}
