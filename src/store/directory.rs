use parking_lot::RwLock;

use crate::error::AppError;
use crate::models::customer::{Customer, CustomerStatus};
use crate::models::staff::{StaffMember, StaffStatus};

#[derive(Default)]
pub struct StaffDirectory {
    members: RwLock<Vec<StaffMember>>,
}

impl StaffDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, members: Vec<StaffMember>) {
        self.members.write().extend(members);
    }

    pub fn add(&self, member: StaffMember) -> Result<StaffMember, AppError> {
        if member.name.trim().is_empty() {
            return Err(AppError::BadRequest("staff name cannot be empty".to_string()));
        }
        if !member.email.contains('@') {
            return Err(AppError::BadRequest(format!("invalid email: {}", member.email)));
        }

        let mut members = self.members.write();
        if members
            .iter()
            .any(|existing| existing.id == member.id || existing.email == member.email)
        {
            return Err(AppError::Conflict(format!(
                "staff account {} already exists",
                member.email
            )));
        }
        members.insert(0, member.clone());

        Ok(member)
    }

    pub fn set_status(&self, id: &str, status: StaffStatus) -> Result<StaffMember, AppError> {
        let mut members = self.members.write();
        let member = members
            .iter_mut()
            .find(|member| member.id == id)
            .ok_or_else(|| AppError::NotFound(format!("staff member {id} not found")))?;
        member.status = status;

        Ok(member.clone())
    }

    pub fn list(&self) -> Vec<StaffMember> {
        self.members.read().clone()
    }
}

#[derive(Default)]
pub struct CustomerDirectory {
    customers: RwLock<Vec<Customer>>,
}

impl CustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, customers: Vec<Customer>) {
        self.customers.write().extend(customers);
    }

    pub fn get(&self, id: &str) -> Result<Customer, AppError> {
        self.customers
            .read()
            .iter()
            .find(|customer| customer.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("customer {id} not found")))
    }

    pub fn set_status(&self, id: &str, status: CustomerStatus) -> Result<Customer, AppError> {
        let mut customers = self.customers.write();
        let customer = customers
            .iter_mut()
            .find(|customer| customer.id == id)
            .ok_or_else(|| AppError::NotFound(format!("customer {id} not found")))?;
        customer.status = status;

        Ok(customer.clone())
    }

    pub fn list(&self) -> Vec<Customer> {
        self.customers.read().clone()
    }

    pub fn search(&self, term: &str) -> Vec<Customer> {
        let needle = term.trim().to_lowercase();
        self.customers
            .read()
            .iter()
            .filter(|customer| {
                customer.name.to_lowercase().contains(&needle)
                    || customer.email.to_lowercase().contains(&needle)
                    || customer.country.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.customers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::{CustomerDirectory, StaffDirectory};
    use crate::error::AppError;
    use crate::models::customer::{Customer, CustomerStatus};
    use crate::models::staff::{Hub, StaffMember, StaffRole, StaffStatus};

    fn member(id: &str, email: &str, hub: Hub) -> StaffMember {
        StaffMember {
            id: id.to_string(),
            name: format!("Staff {id}"),
            email: email.to_string(),
            role: StaffRole::OperationsSpecialist,
            hub,
            status: StaffStatus::Active,
            last_login: Utc::now(),
        }
    }

    #[test]
    fn staff_email_must_be_unique() {
        let staff = StaffDirectory::new();
        staff.add(member("u1", "a@nhakinhon.com", Hub::London)).unwrap();

        let dup = staff.add(member("u2", "a@nhakinhon.com", Hub::Bissau));
        assert!(matches!(dup, Err(AppError::Conflict(_))));
    }

    #[test]
    fn suspending_staff_marks_only_that_member() {
        let staff = StaffDirectory::new();
        staff.seed(vec![
            member("u1", "a@nhakinhon.com", Hub::London),
            member("u2", "b@nhakinhon.com", Hub::Bissau),
        ]);

        let suspended = staff.set_status("u2", StaffStatus::Inactive).unwrap();

        assert_eq!(suspended.status, StaffStatus::Inactive);
        let active = staff
            .list()
            .into_iter()
            .filter(|member| member.status == StaffStatus::Active)
            .count();
        assert_eq!(active, 1);
        assert!(matches!(
            staff.set_status("u9", StaffStatus::Active),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn blocking_a_customer_is_persisted() {
        let customers = CustomerDirectory::new();
        customers.seed(vec![Customer {
            id: "c1".to_string(),
            name: "Kojo Mensah".to_string(),
            email: "kojo.mensah@example.co.uk".to_string(),
            phone: "+44 7700 900123".to_string(),
            country: "UK".to_string(),
            status: CustomerStatus::Active,
            total_orders: 12,
            total_spent_gbp: 840.5,
            joined_at: Utc::now(),
        }]);

        customers.set_status("c1", CustomerStatus::Blocked).unwrap();

        assert_eq!(customers.get("c1").unwrap().status, CustomerStatus::Blocked);
        assert_eq!(customers.search("kojo").len(), 1);
    }
}
