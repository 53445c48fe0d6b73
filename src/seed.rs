//! Mock dataset the console starts with.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::AppError;
use crate::models::activity::ActivityEntry;
use crate::models::customer::{Customer, CustomerStatus};
use crate::models::driver::Driver;
use crate::models::inventory::{
    BundleComponent, InventoryItem, ProcurementType, SkuCategory, SkuType,
};
use crate::models::order::{Order, OrderItem, OrderStatus};
use crate::models::recipient::{Recipient, SavedRecipient};
use crate::models::staff::{Hub, StaffMember, StaffRole, StaffStatus};
use crate::state::AppState;

pub fn load(state: &AppState) -> Result<(), AppError> {
    for order in orders() {
        state.orders.insert(order)?;
    }
    state.inventory.seed(inventory());
    state.staff.seed(staff());
    state.customers.seed(customers());
    state.recipients.seed(saved_recipients());
    state.activity.seed(activity());

    Ok(())
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

fn recipient(name: &str, location: &str, phone: &str) -> Recipient {
    Recipient {
        name: name.to_string(),
        location: location.to_string(),
        phone: phone.to_string(),
    }
}

pub fn drivers() -> Vec<Driver> {
    [
        ("d1", "Antonio Silva", "1.2h", 98.5, 4.9, 450),
        ("d2", "Buba Sanha", "2.5h", 94.2, 4.7, 210),
        ("d3", "Domingos Gomes", "1.8h", 96.0, 4.8, 385),
        ("d4", "Fatima Cassama", "1.5h", 99.1, 5.0, 125),
        ("d5", "Malam Sambu", "3.1h", 88.5, 4.2, 540),
        ("d6", "Contractor: Express Trans", "4.0h", 92.0, 4.5, 1200),
    ]
    .into_iter()
    .map(|(id, name, avg, completion, rating, total)| Driver {
        id: id.to_string(),
        name: name.to_string(),
        avg_delivery_time: avg.to_string(),
        completion_rate: completion,
        rating,
        total_deliveries: total,
    })
    .collect()
}

pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: "o1".to_string(),
            order_number: "BX-1001".to_string(),
            customer_name: "Kojo Mensah".to_string(),
            recipient: recipient("Maria Dinis", "Bissau - Praça", "+245 95551234"),
            items: vec![OrderItem {
                id: "p1".to_string(),
                name: "Thai Jasmine Rice (25kg)".to_string(),
                price_gbp: 35.0,
                quantity: 2,
            }],
            total_gbp: 70.0,
            status: OrderStatus::Paid,
            created_at: at(2024, 5, 15, 10, 30),
            updated_at: at(2024, 5, 15, 11, 0),
            payment_ref: "STRIPE_482910".to_string(),
            notes: None,
            is_flagged: false,
            driver_name: None,
            proof_of_delivery: None,
            tracking_id: None,
            tracking_url: None,
        },
        Order {
            id: "o2".to_string(),
            order_number: "BX-1002".to_string(),
            customer_name: "Sarah Jalloh".to_string(),
            recipient: recipient("Ibrahim Jalloh", "Gabú", "+245 96667890"),
            items: vec![OrderItem {
                id: "p5".to_string(),
                name: "Mega Family Bundle".to_string(),
                price_gbp: 95.0,
                quantity: 1,
            }],
            total_gbp: 95.0,
            status: OrderStatus::Dispatched,
            created_at: at(2024, 5, 14, 14, 20),
            updated_at: at(2024, 5, 15, 9, 15),
            payment_ref: "STRIPE_991023".to_string(),
            notes: None,
            is_flagged: false,
            driver_name: Some("Antonio Silva".to_string()),
            proof_of_delivery: None,
            tracking_id: None,
            tracking_url: None,
        },
        Order {
            id: "o3".to_string(),
            order_number: "BX-1003".to_string(),
            customer_name: "Fatima Balde".to_string(),
            recipient: recipient("Moussa Balde", "Bafatá", "+245 95554321"),
            items: vec![OrderItem {
                id: "p6".to_string(),
                name: "Hygiene Essentials Kit".to_string(),
                price_gbp: 15.0,
                quantity: 3,
            }],
            total_gbp: 45.0,
            status: OrderStatus::Pending,
            created_at: at(2024, 5, 15, 12, 0),
            updated_at: at(2024, 5, 15, 12, 0),
            payment_ref: "PENDING".to_string(),
            notes: Some("Large quantity of hygiene kits requested in short time.".to_string()),
            is_flagged: true,
            driver_name: None,
            proof_of_delivery: None,
            tracking_id: None,
            tracking_url: None,
        },
    ]
}

pub fn inventory() -> Vec<InventoryItem> {
    let individual = |id: &str, name: &str, stock, threshold, location: &str, procurement| {
        InventoryItem {
            id: id.to_string(),
            product_name: name.to_string(),
            current_stock: stock,
            min_threshold: threshold,
            warehouse_location: location.to_string(),
            sku_type: SkuType::Individual,
            bundle_items: Vec::new(),
            category: Some(SkuCategory::PantryStaples),
            procurement_type: Some(procurement),
        }
    };

    vec![
        individual(
            "i1",
            "Long Grain Rice (25kg)",
            450,
            100,
            "Bissau Central",
            ProcurementType::InHouse,
        ),
        individual(
            "i2",
            "Vegetable Oil (5L)",
            80,
            150,
            "Bissau Central",
            ProcurementType::InHouse,
        ),
        individual(
            "i3",
            "Cane Sugar (5kg)",
            200,
            50,
            "Bafatá Satellite",
            ProcurementType::LocalProcurement,
        ),
        InventoryItem {
            id: "i4".to_string(),
            product_name: "Family Essentials Pack".to_string(),
            current_stock: 25,
            min_threshold: 10,
            warehouse_location: "Bissau Central".to_string(),
            sku_type: SkuType::Bundle,
            bundle_items: vec![
                BundleComponent {
                    product_name: "Long Grain Rice (25kg)".to_string(),
                    quantity: 1,
                },
                BundleComponent {
                    product_name: "Vegetable Oil (5L)".to_string(),
                    quantity: 2,
                },
            ],
            category: Some(SkuCategory::ValueBundles),
            procurement_type: Some(ProcurementType::InHouse),
        },
    ]
}

pub fn staff() -> Vec<StaffMember> {
    [
        ("u1", "Alvaro Dinis", "alvaro", StaffRole::Admin, Hub::London, at(2024, 5, 15, 9, 0)),
        ("u2", "Beatriz Gomes", "beatriz", StaffRole::Accountant, Hub::London, at(2024, 5, 14, 17, 30)),
        ("u3", "Ibrahim Sanha", "ibrahim", StaffRole::WarehouseManager, Hub::Bissau, at(2024, 5, 15, 7, 15)),
        ("u4", "Moussa Balde", "moussa", StaffRole::LogisticsLead, Hub::Bissau, at(2024, 5, 15, 8, 45)),
        ("u5", "Elena Costa", "elena", StaffRole::OperationsSpecialist, Hub::Bissau, at(2024, 5, 13, 10, 0)),
    ]
    .into_iter()
    .map(|(id, name, mailbox, role, hub, last_login)| StaffMember {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{mailbox}@nhakinhon.com"),
        role,
        hub,
        status: StaffStatus::Active,
        last_login,
    })
    .collect()
}

pub fn customers() -> Vec<Customer> {
    [
        ("c1", "Kojo Mensah", "kojo.mensah@example.co.uk", "+44 7700 900123", "UK", CustomerStatus::Active, 12, 840.50, at(2023, 11, 10, 10, 0)),
        ("c2", "Sarah Jalloh", "s.jalloh@example.fr", "+33 6 12 34 56 78", "France", CustomerStatus::Active, 5, 320.00, at(2024, 1, 15, 14, 30)),
        ("c3", "Fatima Balde", "f.balde@example.pt", "+351 912 345 678", "Portugal", CustomerStatus::Active, 28, 2150.75, at(2023, 5, 20, 9, 15)),
        ("c4", "Ricardo Silva", "r.silva@example.com", "+44 7700 900456", "UK", CustomerStatus::Blocked, 1, 45.00, at(2024, 4, 2, 11, 45)),
        ("c5", "Amadou Diallo", "a.diallo@example.de", "+49 151 23456789", "Germany", CustomerStatus::Active, 8, 560.20, at(2023, 8, 12, 16, 20)),
    ]
    .into_iter()
    .map(
        |(id, name, email, phone, country, status, total_orders, total_spent_gbp, joined_at)| Customer {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            country: country.to_string(),
            status,
            total_orders,
            total_spent_gbp,
            joined_at,
        },
    )
    .collect()
}

pub fn saved_recipients() -> Vec<SavedRecipient> {
    vec![SavedRecipient {
        id: "sr1".to_string(),
        recipient: recipient("Maria Dinis", "Bissau - Praça", "+245 95551234"),
        customer_name: "Kojo Mensah".to_string(),
        added_at: Utc::now(),
    }]
}

pub fn activity() -> Vec<ActivityEntry> {
    [
        ("a1", "u1", "Alvaro Dinis", "Approved high-risk order BX-1003", at(2024, 5, 15, 12, 5), "o3"),
        ("a2", "u3", "Ibrahim Sanha", "Adjusted stock for Rice (25kg)", at(2024, 5, 15, 11, 45), "i1"),
        ("a3", "u4", "Moussa Balde", "Assigned driver Antonio Silva to BX-1002", at(2024, 5, 15, 9, 15), "o2"),
    ]
    .into_iter()
    .map(|(id, user_id, user_name, action, timestamp, target)| ActivityEntry {
        id: id.to_string(),
        user_id: user_id.to_string(),
        user_name: user_name.to_string(),
        action: action.to_string(),
        timestamp,
        target_id: Some(target.to_string()),
    })
    .collect()
}
