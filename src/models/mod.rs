pub mod activity;
pub mod customer;
pub mod driver;
pub mod inventory;
pub mod order;
pub mod recipient;
pub mod staff;
