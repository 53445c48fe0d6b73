pub mod activity;
pub mod directory;
pub mod drivers;
pub mod inventory;
pub mod orders;
pub mod recipients;
