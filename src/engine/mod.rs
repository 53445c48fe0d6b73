pub mod analytics;
pub mod back_office;
pub mod dispatch;
