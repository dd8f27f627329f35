pub mod crm;
pub mod board;
pub mod dashboard;
