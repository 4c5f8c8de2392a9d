pub mod booking;
pub mod employee;
pub mod errors;
pub mod order;
