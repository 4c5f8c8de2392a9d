pub mod booking_service;
pub mod dto;
pub mod employee_service;
pub mod order_service;
