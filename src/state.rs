use std::sync::Arc;

use crate::application::{
    booking_service::BookingService, employee_service::EmployeeService,
    order_service::OrderService,
};

#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<EmployeeService>,
    pub order_service: Arc<OrderService>,
    pub booking_service: Arc<BookingService>,
}

impl AppState {
    pub fn new(
        employee_service: Arc<EmployeeService>,
        order_service: Arc<OrderService>,
        booking_service: Arc<BookingService>,
    ) -> Self {
        Self {
            employee_service,
            order_service,
            booking_service,
        }
    }
}
