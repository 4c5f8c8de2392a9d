use tracing::info;

use crate::{
    domain::{
        booking::Booking,
        employee::{Employee, NewEmployee},
        errors::DomainError,
        order::{Order, Status},
    },
    infrastructure::DynRepository,
};

/// Preloads the sample data set. Orders are written through the repository
/// directly, so a terminal status can be seeded even though the HTTP create
/// path always forces `IN_PROGRESS`.
pub async fn seed(
    employees: &DynRepository<Employee>,
    orders: &DynRepository<Order>,
    bookings: &DynRepository<Booking>,
) -> Result<(), DomainError> {
    for (first_name, last_name, role) in [
        ("Bilbo", "Baggins", "burglar"),
        ("Frodo", "Baggins", "thief"),
    ] {
        let employee = employees
            .save(Employee::new(NewEmployee {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                role: role.to_string(),
            }))
            .await?;
        info!("Preloaded {employee}");
    }

    for (description, status) in [
        ("MacBook Pro", Status::Completed),
        ("iPhone", Status::InProgress),
    ] {
        let order = orders.save(Order::with_status(description, status)).await?;
        info!("Preloaded {order}");
    }

    for booking_name in ["Conference room A", "Team offsite"] {
        let booking = bookings.save(Booking::new(booking_name)).await?;
        info!("Preloaded {booking}");
    }

    Ok(())
}
