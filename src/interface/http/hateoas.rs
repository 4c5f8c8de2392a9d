//! Hypermedia models and the per-resource link builders. Links are built
//! from static route templates; the route table in `app.rs` must stay in
//! sync with the hrefs produced here.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    application::dto::{EmployeeResponse, OrderResponse},
    domain::{
        employee::Employee,
        errors::DomainError,
        order::{Order, Status},
    },
    infrastructure::Entity,
};

pub const EMPLOYEES_ROUTE: &str = "/employees";
pub const ORDERS_ROUTE: &str = "/orders";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

pub type Links = BTreeMap<&'static str, Link>;

/// A single resource: its fields flattened next to a `_links` object keyed
/// by relation.
#[derive(Debug, Serialize)]
pub struct EntityModel<T> {
    #[serde(flatten)]
    pub content: T,
    #[serde(rename = "_links")]
    pub links: Links,
}

#[derive(Debug, Serialize)]
pub struct CollectionModel<T> {
    pub items: Vec<EntityModel<T>>,
    #[serde(rename = "_links")]
    pub links: Links,
}

pub fn employee_self_href(id: u64) -> String {
    format!("{EMPLOYEES_ROUTE}/{id}")
}

pub fn order_self_href(id: u64) -> String {
    format!("{ORDERS_ROUTE}/{id}")
}

fn employee_links(id: u64) -> Links {
    Links::from([
        ("self", Link::new(employee_self_href(id))),
        ("employees", Link::new(EMPLOYEES_ROUTE)),
    ])
}

/// Self and collection links always; the cancel/complete action links are
/// attached iff the order is still `IN_PROGRESS`. Their presence is the only
/// way callers learn which transitions are currently valid.
fn order_links(id: u64, status: Status) -> Links {
    let mut links = Links::from([
        ("self", Link::new(order_self_href(id))),
        ("orders", Link::new(ORDERS_ROUTE)),
    ]);

    if status == Status::InProgress {
        links.insert("cancel", Link::new(format!("{ORDERS_ROUTE}/{id}/cancel")));
        links.insert("complete", Link::new(format!("{ORDERS_ROUTE}/{id}/complete")));
    }

    links
}

pub fn employee_model(employee: Employee) -> Result<EntityModel<EmployeeResponse>, DomainError> {
    let id = employee.require_id()?;
    Ok(EntityModel {
        content: EmployeeResponse::new(id, employee),
        links: employee_links(id),
    })
}

pub fn employee_collection(
    employees: Vec<Employee>,
) -> Result<CollectionModel<EmployeeResponse>, DomainError> {
    let items = employees
        .into_iter()
        .map(employee_model)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CollectionModel {
        items,
        links: Links::from([("self", Link::new(EMPLOYEES_ROUTE))]),
    })
}

pub fn order_model(order: Order) -> Result<EntityModel<OrderResponse>, DomainError> {
    let id = order.require_id()?;
    let status = order.status;
    Ok(EntityModel {
        content: OrderResponse::new(id, order),
        links: order_links(id, status),
    })
}

pub fn order_collection(orders: Vec<Order>) -> Result<CollectionModel<OrderResponse>, DomainError> {
    let items = orders
        .into_iter()
        .map(order_model)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CollectionModel {
        items,
        links: Links::from([("self", Link::new(ORDERS_ROUTE))]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_progress_orders_carry_action_links() {
        let mut order = Order::new("iPhone");
        order.id = Some(3);

        let model = order_model(order).unwrap();

        assert_eq!(model.links["self"].href, "/orders/3");
        assert_eq!(model.links["orders"].href, "/orders");
        assert_eq!(model.links["cancel"].href, "/orders/3/cancel");
        assert_eq!(model.links["complete"].href, "/orders/3/complete");
    }

    #[test]
    fn terminal_orders_carry_only_navigation_links() {
        for status in [Status::Completed, Status::Cancelled] {
            let mut order = Order::with_status("MacBook Pro", status);
            order.id = Some(9);

            let model = order_model(order).unwrap();

            assert!(model.links.contains_key("self"));
            assert!(!model.links.contains_key("cancel"));
            assert!(!model.links.contains_key("complete"));
        }
    }

    #[test]
    fn an_unpersisted_entity_is_an_internal_error() {
        assert!(order_model(Order::new("iPhone")).is_err());
    }
}
