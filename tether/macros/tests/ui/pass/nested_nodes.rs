//! Test: a nested node with path, query and defaulted fields expands and runs.

use tether_define::prelude::*;

#[resource("/orders")]
pub struct Orders;

#[resource("{id}")]
pub struct OrderById {
    #[parent]
    pub parent: Orders,
    pub id: u64,
    pub expand: Option<bool>,
    #[param(default)]
    pub limit: u32,
}

#[capability]
pub struct FetchOrder;
impl Get<OrderById, String, ()> for FetchOrder {}

fn main() {
    let node = OrderById {
        parent: Orders,
        id: 7,
        expand: None,
        limit: 0,
    };
    assert_eq!(OrderById::template(), "/orders/{id}");
    assert_eq!(node.path().unwrap(), "/orders/7");
    assert_eq!(node.query(), vec![("limit", "0".to_string())]);
    assert_eq!(<FetchOrder as Capability>::NAME, "FetchOrder");
}
