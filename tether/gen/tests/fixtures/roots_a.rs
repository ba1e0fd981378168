use tether_define::prelude::*;

#[resource("/orders")]
pub struct Orders;

#[capability]
pub struct ListOrders;
impl Get<Orders, Vec<u64>, ()> for ListOrders {}
