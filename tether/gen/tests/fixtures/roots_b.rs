use tether_define::prelude::*;

#[resource("/v2/orders")]
pub struct Orders;

#[resource("/users")]
pub struct Users;

#[capability]
pub struct ListOrdersV2;
impl Get<Orders, Vec<u64>, ()> for ListOrdersV2 {}

#[capability]
pub struct ListUsers;
impl Get<Users, Vec<String>, ()> for ListUsers {}
