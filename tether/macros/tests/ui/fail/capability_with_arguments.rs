//! Test: the verb comes from the contract impl, not from attribute arguments.

use tether_macros::capability;

#[capability(Get)]
pub struct ListOrders;

fn main() {}
