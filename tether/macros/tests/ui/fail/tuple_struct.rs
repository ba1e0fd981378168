//! Test: nodes need named fields so placeholders can refer to them.

use tether_macros::resource;

#[resource("orders")]
pub struct OrderId(u64);

fn main() {}
