//! Test: a path placeholder field cannot be optional.

use tether_macros::resource;

#[resource("{id}")]
pub struct OrderById {
    id: Option<u64>,
}

fn main() {}
