//! Test: a placeholder must name one of the node's fields.

use tether_macros::resource;

#[resource("{sku}")]
pub struct Item {
    pub id: u64,
}

fn main() {}
