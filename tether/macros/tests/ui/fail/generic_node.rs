//! Test: generic nodes are rejected.

use tether_macros::resource;

#[resource("/pages")]
pub struct Page<T> {
    items: Vec<T>,
}

fn main() {}
