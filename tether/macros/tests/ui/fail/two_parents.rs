//! Test: a node has at most one parent.

use tether_macros::resource;

#[resource("x")]
pub struct X {
    #[parent]
    a: u8,
    #[parent]
    b: u16,
}

fn main() {}
