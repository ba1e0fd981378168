//! Orders API descriptor.
//!
//! Read by `tether-gen` at build time; see `build.rs`.

use serde::{Deserialize, Serialize};
use tether_define::prelude::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub sku: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub items: Vec<Item>,
}

/// Why an order was not placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaceOrderError {
    OrderWithIdAlreadyExists { id: u64 },
    NoItems,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FetchOrderError {
    NotFound { id: u64 },
}

/// `/orders`
#[resource("/orders")]
#[derive(Debug, Clone, PartialEq)]
pub struct Orders;

/// `/orders/{id}`
#[resource("{id}")]
#[derive(Debug, Clone, PartialEq)]
pub struct OrderById {
    #[parent]
    pub parent: Orders,
    pub id: u64,
}

/// `/orders/{id}/items?page=N`
#[resource("items")]
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItems {
    #[parent]
    pub parent: OrderById,
    pub page: Option<u32>,
}

#[capability]
pub struct ListOrders;
impl Get<Orders, Vec<Order>, ()> for ListOrders {}

#[capability]
pub struct PlaceOrder;
impl Post<Orders, Order, u64, PlaceOrderError> for PlaceOrder {}

#[capability]
pub struct FetchOrder;
impl Get<OrderById, Order, FetchOrderError> for FetchOrder {}

#[capability]
pub struct ListItems;
impl Get<OrderItems, Vec<Item>, ()> for ListItems {}
