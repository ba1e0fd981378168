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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaceOrderError {
    OrderWithIdAlreadyExists { id: u64 },
    NoItems,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FetchOrderError {
    NotFound,
}

#[resource("/orders")]
#[derive(Debug, Clone)]
pub struct Orders;

#[resource("{id}")]
#[derive(Debug, Clone)]
pub struct OrderById {
    #[parent]
    pub parent: Orders,
    pub id: u64,
}

#[resource("items")]
#[derive(Debug, Clone)]
pub struct OrderItems {
    #[parent]
    pub parent: OrderById,
    pub page: Option<u32>,
}

#[resource("/health")]
#[derive(Debug, Clone)]
pub struct Health;

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
