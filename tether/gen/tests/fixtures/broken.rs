use tether_define::prelude::*;

pub struct Product;

#[resource("/shop")]
pub struct Shop;

#[resource("cart")]
pub struct Cart {
    #[parent]
    pub parent: Shop,
}

pub mod legacy {
    use super::*;

    #[resource("old-cart")]
    pub struct Cart {
        #[parent]
        pub parent: Shop,
    }
}

#[resource("/catalog")]
pub struct Catalog;

#[capability]
pub struct CartTotal;
impl Get<Cart, u64, ()> for CartTotal {}

#[capability]
pub struct ListProducts;
impl Get<Catalog, Vec<Product>, ()> for ListProducts {}

#[capability]
pub struct Reprice;
impl Post<Catalog, Product, u64> for Reprice {}

#[capability]
pub struct Lookup<T>(T);
impl<T> Get<Catalog, T, ()> for Lookup<T> {}

#[capability]
pub struct SyncCatalog;
impl Get<Catalog, (), ()> for SyncCatalog {}
impl Post<Catalog, (), (), ()> for SyncCatalog {}

#[capability]
pub struct Orphan;
