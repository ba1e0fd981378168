//! Integration tests for `#[resource]` / `#[capability]` expansion.

use tether_define::prelude::*;
use tether_define::{ConstructionError, Request};

#[resource("/orders")]
#[derive(Debug, Clone, PartialEq)]
pub struct Orders;

#[resource("{id}")]
#[derive(Debug, Clone, PartialEq)]
pub struct OrderById {
    #[parent]
    pub parent: Orders,
    pub id: u64,
}

#[resource("items")]
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItems {
    #[parent]
    pub parent: OrderById,
    pub page: Option<u32>,
    #[param(default)]
    pub limit: u32,
}

#[resource("/catalog/{section}")]
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub section: String,
}

#[resource("/repos/{org}/{repo}")]
#[derive(Debug, Clone, PartialEq)]
pub struct Repo {
    pub org: String,
    pub repo: String,
}

#[resource("{name}")]
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByName {
    #[parent]
    pub parent: Orders,
    pub name: String,
}

#[capability]
pub struct ListItems;
impl Get<OrderItems, Vec<String>, ()> for ListItems {}

fn items(id: u64, page: Option<u32>) -> OrderItems {
    OrderItems {
        parent: OrderById {
            parent: Orders,
            id,
        },
        page,
        limit: 0,
    }
}

#[test]
fn templates_include_every_ancestor() {
    assert_eq!(Orders::template(), "/orders");
    assert_eq!(OrderById::template(), "/orders/{id}");
    assert_eq!(OrderItems::template(), "/orders/{id}/items");
    assert_eq!(Catalog::template(), "/catalog/{section}");
}

#[test]
fn path_is_rebuilt_from_the_leaf() {
    assert_eq!(items(7, None).path().unwrap(), "/orders/7/items");
    assert_eq!(
        Catalog {
            section: "books".to_string()
        }
        .path()
        .unwrap(),
        "/catalog/books"
    );
}

fn by_name(name: &str) -> OrderByName {
    OrderByName {
        parent: Orders,
        name: name.to_string(),
    }
}

#[test]
fn slash_in_a_value_stays_one_segment() {
    let node = by_name("a/b");
    let path = node.path().unwrap();
    assert_eq!(path, "/orders/a%2Fb");

    let params = RouteParams::match_template(&OrderByName::template(), &path)
        .expect("encoded path should match its own template");
    assert_eq!(OrderByName::from_params(&params).unwrap(), node);
}

#[test]
fn placeholder_text_in_a_value_is_not_substituted_again() {
    let node = Repo {
        org: "{repo}".to_string(),
        repo: "x".to_string(),
    };
    let path = node.path().unwrap();
    assert_eq!(path, "/repos/%7Brepo%7D/x");

    let params = RouteParams::match_template(&Repo::template(), &path).unwrap();
    assert_eq!(Repo::from_params(&params).unwrap(), node);
}

#[test]
fn empty_value_cannot_be_addressed() {
    assert_eq!(
        by_name("").path(),
        Err(ConstructionError::EmptyPathValue("name"))
    );
    assert!(Request::for_node(Verb::Get, &by_name("")).is_err());
}

#[test]
fn query_skips_absent_optionals() {
    assert_eq!(items(1, None).query(), vec![("limit", "0".to_string())]);
    assert_eq!(
        items(1, Some(2)).query(),
        vec![("page", "2".to_string()), ("limit", "0".to_string())]
    );
}

#[test]
fn from_params_constructs_parents_first() {
    let params = RouteParams::match_template(&OrderItems::template(), "/orders/12/items")
        .expect("path should match template")
        .with_query([("page", "3")]);
    let node = OrderItems::from_params(&params).unwrap();
    assert_eq!(node, items(12, Some(3)));
}

#[test]
fn from_params_without_parent_value_fails() {
    let params = RouteParams::new().with("page", "1");
    assert_eq!(
        OrderItems::from_params(&params),
        Err(ConstructionError::MissingField("id"))
    );
}

#[test]
fn from_params_rejects_unparseable_values() {
    let params = RouteParams::new().with("id", "seven");
    assert!(matches!(
        OrderById::from_params(&params),
        Err(ConstructionError::InvalidField { field: "id", .. })
    ));
}

#[test]
fn capability_knows_its_name() {
    assert_eq!(<ListItems as Capability>::NAME, "ListItems");
}

#[test]
fn request_carries_path_and_query() {
    let request = Request::for_node(Verb::Get, &items(5, Some(1))).unwrap();
    assert_eq!(request.path, "/orders/5/items");
    assert_eq!(
        request.query,
        vec![
            ("page".to_string(), "1".to_string()),
            ("limit".to_string(), "0".to_string())
        ]
    );
    assert!(request.body.is_none());
}
