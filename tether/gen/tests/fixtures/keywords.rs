use tether_define::prelude::*;

#[resource("/gen")]
pub struct Gen;

#[resource("/try")]
pub struct Try;

#[capability]
pub struct Async;
impl Get<Gen, (), ()> for Async {}

#[capability]
pub struct Type;
impl Get<Try, Vec<u64>, ()> for Type {}

#[capability]
pub struct __;
impl Get<Gen, (), ()> for __ {}
