//! Capability contracts.
//!
//! A capability is a marker struct that declares one HTTP verb on one node.
//! It does so by implementing exactly one of the two contracts below. The
//! generator reads the contract's type arguments **by position**:
//!
//! | contract | slot 0 | slot 1 | slot 2 | slot 3 |
//! |----------|--------|--------|--------|--------|
//! | [`Get`]  | Node   | Result | Error  |        |
//! | [`Post`] | Node   | Param  | Result | Error  |
//!
//! The contracts carry no methods; they exist to be resolved by the
//! generator and to let the compiler check that `Node` really is a
//! [`Resource`].

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::resource::Resource;

/// HTTP verbs a capability can declare.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use tether_define::Verb;
///
/// assert_eq!(Verb::from_str("POST").unwrap(), Verb::Post);
/// assert_eq!(Verb::Get.to_string(), "GET");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Verb {
    /// HTTP GET - no body, parameters come from the node
    Get,
    /// HTTP POST - one JSON-encoded parameter in the body
    Post,
}

impl Verb {
    /// Number of positional type arguments the verb's contract takes.
    pub const fn arity(self) -> usize {
        match self {
            Verb::Get => 3,
            Verb::Post => 4,
        }
    }

    /// Slot names in positional order.
    pub const fn slots(self) -> &'static [&'static str] {
        match self {
            Verb::Get => &["Node", "Result", "Error"],
            Verb::Post => &["Node", "Param", "Result", "Error"],
        }
    }
}

/// Implemented by every `#[capability]` struct.
pub trait Capability {
    /// The capability's simple name, as written in the descriptor.
    const NAME: &'static str;
}

/// The GET contract: `Get<Node, Result, Error>`.
pub trait Get<Node: Resource, Output, Error>: Capability {}

/// The POST contract: `Post<Node, Param, Result, Error>`.
pub trait Post<Node: Resource, Param, Output, Error>: Capability {}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn verbs_are_a_closed_pair() {
        let verbs: Vec<_> = Verb::iter().collect();
        assert_eq!(verbs, vec![Verb::Get, Verb::Post]);
    }

    #[test]
    fn arity_matches_slot_table() {
        assert_eq!(Verb::Get.arity(), 3);
        assert_eq!(Verb::Post.arity(), 4);
        for verb in Verb::iter() {
            assert_eq!(verb.slots().len(), verb.arity());
        }
    }

    #[test]
    fn verb_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Verb::Post).unwrap(), "\"POST\"");
    }
}
