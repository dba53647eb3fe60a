use std::ops::Not;

use super::{Combinator, Rule};

/// A child of a [`RuleGroup`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Node {
    Group(RuleGroup),
    Rule(Rule),
}

impl Node {
    #[must_use]
    pub fn as_rule(&self) -> Option<&Rule> {
        match self {
            Node::Rule(rule) => Some(rule),
            Node::Group(_) => None,
        }
    }

    #[must_use]
    pub fn as_group(&self) -> Option<&RuleGroup> {
        match self {
            Node::Group(group) => Some(group),
            Node::Rule(_) => None,
        }
    }
}

impl From<Rule> for Node {
    fn from(rule: Rule) -> Self {
        Node::Rule(rule)
    }
}

impl From<RuleGroup> for Node {
    fn from(group: RuleGroup) -> Self {
        Node::Group(group)
    }
}

/// A branch of the query tree: children joined by a combinator, optionally
/// negated as a whole.
///
/// The root of every parsed tree is a `RuleGroup`. The parser never produces a
/// group without children.
///
/// # Example
///
/// ```
/// use proposition::{field, RuleGroup};
///
/// let group = !RuleGroup::or([field("a").eq(1_i64), field("b").eq(2_i64)]);
/// assert!(group.negated);
/// assert_eq!(group.to_string(), "not(or(eq(a,1),eq(b,2)))");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleGroup {
    pub combinator: Combinator,
    #[cfg_attr(feature = "serde", serde(default, rename = "not"))]
    pub negated: bool,
    pub rules: Vec<Node>,
}

impl RuleGroup {
    #[must_use]
    pub fn new(combinator: Combinator, rules: Vec<Node>) -> Self {
        Self {
            combinator,
            negated: false,
            rules,
        }
    }

    #[must_use]
    pub fn and<N: Into<Node>>(rules: impl IntoIterator<Item = N>) -> Self {
        Self::new(Combinator::And, rules.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn or<N: Into<Node>>(rules: impl IntoIterator<Item = N>) -> Self {
        Self::new(Combinator::Or, rules.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn xor<N: Into<Node>>(rules: impl IntoIterator<Item = N>) -> Self {
        Self::new(Combinator::Xor, rules.into_iter().map(Into::into).collect())
    }

    /// Toggle the negation flag.
    #[must_use]
    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// Append a child.
    #[must_use]
    pub fn with(mut self, node: impl Into<Node>) -> Self {
        self.rules.push(node.into());
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every leaf rule in depth-first order.
    pub fn leaves(&self) -> impl Iterator<Item = &Rule> + '_ {
        let mut stack: Vec<&Node> = self.rules.iter().rev().collect();
        std::iter::from_fn(move || {
            while let Some(node) = stack.pop() {
                match node {
                    Node::Rule(rule) => return Some(rule),
                    Node::Group(group) => stack.extend(group.rules.iter().rev()),
                }
            }
            None
        })
    }
}

impl Not for RuleGroup {
    type Output = RuleGroup;

    fn not(self) -> RuleGroup {
        self.negate()
    }
}
