use std::fmt;

/// The closed set of rule operators a rule-builder tree can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Operator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanEqual,
    LessThan,
    LessThanEqual,
    Contains,
    BeginsWith,
    EndsWith,
    DoesNotContain,
    DoesNotBeginWith,
    DoesNotEndWith,
    IsNull,
    IsNotNull,
    In,
    NotIn,
    /// Never produced by the parser; formats as a conjunction of two bounds.
    Between,
    /// Never produced by the parser; formats as a conjunction of two bounds.
    NotBetween,
}

impl Operator {
    pub const ALL: [Operator; 18] = [
        Operator::Equal,
        Operator::NotEqual,
        Operator::GreaterThan,
        Operator::GreaterThanEqual,
        Operator::LessThan,
        Operator::LessThanEqual,
        Operator::Contains,
        Operator::BeginsWith,
        Operator::EndsWith,
        Operator::DoesNotContain,
        Operator::DoesNotBeginWith,
        Operator::DoesNotEndWith,
        Operator::IsNull,
        Operator::IsNotNull,
        Operator::In,
        Operator::NotIn,
        Operator::Between,
        Operator::NotBetween,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Equal => "equal",
            Operator::NotEqual => "not-equal",
            Operator::GreaterThan => "greater-than",
            Operator::GreaterThanEqual => "greater-than-equal",
            Operator::LessThan => "less-than",
            Operator::LessThanEqual => "less-than-equal",
            Operator::Contains => "contains",
            Operator::BeginsWith => "begins-with",
            Operator::EndsWith => "ends-with",
            Operator::DoesNotContain => "does-not-contain",
            Operator::DoesNotBeginWith => "does-not-begin-with",
            Operator::DoesNotEndWith => "does-not-end-with",
            Operator::IsNull => "is-null",
            Operator::IsNotNull => "is-not-null",
            Operator::In => "in",
            Operator::NotIn => "not-in",
            Operator::Between => "between",
            Operator::NotBetween => "not-between",
        }
    }

    /// The operator that holds when the two operands trade places.
    /// `a > 1` is `1 < a`; symmetric operators map to themselves.
    #[must_use]
    pub fn mirrored(self) -> Operator {
        match self {
            Operator::GreaterThan => Operator::LessThan,
            Operator::GreaterThanEqual => Operator::LessThanEqual,
            Operator::LessThan => Operator::GreaterThan,
            Operator::LessThanEqual => Operator::GreaterThanEqual,
            other => other,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the children of a [`RuleGroup`](super::RuleGroup) are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Combinator {
    #[default]
    And,
    Or,
    Xor,
}

impl Combinator {
    /// The proposition function name for this combinator.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Combinator::And => "and",
            Combinator::Or => "or",
            Combinator::Xor => "xor",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
