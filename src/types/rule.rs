use super::{Operator, Value};

/// Whether a rule's right-hand operand is a constant or names another field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValueSource {
    #[default]
    Value,
    /// `value` holds a field name as [`Value::String`].
    Field,
}

/// A leaf predicate: `field operator value`.
///
/// Built with [`field()`], or produced by [`parse`](crate::parse()).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Rule {
    pub field: String,
    pub operator: Operator,
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: Value,
    #[cfg_attr(feature = "serde", serde(default))]
    pub value_source: ValueSource,
}

impl Rule {
    /// A rule comparing `field` against a constant.
    #[must_use]
    pub fn new(field: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
            value_source: ValueSource::Value,
        }
    }

    /// A rule comparing `field` against another field.
    #[must_use]
    pub fn against_field(
        field: impl Into<String>,
        operator: Operator,
        other: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            operator,
            value: Value::String(other.into()),
            value_source: ValueSource::Field,
        }
    }
}

/// Intermediate builder for rules on one field.
/// Created by [`field()`]; each method produces a finished [`Rule`].
#[derive(Debug, Clone)]
pub struct FieldRule {
    name: String,
}

impl FieldRule {
    fn with(self, operator: Operator, value: impl Into<Value>) -> Rule {
        Rule::new(self.name, operator, value)
    }

    #[must_use]
    pub fn eq(self, value: impl Into<Value>) -> Rule {
        self.with(Operator::Equal, value)
    }

    #[must_use]
    pub fn neq(self, value: impl Into<Value>) -> Rule {
        self.with(Operator::NotEqual, value)
    }

    #[must_use]
    pub fn gt(self, value: impl Into<Value>) -> Rule {
        self.with(Operator::GreaterThan, value)
    }

    #[must_use]
    pub fn gte(self, value: impl Into<Value>) -> Rule {
        self.with(Operator::GreaterThanEqual, value)
    }

    #[must_use]
    pub fn lt(self, value: impl Into<Value>) -> Rule {
        self.with(Operator::LessThan, value)
    }

    #[must_use]
    pub fn lte(self, value: impl Into<Value>) -> Rule {
        self.with(Operator::LessThanEqual, value)
    }

    #[must_use]
    pub fn contains(self, value: impl Into<Value>) -> Rule {
        self.with(Operator::Contains, value)
    }

    #[must_use]
    pub fn begins_with(self, value: impl Into<Value>) -> Rule {
        self.with(Operator::BeginsWith, value)
    }

    #[must_use]
    pub fn ends_with(self, value: impl Into<Value>) -> Rule {
        self.with(Operator::EndsWith, value)
    }

    #[must_use]
    pub fn does_not_contain(self, value: impl Into<Value>) -> Rule {
        self.with(Operator::DoesNotContain, value)
    }

    #[must_use]
    pub fn does_not_begin_with(self, value: impl Into<Value>) -> Rule {
        self.with(Operator::DoesNotBeginWith, value)
    }

    #[must_use]
    pub fn does_not_end_with(self, value: impl Into<Value>) -> Rule {
        self.with(Operator::DoesNotEndWith, value)
    }

    #[must_use]
    pub fn is_null(self) -> Rule {
        self.with(Operator::IsNull, Value::Null)
    }

    #[must_use]
    pub fn is_not_null(self) -> Rule {
        self.with(Operator::IsNotNull, Value::Null)
    }

    #[must_use]
    pub fn is_in<T: Into<Value>>(self, values: impl IntoIterator<Item = T>) -> Rule {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.with(Operator::In, values)
    }

    #[must_use]
    pub fn not_in<T: Into<Value>>(self, values: impl IntoIterator<Item = T>) -> Rule {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.with(Operator::NotIn, values)
    }

    #[must_use]
    pub fn between(self, low: impl Into<Value>, high: impl Into<Value>) -> Rule {
        self.with(Operator::Between, vec![low.into(), high.into()])
    }

    #[must_use]
    pub fn not_between(self, low: impl Into<Value>, high: impl Into<Value>) -> Rule {
        self.with(Operator::NotBetween, vec![low.into(), high.into()])
    }

    /// Compare against another field rather than a constant.
    #[must_use]
    pub fn compare_field(self, operator: Operator, other: &str) -> Rule {
        Rule::against_field(self.name, operator, other)
    }
}

#[must_use]
pub fn field(name: &str) -> FieldRule {
    FieldRule {
        name: name.to_owned(),
    }
}
