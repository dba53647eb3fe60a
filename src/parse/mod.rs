//! Proposition text to [`RuleGroup`] trees.
//!
//! A proposition is a comma-separated list of calls such as
//! `and(eq(a,1),like(b,'%x%'))`. Each call is peeled with a [`TupleSplitter`],
//! its arguments are cut with a [`DelimitedSplitter`], and the resolved function
//! decides how the arguments become rules and groups.

mod alias;
mod error;
mod grammar;
mod operand;

use std::sync::LazyLock;

use log::debug;

pub use alias::{Function, FunctionInfo, lookup_function};
pub use error::{OperandRole, ParseError};
pub use operand::{OperandType, operand_type};
pub(crate) use operand::coerce_number;

use crate::split::{DelimitedSplitter, Direction, TupleSplitter};
use crate::{Combinator, RuleGroup};

/// Top-level argument splitter: `,` outside quotes and parentheses.
pub(crate) static ARGUMENTS: LazyLock<DelimitedSplitter> =
    LazyLock::new(|| DelimitedSplitter::with_pairs(',', "\"'(", "\"')", Some("\\\\")));

/// Peels `name(args)rest` into its three parts.
pub(crate) static CALL: LazyLock<TupleSplitter<3>> =
    LazyLock::new(|| TupleSplitter::new("()").direction(Direction::Alternate));

/// Parse a proposition into a rule tree. A bare list of terms is joined with
/// [`Combinator::And`].
///
/// # Example
///
/// ```
/// use proposition::{field, parse, RuleGroup};
///
/// let tree = parse("eqor(a,1,2)").unwrap();
/// assert_eq!(tree, RuleGroup::or([field("a").eq(1_i64), field("a").eq(2_i64)]));
/// ```
///
/// # Errors
///
/// Returns [`ParseError`] at the first malformed construct.
pub fn parse(text: &str) -> Result<RuleGroup, ParseError> {
    parse_group(text, Combinator::And)
}

/// Parse a proposition, joining a bare top-level list with `default_combinator`.
///
/// The result is always a group: a single rule is wrapped in one.
///
/// # Errors
///
/// Returns [`ParseError`] at the first malformed construct.
pub fn parse_group(text: &str, default_combinator: Combinator) -> Result<RuleGroup, ParseError> {
    debug!(
        "parsing proposition of {} bytes, default combinator {default_combinator}",
        text.len()
    );
    grammar::parse_root(text, default_combinator)
}
