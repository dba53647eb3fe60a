use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::parse::coerce_number;
use crate::types::quote;
use crate::{FieldTypes, InputType, Rule, Value, ValueSource};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];

/// Render a rule's value as proposition text.
///
/// A field reference is emitted bare. A constant is rendered by the input type
/// `types` declares for the rule's field, or by its own kind when none is
/// declared. Array items are joined with `,` and no brackets; an empty array
/// renders as `null`.
#[must_use]
pub fn format_value<T: FieldTypes + ?Sized>(rule: &Rule, types: &T) -> String {
    render(
        &rule.value,
        rule.value_source,
        types.input_type(&rule.field),
    )
}

pub(crate) fn render(value: &Value, source: ValueSource, input_type: Option<InputType>) -> String {
    match (value, source) {
        (Value::String(name), ValueSource::Field) => name.clone(),
        (Value::Array(items), _) if items.is_empty() => Value::Null.to_string(),
        (Value::Array(items), _) => items
            .iter()
            .map(|item| render(item, source, input_type))
            .collect::<Vec<_>>()
            .join(","),
        (Value::Null, _) | (_, ValueSource::Field) => value.to_string(),
        (_, ValueSource::Value) => match input_type {
            None => value.to_string(),
            Some(InputType::String) => quote(&value.to_text()),
            Some(InputType::Number) => number(value),
            Some(InputType::Boolean) => u8::from(truthy(value)).to_string(),
            Some(other) => temporal(value, other),
        },
    }
}

fn number(value: &Value) -> String {
    match value {
        Value::String(text) => match coerce_number(text) {
            Some(n) => Value::Float(n).to_string(),
            None => quote(text),
        },
        other => other.to_string(),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Int(n) => *n != 0,
        Value::Float(f) => *f != 0.0 && !f.is_nan(),
        Value::String(s) => !(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false")),
        Value::Array(items) => !items.is_empty(),
    }
}

enum Moment {
    DateTime(NaiveDateTime),
    Date(NaiveDate),
    Time(NaiveTime),
}

fn moment(value: &Value) -> Option<Moment> {
    let text = match value {
        // JavaScript-style epoch milliseconds.
        Value::Int(millis) => {
            return DateTime::from_timestamp_millis(*millis)
                .map(|dt| Moment::DateTime(dt.naive_utc()));
        }
        Value::String(text) => text.trim(),
        _ => return None,
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(Moment::DateTime(dt.naive_local()));
    }
    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
    {
        return Some(Moment::DateTime(dt));
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(Moment::Date(date));
    }
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(text, fmt).ok())
        .map(Moment::Time)
}

fn day(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `HH:mm:ss.SS`, with the fraction in hundredths of a second.
fn clock(time: NaiveTime) -> String {
    let hundredths = (time.nanosecond() / 10_000_000).min(99);
    format!("{}.{hundredths:02}", time.format("%H:%M:%S"))
}

/// Dates and times are quoted so they parse back as strings rather than as
/// field names.
fn temporal(value: &Value, input_type: InputType) -> String {
    let rendered = match (moment(value), input_type) {
        (Some(Moment::DateTime(dt)), InputType::Date) => Some(day(dt.date())),
        (Some(Moment::Date(date)), InputType::Date) => Some(day(date)),
        (Some(Moment::DateTime(dt)), InputType::Time) => Some(clock(dt.time())),
        (Some(Moment::Time(time)), InputType::Time) => Some(clock(time)),
        (Some(Moment::DateTime(dt)), InputType::DateTime) => {
            Some(format!("{}T{}", day(dt.date()), clock(dt.time())))
        }
        (Some(Moment::Date(date)), InputType::DateTime) => {
            Some(format!("{}T{}", day(date), clock(NaiveTime::default())))
        }
        _ => None,
    };
    quote(&rendered.unwrap_or_else(|| value.to_text()))
}
