use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;
use tracing::debug;

use super::literal;

/// Date layouts seen across the source extracts.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d", "%Y%m%d"];
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.fZ"];

/// Element type a field declares in the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    Text,
    Number,
    Integer,
    Date,
}

/// How a field is stored, resolved once from the schema at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar(ScalarType),
    Array(ScalarType),
}

impl FieldKind {
    pub fn is_array(&self) -> bool {
        matches!(self, FieldKind::Array(_))
    }

    pub fn scalar_type(&self) -> ScalarType {
        match self {
            FieldKind::Scalar(t) | FieldKind::Array(t) => *t,
        }
    }
}

/// A single cell value.
#[derive(Debug, Clone)]
pub enum Scalar {
    Null,
    Text(String),
    Integer(i64),
    Number(f64),
    Date(NaiveDate),
}

impl Scalar {
    pub fn text(value: impl Into<String>) -> Self {
        Scalar::Text(value.into())
    }

    pub fn is_null(&self) -> bool {
        match self {
            Scalar::Null => true,
            Scalar::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Integer(i) => Some(*i as f64),
            Scalar::Number(n) => Some(*n),
            Scalar::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Scalar::Date(d) => Some(*d),
            Scalar::Text(s) => parse_date(s),
            _ => None,
        }
    }

    /// Parse a raw cell into the declared type. Unparseable numbers and dates
    /// become `Null`; the record itself is never rejected.
    pub fn parse(raw: &str, ty: ScalarType) -> Self {
        Self::try_parse(raw, ty).unwrap_or_else(|text| {
            debug!(value = %text, expected = ?ty, "Unparseable cell stored as null");
            Scalar::Null
        })
    }

    /// Like [`Scalar::parse`], but hands back the trimmed text when it is not
    /// a value of the declared type. Null tokens parse to `Null`.
    pub fn try_parse(raw: &str, ty: ScalarType) -> Result<Self, String> {
        let raw = raw.trim();
        if literal::is_null_token(raw) {
            return Ok(Scalar::Null);
        }
        let parsed = match ty {
            ScalarType::Text => Some(Scalar::Text(raw.to_string())),
            ScalarType::Integer => raw.parse::<i64>().map(Scalar::Integer).ok().or_else(|| {
                raw.parse::<f64>().ok().map(|f| {
                    if f.is_finite() && f.fract() == 0.0 {
                        Scalar::Integer(f as i64)
                    } else {
                        Scalar::Number(f)
                    }
                })
            }),
            ScalarType::Number => raw.parse::<f64>().ok().map(Scalar::Number),
            ScalarType::Date => parse_date(raw).map(Scalar::Date),
        };
        parsed.ok_or_else(|| raw.to_string())
    }

    /// Canonical textual form, used for hashing, grouping and CSV cells.
    pub fn render(&self) -> String {
        match self {
            Scalar::Null => String::new(),
            Scalar::Text(s) => s.clone(),
            Scalar::Integer(i) => i.to_string(),
            Scalar::Number(n) => n.to_string(),
            Scalar::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Scalar::Null => Value::Null,
            Scalar::Text(s) => Value::String(s.clone()),
            Scalar::Integer(i) => Value::from(*i),
            Scalar::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Scalar::Date(d) => Value::String(d.format("%Y-%m-%d").to_string()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Scalar::Null => 0,
            Scalar::Integer(_) => 1,
            Scalar::Number(_) => 2,
            Scalar::Date(_) => 3,
            Scalar::Text(_) => 4,
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scalar {}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scalar {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Scalar::Text(a), Scalar::Text(b)) => a.cmp(b),
            (Scalar::Integer(a), Scalar::Integer(b)) => a.cmp(b),
            (Scalar::Number(a), Scalar::Number(b)) => a.total_cmp(b),
            (Scalar::Date(a), Scalar::Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Scalar::Null => {}
            Scalar::Text(s) => s.hash(state),
            Scalar::Integer(i) => i.hash(state),
            Scalar::Number(n) => n.to_bits().hash(state),
            Scalar::Date(d) => d.hash(state),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value)
    }
}

impl From<NaiveDate> for Scalar {
    fn from(value: NaiveDate) -> Self {
        Scalar::Date(value)
    }
}

/// A field: one scalar or a list of scalars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Scalar(Scalar),
    Array(Vec<Scalar>),
}

impl FieldValue {
    /// The type-appropriate empty value: `null` or `[]`.
    pub fn empty(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Scalar(_) => FieldValue::Scalar(Scalar::Null),
            FieldKind::Array(_) => FieldValue::Array(Vec::new()),
        }
    }

    pub fn text_array<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::Array(items.into_iter().map(|s| Scalar::Text(s.into())).collect())
    }

    /// Parse a raw cell according to `kind`.
    pub fn parse(raw: &str, kind: FieldKind) -> Self {
        match kind {
            FieldKind::Array(ty) => FieldValue::Array(
                literal::parse_list(raw)
                    .iter()
                    .map(|item| Scalar::parse(item, ty))
                    .filter(|s| !s.is_null())
                    .collect(),
            ),
            FieldKind::Scalar(ty) => {
                // A scalar column occasionally arrives wrapped in a one-item list
                if literal::looks_like_list(raw) {
                    let items = literal::parse_list(raw);
                    if items.len() <= 1 {
                        let item = items.first().map(String::as_str).unwrap_or("");
                        return FieldValue::Scalar(Scalar::parse(item, ty));
                    }
                }
                FieldValue::Scalar(Scalar::parse(raw, ty))
            }
        }
    }

    /// JSON form of a raw cell for schema validation. Items that are not
    /// values of the declared type stay text, so the schema reports them
    /// instead of seeing a null.
    pub fn raw_json(raw: &str, kind: FieldKind) -> Value {
        let item = |text: &str, ty: ScalarType| match Scalar::try_parse(text, ty) {
            Ok(scalar) => scalar.to_json(),
            Err(text) => Value::String(text),
        };
        match kind {
            FieldKind::Array(ty) => Value::Array(
                literal::parse_list(raw)
                    .iter()
                    .map(|text| item(text, ty))
                    .filter(|v| !v.is_null())
                    .collect(),
            ),
            FieldKind::Scalar(ty) => {
                if literal::looks_like_list(raw) {
                    let items = literal::parse_list(raw);
                    if items.len() <= 1 {
                        return item(items.first().map(String::as_str).unwrap_or(""), ty);
                    }
                }
                item(raw, ty)
            }
        }
    }

    /// Non-null scalars held by this field, in stored order.
    pub fn values(&self) -> Vec<&Scalar> {
        match self {
            FieldValue::Scalar(s) if s.is_null() => Vec::new(),
            FieldValue::Scalar(s) => vec![s],
            FieldValue::Array(items) => items.iter().filter(|s| !s.is_null()).collect(),
        }
    }

    pub fn first(&self) -> Option<&Scalar> {
        self.values().into_iter().next()
    }

    pub fn is_missing(&self) -> bool {
        self.values().is_empty()
    }

    /// Coerce to the storage shape `kind` declares. Arrays collapse to their
    /// first value when a scalar is expected; scalars wrap into one-item lists.
    pub fn coerce(self, kind: FieldKind) -> Self {
        match (self, kind) {
            (FieldValue::Array(items), FieldKind::Scalar(_)) => FieldValue::Scalar(
                items.into_iter().find(|s| !s.is_null()).unwrap_or(Scalar::Null),
            ),
            (FieldValue::Scalar(s), FieldKind::Array(_)) => {
                if s.is_null() {
                    FieldValue::Array(Vec::new())
                } else {
                    FieldValue::Array(vec![s])
                }
            }
            (value, _) => value,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Scalar(s) => s.to_json(),
            FieldValue::Array(items) => Value::Array(items.iter().map(Scalar::to_json).collect()),
        }
    }

    /// CSV cell form. Arrays are written as JSON list literals so a consumer
    /// can rebuild the list without ambiguity.
    pub fn to_cell(&self) -> String {
        match self {
            FieldValue::Scalar(s) => s.render(),
            FieldValue::Array(_) => self.to_json().to_string(),
        }
    }
}

/// Parse a date in any of the layouts the sources use. A trailing time part
/// is dropped.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(d);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    // "2021-03-01 00:00:00+00:00" and similar: keep the leading date
    raw.get(..10)
        .and_then(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parse_scalars() {
        assert_eq!(Scalar::parse("5", ScalarType::Number), Scalar::Number(5.0));
        assert_eq!(Scalar::parse("1200.0", ScalarType::Integer), Scalar::Integer(1200));
        assert_eq!(Scalar::parse("abc", ScalarType::Number), Scalar::Null);
        assert_eq!(Scalar::parse("nan", ScalarType::Text), Scalar::Null);
        assert_eq!(
            Scalar::parse("2021-03-01 00:00:00", ScalarType::Date),
            Scalar::Date(NaiveDate::from_ymd_opt(2021, 3, 1).unwrap())
        );
    }

    #[test]
    fn test_try_parse_keeps_rejected_text() {
        assert_eq!(Scalar::try_parse(" abc ", ScalarType::Number), Err("abc".to_string()));
        assert_eq!(Scalar::try_parse("None", ScalarType::Number), Ok(Scalar::Null));
        assert_eq!(Scalar::try_parse("7", ScalarType::Integer), Ok(Scalar::Integer(7)));
    }

    #[test]
    fn test_raw_json_keeps_invalid_values_visible() {
        let number = FieldKind::Scalar(ScalarType::Number);
        assert_eq!(FieldValue::raw_json("abc", number), Value::String("abc".to_string()));
        assert_eq!(FieldValue::raw_json("2.5", number), serde_json::json!(2.5));
        assert_eq!(FieldValue::raw_json("", number), Value::Null);
        assert_eq!(
            FieldValue::raw_json("north", FieldKind::Array(ScalarType::Number)),
            serde_json::json!(["north"])
        );
        assert_eq!(
            FieldValue::raw_json("[1.5, None]", FieldKind::Array(ScalarType::Number)),
            serde_json::json!([1.5])
        );
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2020, 1, 8);
        assert_eq!(parse_date("2020-01-08"), expected);
        assert_eq!(parse_date("08/01/2020"), expected);
        assert_eq!(parse_date("2020/01/08"), expected);
        assert_eq!(parse_date("2020-01-08T10:15:00"), expected);
        assert_eq!(parse_date("2020-01-08T10:15:00+02:00"), expected);
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn test_scalar_set_semantics() {
        let mut set = HashSet::new();
        set.insert(Scalar::Number(1.5));
        set.insert(Scalar::Number(1.5));
        set.insert(Scalar::text("a"));
        set.insert(Scalar::text("a"));
        assert_eq!(set.len(), 2);
        assert!(Scalar::Integer(1) < Scalar::text("1"));
    }

    #[test]
    fn test_field_parse_and_cell() {
        let kind = FieldKind::Array(ScalarType::Number);
        let value = FieldValue::parse("[1.5, None, 2.0]", kind);
        assert_eq!(value, FieldValue::Array(vec![Scalar::Number(1.5), Scalar::Number(2.0)]));
        assert_eq!(value.to_cell(), "[1.5,2.0]");

        let ids = FieldValue::parse("['A1', 'A2']", FieldKind::Array(ScalarType::Text));
        assert_eq!(ids.to_cell(), r#"["A1","A2"]"#);

        let wrapped = FieldValue::parse("['FL']", FieldKind::Scalar(ScalarType::Text));
        assert_eq!(wrapped, FieldValue::Scalar(Scalar::text("FL")));
    }

    #[test]
    fn test_coerce_between_shapes() {
        let arr = FieldValue::Array(vec![Scalar::Null, Scalar::Number(3.0)]);
        assert_eq!(
            arr.coerce(FieldKind::Scalar(ScalarType::Number)),
            FieldValue::Scalar(Scalar::Number(3.0))
        );
        let scalar = FieldValue::Scalar(Scalar::text("x"));
        assert_eq!(
            scalar.coerce(FieldKind::Array(ScalarType::Text)),
            FieldValue::text_array(["x"])
        );
    }
}
