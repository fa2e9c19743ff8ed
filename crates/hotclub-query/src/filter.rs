use serde_json::Value;

/// Comparison applied between a row field and a filter value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
	Eq,
	Ne,
	Lt,
	Lte,
	Gt,
	Gte,
	/// Substring match on string fields
	Contains,
}

/// A filter operand
///
/// `From` impls cover the common literal types, so call sites can pass
/// `1`, `"name"`, or `true` directly.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
	Str(String),
	Int(i64),
	Float(f64),
	Bool(bool),
	Null,
}

impl From<&str> for FilterValue {
	fn from(v: &str) -> Self {
		FilterValue::Str(v.to_string())
	}
}

impl From<String> for FilterValue {
	fn from(v: String) -> Self {
		FilterValue::Str(v)
	}
}

impl From<i64> for FilterValue {
	fn from(v: i64) -> Self {
		FilterValue::Int(v)
	}
}

impl From<i32> for FilterValue {
	fn from(v: i32) -> Self {
		FilterValue::Int(v as i64)
	}
}

impl From<f64> for FilterValue {
	fn from(v: f64) -> Self {
		FilterValue::Float(v)
	}
}

impl From<bool> for FilterValue {
	fn from(v: bool) -> Self {
		FilterValue::Bool(v)
	}
}

impl FilterValue {
	fn as_f64(&self) -> Option<f64> {
		match self {
			FilterValue::Int(v) => Some(*v as f64),
			FilterValue::Float(v) => Some(*v),
			_ => None,
		}
	}

	fn as_str(&self) -> Option<&str> {
		match self {
			FilterValue::Str(v) => Some(v),
			_ => None,
		}
	}

	fn to_json(&self) -> Value {
		match self {
			FilterValue::Str(v) => Value::String(v.clone()),
			FilterValue::Int(v) => Value::from(*v),
			FilterValue::Float(v) => Value::from(*v),
			FilterValue::Bool(v) => Value::Bool(*v),
			FilterValue::Null => Value::Null,
		}
	}
}

/// A single field comparison
///
/// Filters are evaluated structurally against the serde_json projection of
/// a row, which keeps the contract independent of any storage engine. A
/// field the projection does not carry never matches.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
	pub field: String,
	pub operator: FilterOperator,
	pub value: FilterValue,
}

impl Filter {
	pub fn new(
		field: impl Into<String>,
		operator: FilterOperator,
		value: impl Into<FilterValue>,
	) -> Self {
		Self {
			field: field.into(),
			operator,
			value: value.into(),
		}
	}

	/// Whether the projected row satisfies this filter
	///
	/// # Examples
	///
	/// ```
	/// use hotclub_query::{Filter, FilterOperator};
	/// use serde_json::json;
	///
	/// let row = json!({"id": 7, "title": "Minor Swing"});
	/// assert!(Filter::new("id", FilterOperator::Eq, 7).matches(&row));
	/// assert!(Filter::new("title", FilterOperator::Contains, "Swing").matches(&row));
	/// assert!(!Filter::new("id", FilterOperator::Gt, 10).matches(&row));
	/// ```
	pub fn matches(&self, row: &Value) -> bool {
		let Some(field_value) = row.get(&self.field) else {
			return false;
		};

		match self.operator {
			FilterOperator::Eq => self.compare_eq(field_value),
			FilterOperator::Ne => !self.compare_eq(field_value),
			FilterOperator::Lt => self.compare_numeric(field_value, |a, b| a < b),
			FilterOperator::Lte => self.compare_numeric(field_value, |a, b| a <= b),
			FilterOperator::Gt => self.compare_numeric(field_value, |a, b| a > b),
			FilterOperator::Gte => self.compare_numeric(field_value, |a, b| a >= b),
			FilterOperator::Contains => match (field_value.as_str(), self.value.as_str()) {
				(Some(field), Some(needle)) => field.contains(needle),
				_ => false,
			},
		}
	}

	fn compare_eq(&self, field_value: &Value) -> bool {
		// numbers compare by value so that Int(1) matches a row's 1.0
		if let (Some(a), Some(b)) = (field_value.as_f64(), self.value.as_f64()) {
			return a == b;
		}
		*field_value == self.value.to_json()
	}

	fn compare_numeric(&self, field_value: &Value, cmp: impl Fn(f64, f64) -> bool) -> bool {
		match (field_value.as_f64(), self.value.as_f64()) {
			(Some(a), Some(b)) => cmp(a, b),
			_ => false,
		}
	}
}
