/*!
# Gingham: Parse Results.
*/

use std::{
	collections::BTreeMap,
	fmt,
};



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Parsed Value.
///
/// The tagged form a raw value takes after coercion. Enum-typed options
/// store their matched string as [`Value::String`].
pub enum Value {
	/// # A String.
	String(String),

	/// # An Integer.
	Integer(i64),

	/// # A Boolean.
	Boolean(bool),
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::String(s) => f.write_str(s),
			Self::Integer(n) => write!(f, "{n}"),
			Self::Boolean(b) => write!(f, "{b}"),
		}
	}
}

impl Value {
	#[must_use]
	/// # As String Slice.
	///
	/// `None` unless string-typed.
	pub fn as_str(&self) -> Option<&str> {
		if let Self::String(s) = self { Some(s.as_str()) } else { None }
	}

	#[must_use]
	/// # As Integer.
	pub const fn as_integer(&self) -> Option<i64> {
		if let Self::Integer(n) = self { Some(*n) } else { None }
	}

	#[must_use]
	/// # As Boolean.
	pub const fn as_boolean(&self) -> Option<bool> {
		if let Self::Boolean(b) = self { Some(*b) } else { None }
	}
}



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Parse Result.
///
/// The read-only outcome of a successful parse: every recorded option value,
/// keyed by canonical name and ordered by textual encounter, plus the
/// leftover positional arguments. Once handed over, it is the caller's alone;
/// nothing in the library holds onto it or mutates it.
pub struct ParseResult {
	/// # Recorded Values.
	///
	/// Keyed by canonical name, one ordered sequence per option.
	values: BTreeMap<&'static str, Vec<Value>>,

	/// # Positional Arguments.
	///
	/// In encounter order.
	positionals: Vec<String>,
}

impl ParseResult {
	#[must_use]
	/// # Was the Option Given?
	///
	/// `name` is the canonical name the spec was registered under, dashes
	/// included. Defaults count as given.
	pub fn has_option(&self, name: &str) -> bool {
		self.values.contains_key(name)
	}

	#[must_use]
	/// # Value of an Option.
	///
	/// The recorded value for a canonical name; last-wins if the option
	/// repeated. Use [`ParseResult::values_of`] for the full sequence.
	pub fn value_of(&self, name: &str) -> Option<&Value> {
		self.values.get(name).and_then(|v| v.last())
	}

	#[must_use]
	/// # All Values of an Option.
	///
	/// Every recorded value, in encounter order; empty if the option never
	/// appeared.
	pub fn values_of(&self, name: &str) -> &[Value] {
		self.values.get(name).map_or(&[], Vec::as_slice)
	}

	#[must_use]
	/// # Positional Arguments.
	pub fn positionals(&self) -> &[String] {
		self.positionals.as_slice()
	}

	/// # Record a Value.
	pub(crate) fn push_value(&mut self, name: &'static str, value: Value) {
		self.values.entry(name).or_default().push(value);
	}

	/// # Record a Positional.
	pub(crate) fn push_positional(&mut self, raw: String) {
		self.positionals.push(raw);
	}

	/// # Occurrence Count.
	pub(crate) fn occurrences(&self, name: &str) -> usize {
		self.values.get(name).map_or(0, Vec::len)
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_value() {
		let v = Value::String("hi".to_owned());
		assert_eq!(v.as_str(), Some("hi"));
		assert_eq!(v.as_integer(), None);
		assert_eq!(v.to_string(), "hi");

		let v = Value::Integer(-3);
		assert_eq!(v.as_integer(), Some(-3));
		assert_eq!(v.as_boolean(), None);
		assert_eq!(v.to_string(), "-3");

		let v = Value::Boolean(true);
		assert_eq!(v.as_boolean(), Some(true));
		assert_eq!(v.as_str(), None);
		assert_eq!(v.to_string(), "true");
	}

	#[test]
	fn t_result() {
		let mut res = ParseResult::default();
		assert!(! res.has_option("--x"));
		assert_eq!(res.value_of("--x"), None);
		assert!(res.values_of("--x").is_empty());

		res.push_value("--x", Value::Integer(1));
		res.push_value("--x", Value::Integer(2));
		res.push_positional("file.txt".to_owned());

		assert!(res.has_option("--x"));
		assert_eq!(res.occurrences("--x"), 2);

		// Last-wins for the singular lookup, full sequence otherwise.
		assert_eq!(res.value_of("--x"), Some(&Value::Integer(2)));
		assert_eq!(
			res.values_of("--x"),
			[Value::Integer(1), Value::Integer(2)],
		);
		assert_eq!(res.positionals(), ["file.txt"]);
	}
}
