/*!
# Gingham: Errors.

This is the obligatory error enum. Registration-time variants are fatal to
registration; parse-time variants are returned to the caller, who decides
what to do about them. The library itself never prints or exits.
*/

use crate::ValueType;
use thiserror::Error;



#[derive(Debug, Clone, Error, Eq, PartialEq)]
/// # Error!
///
/// Every variant carries the offending raw text and, where one exists, the
/// option's canonical name, so callers can build their own messaging without
/// re-parsing anything.
pub enum GinghamError {
	/// # Duplicate Alias.
	///
	/// The key was already registered, either by an earlier spec or by the
	/// same spec twice. Registration-time.
	#[error("duplicate alias: {0}")]
	DuplicateAlias(&'static str),

	/// # Invalid Alias.
	///
	/// The key doesn't satisfy the short/long grammar. Registration-time.
	#[error("invalid alias: {0}")]
	InvalidAlias(&'static str),

	/// # Required Option With a Default.
	///
	/// A default would make the option impossible to miss, so requiring it
	/// too is a contradiction. Registration-time.
	#[error("option {0} cannot be required and carry a default")]
	DefaultedRequired(&'static str),

	/// # Flag With a Default.
	///
	/// Zero-arity flags have no value to default. Registration-time.
	#[error("flag {0} cannot carry a default")]
	DefaultedFlag(&'static str),

	/// # Unknown Option.
	///
	/// An option-like argument with no matching spec, as typed, dashes and
	/// all. (For a short bundle, the whole bundle.)
	#[error("unknown option: {0}")]
	UnknownOption(String),

	/// # Missing Value.
	///
	/// A value-taking option reached the end of the arguments, or ran into
	/// something option-like where its value should have been.
	#[error("missing value for option: {0}")]
	MissingValue(String),

	/// # Invalid Token.
	///
	/// A dashed argument that doesn't match any recognized key shape, like
	/// `-=foo` or `---x`.
	#[error("invalid token: {0}")]
	InvalidToken(String),

	/// # Type Mismatch.
	///
	/// A raw value that failed coercion to the option's declared type. Also
	/// raised at registration time if a spec's default fails coercion.
	#[error("invalid value {value:?} for option {option}: expected {expected}")]
	TypeMismatch {
		/// # Canonical Name.
		option: &'static str,
		/// # Raw Value.
		value: String,
		/// # Expected Type.
		expected: ValueType,
	},

	/// # Unexpected Value.
	///
	/// A value explicitly attached to a zero-arity flag, like `--quiet=1`.
	#[error("option {option} does not take a value (found {value:?})")]
	UnexpectedValue {
		/// # Canonical Name.
		option: &'static str,
		/// # Raw Value.
		value: String,
	},

	/// # Repeated Option.
	///
	/// A single-value option that turned up more than once without having
	/// opted into repetition.
	#[error("option {0} cannot be repeated")]
	RepeatedOption(&'static str),

	/// # Missing Required Option(s).
	///
	/// Raised after all tokens have been consumed, naming every required
	/// option that went unrecorded (not just the first), so callers can
	/// report the whole lot at once.
	#[error("missing required option(s): {}", .0.join(", "))]
	MissingRequired(Vec<&'static str>),
}
