/*!
# Gingham: Option Registry.

Specs are declared up front, validated eagerly, and frozen thereafter; the
registry grows but never shrinks, and parsing only ever borrows it. That
keeps every parse call a pure function of (arguments, registry), and makes
sharing a registry across threads safe without any locking.
*/

use crate::{
	error::GinghamError,
	result::Value,
};
use std::{
	collections::BTreeMap,
	fmt,
};



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Arity.
///
/// How many values an option accepts.
pub enum Arity {
	/// # Zero; a Boolean Flag.
	Flag,

	/// # Exactly One.
	Single,

	/// # As Many As Given.
	Multiple,
}

impl Arity {
	#[must_use]
	/// # Takes a Value?
	pub const fn takes_value(self) -> bool {
		! matches!(self, Self::Flag)
	}
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Value Type.
///
/// The type a raw value is coerced into at accumulation time. Coercion
/// happens exactly once; results are stored as [`Value`] and never
/// re-interpreted.
pub enum ValueType {
	/// # Anything Goes.
	String,

	/// # A Signed Integer (`i64`).
	Integer,

	/// # A Boolean.
	///
	/// Accepts `true`/`false`, `yes`/`no`, `on`/`off`, and `1`/`0`,
	/// ASCII-case-insensitively.
	Boolean,

	/// # One of a Fixed Set.
	///
	/// Membership is case-sensitive; the coerced value is the matched
	/// string.
	Enum(&'static [&'static str]),
}

impl fmt::Display for ValueType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::String => f.write_str("string"),
			Self::Integer => f.write_str("integer"),
			Self::Boolean => f.write_str("boolean"),
			Self::Enum(set) => write!(f, "one of: {}", set.join(", ")),
		}
	}
}

impl ValueType {
	/// # Coerce.
	///
	/// Convert a raw string into a typed [`Value`], or complain about it.
	pub(crate) fn coerce(self, option: &'static str, raw: &str)
	-> Result<Value, GinghamError> {
		match self {
			Self::String => Ok(Value::String(raw.to_owned())),
			Self::Integer => raw.parse::<i64>()
				.map(Value::Integer)
				.map_err(|_| self.mismatch(option, raw)),
			Self::Boolean =>
				if ["true", "yes", "on", "1"].iter().any(|t| raw.eq_ignore_ascii_case(t)) {
					Ok(Value::Boolean(true))
				}
				else if ["false", "no", "off", "0"].iter().any(|t| raw.eq_ignore_ascii_case(t)) {
					Ok(Value::Boolean(false))
				}
				else { Err(self.mismatch(option, raw)) },
			Self::Enum(set) =>
				if set.contains(&raw) { Ok(Value::String(raw.to_owned())) }
				else { Err(self.mismatch(option, raw)) },
		}
	}

	/// # Mismatch Error.
	fn mismatch(self, option: &'static str, raw: &str) -> GinghamError {
		GinghamError::TypeMismatch {
			option,
			value: raw.to_owned(),
			expected: self,
		}
	}
}



#[derive(Debug, Clone)]
/// # Option Specification.
///
/// One recognized option: a canonical name, any number of aliases, an arity,
/// a value type, and the required/repeatable/default knobs. Build one with
/// [`OptionSpec::flag`], [`OptionSpec::option`], or [`OptionSpec::multi`] and
/// chain the rest.
///
/// ## Examples
///
/// ```
/// use gingham::{OptionSpec, ValueType};
///
/// let verbose = OptionSpec::flag("--verbose").alias("-v");
/// let threads = OptionSpec::option("--threads")
///     .alias("-t")
///     .value_type(ValueType::Integer)
///     .default_value("1");
/// ```
pub struct OptionSpec {
	/// # Canonical Name.
	name: &'static str,

	/// # Alternate Names.
	aliases: Vec<&'static str>,

	/// # Arity.
	arity: Arity,

	/// # Value Type.
	value_type: ValueType,

	/// # Must Appear?
	required: bool,

	/// # May a Single Repeat?
	repeatable: bool,

	/// # Default Raw Value.
	default: Option<&'static str>,
}

impl OptionSpec {
	#[must_use]
	/// # New Boolean Flag.
	///
	/// Zero arity; present or not.
	pub const fn flag(name: &'static str) -> Self {
		Self::new(name, Arity::Flag, ValueType::Boolean)
	}

	#[must_use]
	/// # New Single-Value Option.
	///
	/// Takes exactly one value, string-typed unless changed.
	pub const fn option(name: &'static str) -> Self {
		Self::new(name, Arity::Single, ValueType::String)
	}

	#[must_use]
	/// # New Multi-Value Option.
	///
	/// Accumulates every value given, in encounter order.
	pub const fn multi(name: &'static str) -> Self {
		Self::new(name, Arity::Multiple, ValueType::String)
	}

	/// # New (Generic).
	const fn new(name: &'static str, arity: Arity, value_type: ValueType) -> Self {
		Self {
			name,
			aliases: Vec::new(),
			arity,
			value_type,
			required: false,
			repeatable: false,
			default: None,
		}
	}

	#[must_use]
	/// # With an Alias.
	///
	/// Add an alternate key, short or long, that resolves to this spec.
	pub fn alias(mut self, key: &'static str) -> Self {
		self.aliases.push(key);
		self
	}

	#[must_use]
	/// # With a Value Type.
	pub fn value_type(mut self, kind: ValueType) -> Self {
		self.value_type = kind;
		self
	}

	#[must_use]
	/// # Required.
	///
	/// The option must appear at least once or parsing fails.
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	#[must_use]
	/// # Repeatable.
	///
	/// Let a [`Arity::Single`] option appear more than once; lookups are
	/// last-wins. (No effect on other arities.)
	pub fn repeatable(mut self) -> Self {
		self.repeatable = true;
		self
	}

	#[must_use]
	/// # With a Default Value.
	///
	/// Used when the option never appears. Coerced, and rejected if
	/// uncoercible, at registration time rather than parse time.
	pub fn default_value(mut self, raw: &'static str) -> Self {
		self.default = Some(raw);
		self
	}
}

impl OptionSpec {
	#[must_use]
	/// # Canonical Name.
	pub const fn name(&self) -> &'static str { self.name }

	#[must_use]
	/// # Arity.
	pub const fn arity(&self) -> Arity { self.arity }

	#[must_use]
	/// # Value Type.
	pub const fn kind(&self) -> ValueType { self.value_type }

	#[must_use]
	/// # Must Appear?
	pub const fn is_required(&self) -> bool { self.required }

	#[must_use]
	/// # May Repeat?
	pub const fn is_repeatable(&self) -> bool { self.repeatable }

	#[must_use]
	/// # Default Raw Value.
	pub const fn default(&self) -> Option<&'static str> { self.default }

	/// # All Keys.
	///
	/// The canonical name followed by the aliases.
	fn keys(&self) -> impl Iterator<Item=&'static str> + '_ {
		std::iter::once(self.name).chain(self.aliases.iter().copied())
	}
}



#[derive(Debug, Clone, Default)]
/// # Option Registry.
///
/// The declarative table of recognized options. Registration is append-only
/// and fail-fast: bad alias shapes, collisions, and contradictory knobs are
/// all rejected up front so parse time never has to think about them.
///
/// ## Examples
///
/// ```
/// use gingham::{OptionSpec, Registry};
///
/// # fn main() -> Result<(), gingham::GinghamError> {
/// let registry = Registry::new()
///     .with(OptionSpec::flag("--verbose").alias("-v"))?
///     .with(OptionSpec::option("--output").alias("-o").required())?;
///
/// assert!(registry.lookup("-v").is_some());
/// assert!(registry.lookup("--nope").is_none());
/// # Ok(()) }
/// ```
pub struct Registry {
	/// # Registered Specs.
	specs: Vec<OptionSpec>,

	/// # Alias Index.
	///
	/// Every key, canonical or alias, mapped to its spec's position.
	index: BTreeMap<&'static str, usize>,
}

impl Registry {
	#[must_use]
	/// # New (Empty).
	pub fn new() -> Self { Self::default() }

	/// # Register an Option.
	///
	/// ## Errors
	///
	/// Returns an error if any key is malformed or collides with an existing
	/// one, or if the spec's default is contradictory or uncoercible. On
	/// error the registry is left exactly as it was.
	pub fn register(&mut self, spec: OptionSpec) -> Result<(), GinghamError> {
		// Vet the keys before touching anything.
		let mut seen: Vec<&'static str> = Vec::with_capacity(1 + spec.aliases.len());
		for key in spec.keys() {
			if ! valid_key(key.as_bytes()) {
				return Err(GinghamError::InvalidAlias(key));
			}
			if self.index.contains_key(key) || seen.contains(&key) {
				return Err(GinghamError::DuplicateAlias(key));
			}
			seen.push(key);
		}

		// Defaults have to make sense too.
		if let Some(raw) = spec.default {
			if spec.required {
				return Err(GinghamError::DefaultedRequired(spec.name));
			}
			if matches!(spec.arity, Arity::Flag) {
				return Err(GinghamError::DefaultedFlag(spec.name));
			}
			// Coerce now and discard; parse reruns this on the (verified)
			// raw string if the default is ever needed.
			spec.value_type.coerce(spec.name, raw)?;
		}

		let idx = self.specs.len();
		for key in seen { self.index.insert(key, idx); }
		self.specs.push(spec);
		Ok(())
	}

	/// # Register an Option (Builder-Style).
	///
	/// Same as [`Registry::register`], but chainable.
	///
	/// ## Errors
	///
	/// Same as [`Registry::register`].
	pub fn with(mut self, spec: OptionSpec) -> Result<Self, GinghamError> {
		self.register(spec)?;
		Ok(self)
	}

	#[must_use]
	/// # Look Up a Key.
	///
	/// Resolve any registered key, canonical or alias, to its spec.
	pub fn lookup(&self, key: &str) -> Option<&OptionSpec> {
		self.index.get(key).and_then(|&idx| self.specs.get(idx))
	}

	#[must_use]
	/// # Number of Registered Options.
	///
	/// Aliases don't count; one spec is one option.
	pub fn len(&self) -> usize { self.specs.len() }

	#[must_use]
	/// # Is It Empty?
	pub fn is_empty(&self) -> bool { self.specs.is_empty() }

	/// # Iterate the Specs.
	///
	/// In registration order.
	pub(crate) fn iter(&self) -> std::slice::Iter<'_, OptionSpec> {
		self.specs.iter()
	}
}



/// # Valid Key?
///
/// Short keys are a dash and one ASCII alphanumeric. Long keys are two
/// dashes, an ASCII alphanumeric, then any mix of alphanumerics, dashes,
/// and underscores.
const fn valid_key(key: &[u8]) -> bool {
	match key {
		[b'-', k] => k.is_ascii_alphanumeric(),
		[b'-', b'-', first, rest @ ..] => {
			if ! first.is_ascii_alphanumeric() { return false; }
			let mut rest = rest;
			while let [a, r @ ..] = rest {
				if ! (a.is_ascii_alphanumeric() || matches!(*a, b'-' | b'_')) {
					return false;
				}
				rest = r;
			}
			true
		},
		_ => false,
	}
}
