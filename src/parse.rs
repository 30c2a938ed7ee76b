/*!
# Gingham: Parser.
*/

use crate::{
	error::GinghamError,
	registry::{
		Arity,
		OptionSpec,
		Registry,
	},
	result::{
		ParseResult,
		Value,
	},
	token::Token,
	tokenize::Tokenizer,
};



/// # Parse Arguments.
///
/// Tokenize and match `args` against `registry`, producing a [`ParseResult`]
/// the caller owns outright.
///
/// Tokens are consumed in order. Option values accumulate by canonical name
/// in textual encounter order, whichever alias was typed, and are coerced to
/// the spec's declared type as they land. After the last token, defaults are
/// applied to options that never appeared, and every required option is
/// checked in one sweep.
///
/// One parse call is a pure function of its inputs: nothing is cached, no
/// global state exists, and concurrent calls over a shared (frozen) registry
/// are fine.
///
/// ## Examples
///
/// ```
/// use gingham::{OptionSpec, Registry, ValueType};
///
/// # fn main() -> Result<(), gingham::GinghamError> {
/// let registry = Registry::new()
///     .with(OptionSpec::flag("--verbose").alias("-v"))?
///     .with(OptionSpec::option("--threads").value_type(ValueType::Integer))?;
///
/// let result = gingham::parse(
///     ["--verbose", "--threads", "4", "in.txt"].iter().map(ToString::to_string),
///     &registry,
/// )?;
///
/// assert!(result.has_option("--verbose"));
/// assert_eq!(
///     result.value_of("--threads").and_then(|v| v.as_integer()),
///     Some(4),
/// );
/// assert_eq!(result.positionals(), ["in.txt"]);
/// # Ok(()) }
/// ```
///
/// ## Errors
///
/// Fails fast on the first unknown option, malformed token, missing value,
/// type mismatch, valued flag, or disallowed repeat. Missing required
/// options are the one aggregate: all of them are gathered into a single
/// [`GinghamError::MissingRequired`] so the caller can report everything at
/// once.
pub fn parse<I: IntoIterator<Item=String>>(args: I, registry: &Registry)
-> Result<ParseResult, GinghamError> {
	let mut out = ParseResult::default();

	for token in Tokenizer::new(args, registry) {
		match token? {
			Token::Positional(raw) => out.push_positional(raw),
			Token::Short(key, value) | Token::Long(key, value) => {
				let Some(spec) = registry.lookup(&key) else {
					return Err(GinghamError::UnknownOption(key));
				};
				record(&mut out, spec, value)?;
			},
		}
	}

	// Absent options with defaults get them now, after real values have had
	// every chance to land.
	for spec in registry.iter() {
		if let Some(raw) = spec.default() {
			if out.occurrences(spec.name()) == 0 {
				out.push_value(spec.name(), spec.kind().coerce(spec.name(), raw)?);
			}
		}
	}

	// One sweep for the required stragglers, all of them at once.
	let mut missing: Vec<&'static str> = registry.iter()
		.filter(|s| s.is_required() && out.occurrences(s.name()) == 0)
		.map(OptionSpec::name)
		.collect();
	if ! missing.is_empty() {
		missing.sort_unstable();
		return Err(GinghamError::MissingRequired(missing));
	}

	Ok(out)
}

/// # Record One Option Token.
///
/// Enforce arity and coerce the value, accumulating into the result under
/// the spec's canonical name.
fn record(out: &mut ParseResult, spec: &OptionSpec, value: Option<String>)
-> Result<(), GinghamError> {
	let name = spec.name();
	match spec.arity() {
		Arity::Flag => {
			if let Some(v) = value {
				return Err(GinghamError::UnexpectedValue { option: name, value: v });
			}
			out.push_value(name, Value::Boolean(true));
		},
		Arity::Single => {
			let Some(v) = value else {
				return Err(GinghamError::MissingValue(name.to_owned()));
			};
			if 0 < out.occurrences(name) && ! spec.is_repeatable() {
				return Err(GinghamError::RepeatedOption(name));
			}
			out.push_value(name, spec.kind().coerce(name, &v)?);
		},
		Arity::Multiple => {
			let Some(v) = value else {
				return Err(GinghamError::MissingValue(name.to_owned()));
			};
			out.push_value(name, spec.kind().coerce(name, &v)?);
		},
	}
	Ok(())
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::registry::ValueType;

	/// # Stringify a Slice.
	fn v(args: &[&str]) -> Vec<String> {
		args.iter().map(ToString::to_string).collect()
	}

	#[test]
	fn t_positional_passthrough() {
		// With nothing option-like in the vector, the result is just the
		// vector.
		let registry = Registry::new()
			.with(OptionSpec::flag("--verbose")).unwrap();
		let cli = v(&["foo", "bar baz", "-", "qux"]);
		let res = parse(cli.clone(), &registry).expect("Parse failed.");
		assert_eq!(res.positionals(), cli.as_slice());
		assert!(! res.has_option("--verbose"));
	}

	#[test]
	fn t_reparse() {
		let registry = Registry::new()
			.with(OptionSpec::flag("--verbose").alias("-v")).unwrap()
			.with(OptionSpec::multi("--input").alias("-i")).unwrap();
		let cli = v(&["-v", "--input", "a", "-i", "b", "trailing"]);

		let one = parse(cli.clone(), &registry).expect("Parse failed.");
		let two = parse(cli, &registry).expect("Reparse failed.");
		assert_eq!(one, two);
	}

	#[test]
	fn t_flag_roundtrip() {
		let registry = Registry::new()
			.with(OptionSpec::flag("-v")).unwrap();

		let res = parse(v(&["-v"]), &registry).expect("Parse failed.");
		assert!(res.has_option("-v"));
		assert_eq!(res.value_of("-v"), Some(&Value::Boolean(true)));

		let res = parse(v(&[]), &registry).expect("Parse failed.");
		assert!(! res.has_option("-v"));
	}

	#[test]
	fn t_bundle_equivalence() {
		let registry = Registry::new()
			.with(OptionSpec::flag("-a")).unwrap()
			.with(OptionSpec::flag("-b")).unwrap()
			.with(OptionSpec::flag("-c")).unwrap();

		let combined = parse(v(&["-abc"]), &registry).expect("Parse failed.");
		let separate = parse(v(&["-a", "-b", "-c"]), &registry).expect("Parse failed.");
		assert_eq!(combined, separate);
		assert!(combined.has_option("-a"));
		assert!(combined.has_option("-b"));
		assert!(combined.has_option("-c"));
	}

	#[test]
	fn t_integer() {
		let registry = Registry::new()
			.with(OptionSpec::option("--count").value_type(ValueType::Integer))
			.unwrap();

		let res = parse(v(&["--count=5"]), &registry).expect("Parse failed.");
		assert_eq!(
			res.value_of("--count").and_then(Value::as_integer),
			Some(5),
		);

		assert_eq!(
			parse(v(&["--count=foo"]), &registry),
			Err(GinghamError::TypeMismatch {
				option: "--count",
				value: "foo".to_owned(),
				expected: ValueType::Integer,
			}),
		);
	}

	#[test]
	fn t_missing_required() {
		let registry = Registry::new()
			.with(OptionSpec::option("--input").required()).unwrap()
			.with(OptionSpec::option("--output").required()).unwrap()
			.with(OptionSpec::flag("--verbose")).unwrap();

		// Both missing: one error naming both.
		assert_eq!(
			parse(v(&["--verbose"]), &registry),
			Err(GinghamError::MissingRequired(vec!["--input", "--output"])),
		);

		// One missing: the error names it alone.
		assert_eq!(
			parse(v(&["--input", "a"]), &registry),
			Err(GinghamError::MissingRequired(vec!["--output"])),
		);

		// All present: fine.
		let res = parse(v(&["--input", "a", "--output", "b"]), &registry)
			.expect("Parse failed.");
		assert_eq!(
			res.value_of("--input").and_then(Value::as_str),
			Some("a"),
		);
	}

	#[test]
	fn t_terminator() {
		let registry = Registry::new()
			.with(OptionSpec::flag("-x")).unwrap();

		let res = parse(v(&["--", "-x"]), &registry).expect("Parse failed.");
		assert_eq!(res.positionals(), ["-x"]);
		assert!(! res.has_option("-x"));
	}

	#[test]
	fn t_unknown() {
		let registry = Registry::new()
			.with(OptionSpec::flag("--verbose")).unwrap();
		assert_eq!(
			parse(v(&["--nope"]), &registry),
			Err(GinghamError::UnknownOption("--nope".to_owned())),
		);
	}

	#[test]
	fn t_flag_with_value() {
		let registry = Registry::new()
			.with(OptionSpec::flag("--verbose")).unwrap();
		assert_eq!(
			parse(v(&["--verbose=yes"]), &registry),
			Err(GinghamError::UnexpectedValue {
				option: "--verbose",
				value: "yes".to_owned(),
			}),
		);
	}

	#[test]
	fn t_repeats() {
		// Singles can't repeat by default.
		let registry = Registry::new()
			.with(OptionSpec::option("--level")).unwrap();
		assert_eq!(
			parse(v(&["--level", "1", "--level", "2"]), &registry),
			Err(GinghamError::RepeatedOption("--level")),
		);

		// Unless they opt in, in which case lookups are last-wins.
		let registry = Registry::new()
			.with(OptionSpec::option("--level").repeatable()).unwrap();
		let res = parse(v(&["--level", "1", "--level", "2"]), &registry)
			.expect("Parse failed.");
		assert_eq!(
			res.value_of("--level").and_then(Value::as_str),
			Some("2"),
		);
		assert_eq!(res.values_of("--level").len(), 2);
	}

	#[test]
	fn t_alias_order() {
		// Values accumulate in textual encounter order no matter which
		// alias carried them.
		let registry = Registry::new()
			.with(
				OptionSpec::multi("--input")
					.alias("-i")
					.value_type(ValueType::Integer)
			)
			.unwrap();

		let res = parse(v(&["-i", "1", "--input=2", "-i3"]), &registry)
			.expect("Parse failed.");
		assert_eq!(
			res.values_of("--input"),
			[Value::Integer(1), Value::Integer(2), Value::Integer(3)],
		);
	}

	#[test]
	fn t_defaults() {
		let registry = Registry::new()
			.with(
				OptionSpec::option("--threads")
					.value_type(ValueType::Integer)
					.default_value("8")
			)
			.unwrap();

		// Absent: the default fills in, and counts as present.
		let res = parse(v(&[]), &registry).expect("Parse failed.");
		assert!(res.has_option("--threads"));
		assert_eq!(
			res.value_of("--threads").and_then(Value::as_integer),
			Some(8),
		);

		// Given: the real value wins.
		let res = parse(v(&["--threads", "2"]), &registry).expect("Parse failed.");
		assert_eq!(
			res.value_of("--threads").and_then(Value::as_integer),
			Some(2),
		);
	}

	#[test]
	fn t_enum() {
		let registry = Registry::new()
			.with(
				OptionSpec::option("--speed")
					.value_type(ValueType::Enum(&["fast", "slow"]))
			)
			.unwrap();

		let res = parse(v(&["--speed", "fast"]), &registry).expect("Parse failed.");
		assert_eq!(
			res.value_of("--speed").and_then(Value::as_str),
			Some("fast"),
		);

		assert!(parse(v(&["--speed", "medium"]), &registry).is_err());
	}

	#[test]
	fn t_boolean_option() {
		let registry = Registry::new()
			.with(OptionSpec::option("--color").value_type(ValueType::Boolean))
			.unwrap();

		let res = parse(v(&["--color=off"]), &registry).expect("Parse failed.");
		assert_eq!(
			res.value_of("--color").and_then(Value::as_boolean),
			Some(false),
		);
	}
}
