/*!
# Gingham

This crate provides a small, declarative CLI argument parser: declare the
options your application recognizes in a [`Registry`], hand [`parse`] the
process arguments, and get back a typed, read-only [`ParseResult`], or a
structured [`GinghamError`] explaining exactly what went wrong.

It follows the usual GNU conventions: short keys (`-v`), long keys
(`--verbose`), attached values (`--threads=4`, `-t4`, `-t=4`), consecutive
values (`--threads 4`), combined short flags (`-abc`), and the `--`
terminator, after which everything is positional no matter how dashed it
looks.

A few ground rules worth knowing up front:

* The registry is built once and frozen; parsing only ever borrows it, so
  sharing one across threads needs no locking.
* Values are coerced to their declared [`ValueType`] exactly once, as they
  accumulate, and never re-interpreted afterward.
* The library never prints, never exits, and never drops an argument on the
  floor: every argument lands in the result or surfaces in an error.
* Missing required options are collected into a single error naming all of
  them; everything else fails fast.

## Example

```
use gingham::{OptionSpec, Registry, ValueType};

# fn main() -> Result<(), gingham::GinghamError> {
let registry = Registry::new()
    .with(OptionSpec::flag("--verbose").alias("-v"))?
    .with(
        OptionSpec::option("--threads")
            .alias("-t")
            .value_type(ValueType::Integer)
            .default_value("1")
    )?
    .with(OptionSpec::multi("--exclude"))?
    .with(
        OptionSpec::option("--mode")
            .value_type(ValueType::Enum(&["fast", "small"]))
            .required()
    )?;

let result = gingham::parse(
    ["-v", "-t8", "--mode", "fast", "in.txt", "out.txt"]
        .iter()
        .map(ToString::to_string),
    &registry,
)?;

assert!(result.has_option("--verbose"));
assert_eq!(
    result.value_of("--threads").and_then(|v| v.as_integer()),
    Some(8),
);
assert_eq!(
    result.value_of("--mode").and_then(|v| v.as_str()),
    Some("fast"),
);
assert_eq!(result.positionals(), ["in.txt", "out.txt"]);
# Ok(()) }
```

For real applications, swap the literal slice for [`args`], which pulls the
process argument vector minus the program name.
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]



mod error;
mod parse;
mod registry;
mod result;
mod token;
mod tokenize;

pub use error::GinghamError;
pub use parse::parse;
pub use registry::{
	Arity,
	OptionSpec,
	Registry,
	ValueType,
};
pub use result::{
	ParseResult,
	Value,
};
pub use token::{
	Token,
	TokenKind,
};
pub use tokenize::Tokenizer;



#[must_use]
/// # CLI Arguments.
///
/// Return the process argument vector with the first (program path) entry
/// skipped, ready to feed straight into [`parse`].
///
/// Note this uses [`std::env::args`] under the hood, which panics on
/// arguments containing invalid UTF-8. If that's a concern for your app,
/// collect and convert [`std::env::args_os`] however you see fit and pass
/// the result in yourself.
pub fn args() -> std::iter::Skip<std::env::Args> {
	std::env::args().skip(1)
}
