/*!
# Gingham: Tokenizer.

A single-pass, lazy iterator turning raw argument strings into [`Token`]s.
Each call to [`Tokenizer::new`] starts fresh; no state survives between
parses.

Classification is syntactic with one exception: expanding a short bundle
like `-abc` requires knowing which members take values, so the tokenizer
borrows the registry for arity lookups. It never resolves anything else;
unknown long keys, type errors, and the rest are the parser's department.
*/

use crate::{
	error::GinghamError,
	registry::Registry,
	token::{
		Token,
		TokenKind,
	},
};
use std::collections::VecDeque;



/// # Argument Tokenizer.
///
/// Iterates over `Result<Token, GinghamError>`. The first hard error fuses
/// the iterator; pending bundle members already expanded are yielded first.
///
/// ## Examples
///
/// ```
/// use gingham::{OptionSpec, Registry, Token, Tokenizer};
///
/// # fn main() -> Result<(), gingham::GinghamError> {
/// let registry = Registry::new()
///     .with(OptionSpec::flag("-a"))?
///     .with(OptionSpec::option("-o"))?;
///
/// let tokens: Vec<Token> = Tokenizer::new(
///     ["-ao", "out.txt", "in.txt"].iter().map(ToString::to_string),
///     &registry,
/// ).collect::<Result<_, _>>()?;
///
/// assert_eq!(tokens, [
///     Token::Short("-a".to_owned(), None),
///     Token::Short("-o".to_owned(), Some("out.txt".to_owned())),
///     Token::Positional("in.txt".to_owned()),
/// ]);
/// # Ok(()) }
/// ```
pub struct Tokenizer<'a, I> {
	/// # Raw Arguments.
	iter: I,

	/// # Registered Options.
	///
	/// Borrowed read-only; arity lookups only.
	registry: &'a Registry,

	/// # Pending Tokens.
	///
	/// Holdovers from a short bundle expansion, drained before the next raw
	/// argument is pulled.
	buf: VecDeque<Token>,

	/// # Pending Error.
	///
	/// A bundle error that surfaced mid-expansion, deferred until the tokens
	/// ahead of it have been yielded.
	failed: Option<GinghamError>,

	/// # Saw `--`?
	terminated: bool,

	/// # Fused?
	done: bool,
}

impl<'a, I: Iterator<Item=String>> Tokenizer<'a, I> {
	/// # New.
	///
	/// Wrap a raw argument source. The program name is the caller's problem;
	/// pass `std::env::args().skip(1)` or the [`args`](crate::args) helper.
	pub fn new<A: IntoIterator<Item=String, IntoIter=I>>(args: A, registry: &'a Registry)
	-> Self {
		Self {
			iter: args.into_iter(),
			registry,
			buf: VecDeque::new(),
			failed: None,
			terminated: false,
			done: false,
		}
	}

	/// # Consecutive Value.
	///
	/// Pull the next raw argument as the value for `key`, unless it looks
	/// like an option (or terminator) in its own right, or there's nothing
	/// left.
	fn take_value(&mut self, key: &str) -> Result<String, GinghamError> {
		match self.iter.next() {
			Some(v) if matches!(TokenKind::from(v.as_str()), TokenKind::Positional) => Ok(v),
			_ => Err(GinghamError::MissingValue(key.to_owned())),
		}
	}

	/// # Does This Key Want a Value?
	///
	/// Unknown keys don't; the parser will reject them before any value
	/// would matter.
	fn wants_value(&self, key: &str) -> bool {
		self.registry.lookup(key).map_or(false, |spec| spec.arity().takes_value())
	}

	/// # Expand a Short Bundle.
	///
	/// Split `-abc` into its member keys, pushing each onto the pending
	/// buffer. Leading members must be zero-arity flags; the first
	/// value-taking member swallows the rest of the bundle as its value
	/// (`-ovalue` and `-o=value` both meaning `-o value`), falling back to
	/// the next argument if nothing remains.
	///
	/// A member missing from the registry makes the remainder unsplittable,
	/// so that fails straight away with the whole bundle as context.
	fn explode(&mut self, raw: &str) -> Result<(), GinghamError> {
		let body = &raw[1..];
		let mut prev: Option<&'static str> = None;
		for (idx, ch) in body.char_indices() {
			// An `=` here can only mean a value got attached to the flag
			// before it.
			if ch == '=' {
				return Err(match prev {
					Some(option) => GinghamError::UnexpectedValue {
						option,
						value: body[idx + 1..].to_owned(),
					},
					// The classifier never sends `-=…` this way.
					None => GinghamError::InvalidToken(raw.to_owned()),
				});
			}

			let mut key = String::with_capacity(5);
			key.push('-');
			key.push(ch);

			let Some(spec) = self.registry.lookup(&key) else {
				return Err(GinghamError::UnknownOption(raw.to_owned()));
			};

			if spec.arity().takes_value() {
				let mut rest = &body[idx + ch.len_utf8()..];
				if let Some(r) = rest.strip_prefix('=') { rest = r; }
				let value =
					if rest.is_empty() { self.take_value(&key)? }
					else { rest.to_owned() };
				self.buf.push_back(Token::Short(key, Some(value)));
				return Ok(());
			}

			prev = Some(spec.name());
			self.buf.push_back(Token::Short(key, None));
		}
		Ok(())
	}
}

impl<'a, I: Iterator<Item=String>> Iterator for Tokenizer<'a, I> {
	type Item = Result<Token, GinghamError>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			// Drain any pending bundle members first.
			if let Some(t) = self.buf.pop_front() { return Some(Ok(t)); }

			// Then any error waiting behind them.
			if let Some(e) = self.failed.take() {
				self.done = true;
				return Some(Err(e));
			}

			if self.done { return None; }

			let raw = self.iter.next()?;

			// Past the terminator everything is positional, dashes or not.
			if self.terminated {
				return Some(Ok(Token::Positional(raw)));
			}

			match TokenKind::from(raw.as_str()) {
				TokenKind::Positional => return Some(Ok(Token::Positional(raw))),

				// The terminator itself yields nothing.
				TokenKind::Terminator => { self.terminated = true; },

				TokenKind::Invalid => {
					self.done = true;
					return Some(Err(GinghamError::InvalidToken(raw)));
				},

				TokenKind::Short =>
					if self.wants_value(&raw) {
						return Some(match self.take_value(&raw) {
							Ok(v) => Ok(Token::Short(raw, Some(v))),
							Err(e) => {
								self.done = true;
								Err(e)
							},
						});
					}
					else {
						return Some(Ok(Token::Short(raw, None)));
					},

				TokenKind::Long =>
					if self.wants_value(&raw) {
						return Some(match self.take_value(&raw) {
							Ok(v) => Ok(Token::Long(raw, Some(v))),
							Err(e) => {
								self.done = true;
								Err(e)
							},
						});
					}
					else {
						return Some(Ok(Token::Long(raw, None)));
					},

				TokenKind::LongV(eq) => {
					let (key, value) = raw.split_at(eq);
					return Some(Ok(Token::Long(
						key.to_owned(),
						Some(value[1..].to_owned()),
					)));
				},

				TokenKind::ShortV =>
					if let Err(e) = self.explode(&raw) {
						if self.buf.is_empty() {
							self.done = true;
							return Some(Err(e));
						}
						// Flags already expanded go out first.
						self.failed = Some(e);
					},
			}
		}
	}
}
