/*!
# Gingham: Token Model.

Classification here is purely syntactic; nothing in this module knows or
cares what the registry holds. The one registry-coupled step, short-bundle
expansion, lives in the tokenizer.
*/



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Token Kind.
///
/// The `TokenKind` enum is the first-pass classification of a raw argument,
/// derived from shape alone:
/// * A single `-` followed by an ASCII alphanumeric is a short key; anything trailing it is bundled flags and/or an attached value.
/// * Two dashes followed by an ASCII alphanumeric is a long key; if an `=` appears, everything after it is an attached value.
/// * A bare `--` ends option parsing.
/// * A leading dash that fits none of the above is malformed.
/// * Everything else, including `-` by itself, is positional.
pub enum TokenKind {
	/// # Not Option-Like.
	Positional,

	/// # A Short Key, e.g. `-x`.
	Short,

	/// # A Short Key With Company, e.g. `-abc` or `-ovalue`.
	ShortV,

	/// # A Long Key, e.g. `--xyz`.
	Long,

	/// # A Long Key With a Value.
	///
	/// The number is the byte position of the `=`. Everything before it is
	/// the key; everything after it the value.
	LongV(usize),

	/// # The `--` Terminator.
	Terminator,

	/// # Dashed, But Wrong.
	///
	/// Arguments like `-=foo` or `---x` that start with a dash yet match no
	/// recognized key shape.
	Invalid,
}

impl From<&str> for TokenKind {
	fn from(raw: &str) -> Self {
		let bytes = raw.as_bytes();
		match bytes {
			// Bare dashes are positional by convention (typically stdin).
			[] | [b'-'] => Self::Positional,
			[b'-', b'-'] => Self::Terminator,
			[b'-', b'-', first, ..] =>
				if first.is_ascii_alphanumeric() {
					bytes.iter()
						.position(|&b| b == b'=')
						.map_or(Self::Long, Self::LongV)
				}
				else { Self::Invalid },
			[b'-', first, rest @ ..] =>
				if first.is_ascii_alphanumeric() {
					if rest.is_empty() { Self::Short }
					else { Self::ShortV }
				}
				else { Self::Invalid },
			_ => Self::Positional,
		}
	}
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Classified Argument.
///
/// This is what the tokenizer produces: every argument becomes exactly one
/// positional value or one option with its key normalized to the form it was
/// registered under (dashes included) and its value, attached or consecutive,
/// pulled alongside it.
pub enum Token {
	/// # Positional Value.
	///
	/// An argument associated with no option, kept verbatim in encounter
	/// order. (Everything after `--` lands here regardless of shape.)
	Positional(String),

	/// # Short Option.
	///
	/// The key as typed, dash included, plus the value that travels with it,
	/// if any.
	Short(String, Option<String>),

	/// # Long Option.
	///
	/// Same deal as [`Token::Short`], but with two dashes.
	Long(String, Option<String>),
}

impl Token {
	#[must_use]
	/// # Key.
	///
	/// Return the option key, dashes included, or `None` for positionals.
	pub fn key(&self) -> Option<&str> {
		match self {
			Self::Positional(_) => None,
			Self::Short(k, _) | Self::Long(k, _) => Some(k),
		}
	}

	#[must_use]
	/// # Value.
	///
	/// Return the attached or consecutive value, if any.
	pub fn value(&self) -> Option<&str> {
		match self {
			Self::Positional(_) => None,
			Self::Short(_, v) | Self::Long(_, v) => v.as_deref(),
		}
	}

	#[must_use]
	/// # Is Positional?
	pub const fn is_positional(&self) -> bool {
		matches!(self, Self::Positional(_))
	}
}
