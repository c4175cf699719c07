use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
	#[error("duplicate short key {0:?} in schema")]
	DuplicateKey(String),
	#[error("duplicate long alias {0:?} in schema")]
	DuplicateName(String),
}

/// A value coerced from a single command-line token.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
	Bool(bool),
	Str(String),
	Int(i32),
	Long(i64),
	Float(f32),
	Double(f64),
}

/// Typed accessor for the configuration field a flag controls. The
/// accessor function is the slot's address; no runtime reflection is
/// involved.
pub enum Slot<C> {
	Bool(fn(&mut C) -> &mut bool),
	Str(fn(&mut C) -> &mut String),
	Int(fn(&mut C) -> &mut i32),
	Long(fn(&mut C) -> &mut i64),
	Float(fn(&mut C) -> &mut f32),
	Double(fn(&mut C) -> &mut f64),
}

impl<C> Slot<C> {
	/// Whether the flag consumes a following value token. Boolean flags
	/// toggle on presence instead.
	pub fn takes_value(&self) -> bool {
		!matches!(self, Self::Bool(_))
	}

	pub(crate) fn type_name(&self) -> &'static str {
		match self {
			Self::Bool(_) => "flag",
			Self::Str(_) => "text",
			Self::Int(_) | Self::Long(_) => "integer",
			Self::Float(_) | Self::Double(_) => "number",
		}
	}

	pub(crate) fn coerce(&self, raw: &str) -> Option<Value> {
		match self {
			Self::Bool(_) => None,
			Self::Str(_) => Some(Value::Str(raw.into())),
			Self::Int(_) => raw.parse().ok().map(Value::Int),
			Self::Long(_) => raw.parse().ok().map(Value::Long),
			Self::Float(_) => raw.parse().ok().map(Value::Float),
			Self::Double(_) => raw.parse().ok().map(Value::Double),
		}
	}

	pub(crate) fn store(&self, config: &mut C, value: Value) {
		match (self, value) {
			(Self::Bool(slot), Value::Bool(value)) => *slot(config) = value,
			(Self::Str(slot), Value::Str(value)) => *slot(config) = value,
			(Self::Int(slot), Value::Int(value)) => *slot(config) = value,
			(Self::Long(slot), Value::Long(value)) => *slot(config) = value,
			(Self::Float(slot), Value::Float(value)) => *slot(config) = value,
			(Self::Double(slot), Value::Double(value)) => *slot(config) = value,
			_ => unreachable!("slot and value kinds always match"),
		}
	}
}

/// Describes one bindable flag: its short key, the long alias derived
/// from the field it controls, and how its value is coerced and stored.
pub struct Arg<C> {
	pub key: String,
	pub name: String,
	pub description: String,
	pub required: bool,
	pub slot: Slot<C>,
	pub check: Option<fn(&Value) -> bool>,
}

impl<C> Arg<C> {
	pub fn new(key: &str, name: &str, description: &str, slot: Slot<C>) -> Self {
		Arg {
			key: key.into(),
			name: name.into(),
			description: description.into(),
			required: false,
			slot,
			check: None,
		}
	}

	/// Marks the flag as mandatory for a successful binding pass.
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Attaches a predicate that coerced values must satisfy before
	/// being stored.
	pub fn check(mut self, check: fn(&Value) -> bool) -> Self {
		self.check = Some(check);
		self
	}
}

/// Ordered flag descriptors plus the lookups used to resolve tokens.
/// Declaration order is preserved for usage rendering.
pub struct Schema<C> {
	args: Vec<Arg<C>>,
	by_key: HashMap<String, usize>,
	key_by_name: HashMap<String, String>,
}

impl<C> Schema<C> {
	/// Indexes the descriptors, rejecting duplicate short keys and
	/// duplicate long aliases.
	pub fn new(args: Vec<Arg<C>>) -> Result<Self, Error> {
		let mut by_key = HashMap::new();
		let mut key_by_name = HashMap::new();

		for (idx, arg) in args.iter().enumerate() {
			if by_key.insert(arg.key.clone(), idx).is_some() {
				return Err(Error::DuplicateKey(arg.key.clone()));
			}

			if key_by_name.insert(arg.name.clone(), arg.key.clone()).is_some() {
				return Err(Error::DuplicateName(arg.name.clone()));
			}
		}

		Ok(Schema {
			args,
			by_key,
			key_by_name,
		})
	}

	/// Descriptors in declaration order.
	pub fn args(&self) -> &[Arg<C>] {
		&self.args
	}

	/// Resolves a raw token to a descriptor position. Long forms go
	/// through the alias lookup first, then the key lookup.
	pub(crate) fn resolve(&self, token: &str) -> Option<usize> {
		if let Some(name) = token.strip_prefix("--") {
			let key = self.key_by_name.get(name)?;

			return self.by_key.get(key).copied();
		}

		let key = token.strip_prefix('-')?;

		self.by_key.get(key).copied()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[derive(Debug, Default, PartialEq)]
	struct Sample {
		verbose: bool,
		output: String,
		level: i32,
	}

	fn verbose(sample: &mut Sample) -> &mut bool {
		&mut sample.verbose
	}

	fn output(sample: &mut Sample) -> &mut String {
		&mut sample.output
	}

	fn level(sample: &mut Sample) -> &mut i32 {
		&mut sample.level
	}

	fn sample_args() -> Vec<Arg<Sample>> {
		Vec::from([
			Arg::new("o", "output", "Output path", Slot::Str(output)),
			Arg::new("l", "level", "Verbosity level", Slot::Int(level)),
			Arg::new("v", "verbose", "Verbose output", Slot::Bool(verbose)),
		])
	}

	#[test]
	fn test_index_preserves_declaration_order() {
		let schema = Schema::new(sample_args()).unwrap();

		let keys: Vec<&str> = schema.args().iter().map(|arg| arg.key.as_str()).collect();

		assert_eq!(keys, Vec::from(["o", "l", "v"]));
	}

	#[test]
	fn test_rejects_duplicate_short_key() {
		let mut args = sample_args();
		args.push(Arg::new("o", "other", "Other output", Slot::Str(output)));

		let got = Schema::new(args);

		assert_eq!(got.err(), Some(Error::DuplicateKey(String::from("o"))));
	}

	#[test]
	fn test_rejects_duplicate_long_alias() {
		let mut args = sample_args();
		args.insert(0, Arg::new("x", "level", "Other level", Slot::Int(level)));

		let got = Schema::new(args);

		assert_eq!(got.err(), Some(Error::DuplicateName(String::from("level"))));
	}

	#[test]
	fn test_resolves_short_and_long_forms() {
		let schema = Schema::new(sample_args()).unwrap();

		assert_eq!(schema.resolve("-o"), Some(0));
		assert_eq!(schema.resolve("--output"), Some(0));
		assert_eq!(schema.resolve("-v"), Some(2));
		assert_eq!(schema.resolve("--verbose"), Some(2));
	}

	#[test]
	fn test_rejects_malformed_tokens() {
		let schema = Schema::new(sample_args()).unwrap();

		assert_eq!(schema.resolve("output"), None);
		assert_eq!(schema.resolve("-output"), None);
		assert_eq!(schema.resolve("--o"), None);
		assert_eq!(schema.resolve("-z"), None);
		assert_eq!(schema.resolve("--"), None);
		assert_eq!(schema.resolve("-"), None);
	}

	#[test]
	fn test_boolean_slots_take_no_value() {
		let schema = Schema::new(sample_args()).unwrap();

		let takes_value: Vec<bool> = schema
			.args()
			.iter()
			.map(|arg| arg.slot.takes_value())
			.collect();

		assert_eq!(takes_value, Vec::from([true, true, false]));
	}
}
