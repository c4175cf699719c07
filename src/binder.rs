use thiserror::Error;

use crate::schema::{Schema, Slot, Value};

#[derive(Debug, Error, PartialEq)]
pub enum Error {
	#[error("unknown argument {0:?}")]
	UnknownArgument(String),
	#[error("flag -{0} expects a value")]
	MissingValue(String),
	#[error("invalid value {1:?} for flag -{0}, expected {2}")]
	InvalidValue(String, String, &'static str),
	#[error("value {1:?} for flag -{0} failed its check")]
	FailedCheck(String, Value),
	#[error("missing required flags: {}", .0.join(", "))]
	MissingRequired(Vec<String>),
}

impl<C> Schema<C> {
	/// Walks the token sequence left to right, filling the
	/// configuration's slots. Boolean flags toggle their current value;
	/// every other flag consumes exactly one following token. The first
	/// error encountered is returned; slots written before the failing
	/// token keep their values.
	pub fn bind(&self, config: &mut C, tokens: &[String]) -> Result<(), Error> {
		let mut satisfied = vec![false; self.args().len()];

		let mut tokens = tokens.iter();
		while let Some(token) = tokens.next() {
			let idx = self
				.resolve(token)
				.ok_or_else(|| Error::UnknownArgument(token.clone()))?;
			let arg = &self.args()[idx];

			if let Slot::Bool(slot) = &arg.slot {
				let field = slot(config);
				*field = !*field;
			} else {
				let raw = tokens
					.next()
					.ok_or_else(|| Error::MissingValue(arg.key.clone()))?;
				let value = arg.slot.coerce(raw).ok_or_else(|| {
					Error::InvalidValue(arg.key.clone(), raw.clone(), arg.slot.type_name())
				})?;

				if let Some(check) = arg.check {
					if !check(&value) {
						return Err(Error::FailedCheck(arg.key.clone(), value));
					}
				}

				arg.slot.store(config, value);
			}

			satisfied[idx] = true;
		}

		let missing: Vec<String> = self
			.args()
			.iter()
			.enumerate()
			.filter(|(idx, arg)| arg.required && !satisfied[*idx])
			.map(|(_, arg)| format!("-{}", arg.key))
			.collect();

		if !missing.is_empty() {
			return Err(Error::MissingRequired(missing));
		}

		Ok(())
	}
}
