use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{app::App, schema::Schema};

const VALUE: &str = "<value>";

/// Renders the synopsis line and the aligned options table for a schema.
pub struct Usage<'a, C> {
	pub schema: &'a Schema<C>,
	pub app: &'a App,
}

impl<'a, C> Display for Usage<'a, C> {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		let args = self.schema.args();

		write!(f, "Usage: {}", self.app.title())?;

		for arg in args.iter().filter(|arg| arg.required) {
			if arg.slot.takes_value() {
				write!(f, " -{} {}", arg.key, VALUE)?;
			} else {
				write!(f, " -{}", arg.key)?;
			}
		}

		if args.is_empty() {
			return writeln!(f);
		}

		writeln!(f, " [-options]")?;
		writeln!(f, "options:")?;

		let max = args
			.iter()
			.map(|arg| arg.key.len() + arg.name.len())
			.max()
			.unwrap_or(0);

		for arg in args {
			write!(f, "-{} or --{}", arg.key, arg.name)?;

			let mut pad = max - (arg.key.len() + arg.name.len()) + 2;

			if arg.slot.takes_value() {
				write!(f, " {} ", VALUE)?;
			} else {
				// Boolean rows reserve the placeholder width they don't print.
				pad += VALUE.len() + 2;
			}

			writeln!(f, "{:pad$}{}", "", arg.description)?;
		}

		Ok(())
	}
}
