use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::app::App;

/// Renders the application banner: title, version, author, copyright,
/// then a description. Empty fields are omitted.
pub struct Info<'a> {
	pub app: &'a App,
}

impl<'a> Display for Info<'a> {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		let app = self.app;

		writeln!(f, "{}", app.title())?;

		if !app.version.is_empty() {
			writeln!(f, "Version {}", app.version)?;
		}

		if !app.author.is_empty() {
			writeln!(f, "By {}", app.author)?;
		}

		if !app.copyright.is_empty() {
			writeln!(f, "{}", app.copyright)?;
		}

		writeln!(f)?;

		if !app.description.is_empty() {
			writeln!(f, "Description: {}", app.description)?;
		}

		Ok(())
	}
}
