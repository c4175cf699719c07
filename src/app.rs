/// Metadata describing the embedding application, rendered by the info
/// and usage formatters. All fields default to empty and empty fields
/// are omitted from output.
#[derive(Debug, Default, PartialEq)]
pub struct App {
	pub name: String,
	pub version: String,
	pub author: String,
	pub copyright: String,
	pub description: String,
}

impl App {
	/// Returns the application name, or a fallback identifier when unset.
	pub fn title(&self) -> &str {
		if self.name.is_empty() {
			"app"
		} else {
			&self.name
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn test_title_falls_back_when_name_is_empty() {
		let app = App::default();

		assert_eq!(app.title(), "app");

		let app = App {
			name: String::from("login"),
			..App::default()
		};

		assert_eq!(app.title(), "login");
	}
}
