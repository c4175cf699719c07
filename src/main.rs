use std::{
	env,
	io::{self, Write},
	process::ExitCode,
};

use ansi_term::Colour;
use anyhow::{Context, Result};

use argbind::{App, Arg, Info, Schema, Slot, Usage, Value};

pub struct Env {
	pub colored: bool,
}

#[derive(Debug, Default, PartialEq)]
struct Login {
	username: String,
	password: String,
	name: String,
	print: bool,
}

fn username(login: &mut Login) -> &mut String {
	&mut login.username
}

fn password(login: &mut Login) -> &mut String {
	&mut login.password
}

fn name(login: &mut Login) -> &mut String {
	&mut login.name
}

fn print(login: &mut Login) -> &mut bool {
	&mut login.print
}

fn schema() -> Result<Schema<Login>> {
	Schema::new(Vec::from([
		Arg::new("u", "username", "Your username", Slot::Str(username)).required(),
		Arg::new("p", "password", "Your password (>7)", Slot::Str(password))
			.required()
			.check(|value| matches!(value, Value::Str(password) if password.len() > 8)),
		Arg::new("n", "name", "Your name", Slot::Str(name)),
		Arg::new("s", "print", "False to run silent", Slot::Bool(print)),
	]))
	.with_context(|| "could not build login schema")
}

fn app() -> App {
	App {
		name: String::from("login"),
		version: String::from("0.1"),
		author: String::from("The Example Authors"),
		copyright: String::from("Copyright © 2026 The Example Authors"),
		description: String::from("Sample application demonstrating declarative flag binding."),
	}
}

/// Runs one binding pass over the given tokens. Returns the process
/// exit status; printing info and usage text on failure happens here,
/// not in the binding engine.
fn run<W>(env: Env, tokens: &[String], mut stdout: W) -> Result<u8>
where
	W: Write,
{
	let schema = schema()?;
	let app = app();

	let mut login = Login {
		name: String::from("No name"),
		print: true,
		..Login::default()
	};

	if let Err(err) = schema.bind(&mut login, tokens) {
		let message = err.to_string();
		let message = if env.colored {
			Colour::Red.paint(message).to_string()
		} else {
			message
		};

		writeln!(stdout, "{}", message)?;
		writeln!(stdout)?;
		write!(stdout, "{}", Info { app: &app })?;
		writeln!(stdout)?;
		write!(
			stdout,
			"{}",
			Usage {
				schema: &schema,
				app: &app,
			}
		)?;

		return Ok(1);
	}

	if login.print {
		writeln!(stdout, "Your bound parameters: {:?}", login)?;
	}

	Ok(0)
}

fn main() -> Result<ExitCode> {
	let tokens: Vec<String> = env::args().skip(1).collect();

	let stdout = io::stdout();
	let handle = stdout.lock();

	let code = run(
		Env {
			colored: env::var_os("NO_COLOR").is_none(),
		},
		&tokens,
		handle,
	)?;

	Ok(ExitCode::from(code))
}
