//! Binds command-line tokens to a statically declared configuration,
//! driven by per-flag descriptors, and renders the matching usage and
//! info text.

pub mod app;
pub mod binder;
pub mod info;
pub mod schema;
pub mod usage;

pub use app::App;
pub use info::Info;
pub use schema::{Arg, Schema, Slot, Value};
pub use usage::Usage;
