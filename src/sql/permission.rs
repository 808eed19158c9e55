use crate::sql::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The permission configuration of a table. Only the `Specific` form
/// carries per-operation policy expressions; the `None` and `Full` forms
/// are opaque, and are rejected outright for scoped authentication.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Perms {
	None,
	Full,
	Specific(Permissions),
}

impl Default for Perms {
	fn default() -> Self {
		Self::Full
	}
}

impl fmt::Display for Perms {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::None => write!(f, "PERMISSIONS NONE"),
			Self::Full => write!(f, "PERMISSIONS FULL"),
			Self::Specific(v) => write!(f, "PERMISSIONS {v}"),
		}
	}
}

/// Per-operation permission policy expressions, each evaluated without a
/// document context when gating a statement.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Permissions {
	pub select: Value,
	pub create: Value,
	pub update: Value,
	pub delete: Value,
}

impl Default for Permissions {
	fn default() -> Self {
		Self {
			select: Value::Bool(true),
			create: Value::Bool(true),
			update: Value::Bool(true),
			delete: Value::Bool(true),
		}
	}
}

impl fmt::Display for Permissions {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(
			f,
			"FOR select {} FOR create {} FOR update {} FOR delete {}",
			self.select, self.create, self.update, self.delete
		)
	}
}
