use crate::sql::statements::create::CreateStatement;
use crate::sql::statements::delete::DeleteStatement;
use crate::sql::statements::insert::InsertStatement;
use crate::sql::statements::relate::RelateStatement;
use crate::sql::statements::select::SelectStatement;
use crate::sql::statements::update::UpdateStatement;
use crate::sql::statements::upsert::UpsertStatement;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single parsed statement, ready for execution.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Statement {
	Select(SelectStatement),
	Create(CreateStatement),
	Update(UpdateStatement),
	Relate(RelateStatement),
	Delete(DeleteStatement),
	Insert(InsertStatement),
	Upsert(UpsertStatement),
}

impl From<SelectStatement> for Statement {
	fn from(v: SelectStatement) -> Self {
		Statement::Select(v)
	}
}

impl From<CreateStatement> for Statement {
	fn from(v: CreateStatement) -> Self {
		Statement::Create(v)
	}
}

impl From<UpdateStatement> for Statement {
	fn from(v: UpdateStatement) -> Self {
		Statement::Update(v)
	}
}

impl From<RelateStatement> for Statement {
	fn from(v: RelateStatement) -> Self {
		Statement::Relate(v)
	}
}

impl From<DeleteStatement> for Statement {
	fn from(v: DeleteStatement) -> Self {
		Statement::Delete(v)
	}
}

impl From<InsertStatement> for Statement {
	fn from(v: InsertStatement) -> Self {
		Statement::Insert(v)
	}
}

impl From<UpsertStatement> for Statement {
	fn from(v: UpsertStatement) -> Self {
		Statement::Upsert(v)
	}
}

impl fmt::Display for Statement {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Statement::Select(v) => write!(f, "{v}"),
			Statement::Create(v) => write!(f, "{v}"),
			Statement::Update(v) => write!(f, "{v}"),
			Statement::Relate(v) => write!(f, "{v}"),
			Statement::Delete(v) => write!(f, "{v}"),
			Statement::Insert(v) => write!(f, "{v}"),
			Statement::Upsert(v) => write!(f, "{v}"),
		}
	}
}
