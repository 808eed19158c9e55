use crate::err::Error;
use crate::sql::cond::Cond;
use crate::sql::data::Data;
use crate::sql::field::Fields;
use crate::sql::group::Groups;
use crate::sql::limit::Limit;
use crate::sql::order::Orders;
use crate::sql::split::Splits;
use crate::sql::start::Start;
use crate::sql::statements::create::CreateStatement;
use crate::sql::statements::delete::DeleteStatement;
use crate::sql::statements::insert::InsertStatement;
use crate::sql::statements::relate::RelateStatement;
use crate::sql::statements::select::SelectStatement;
use crate::sql::statements::update::UpdateStatement;
use crate::sql::statements::upsert::UpsertStatement;
use crate::sql::value::Value;
use crate::sql::version::Version;
use std::fmt;
use std::sync::Arc;

/// A statement being processed, wrapping the parsed AST and projecting the
/// clauses which the iterator consults.
#[derive(Clone, Debug)]
pub(crate) enum Statement {
	Select(Arc<SelectStatement>),
	Create(Arc<CreateStatement>),
	Update(Arc<UpdateStatement>),
	Relate(Arc<RelateStatement>),
	Delete(Arc<DeleteStatement>),
	Insert(Arc<InsertStatement>),
	Upsert(Arc<UpsertStatement>),
}

impl From<crate::sql::Statement> for Statement {
	fn from(v: crate::sql::Statement) -> Self {
		match v {
			crate::sql::Statement::Select(v) => Statement::Select(Arc::new(v)),
			crate::sql::Statement::Create(v) => Statement::Create(Arc::new(v)),
			crate::sql::Statement::Update(v) => Statement::Update(Arc::new(v)),
			crate::sql::Statement::Relate(v) => Statement::Relate(Arc::new(v)),
			crate::sql::Statement::Delete(v) => Statement::Delete(Arc::new(v)),
			crate::sql::Statement::Insert(v) => Statement::Insert(Arc::new(v)),
			crate::sql::Statement::Upsert(v) => Statement::Upsert(Arc::new(v)),
		}
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

impl Statement {
	/// Check if this statement is a SELECT statement
	#[inline]
	pub fn is_select(&self) -> bool {
		matches!(self, Statement::Select(_))
	}
	/// Check if this statement modifies any records
	#[inline]
	pub fn writeable(&self) -> bool {
		!matches!(self, Statement::Select(_))
	}
	/// Returns any query fields if specified
	#[inline]
	pub fn expr(&self) -> Option<&Fields> {
		match self {
			Statement::Select(v) => Some(&v.expr),
			_ => None,
		}
	}
	/// Returns any SET, CONTENT, or MERGE clause if specified
	#[inline]
	pub fn data(&self) -> Option<&Data> {
		match self {
			Statement::Create(v) => v.data.as_ref(),
			Statement::Update(v) => v.data.as_ref(),
			Statement::Relate(v) => v.data.as_ref(),
			_ => None,
		}
	}
	/// Returns any WHERE clause if specified
	#[inline]
	pub fn conds(&self) -> Option<&Cond> {
		match self {
			Statement::Select(v) => v.cond.as_ref(),
			Statement::Update(v) => v.cond.as_ref(),
			Statement::Delete(v) => v.cond.as_ref(),
			_ => None,
		}
	}
	/// Returns any SPLIT clause if specified
	#[inline]
	pub fn split(&self) -> Option<&Splits> {
		match self {
			Statement::Select(v) => v.split.as_ref(),
			_ => None,
		}
	}
	/// Returns any GROUP clause if specified
	#[inline]
	pub fn group(&self) -> Option<&Groups> {
		match self {
			Statement::Select(v) => v.group.as_ref(),
			_ => None,
		}
	}
	/// Returns any ORDER clause if specified
	#[inline]
	pub fn order(&self) -> Option<&Orders> {
		match self {
			Statement::Select(v) => v.order.as_ref(),
			_ => None,
		}
	}
	/// Returns any START clause if specified
	#[inline]
	pub fn start(&self) -> Option<&Start> {
		match self {
			Statement::Select(v) => v.start.as_ref(),
			_ => None,
		}
	}
	/// Returns any LIMIT clause if specified
	#[inline]
	pub fn limit(&self) -> Option<&Limit> {
		match self {
			Statement::Select(v) => v.limit.as_ref(),
			_ => None,
		}
	}
	/// Returns any VERSION clause if specified
	#[inline]
	pub fn version(&self) -> Option<&Version> {
		match self {
			Statement::Select(v) => v.version.as_ref(),
			_ => None,
		}
	}
	/// The error raised when a source value can not be processed by this
	/// statement kind. Only writeable statements reject source values, so
	/// this is never reached for a SELECT.
	pub fn invalid_value(&self, v: &Value) -> Error {
		let value = v.to_string();
		match self {
			Statement::Select(_) => unreachable!(),
			Statement::Create(_) => Error::CreateStatement {
				value,
			},
			Statement::Update(_) => Error::UpdateStatement {
				value,
			},
			Statement::Relate(_) => Error::RelateStatement {
				value,
			},
			Statement::Delete(_) => Error::DeleteStatement {
				value,
			},
			Statement::Insert(_) => Error::InsertStatement {
				value,
			},
			Statement::Upsert(_) => Error::UpsertStatement {
				value,
			},
		}
	}
}
