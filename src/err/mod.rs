use serde::Serialize;
use storekey::decode::Error as DecodeError;
use storekey::encode::Error as EncodeError;
use thiserror::Error;

/// An error originating from the opaldb database library.
#[derive(Error, Debug)]
pub enum Error {
	/// This error is used for ignoring a document when processing a query
	#[doc(hidden)]
	#[error("Conditional clause is not truthy")]
	Ignore,

	/// The transaction was already cancelled or committed
	#[error("Couldn't update a finished transaction")]
	TxFinished,

	/// The current transaction was created as read-only
	#[error("Couldn't write to a read only transaction")]
	TxReadonly,

	/// The key being inserted in the transaction already exists
	#[error("The key being inserted already exists")]
	TxKeyAlreadyExists,

	/// No namespace has been selected
	#[error("Specify a namespace to use")]
	NsEmpty,

	/// No database has been selected
	#[error("Specify a database to use")]
	DbEmpty,

	/// The query did not execute, because the transaction was cancelled
	#[error("The query was not executed due to a cancelled transaction")]
	QueryCancelled,

	/// The LIMIT clause must evaluate to a positive integer
	#[error("Found {value} but the LIMIT clause must evaluate to a positive integer")]
	InvalidLimit {
		value: String,
	},

	/// The START clause must evaluate to a positive integer
	#[error("Found {value} but the START clause must evaluate to a positive integer")]
	InvalidStart {
		value: String,
	},

	/// The VERSION clause must evaluate to a positive integer
	#[error("Found {value} but the VERSION clause must evaluate to a positive integer")]
	InvalidVersion {
		value: String,
	},

	/// The record generator model was specified with an unusable step
	#[error("Found {value} but the model step must move towards the end of the range")]
	InvalidModel {
		value: String,
	},

	/// The requested namespace does not exist
	#[error("The namespace does not exist")]
	NsNotFound,

	/// The requested database does not exist
	#[error("The database does not exist")]
	DbNotFound,

	/// The requested table does not exist
	#[error("The table does not exist")]
	TbNotFound,

	/// Can not execute CREATE query using the specified value
	#[error("Can not execute CREATE query using value '{value}'")]
	CreateStatement {
		value: String,
	},

	/// Can not execute UPDATE query using the specified value
	#[error("Can not execute UPDATE query using value '{value}'")]
	UpdateStatement {
		value: String,
	},

	/// Can not execute RELATE query using the specified value
	#[error("Can not execute RELATE query using value '{value}'")]
	RelateStatement {
		value: String,
	},

	/// Can not execute DELETE query using the specified value
	#[error("Can not execute DELETE query using value '{value}'")]
	DeleteStatement {
		value: String,
	},

	/// Can not execute INSERT query using the specified value
	#[error("Can not execute INSERT query using value '{value}'")]
	InsertStatement {
		value: String,
	},

	/// Can not execute UPSERT query using the specified value
	#[error("Can not execute UPSERT query using value '{value}'")]
	UpsertStatement {
		value: String,
	},

	/// The specified function does not exist
	#[error("The function '{name}' does not exist")]
	InvalidFunction {
		name: String,
	},

	/// The permissions do not allow this query to be run on this table
	#[error("You don't have permission to run this query on the `{table}` table")]
	TablePermissions {
		table: String,
	},

	/// The specified table can not be written as it is setup as a foreign table view
	#[error("Unable to write to the `{table}` table while setup as a view")]
	TableIsView {
		table: String,
	},

	/// Found a record id for the record but this is not a valid id
	#[error("Found '{value}' for the record ID but this is not a valid id")]
	IdInvalid {
		value: String,
	},

	/// Represents an underlying error with msgpack encoding / decoding
	#[error("Serde error: {0}")]
	Serde(String),

	/// Represents an error when encoding a key-value entry
	#[error("Key encoding error: {0}")]
	Encode(#[from] EncodeError),

	/// Represents an error when decoding a key-value entry
	#[error("Key decoding error: {0}")]
	Decode(#[from] DecodeError),
}

impl From<Error> for String {
	fn from(e: Error) -> String {
		e.to_string()
	}
}

impl From<msgpack::encode::Error> for Error {
	fn from(e: msgpack::encode::Error) -> Error {
		Error::Serde(e.to_string())
	}
}

impl From<msgpack::decode::Error> for Error {
	fn from(e: msgpack::decode::Error) -> Error {
		Error::Serde(e.to_string())
	}
}

impl Serialize for Error {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(self.to_string().as_str())
	}
}
