use crate::err::Error;
use crate::sql::id::Id;
use serde::{Deserialize, Serialize};
use storekey::{deserialize, serialize};

#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Thing {
	__: char,
	_a: char,
	pub ns: String,
	_b: char,
	pub db: String,
	_c: char,
	pub tb: String,
	_d: char,
	pub id: Id,
}

pub fn new(ns: &str, db: &str, tb: &str, id: &Id) -> Thing {
	Thing::new(ns.to_string(), db.to_string(), tb.to_string(), id.clone())
}

/// The lower bound of the record range for a table
pub fn prefix(ns: &str, db: &str, tb: &str) -> Result<Vec<u8>, Error> {
	let mut k = serialize(&Space::new(ns, db, tb))?;
	k.extend_from_slice(&[0x00]);
	Ok(k)
}

/// The upper bound of the record range for a table
pub fn suffix(ns: &str, db: &str, tb: &str) -> Result<Vec<u8>, Error> {
	let mut k = serialize(&Space::new(ns, db, tb))?;
	k.extend_from_slice(&[0xff]);
	Ok(k)
}

impl Thing {
	pub fn new(ns: String, db: String, tb: String, id: Id) -> Thing {
		Thing {
			__: '/',
			_a: '*',
			ns,
			_b: '*',
			db,
			_c: '*',
			tb,
			_d: '*',
			id,
		}
	}
	pub fn encode(&self) -> Result<Vec<u8>, Error> {
		Ok(serialize(self)?)
	}
	pub fn decode(v: &[u8]) -> Result<Thing, Error> {
		Ok(deserialize(v)?)
	}
}

/// The shared key prefix of all records within a table
#[derive(Serialize)]
struct Space {
	__: char,
	_a: char,
	ns: String,
	_b: char,
	db: String,
	_c: char,
	tb: String,
	_d: char,
}

impl Space {
	fn new(ns: &str, db: &str, tb: &str) -> Space {
		Space {
			__: '/',
			_a: '*',
			ns: ns.to_string(),
			_b: '*',
			db: db.to_string(),
			_c: '*',
			tb: tb.to_string(),
			_d: '*',
		}
	}
}

#[cfg(test)]
mod tests {

	use super::*;

	#[test]
	fn key() {
		let val = Thing::new(
			"test".to_string(),
			"test".to_string(),
			"test".to_string(),
			Id::from("test"),
		);
		let enc = Thing::encode(&val).unwrap();
		let dec = Thing::decode(&enc).unwrap();
		assert_eq!(val, dec);
	}

	#[test]
	fn range() {
		// Every record key for a table falls between the scan bounds
		let min = prefix("test", "test", "test").unwrap();
		let max = suffix("test", "test", "test").unwrap();
		for id in [Id::from("aaa"), Id::from("zzz"), Id::from(1), Id::from(9999)] {
			let key = new("test", "test", "test", &id).encode().unwrap();
			assert!(min < key, "{id:?}");
			assert!(key < max, "{id:?}");
		}
		// Records for other tables fall outside of the scan bounds
		let key = new("test", "test", "aaaa", &Id::from("x")).encode().unwrap();
		assert!(key < min);
		let key = new("test", "test", "zzzz", &Id::from("x")).encode().unwrap();
		assert!(key > max);
	}
}
