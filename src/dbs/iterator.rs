use crate::cnf::SCAN_PAGE_SIZE;
use crate::ctx::Canceller;
use crate::ctx::Context;
use crate::dbs::Options;
use crate::dbs::Statement;
use crate::dbs::Transaction;
use crate::dbs::LOG;
use crate::doc::Document;
use crate::err::Error;
use crate::fnc;
use crate::key;
use crate::kvs::Val;
use crate::sql::array::Array;
use crate::sql::batch::Batch;
use crate::sql::field::Field;
use crate::sql::id::Id;
use crate::sql::model::Model;
use crate::sql::permission::Perms;
use crate::sql::table::Table;
use crate::sql::thing::Thing;
use crate::sql::value::Value;
use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::mem;

/// A prepared source of records for an iteration.
pub(crate) enum Iterable {
	/// A single record
	Thing(Thing),
	/// A full table range scan
	Table(Table),
	/// An explicit batch of record ids
	Batch(Batch),
	/// A generated sequence of records
	Model(Model),
	/// An inline array of new record contents, with its target table
	Array(String, Array),
	/// A consumed subquery result feeding a read
	Query(Array),
	/// A consumed subquery result feeding a write
	Other(Array),
}

/// A record wrapped for sorting, carrying its lazily extracted and
/// memoized ordering keys.
struct Orderable {
	doc: Value,
	ats: RefCell<Vec<Value>>,
}

/// The Iterator processes a single statement: it drains each prepared
/// source through the per-record document processor into the result
/// buffer, stopping early where the statement allows it, and then applies
/// the SPLIT, GROUP, ORDER, START, and LIMIT stages to the buffer.
#[derive(Default)]
pub(crate) struct Iterator {
	// Iterator status
	run: Canceller,
	// Executing on behalf of a view refresh?
	virt: bool,
	// Iterator limit value
	limit: Option<usize>,
	// Iterator start value
	start: Option<usize>,
	// Iterator version value
	version: u64,
	// Iterator runtime error
	error: Option<Error>,
	// Iterator output results
	results: Vec<Value>,
	// Iterator input values
	entries: Vec<Iterable>,
}

impl Iterator {
	/// Creates a new iterator
	pub fn new(virt: bool) -> Self {
		Iterator {
			virt,
			version: u64::MAX,
			..Default::default()
		}
	}

	/// Prepares a value for processing
	pub fn ingest(&mut self, val: Iterable) {
		self.entries.push(val)
	}

	/// Process the records and output
	pub async fn output(
		&mut self,
		ctx: &Context<'_>,
		opt: &Options,
		txn: &Transaction,
		stm: &Statement,
	) -> Result<Value, Error> {
		// Log the statement
		trace!(target: LOG, "Iterating: {}", stm);
		// Enable context override
		let mut run = Context::new(ctx);
		self.run = run.add_cancel();
		// Process the query LIMIT clause
		self.setup_limit(stm)?;
		// Process the query START clause
		self.setup_start(stm)?;
		// Process the query VERSION clause
		self.setup_version(stm)?;
		// Process prepared values
		self.iterate(&run, opt, txn, stm).await?;
		// Return any document errors
		if let Some(e) = self.error.take() {
			return Err(e);
		}
		// Process any SPLIT clause
		self.output_split(stm);
		// Process any GROUP clause
		self.output_group(stm);
		// Process any ORDER clause
		self.output_order(stm);
		// Process any START clause
		self.output_start(stm);
		// Process any LIMIT clause
		self.output_limit(stm);
		// Output the results
		Ok(mem::take(&mut self.results).into())
	}

	#[inline]
	fn setup_limit(&mut self, stm: &Statement) -> Result<(), Error> {
		if let Some(v) = stm.limit() {
			self.limit = Some(v.process()?);
		}
		Ok(())
	}

	#[inline]
	fn setup_start(&mut self, stm: &Statement) -> Result<(), Error> {
		if let Some(v) = stm.start() {
			self.start = Some(v.process()?);
		}
		Ok(())
	}

	#[inline]
	fn setup_version(&mut self, stm: &Statement) -> Result<(), Error> {
		if let Some(v) = stm.version() {
			self.version = v.process()?;
		}
		Ok(())
	}

	/// Check if iteration may proceed. Returns false once the caller's
	/// context is done or the iterator has been stopped.
	#[inline]
	fn check(&self, ctx: &Context<'_>) -> bool {
		ctx.is_ok()
	}

	/// Drain all of the prepared sources in order
	async fn iterate(
		&mut self,
		ctx: &Context<'_>,
		opt: &Options,
		txn: &Transaction,
		stm: &Statement,
	) -> Result<(), Error> {
		for v in mem::take(&mut self.entries) {
			match v {
				Iterable::Thing(v) => self.process_thing(ctx, opt, txn, stm, v).await?,
				Iterable::Table(v) => self.process_table(ctx, opt, txn, stm, v).await?,
				Iterable::Batch(v) => self.process_batch(ctx, opt, txn, stm, v).await?,
				Iterable::Model(v) => self.process_model(ctx, opt, txn, stm, v).await?,
				Iterable::Array(t, v) => self.process_array(ctx, opt, txn, stm, t, v).await?,
				Iterable::Query(v) => self.process_query(ctx, opt, txn, stm, v).await?,
				Iterable::Other(v) => self.process_other(ctx, opt, txn, stm, v).await?,
			}
		}
		Ok(())
	}

	/// Check the permissions configured for the specified table against
	/// the current authentication, and ensure that the table is not being
	/// written to while setup as a view
	async fn process_perms(
		&mut self,
		_ctx: &Context<'_>,
		opt: &Options,
		txn: &Transaction,
		stm: &Statement,
		tb: &str,
	) -> Result<(), Error> {
		// If we are authenticated at the KV, NS, or DB level, then we can
		// ignore all table permissions checks
		if !opt.auth.perms() {
			// Subqueries have no table to check
			if tb.is_empty() {
				return Ok(());
			}
			// Reads never need to fetch the table
			if stm.is_select() {
				return Ok(());
			}
			// Writes ensure the table exists, so that we can check whether
			// it has been setup as a view
			let tb = txn.lock().await.add_tb(opt.ns(), opt.db(), tb).await?;
			if tb.lock && !self.virt && stm.writeable() {
				return Err(Error::TableIsView {
					table: tb.name,
				});
			}
			return Ok(());
		}
		// Subqueries have no table to check
		if tb.is_empty() {
			return Ok(());
		}
		// Scoped authentication requires the namespace to exist
		txn.lock().await.get_ns(opt.ns()).await?;
		// Scoped authentication requires the database to exist
		txn.lock().await.get_db(opt.ns(), opt.db()).await?;
		// Scoped authentication requires the table to exist
		let tb = txn.lock().await.get_tb(opt.ns(), opt.db(), tb).await?;
		// Ensure the table is not being written to while setup as a view
		if tb.lock && !self.virt && stm.writeable() {
			return Err(Error::TableIsView {
				table: tb.name,
			});
		}
		// Process the relevant permissions expression, which must be a
		// structured policy. The policy is evaluated without a document
		// context, so document fields can not be referenced in the gate.
		match &tb.perms {
			Perms::Specific(p) => {
				let expr = match stm {
					Statement::Select(_) => &p.select,
					Statement::Create(_) => &p.create,
					Statement::Insert(_) => &p.create,
					Statement::Relate(_) => &p.create,
					Statement::Update(_) => &p.update,
					Statement::Upsert(_) => &p.update,
					Statement::Delete(_) => &p.delete,
				};
				match expr.compute(None)?.is_truthy() {
					true => Ok(()),
					false => Err(Error::TablePermissions {
						table: tb.name,
					}),
				}
			}
			_ => Err(Error::TablePermissions {
				table: tb.name,
			}),
		}
	}

	/// Process a single record
	async fn process_thing(
		&mut self,
		ctx: &Context<'_>,
		opt: &Options,
		txn: &Transaction,
		stm: &Statement,
		v: Thing,
	) -> Result<(), Error> {
		self.process_perms(ctx, opt, txn, stm, &v.tb).await?;
		if self.check(ctx) {
			self.process(ctx, opt, txn, stm, Some(v), None, None).await;
		}
		Ok(())
	}

	/// Process a full table range scan, one page at a time
	async fn process_table(
		&mut self,
		ctx: &Context<'_>,
		opt: &Options,
		txn: &Transaction,
		stm: &Statement,
		v: Table,
	) -> Result<(), Error> {
		self.process_perms(ctx, opt, txn, stm, &v).await?;
		// Compute the table scan bounds
		let mut min = key::thing::prefix(opt.ns(), opt.db(), &v)?;
		let max = key::thing::suffix(opt.ns(), opt.db(), &v)?;
		loop {
			// Check if the iteration has been stopped
			if !self.check(ctx) {
				break;
			}
			// Fetch the next page of records at the iteration version
			let res = txn
				.lock()
				.await
				.getr(self.version, min.clone()..max.clone(), SCAN_PAGE_SIZE)
				.await?;
			// An empty page means the range is exhausted
			if res.is_empty() {
				break;
			}
			// Remember the last key, so that the next page can start
			// immediately after it
			let num = res.len();
			let last = res.last().map(|(k, _)| k.clone()).unwrap_or_default();
			// Process all of the records in this page
			for (k, v) in res {
				if self.check(ctx) {
					let k = key::thing::Thing::decode(&k)?;
					let t = Thing::from((k.tb, k.id));
					self.process(ctx, opt, txn, stm, Some(t), Some(v), None).await;
				}
			}
			// A short page means the range is exhausted
			if num < SCAN_PAGE_SIZE as usize {
				break;
			}
			// Continue the scan strictly after the last retrieved key
			min = last;
			min.push(0x00);
		}
		Ok(())
	}

	/// Process an explicit batch of record ids
	async fn process_batch(
		&mut self,
		ctx: &Context<'_>,
		opt: &Options,
		txn: &Transaction,
		stm: &Statement,
		v: Batch,
	) -> Result<(), Error> {
		self.process_perms(ctx, opt, txn, stm, &v.tb).await?;
		for t in v.ba {
			if !self.check(ctx) {
				break;
			}
			self.process(ctx, opt, txn, stm, Some(t), None, None).await;
		}
		Ok(())
	}

	/// Process a generated sequence of records
	async fn process_model(
		&mut self,
		ctx: &Context<'_>,
		opt: &Options,
		txn: &Transaction,
		stm: &Statement,
		v: Model,
	) -> Result<(), Error> {
		self.process_perms(ctx, opt, txn, stm, v.tb()).await?;
		match v {
			Model::Count(tb, c) => {
				// Generate a unique id for each record
				for _ in 0..c {
					if !self.check(ctx) {
						break;
					}
					let t = Thing {
						tb: tb.clone(),
						id: Id::rand(),
					};
					self.process(ctx, opt, txn, stm, Some(t), None, None).await;
				}
			}
			Model::Range(ref tb, min, max, inc) => {
				// The step must move towards the end of the range
				if !inc.is_positive() {
					return Err(Error::InvalidModel {
						value: v.to_string(),
					});
				}
				// Each id is rounded to the decimal places of the step, so
				// that repeated addition doesn't accumulate float drift
				let dec = inc.places();
				let mut num = min;
				loop {
					if min <= max && num > max {
						break;
					}
					if min > max && num < max {
						break;
					}
					if !self.check(ctx) {
						break;
					}
					let t = Thing {
						tb: tb.clone(),
						id: Id::Number(num),
					};
					self.process(ctx, opt, txn, stm, Some(t), None, None).await;
					num = match min <= max {
						true => (num + inc).fixed(dec),
						false => (num - inc).fixed(dec),
					};
				}
			}
		}
		Ok(())
	}

	/// Process an inline array of new record contents
	async fn process_array(
		&mut self,
		ctx: &Context<'_>,
		opt: &Options,
		txn: &Transaction,
		stm: &Statement,
		tb: String,
		v: Array,
	) -> Result<(), Error> {
		self.process_perms(ctx, opt, txn, stm, &tb).await?;
		for v in v {
			if !self.check(ctx) {
				break;
			}
			match v {
				Value::Thing(v) => {
					// A record reference contributes its id only
					let t = Thing {
						tb: tb.clone(),
						id: v.id,
					};
					self.process(ctx, opt, txn, stm, Some(t), None, None).await;
				}
				Value::Object(o) => {
					let t = match o.get("id").cloned() {
						// A record id gives the new record its id
						Some(Value::Thing(v)) => Thing {
							tb: tb.clone(),
							id: v.id,
						},
						// A string id which parses as a record id literal
						// overrides the target table, and otherwise the
						// raw string is used as the id
						Some(Value::Strand(s)) => match Thing::try_from(s.as_str()) {
							Ok(t) => t,
							Err(_) => Thing {
								tb: tb.clone(),
								id: Id::from(s),
							},
						},
						// Any other id value is used as the id directly
						Some(v) => Thing {
							tb: tb.clone(),
							id: Id::from(v),
						},
						// Without an id field a unique id is generated
						None => Thing {
							tb: tb.clone(),
							id: Id::rand(),
						},
					};
					self.process(ctx, opt, txn, stm, Some(t), None, Some(Value::Object(o))).await;
				}
				_ => break,
			}
		}
		Ok(())
	}

	/// Process a consumed subquery result feeding a read
	async fn process_query(
		&mut self,
		ctx: &Context<'_>,
		opt: &Options,
		txn: &Transaction,
		stm: &Statement,
		v: Array,
	) -> Result<(), Error> {
		self.process_perms(ctx, opt, txn, stm, "").await?;
		for v in v {
			if !self.check(ctx) {
				break;
			}
			match v {
				// A record reference is loaded and queried further
				Value::Thing(t) => {
					self.process(ctx, opt, txn, stm, Some(t), None, None).await;
				}
				// Any other value is processed as it is
				v => {
					self.process(ctx, opt, txn, stm, None, None, Some(v)).await;
				}
			}
		}
		Ok(())
	}

	/// Process a consumed subquery result feeding a write
	async fn process_other(
		&mut self,
		ctx: &Context<'_>,
		opt: &Options,
		txn: &Transaction,
		stm: &Statement,
		v: Array,
	) -> Result<(), Error> {
		self.process_perms(ctx, opt, txn, stm, "").await?;
		for v in v {
			if !self.check(ctx) {
				break;
			}
			match v {
				// A record reference identifies the target record
				Value::Thing(t) => {
					self.process(ctx, opt, txn, stm, Some(t), None, None).await;
				}
				Value::Object(o) => match o.get("id").cloned() {
					// A record id identifies the target record
					Some(Value::Thing(t)) => {
						self.process(ctx, opt, txn, stm, Some(t), None, Some(Value::Object(o)))
							.await;
					}
					// A string id must parse as a record id literal
					Some(Value::Strand(s)) => match Thing::try_from(s.as_str()) {
						Ok(t) => {
							self.process(ctx, opt, txn, stm, Some(t), None, Some(Value::Object(o)))
								.await;
						}
						Err(_) => return Err(stm.invalid_value(&Value::Object(o))),
					},
					// Any other id value can not identify a record
					Some(_) => return Err(stm.invalid_value(&Value::Object(o))),
					// A mapping without an id can not identify a record
					None => return Err(stm.invalid_value(&Value::Object(o))),
				},
				// Any other value can not identify a record
				v => return Err(stm.invalid_value(&v)),
			}
		}
		Ok(())
	}

	/// Process a single record through the document processor
	async fn process(
		&mut self,
		ctx: &Context<'_>,
		opt: &Options,
		txn: &Transaction,
		stm: &Statement,
		thg: Option<Thing>,
		val: Option<Val>,
		doc: Option<Value>,
	) {
		// Check current context
		if !self.check(ctx) {
			return;
		}
		// Process the document
		let res = Document::process(ctx, opt, txn, stm, self.version, thg, val, doc).await;
		// Process the result
		self.result(ctx, stm, res);
	}

	/// Accept a processed record result
	fn result(&mut self, ctx: &Context<'_>, stm: &Statement, res: Result<Value, Error>) {
		// Process the result
		match res {
			Err(Error::Ignore) => {
				return;
			}
			Err(e) => {
				// Record the first error only, and stop the iterator
				if self.check(ctx) {
					self.error = Some(e);
					self.run.cancel();
				}
				return;
			}
			Ok(Value::None) => {
				return;
			}
			Ok(v) => self.results.push(v),
		}
		// If the statement has a GROUP or ORDER clause, then all data must
		// be loaded from all sources before stopping the iterator, and
		// without a LIMIT there is nothing to stop at
		if stm.group().is_none() && stm.order().is_none() {
			if let Some(l) = self.limit {
				if self.results.len() == l + self.start.unwrap_or(0) {
					self.run.cancel()
				}
			}
		}
	}

	/// Explode the results on each of the SPLIT fields
	fn output_split(&mut self, stm: &Statement) {
		if let Some(splits) = stm.split() {
			// Loop over each split clause
			for split in splits.iter() {
				// Get the query result
				let res = mem::take(&mut self.results);
				// Loop over each value
				for obj in res {
					// Get the value at the path
					match obj.pick(split) {
						// The value is an array, so create a copy of the
						// object for each entry within the array
						Value::Array(v) => {
							for val in v {
								let mut obj = obj.clone();
								obj.put(split, val);
								self.results.push(obj);
							}
						}
						// The value is not an array, so set the value on
						// a single copy of the object
						val => {
							let mut obj = obj;
							obj.put(split, val);
							self.results.push(obj);
						}
					}
				}
			}
		}
	}

	/// Bucket the results by the GROUP fields, computing aggregates
	fn output_group(&mut self, stm: &Statement) {
		if let (Some(fields), Some(groups)) = (stm.expr(), stm.group()) {
			// Create the new grouped collection
			let mut grp: BTreeMap<Array, Vec<Value>> = BTreeMap::new();
			// Get the query result
			let res = mem::take(&mut self.results);
			// Loop over each value
			for obj in res {
				// Evaluate the group tuple for this record
				let mut arr = Array::with_capacity(groups.len());
				for group in groups.iter() {
					arr.push(group.compute(Some(&obj)).unwrap_or(Value::None));
				}
				// Add to grouped collection
				grp.entry(arr).or_default().push(obj);
			}
			// Loop over each grouped collection
			for (_, vals) in grp {
				// Create a new value
				let mut obj = Value::base();
				// Loop over each projected field
				for field in fields.iter() {
					let (expr, idiom) = match field {
						Field::All => continue,
						Field::Alone(v) => (v, v.to_idiom()),
						Field::Alias(v, i) => (v, i.clone()),
					};
					match expr {
						// This is an aggregate function, so collect the
						// values of its first argument from every record
						// in the bucket, and compute the aggregate
						Value::Function(f) if f.is_aggregate() => {
							let col = vals.iter().map(|v| v.pick(&idiom)).collect::<Array>();
							let mut args = Vec::with_capacity(f.args.len().max(1));
							args.push(Value::Array(col));
							for arg in f.args.iter().skip(1) {
								args.push(arg.compute(None).unwrap_or(Value::None));
							}
							// An aggregate failure produces an empty value
							// on the output, and doesn't abort the bucket
							let val = fnc::run(&f.name, args).unwrap_or(Value::None);
							obj.put(&idiom, val);
						}
						// This is a normal field, so include the first
						// record's value in the aggregated results
						_ => {
							let val = vals.first().map(|v| v.pick(&idiom)).unwrap_or(Value::None);
							obj.put(&idiom, val);
						}
					}
				}
				// Add the object to the results
				self.results.push(obj);
			}
		}
	}

	/// Sort the results by the ORDER keys
	fn output_order(&mut self, stm: &Statement) {
		if let Some(orders) = stm.order() {
			// Wrap the results so that each ordering key is extracted
			// lazily, and cached for subsequent comparisons
			let mut ord: Vec<Orderable> = mem::take(&mut self.results)
				.into_iter()
				.map(|doc| Orderable {
					doc,
					ats: RefCell::new(Vec::with_capacity(orders.len())),
				})
				.collect();
			// Sort the full result set
			ord.sort_by(|a, b| {
				// Loop over each order clause
				for (x, order) in orders.iter().enumerate() {
					// Extract this ordering key on first touch
					for v in [a, b] {
						let mut ats = v.ats.borrow_mut();
						if ats.len() <= x {
							ats.push(order.expr.compute(Some(&v.doc)).unwrap_or(Value::None));
						}
					}
					// Compare the cached keys
					let o = a.ats.borrow()[x].cmp(&b.ats.borrow()[x]);
					match o {
						Ordering::Equal => continue,
						// Reverse the ordering if DESC
						o => match order.direction {
							true => return o,
							false => return o.reverse(),
						},
					}
				}
				Ordering::Equal
			});
			// Unwrap the sorted records
			self.results = ord.into_iter().map(|v| v.doc).collect();
		}
	}

	/// Skip the first START results
	fn output_start(&mut self, _stm: &Statement) {
		if let Some(v) = self.start {
			self.results = mem::take(&mut self.results).into_iter().skip(v).collect();
		}
	}

	/// Truncate the results to the first LIMIT results
	fn output_limit(&mut self, _stm: &Statement) {
		if let Some(v) = self.limit {
			self.results = mem::take(&mut self.results).into_iter().take(v).collect();
		}
	}
}

#[cfg(test)]
mod tests {

	use super::*;
	use crate::sql::field::Fields;
	use crate::sql::function::Function;
	use crate::sql::group::{Group, Groups};
	use crate::sql::idiom::Idiom;
	use crate::sql::object::Object;
	use crate::sql::order::{Order, Orders};
	use crate::sql::split::{Split, Splits};
	use crate::sql::statements::select::SelectStatement;
	use crate::sql::value::Values;

	fn record(fields: Vec<(&str, Value)>) -> Value {
		let mut obj = Object::default();
		for (k, v) in fields {
			obj.insert(k.to_owned(), v);
		}
		Value::Object(obj)
	}

	fn select(f: impl FnOnce(&mut SelectStatement)) -> Statement {
		let mut stm = SelectStatement {
			expr: Fields::all(),
			what: Values::default(),
			..Default::default()
		};
		f(&mut stm);
		Statement::from(crate::sql::Statement::Select(stm))
	}

	#[test]
	fn split_explodes_array_fields() {
		let stm = select(|s| {
			s.split = Some(Splits(vec![Split(Idiom::from("tags"))]));
		});
		let mut ite = Iterator::new(false);
		ite.results = vec![
			record(vec![
				("id", Value::from("a")),
				("tags", Value::from(vec![Value::from("x"), Value::from("y")])),
			]),
			record(vec![("id", Value::from("b")), ("tags", Value::from(vec![Value::from("z")]))]),
		];
		ite.output_split(&stm);
		assert_eq!(ite.results.len(), 3);
		let tags: Vec<Value> =
			ite.results.iter().map(|v| v.pick(&Idiom::from("tags"))).collect();
		assert_eq!(tags, vec![Value::from("x"), Value::from("y"), Value::from("z")]);
	}

	#[test]
	fn split_of_non_array_is_identity() {
		let stm = select(|s| {
			s.split = Some(Splits(vec![Split(Idiom::from("id"))]));
		});
		let mut ite = Iterator::new(false);
		ite.results = vec![record(vec![("id", Value::from("a"))])];
		ite.output_split(&stm);
		assert_eq!(ite.results, vec![record(vec![("id", Value::from("a"))])]);
	}

	#[test]
	fn group_buckets_and_counts() {
		let stm = select(|s| {
			s.expr = Fields(vec![
				Field::Alone(Value::field("age")),
				Field::Alias(
					Value::from(Function::new("count", vec![])),
					Idiom::from("count"),
				),
			]);
			s.group = Some(Groups(vec![Group::from(Idiom::from("age"))]));
		});
		let mut ite = Iterator::new(false);
		ite.results = vec![
			record(vec![("age", Value::from(20)), ("count", Value::None)]),
			record(vec![("age", Value::from(30)), ("count", Value::None)]),
			record(vec![("age", Value::from(20)), ("count", Value::None)]),
		];
		ite.output_group(&stm);
		assert_eq!(ite.results.len(), 2);
		let mut total = 0;
		for obj in &ite.results {
			if let Value::Number(n) = obj.pick(&Idiom::from("count")) {
				total += n.as_int();
			}
		}
		assert_eq!(total, 3);
	}

	#[test]
	fn order_sorts_with_direction() {
		let stm = select(|s| {
			s.order = Some(Orders(vec![Order::desc(Idiom::from("age"))]));
		});
		let mut ite = Iterator::new(false);
		for age in [10, 30, 20, 40] {
			ite.results.push(record(vec![("age", Value::from(age))]));
		}
		ite.output_order(&stm);
		let ages: Vec<Value> = ite.results.iter().map(|v| v.pick(&Idiom::from("age"))).collect();
		assert_eq!(ages, vec![Value::from(40), Value::from(30), Value::from(20), Value::from(10)]);
	}

	#[test]
	fn order_ties_break_on_later_keys() {
		let stm = select(|s| {
			s.order = Some(Orders(vec![
				Order::asc(Idiom::from("age")),
				Order::desc(Idiom::from("name")),
			]));
		});
		let mut ite = Iterator::new(false);
		for (age, name) in [(20, "a"), (10, "a"), (10, "b")] {
			ite.results.push(record(vec![("age", Value::from(age)), ("name", Value::from(name))]));
		}
		ite.output_order(&stm);
		let names: Vec<Value> = ite.results.iter().map(|v| v.pick(&Idiom::from("name"))).collect();
		assert_eq!(names, vec![Value::from("b"), Value::from("a"), Value::from("a")]);
	}

	#[test]
	fn empty_stages_are_identity() {
		// A statement without SPLIT, GROUP, or ORDER leaves results alone
		let stm = select(|_| ());
		let mut ite = Iterator::new(false);
		ite.results = vec![record(vec![("id", Value::from("a"))])];
		let before = ite.results.clone();
		ite.output_split(&stm);
		ite.output_group(&stm);
		ite.output_order(&stm);
		ite.output_start(&stm);
		ite.output_limit(&stm);
		assert_eq!(ite.results, before);
	}

	#[test]
	fn windowing_applies_start_then_limit() {
		let stm = select(|_| ());
		let mut ite = Iterator::new(false);
		ite.start = Some(1);
		ite.limit = Some(2);
		for age in [10, 20, 30, 40] {
			ite.results.push(record(vec![("age", Value::from(age))]));
		}
		ite.output_start(&stm);
		ite.output_limit(&stm);
		let ages: Vec<Value> = ite.results.iter().map(|v| v.pick(&Idiom::from("age"))).collect();
		assert_eq!(ages, vec![Value::from(20), Value::from(30)]);
	}

	#[test]
	fn result_stops_at_limit_plus_start() {
		let stm = select(|_| ());
		let mut ctx = Context::background();
		let mut ite = Iterator::new(false);
		ite.run = ctx.add_cancel();
		ite.limit = Some(2);
		ite.start = Some(1);
		for _ in 0..3 {
			assert!(ctx.is_ok());
			ite.result(&ctx, &stm, Ok(record(vec![("x", Value::from(1))])));
		}
		// The iterator stops itself once limit + start records are held
		assert!(ctx.is_done());
		assert_eq!(ite.results.len(), 3);
	}

	#[test]
	fn result_records_first_error_only() {
		let stm = select(|_| ());
		let mut ctx = Context::background();
		let mut ite = Iterator::new(false);
		ite.run = ctx.add_cancel();
		ite.result(
			&ctx,
			&stm,
			Err(Error::TableIsView {
				table: String::from("one"),
			}),
		);
		ite.result(
			&ctx,
			&stm,
			Err(Error::TableIsView {
				table: String::from("two"),
			}),
		);
		assert!(ctx.is_done());
		assert!(matches!(ite.error, Some(Error::TableIsView { ref table }) if table == "one"));
	}

	#[test]
	fn result_skips_ignored_documents() {
		let stm = select(|_| ());
		let mut ctx = Context::background();
		let mut ite = Iterator::new(false);
		ite.run = ctx.add_cancel();
		ite.result(&ctx, &stm, Err(Error::Ignore));
		assert!(ctx.is_ok());
		assert!(ite.error.is_none());
		assert!(ite.results.is_empty());
	}
}