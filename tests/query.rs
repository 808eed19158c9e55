use opaldb::sql::statements::create::CreateStatement;
use opaldb::sql::statements::define::DefineTableStatement;
use opaldb::sql::statements::delete::DeleteStatement;
use opaldb::sql::statements::insert::InsertStatement;
use opaldb::sql::statements::relate::RelateStatement;
use opaldb::sql::statements::select::SelectStatement;
use opaldb::sql::statements::update::UpdateStatement;
use opaldb::sql::statements::upsert::UpsertStatement;
use opaldb::sql::{
	Array, Batch, Cond, Data, Expression, Field, Fields, Function, Group, Groups, Idiom, Limit,
	Model, Object, Operator, Order, Orders, Permissions, Perms, Split, Splits, Start, Statement,
	Table, Thing, Value, Values, Version,
};
use opaldb::{Auth, Datastore, Error, Options};

fn opt() -> Options {
	Options::new().with_ns("test").with_db("test").with_auth(Auth::Kv)
}

fn obj(entries: &[(&str, Value)]) -> Value {
	Value::Object(Object(entries.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()))
}

fn rows(v: Value) -> Vec<Value> {
	match v {
		Value::Array(v) => v.0,
		v => panic!("expected an array of results, got {v}"),
	}
}

fn pick(v: &Value, field: &str) -> Value {
	v.pick(&Idiom::from(field))
}

fn select_from(what: Value) -> SelectStatement {
	SelectStatement {
		expr: Fields::all(),
		what: Values::from(what),
		..Default::default()
	}
}

async fn insert(ds: &Datastore, tb: &str, items: Vec<Value>) {
	let stm = InsertStatement {
		into: Table::from(tb),
		data: Value::Array(Array::from(items)),
	};
	ds.process(Statement::Insert(stm), &opt()).await.unwrap();
}

async fn seed_users(ds: &Datastore, ages: &[i64]) {
	let items = ages
		.iter()
		.enumerate()
		.map(|(i, age)| {
			obj(&[
				("id", Value::Thing(Thing::from(("users", i as i64)))),
				("age", Value::from(*age)),
			])
		})
		.collect();
	insert(ds, "users", items).await;
}

#[tokio::test]
async fn select_with_limit_returns_exactly_limit_rows() {
	let ds = Datastore::new();
	seed_users(&ds, &(0..100).collect::<Vec<i64>>()).await;
	let stm = SelectStatement {
		limit: Some(Limit::from(3)),
		..select_from(Value::Table(Table::from("users")))
	};
	let res = rows(ds.process(Statement::Select(stm), &opt()).await.unwrap());
	assert_eq!(res.len(), 3);
}

#[tokio::test]
async fn select_with_limit_and_start_windows_the_results() {
	let ds = Datastore::new();
	seed_users(&ds, &[1, 2, 3, 4, 5, 6]).await;
	let stm = SelectStatement {
		order: Some(Orders(vec![Order::asc(Idiom::from("age"))])),
		limit: Some(Limit::from(2)),
		start: Some(Start::from(2)),
		..select_from(Value::Table(Table::from("users")))
	};
	let res = rows(ds.process(Statement::Select(stm), &opt()).await.unwrap());
	let ages: Vec<Value> = res.iter().map(|v| pick(v, "age")).collect();
	assert_eq!(ages, vec![Value::from(3), Value::from(4)]);
}

#[tokio::test]
async fn select_group_by_buckets_by_distinct_values() {
	let ds = Datastore::new();
	seed_users(&ds, &[20, 30, 20, 40, 30, 20]).await;
	let stm = SelectStatement {
		expr: Fields(vec![
			Field::Alone(Value::field("age")),
			Field::Alias(Value::from(Function::new("count", vec![])), Idiom::from("count")),
		]),
		group: Some(Groups(vec![Group::from(Idiom::from("age"))])),
		..select_from(Value::Table(Table::from("users")))
	};
	let res = rows(ds.process(Statement::Select(stm), &opt()).await.unwrap());
	// One bucket per distinct age
	assert_eq!(res.len(), 3);
	// The bucket counts sum to the input size
	let total: i64 = res
		.iter()
		.map(|v| match pick(v, "count") {
			Value::Number(n) => n.as_int(),
			v => panic!("expected a count, got {v}"),
		})
		.sum();
	assert_eq!(total, 6);
}

#[tokio::test]
async fn select_group_by_computes_aggregates() {
	let ds = Datastore::new();
	seed_users(&ds, &[10, 20, 30, 40]).await;
	let stm = SelectStatement {
		expr: Fields(vec![Field::Alias(
			Value::from(Function::new("math::sum", vec![Value::field("age")])),
			Idiom::from("total"),
		)]),
		group: Some(Groups(vec![Group(Value::Bool(true))])),
		..select_from(Value::Table(Table::from("users")))
	};
	let res = rows(ds.process(Statement::Select(stm), &opt()).await.unwrap());
	assert_eq!(res.len(), 1);
	assert_eq!(pick(&res[0], "total"), Value::from(100));
}

#[tokio::test]
async fn select_order_desc_with_window() {
	let ds = Datastore::new();
	seed_users(&ds, &[10, 30, 20, 40]).await;
	let stm = SelectStatement {
		order: Some(Orders(vec![Order::desc(Idiom::from("age"))])),
		limit: Some(Limit::from(2)),
		start: Some(Start::from(1)),
		..select_from(Value::Table(Table::from("users")))
	};
	let res = rows(ds.process(Statement::Select(stm), &opt()).await.unwrap());
	let ages: Vec<Value> = res.iter().map(|v| pick(v, "age")).collect();
	assert_eq!(ages, vec![Value::from(30), Value::from(20)]);
}

#[tokio::test]
async fn select_split_singularizes_array_fields() {
	let ds = Datastore::new();
	insert(
		&ds,
		"posts",
		vec![
			obj(&[
				("id", Value::from("posts:a")),
				("tags", Value::from(vec![Value::from("x"), Value::from("y")])),
			]),
			obj(&[
				("id", Value::from("posts:b")),
				("tags", Value::from(vec![Value::from("z")])),
			]),
		],
	)
	.await;
	let stm = SelectStatement {
		split: Some(Splits(vec![Split(Idiom::from("tags"))])),
		order: Some(Orders(vec![Order::asc(Idiom::from("tags"))])),
		..select_from(Value::Table(Table::from("posts")))
	};
	let res = rows(ds.process(Statement::Select(stm), &opt()).await.unwrap());
	let tags: Vec<Value> = res.iter().map(|v| pick(v, "tags")).collect();
	assert_eq!(tags, vec![Value::from("x"), Value::from("y"), Value::from("z")]);
}

#[tokio::test]
async fn select_where_filters_records() {
	let ds = Datastore::new();
	seed_users(&ds, &[10, 20, 30, 40]).await;
	let stm = SelectStatement {
		cond: Some(Cond(Value::from(Expression::new(
			Value::field("age"),
			Operator::MoreThan,
			Value::from(20),
		)))),
		..select_from(Value::Table(Table::from("users")))
	};
	let res = rows(ds.process(Statement::Select(stm), &opt()).await.unwrap());
	assert_eq!(res.len(), 2);
}

#[tokio::test]
async fn insert_with_explicit_id_round_trips() {
	let ds = Datastore::new();
	insert(
		&ds,
		"tb",
		vec![obj(&[("id", Value::from("tb:42")), ("name", Value::from("tobie"))])],
	)
	.await;
	let stm = select_from(Value::Thing(Thing::from(("tb", 42))));
	let res = rows(ds.process(Statement::Select(stm), &opt()).await.unwrap());
	assert_eq!(res.len(), 1);
	assert_eq!(pick(&res[0], "name"), Value::from("tobie"));
	assert_eq!(pick(&res[0], "id"), Value::Thing(Thing::from(("tb", 42))));
}

#[tokio::test]
async fn create_model_count_generates_distinct_ids() {
	let ds = Datastore::new();
	let stm = CreateStatement {
		what: Values::from(Value::Model(Model::Count(String::from("n"), 5))),
		data: None,
	};
	let res = rows(ds.process(Statement::Create(stm), &opt()).await.unwrap());
	assert_eq!(res.len(), 5);
	let mut ids: Vec<String> = res.iter().map(|v| pick(v, "id").to_string()).collect();
	ids.sort();
	ids.dedup();
	assert_eq!(ids.len(), 5);
}

#[tokio::test]
async fn create_model_range_steps_with_rounding() {
	let ds = Datastore::new();
	let stm = CreateStatement {
		what: Values::from(Value::Model(Model::Range(
			String::from("n"),
			1.into(),
			3.into(),
			0.5.into(),
		))),
		data: None,
	};
	let res = rows(ds.process(Statement::Create(stm), &opt()).await.unwrap());
	let ids: Vec<f64> = res
		.iter()
		.map(|v| match pick(v, "id") {
			Value::Thing(t) => match t.id {
				opaldb::sql::Id::Number(n) => n.as_float(),
				id => panic!("expected a numeric id, got {id}"),
			},
			v => panic!("expected a record id, got {v}"),
		})
		.collect();
	assert_eq!(ids, vec![1.0, 1.5, 2.0, 2.5, 3.0]);
}

#[tokio::test]
async fn create_model_range_descends_symmetrically() {
	let ds = Datastore::new();
	let stm = CreateStatement {
		what: Values::from(Value::Model(Model::Range(
			String::from("n"),
			3.into(),
			1.into(),
			1.into(),
		))),
		data: None,
	};
	let res = rows(ds.process(Statement::Create(stm), &opt()).await.unwrap());
	assert_eq!(res.len(), 3);
	let first = pick(&res[0], "id");
	assert_eq!(first, Value::Thing(Thing::from(("n".to_string(), opaldb::sql::Id::from(3)))));
}

#[tokio::test]
async fn create_model_range_rejects_zero_step() {
	let ds = Datastore::new();
	let stm = CreateStatement {
		what: Values::from(Value::Model(Model::Range(
			String::from("n"),
			1.into(),
			3.into(),
			0.into(),
		))),
		data: None,
	};
	let res = ds.process(Statement::Create(stm), &opt()).await;
	assert!(matches!(res, Err(Error::InvalidModel { .. })));
}

#[tokio::test]
async fn create_on_view_table_is_rejected() {
	let ds = Datastore::new();
	let mut tx = ds.transaction(true).await.unwrap();
	tx.set_tb(
		"test",
		"test",
		&DefineTableStatement {
			name: String::from("view_tbl"),
			lock: true,
			perms: Perms::Full,
		},
	)
	.await
	.unwrap();
	tx.commit().await.unwrap();
	// A direct write to the view table fails
	let stm = CreateStatement {
		what: Values::from(Value::Table(Table::from("view_tbl"))),
		data: None,
	};
	let res = ds.process(Statement::Create(stm.clone()), &opt()).await;
	assert!(matches!(res, Err(Error::TableIsView { ref table }) if table == "view_tbl"));
	// The same write on behalf of a view refresh succeeds
	let res = ds.process(Statement::Create(stm), &opt().with_virt(true)).await;
	assert!(res.is_ok());
}

#[tokio::test]
async fn scoped_auth_requires_structured_permissions() {
	let ds = Datastore::new();
	let mut tx = ds.transaction(true).await.unwrap();
	tx.set_tb(
		"test",
		"test",
		&DefineTableStatement {
			name: String::from("open_tbl"),
			lock: false,
			perms: Perms::Specific(Permissions::default()),
		},
	)
	.await
	.unwrap();
	tx.set_tb(
		"test",
		"test",
		&DefineTableStatement {
			name: String::from("shut_tbl"),
			lock: false,
			perms: Perms::Full,
		},
	)
	.await
	.unwrap();
	tx.set_tb(
		"test",
		"test",
		&DefineTableStatement {
			name: String::from("deny_tbl"),
			lock: false,
			perms: Perms::Specific(Permissions {
				select: Value::Bool(false),
				..Default::default()
			}),
		},
	)
	.await
	.unwrap();
	tx.commit().await.unwrap();
	let opt = opt().with_auth(Auth::Sc(
		String::from("test"),
		String::from("test"),
		String::from("account"),
	));
	// A structured policy with a truthy slot permits the statement
	let stm = select_from(Value::Table(Table::from("open_tbl")));
	assert!(ds.process(Statement::Select(stm), &opt).await.is_ok());
	// An opaque policy is rejected outright
	let stm = select_from(Value::Table(Table::from("shut_tbl")));
	let res = ds.process(Statement::Select(stm), &opt).await;
	assert!(matches!(res, Err(Error::TablePermissions { ref table }) if table == "shut_tbl"));
	// A structured policy with a falsy slot denies the statement
	let stm = select_from(Value::Table(Table::from("deny_tbl")));
	let res = ds.process(Statement::Select(stm), &opt).await;
	assert!(matches!(res, Err(Error::TablePermissions { ref table }) if table == "deny_tbl"));
}

#[tokio::test]
async fn scoped_auth_requires_namespace_to_exist() {
	let ds = Datastore::new();
	let opt = opt().with_auth(Auth::Sc(
		String::from("test"),
		String::from("test"),
		String::from("account"),
	));
	let stm = select_from(Value::Table(Table::from("users")));
	let res = ds.process(Statement::Select(stm), &opt).await;
	assert!(matches!(res, Err(Error::NsNotFound)));
}

#[tokio::test]
async fn update_with_where_modifies_matching_records() {
	let ds = Datastore::new();
	seed_users(&ds, &[10, 20, 30]).await;
	let stm = UpdateStatement {
		what: Values::from(Value::Table(Table::from("users"))),
		data: Some(Data::SetExpression(vec![(Idiom::from("adult"), Value::Bool(true))])),
		cond: Some(Cond(Value::from(Expression::new(
			Value::field("age"),
			Operator::MoreThanOrEqual,
			Value::from(20),
		)))),
	};
	let res = rows(ds.process(Statement::Update(stm), &opt()).await.unwrap());
	assert_eq!(res.len(), 2);
	// The modification is visible to a subsequent read
	let stm = SelectStatement {
		cond: Some(Cond(Value::field("adult"))),
		..select_from(Value::Table(Table::from("users")))
	};
	let res = rows(ds.process(Statement::Select(stm), &opt()).await.unwrap());
	assert_eq!(res.len(), 2);
}

#[tokio::test]
async fn update_batch_targets_each_record() {
	let ds = Datastore::new();
	seed_users(&ds, &[10, 20, 30]).await;
	let stm = UpdateStatement {
		what: Values::from(Value::Batch(Batch::new(
			Table::from("users"),
			vec![Thing::from(("users", 0)), Thing::from(("users", 2))],
		))),
		data: Some(Data::SetExpression(vec![(Idiom::from("seen"), Value::Bool(true))])),
		cond: None,
	};
	let res = rows(ds.process(Statement::Update(stm), &opt()).await.unwrap());
	assert_eq!(res.len(), 2);
}

#[tokio::test]
async fn upsert_merges_into_existing_records() {
	let ds = Datastore::new();
	insert(&ds, "users", vec![obj(&[("id", Value::from("users:1")), ("age", Value::from(10))])])
		.await;
	let stm = UpsertStatement {
		into: Table::from("users"),
		data: Value::Array(Array::from(vec![obj(&[
			("id", Value::from("users:1")),
			("name", Value::from("tobie")),
		])])),
	};
	ds.process(Statement::Upsert(stm), &opt()).await.unwrap();
	let stm = select_from(Value::Thing(Thing::from(("users", 1))));
	let res = rows(ds.process(Statement::Select(stm), &opt()).await.unwrap());
	// The existing fields are kept, and the new fields are merged in
	assert_eq!(pick(&res[0], "age"), Value::from(10));
	assert_eq!(pick(&res[0], "name"), Value::from("tobie"));
}

#[tokio::test]
async fn update_subquery_requires_identifiable_records() {
	let ds = Datastore::new();
	seed_users(&ds, &[10]).await;
	let stm = UpdateStatement {
		what: Values::from(Value::Array(Array::from(vec![obj(&[("age", Value::from(1))])]))),
		data: None,
		cond: None,
	};
	let res = ds.process(Statement::Update(stm), &opt()).await;
	assert!(matches!(res, Err(Error::UpdateStatement { .. })));
}

#[tokio::test]
async fn select_subquery_feed_mixes_records_and_values() {
	let ds = Datastore::new();
	seed_users(&ds, &[10]).await;
	let stm = select_from(Value::Array(Array::from(vec![
		Value::Thing(Thing::from(("users", 0))),
		obj(&[("age", Value::from(99))]),
	])));
	let res = rows(ds.process(Statement::Select(stm), &opt()).await.unwrap());
	let ages: Vec<Value> = res.iter().map(|v| pick(v, "age")).collect();
	assert_eq!(ages, vec![Value::from(10), Value::from(99)]);
}

#[tokio::test]
async fn delete_removes_records_and_yields_nothing() {
	let ds = Datastore::new();
	seed_users(&ds, &[10, 20]).await;
	let stm = DeleteStatement {
		what: Values::from(Value::Thing(Thing::from(("users", 0)))),
		cond: None,
	};
	let res = rows(ds.process(Statement::Delete(stm), &opt()).await.unwrap());
	assert!(res.is_empty());
	let stm = select_from(Value::Table(Table::from("users")));
	let res = rows(ds.process(Statement::Select(stm), &opt()).await.unwrap());
	assert_eq!(res.len(), 1);
}

#[tokio::test]
async fn relate_creates_an_edge_record() {
	let ds = Datastore::new();
	seed_users(&ds, &[10, 20]).await;
	let stm = RelateStatement {
		kind: Table::from("likes"),
		from: Value::Thing(Thing::from(("users", 0))),
		with: Value::Thing(Thing::from(("users", 1))),
		data: None,
	};
	let res = rows(ds.process(Statement::Relate(stm), &opt()).await.unwrap());
	assert_eq!(res.len(), 1);
	assert_eq!(pick(&res[0], "in"), Value::Thing(Thing::from(("users", 0))));
	assert_eq!(pick(&res[0], "out"), Value::Thing(Thing::from(("users", 1))));
}

#[tokio::test]
async fn select_version_reads_historic_state() {
	let ds = Datastore::new();
	// The first commit stores the initial record state
	insert(&ds, "users", vec![obj(&[("id", Value::from("users:1")), ("age", Value::from(1))])])
		.await;
	// The second commit overwrites the record
	let stm = UpdateStatement {
		what: Values::from(Value::Thing(Thing::from(("users", 1)))),
		data: Some(Data::SetExpression(vec![(Idiom::from("age"), Value::from(2))])),
		cond: None,
	};
	ds.process(Statement::Update(stm), &opt()).await.unwrap();
	// A versioned read sees the historic state
	let stm = SelectStatement {
		version: Some(Version::from(1)),
		..select_from(Value::Table(Table::from("users")))
	};
	let res = rows(ds.process(Statement::Select(stm), &opt()).await.unwrap());
	assert_eq!(res.len(), 1);
	assert_eq!(pick(&res[0], "age"), Value::from(1));
	// An unversioned read sees the latest state
	let stm = select_from(Value::Table(Table::from("users")));
	let res = rows(ds.process(Statement::Select(stm), &opt()).await.unwrap());
	assert_eq!(pick(&res[0], "age"), Value::from(2));
}

#[tokio::test]
async fn select_with_invalid_limit_fails_during_setup() {
	let ds = Datastore::new();
	seed_users(&ds, &[10]).await;
	let stm = SelectStatement {
		limit: Some(Limit(Value::from("three"))),
		..select_from(Value::Table(Table::from("users")))
	};
	let res = ds.process(Statement::Select(stm), &opt()).await;
	assert!(matches!(res, Err(Error::InvalidLimit { .. })));
}

#[tokio::test]
async fn statement_requires_namespace_and_database() {
	let ds = Datastore::new();
	let stm = select_from(Value::Table(Table::from("users")));
	let res = ds.process(Statement::Select(stm), &Options::new()).await;
	assert!(matches!(res, Err(Error::NsEmpty)));
}
