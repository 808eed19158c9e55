/// Creates a new b-tree map of key-value pairs
macro_rules! map {
	($($k:expr => $v:expr),* $(,)?) => {{
		let mut m = ::std::collections::BTreeMap::new();
		$(m.insert($k, $v);)*
		m
	}};
}
