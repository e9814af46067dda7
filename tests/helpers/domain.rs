//! Entity graph used by the generation tests.
//!
//! Parents are held behind `Rc` so one instance can be shared by several
//! referrers, which is how the deduplication paths get exercised.

#![allow(dead_code)]

use std::rc::Rc;

use seedgen::Entity;

#[derive(Entity)]
pub struct TopItem {
	#[seed(key)]
	pub id: i32,
	pub name: String,
}

#[derive(Entity)]
pub struct SubItem1 {
	#[seed(key)]
	pub id: i32,
	pub name: String,
	pub top_item: Rc<TopItem>,
}

#[derive(Entity)]
pub struct SubItem2 {
	#[seed(key)]
	pub id: i32,
	pub name: String,
	pub parent_sub_item: Rc<SubItem1>,
	pub r#type: Rc<SubItem2Type>,
}

#[derive(Entity)]
pub struct SubItem2Type {
	#[seed(key)]
	pub id: i32,
	pub name: String,
}

#[derive(Entity)]
pub struct SubItem3 {
	#[seed(key)]
	pub id: i32,
	pub name: String,
	pub r#type: Rc<SubItem3Type>,
	pub parent: Rc<SubItem2>,
}

#[derive(Entity)]
pub struct SubItem3Type {
	#[seed(key)]
	pub id: i32,
	pub name: String,
}

#[derive(Entity)]
pub struct SubItem4 {
	#[seed(key)]
	pub id: i32,
	pub sub_item4_type: Rc<SubItem4Type>,
	pub sub_item3: Rc<SubItem3>,
	pub name: String,
}

#[derive(Entity)]
pub struct SubItem4Type {
	#[seed(key)]
	pub id: i32,
	pub name: String,
}

/// Shared part of the graph: everything below a `SubItem4`.
pub struct Graph {
	pub sub_item3: Rc<SubItem3>,
	pub sub_item4_type: Rc<SubItem4Type>,
}

pub fn graph() -> Graph {
	let top_item = Rc::new(TopItem {
		id: 1,
		name: "I'm TopItem".to_string(),
	});
	let sub_item1 = Rc::new(SubItem1 {
		id: 2,
		name: "I'm SubItem1".to_string(),
		top_item,
	});
	let sub_item2_type = Rc::new(SubItem2Type {
		id: 3,
		name: r#"This is "SubItem2""#.to_string(),
	});
	let sub_item2 = Rc::new(SubItem2 {
		id: 4,
		name: "I'm Parent".to_string(),
		parent_sub_item: sub_item1,
		r#type: sub_item2_type,
	});
	let sub_item3_type = Rc::new(SubItem3Type {
		id: 5,
		name: r#"This is "SubItem3""#.to_string(),
	});
	let sub_item3 = Rc::new(SubItem3 {
		id: 6,
		name: "I'm SubItem3".to_string(),
		r#type: sub_item3_type,
		parent: sub_item2,
	});
	let sub_item4_type = Rc::new(SubItem4Type {
		id: 7,
		name: r#"This is "SubItem4""#.to_string(),
	});

	Graph {
		sub_item3,
		sub_item4_type,
	}
}

pub fn sub_item4(id: i32, graph: &Graph) -> SubItem4 {
	SubItem4 {
		id,
		sub_item4_type: Rc::clone(&graph.sub_item4_type),
		sub_item3: Rc::clone(&graph.sub_item3),
		name: "I'm SubItem4".to_string(),
	}
}

/// Singly linked entity used for generated chains.
#[derive(Entity)]
pub struct Link {
	#[seed(key)]
	pub id: i64,
	pub label: String,
	pub next: Option<Rc<Link>>,
}

/// Builds a chain whose head has the first id.
pub fn chain(ids: &[i64]) -> Option<Rc<Link>> {
	ids.iter().rev().fold(None, |next, &id| {
		Some(Rc::new(Link {
			id,
			label: format!("link {id}"),
			next,
		}))
	})
}

#[derive(Entity)]
pub struct Owner {
	#[seed(key)]
	pub id: i32,
	pub name: String,
}

/// Entity sharing its owners by borrow.
#[derive(Entity)]
pub struct Pet<'a> {
	#[seed(key)]
	pub id: i32,
	pub owner: &'a Owner,
	pub sitter: Option<&'a Owner>,
}

/// Generic holder of a single entity.
#[derive(Entity)]
pub struct Holder<T> {
	#[seed(key)]
	pub id: u64,
	pub item: T,
}
