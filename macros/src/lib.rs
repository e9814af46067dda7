//! Procedural macros for seedgen.
//!
//! This crate provides the `#[derive(Entity)]` macro for generating
//! entity descriptors and field access.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod crate_paths;
mod entity_derive;

/// Derives an `Entity` implementation for a struct.
///
/// The generated descriptor lists every named field in declaration order.
/// Public fields are settable; private fields are declared but never
/// emitted.
///
/// # Attributes
///
/// ## Struct-level attributes
///
/// - `#[seed(name = "TypeName")]` - Type name used in generated code
///   (defaults to the struct name)
///
/// ## Field-level attributes
///
/// - `#[seed(key)]` - Marks the key field
/// - `#[seed(discard)]` - Never emit this field
/// - `#[seed(rename = "Name")]` - Field name used in generated code
///   (defaults to the field name in PascalCase)
/// - `#[seed(value)]` - Treat the field as a scalar through `ToSeedValue`
/// - `#[seed(reference)]` - Treat the field as an entity reference
/// - `#[seed(collection)]` - Treat the field as a collection
///
/// Without an explicit kind, standard collections are collections, known
/// primitive types (and `Option`s of them) are scalars, and anything else is
/// an entity reference, held directly, optionally, by `&` borrow, or behind
/// `Box`, `Rc` or `Arc`. Integers wider than `i64` are scalars that fail to
/// encode when their value does not fit.
///
/// Type parameters used by a field get the bound that field needs:
/// `T: Entity` for references and `FieldType: ToSeedValue` for scalars.
///
/// # Example
///
/// ```ignore
/// use seedgen::Entity;
///
/// #[derive(Entity)]
/// pub struct SubItem1 {
///     #[seed(key)]
///     pub id: i32,
///     pub name: String,
///     pub top_item: Option<TopItem>,
///     pub top_item_id: i32,
/// }
/// ```
///
/// This generates:
///
/// ```ignore
/// impl seedgen::Entity for SubItem1 {
///     fn descriptor(&self) -> &'static seedgen::TypeDescriptor {
///         static DESCRIPTOR: Lazy<seedgen::TypeDescriptor> = Lazy::new(|| {
///             seedgen::TypeDescriptor::new(
///                 "SubItem1",
///                 vec![
///                     seedgen::FieldDescriptor::scalar("Id").key(),
///                     seedgen::FieldDescriptor::scalar("Name"),
///                     seedgen::FieldDescriptor::reference("TopItem"),
///                     seedgen::FieldDescriptor::scalar("TopItemId"),
///                 ],
///             )
///         });
///         &DESCRIPTOR
///     }
///
///     fn field_value(&self, field: &str) -> Option<seedgen::Value<'_>> {
///         match field {
///             "Id" => Some(seedgen::ToSeedValue::to_seed_value(&self.id)),
///             "Name" => Some(seedgen::ToSeedValue::to_seed_value(&self.name)),
///             "TopItem" => Some(match &self.top_item {
///                 Some(value) => seedgen::Value::Entity(value),
///                 None => seedgen::Value::Null,
///             }),
///             "TopItemId" => Some(seedgen::ToSeedValue::to_seed_value(&self.top_item_id)),
///             _ => None,
///         }
///     }
/// }
/// ```
#[proc_macro_derive(Entity, attributes(seed))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	entity_derive::derive_entity_impl(input)
		.unwrap_or_else(|err| err.to_compile_error())
		.into()
}
