//! Derive macro for the Entity trait
//!
//! Builds a static type descriptor from the struct declaration and a
//! `field_value` accessor matching it field for field.

use convert_case::{Case, Casing};
use proc_macro2::{TokenStream, TokenTree};
use quote::quote;
use syn::{
	Data, DeriveInput, Fields, GenericArgument, LitStr, PathArguments, Type, WherePredicate,
	parse_quote,
};

use crate::crate_paths::get_seedgen_crate;

/// Standard collection types. Fields of these types are never traversed.
const COLLECTION_TYPES: &[&str] = &[
	"Vec",
	"VecDeque",
	"LinkedList",
	"HashSet",
	"BTreeSet",
	"HashMap",
	"BTreeMap",
	"BinaryHeap",
];

/// Types with a literal form.
const SCALAR_TYPES: &[&str] = &[
	"bool",
	"i8",
	"i16",
	"i32",
	"i64",
	"u8",
	"u16",
	"u32",
	"u64",
	"usize",
	"isize",
	"i128",
	"u128",
	"f32",
	"f64",
	"String",
	"str",
	"Cow",
	"Uuid",
	"NaiveDateTime",
	"NaiveDate",
	"DateTime",
	"Decimal",
];

/// Smart pointers looked through when reading a reference field.
const POINTER_TYPES: &[&str] = &["Box", "Rc", "Arc"];

/// Declared shape of a field after attribute overrides.
enum FieldShape {
	Scalar,
	Reference(Access),
	Collection,
}

/// How a reference field reaches its entity.
///
/// Borrows and smart pointers are both read through one dereference.
#[derive(Clone, Copy)]
enum Access {
	Direct,
	Indirect,
	Optional,
	OptionalIndirect,
}

/// Explicit kind requested by a field attribute.
#[derive(Clone, Copy, PartialEq, Eq)]
enum KindOverride {
	Value,
	Reference,
	Collection,
}

/// Parsed `#[seed(...)]` field attributes.
#[derive(Default)]
struct FieldAttrs {
	key: bool,
	discard: bool,
	rename: Option<String>,
	kind: Option<KindOverride>,
}

/// Implementation of the Entity derive macro
pub(crate) fn derive_entity_impl(input: DeriveInput) -> syn::Result<TokenStream> {
	let struct_name = &input.ident;

	// Only support structs with named fields
	let fields = match &input.data {
		Data::Struct(data_struct) => match &data_struct.fields {
			Fields::Named(fields) => &fields.named,
			_ => {
				return Err(syn::Error::new_spanned(
					struct_name,
					"Entity can only be derived for structs with named fields",
				));
			}
		},
		_ => {
			return Err(syn::Error::new_spanned(
				struct_name,
				"Entity can only be derived for structs",
			));
		}
	};

	let krate = get_seedgen_crate()?;
	let type_name = parse_type_name(&input)?.unwrap_or_else(|| struct_name.to_string());

	let type_params: Vec<syn::Ident> = input
		.generics
		.type_params()
		.map(|param| param.ident.clone())
		.collect();

	let mut descriptors = Vec::new();
	let mut accessors = Vec::new();
	let mut bounds: Vec<WherePredicate> = Vec::new();

	for field in fields {
		let Some(ident) = field.ident.as_ref() else {
			continue;
		};
		let attrs = parse_field_attrs(&field.attrs)?;
		let name = attrs
			.rename
			.clone()
			.unwrap_or_else(|| default_field_name(ident));
		let field_ty = &field.ty;
		let shape = classify_field(field_ty, attrs.kind);
		let settable = matches!(field.vis, syn::Visibility::Public(_));

		// Generic field types need the bound their accessor relies on.
		if mentions_type_param(quote!(#field_ty), &type_params) {
			match shape {
				FieldShape::Scalar => bounds.push(parse_quote!(#field_ty: #krate::ToSeedValue)),
				FieldShape::Reference(_) => {
					let target = reference_target(field_ty);
					bounds.push(parse_quote!(#target: #krate::Entity));
				}
				FieldShape::Collection => {}
			}
		}

		let constructor = match shape {
			FieldShape::Scalar => quote!(scalar),
			FieldShape::Reference(_) => quote!(reference),
			FieldShape::Collection => quote!(collection),
		};
		let key = attrs.key.then(|| quote!(.key()));
		let discard = attrs.discard.then(|| quote!(.discard()));
		let read_only = (!settable).then(|| quote!(.read_only()));
		descriptors.push(quote! {
			#krate::FieldDescriptor::#constructor(#name) #key #discard #read_only
		});

		let value = match shape {
			FieldShape::Scalar => quote! {
				#krate::ToSeedValue::to_seed_value(&self.#ident)
			},
			FieldShape::Collection => quote!(#krate::Value::Null),
			FieldShape::Reference(Access::Direct) => quote! {
				#krate::Value::Entity(&self.#ident)
			},
			FieldShape::Reference(Access::Indirect) => quote! {
				#krate::Value::Entity(&*self.#ident)
			},
			FieldShape::Reference(Access::Optional) => quote! {
				match &self.#ident {
					::core::option::Option::Some(value) => #krate::Value::Entity(value),
					::core::option::Option::None => #krate::Value::Null,
				}
			},
			FieldShape::Reference(Access::OptionalIndirect) => quote! {
				match &self.#ident {
					::core::option::Option::Some(value) => #krate::Value::Entity(&**value),
					::core::option::Option::None => #krate::Value::Null,
				}
			},
		};
		accessors.push(quote! {
			#name => ::core::option::Option::Some(#value),
		});
	}

	let mut generics = input.generics.clone();
	if !bounds.is_empty() {
		generics.make_where_clause().predicates.extend(bounds);
	}
	let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

	Ok(quote! {
		impl #impl_generics #krate::Entity for #struct_name #ty_generics #where_clause {
			fn descriptor(&self) -> &'static #krate::TypeDescriptor {
				static DESCRIPTOR: #krate::__private::Lazy<#krate::TypeDescriptor> =
					#krate::__private::Lazy::new(|| {
						#krate::TypeDescriptor::new(#type_name, ::std::vec![#(#descriptors),*])
					});
				&DESCRIPTOR
			}

			fn field_value(&self, field: &str) -> ::core::option::Option<#krate::Value<'_>> {
				match field {
					#(#accessors)*
					_ => ::core::option::Option::None,
				}
			}
		}
	})
}

/// Reads `#[seed(name = "...")]` from the struct attributes.
fn parse_type_name(input: &DeriveInput) -> syn::Result<Option<String>> {
	let mut name = None;
	for attr in &input.attrs {
		if !attr.path().is_ident("seed") {
			continue;
		}
		attr.parse_nested_meta(|meta| {
			if meta.path.is_ident("name") {
				let lit: LitStr = meta.value()?.parse()?;
				name = Some(lit.value());
				Ok(())
			} else {
				Err(meta.error("unknown seed attribute, expected `name`"))
			}
		})?;
	}
	Ok(name)
}

/// Parses all `#[seed(...)]` attributes on a field.
fn parse_field_attrs(attrs: &[syn::Attribute]) -> syn::Result<FieldAttrs> {
	let mut parsed = FieldAttrs::default();
	for attr in attrs {
		if !attr.path().is_ident("seed") {
			continue;
		}
		attr.parse_nested_meta(|meta| {
			let kind = if meta.path.is_ident("key") {
				parsed.key = true;
				None
			} else if meta.path.is_ident("discard") {
				parsed.discard = true;
				None
			} else if meta.path.is_ident("rename") {
				let lit: LitStr = meta.value()?.parse()?;
				parsed.rename = Some(lit.value());
				None
			} else if meta.path.is_ident("value") {
				Some(KindOverride::Value)
			} else if meta.path.is_ident("reference") {
				Some(KindOverride::Reference)
			} else if meta.path.is_ident("collection") {
				Some(KindOverride::Collection)
			} else {
				return Err(meta.error(
					"unknown seed attribute, expected one of `key`, `discard`, `rename`, `value`, `reference`, `collection`",
				));
			};

			if let Some(kind) = kind {
				if parsed.kind.is_some_and(|existing| existing != kind) {
					return Err(meta.error("conflicting seed field kinds"));
				}
				parsed.kind = Some(kind);
			}
			Ok(())
		})?;
	}
	Ok(parsed)
}

/// Converts a field identifier to the name used in generated code.
fn default_field_name(ident: &syn::Ident) -> String {
	let raw = ident.to_string();
	raw.trim_start_matches("r#").to_case(Case::Pascal)
}

/// Classifies a field by attribute override or declared type.
fn classify_field(ty: &Type, kind: Option<KindOverride>) -> FieldShape {
	match kind {
		Some(KindOverride::Value) => FieldShape::Scalar,
		Some(KindOverride::Collection) => FieldShape::Collection,
		Some(KindOverride::Reference) => FieldShape::Reference(reference_access(ty)),
		None if is_collection_type(ty) => FieldShape::Collection,
		None if is_scalar_type(ty) => FieldShape::Scalar,
		None => FieldShape::Reference(reference_access(ty)),
	}
}

/// Returns the last path segment name and its first generic type argument.
fn last_segment(ty: &Type) -> Option<(String, Option<&Type>)> {
	let Type::Path(type_path) = ty else {
		return None;
	};
	let segment = type_path.path.segments.last()?;
	let inner = match &segment.arguments {
		PathArguments::AngleBracketed(args) => args.args.iter().find_map(|arg| match arg {
			GenericArgument::Type(inner) => Some(inner),
			_ => None,
		}),
		_ => None,
	};
	Some((segment.ident.to_string(), inner))
}

fn is_collection_type(ty: &Type) -> bool {
	matches!(last_segment(ty), Some((name, _)) if COLLECTION_TYPES.contains(&name.as_str()))
}

/// Check if type is a scalar, looking through `Option` and `&`.
fn is_scalar_type(ty: &Type) -> bool {
	if let Type::Reference(reference) = ty {
		return is_scalar_type(&reference.elem);
	}
	match last_segment(ty) {
		Some((name, Some(inner))) if name == "Option" => is_scalar_type(inner),
		Some((name, _)) => SCALAR_TYPES.contains(&name.as_str()),
		None => false,
	}
}

/// Returns the pointee of a borrow or smart pointer.
fn indirect_target(ty: &Type) -> Option<&Type> {
	if let Type::Reference(reference) = ty {
		return Some(&reference.elem);
	}
	match last_segment(ty) {
		Some((name, Some(inner))) if POINTER_TYPES.contains(&name.as_str()) => Some(inner),
		_ => None,
	}
}

fn reference_access(ty: &Type) -> Access {
	match last_segment(ty) {
		Some((name, Some(inner))) if name == "Option" => {
			if indirect_target(inner).is_some() {
				Access::OptionalIndirect
			} else {
				Access::Optional
			}
		}
		_ if indirect_target(ty).is_some() => Access::Indirect,
		_ => Access::Direct,
	}
}

/// Returns the entity type a reference field points at.
fn reference_target(ty: &Type) -> &Type {
	let ty = match last_segment(ty) {
		Some((name, Some(inner))) if name == "Option" => inner,
		_ => ty,
	};
	indirect_target(ty).unwrap_or(ty)
}

/// Check whether any of `params` appears in the tokens of a type.
fn mentions_type_param(tokens: TokenStream, params: &[syn::Ident]) -> bool {
	tokens.into_iter().any(|tree| match tree {
		TokenTree::Ident(ident) => params.contains(&ident),
		TokenTree::Group(group) => mentions_type_param(group.stream(), params),
		_ => false,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_field_name() {
		let ident: syn::Ident = parse_quote!(top_item_id);
		assert_eq!(default_field_name(&ident), "TopItemId");
		let ident: syn::Ident = parse_quote!(id);
		assert_eq!(default_field_name(&ident), "Id");
	}

	#[test]
	fn test_classify_scalars() {
		for ty in [
			parse_quote!(i32),
			parse_quote!(Option<bool>),
			parse_quote!(String),
			parse_quote!(rust_decimal::Decimal),
			parse_quote!(chrono::DateTime<chrono::Utc>),
			parse_quote!(&'static str),
		] {
			assert!(matches!(classify_field(&ty, None), FieldShape::Scalar));
		}
	}

	#[test]
	fn test_classify_collections() {
		let ty: Type = parse_quote!(Vec<OrderLine>);
		assert!(matches!(classify_field(&ty, None), FieldShape::Collection));
		let ty: Type = parse_quote!(std::collections::HashMap<String, i32>);
		assert!(matches!(classify_field(&ty, None), FieldShape::Collection));
	}

	#[test]
	fn test_classify_references() {
		let ty: Type = parse_quote!(TopItem);
		assert!(matches!(
			classify_field(&ty, None),
			FieldShape::Reference(Access::Direct)
		));
		let ty: Type = parse_quote!(Option<TopItem>);
		assert!(matches!(
			classify_field(&ty, None),
			FieldShape::Reference(Access::Optional)
		));
		let ty: Type = parse_quote!(std::rc::Rc<TopItem>);
		assert!(matches!(
			classify_field(&ty, None),
			FieldShape::Reference(Access::Indirect)
		));
		let ty: Type = parse_quote!(Option<Box<TopItem>>);
		assert!(matches!(
			classify_field(&ty, None),
			FieldShape::Reference(Access::OptionalIndirect)
		));
	}

	#[test]
	fn test_classify_borrowed_references() {
		let ty: Type = parse_quote!(&'a TopItem);
		assert!(matches!(
			classify_field(&ty, None),
			FieldShape::Reference(Access::Indirect)
		));
		let ty: Type = parse_quote!(Option<&'a TopItem>);
		assert!(matches!(
			classify_field(&ty, None),
			FieldShape::Reference(Access::OptionalIndirect)
		));
		let ty: Type = parse_quote!(Option<&'a str>);
		assert!(matches!(classify_field(&ty, None), FieldShape::Scalar));
	}

	#[test]
	fn test_reference_target() {
		let expected: Type = parse_quote!(TopItem);
		for ty in [
			parse_quote!(TopItem),
			parse_quote!(&'a TopItem),
			parse_quote!(Option<&'a TopItem>),
			parse_quote!(Option<std::sync::Arc<TopItem>>),
		] {
			assert_eq!(reference_target(&ty), &expected);
		}
	}

	#[test]
	fn test_mentions_type_param() {
		let params: Vec<syn::Ident> = vec![parse_quote!(T)];
		let generic: Type = parse_quote!(Option<Box<T>>);
		let concrete: Type = parse_quote!(Option<Box<Tag>>);
		assert!(mentions_type_param(quote!(#generic), &params));
		assert!(!mentions_type_param(quote!(#concrete), &params));
	}

	#[test]
	fn test_value_override() {
		let ty: Type = parse_quote!(Money);
		assert!(matches!(
			classify_field(&ty, Some(KindOverride::Value)),
			FieldShape::Scalar
		));
	}

	#[test]
	fn test_conflicting_kinds_rejected() {
		let field: syn::Field = parse_quote! {
			#[seed(value, reference)]
			pub amount: Money
		};
		assert!(parse_field_attrs(&field.attrs).is_err());
	}

	#[test]
	fn test_enum_rejected() {
		let input: DeriveInput = parse_quote! {
			enum Status { Active }
		};
		assert!(derive_entity_impl(input).is_err());
	}
}
