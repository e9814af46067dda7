//! Literal rendering and validation tests over derived entities.

use chrono::NaiveDate;
use rstest::rstest;
use rust_decimal::Decimal;
use seedgen::{Entity, SeedError, ToSeedValue, Value, gen_code};
use uuid::Uuid;

#[derive(Entity)]
pub struct TypeWithoutKey {
	pub name: String,
}

pub struct UnknownStruct {
	pub id: i32,
}

impl ToSeedValue for UnknownStruct {
	fn to_seed_value(&self) -> Value<'_> {
		Value::Unsupported {
			type_name: "UnknownStruct",
		}
	}
}

#[derive(Entity)]
pub struct TypeWithUnknownValueType {
	#[seed(key)]
	pub id: i32,
	#[seed(value)]
	pub value: UnknownStruct,
}

#[derive(Entity)]
pub struct TypeWithDiscardAttribute {
	#[seed(key)]
	pub id: i32,
	#[seed(discard)]
	pub discard_value: Option<String>,
}

#[derive(Entity)]
pub struct IntContainer {
	#[seed(key)]
	pub id: i32,
}

#[derive(Entity)]
pub struct BoolContainer {
	#[seed(key)]
	pub id: i32,
	pub value: bool,
}

#[derive(Entity)]
pub struct GuidContainer {
	#[seed(key)]
	pub id: i32,
	pub value: Uuid,
}

#[derive(Entity)]
pub struct StringContainer {
	#[seed(key)]
	pub id: i32,
	pub value: String,
}

#[derive(Entity)]
pub struct DateTimeContainer {
	#[seed(key)]
	pub id: i32,
	pub value: chrono::NaiveDateTime,
}

#[derive(Entity)]
pub struct DecimalContainer {
	#[seed(key)]
	pub id: i32,
	pub value: Decimal,
}

#[derive(Entity)]
pub struct DoubleContainer {
	#[seed(key)]
	pub id: i32,
	pub value: f64,
}

#[derive(Entity)]
pub struct FloatContainer {
	#[seed(key)]
	pub id: i32,
	pub value: f32,
}

#[derive(Entity)]
pub struct NullableBoolContainer {
	#[seed(key)]
	pub id: i32,
	pub value: Option<bool>,
}

#[derive(Entity)]
pub struct Account {
	#[seed(key)]
	pub id: i32,
	pub owner_id: i32,
	pub email: String,
	password_hash: String,
	pub sessions: Vec<String>,
}

#[derive(Entity)]
#[seed(name = "Customer")]
pub struct CustomerRecord {
	#[seed(key, rename = "CustomerNo")]
	pub number: i32,
	pub display_name: String,
}

#[rstest]
fn test_missing_key_fails() {
	let entity = TypeWithoutKey {
		name: "Test".to_string(),
	};

	let err = gen_code(&entity).unwrap_err();

	assert!(matches!(err, SeedError::NoKey { .. }));
	assert_eq!(err.to_string(), "Cannot find key for entity TypeWithoutKey");
}

#[rstest]
fn test_unknown_value_type_fails() {
	let entity = TypeWithUnknownValueType {
		id: 0,
		value: UnknownStruct { id: 0 },
	};

	let err = gen_code(&entity).unwrap_err();

	assert!(matches!(err, SeedError::UnencodableType { .. }));
	assert_eq!(
		err.to_string(),
		r#"Unknown primitive or value type "UnknownStruct"."#
	);
}

#[rstest]
fn test_discard_attribute_skips_field() {
	let entity = TypeWithDiscardAttribute {
		id: 1,
		discard_value: Some("hidden".to_string()),
	};

	let result = gen_code(&entity).unwrap();

	assert_eq!(
		result,
		vec!["var typewithdiscardattribute_1 = new TypeWithDiscardAttribute {Id = 1};"]
	);
}

#[rstest]
fn test_int() {
	let result = gen_code(&IntContainer { id: 1 }).unwrap();
	assert_eq!(result, vec!["var intcontainer_1 = new IntContainer {Id = 1};"]);
}

#[rstest]
fn test_bool() {
	let result = gen_code(&BoolContainer { id: 1, value: true }).unwrap();
	assert_eq!(
		result,
		vec!["var boolcontainer_1 = new BoolContainer {Id = 1, Value = true};"]
	);
}

#[rstest]
fn test_guid() {
	let entity = GuidContainer {
		id: 1,
		value: Uuid::parse_str("e2f0b4a8-4b5b-4d42-bff6-86b5a5df1ff6").unwrap(),
	};

	let result = gen_code(&entity).unwrap();

	assert_eq!(
		result,
		vec![
			r#"var guidcontainer_1 = new GuidContainer {Id = 1, Value = new Guid("e2f0b4a8-4b5b-4d42-bff6-86b5a5df1ff6")};"#
		]
	);
}

#[rstest]
#[case("string", r#"var stringcontainer_1 = new StringContainer {Id = 1, Value = @"string"};"#)]
#[case(r#"s"tring"#, r#"var stringcontainer_1 = new StringContainer {Id = 1, Value = @"s""tring"};"#)]
#[case("", r#"var stringcontainer_1 = new StringContainer {Id = 1, Value = @""};"#)]
fn test_string(#[case] value: &str, #[case] expected: &str) {
	let entity = StringContainer {
		id: 1,
		value: value.to_string(),
	};

	let result = gen_code(&entity).unwrap();

	assert_eq!(result, vec![expected]);
}

#[rstest]
fn test_date_time() {
	let entity = DateTimeContainer {
		id: 1,
		value: NaiveDate::from_ymd_opt(2014, 1, 2)
			.unwrap()
			.and_hms_opt(3, 4, 5)
			.unwrap(),
	};

	let result = gen_code(&entity).unwrap();

	assert_eq!(
		result,
		vec![
			"var datetimecontainer_1 = new DateTimeContainer {Id = 1, Value = new DateTime(2014, 1, 2, 3, 4, 5)};"
		]
	);
}

#[rstest]
fn test_decimal() {
	let entity = DecimalContainer {
		id: 1,
		value: Decimal::new(1012, 2),
	};

	let result = gen_code(&entity).unwrap();

	assert_eq!(
		result,
		vec!["var decimalcontainer_1 = new DecimalContainer {Id = 1, Value = 10.12m};"]
	);
}

#[rstest]
fn test_double() {
	let result = gen_code(&DoubleContainer {
		id: 1,
		value: 10.12,
	})
	.unwrap();
	assert_eq!(
		result,
		vec!["var doublecontainer_1 = new DoubleContainer {Id = 1, Value = 10.12};"]
	);
}

#[rstest]
fn test_float() {
	let result = gen_code(&FloatContainer {
		id: 1,
		value: 10.12,
	})
	.unwrap();
	assert_eq!(
		result,
		vec!["var floatcontainer_1 = new FloatContainer {Id = 1, Value = 10.12f};"]
	);
}

#[rstest]
#[case(None, "null")]
#[case(Some(true), "true")]
fn test_nullable_bool(#[case] value: Option<bool>, #[case] literal: &str) {
	let result = gen_code(&NullableBoolContainer { id: 1, value }).unwrap();
	assert_eq!(
		result,
		vec![format!(
			"var nullableboolcontainer_1 = new NullableBoolContainer {{Id = 1, Value = {literal}}};"
		)]
	);
}

#[rstest]
fn test_foreign_keys_private_fields_and_collections_skipped() {
	let account = Account {
		id: 3,
		owner_id: 9,
		email: "a@example.com".to_string(),
		password_hash: "secret".to_string(),
		sessions: vec!["s1".to_string()],
	};

	let result = gen_code(&account).unwrap();

	assert_eq!(
		result,
		vec![r#"var account_3 = new Account {Id = 3, Email = @"a@example.com"};"#]
	);
	assert_eq!(account.password_hash, "secret");
}

#[rstest]
fn test_renamed_type_and_key() {
	let entity = CustomerRecord {
		number: 12,
		display_name: "Ada".to_string(),
	};

	let result = gen_code(&entity).unwrap();

	assert_eq!(
		result,
		vec![r#"var customer_12 = new Customer {CustomerNo = 12, DisplayName = @"Ada"};"#]
	);
}
