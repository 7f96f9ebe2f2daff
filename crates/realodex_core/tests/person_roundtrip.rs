use realodex_core::logic::parser::syntax::PREFIX_NAME;
use realodex_core::{
    parse_command, Address, Birthday, Command, Email, Family, HousingType, Income, Name,
    ParseError, Person, Phone, Remark, Tag,
};
use std::collections::BTreeSet;

fn sample(name: &str, remark: &str, birthday: Option<&str>) -> Person {
    Person::new(
        Name::new(name).unwrap(),
        Phone::new("94351253").unwrap(),
        Income::new("120000").unwrap(),
        Email::new("alice.pauline@example.com").unwrap(),
        Address::new("123, Jurong West Ave 6, #08-111").unwrap(),
        Family::new("4").unwrap(),
        BTreeSet::from([Tag::new("buyer").unwrap(), Tag::new("seller").unwrap()]),
        HousingType::GoodClassBungalow,
        Remark::new(remark).unwrap(),
        birthday.map(|raw| Birthday::new(raw).unwrap()),
    )
    .unwrap()
}

fn reparse(person: &Person) -> Person {
    let input = format!("add {}", person.command_args());
    match parse_command(&input).unwrap() {
        Command::Add(command) => command.person().clone(),
        other => panic!("expected add command, got {other:?}"),
    }
}

#[test]
fn command_args_reparse_to_equal_person() {
    let cases = [
        sample("Alice Pauline", "Wants a corner unit", Some("29Feb2000")),
        sample("Benson Meier", "", None),
        sample("Carl Kurz", "Budget flexible", None),
        sample("Daniel Meier", "", Some("31Dec1975")),
    ];
    for person in cases {
        assert_eq!(reparse(&person), person);
    }
}

#[test]
fn same_person_depends_only_on_name() {
    let base = sample("Alice Pauline", "", None);
    let different_fields = sample("Alice Pauline", "Completely different remark", Some("01Jan1990"));
    let different_name = sample("Alice Paulin", "", None);

    assert!(base.is_same_person(&different_fields));
    assert_ne!(base, different_fields);
    assert!(!base.is_same_person(&different_name));
}

#[test]
fn family_display_is_identity_for_valid_input() {
    for size in 1..=50u32 {
        let raw = size.to_string();
        assert_eq!(Family::new(&raw).unwrap().to_string(), raw);
    }
    for raw in ["0", "-3", "three", "2.5"] {
        assert_eq!(
            Family::new(raw).unwrap_err().message,
            Family::MESSAGE_CONSTRAINTS
        );
    }
}

#[test]
fn serde_roundtrip_uses_expected_wire_fields() {
    let person = sample("Alice Pauline", "Likes cats", Some("05Jul1992"));
    let json = serde_json::to_value(&person).unwrap();
    assert_eq!(json["name"], "Alice Pauline");
    assert_eq!(json["income"], 120000);
    assert_eq!(json["family"], 4);
    assert_eq!(json["housing_type"], "GOOD CLASS BUNGALOW");
    assert_eq!(json["tags"], serde_json::json!(["buyer", "seller"]));
    assert_eq!(json["birthday"], "05Jul1992");

    let decoded: Person = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, person);
}

#[test]
fn deserialize_rejects_invalid_field_values() {
    let mut json = serde_json::to_value(sample("Alice", "", None)).unwrap();
    json["phone"] = serde_json::json!("12");
    let err = serde_json::from_value::<Person>(json).unwrap_err();
    assert!(
        err.to_string().contains("at least 3 digits"),
        "unexpected error: {err}"
    );
}

fn with_free_text(address: &str, remark: &str) -> Person {
    let base = sample("Alice Pauline", "", None);
    Person::new(
        base.name().clone(),
        base.phone().clone(),
        base.income(),
        base.email().clone(),
        Address::new(address).unwrap(),
        base.family(),
        base.tags().clone(),
        base.housing_type(),
        Remark::new(remark).unwrap(),
        None,
    )
    .unwrap()
}

#[test]
fn padded_names_and_addresses_are_rejected() {
    assert!(Name::new("Alice ").is_err());
    assert!(Name::new(" Alice").is_err());
    assert!(Address::new("Blk 5 ").is_err());

    let mut json = serde_json::to_value(sample("Alice", "", None)).unwrap();
    json["name"] = serde_json::json!("Alice ");
    assert!(serde_json::from_value::<Person>(json).is_err());
}

#[test]
fn slashes_inside_free_text_survive_reparse() {
    let person = with_free_text("Blk 5/6, Ave 2 #08-111", "50/50 split w/o agent fee");
    assert_eq!(reparse(&person), person);
}

#[test]
fn whitespace_led_prefix_in_free_text_does_not_reparse() {
    let address = with_free_text("Blk 5 n/a", "");
    let err = parse_command(&format!("add {}", address.command_args())).unwrap_err();
    assert_eq!(err, ParseError::DuplicatePrefixes(vec![PREFIX_NAME]));

    let remark = with_free_text("Blk 5", "call t/seller first");
    let err = parse_command(&format!("add {}", remark.command_args())).unwrap_err();
    assert_eq!(err.to_string(), Tag::MESSAGE_CONSTRAINTS);
}

#[test]
fn empty_tag_set_is_rejected_on_decode() {
    let mut json = serde_json::to_value(sample("Alice", "", None)).unwrap();
    json["tags"] = serde_json::json!([]);
    let err = serde_json::from_value::<Person>(json).unwrap_err();
    assert!(err.to_string().contains(Person::MESSAGE_TAGS_REQUIRED));
}
