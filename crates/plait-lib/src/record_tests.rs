use super::*;

#[derive(Debug, Default, PartialEq)]
struct Person {
    name: String,
    age: u32,
    id: String,
}

fn gap() -> Parser<()> {
    whitespace().to(()) | eof()
}

fn person() -> Record<Person> {
    Record::new()
        .field("name", regex("[a-zA-Z]+") << gap(), |p: &mut Person, name| {
            p.name = name
        })
        .field(
            "age",
            regex(r"\d+").map(|n| n.parse::<u32>().unwrap_or(0)) << gap(),
            |p: &mut Person, age| p.age = age,
        )
        .field("id", regex(r"\d{3}-\d{3}") << gap(), |p: &mut Person, id| {
            p.id = id
        })
}

fn rob() -> Person {
    Person {
        name: "Rob".to_string(),
        age: 2000,
        id: "123-456".to_string(),
    }
}

#[test]
fn sequence_in_declared_order() {
    assert_eq!(person().sequence().parse("Rob 2000 123-456").unwrap(), rob());
}

#[test]
fn sequence_rejects_other_orders() {
    let err = person().sequence().parse("2000 Rob 123-456").unwrap_err();
    insta::assert_snapshot!(err, @"expected '[a-zA-Z]+' at 0:0");
}

#[test]
fn permutation_accepts_any_order() {
    let parser = person().permutation();

    assert_eq!(parser.parse("Rob 2000 123-456").unwrap(), rob());
    assert_eq!(parser.parse("123-456 2000 Rob").unwrap(), rob());
    assert_eq!(parser.parse("2000 Rob 123-456").unwrap(), rob());
}

#[test]
fn permutation_reports_missing_field() {
    let err = person().permutation().parse("Rob 2000").unwrap_err();
    insta::assert_snapshot!(err, @r"expected one of '\d{3}-\d{3}', '\s+' at 0:8");
}

#[test]
fn permutation_takes_each_field_once() {
    assert!(person().permutation().parse("Rob Bob 2000 123-456").is_err());
}

#[test]
fn field_names_keep_declaration_order() {
    let names: Vec<_> = person().field_names().map(str::to_string).collect();
    assert_eq!(names, ["name", "age", "id"]);
}

#[test]
fn duplicate_field_is_config_error() {
    let err = person()
        .try_field("name", regex("[a-z]+"), |p: &mut Person, name| p.name = name)
        .err()
        .unwrap();
    assert_eq!(err, ConfigError::DuplicateField("name".to_string()));
}

#[test]
#[should_panic(expected = "field `age` declared twice")]
fn duplicate_field_panics() {
    let _ = person().field("age", success(1u32), |p: &mut Person, age| p.age = age);
}

#[test]
fn empty_record_is_default() {
    let parser = Record::<Person>::new().sequence();
    assert_eq!(parser.parse("").unwrap(), Person::default());
    assert_eq!(Record::<Person>::new().permutation().parse("").unwrap(), Person::default());
}
