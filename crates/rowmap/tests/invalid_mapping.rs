use rowmap::{Mapper, Model, Values};

#[derive(Debug, Default, Model)]
struct EmptyName {
    #[column("")]
    value: i32,
}

#[derive(Debug, Default, Model)]
struct Unsupported {
    #[column("items")]
    items: Vec<i32>,
}

#[derive(Debug, Default, Model)]
struct Wrapper {
    #[column("id")]
    id: i64,

    #[embedded]
    inner: Unsupported,
}

#[test]
fn empty_column_name() {
    let err = Mapper::new().adapter::<EmptyName>().unwrap_err();

    assert!(err.is_invalid_mapping());
    assert_eq!(
        err.to_string(),
        "invalid mapping declaration: `EmptyName::value` has an empty column name"
    );
}

#[test]
fn unsupported_field_type() {
    let err = Mapper::new().adapter::<Unsupported>().unwrap_err();

    assert!(err.is_unregistered_type());
    assert!(err.to_string().ends_with("(field `Unsupported::items`)"));
}

#[test]
fn errors_in_embedded_types_carry_the_embedding_field() {
    let err = Mapper::new()
        .from_row::<Wrapper>(&Values::new())
        .unwrap_err();

    assert!(err.is_unregistered_type());
    assert!(err.to_string().starts_with("embedding `Wrapper::inner`: "));
}

#[test]
fn failed_builds_are_retried() {
    let mapper = Mapper::new();

    assert!(mapper.adapter::<EmptyName>().is_err());
    assert!(mapper.adapter::<EmptyName>().is_err());
}
