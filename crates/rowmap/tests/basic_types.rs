use pretty_assertions::assert_eq;
use rowmap::{Mapper, Model, Value, Values};

#[derive(Debug, Default, PartialEq, Model)]
struct Scalars {
    #[column("short")]
    short: i16,

    #[column("int")]
    int: i32,

    #[column("long")]
    long: i64,

    #[column("float")]
    float: f32,

    #[column("double")]
    double: f64,

    #[column("flag")]
    flag: bool,

    #[column("text")]
    text: String,
}

#[derive(Debug, Default, PartialEq, Model)]
struct OptionalScalars {
    #[column("short")]
    short: Option<i16>,

    #[column("int")]
    int: Option<i32>,

    #[column("long")]
    long: Option<i64>,

    #[column("float")]
    float: Option<f32>,

    #[column("double")]
    double: Option<f64>,

    #[column("flag")]
    flag: Option<bool>,

    #[column("text")]
    text: Option<String>,
}

fn scalars() -> Scalars {
    Scalars {
        short: -12,
        int: 42,
        long: 1 << 40,
        float: 0.5,
        double: -2.75,
        flag: true,
        text: "hello".to_string(),
    }
}

#[test]
fn scalars_round_trip() {
    let mapper = Mapper::new();
    let original = scalars();

    let values = mapper.to_values(&original).unwrap();
    let restored: Scalars = mapper.from_row(&values).unwrap();

    assert_eq!(restored, original);
}

#[test]
fn scalars_are_written_in_field_order_with_their_kind() {
    let values = Mapper::new().to_values(&scalars()).unwrap();
    let written: Vec<(&str, &Value)> = values.iter().collect();

    assert_eq!(
        written,
        [
            ("short", &Value::I16(-12)),
            ("int", &Value::I32(42)),
            ("long", &Value::I64(1 << 40)),
            ("float", &Value::F32(0.5)),
            ("double", &Value::F64(-2.75)),
            ("flag", &Value::Bool(true)),
            ("text", &Value::from("hello")),
        ]
    );
}

#[test]
fn optional_scalars_round_trip() {
    let mapper = Mapper::new();
    let original = OptionalScalars {
        short: Some(1),
        int: Some(2),
        long: Some(3),
        float: Some(4.0),
        double: Some(5.0),
        flag: Some(false),
        text: Some("six".to_string()),
    };

    let values = mapper.to_values(&original).unwrap();
    let restored: OptionalScalars = mapper.from_row(&values).unwrap();

    assert_eq!(restored, original);
}

#[test]
fn none_is_written_as_explicit_null() {
    let mapper = Mapper::new();

    let values = mapper.to_values(&OptionalScalars::default()).unwrap();
    assert_eq!(values.len(), 7);
    assert!(values.iter().all(|(_, value)| value.is_null()));

    let restored: OptionalScalars = mapper.from_row(&values).unwrap();
    assert_eq!(restored, OptionalScalars::default());
}

#[test]
fn null_cell_into_required_field_fails() {
    let row = Values::new()
        .with("short", 1_i16)
        .with("int", Value::Null)
        .with("long", 1_i64)
        .with("float", 1.0_f32)
        .with("double", 1.0_f64)
        .with("flag", true)
        .with("text", "x");

    let err = Mapper::new().from_row::<Scalars>(&row).unwrap_err();
    assert!(err.is_type_conversion());
}

#[test]
fn integer_cells_convert_between_widths() {
    let row = Values::new()
        .with("short", 7_i64)
        .with("int", 8_i16)
        .with("long", 9_i32)
        .with("float", 1_i32)
        .with("double", 2_i64)
        .with("flag", 1_i64)
        .with("text", "x");

    let restored: Scalars = Mapper::new().from_row(&row).unwrap();

    assert_eq!(restored.short, 7);
    assert_eq!(restored.int, 8);
    assert_eq!(restored.long, 9);
    assert_eq!(restored.float, 1.0);
    assert_eq!(restored.double, 2.0);
    assert!(restored.flag);
}

#[test]
fn out_of_range_integer_fails() {
    let row = Values::new().with("short", i64::from(i16::MAX) + 1);
    let err = Mapper::new().from_row::<Scalars>(&row).unwrap_err();

    assert!(err.is_type_conversion());
}

#[test]
fn missing_column_fails() {
    let row = Values::new().with("short", 1_i16);
    let err = Mapper::new().from_row::<Scalars>(&row).unwrap_err();

    assert!(err.is_missing_column());
    assert_eq!(err.to_string(), "column `int` does not exist in row");
}
