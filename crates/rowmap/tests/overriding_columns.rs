use pretty_assertions::assert_eq;
use rowmap::{Mapper, Model, Values};

#[derive(Debug, Default, Model)]
struct TwoIds {
    #[column("_id")]
    id: i32,

    #[column("_id")]
    other_id: i32,
}

#[derive(Debug, Default, Model)]
struct IdHolder {
    #[column("_id")]
    id: i32,
}

#[derive(Debug, Default, Model)]
struct DerivedId {
    #[column("_id")]
    id: i32,

    #[base]
    base: IdHolder,
}

#[derive(Debug, Default, Model)]
struct CompoundId {
    #[column("_id")]
    id: i32,

    #[embedded]
    nested: IdHolder,
}

#[derive(Debug, Default, Model)]
struct ReadonlyDuplicate {
    #[column("_id")]
    id: i32,

    #[column("_id", readonly)]
    shadow: i32,
}

#[derive(Debug, Default, Model)]
struct ReadonlyDerived {
    #[column("_id", readonly)]
    shadow: i32,

    #[base]
    base: IdHolder,
}

#[derive(Debug, Default, Model)]
struct ReadonlyCompound {
    #[column("_id", readonly)]
    id: i32,

    #[embedded]
    nested: IdHolder,
}

#[derive(Debug, Default, Model)]
struct NullDefaultDuplicates {
    #[column("_id", treat_null_as_default)]
    id: Option<i64>,

    #[column("_id", treat_null_as_default)]
    other_id: Option<i64>,
}

fn id_row() -> Values {
    Values::new().with("_id", 5_i32)
}

#[test]
fn one_column_reads_into_every_field() {
    let mapper = Mapper::new();

    let two: TwoIds = mapper.from_row(&id_row()).unwrap();
    assert_eq!((two.id, two.other_id), (5, 5));

    let derived: DerivedId = mapper.from_row(&id_row()).unwrap();
    assert_eq!((derived.id, derived.base.id), (5, 5));

    let compound: CompoundId = mapper.from_row(&id_row()).unwrap();
    assert_eq!((compound.id, compound.nested.id), (5, 5));
}

#[test]
fn duplicate_writable_columns_are_rejected() {
    let mapper = Mapper::new();

    let err = mapper.to_values(&TwoIds::default()).unwrap_err();
    assert!(err.is_duplicate_columns());
    assert_eq!(err.duplicate_columns_list(), Some(&["_id".to_string()][..]));

    assert!(mapper
        .to_values(&DerivedId::default())
        .unwrap_err()
        .is_duplicate_columns());

    assert!(mapper
        .to_values(&CompoundId::default())
        .unwrap_err()
        .is_duplicate_columns());
}

#[test]
fn duplicates_are_rejected_on_every_write() {
    let mapper = Mapper::new();

    for _ in 0..2 {
        let mut values = Values::new();
        let err = mapper
            .write_into(&TwoIds::default(), &mut values)
            .unwrap_err();

        assert!(err.is_duplicate_columns());
        assert!(values.is_empty());
    }
}

#[test]
fn readonly_duplicate_lets_the_writable_field_win() {
    let mapper = Mapper::new();

    let values = mapper
        .to_values(&ReadonlyDuplicate { id: 2, shadow: 1 })
        .unwrap();
    assert_eq!(values, Values::new().with("_id", 2_i32));

    let values = mapper
        .to_values(&ReadonlyDerived {
            shadow: 1,
            base: IdHolder { id: 2 },
        })
        .unwrap();
    assert_eq!(values, Values::new().with("_id", 2_i32));

    let values = mapper
        .to_values(&ReadonlyCompound {
            id: 2,
            nested: IdHolder { id: 1 },
        })
        .unwrap();
    assert_eq!(values, Values::new().with("_id", 1_i32));
}

#[test]
fn treat_null_as_default_does_not_exempt_duplicates() {
    let err = Mapper::new()
        .to_values(&NullDefaultDuplicates::default())
        .unwrap_err();

    assert!(err.is_duplicate_columns());
}

#[test]
fn duplicates_appear_in_projection() {
    let mapper = Mapper::new();

    assert_eq!(mapper.projection::<TwoIds>().unwrap(), ["_id", "_id"]);
    assert_eq!(mapper.writable_columns::<ReadonlyDuplicate>().unwrap(), ["_id"]);
}

#[test]
fn duplicate_error_lists_each_column_once() {
    #[derive(Debug, Default, Model)]
    struct Triple {
        #[column("a")]
        a1: i32,
        #[column("b")]
        b1: i32,
        #[column("a")]
        a2: i32,
        #[column("b")]
        b2: i32,
        #[column("a")]
        a3: i32,
    }

    let err = Mapper::new().to_values(&Triple::default()).unwrap_err();

    assert_eq!(
        err.duplicate_columns_list(),
        Some(&["a".to_string(), "b".to_string()][..])
    );
    assert_eq!(err.to_string(), "duplicate column definitions: a, b");
}
