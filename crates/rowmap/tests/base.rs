use pretty_assertions::assert_eq;
use rowmap::{Mapper, Model, Values};

#[derive(Debug, Default, PartialEq, Model)]
struct Record {
    #[column("_id")]
    id: i64,

    #[column("created", readonly)]
    created: i64,
}

#[derive(Debug, Default, PartialEq, Model)]
struct Article {
    #[column("title")]
    title: String,

    #[base]
    record: Record,
}

#[derive(Debug, Default, PartialEq, Model)]
struct FeaturedArticle {
    #[column("rank")]
    rank: i32,

    #[base]
    article: Article,
}

#[test]
fn base_columns_follow_own_columns() {
    let mapper = Mapper::new();

    assert_eq!(
        mapper.projection::<Article>().unwrap(),
        ["title", "_id", "created"]
    );
    assert_eq!(
        mapper.projection::<FeaturedArticle>().unwrap(),
        ["rank", "title", "_id", "created"]
    );
}

#[test]
fn base_fields_are_read() {
    let row = Values::new()
        .with("rank", 1_i32)
        .with("title", "Hello")
        .with("_id", 7_i64)
        .with("created", 1_700_000_000_i64);

    let featured: FeaturedArticle = Mapper::new().from_row(&row).unwrap();

    assert_eq!(featured.rank, 1);
    assert_eq!(featured.article.title, "Hello");
    assert_eq!(featured.article.record.id, 7);
    assert_eq!(featured.article.record.created, 1_700_000_000);
}

#[test]
fn base_fields_are_written() {
    let article = Article {
        title: "Hello".to_string(),
        record: Record { id: 3, created: 9 },
    };

    let values = Mapper::new().to_values(&article).unwrap();

    assert_eq!(
        values,
        Values::new().with("title", "Hello").with("_id", 3_i64)
    );
}

#[test]
fn base_descriptor_records_path() {
    let schema = FeaturedArticle::schema();
    let id = schema.field_by_name("id").unwrap();

    assert_eq!(id.path, ["article", "record"]);
    assert_eq!(id.declared_in, "Record");
}

#[test]
fn base_field_itself_is_not_listed() {
    let schema = Article::schema();
    let names: Vec<_> = schema.fields.iter().map(|field| field.name).collect();

    assert_eq!(names, ["title", "id", "created"]);
}
