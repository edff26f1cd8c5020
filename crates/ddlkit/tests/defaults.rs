use ddlkit::{Render, Schema, Type, Value};

use pretty_assertions::assert_eq;

#[test]
fn boolean_defaults() -> ddlkit::Result<()> {
    let mut schema = Schema::new();
    let mut t = schema.create_table("t");
    t.bool("yes")?.default(true)?;
    t.bool("no")?.default(false)?;

    assert_eq!(
        t.render()?,
        "CREATE TABLE t (\n\tyes BOOLEAN DEFAULT TRUE,\n\tno BOOLEAN DEFAULT FALSE\n);"
    );
    Ok(())
}

#[test]
fn boolean_rejects_other_values() -> ddlkit::Result<()> {
    let mut schema = Schema::new();
    let mut t = schema.create_table("t");

    for value in [Value::from(1i64), Value::from("true"), Value::from(0u8)] {
        let err = t
            .column(format!("c{}", t.table().columns.len()), Type::Boolean)?
            .default(value)
            .unwrap_err();
        assert!(err.is_type_conversion(), "{err}");
    }

    assert!(!t.render()?.contains("DEFAULT"));
    Ok(())
}

#[test]
fn numeric_defaults() -> ddlkit::Result<()> {
    let mut schema = Schema::new();
    let mut t = schema.create_table("t");
    t.big_int("big")?.default(-9_000_000_000i64)?;
    t.unsigned_big_int("ubig")?.default(9_000_000_000u64)?;
    t.double("ratio")?.default(0.125)?;
    t.numeric("n")?.default(5i32)?;

    assert_eq!(
        t.render()?,
        "CREATE TABLE t (
\tbig BIGINT DEFAULT -9000000000,
\tubig UNSIGNED BIG INT DEFAULT 9000000000,
\tratio DOUBLE DEFAULT 0.125,
\tn NUMERIC DEFAULT 5
);"
    );
    Ok(())
}

#[test]
fn text_default_is_not_quoted() -> ddlkit::Result<()> {
    let mut schema = Schema::new();
    let mut t = schema.create_table("t");
    t.text("name")?.default("'guest'")?;

    assert_eq!(
        t.render()?,
        "CREATE TABLE t (\n\tname TEXT DEFAULT 'guest'\n);"
    );
    Ok(())
}

#[test]
fn blob_default_placeholder() -> ddlkit::Result<()> {
    let mut schema = Schema::new();
    let mut t = schema.create_table("t");
    t.blob("data")?.default(vec![1u8, 2, 3])?;

    assert_eq!(t.render()?, "CREATE TABLE t (\n\tdata BLOB DEFAULT BLOB\n);");
    Ok(())
}

#[test]
fn datetime_default_is_unsupported() -> ddlkit::Result<()> {
    let mut schema = Schema::new();
    let mut t = schema.create_table("t");

    let err = t
        .datetime("created_at")?
        .default("2024-01-01 00:00:00")
        .unwrap_err();
    assert!(err.is_unsupported_feature());
    assert_eq!(
        err.to_string(),
        "default value for column `created_at`: unsupported feature: DATETIME default values"
    );
    Ok(())
}

#[test]
fn non_finite_float_defaults_are_rejected() -> ddlkit::Result<()> {
    let mut schema = Schema::new();
    let mut t = schema.create_table("t");

    let err = t.real("ratio")?.default(f64::INFINITY).unwrap_err();
    assert!(err.is_type_conversion());
    assert_eq!(
        err.to_string(),
        "default value for column `ratio`: cannot convert F64 to REAL"
    );

    assert_eq!(t.render()?, "CREATE TABLE t (\n\tratio REAL\n);");
    Ok(())
}
