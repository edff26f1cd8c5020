use ddlkit::{Render, Schema};

use pretty_assertions::assert_eq;

#[test]
fn cascade_clause() -> ddlkit::Result<()> {
    let mut schema = Schema::new();
    let id = schema.create_table("users").int("id")?.primary().id();

    let mut posts = schema.create_table("posts");
    posts.int("author")?.foreign(id)?.cascade()?;
    let sql = posts.render()?;

    let clause = "FOREIGN KEY (author) REFERENCES users(id) ON DELETE CASCADE";
    assert_eq!(sql.matches(clause).count(), 1, "{sql}");
    Ok(())
}

#[test]
fn without_cascade() -> ddlkit::Result<()> {
    let mut schema = Schema::new();
    let id = schema.create_table("users").int("id")?.primary().id();

    let mut posts = schema.create_table("posts");
    posts.int("author")?.foreign(id)?;
    let sql = posts.render()?;

    assert_eq!(
        sql.matches("FOREIGN KEY (author) REFERENCES users(id)").count(),
        1
    );
    assert!(!sql.contains("ON DELETE CASCADE"), "{sql}");
    Ok(())
}

#[test]
fn self_reference() -> ddlkit::Result<()> {
    let mut schema = Schema::new();
    let mut nodes = schema.create_table("nodes");
    let id = nodes.int("id")?.primary().id();
    nodes.int("parent")?.foreign(id)?;

    assert_eq!(
        nodes.render()?,
        "CREATE TABLE nodes (
\tid INT PRIMARY KEY,
\tparent INT,
\tFOREIGN KEY (parent) REFERENCES nodes(id)
);"
    );
    Ok(())
}

#[test]
fn foreign_key_after_default() -> ddlkit::Result<()> {
    let mut schema = Schema::new();
    let code = schema.create_table("langs").varchar("code")?.primary().id();

    let mut users = schema.create_table("users");
    users
        .varchar("lang")?
        .not_null()
        .default("en")?
        .foreign(code)?;

    assert_eq!(
        users.render()?,
        "CREATE TABLE users (
\tlang VARCHAR(255) NOT NULL DEFAULT en,
\tFOREIGN KEY (lang) REFERENCES langs(code)
);"
    );
    Ok(())
}

#[test]
fn cascade_requires_target() -> ddlkit::Result<()> {
    let mut schema = Schema::new();
    let mut t = schema.create_table("t");

    let err = t.int("place")?.cascade().unwrap_err();
    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "invalid schema: no foreign column for `place`; call `foreign` before `cascade`"
    );
    Ok(())
}
