use anyhow::Result;
use configs::DatabaseConfig;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, SqlErr};

use crate::db::{connect_with_config, ensure_schema};
use crate::{category, product};

async fn memory_db() -> Result<DatabaseConnection> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::default()
    };
    let db = connect_with_config(&cfg).await?;
    ensure_schema(&db).await?;
    Ok(db)
}

#[tokio::test]
async fn ensure_schema_is_idempotent() -> Result<()> {
    let db = memory_db().await?;
    ensure_schema(&db).await?;
    assert!(category::Entity::find().all(&db).await?.is_empty());
    assert!(product::Entity::find().all(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn insert_assigns_increasing_ids() -> Result<()> {
    let db = memory_db().await?;
    let drinks = category::CategoryInput {
        name: "Drinks".into(),
        description: "Cold and hot".into(),
    }
    .into_new_active_model()
    .insert(&db)
    .await?;
    let snacks = category::CategoryInput { name: "Snacks".into(), description: String::new() }
        .into_new_active_model()
        .insert(&db)
        .await?;
    assert!(snacks.id > drinks.id);

    let tea = product::ProductInput {
        name: "Iced tea".into(),
        price: 5000,
        stock: 12,
        category_id: drinks.id,
    }
    .into_new_active_model()
    .insert(&db)
    .await?;
    let found = product::Entity::find_by_id(tea.id).one(&db).await?;
    assert_eq!(found, Some(tea));
    Ok(())
}

#[tokio::test]
async fn product_requires_existing_category() -> Result<()> {
    let db = memory_db().await?;
    let err = product::ProductInput { name: "Orphan".into(), price: 1, stock: 1, category_id: 42 }
        .into_new_active_model()
        .insert(&db)
        .await
        .unwrap_err();
    assert!(matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))));
    assert!(product::Entity::find().all(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn update_form_replaces_all_fields() -> Result<()> {
    let db = memory_db().await?;
    let c = category::CategoryInput { name: "Old".into(), description: "old".into() }
        .into_new_active_model()
        .insert(&db)
        .await?;
    let updated = category::CategoryInput { name: "New".into(), description: "new".into() }
        .into_active_model_for(c.id)
        .update(&db)
        .await?;
    let expected = category::Model { id: c.id, name: "New".into(), description: "new".into() };
    assert_eq!(updated, expected);
    Ok(())
}

#[test]
fn input_ignores_body_id_and_defaults_missing_fields() {
    let input: product::ProductInput =
        serde_json::from_str(r#"{"id": 77, "name": "Kopi", "price": 8000}"#).unwrap();
    let expected =
        product::ProductInput { name: "Kopi".into(), price: 8000, stock: 0, category_id: 0 };
    assert_eq!(input, expected);
    assert_eq!(input.with_id(3).id, 3);
}

#[test]
fn input_rejects_wrong_types() {
    let res: std::result::Result<category::CategoryInput, _> =
        serde_json::from_str(r#"{"name": 5}"#);
    assert!(res.is_err());
}
