use anyhow::Result;
use sea_orm::{EntityTrait, PaginatorTrait, QueryFilter, ColumnTrait};
use uuid::Uuid;

use super::setup_test_db;
use crate::{errors::ModelError, member, member_ai, member_ai_field, member_job};

#[tokio::test]
async fn test_member_ai_create_update_find() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };
    let m = member::create(&db, &format!("ai_{}", Uuid::new_v4())).await?;

    assert!(member_ai::find_by_member(&db, m.id).await?.is_none());

    let created = member_ai::create(&db, m.id, "OpenAI").await?;
    let updated = member_ai::update_value(&db, created.id, "Anthropic").await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.ai_company, "Anthropic");
    assert!(updated.updated_at >= created.updated_at);

    let found = member_ai::find_by_member(&db, m.id).await?.expect("row present");
    assert_eq!(found.ai_company, "Anthropic");

    member::Entity::delete_by_id(m.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_second_row_for_same_member_violates_unique() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };
    let m = member::create(&db, &format!("job_{}", Uuid::new_v4())).await?;

    member_job::create(&db, m.id, "ML").await?;
    // What a lost find-then-insert race would attempt.
    let dup = member_job::create(&db, m.id, "Backend").await;
    assert!(matches!(dup, Err(ModelError::Db(_))));

    let rows = member_job::Entity::find()
        .filter(member_job::Column::MemberId.eq(m.id))
        .count(&db)
        .await?;
    assert_eq!(rows, 1);

    member::Entity::delete_by_id(m.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_member_delete_cascades_to_preferences() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };
    let m = member::create(&db, &format!("field_{}", Uuid::new_v4())).await?;
    let field = member_ai_field::create(&db, m.id, "NLP").await?;

    member::Entity::delete_by_id(m.id).exec(&db).await?;
    assert!(member_ai_field::Entity::find_by_id(field.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_update_missing_row_is_not_found() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };
    let res = member_ai_field::update_value(&db, Uuid::new_v4(), "CV").await;
    assert!(matches!(res, Err(ModelError::NotFound(_))));
    Ok(())
}
