//! AI company a member follows (`member_ai`).
use sea_orm::{entity::prelude::*, Set, DatabaseConnection, QueryFilter};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::member;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "member_ai")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub member_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub ai_company: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Member }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Member => Entity::belongs_to(member::Entity)
                .from(Column::MemberId)
                .to(member::Column::Id)
                .into(),
        }
    }
}

impl Related<member::Entity> for Entity {
    fn to() -> RelationDef { Relation::Member.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find_by_member(db: &DatabaseConnection, member_id: Uuid) -> Result<Option<Model>, ModelError> {
    let found = Entity::find()
        .filter(Column::MemberId.eq(member_id))
        .one(db)
        .await?;
    Ok(found)
}

pub async fn create(db: &DatabaseConnection, member_id: Uuid, ai_company: &str) -> Result<Model, ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        member_id: Set(member_id),
        ai_company: Set(ai_company.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

pub async fn update_value(db: &DatabaseConnection, id: Uuid, ai_company: &str) -> Result<Model, ModelError> {
    let mut am: ActiveModel = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ModelError::NotFound(format!("member_ai {id}")))?
        .into();
    am.ai_company = Set(ai_company.to_string());
    am.updated_at = Set(Utc::now().into());
    Ok(am.update(db).await?)
}
