//! `patients` table and the row-level operations on it.
use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, PaginatorTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "patients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: Option<String>,
    pub age: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Rows inserted by [`seed_demo`].
pub const DEMO_PATIENTS: [(&str, &str); 3] = [("Ali", "22"), ("Assa", "30"), ("Md", "40")];

pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn exists(db: &DatabaseConnection, id: i64) -> Result<bool, ModelError> {
    let n = Entity::find_by_id(id).count(db).await?;
    Ok(n > 0)
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, ModelError> {
    Ok(Entity::find().count(db).await?)
}

/// Insert a new row; the id comes from the database sequence.
pub async fn insert(db: &DatabaseConnection, name: Option<String>, age: Option<String>) -> Result<Model, ModelError> {
    let am = ActiveModel { id: NotSet, name: Set(name), age: Set(age) };
    Ok(am.insert(db).await?)
}

/// Overwrite the row with `id` in one statement. Returns `None` when no such
/// row exists, including when a concurrent delete removed it first.
pub async fn overwrite(
    db: &DatabaseConnection,
    id: i64,
    name: Option<String>,
    age: Option<String>,
) -> Result<Option<Model>, ModelError> {
    let am = ActiveModel { id: NotSet, name: Set(name.clone()), age: Set(age.clone()) };
    let res = Entity::update_many().set(am).filter(Column::Id.eq(id)).exec(db).await?;
    if res.rows_affected == 0 {
        return Ok(None);
    }
    Ok(Some(Model { id, name, age }))
}

/// Delete by id; returns the number of rows removed (0 or 1).
pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<u64, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected)
}

/// Insert [`DEMO_PATIENTS`] when the table is empty. Returns rows inserted.
pub async fn seed_demo(db: &DatabaseConnection) -> Result<usize, ModelError> {
    if count(db).await? > 0 {
        return Ok(0);
    }
    for (name, age) in DEMO_PATIENTS {
        insert(db, Some(name.to_string()), Some(age.to_string())).await?;
    }
    Ok(DEMO_PATIENTS.len())
}
