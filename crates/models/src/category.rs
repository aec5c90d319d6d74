use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Mutable fields of a category as accepted from clients.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryInput {
    pub name: String,
    pub description: String,
}

impl CategoryInput {
    /// Insert form: the id is left for the database to assign.
    pub fn into_new_active_model(self) -> ActiveModel {
        ActiveModel { id: NotSet, name: Set(self.name), description: Set(self.description) }
    }

    /// Update form: every mutable column of row `id` is replaced.
    pub fn into_active_model_for(self, id: i32) -> ActiveModel {
        ActiveModel { id: Unchanged(id), name: Set(self.name), description: Set(self.description) }
    }

    pub fn with_id(self, id: i32) -> Model {
        Model { id, name: self.name, description: self.description }
    }
}
