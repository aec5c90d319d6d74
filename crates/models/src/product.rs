use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use serde::{Deserialize, Serialize};

use crate::category;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Whole currency units.
    pub price: i32,
    pub stock: i32,
    pub category_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Category }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Category => Entity::belongs_to(category::Entity)
                .from(Column::CategoryId)
                .to(category::Column::Id)
                .into(),
        }
    }
}

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Mutable fields of a product as accepted from clients.
///
/// Absent keys fall back to zero values and any `id` key is ignored, so the
/// identifier always comes from the database or the request path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductInput {
    pub name: String,
    pub price: i32,
    pub stock: i32,
    pub category_id: i32,
}

impl ProductInput {
    pub fn into_new_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: Set(self.name),
            price: Set(self.price),
            stock: Set(self.stock),
            category_id: Set(self.category_id),
        }
    }

    pub fn into_active_model_for(self, id: i32) -> ActiveModel {
        ActiveModel {
            id: Unchanged(id),
            name: Set(self.name),
            price: Set(self.price),
            stock: Set(self.stock),
            category_id: Set(self.category_id),
        }
    }

    pub fn with_id(self, id: i32) -> Model {
        Model {
            id,
            name: self.name,
            price: self.price,
            stock: self.stock,
            category_id: self.category_id,
        }
    }
}
