use crate::data::models::schema::*;
use crate::data::repos::traits::repository::Entity;
use diesel::prelude::*;

/// A node of the category hierarchy. `parent_id == None` marks a root.
#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = categories)]
#[diesel(primary_key(category_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Category {
    pub category_id: i32,
    pub name: String,
    pub parent_id: Option<i32>,
}

#[derive(Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = categories)]
pub struct NewCategory {
    pub name: String,
    pub parent_id: Option<i32>,
}

impl Entity for Category {
    type New = NewCategory;
}
