use crate::data::models::category::Category;
use crate::data::repos::traits::store::{Session, Store};
use crate::services::errors::CatalogServiceError;
use diesel_async::scoped_futures::ScopedFutureExt;
use std::collections::HashMap;

/// A category with its direct children and the number of products filed directly under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryNode {
    pub category_id: i32,
    pub name: String,
    pub parent_id: Option<i32>,
    pub children: Vec<CategoryNode>,
    pub item_count: i64,
}

pub struct CategoryService<S> {
    store: S,
}

impl<S: Store> CategoryService<S> {
    pub fn new(store: S) -> Self {
        CategoryService { store }
    }

    /// Flat list, roots first, then by name.
    pub async fn list_categories(&self) -> Result<Vec<Category>, CatalogServiceError> {
        self.store
            .unit_of_work(|session| load_categories(session).scope_boxed())
            .await
    }

    /// Whole hierarchy built from two reads: every category, then grouped product counts.
    pub async fn get_category_tree(&self) -> Result<Vec<CategoryNode>, CatalogServiceError> {
        self.store
            .unit_of_work(|session| load_category_tree(session).scope_boxed())
            .await
    }
}

async fn load_categories(session: &mut dyn Session) -> Result<Vec<Category>, CatalogServiceError> {
    Ok(session.get_all_flat().await?)
}

async fn load_category_tree(
    session: &mut dyn Session,
) -> Result<Vec<CategoryNode>, CatalogServiceError> {
    let categories = session.get_all_flat().await?;
    let counts = session.count_products_by_category().await?;

    tracing::debug!(
        categories = categories.len(),
        populated = counts.len(),
        "Building category tree"
    );

    Ok(build_category_tree(categories, &counts))
}

/// Assembles root nodes from a flat category list.
///
/// Siblings keep the order in which they appear in `categories`. Categories that cannot be
/// reached from a root (missing parent, or caught in a parent cycle) are left out.
pub fn build_category_tree(
    categories: Vec<Category>,
    counts: &HashMap<i32, i64>,
) -> Vec<CategoryNode> {
    let mut children_by_parent: HashMap<Option<i32>, Vec<Category>> = HashMap::new();
    for category in categories {
        children_by_parent
            .entry(category.parent_id)
            .or_default()
            .push(category);
    }

    let roots = children_by_parent.remove(&None).unwrap_or_default();
    roots
        .into_iter()
        .map(|root| build_node(root, &mut children_by_parent, counts))
        .collect()
}

fn build_node(
    category: Category,
    children_by_parent: &mut HashMap<Option<i32>, Vec<Category>>,
    counts: &HashMap<i32, i64>,
) -> CategoryNode {
    let children = children_by_parent
        .remove(&Some(category.category_id))
        .unwrap_or_default()
        .into_iter()
        .map(|child| build_node(child, children_by_parent, counts))
        .collect();

    CategoryNode {
        item_count: counts.get(&category.category_id).copied().unwrap_or(0),
        category_id: category.category_id,
        name: category.name,
        parent_id: category.parent_id,
        children,
    }
}
