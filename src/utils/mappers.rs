use crate::api::response::{
    CategoryResponse, CategoryTreeResponse, OrderLineResponse, ProductResponse,
};
use crate::data::models::category::Category;
use crate::data::models::order_line::OrderLine;
use crate::data::models::product::Product;
use crate::services::category_service::CategoryNode;

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        CategoryResponse {
            id: category.category_id,
            name: category.name,
            parent_id: category.parent_id,
        }
    }
}

impl From<CategoryNode> for CategoryTreeResponse {
    fn from(node: CategoryNode) -> Self {
        CategoryTreeResponse {
            id: node.category_id,
            name: node.name,
            parent_id: node.parent_id,
            children: node
                .children
                .into_iter()
                .map(CategoryTreeResponse::from)
                .collect(),
            item_count: node.item_count,
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.product_id,
            name: product.name,
            quantity: product.quantity,
            price: product.price,
            category_id: product.category_id,
        }
    }
}

impl From<OrderLine> for OrderLineResponse {
    fn from(line: OrderLine) -> Self {
        OrderLineResponse {
            id: line.order_line_id,
            order_id: line.order_id,
            product_id: line.product_id,
            quantity: line.quantity,
        }
    }
}
