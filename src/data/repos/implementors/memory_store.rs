use crate::data::errors::StoreError;
use crate::data::models::category::{Category, NewCategory};
use crate::data::models::customer::{Customer, NewCustomer};
use crate::data::models::order::{NewOrder, Order};
use crate::data::models::order_line::{NewOrderLine, OrderLine};
use crate::data::models::product::{NewProduct, Product};
use crate::data::repos::traits::catalog_repository::{
    CategoryRepository, OrderLineRepository, ProductRepository,
};
use crate::data::repos::traits::repository::Repository;
use crate::data::repos::traits::store::{Session, Store};
use async_trait::async_trait;
use bigdecimal::{BigDecimal, Zero};
use diesel_async::scoped_futures::ScopedBoxFuture;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Default)]
struct CatalogState {
    categories: BTreeMap<i32, Category>,
    products: BTreeMap<i32, Product>,
    customers: BTreeMap<i32, Customer>,
    orders: BTreeMap<i32, Order>,
    order_lines: BTreeMap<i32, OrderLine>,
}

fn next_id<T>(rows: &BTreeMap<i32, T>) -> i32 {
    rows.keys().next_back().map_or(1, |last| last + 1)
}

/// Process-local store enforcing the same keys and checks as the MySQL schema.
///
/// Units of work run one at a time against a draft copy of the state, which replaces
/// the shared state only when the work succeeds.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<CatalogState>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore::default()
    }

    /// While set, every unit of work and every session call fails with
    /// `StoreError::Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn unit_of_work<'a, T, E, F>(&self, work: F) -> Result<T, E>
    where
        F: for<'s> FnOnce(&'s mut dyn Session) -> ScopedBoxFuture<'a, 's, Result<T, E>>
            + Send
            + 'a,
        T: Send + 'a,
        E: From<StoreError> + Send + 'a,
    {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable.into());
        }

        let mut state = self.state.lock().await;
        let mut draft = state.clone();

        let result = {
            let mut session = MemorySession {
                state: &mut draft,
                unavailable: &*self.unavailable,
            };
            work(&mut session).await
        };

        if result.is_ok() {
            *state = draft;
        }
        result
    }
}

pub struct MemorySession<'a> {
    state: &'a mut CatalogState,
    unavailable: &'a AtomicBool,
}

impl MemorySession<'_> {
    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl<'a> Repository<Category> for MemorySession<'a> {
    async fn get_by_id(&mut self, id: i32) -> Result<Option<Category>, StoreError> {
        self.check()?;
        Ok(self.state.categories.get(&id).cloned())
    }

    async fn add(&mut self, item: NewCategory) -> Result<Category, StoreError> {
        self.check()?;
        if let Some(parent) = item.parent_id {
            if !self.state.categories.contains_key(&parent) {
                return Err(StoreError::Constraint(format!(
                    "parent category {} does not exist",
                    parent
                )));
            }
        }

        let category = Category {
            category_id: next_id(&self.state.categories),
            name: item.name,
            parent_id: item.parent_id,
        };
        self.state
            .categories
            .insert(category.category_id, category.clone());
        Ok(category)
    }
}

#[async_trait]
impl<'a> Repository<Product> for MemorySession<'a> {
    async fn get_by_id(&mut self, id: i32) -> Result<Option<Product>, StoreError> {
        self.check()?;
        Ok(self.state.products.get(&id).cloned())
    }

    async fn add(&mut self, item: NewProduct) -> Result<Product, StoreError> {
        self.check()?;
        if item.quantity < BigDecimal::zero() {
            return Err(StoreError::Constraint("product quantity must be >= 0".into()));
        }
        if item.price < BigDecimal::zero() {
            return Err(StoreError::Constraint("product price must be >= 0".into()));
        }
        if let Some(category) = item.category_id {
            if !self.state.categories.contains_key(&category) {
                return Err(StoreError::Constraint(format!(
                    "category {} does not exist",
                    category
                )));
            }
        }

        let product = Product {
            product_id: next_id(&self.state.products),
            name: item.name,
            quantity: item.quantity,
            price: item.price,
            category_id: item.category_id,
        };
        self.state
            .products
            .insert(product.product_id, product.clone());
        Ok(product)
    }
}

#[async_trait]
impl<'a> Repository<Customer> for MemorySession<'a> {
    async fn get_by_id(&mut self, id: i32) -> Result<Option<Customer>, StoreError> {
        self.check()?;
        Ok(self.state.customers.get(&id).cloned())
    }

    async fn add(&mut self, item: NewCustomer) -> Result<Customer, StoreError> {
        self.check()?;
        let customer = Customer {
            customer_id: next_id(&self.state.customers),
            name: item.name,
            address: item.address,
        };
        self.state
            .customers
            .insert(customer.customer_id, customer.clone());
        Ok(customer)
    }
}

#[async_trait]
impl<'a> Repository<Order> for MemorySession<'a> {
    async fn get_by_id(&mut self, id: i32) -> Result<Option<Order>, StoreError> {
        self.check()?;
        Ok(self.state.orders.get(&id).cloned())
    }

    async fn add(&mut self, item: NewOrder) -> Result<Order, StoreError> {
        self.check()?;
        if let Some(customer) = item.customer_id {
            if !self.state.customers.contains_key(&customer) {
                return Err(StoreError::Constraint(format!(
                    "customer {} does not exist",
                    customer
                )));
            }
        }

        let order = Order {
            order_id: next_id(&self.state.orders),
            customer_id: item.customer_id,
            created_at: chrono::Utc::now().naive_utc(),
        };
        self.state.orders.insert(order.order_id, order.clone());
        Ok(order)
    }
}

#[async_trait]
impl<'a> Repository<OrderLine> for MemorySession<'a> {
    async fn get_by_id(&mut self, id: i32) -> Result<Option<OrderLine>, StoreError> {
        self.check()?;
        Ok(self.state.order_lines.get(&id).cloned())
    }

    async fn add(&mut self, item: NewOrderLine) -> Result<OrderLine, StoreError> {
        self.check()?;
        if !self.state.orders.contains_key(&item.order_id) {
            return Err(StoreError::Constraint(format!(
                "order {} does not exist",
                item.order_id
            )));
        }
        if !self.state.products.contains_key(&item.product_id) {
            return Err(StoreError::Constraint(format!(
                "product {} does not exist",
                item.product_id
            )));
        }
        if item.quantity <= BigDecimal::zero() {
            return Err(StoreError::Constraint("order line quantity must be > 0".into()));
        }
        let duplicate = self
            .state
            .order_lines
            .values()
            .any(|line| line.order_id == item.order_id && line.product_id == item.product_id);
        if duplicate {
            return Err(StoreError::Constraint(format!(
                "order {} already has a line for product {}",
                item.order_id, item.product_id
            )));
        }

        let line = OrderLine {
            order_line_id: next_id(&self.state.order_lines),
            order_id: item.order_id,
            product_id: item.product_id,
            quantity: item.quantity,
        };
        self.state
            .order_lines
            .insert(line.order_line_id, line.clone());
        Ok(line)
    }
}

#[async_trait]
impl<'a> CategoryRepository for MemorySession<'a> {
    async fn get_all_flat(&mut self) -> Result<Vec<Category>, StoreError> {
        self.check()?;
        let mut rows: Vec<Category> = self.state.categories.values().cloned().collect();
        rows.sort_by(|a, b| {
            (a.parent_id, &a.name, a.category_id).cmp(&(b.parent_id, &b.name, b.category_id))
        });
        Ok(rows)
    }

    async fn count_products_by_category(&mut self) -> Result<HashMap<i32, i64>, StoreError> {
        self.check()?;
        let mut counts = HashMap::new();
        for category in self.state.products.values().filter_map(|p| p.category_id) {
            *counts.entry(category).or_insert(0) += 1;
        }
        Ok(counts)
    }
}

#[async_trait]
impl<'a> ProductRepository for MemorySession<'a> {
    async fn get_all(&mut self) -> Result<Vec<Product>, StoreError> {
        self.check()?;
        Ok(self.state.products.values().cloned().collect())
    }
}

#[async_trait]
impl<'a> OrderLineRepository for MemorySession<'a> {
    async fn get_by_order_and_product(
        &mut self,
        order_id: i32,
        product_id: i32,
    ) -> Result<Option<OrderLine>, StoreError> {
        self.check()?;
        Ok(self
            .state
            .order_lines
            .values()
            .find(|line| line.order_id == order_id && line.product_id == product_id)
            .cloned())
    }

    async fn update_quantity(
        &mut self,
        order_line_id: i32,
        quantity: BigDecimal,
    ) -> Result<OrderLine, StoreError> {
        self.check()?;
        if quantity <= BigDecimal::zero() {
            return Err(StoreError::Constraint("order line quantity must be > 0".into()));
        }

        let line = self
            .state
            .order_lines
            .get_mut(&order_line_id)
            .ok_or(StoreError::Database(diesel::result::Error::NotFound))?;
        line.quantity = quantity;
        Ok(line.clone())
    }
}
