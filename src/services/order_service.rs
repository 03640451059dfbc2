use crate::data::models::order::Order;
use crate::data::models::order_line::{NewOrderLine, OrderLine};
use crate::data::models::product::Product;
use crate::data::repos::traits::repository::Repository;
use crate::data::repos::traits::store::{Session, Store};
use crate::services::errors::OrderServiceError;
use bigdecimal::{BigDecimal, Zero};
use diesel_async::scoped_futures::ScopedFutureExt;

pub struct OrderService<S> {
    store: S,
}

impl<S: Store> OrderService<S> {
    pub fn new(store: S) -> Self {
        OrderService { store }
    }

    /// Puts `quantity` of a product on an order, adding to an existing line for the same
    /// product. The order's cumulative quantity may not exceed the product's stock.
    ///
    /// `quantity` must already be validated as positive. Stock is read, never decremented:
    /// concurrent calls for different orders each check against the same stock figure.
    pub async fn add_line_to_order(
        &self,
        order_id: i32,
        product_id: i32,
        quantity: BigDecimal,
    ) -> Result<OrderLine, OrderServiceError> {
        self.store
            .unit_of_work(move |session| {
                upsert_order_line(session, order_id, product_id, quantity).scope_boxed()
            })
            .await
    }
}

/// The upsert steps, run inside the caller's unit of work. Nothing is written unless
/// every check passes.
pub async fn upsert_order_line(
    session: &mut dyn Session,
    order_id: i32,
    product_id: i32,
    quantity: BigDecimal,
) -> Result<OrderLine, OrderServiceError> {
    Repository::<Order>::get_by_id(&mut *session, order_id)
        .await?
        .ok_or_else(|| {
            tracing::debug!(order_id, "Order not found");
            OrderServiceError::OrderNotFound(order_id)
        })?;

    let product = Repository::<Product>::get_by_id(&mut *session, product_id)
        .await?
        .ok_or_else(|| {
            tracing::debug!(product_id, "Product not found");
            OrderServiceError::ProductNotFound(product_id)
        })?;

    let existing = session
        .get_by_order_and_product(order_id, product_id)
        .await?;

    let current = existing
        .as_ref()
        .map(|line| line.quantity.clone())
        .unwrap_or_else(BigDecimal::zero);
    let total = &current + &quantity;

    tracing::debug!(
        order_id,
        product_id,
        existing = existing.is_some(),
        current = %current,
        total = %total,
        "Checking stock for order line"
    );

    if product.quantity < total {
        tracing::warn!(
            order_id,
            product_id,
            available = %product.quantity,
            requested = %total,
            "Insufficient stock for order line"
        );
        return Err(OrderServiceError::InsufficientStock {
            available: product.quantity,
            requested: total,
        });
    }

    let line = match existing {
        Some(line) => {
            let updated = session.update_quantity(line.order_line_id, total).await?;
            tracing::info!(
                order_line_id = updated.order_line_id,
                quantity = %updated.quantity,
                "Order line quantity updated"
            );
            updated
        }
        None => {
            let created = Repository::<OrderLine>::add(
                &mut *session,
                NewOrderLine {
                    order_id,
                    product_id,
                    quantity,
                },
            )
            .await?;
            tracing::info!(
                order_line_id = created.order_line_id,
                quantity = %created.quantity,
                "Order line created"
            );
            created
        }
    };

    Ok(line)
}
