use crate::data::errors::StoreError;
use crate::data::models::category::{Category, NewCategory};
use crate::data::models::customer::{Customer, NewCustomer};
use crate::data::models::order::{NewOrder, Order};
use crate::data::models::product::{NewProduct, Product};
use crate::data::repos::traits::repository::Repository;
use crate::data::repos::traits::store::Session;
use bigdecimal::BigDecimal;

/// Rows created by one seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedSummary {
    pub categories: usize,
    pub products: usize,
    pub customers: usize,
    pub orders: usize,
    /// Id of the demo order, ready for `POST /api/v1/orders/items`.
    pub order_id: i32,
}

/// Loads the demo catalog: two category trees, five stocked products, two customers
/// and one open order. Does nothing when any category already exists.
pub async fn seed_catalog(session: &mut dyn Session) -> Result<Option<SeedSummary>, StoreError> {
    if !session.get_all_flat().await?.is_empty() {
        tracing::info!("Categories already present, skipping seed");
        return Ok(None);
    }

    let mut summary = SeedSummary::default();

    let appliances = add_category(session, &mut summary, "Home Appliances", None).await?;
    let computers = add_category(session, &mut summary, "Computers", None).await?;

    let washers = add_category(session, &mut summary, "Washing Machines", Some(appliances)).await?;
    let fridges = add_category(session, &mut summary, "Refrigerators", Some(appliances)).await?;
    add_category(session, &mut summary, "Televisions", Some(appliances)).await?;

    let single_door = add_category(session, &mut summary, "Single-door", Some(fridges)).await?;
    let double_door = add_category(session, &mut summary, "Double-door", Some(fridges)).await?;

    let laptops = add_category(session, &mut summary, "Laptops", Some(computers)).await?;
    add_category(session, &mut summary, "All-in-ones", Some(computers)).await?;

    let laptops_17 = add_category(session, &mut summary, "17\"", Some(laptops)).await?;
    let laptops_19 = add_category(session, &mut summary, "19\"", Some(laptops)).await?;

    let products = [
        ("Samsung Washing Machine", 5, 35000, washers),
        ("Atlant Single-door Refrigerator", 3, 18000, single_door),
        ("LG Double-door Refrigerator", 4, 45000, double_door),
        ("ASUS 17\" Laptop", 2, 65000, laptops_17),
        ("Dell 19\" Laptop", 3, 72000, laptops_19),
    ];
    for (name, quantity, price, category_id) in products {
        Repository::<Product>::add(
            &mut *session,
            NewProduct {
                name: name.to_string(),
                quantity: BigDecimal::from(quantity),
                price: BigDecimal::from(price),
                category_id: Some(category_id),
            },
        )
        .await?;
        summary.products += 1;
    }

    let customers = [
        ("Horns & Hooves LLC", "Moscow, 1 Lenina St"),
        ("Ivanov Sole Proprietor", "Saint Petersburg, 10 Nevsky Ave"),
    ];
    let mut first_customer = None;
    for (name, address) in customers {
        let customer = Repository::<Customer>::add(
            &mut *session,
            NewCustomer {
                name: name.to_string(),
                address: address.to_string(),
            },
        )
        .await?;
        first_customer.get_or_insert(customer.customer_id);
        summary.customers += 1;
    }

    let order = Repository::<Order>::add(
        &mut *session,
        NewOrder {
            customer_id: first_customer,
        },
    )
    .await?;
    summary.orders += 1;
    summary.order_id = order.order_id;

    tracing::info!(
        categories = summary.categories,
        products = summary.products,
        customers = summary.customers,
        order_id = summary.order_id,
        "Demo catalog seeded"
    );

    Ok(Some(summary))
}

async fn add_category(
    session: &mut dyn Session,
    summary: &mut SeedSummary,
    name: &str,
    parent_id: Option<i32>,
) -> Result<i32, StoreError> {
    let category = Repository::<Category>::add(
        session,
        NewCategory {
            name: name.to_string(),
            parent_id,
        },
    )
    .await?;
    summary.categories += 1;
    Ok(category.category_id)
}
