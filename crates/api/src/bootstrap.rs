//! Startup sample data loading.
//!
//! Clears both collections, then seeds the fixed sample rows into whichever
//! collection is empty. Runs before the server starts accepting requests and
//! is gated by the `TAPHOUSE_SEED` configuration flag.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use taphouse_core::{Beer, Customer};

use crate::db::{BeerRepository, CustomerRepository, RepositoryError};

/// Clear and reseed the sample data.
///
/// # Errors
///
/// Returns `RepositoryError` if a store call fails.
pub async fn seed(
    beers: &dyn BeerRepository,
    customers: &dyn CustomerRepository,
) -> Result<(), RepositoryError> {
    beers.delete_all().await?;
    if beers.count().await? == 0 {
        let now = Utc::now();
        for beer in sample_beers(now) {
            beers.save(beer).await?;
        }
        tracing::info!("seeded beer collection");
    }

    customers.delete_all().await?;
    if customers.count().await? == 0 {
        let now = Utc::now();
        for customer in sample_customers(now) {
            customers.save(customer).await?;
        }
        tracing::info!("seeded customer collection");
    }

    Ok(())
}

fn sample_beers(now: DateTime<Utc>) -> Vec<Beer> {
    vec![
        sample_beer("Galaxy Cat", "Pale Ale", "12356", Decimal::new(1299, 2), 122, now),
        sample_beer("Crank", "Pale Ale", "12356222", Decimal::new(1199, 2), 392, now),
        sample_beer("Sunshine City", "IPA", "12356", Decimal::new(1399, 2), 144, now),
    ]
}

fn sample_beer(
    name: &str,
    style: &str,
    upc: &str,
    price: Decimal,
    quantity_on_hand: i32,
    now: DateTime<Utc>,
) -> Beer {
    Beer {
        id: None,
        beer_name: Some(name.to_owned()),
        beer_style: Some(style.to_owned()),
        upc: Some(upc.to_owned()),
        price: Some(price),
        quantity_on_hand: Some(quantity_on_hand),
        created_date: now,
        last_modified_date: now,
    }
}

fn sample_customers(now: DateTime<Utc>) -> Vec<Customer> {
    ["Bobby Tables", "Joan Rivers"]
        .into_iter()
        .map(|name| Customer {
            id: None,
            customer_name: Some(name.to_owned()),
            created_date: now,
            last_modified_date: now,
        })
        .collect()
}
