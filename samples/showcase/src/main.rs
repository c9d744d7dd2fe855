//! Showcase Application Entry Point
//!
//! Builds integer, string and floating-point containers and prints each of
//! them in every selected traversal order.
//!
//! # Configuration
//!
//! - `RUST_LOG`: tracing filter (default `info,orderly=debug`)
//! - `ORDERLY_ORDERS`: comma-separated order names to print
//!   (e.g. `ascending,middle_out`); unset prints all six

use std::env;
use std::fmt::Display;

use orderly::{OrderedContainer, TraversalOrder};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const ORDERS_VARIABLE: &str = "ORDERLY_ORDERS";

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,orderly=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let orders = selected_orders();
    tracing::info!(count = orders.len(), "Starting orderly showcase");

    let mut integers = OrderedContainer::new();
    for value in [7, 15, 6, 1, 2] {
        integers.add(value);
    }
    print_section("INTEGER CONTAINER", &integers, &orders, |order| {
        integers.traverse(order).collect()
    });

    let strings: OrderedContainer<String> = ["zebra", "apple", "dog", "cat", "bird"]
        .into_iter()
        .map(String::from)
        .collect();
    print_section("STRING CONTAINER", &strings, &orders, |order| {
        strings.traverse(order).collect()
    });

    // f64 has no total order, so sorting orders use total_cmp.
    let floats: OrderedContainer<f64> = [3.25, 2.75, 9.5, 1.5, 6.125].into_iter().collect();
    print_section("DOUBLE CONTAINER", &floats, &orders, |order| {
        floats.traverse_by(order, f64::total_cmp).collect()
    });

    let mut removals = integers.clone();
    match removals.remove(&6) {
        Ok(removed) => println!("\nRemoved {removed} element(s) equal to 6: {removals}"),
        Err(error) => tracing::warn!("Unexpected removal failure: {error}"),
    }
    if let Err(error) = removals.remove(&100) {
        tracing::warn!("Removing 100 failed as expected: {error}");
    }

    tracing::info!("Orderly showcase finished");
}

/// Reads the orders to print from the environment, skipping unknown names.
fn selected_orders() -> Vec<TraversalOrder> {
    let Ok(raw) = env::var(ORDERS_VARIABLE) else {
        return TraversalOrder::ALL.to_vec();
    };

    let orders: Vec<TraversalOrder> = raw
        .split(',')
        .filter(|name| !name.trim().is_empty())
        .filter_map(|name| match name.parse() {
            Ok(order) => Some(order),
            Err(error) => {
                tracing::warn!("Ignoring {ORDERS_VARIABLE} entry: {error}");
                None
            }
        })
        .collect();

    if orders.is_empty() {
        tracing::warn!("{ORDERS_VARIABLE} selected no valid order, printing all");
        return TraversalOrder::ALL.to_vec();
    }
    orders
}

fn print_section<T, F>(
    title: &str,
    container: &OrderedContainer<T>,
    orders: &[TraversalOrder],
    traverse: F,
) where
    T: Display,
    F: Fn(TraversalOrder) -> Vec<T>,
{
    println!("\n=== {title} ===");
    println!("Size of container: {}", container.size());
    println!("Container: {container}");
    for &order in orders {
        let line: Vec<String> = traverse(order).iter().map(ToString::to_string).collect();
        println!("{order}: {}", line.join(" "));
    }
}
