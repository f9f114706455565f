//! Storefront demo session against a file-backed slot.
//!
//! Walks the full flow once: log in, load the catalog, filter it, fill the
//! cart, print the order summary, check out.

use anyhow::Context;

use selvedge_auth::Session;
use selvedge_cart::{CartStore, ShippingPolicy};
use selvedge_catalog::{
    Category, FilterSpec, FixtureSource, PriceBounds, apply_filters, featured, load_catalog,
};
use selvedge_storage::JsonFileStore;

fn main() -> anyhow::Result<()> {
    selvedge_observability::init();

    let path = std::env::var("SELVEDGE_SESSION_FILE")
        .unwrap_or_else(|_| "selvedge-session.json".to_string());
    let session = Session::new(JsonFileStore::new(&path));
    if !session.is_logged_in() {
        tracing::info!("no session token; simulating login");
        session.log_in("demo-token");
    }

    let products = load_catalog(&FixtureSource);
    let bounds = PriceBounds::of(&products);
    tracing::info!(count = products.len(), min = bounds.min, max = bounds.max, "catalog loaded");

    println!("Featured:");
    for product in featured(&products, 3) {
        println!("  {} - {}", product.name(), product.price());
    }

    let mut spec = FilterSpec::within(bounds);
    spec.toggle_category(Category::TShirts);
    let visible = apply_filters(&products, &spec);
    println!("\nT-shirts ({}):", visible.len());
    for product in &visible {
        println!("  {} - {}", product.name(), product.price());
    }

    let mut cart = CartStore::load(JsonFileStore::new(&path));
    let first = visible
        .first()
        .context("fixture catalog has no t-shirts")?;
    cart.add(first, 2);
    if let Some(jeans) = products.iter().find(|p| p.category() == Category::Jeans) {
        cart.add_one(jeans);
    }

    let policy = ShippingPolicy::default();
    let totals = cart.totals(&policy);
    println!("\nCart ({} items):", cart.item_count());
    for line in cart.lines() {
        println!("  {} x {} - {}", line.quantity, line.name, line.total());
    }
    println!("Subtotal: {}", totals.subtotal);
    println!("Shipping: {}", totals.shipping);
    println!("Total:    {}", totals.total);

    let confirmation = cart
        .checkout(&policy)
        .context("checkout on a non-empty cart must confirm")?;
    println!("\nOrder {} placed for {}", confirmation.order_id, confirmation.totals.total);

    Ok(())
}
