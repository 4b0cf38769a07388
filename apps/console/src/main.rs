//! # Vela Console
//!
//! Diagnostic CLI driving the admin controllers against a live backend.
//!
//! ```text
//! vela dashboard                  today/week/month stats
//! vela products [page]            one page of the product catalog
//! vela orders [pages]             the order feed, accumulated
//! vela customers <term>           incremental customer search
//! ```
//!
//! Credentials and endpoints come from the environment:
//! `VELA_API_URL`, `VELA_TENANT_ID`, `VELA_EMAIL`, `VELA_PASSWORD`.

use std::env;

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use vela_admin::{
    AuthController, CustomerSearchController, DashboardController, NotificationHub,
    OrdersController, ProductsController,
};
use vela_client::{Api, ApiConfig, MemorySession};
use vela_core::Severity;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| "dashboard".to_string());

    let config = ApiConfig::from_env_or(None, None);
    info!(base_url = %config.base_url, "Connecting");

    let session = MemorySession::shared();
    let api = Api::new(config, session).context("Failed to build the API client")?;
    let hub = NotificationHub::new();

    login(&api, &hub).await?;

    match command.as_str() {
        "dashboard" => dashboard(&api, &hub).await,
        "products" => products(&api, &hub, parse_or(args.next(), 1)).await,
        "orders" => orders(&api, &hub, parse_or(args.next(), 1)).await,
        "customers" => {
            let term = args.next().context("Usage: vela customers <term>")?;
            customers(&api, &hub, term).await
        }
        other => bail!("Unknown command: {other}"),
    }?;

    drain_notifications(&hub);
    Ok(())
}

fn parse_or(arg: Option<String>, default: u32) -> u32 {
    arg.and_then(|s| s.parse().ok()).unwrap_or(default)
}

async fn login(api: &Api, hub: &NotificationHub) -> Result<()> {
    let email = env::var("VELA_EMAIL").context("VELA_EMAIL is not set")?;
    let password = env::var("VELA_PASSWORD").context("VELA_PASSWORD is not set")?;

    let auth = AuthController::new(api.clone(), hub.clone());
    let user = auth.login(&email, &password).await;
    match user {
        Some(user) => {
            info!(user = %user.name, role = user.role.as_str(), "Logged in");
            Ok(())
        }
        None => {
            drain_notifications(hub);
            bail!("Login failed")
        }
    }
}

async fn dashboard(api: &Api, hub: &NotificationHub) -> Result<()> {
    let controller = DashboardController::open(api.clone(), hub.clone(), true).await;
    let Some(dashboard) = controller.data() else {
        bail!("Dashboard load failed");
    };

    println!("Dashboard");
    for (label, stats) in [
        ("today", &dashboard.today),
        ("this month", &dashboard.this_month),
    ] {
        println!(
            "  {label:<11} {:>5} sales  {:>10.2} revenue  {:>5} customers",
            stats.sales_count, stats.revenue, stats.customers_served
        );
    }
    println!("  by status:");
    for (status, bucket) in &dashboard.orders_by_status {
        println!("    {:<10} {:>5}  {:>10.2}", status.as_str(), bucket.count, bucket.total);
    }
    Ok(())
}

async fn products(api: &Api, hub: &NotificationHub, page: u32) -> Result<()> {
    let controller = ProductsController::open(api.clone(), hub.clone(), true).await;
    if page > 1 {
        controller.go_to_page(page).await;
    }

    let Some(items) = controller.items() else {
        bail!("Product list load failed");
    };
    let pagination = controller.pagination();
    println!(
        "Products (page {} of {}, {} total)",
        pagination.current_page(),
        pagination.total_pages(),
        pagination.total()
    );
    for product in items {
        let marker = if product.is_active { ' ' } else { 'x' };
        println!("  [{marker}] #{:<5} {:<32} {:>8.2}", product.id, product.name, product.price);
    }
    Ok(())
}

async fn orders(api: &Api, hub: &NotificationHub, pages: u32) -> Result<()> {
    let controller = OrdersController::open(api.clone(), hub.clone(), true).await;
    for _ in 1..pages {
        if !controller.has_more_pages() {
            break;
        }
        controller.load_more().await;
    }

    let Some(items) = controller.items() else {
        bail!("Order feed load failed");
    };
    println!("Orders ({} loaded, more: {})", items.len(), controller.has_more_pages());
    for order in items {
        println!(
            "  {:<16} {:<10} {:>10.2}",
            order.order_number,
            order.status.as_str(),
            order.total_amount
        );
    }
    Ok(())
}

async fn customers(api: &Api, hub: &NotificationHub, term: String) -> Result<()> {
    let search = CustomerSearchController::new(api.clone(), hub.clone());
    if search.search(&term).await.is_none() {
        bail!("Search needs at least 2 characters");
    }

    let results = search.results();
    println!("Customers matching {term:?} ({})", results.len());
    for customer in results {
        println!(
            "  #{:<5} {:<28} {}",
            customer.id,
            customer.name,
            customer.phone.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

/// Prints anything the controllers toasted, so failures are visible even
/// when the command itself bailed earlier.
fn drain_notifications(hub: &NotificationHub) {
    for notification in hub.snapshot() {
        let tag = match notification.severity {
            Severity::Success => "ok",
            Severity::Error => "error",
            Severity::Warning => "warn",
            Severity::Info => "info",
        };
        eprintln!("[{tag}] {}", notification.message);
    }
}
