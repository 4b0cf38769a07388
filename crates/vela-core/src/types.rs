//! # View Model Types
//!
//! Types mirroring the REST backend's JSON contracts.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         View Models                                     │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │    Customer     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id, tenant_id  │   │  id, tenant_id  │   │  id, tenant_id  │       │
//! │  │  category_id    │   │  order_number   │   │  name, email    │       │
//! │  │  price, sku     │   │  status, totals │   │  phone          │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Role       │   │   OrderStatus   │   │   ReportType    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Admin          │   │  Pending..      │   │  Sales          │       │
//! │  │  TenantOwner    │   │  Cancelled      │   │  Financial, ..  │       │
//! │  │  Staff, Client  │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Conventions
//! - Ids are backend-issued integers, never generated locally
//! - Every entity carries `tenant_id` (multi-tenant schema)
//! - Monetary amounts are `f64` because the backend's JSON uses decimal
//!   numbers; this layer does not do arithmetic on them
//! - Field names match the backend's snake_case JSON exactly

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Roles & Users
// =============================================================================

/// Access role of a user within a tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform administrator (cross-tenant).
    Admin,
    /// Owner of a tenant.
    TenantOwner,
    /// Staff member of a tenant.
    Staff,
    /// End customer account.
    Client,
}

impl Role {
    /// Whether this role may manage other users.
    pub fn can_manage_users(&self) -> bool {
        matches!(self, Role::Admin | Role::TenantOwner)
    }

    /// Stable string form used by the session store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::TenantOwner => "tenant_owner",
            Role::Staff => "staff",
            Role::Client => "client",
        }
    }

    /// Parses the session-store string form.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "admin" => Some(Role::Admin),
            "tenant_owner" => Some(Role::TenantOwner),
            "staff" => Some(Role::Staff),
            "client" => Some(Role::Client),
            _ => None,
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Staff
    }
}

/// A user account.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub id: i64,
    pub tenant_id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
    pub phone: Option<String>,
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
    #[ts(as = "Option<String>")]
    pub updated_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Categories & Products
// =============================================================================

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: i64,
    pub tenant_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    /// Populated by list endpoints that aggregate product counts.
    pub products_count: Option<u64>,
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
    #[ts(as = "Option<String>")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Inventory record attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Stock {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub reserved_quantity: i64,
    pub min_stock_level: i64,
    pub allow_backorder: bool,
}

/// A product available for ordering.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    pub id: i64,
    pub tenant_id: i64,
    pub category_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    /// Unit price as the backend reports it (decimal).
    pub price: f64,
    /// Stock Keeping Unit - business identifier.
    pub sku: Option<String>,
    pub is_active: bool,
    pub stock_quantity: Option<i64>,
    pub image: Option<String>,
    /// Arbitrary attributes the backend attaches (color, size, ...).
    #[ts(type = "any | null")]
    pub attributes: Option<serde_json::Value>,
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
    #[ts(as = "Option<String>")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Embedded category when the endpoint expands it.
    pub category: Option<Category>,
    /// Embedded inventory record when the endpoint expands it.
    pub stock: Option<Stock>,
}

impl Product {
    /// Whether stock is at or below `threshold`.
    ///
    /// Products without inventory tracking never report low stock.
    pub fn is_low_stock(&self, threshold: i64) -> bool {
        matches!(self.stock_quantity, Some(qty) if qty <= threshold)
    }
}

// =============================================================================
// Customers
// =============================================================================

/// A customer of a tenant.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    pub id: i64,
    pub tenant_id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Free-form preference blob (delivery notes, favourites, ...).
    #[ts(type = "any | null")]
    pub preferences: Option<serde_json::Value>,
    pub is_active: bool,
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
    #[ts(as = "Option<String>")]
    pub updated_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Orders
// =============================================================================

/// The status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Paid,
    Cancelled,
}

impl OrderStatus {
    /// Whether the order can still be cancelled.
    pub fn is_cancellable(&self) -> bool {
        matches!(
            self,
            OrderStatus::Pending | OrderStatus::Confirmed | OrderStatus::Processing
        )
    }

    /// The wire value, as the backend spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Paid => "paid",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// A postal address attached to an order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// A line item of an order.
/// Uses snapshot pattern to freeze product data at order time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderProduct {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_price: f64,
    /// Product data frozen at order time.
    #[ts(type = "any | null")]
    pub product_snapshot: Option<serde_json::Value>,
    /// Embedded live product when the endpoint expands it.
    pub product: Option<Product>,
}

/// An order placed by a customer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    pub id: i64,
    pub tenant_id: i64,
    pub user_id: Option<i64>,
    /// Human-readable business identifier (e.g. "ORD-2025-00042").
    pub order_number: String,
    pub status: OrderStatus,
    pub subtotal: f64,
    pub tax_amount: Option<f64>,
    pub shipping_amount: Option<f64>,
    pub total_amount: f64,
    pub customer_id: i64,
    pub shipping_address: Option<Address>,
    pub billing_address: Option<Address>,
    pub notes: Option<String>,
    #[ts(as = "Option<String>")]
    pub confirmed_at: Option<DateTime<Utc>>,
    #[ts(as = "Option<String>")]
    pub shipped_at: Option<DateTime<Utc>>,
    #[ts(as = "Option<String>")]
    pub delivered_at: Option<DateTime<Utc>>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
    pub customer: Option<Customer>,
    pub user: Option<User>,
    #[serde(default)]
    pub order_products: Vec<OrderProduct>,
}

/// One product + quantity in an order being created.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderItemInput {
    pub product_id: i64,
    pub quantity: i64,
    /// Price override; omitted to use the product's current price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

// =============================================================================
// Reports
// =============================================================================

/// Kind of a saved report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    Sales,
    Financial,
    Customers,
    Products,
    Inventory,
}

/// A saved report.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Report {
    pub id: i64,
    pub tenant_id: i64,
    pub user_id: i64,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub name: String,
    pub description: Option<String>,
    /// Filters the report was generated with.
    #[ts(type = "any")]
    pub filters: serde_json::Value,
    /// Generated report payload.
    #[ts(type = "any")]
    pub data: serde_json::Value,
    #[ts(as = "String")]
    pub generated_at: DateTime<Utc>,
    pub is_public: bool,
}

/// Count/total pair per order status, used by several report payloads.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusBucket {
    pub count: u64,
    pub total: f64,
}

/// A date range as the backend reports it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportPeriod {
    pub start_date: String,
    pub end_date: String,
}

/// Sales report payload.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SalesReport {
    pub period: ReportPeriod,
    pub summary: SalesSummary,
    pub orders_by_status: HashMap<OrderStatus, StatusBucket>,
    pub top_products: Vec<TopProduct>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SalesSummary {
    pub total_sales: f64,
    pub total_orders: u64,
    pub average_order_value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TopProduct {
    pub id: i64,
    pub name: String,
    pub total_quantity: i64,
    pub total_revenue: f64,
}

/// Financial report payload.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FinancialReport {
    pub summary: FinancialSummary,
    /// Revenue keyed by "YYYY-MM".
    pub revenue_by_month: HashMap<String, f64>,
    pub period: ReportPeriod,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FinancialSummary {
    pub total_revenue: f64,
    pub total_costs: f64,
    pub profit: f64,
    pub profit_margin: f64,
}

/// Customers report payload.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomersReport {
    pub summary: CustomersSummary,
    pub top_customers: Vec<TopCustomer>,
    pub customers: Vec<Customer>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomersSummary {
    pub total_customers: u64,
    pub active_customers: u64,
    pub new_customers: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TopCustomer {
    pub customer_id: i64,
    pub customer_name: String,
    pub total_orders: u64,
    pub total_spent: f64,
}

/// Products report payload.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductsReport {
    pub summary: ProductsSummary,
    pub products_by_category: HashMap<String, u64>,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductsSummary {
    pub total_products: u64,
    pub active_products: u64,
    pub low_stock_products: u64,
}

/// Dashboard payload shown on the admin landing page.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dashboard {
    pub summary: SalesSummary,
    pub today: PeriodStats,
    pub this_month: PeriodStats,
    pub top_products: Vec<TopProduct>,
    pub orders_by_status: HashMap<OrderStatus, StatusBucket>,
    pub daily_sales: Vec<DailySales>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PeriodStats {
    pub revenue: f64,
    pub sales_count: u64,
    pub customers_served: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailySales {
    /// Day in "YYYY-MM-DD" form.
    pub date: String,
    pub revenue: f64,
}

/// Named period understood by the per-customer report endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CustomerReportPeriod {
    #[serde(rename = "last_week")]
    LastWeek,
    #[serde(rename = "last_15_days")]
    Last15Days,
    #[serde(rename = "last_month")]
    LastMonth,
    #[serde(rename = "last_quarter")]
    LastQuarter,
}

impl CustomerReportPeriod {
    /// Wire form sent as the `period` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerReportPeriod::LastWeek => "last_week",
            CustomerReportPeriod::Last15Days => "last_15_days",
            CustomerReportPeriod::LastMonth => "last_month",
            CustomerReportPeriod::LastQuarter => "last_quarter",
        }
    }
}

/// Per-customer purchase history report.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomerReport {
    pub customer: CustomerReportIdentity,
    pub summary: CustomerReportSummary,
    pub recent_orders: Vec<CustomerRecentOrder>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomerReportIdentity {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomerReportSummary {
    pub total_orders: u64,
    pub total_spent: f64,
    pub average_order_value: f64,
    pub last_order_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomerRecentOrder {
    pub id: i64,
    pub order_number: String,
    pub status: OrderStatus,
    pub total_amount: f64,
    pub created_at: String,
    #[serde(default)]
    pub products: Vec<CustomerOrderLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomerOrderLine {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    pub total_price: f64,
}

// =============================================================================
// Auth Requests & Responses
// =============================================================================

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Returned by login and register: the account plus a bearer token.
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

// =============================================================================
// Create/Update Requests
// =============================================================================
// Update requests serialize only the fields being changed; the backend
// treats absent fields as "leave unchanged".

#[derive(Debug, Clone, Default, Serialize, TS)]
#[ts(export)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, TS)]
#[ts(export)]
pub struct UpdateCategoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, TS)]
#[ts(export)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, TS)]
#[ts(export)]
pub struct UpdateProductRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl UpdateProductRequest {
    /// Request flipping only the active flag.
    pub fn set_active(is_active: bool) -> Self {
        UpdateProductRequest {
            is_active: Some(is_active),
            ..Default::default()
        }
    }

    /// Request adjusting only the stock level.
    pub fn set_stock(stock_quantity: i64) -> Self {
        UpdateProductRequest {
            stock_quantity: Some(stock_quantity),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, TS)]
#[ts(export)]
pub struct CreateCustomerRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(type = "any | null")]
    pub preferences: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, TS)]
#[ts(export)]
pub struct UpdateCustomerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(type = "any | null")]
    pub preferences: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Looks a customer up by phone, creating one on the fly if unknown.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct CustomerIdentifyRequest {
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export)]
pub struct CustomerIdentifyResponse {
    pub customer: Customer,
    pub is_new: bool,
}

#[derive(Debug, Clone, Default, Serialize, TS)]
#[ts(export)]
pub struct CreateOrderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    pub products: Vec<OrderItemInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, TS)]
#[ts(export)]
pub struct UpdateOrderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
}

/// Envelope returned by the create-order endpoint.
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export)]
pub struct CreateOrderResponse {
    pub order: Order,
}

/// Moves many orders to one status in a single request.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct BulkStatusUpdateRequest {
    pub order_ids: Vec<i64>,
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export)]
pub struct BulkStatusUpdateResponse {
    pub message: String,
    pub updated_count: u64,
    pub failed_count: u64,
    #[serde(default)]
    pub updated_orders: Vec<BulkUpdatedOrder>,
    #[serde(default)]
    pub failed_orders: Vec<BulkFailedOrder>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export)]
pub struct BulkUpdatedOrder {
    pub id: i64,
    pub order_number: String,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export)]
pub struct BulkFailedOrder {
    pub id: i64,
    pub error: String,
}

/// The public digital menu: tenant branding plus the orderable products.
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export)]
pub struct MenuResponse {
    /// Tenant branding block, shape owned by the backend.
    #[ts(type = "any")]
    pub tenant: serde_json::Value,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// One named time range the order list can be filtered by.
///
/// The key of the enclosing map ("today", "last_week", ...) is the value
/// sent back as the `time_range` query parameter.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TimePeriod {
    pub label: String,
    pub time_range: String,
    pub description: String,
}

/// `{ "time_periods": { "today": {...}, ... } }` envelope.
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export)]
pub struct TimePeriodsResponse {
    #[serde(default)]
    pub time_periods: HashMap<String, TimePeriod>,
}

#[derive(Debug, Clone, Default, Serialize, TS)]
#[ts(export)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, TS)]
#[ts(export)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Plain `{ "message": ... }` acknowledgement (delete endpoints, logout).
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export)]
pub struct MessageResponse {
    pub message: String,
}

// =============================================================================
// List Filters
// =============================================================================
// Filters serialize to query-string pairs; absent fields are omitted
// entirely so the backend applies its defaults.

/// Filters accepted by the product list endpoint.
#[derive(Debug, Clone, Default)]
pub struct ProductFilters {
    pub search: Option<String>,
    pub category_id: Option<i64>,
    pub is_active: Option<bool>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ProductFilters {
    /// Builds the query-string pairs for this filter set.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(search) = &self.search {
            query.push(("search", search.clone()));
        }
        if let Some(category_id) = self.category_id {
            query.push(("category_id", category_id.to_string()));
        }
        push_common(&mut query, self.is_active, self.page, self.per_page);
        query
    }
}

/// Filters accepted by the customer list endpoint.
#[derive(Debug, Clone, Default)]
pub struct CustomerFilters {
    pub search: Option<String>,
    pub is_active: Option<bool>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl CustomerFilters {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(search) = &self.search {
            query.push(("search", search.clone()));
        }
        push_common(&mut query, self.is_active, self.page, self.per_page);
        query
    }
}

/// Filters accepted by the category list endpoint.
#[derive(Debug, Clone, Default)]
pub struct CategoryFilters {
    pub search: Option<String>,
    pub is_active: Option<bool>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl CategoryFilters {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(search) = &self.search {
            query.push(("search", search.clone()));
        }
        push_common(&mut query, self.is_active, self.page, self.per_page);
        query
    }
}

/// Filters accepted by the user list endpoint.
#[derive(Debug, Clone, Default)]
pub struct UserFilters {
    pub search: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl UserFilters {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(search) = &self.search {
            query.push(("search", search.clone()));
        }
        if let Some(role) = self.role {
            query.push(("role", role.as_str().to_string()));
        }
        push_common(&mut query, self.is_active, self.page, self.per_page);
        query
    }
}

/// Filters accepted by the order list endpoint.
#[derive(Debug, Clone, Default)]
pub struct OrderFilters {
    pub search: Option<String>,
    pub status: Option<OrderStatus>,
    pub payment_method: Option<String>,
    /// Inclusive "YYYY-MM-DD" lower bound.
    pub date_from: Option<String>,
    /// Inclusive "YYYY-MM-DD" upper bound.
    pub date_to: Option<String>,
    /// Named range understood by the backend ("today", "last_week", ...).
    pub time_range: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl OrderFilters {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(search) = &self.search {
            query.push(("search", search.clone()));
        }
        if let Some(status) = self.status {
            query.push(("status", status_query_value(status)));
        }
        if let Some(payment_method) = &self.payment_method {
            query.push(("payment_method", payment_method.clone()));
        }
        if let Some(date_from) = &self.date_from {
            query.push(("date_from", date_from.clone()));
        }
        if let Some(date_to) = &self.date_to {
            query.push(("date_to", date_to.clone()));
        }
        if let Some(time_range) = &self.time_range {
            query.push(("time_range", time_range.clone()));
        }
        push_common(&mut query, None, self.page, self.per_page);
        query
    }
}

/// Parameters for the sales/customers/products report endpoints.
#[derive(Debug, Clone, Default)]
pub struct ReportRange {
    /// Inclusive "YYYY-MM-DD" lower bound.
    pub from: Option<String>,
    /// Inclusive "YYYY-MM-DD" upper bound.
    pub to: Option<String>,
    pub status: Option<OrderStatus>,
    /// Persist the generated report server-side.
    pub save_report: bool,
}

impl ReportRange {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(from) = &self.from {
            query.push(("from", from.clone()));
        }
        if let Some(to) = &self.to {
            query.push(("to", to.clone()));
        }
        if let Some(status) = self.status {
            query.push(("status", status_query_value(status)));
        }
        if self.save_report {
            query.push(("save_report", "true".to_string()));
        }
        query
    }
}

/// Parameters for the per-customer report endpoint.
#[derive(Debug, Clone, Default)]
pub struct CustomerReportQuery {
    pub period: Option<CustomerReportPeriod>,
    pub status: Option<OrderStatus>,
    /// Maximum number of recent orders to include.
    pub limit: Option<u32>,
    pub payment_method: Option<String>,
}

impl CustomerReportQuery {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(period) = self.period {
            query.push(("period", period.as_str().to_string()));
        }
        if let Some(status) = self.status {
            query.push(("status", status_query_value(status)));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(payment_method) = &self.payment_method {
            query.push(("payment_method", payment_method.clone()));
        }
        query
    }
}

/// Serializes common pagination/activity filters.
fn push_common(
    query: &mut Vec<(&'static str, String)>,
    is_active: Option<bool>,
    page: Option<u32>,
    per_page: Option<u32>,
) {
    if let Some(is_active) = is_active {
        query.push(("is_active", is_active.to_string()));
    }
    if let Some(per_page) = per_page {
        query.push(("per_page", per_page.to_string()));
    }
    if let Some(page) = page {
        query.push(("page", page.to_string()));
    }
}

/// Snake_case wire form of a status for query strings.
fn status_query_value(status: OrderStatus) -> String {
    // serde's snake_case rename is the single source of truth
    serde_json::to_value(status)
        .ok()
        .and_then(|v| v.as_str().map(String::from))
        .unwrap_or_default()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Admin, Role::TenantOwner, Role::Staff, Role::Client] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("superuser"), None);
    }

    #[test]
    fn test_order_status_wire_form() {
        assert_eq!(status_query_value(OrderStatus::Pending), "pending");
        assert_eq!(status_query_value(OrderStatus::Cancelled), "cancelled");
    }

    #[test]
    fn test_order_status_cancellable() {
        assert!(OrderStatus::Pending.is_cancellable());
        assert!(OrderStatus::Processing.is_cancellable());
        assert!(!OrderStatus::Delivered.is_cancellable());
        assert!(!OrderStatus::Cancelled.is_cancellable());
    }

    #[test]
    fn test_update_request_omits_unchanged_fields() {
        let request = UpdateProductRequest::set_active(false);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "is_active": false }));
    }

    #[test]
    fn test_product_filters_query() {
        let filters = ProductFilters {
            search: Some("coffee".to_string()),
            category_id: Some(3),
            is_active: Some(true),
            page: Some(2),
            per_page: Some(20),
        };
        let query = filters.to_query();
        assert!(query.contains(&("search", "coffee".to_string())));
        assert!(query.contains(&("category_id", "3".to_string())));
        assert!(query.contains(&("is_active", "true".to_string())));
        assert!(query.contains(&("page", "2".to_string())));
        assert!(query.contains(&("per_page", "20".to_string())));
    }

    #[test]
    fn test_empty_filters_produce_empty_query() {
        assert!(ProductFilters::default().to_query().is_empty());
        assert!(OrderFilters::default().to_query().is_empty());
        assert!(ReportRange::default().to_query().is_empty());
    }

    #[test]
    fn test_low_stock() {
        let mut product = sample_product();
        product.stock_quantity = Some(3);
        assert!(product.is_low_stock(5));
        product.stock_quantity = Some(10);
        assert!(!product.is_low_stock(5));
        product.stock_quantity = None;
        assert!(!product.is_low_stock(5));
    }

    #[test]
    fn test_order_deserializes_envelope_fields() {
        let json = serde_json::json!({
            "id": 7,
            "tenant_id": 1,
            "user_id": null,
            "order_number": "ORD-2025-00042",
            "status": "pending",
            "subtotal": 90.0,
            "tax_amount": 5.0,
            "shipping_amount": null,
            "total_amount": 95.0,
            "customer_id": 12,
            "shipping_address": null,
            "billing_address": null,
            "notes": null,
            "confirmed_at": null,
            "shipped_at": null,
            "delivered_at": null,
            "created_at": "2025-05-01T12:00:00Z",
            "updated_at": "2025-05-01T12:00:00Z",
            "customer": null,
            "user": null
        });
        let order: Order = serde_json::from_value(json).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        // order_products defaults to empty when the backend omits it
        assert!(order.order_products.is_empty());
    }

    fn sample_product() -> Product {
        Product {
            id: 1,
            tenant_id: 1,
            category_id: None,
            name: "Espresso".to_string(),
            description: None,
            price: 4.5,
            sku: Some("ESP-001".to_string()),
            is_active: true,
            stock_quantity: None,
            image: None,
            attributes: None,
            created_at: None,
            updated_at: None,
            category: None,
            stock: None,
        }
    }
}
