//! # Reports & Dashboard Controllers
//!
//! Each report kind gets its own container so the screens can load them
//! independently (the reports page renders four panels side by side).

use vela_client::Api;
use vela_core::{
    CustomerReport, CustomerReportQuery, CustomersReport, Dashboard, FinancialReport,
    ProductsReport, Report, ReportRange, ResourceState, SalesReport,
};

use crate::notify::NotificationHub;
use crate::resource::{ExecuteOptions, Resource};

/// Report panels for the reports screen.
#[derive(Debug, Clone)]
pub struct ReportsController {
    api: Api,
    hub: NotificationHub,
    sales: Resource<SalesReport>,
    financial: Resource<FinancialReport>,
    customers: Resource<CustomersReport>,
    products: Resource<ProductsReport>,
    customer: Resource<CustomerReport>,
    saved: Resource<Vec<Report>>,
}

impl ReportsController {
    pub fn new(api: Api, hub: NotificationHub) -> Self {
        ReportsController {
            sales: Resource::new(),
            financial: Resource::new(),
            customers: Resource::new(),
            products: Resource::new(),
            customer: Resource::new(),
            saved: Resource::new(),
            api,
            hub,
        }
    }

    /// Loads the sales panel for `range`.
    pub async fn load_sales(&self, range: ReportRange) -> Option<SalesReport> {
        let service = self.api.reports();
        let hub = self.hub.clone();
        self.sales
            .execute_with(
                || async move { service.sales(&range).await },
                ExecuteOptions::default().on_error(move |message| {
                    hub.error(message.to_string());
                }),
            )
            .await
    }

    /// Loads the financial panel for `range`.
    pub async fn load_financial(&self, range: ReportRange) -> Option<FinancialReport> {
        let service = self.api.reports();
        let hub = self.hub.clone();
        self.financial
            .execute_with(
                || async move { service.financial(&range).await },
                ExecuteOptions::default().on_error(move |message| {
                    hub.error(message.to_string());
                }),
            )
            .await
    }

    /// Loads the customers panel for `range`.
    pub async fn load_customers(&self, range: ReportRange) -> Option<CustomersReport> {
        let service = self.api.reports();
        let hub = self.hub.clone();
        self.customers
            .execute_with(
                || async move { service.customers(&range).await },
                ExecuteOptions::default().on_error(move |message| {
                    hub.error(message.to_string());
                }),
            )
            .await
    }

    /// Loads the products panel for `range`.
    pub async fn load_products(&self, range: ReportRange) -> Option<ProductsReport> {
        let service = self.api.reports();
        let hub = self.hub.clone();
        self.products
            .execute_with(
                || async move { service.products(&range).await },
                ExecuteOptions::default().on_error(move |message| {
                    hub.error(message.to_string());
                }),
            )
            .await
    }

    /// Loads one customer's purchase history report.
    pub async fn load_customer(
        &self,
        customer_id: i64,
        query: CustomerReportQuery,
    ) -> Option<CustomerReport> {
        let service = self.api.reports();
        let hub = self.hub.clone();
        self.customer
            .execute_with(
                || async move { service.customer(customer_id, &query).await },
                ExecuteOptions::default().on_error(move |message| {
                    hub.error(message.to_string());
                }),
            )
            .await
    }

    /// Loads the saved-reports list.
    pub async fn load_saved(&self) -> Option<Vec<Report>> {
        let service = self.api.reports();
        let hub = self.hub.clone();
        self.saved
            .execute_with(
                || async move { service.saved().await.map(|page| page.data) },
                ExecuteOptions::default().on_error(move |message| {
                    hub.error(message.to_string());
                }),
            )
            .await
    }

    // -------------------------------------------------------------------------
    // Views
    // -------------------------------------------------------------------------

    pub fn sales(&self) -> ResourceState<SalesReport> {
        self.sales.snapshot()
    }

    pub fn financial(&self) -> ResourceState<FinancialReport> {
        self.financial.snapshot()
    }

    pub fn customers(&self) -> ResourceState<CustomersReport> {
        self.customers.snapshot()
    }

    pub fn products(&self) -> ResourceState<ProductsReport> {
        self.products.snapshot()
    }

    pub fn customer(&self) -> ResourceState<CustomerReport> {
        self.customer.snapshot()
    }

    pub fn saved(&self) -> ResourceState<Vec<Report>> {
        self.saved.snapshot()
    }
}

/// Dashboard payload for the landing page.
#[derive(Debug, Clone)]
pub struct DashboardController {
    api: Api,
    hub: NotificationHub,
    dashboard: Resource<Dashboard>,
}

impl DashboardController {
    pub fn new(api: Api, hub: NotificationHub) -> Self {
        DashboardController {
            api,
            hub,
            dashboard: Resource::new(),
        }
    }

    /// Creates the controller, loading immediately when `auto_load` is set.
    pub async fn open(api: Api, hub: NotificationHub, auto_load: bool) -> Self {
        let controller = Self::new(api, hub);
        if auto_load {
            controller.load().await;
        }
        controller
    }

    /// Loads (or reloads) the dashboard payload.
    ///
    /// Keeps the previous payload visible while refreshing so the landing
    /// page never flashes empty.
    pub async fn load(&self) -> Option<Dashboard> {
        let service = self.api.reports();
        let hub = self.hub.clone();
        self.dashboard
            .execute_with(
                || async move { service.dashboard().await },
                ExecuteOptions::default()
                    .keep_state()
                    .on_error(move |message| {
                        hub.error(message.to_string());
                    }),
            )
            .await
    }

    /// The dashboard payload, if loaded.
    pub fn data(&self) -> Option<Dashboard> {
        self.dashboard.data()
    }

    /// A point-in-time copy of the container.
    pub fn state(&self) -> ResourceState<Dashboard> {
        self.dashboard.snapshot()
    }
}
