//! # Report Service
//!
//! Aggregated reports and the dashboard.
//!
//! Report endpoints are GET with a date range; passing `save_report=true`
//! additionally persists the generated report server-side, where it shows
//! up in the saved-reports list.

use vela_core::{
    CustomerReport, CustomerReportQuery, CustomersReport, Dashboard, FinancialReport,
    PageEnvelope, ProductsReport, Report, ReportRange, SalesReport,
};

use crate::error::ApiResult;
use crate::http::HttpClient;

/// `/reports` endpoints.
#[derive(Debug, Clone)]
pub struct ReportService {
    client: HttpClient,
}

impl ReportService {
    pub(crate) fn new(client: HttpClient) -> Self {
        ReportService { client }
    }

    /// Fetches the dashboard payload for the admin landing page.
    pub async fn dashboard(&self) -> ApiResult<Dashboard> {
        self.client.get("/reports/dashboard", &[]).await
    }

    /// Generates a sales report over `range`.
    pub async fn sales(&self, range: &ReportRange) -> ApiResult<SalesReport> {
        self.client.get("/reports/sales", &range.to_query()).await
    }

    /// Generates a financial report over `range`.
    pub async fn financial(&self, range: &ReportRange) -> ApiResult<FinancialReport> {
        self.client
            .get("/reports/financial", &range.to_query())
            .await
    }

    /// Generates a customers report over `range`.
    pub async fn customers(&self, range: &ReportRange) -> ApiResult<CustomersReport> {
        self.client
            .get("/reports/customers", &range.to_query())
            .await
    }

    /// Generates a products report over `range`.
    pub async fn products(&self, range: &ReportRange) -> ApiResult<ProductsReport> {
        self.client
            .get("/reports/products", &range.to_query())
            .await
    }

    /// Fetches one customer's purchase history report.
    pub async fn customer(
        &self,
        customer_id: i64,
        query: &CustomerReportQuery,
    ) -> ApiResult<CustomerReport> {
        self.client
            .get(&format!("/reports/customer/{customer_id}"), &query.to_query())
            .await
    }

    /// Lists saved reports.
    pub async fn saved(&self) -> ApiResult<PageEnvelope<Report>> {
        self.client.get("/reports", &[]).await
    }

    /// Fetches one saved report by id.
    pub async fn get_saved(&self, id: i64) -> ApiResult<Report> {
        self.client.get(&format!("/reports/{id}"), &[]).await
    }
}
