use crate::api::{
    client::ApiClient,
    models::{Donation, DonationsReportTotals, ExportFormat, ReportExport},
    normalize::{PageRequest, Paginated},
};
use crate::core::services::types::{ReportFilters, ServiceError};
use std::sync::Arc;

pub struct ReportService {
    client: Arc<ApiClient>,
}

impl ReportService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    fn validate_filters(filters: &ReportFilters) -> Result<(), ServiceError> {
        if let (Some(from), Some(to)) = (filters.from, filters.to)
            && from > to
        {
            return Err(ServiceError::Validation {
                field: "from".to_string(),
                message: "Report start date must not be after the end date".to_string(),
            });
        }
        Ok(())
    }

    pub async fn donations(
        &self,
        filters: &ReportFilters,
        page: &PageRequest,
    ) -> Result<Paginated<Donation>, ServiceError> {
        Self::validate_filters(filters)?;
        let report = self
            .client
            .get_page("/reports/donations", &filters.to_query(), page)
            .await?;
        Ok(report)
    }

    pub async fn donations_totals(
        &self,
        filters: &ReportFilters,
    ) -> Result<DonationsReportTotals, ServiceError> {
        Self::validate_filters(filters)?;
        let payload = self
            .client
            .get_raw("/reports/donations/totals", &filters.to_query())
            .await?;
        let totals = serde_json::from_value(crate::api::normalize::normalize_item(&payload))
            .map_err(|e| self.client.decode_error("/reports/donations/totals", e))?;
        Ok(totals)
    }

    /// The backend renders the file and answers with a download URL; nothing
    /// is streamed through the client.
    pub async fn export_donations(
        &self,
        filters: &ReportFilters,
        format: ExportFormat,
    ) -> Result<ReportExport, ServiceError> {
        Self::validate_filters(filters)?;
        let mut query = filters.to_query();
        query.push(("format".to_string(), format.as_str().to_string()));
        let export = self
            .client
            .get_item_with_query("/reports/donations/export", &query)
            .await?;
        Ok(export)
    }
}
