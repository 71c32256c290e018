use crate::api::{
    client::ApiClient,
    models::{DashboardSummary, Donation, StudentApplication},
};
use crate::core::services::{
    application_service::ApplicationService,
    donation_service::DonationService,
    types::{ListParams, ServiceError},
};
use std::sync::Arc;

/// Everything the dashboard home screen shows in one round of requests.
#[derive(Debug)]
pub struct DashboardOverview {
    pub summary: DashboardSummary,
    pub recent_donations: Vec<Donation>,
    pub pending_applications: Vec<StudentApplication>,
}

pub struct DashboardService {
    client: Arc<ApiClient>,
}

impl DashboardService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn summary(&self) -> Result<DashboardSummary, ServiceError> {
        let summary = self.client.get_item("/dashboard/summary").await?;
        Ok(summary)
    }

    /// Fetch the summary card figures and the two activity lists
    /// concurrently. Any single failure fails the whole overview.
    pub async fn overview(&self) -> Result<DashboardOverview, ServiceError> {
        let donations = DonationService::new(Arc::clone(&self.client));
        let applications = ApplicationService::new(Arc::clone(&self.client));

        let recent = ListParams::default().with_page(1, 5);
        let (summary, recent_donations, pending_applications) = futures::try_join!(
            self.summary(),
            donations.list(recent.clone()),
            applications.list_pending(recent),
        )?;

        Ok(DashboardOverview {
            summary,
            recent_donations: recent_donations.data,
            pending_applications: pending_applications.data,
        })
    }
}
