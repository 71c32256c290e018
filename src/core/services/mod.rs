pub mod application_service;
pub mod auth_service;
pub mod banner_service;
pub mod campaign_service;
pub mod category_service;
pub mod dashboard_service;
pub mod donation_service;
pub mod notification_service;
pub mod program_service;
pub mod report_service;
pub mod role_service;
pub mod settings_service;
pub mod traits;
pub mod types;
pub mod user_service;
