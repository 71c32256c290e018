use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Custom deserializer: the backend sends IDs and counts as numbers or
/// numeric strings interchangeably.
fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    as_u64(&value).ok_or_else(|| serde::de::Error::custom("expected a number or numeric string"))
}

fn lenient_opt_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(as_u64(&value))
}

fn as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Monetary amounts arrive as numbers or decimal strings.
fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        // Laravel serializes unset decimal columns as null.
        Value::Null => Ok(0.0),
        other => as_f64(&other).ok_or_else(|| serde::de::Error::custom("expected an amount")),
    }
}

fn lenient_opt_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(as_f64(&value))
}

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Booleans arrive as true/false, 0/1, or "0"/"1".
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_i64().unwrap_or(0) != 0,
        Value::String(s) => s == "1" || s.eq_ignore_ascii_case("true"),
        _ => false,
    })
}

fn default_true() -> bool {
    true
}

// Authentication models
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

// Catalogue models
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Category {
    #[serde(deserialize_with = "lenient_u64")]
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    #[serde(deserialize_with = "lenient_opt_u64", default)]
    pub programs_count: Option<u64>,
    #[serde(deserialize_with = "lenient_bool", default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Serialize, Clone)]
pub struct CategoryInput {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Program {
    #[serde(deserialize_with = "lenient_u64")]
    pub id: u64,
    #[serde(deserialize_with = "lenient_opt_u64", default)]
    pub category_id: Option<u64>,
    pub name: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_opt_amount", default)]
    pub goal_amount: Option<f64>,
    #[serde(deserialize_with = "lenient_amount", default)]
    pub raised_amount: f64,
    #[serde(deserialize_with = "lenient_bool", default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Serialize, Clone)]
pub struct ProgramInput {
    pub category_id: u64,
    pub name: String,
    pub description: Option<String>,
    pub goal_amount: Option<f64>,
    pub is_active: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Draft,
    Active,
    Completed,
    Archived,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Campaign {
    #[serde(deserialize_with = "lenient_u64")]
    pub id: u64,
    #[serde(deserialize_with = "lenient_opt_u64", default)]
    pub program_id: Option<u64>,
    pub name: String,
    pub status: CampaignStatus,
    #[serde(deserialize_with = "lenient_opt_amount", default)]
    pub goal_amount: Option<f64>,
    #[serde(deserialize_with = "lenient_amount", default)]
    pub raised_amount: f64,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Clone)]
pub struct CampaignInput {
    pub name: String,
    pub program_id: Option<u64>,
    pub goal_amount: Option<f64>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

// Donation models
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DonationStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Donation {
    #[serde(deserialize_with = "lenient_u64")]
    pub id: u64,
    pub donor_name: String,
    pub donor_phone: Option<String>,
    #[serde(deserialize_with = "lenient_amount")]
    pub amount: f64,
    pub currency: Option<String>,
    #[serde(deserialize_with = "lenient_opt_u64", default)]
    pub campaign_id: Option<u64>,
    #[serde(deserialize_with = "lenient_opt_u64", default)]
    pub program_id: Option<u64>,
    pub status: DonationStatus,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Clone)]
pub struct DonationInput {
    pub donor_name: String,
    pub donor_phone: Option<String>,
    pub amount: f64,
    pub campaign_id: Option<u64>,
    pub program_id: Option<u64>,
}

// Student registration applications
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    /// Only pending applications move; approved/rejected are terminal.
    pub fn can_transition_to(&self, next: ApplicationStatus) -> bool {
        matches!(
            (self, next),
            (
                ApplicationStatus::Pending,
                ApplicationStatus::Approved | ApplicationStatus::Rejected
            )
        )
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StudentApplication {
    #[serde(deserialize_with = "lenient_u64")]
    pub id: u64,
    pub student_name: String,
    pub national_id: Option<String>,
    pub school: Option<String>,
    pub grade: Option<String>,
    pub status: ApplicationStatus,
    pub submitted_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

// Banner models
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Banner {
    #[serde(deserialize_with = "lenient_u64")]
    pub id: u64,
    pub title: String,
    pub image_url: String,
    pub link_url: Option<String>,
    #[serde(deserialize_with = "lenient_opt_u64", default)]
    pub position: Option<u64>,
    #[serde(deserialize_with = "lenient_bool", default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Serialize, Clone)]
pub struct BannerInput {
    pub title: String,
    pub image_url: String,
    pub link_url: Option<String>,
    pub position: Option<u64>,
    pub is_active: bool,
}

/// Item mapper for banner records: the backend stores relative image paths,
/// the UI needs absolute URLs.
pub fn resolve_banner_image(base_url: &str, mut raw: Value) -> Value {
    if let Some(path) = raw.get("image_url").and_then(Value::as_str)
        && !path.is_empty()
        && !path.starts_with("http://")
        && !path.starts_with("https://")
    {
        let absolute = format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'));
        raw["image_url"] = Value::String(absolute);
    }
    raw
}

// Users, roles and permissions
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct User {
    #[serde(deserialize_with = "lenient_u64")]
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(deserialize_with = "lenient_bool", default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Serialize, Clone)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub roles: Vec<String>,
    pub is_active: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Role {
    #[serde(deserialize_with = "lenient_u64")]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct RoleInput {
    pub name: String,
    pub permissions: Vec<String>,
}

// Notifications
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Notification {
    #[serde(deserialize_with = "lenient_u64")]
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(deserialize_with = "lenient_bool", default)]
    pub read: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Clone)]
pub struct NotificationInput {
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
}

// Textual settings pages (about, terms, privacy)
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SettingsPage {
    pub slug: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct SettingsInput {
    pub title: String,
    pub content: String,
}

// Dashboard and reporting
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardSummary {
    #[serde(deserialize_with = "lenient_amount", default)]
    pub total_donations: f64,
    #[serde(deserialize_with = "lenient_opt_u64", default)]
    pub donations_count: Option<u64>,
    #[serde(deserialize_with = "lenient_opt_u64", default)]
    pub active_campaigns: Option<u64>,
    #[serde(deserialize_with = "lenient_opt_u64", default)]
    pub pending_applications: Option<u64>,
    #[serde(deserialize_with = "lenient_opt_u64", default)]
    pub users_count: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// Export is delegated to the backend, which responds with a download URL.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ReportExport {
    pub download_url: String,
    pub format: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DonationsReportTotals {
    #[serde(deserialize_with = "lenient_amount", default)]
    pub total_amount: f64,
    #[serde(deserialize_with = "lenient_opt_u64", default)]
    pub count: Option<u64>,
}
