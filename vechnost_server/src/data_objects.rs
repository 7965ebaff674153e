use serde::{Deserialize, Serialize};
use vechnost_common::{FeeRate, Money, Secret};
use vechnost_engine::db_types::{NewProviderConfig, OrderStatus, ProviderName, UserLevel};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserSummary,
}

/// The slice of the user record that goes out with a login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub level: UserLevel,
}

/// Body of a gateway payment notification. Both gateways post the same
/// shape. A missing status means the payment went through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentWebhook {
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub status: WebhookStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebhookStatus {
    #[default]
    Paid,
    Failed,
    Pending,
}

impl From<WebhookStatus> for OrderStatus {
    fn from(status: WebhookStatus) -> Self {
        match status {
            WebhookStatus::Paid => OrderStatus::Paid,
            WebhookStatus::Failed => OrderStatus::Failed,
            WebhookStatus::Pending => OrderStatus::Pending,
        }
    }
}

/// Some gateways put the reference in the query string instead of the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookQuery {
    #[serde(default)]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalcRequest {
    pub price: Money,
    #[serde(default = "default_amount")]
    pub amount: i64,
    #[serde(default)]
    pub fee_percent: FeeRate,
    #[serde(default)]
    pub fee_flat: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckGameIdRequest {
    pub game: String,
    pub user_id: String,
    #[serde(default)]
    pub server: Option<String>,
}

/// Credentials for an upstream provider, as posted by an operator. The key
/// material is wrapped in [`Secret`] as soon as it crosses into the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfigRequest {
    pub name: ProviderName,
    pub api_key: String,
    #[serde(default)]
    pub api_secret: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

impl From<ProviderConfigRequest> for NewProviderConfig {
    fn from(req: ProviderConfigRequest) -> Self {
        Self {
            name: req.name,
            api_key: Secret::new(req.api_key),
            api_secret: req.api_secret.map(Secret::new),
            active: req.active,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_amount() -> i64 {
    1
}

fn default_true() -> bool {
    true
}

fn default_limit() -> i64 {
    10
}
