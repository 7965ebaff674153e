use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
pub use sqlx::types::Json;
use sqlx::{FromRow, Type};
use thiserror::Error;
use vechnost_common::{FeeRate, Money, Secret};

#[derive(Debug, Clone, Error)]
#[error("Invalid value: {0}")]
pub struct ConversionError(String);

//--------------------------------------     UserLevel      ----------------------------------------------------------
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum UserLevel {
    Guest,
    #[default]
    Member,
    Vip,
    Admin,
}

impl Display for UserLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserLevel::Guest => write!(f, "guest"),
            UserLevel::Member => write!(f, "member"),
            UserLevel::Vip => write!(f, "vip"),
            UserLevel::Admin => write!(f, "admin"),
        }
    }
}

//--------------------------------------    ProductType     ----------------------------------------------------------
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum ProductType {
    #[default]
    GameTopup,
    Pulsa,
    Data,
    JokiMl,
    JokiRoblox,
    Voucher,
    PremiumAccount,
}

impl Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductType::GameTopup => write!(f, "game_topup"),
            ProductType::Pulsa => write!(f, "pulsa"),
            ProductType::Data => write!(f, "data"),
            ProductType::JokiMl => write!(f, "joki_ml"),
            ProductType::JokiRoblox => write!(f, "joki_roblox"),
            ProductType::Voucher => write!(f, "voucher"),
            ProductType::PremiumAccount => write!(f, "premium_account"),
        }
    }
}

//--------------------------------------      Provider      ----------------------------------------------------------
/// The service that fulfils an order once it has been paid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum Provider {
    Vip,
    Digiflazz,
    #[default]
    Manual,
}

impl Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Vip => write!(f, "vip"),
            Provider::Digiflazz => write!(f, "digiflazz"),
            Provider::Manual => write!(f, "manual"),
        }
    }
}

//--------------------------------------    ProviderName    ----------------------------------------------------------
/// An upstream catalogue provider. Unlike [`Provider`], manual fulfilment is
/// not a valid source for provider configuration or bulk imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum ProviderName {
    Vip,
    Digiflazz,
}

impl From<ProviderName> for Provider {
    fn from(name: ProviderName) -> Self {
        match name {
            ProviderName::Vip => Provider::Vip,
            ProviderName::Digiflazz => Provider::Digiflazz,
        }
    }
}

impl Display for ProviderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderName::Vip => write!(f, "vip"),
            ProviderName::Digiflazz => write!(f, "digiflazz"),
        }
    }
}

//--------------------------------------   PaymentGateway   ----------------------------------------------------------
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum PaymentGateway {
    Tripay,
    Tokopay,
    #[default]
    Manual,
}

impl PaymentGateway {
    /// Whether this gateway provides a hosted checkout page that orders must
    /// link to.
    pub fn is_hosted(&self) -> bool {
        matches!(self, PaymentGateway::Tripay | PaymentGateway::Tokopay)
    }
}

impl Display for PaymentGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentGateway::Tripay => write!(f, "tripay"),
            PaymentGateway::Tokopay => write!(f, "tokopay"),
            PaymentGateway::Manual => write!(f, "manual"),
        }
    }
}

//--------------------------------------    OrderStatus     ----------------------------------------------------------
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum OrderStatus {
    /// The order exists but no payment has been confirmed.
    #[default]
    Pending,
    /// The gateway has confirmed payment; fulfilment has not started.
    Paid,
    /// The order is being fulfilled by the provider.
    Processing,
    /// Fulfilment completed.
    Success,
    /// Payment or fulfilment failed.
    Failed,
    /// The payment was returned to the customer.
    Refunded,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Paid => write!(f, "paid"),
            OrderStatus::Processing => write!(f, "processing"),
            OrderStatus::Success => write!(f, "success"),
            OrderStatus::Failed => write!(f, "failed"),
            OrderStatus::Refunded => write!(f, "refunded"),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "processing" => Ok(Self::Processing),
            "success" => Ok(Self::Success),
            "failed" => Ok(Self::Failed),
            "refunded" => Ok(Self::Refunded),
            s => Err(ConversionError(format!("Invalid order status: {s}"))),
        }
    }
}

//--------------------------------------   DepositStatus    ----------------------------------------------------------
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum DepositStatus {
    #[default]
    Pending,
    Paid,
    Failed,
}

impl Display for DepositStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DepositStatus::Pending => write!(f, "pending"),
            DepositStatus::Paid => write!(f, "paid"),
            DepositStatus::Failed => write!(f, "failed"),
        }
    }
}

//--------------------------------------        User        ----------------------------------------------------------
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub phone: Option<String>,
    pub level: UserLevel,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//--------------------------------------      NewUser       ----------------------------------------------------------
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    /// Hex-encoded digest of the password. Hashing happens at the HTTP
    /// boundary; the engine never sees plaintext credentials.
    pub password_hash: String,
    pub phone: Option<String>,
}

//--------------------------------------      Category      ----------------------------------------------------------
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub rank: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rank: i64,
}

//--------------------------------------      Product       ----------------------------------------------------------
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub price: Money,
    pub category_id: Option<i64>,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub provider: Option<Provider>,
    pub is_active: bool,
    pub tags: Json<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Money,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(rename = "type", default)]
    pub product_type: ProductType,
    #[serde(default = "default_provider")]
    pub provider: Option<Provider>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

//--------------------------------------   PaymentMethod    ----------------------------------------------------------
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PaymentMethod {
    pub id: i64,
    pub name: String,
    /// Unique code that orders reference, e.g. `qris` or `bank-bca`.
    pub code: String,
    pub gateway: PaymentGateway,
    pub fee_percent: FeeRate,
    pub fee_flat: Money,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPaymentMethod {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub gateway: PaymentGateway,
    #[serde(default)]
    pub fee_percent: FeeRate,
    #[serde(default)]
    pub fee_flat: Money,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

//--------------------------------------       Order        ----------------------------------------------------------
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i64,
    pub user_id: Option<i64>,
    pub product_id: i64,
    pub amount: i64,
    /// Game or account identifier the purchase is delivered to.
    pub target_id: Option<String>,
    pub status: OrderStatus,
    pub provider: Option<Provider>,
    pub payment_method_code: Option<String>,
    pub payment_reference: Option<String>,
    pub payment_url: Option<String>,
    pub total_price: Money,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//--------------------------------------      NewOrder      ----------------------------------------------------------
/// A fully priced order, ready for insertion. Built by the order flow API;
/// never deserialized from client input.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: Option<i64>,
    pub product_id: i64,
    pub amount: i64,
    pub target_id: Option<String>,
    /// Resolved fulfilment provider (request override, then the product's
    /// provider, then manual).
    pub provider: Provider,
    pub payment_method_code: Option<String>,
    pub payment_reference: Option<String>,
    /// Grand total in cents, fees included.
    pub total_price: Money,
    pub note: Option<String>,
    /// Gateway of the selected payment method. When it is a hosted gateway, a
    /// checkout URL is attached to the order within the same transaction as
    /// the insert.
    pub gateway: Option<PaymentGateway>,
}

//--------------------------------------      Deposit       ----------------------------------------------------------
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Deposit {
    pub id: i64,
    pub user_id: i64,
    pub amount: Money,
    pub status: DepositStatus,
    pub method_code: Option<String>,
    pub reference: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDeposit {
    pub user_id: i64,
    pub amount: Money,
    #[serde(default)]
    pub status: DepositStatus,
    #[serde(default)]
    pub method_code: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
}

//--------------------------------------       Rating       ----------------------------------------------------------
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rating {
    pub id: i64,
    pub user_id: Option<i64>,
    pub product_id: i64,
    pub stars: i64,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRating {
    #[serde(default)]
    pub user_id: Option<i64>,
    pub product_id: i64,
    #[serde(default = "default_stars")]
    pub stars: i64,
    #[serde(default)]
    pub comment: Option<String>,
}

//--------------------------------------  NewProviderConfig ----------------------------------------------------------
/// Credentials for an upstream provider. There is no read path for these
/// records; the insert returns only the new row id.
#[derive(Debug, Clone)]
pub struct NewProviderConfig {
    pub name: ProviderName,
    pub api_key: Secret<String>,
    pub api_secret: Option<Secret<String>>,
    pub active: bool,
}

//--------------------------------------    ProductSales    ----------------------------------------------------------
/// One row of the sales aggregate: all orders grouped by product.
#[derive(Debug, Clone, FromRow)]
pub struct ProductSales {
    pub product_id: i64,
    pub orders: i64,
    pub revenue: Money,
}

fn default_true() -> bool {
    true
}

fn default_provider() -> Option<Provider> {
    Some(Provider::Manual)
}

fn default_stars() -> i64 {
    5
}
