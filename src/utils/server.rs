use std::fmt;
use serde::Deserialize;

/* Server Responses */

// GET {LLAMA_API_URL}/protocols
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawProtocol {
  pub name: String,
  pub symbol: Option<String>,
  pub slug: Option<String>,
  pub logo: Option<String>,
  pub category: Option<String>,
  pub tvl: Option<f64>,
  pub tvl_prev_day: Option<f64>,
  pub tvl_prev_month: Option<f64>,
  pub mcap: Option<f64>,
}

// GET {LLAMA_API_URL}/overview/fees
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FeesOverview {
  #[serde(default)]
  pub protocols: Vec<RawFeeProtocol>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawFeeProtocol {
  pub name: String,
  pub total_24h: Option<f64>,
  pub total_7d: Option<f64>,
  pub total_30d: Option<f64>,
  pub monthly_avg_1y: Option<f64>,
  pub revenue_24h: Option<f64>,
  pub revenue_7d: Option<f64>,
  pub revenue_30d: Option<f64>,
  pub revenue_1y: Option<f64>,
  pub user_fees_24h: Option<f64>,
  pub cumulative_fees: Option<f64>,
  pub holders_revenue_24h: Option<f64>,
  pub holders_revenue_30d: Option<f64>,
  pub treasury_revenue_24h: Option<f64>,
  pub supply_revenue: Option<f64>,
  pub volume_24h: Option<f64>,
  pub volume_change_7d: Option<f64>,
  pub cumulative_volume: Option<f64>,
}

// App Errors
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
  RequestFailed(String),
  BadStatus(u16),
  DeserializeError(String),
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AppError::RequestFailed(msg) => write!(f, "Request error: {}", msg),
      AppError::BadStatus(_) => write!(f, "Failed to fetch protocol data"),
      AppError::DeserializeError(msg) => write!(f, "Deserialize error: {}", msg),
    }
  }
}
