use dioxus::logger::tracing::{info, warn};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::{
  protocols::{index_fees_by_name, merge_protocols, Protocol},
  server::{AppError, FeesOverview, RawProtocol}
};

pub const LLAMA_API_URL: &str = env!("LLAMA_API_URL");

const PROTOCOLS_PATH: &str = "protocols";
const FEES_OVERVIEW_PATH: &str = "overview/fees";

/// Where the two payloads of a fetch cycle come from.
#[allow(async_fn_in_trait)]
pub trait ProtocolSource {
  async fn protocols(&self) -> Result<Vec<RawProtocol>, AppError>;
  async fn fees_overview(&self) -> Result<FeesOverview, AppError>;
}

pub struct LlamaClient {
  client: reqwest::Client,
  base_url: String,
}

impl LlamaClient {
  pub fn new(client: reqwest::Client, base_url: &str) -> Self {
    Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
    }
  }

  pub fn endpoint(&self, path: &str) -> String {
    format!("{}/{}", self.base_url, path)
  }

  async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
    let url = self.endpoint(path);
    let resp = self.client.get(&url).send().await.map_err(|e| AppError::RequestFailed(e.to_string()))?;
    check_status(resp.status(), &url)?;
    resp.json::<T>().await.map_err(|e| AppError::DeserializeError(e.to_string()))
  }
}

impl Default for LlamaClient {
  fn default() -> Self {
    LlamaClient::new(reqwest::Client::new(), LLAMA_API_URL)
  }
}

impl ProtocolSource for LlamaClient {
  async fn protocols(&self) -> Result<Vec<RawProtocol>, AppError> {
    self.get_json(PROTOCOLS_PATH).await
  }

  async fn fees_overview(&self) -> Result<FeesOverview, AppError> {
    self.get_json(FEES_OVERVIEW_PATH).await
  }
}

pub fn check_status(status: StatusCode, url: &str) -> Result<(), AppError> {
  if status.is_success() {
    Ok(())
  } else {
    warn!("GET {} returned {}", url, status);
    Err(AppError::BadStatus(status.as_u16()))
  }
}

/// One fetch cycle: both requests go out together and the merge only runs once
/// both have succeeded. Any failure discards whatever the other side returned.
pub async fn load_liquid_staking<S: ProtocolSource>(source: &S) -> Result<Vec<Protocol>, AppError> {
  let (protocols, overview) = futures::try_join!(source.protocols(), source.fees_overview())?;
  let total = protocols.len();
  let fees_by_name = index_fees_by_name(overview.protocols);
  let merged = merge_protocols(protocols, &fees_by_name);
  info!("kept {} liquid staking protocols out of {}", merged.len(), total);
  Ok(merged)
}

#[cfg(test)]
mod tests {
  use std::cell::Cell;
  use futures::executor::block_on;

  use super::*;
  use crate::utils::server::RawFeeProtocol;

  struct StubSource {
    protocols: Result<Vec<RawProtocol>, AppError>,
    fees: Result<FeesOverview, AppError>,
    calls: Cell<u32>,
  }

  impl StubSource {
    fn new(protocols: Result<Vec<RawProtocol>, AppError>, fees: Result<FeesOverview, AppError>) -> Self {
      Self { protocols, fees, calls: Cell::new(0) }
    }
  }

  impl ProtocolSource for StubSource {
    async fn protocols(&self) -> Result<Vec<RawProtocol>, AppError> {
      self.calls.set(self.calls.get() + 1);
      self.protocols.clone()
    }

    async fn fees_overview(&self) -> Result<FeesOverview, AppError> {
      self.calls.set(self.calls.get() + 1);
      self.fees.clone()
    }
  }

  fn lido() -> RawProtocol {
    RawProtocol {
      name: "Lido".to_string(),
      symbol: Some("LDO".to_string()),
      slug: Some("lido".to_string()),
      logo: None,
      category: Some("Liquid Staking".to_string()),
      tvl: Some(110.0),
      tvl_prev_day: Some(100.0),
      tvl_prev_month: None,
      mcap: Some(2_000.0),
    }
  }

  fn uniswap() -> RawProtocol {
    RawProtocol { name: "Uniswap".to_string(), category: Some("Dexes".to_string()), ..lido() }
  }

  #[test]
  fn successful_cycle_merges_and_filters() {
    let fees = FeesOverview {
      protocols: vec![RawFeeProtocol { name: "lido".to_string(), total_24h: Some(12.0), ..Default::default() }],
    };
    let source = StubSource::new(Ok(vec![lido(), uniswap()]), Ok(fees));
    let protocols = block_on(load_liquid_staking(&source)).unwrap();
    assert_eq!(protocols.len(), 1);
    assert_eq!(protocols[0].name, "Lido");
    assert_eq!(protocols[0].fees.h24, 12.0);
    assert_eq!(protocols[0].mcap, 2_000.0);
  }

  #[test]
  fn failing_fees_request_fails_the_cycle() {
    let source = StubSource::new(Ok(vec![lido()]), Err(AppError::BadStatus(500)));
    let result = block_on(load_liquid_staking(&source));
    assert_eq!(result, Err(AppError::BadStatus(500)));
    assert_eq!(result.unwrap_err().to_string(), "Failed to fetch protocol data");
  }

  #[test]
  fn failing_protocols_request_fails_the_cycle() {
    let source = StubSource::new(Err(AppError::RequestFailed("offline".to_string())), Ok(FeesOverview::default()));
    let result = block_on(load_liquid_staking(&source));
    assert_eq!(result, Err(AppError::RequestFailed("offline".to_string())));
  }

  #[test]
  fn both_requests_are_dispatched() {
    let source = StubSource::new(Ok(vec![]), Ok(FeesOverview::default()));
    let protocols = block_on(load_liquid_staking(&source)).unwrap();
    assert!(protocols.is_empty());
    assert_eq!(source.calls.get(), 2);
  }

  #[test]
  fn non_success_status_maps_to_bad_status() {
    assert_eq!(check_status(StatusCode::OK, "http://x/protocols"), Ok(()));
    assert_eq!(check_status(StatusCode::NOT_FOUND, "http://x/protocols"), Err(AppError::BadStatus(404)));
    assert_eq!(check_status(StatusCode::BAD_GATEWAY, "http://x/overview/fees"), Err(AppError::BadStatus(502)));
  }

  #[test]
  fn endpoints_join_without_double_slash() {
    let client = LlamaClient::new(reqwest::Client::new(), "https://api.llama.fi/");
    assert_eq!(client.endpoint(PROTOCOLS_PATH), "https://api.llama.fi/protocols");
    assert_eq!(client.endpoint(FEES_OVERVIEW_PATH), "https://api.llama.fi/overview/fees");
  }
}
