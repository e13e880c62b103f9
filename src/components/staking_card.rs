#![allow(non_snake_case)]

use dioxus::prelude::*;
use serde::Deserialize;

use crate::utils::format::{change_class, format_currency, format_number, format_percentage};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Platform {
  pub name: String,
  #[serde(default)]
  pub fee: Option<f64>,
  #[serde(default)]
  pub min_stake: Option<f64>,
  #[serde(default)]
  pub apy: Option<f64>,
}

/// Input record of a summary card. Any metric may be absent and renders as zero.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StakingToken {
  pub name: String,
  pub symbol: String,
  #[serde(default)]
  pub image: Option<String>,
  #[serde(default)]
  pub market_cap_rank: Option<u32>,
  #[serde(default)]
  pub current_price: Option<f64>,
  #[serde(default)]
  pub price_change_percentage_24h: Option<f64>,
  #[serde(default)]
  pub tvl: Option<f64>,
  #[serde(default)]
  pub tvl_change_24h: Option<f64>,
  #[serde(default)]
  pub volume_24h: Option<f64>,
  #[serde(default)]
  pub volume_change_7d: Option<f64>,
  #[serde(default)]
  pub revenue_24h: Option<f64>,
  #[serde(default)]
  pub price_to_sales: Option<f64>,
  #[serde(default)]
  pub fees_24h: Option<f64>,
  #[serde(default)]
  pub price_to_fees: Option<f64>,
  #[serde(default)]
  pub platforms: Vec<Platform>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedPlatform {
  pub platform: Platform,
  pub best: bool,
}

/// Ascending by fee (absent counts as 0), equal fees keep their input order.
/// Only the first entry is best.
pub fn rank_platforms(platforms: &[Platform]) -> Vec<RankedPlatform> {
  let mut sorted = platforms.to_vec();
  sorted.sort_by(|a, b| a.fee.unwrap_or(0.0).total_cmp(&b.fee.unwrap_or(0.0)));
  sorted
    .into_iter()
    .enumerate()
    .map(|(idx, platform)| RankedPlatform { platform, best: idx == 0 })
    .collect()
}

// duplicate names stay distinct by position
fn platform_row_key(name: &str, idx: usize) -> String {
  format!("{}-{}", name, idx)
}

struct PlatformRow {
  key: String,
  name: String,
  fee: String,
  apy: String,
  min_stake: String,
  best: bool,
}

#[component]
pub fn StakingCard(token: StakingToken) -> Element {
  let mut expanded = use_signal(|| false);

  let symbol = token.symbol.to_uppercase();
  let image = token.image.clone().unwrap_or_default();
  let rank = token.market_cap_rank.map(|r| format!("#{}", r)).unwrap_or_default();
  let price = format_currency(token.current_price);
  let price_change = format_percentage(token.price_change_percentage_24h);
  let price_class = change_class(token.price_change_percentage_24h);
  let platform_count = token.platforms.len();

  // re-derived on every render, the input order is never touched
  let rows: Vec<PlatformRow> = rank_platforms(&token.platforms)
    .into_iter()
    .enumerate()
    .map(|(idx, r)| PlatformRow {
      key: platform_row_key(&r.platform.name, idx),
      fee: format!("{}%", format_number(r.platform.fee, 2)),
      apy: format!("{}%", format_number(r.platform.apy, 2)),
      min_stake: format!("{} {}", format_number(r.platform.min_stake, 2), symbol),
      name: r.platform.name,
      best: r.best,
    })
    .collect();

  rsx! {
    div {
      class: "staking-card",
      div {
        class: "staking-card-header",
        if !image.is_empty() {
          img { class: "token-logo", src: "{image}", alt: "{token.name}" }
        }
        div {
          class: "token-identity",
          h3 { "{token.name}" }
          span { class: "token-symbol", "{symbol}" }
        }
        if !rank.is_empty() {
          span { class: "rank-badge", "{rank}" }
        }
      }
      div {
        class: "price-block",
        span { class: "price", "{price}" }
        span { class: "change {price_class}", "{price_change}" }
      }
      div {
        class: "metric-grid",
        MetricTile {
          label: "TVL",
          value: format_currency(token.tvl),
          detail_label: "24h",
          detail: token.tvl_change_24h,
        }
        MetricTile {
          label: "Volume (24h)",
          value: format_currency(token.volume_24h),
          detail_label: "7d",
          detail: token.volume_change_7d,
        }
        RatioTile {
          label: "Revenue (24h)",
          value: format_currency(token.revenue_24h),
          ratio_label: "P/S",
          ratio: token.price_to_sales,
        }
        RatioTile {
          label: "Fees (24h)",
          value: format_currency(token.fees_24h),
          ratio_label: "P/F",
          ratio: token.price_to_fees,
        }
      }
      button {
        class: "platforms-toggle",
        r#type: "button",
        onclick: move |_evt| expanded.set(!expanded()),
        if expanded() {
          "Hide staking platforms ▲"
        } else {
          "Compare {platform_count} staking platforms ▼"
        }
      }
      if expanded() {
        ul {
          class: "platform-list",
          for row in rows.iter() {
            li {
              key: "{row.key}",
              class: "platform-row",
              "data-best": "{row.best}",
              div {
                class: "platform-name",
                "{row.name}"
                if row.best {
                  span { class: "best-rate", "Best Rate" }
                }
              }
              div {
                class: "platform-stats",
                span { "Fee {row.fee}" }
                span { "APY {row.apy}" }
                span { "Min {row.min_stake}" }
              }
            }
          }
        }
      }
      div {
        class: "card-actions",
        button { class: "button button-primary", r#type: "button", "Stake" }
        button { class: "button", r#type: "button", "Trade" }
      }
    }
  }
}

#[component]
fn MetricTile(label: &'static str, value: String, detail_label: &'static str, detail: Option<f64>) -> Element {
  let detail_text = format_percentage(detail);
  let detail_class = change_class(detail);

  rsx! {
    div {
      class: "metric-tile",
      label { "{label}" }
      span { class: "value", "{value}" }
      span { class: "change {detail_class}", "{detail_label} {detail_text}" }
    }
  }
}

#[component]
fn RatioTile(label: &'static str, value: String, ratio_label: &'static str, ratio: Option<f64>) -> Element {
  let ratio_text = format_number(ratio, 2);

  rsx! {
    div {
      class: "metric-tile",
      label { "{label}" }
      span { class: "value", "{value}" }
      span { class: "ratio", "{ratio_label} {ratio_text}x" }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn platform(name: &str, fee: f64) -> Platform {
    Platform { name: name.to_string(), fee: Some(fee), min_stake: Some(0.0), apy: Some(3.0) }
  }

  #[test]
  fn platforms_rank_by_ascending_fee() {
    let ranked = rank_platforms(&[platform("a", 5.0), platform("b", 1.0), platform("c", 3.0)]);
    let fees: Vec<Option<f64>> = ranked.iter().map(|r| r.platform.fee).collect();
    assert_eq!(fees, vec![Some(1.0), Some(3.0), Some(5.0)]);
    let best: Vec<&str> = ranked.iter().filter(|r| r.best).map(|r| r.platform.name.as_str()).collect();
    assert_eq!(best, vec!["b"]);
  }

  #[test]
  fn equal_fees_keep_input_order_and_one_best() {
    let ranked = rank_platforms(&[platform("lido", 10.0), platform("frax", 10.0), platform("cb", 25.0)]);
    assert_eq!(ranked[0].platform.name, "lido");
    assert!(ranked[0].best);
    assert!(!ranked[1].best);
    assert_eq!(ranked.iter().filter(|r| r.best).count(), 1);
  }

  #[test]
  fn absent_fee_ranks_as_zero() {
    let unpriced = Platform { name: "unpriced".to_string(), fee: None, min_stake: None, apy: None };
    let ranked = rank_platforms(&[platform("a", 2.0), unpriced]);
    assert_eq!(ranked[0].platform.name, "unpriced");
    assert!(ranked[0].best);
  }

  #[test]
  fn duplicate_platform_names_get_distinct_keys() {
    let ranked = rank_platforms(&[platform("Lido", 10.0), platform("Lido", 10.0)]);
    let keys: Vec<String> = ranked.iter().enumerate().map(|(idx, r)| platform_row_key(&r.platform.name, idx)).collect();
    assert_eq!(keys, vec!["Lido-0".to_string(), "Lido-1".to_string()]);
  }

  #[test]
  fn no_platforms_no_best() {
    assert!(rank_platforms(&[]).is_empty());
  }

  #[test]
  fn ranking_leaves_input_untouched() {
    let input = vec![platform("a", 5.0), platform("b", 1.0)];
    let _ = rank_platforms(&input);
    assert_eq!(input[0].name, "a");
  }
}
