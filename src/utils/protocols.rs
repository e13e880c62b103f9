use std::collections::HashMap;

use super::server::{RawFeeProtocol, RawProtocol};

pub const LIQUID_STAKING_CATEGORY: &str = "Liquid Staking";

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FeeStats {
  pub h24: f64,
  pub d7: f64,
  pub d30: f64,
  pub monthly_avg_1y: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RevenueStats {
  pub h24: f64,
  pub d7: f64,
  pub d30: f64,
  pub y1: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HoldersRevenue {
  pub h24: f64,
  pub d30: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VolumeStats {
  pub h24: f64,
  pub change_7d: f64,
  pub cumulative: f64,
}

/// One row of the protocol table. Every number is filled in at merge time,
/// an absent source value becomes 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Protocol {
  pub name: String,
  pub symbol: String,
  pub logo: String,
  pub category: String,
  pub slug: String,
  pub tvl: f64,
  pub tvl_prev_day: f64,
  pub tvl_prev_month: f64,
  pub mcap: f64,
  pub fees: FeeStats,
  pub revenue: RevenueStats,
  pub holders_revenue: HoldersRevenue,
  pub volume: VolumeStats,
  pub user_fees_24h: f64,
  pub cumulative_fees: f64,
  pub treasury_revenue_24h: f64,
  pub supply_revenue: f64,
}

impl Protocol {
  pub fn from_raw(raw: RawProtocol, fees: Option<&RawFeeProtocol>) -> Self {
    let empty = RawFeeProtocol::default();
    let f = fees.unwrap_or(&empty);
    let or_zero = |v: Option<f64>| v.unwrap_or(0.0);

    Protocol {
      name: raw.name,
      symbol: raw.symbol.unwrap_or_default(),
      logo: raw.logo.unwrap_or_default(),
      category: raw.category.unwrap_or_default(),
      slug: raw.slug.unwrap_or_default(),
      tvl: or_zero(raw.tvl),
      tvl_prev_day: or_zero(raw.tvl_prev_day),
      tvl_prev_month: or_zero(raw.tvl_prev_month),
      mcap: or_zero(raw.mcap),
      fees: FeeStats {
        h24: or_zero(f.total_24h),
        d7: or_zero(f.total_7d),
        d30: or_zero(f.total_30d),
        monthly_avg_1y: or_zero(f.monthly_avg_1y),
      },
      revenue: RevenueStats {
        h24: or_zero(f.revenue_24h),
        d7: or_zero(f.revenue_7d),
        d30: or_zero(f.revenue_30d),
        y1: or_zero(f.revenue_1y),
      },
      holders_revenue: HoldersRevenue {
        h24: or_zero(f.holders_revenue_24h),
        d30: or_zero(f.holders_revenue_30d),
      },
      volume: VolumeStats {
        h24: or_zero(f.volume_24h),
        change_7d: or_zero(f.volume_change_7d),
        cumulative: or_zero(f.cumulative_volume),
      },
      user_fees_24h: or_zero(f.user_fees_24h),
      cumulative_fees: or_zero(f.cumulative_fees),
      treasury_revenue_24h: or_zero(f.treasury_revenue_24h),
      supply_revenue: or_zero(f.supply_revenue),
    }
  }

  /// percent change of tvl against the previous day, 0 when there is no previous day
  pub fn tvl_change_24h(&self) -> f64 {
    if self.tvl_prev_day == 0.0 || self.tvl_prev_day.is_nan() {
      return 0.0;
    }
    (self.tvl - self.tvl_prev_day) / self.tvl_prev_day * 100.0
  }

  pub fn tvl_change_30d(&self) -> f64 {
    if self.tvl_prev_month == 0.0 || self.tvl_prev_month.is_nan() {
      return 0.0;
    }
    (self.tvl - self.tvl_prev_month) / self.tvl_prev_month * 100.0
  }
}

pub fn index_fees_by_name(fees: Vec<RawFeeProtocol>) -> HashMap<String, RawFeeProtocol> {
  fees.into_iter().map(|f| (f.name.to_lowercase(), f)).collect()
}

/// Keeps liquid staking protocols in API order and attaches their fee/revenue record.
pub fn merge_protocols(protocols: Vec<RawProtocol>, fees_by_name: &HashMap<String, RawFeeProtocol>) -> Vec<Protocol> {
  protocols
    .into_iter()
    .filter(|p| p.category.as_deref() == Some(LIQUID_STAKING_CATEGORY))
    .map(|p| {
      let fees = fees_by_name.get(&p.name.to_lowercase());
      Protocol::from_raw(p, fees)
    })
    .collect()
}

pub fn filter_by_query(protocols: &[Protocol], query: &str) -> Vec<Protocol> {
  let needle = query.trim().to_lowercase();
  if needle.is_empty() {
    return protocols.to_vec();
  }
  protocols
    .iter()
    .filter(|p| p.name.to_lowercase().contains(&needle) || p.symbol.to_lowercase().contains(&needle))
    .cloned()
    .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProtocolTotals {
  pub count: usize,
  pub tvl: f64,
  pub fees_24h: f64,
  pub revenue_24h: f64,
  pub volume_24h: f64,
}

impl ProtocolTotals {
  pub fn from_protocols(protocols: &[Protocol]) -> Self {
    protocols.iter().fold(ProtocolTotals::default(), |mut acc, p| {
      acc.count += 1;
      acc.tvl += p.tvl;
      acc.fees_24h += p.fees.h24;
      acc.revenue_24h += p.revenue.h24;
      acc.volume_24h += p.volume.h24;
      acc
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::utils::format::format_percentage;

  fn raw(name: &str, category: &str, tvl: f64, tvl_prev_day: Option<f64>) -> RawProtocol {
    RawProtocol {
      name: name.to_string(),
      symbol: Some(name[..3].to_uppercase()),
      slug: Some(name.to_lowercase()),
      logo: None,
      category: Some(category.to_string()),
      tvl: Some(tvl),
      tvl_prev_day,
      tvl_prev_month: None,
      mcap: None,
    }
  }

  fn fee(name: &str, total_24h: f64, revenue_24h: f64) -> RawFeeProtocol {
    RawFeeProtocol {
      name: name.to_string(),
      total_24h: Some(total_24h),
      revenue_24h: Some(revenue_24h),
      volume_24h: Some(10.0),
      ..Default::default()
    }
  }

  #[test]
  fn merge_keeps_only_liquid_staking_in_api_order() {
    let protocols = vec![
      raw("Lido", LIQUID_STAKING_CATEGORY, 300.0, None),
      raw("Aave", "Lending", 500.0, None),
      raw("Rocket Pool", LIQUID_STAKING_CATEGORY, 100.0, None),
    ];
    let merged = merge_protocols(protocols, &HashMap::new());
    let names: Vec<&str> = merged.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Lido", "Rocket Pool"]);
  }

  #[test]
  fn merge_matches_fees_case_insensitively() {
    let fees = index_fees_by_name(vec![fee("LIDO", 42.0, 4.2)]);
    let merged = merge_protocols(vec![raw("Lido", LIQUID_STAKING_CATEGORY, 1.0, None)], &fees);
    assert_eq!(merged[0].fees.h24, 42.0);
    assert_eq!(merged[0].revenue.h24, 4.2);
    assert_eq!(merged[0].volume.h24, 10.0);
    // fields the record omits still default
    assert_eq!(merged[0].fees.d30, 0.0);
  }

  #[test]
  fn merge_without_fee_record_defaults_every_metric() {
    let fees = index_fees_by_name(vec![fee("Somebody Else", 1.0, 1.0)]);
    let merged = merge_protocols(vec![raw("Stader", LIQUID_STAKING_CATEGORY, 7.0, Some(6.0))], &fees);
    assert_eq!(merged.len(), 1);
    let p = &merged[0];
    assert_eq!(p.fees, FeeStats::default());
    assert_eq!(p.revenue, RevenueStats::default());
    assert_eq!(p.holders_revenue, HoldersRevenue::default());
    assert_eq!(p.volume, VolumeStats::default());
    assert_eq!(p.user_fees_24h, 0.0);
    assert_eq!(p.cumulative_fees, 0.0);
    assert_eq!(p.treasury_revenue_24h, 0.0);
    assert_eq!(p.supply_revenue, 0.0);
    assert_eq!(p.mcap, 0.0);
    assert_eq!(p.logo, "");
  }

  #[test]
  fn tvl_change_guards_missing_previous_day() {
    let zero_prev = Protocol::from_raw(raw("Lido", LIQUID_STAKING_CATEGORY, 110.0, Some(0.0)), None);
    assert_eq!(zero_prev.tvl_change_24h(), 0.0);

    let absent_prev = Protocol::from_raw(raw("Lido", LIQUID_STAKING_CATEGORY, 110.0, None), None);
    assert_eq!(absent_prev.tvl_change_24h(), 0.0);
  }

  #[test]
  fn tvl_change_is_percent_of_previous_day() {
    let p = Protocol::from_raw(raw("Lido", LIQUID_STAKING_CATEGORY, 110.0, Some(100.0)), None);
    assert!((p.tvl_change_24h() - 10.0).abs() < 1e-9);
    assert_eq!(format_percentage(Some(p.tvl_change_24h())), "+10.00%");

    let down = Protocol::from_raw(raw("Lido", LIQUID_STAKING_CATEGORY, 90.0, Some(100.0)), None);
    assert_eq!(format_percentage(Some(down.tvl_change_24h())), "-10.00%");
  }

  #[test]
  fn later_duplicate_fee_names_win() {
    let fees = index_fees_by_name(vec![fee("Lido", 1.0, 0.0), fee("lido", 2.0, 0.0)]);
    assert_eq!(fees.len(), 1);
    assert_eq!(fees["lido"].total_24h, Some(2.0));
  }

  #[test]
  fn query_matches_name_or_symbol() {
    let all = merge_protocols(
      vec![
        raw("Lido", LIQUID_STAKING_CATEGORY, 3.0, None),
        raw("Rocket Pool", LIQUID_STAKING_CATEGORY, 2.0, None),
      ],
      &HashMap::new(),
    );
    assert_eq!(filter_by_query(&all, "  ").len(), 2);
    assert_eq!(filter_by_query(&all, "rocket")[0].name, "Rocket Pool");
    // symbol is the first three letters uppercased in these fixtures
    assert_eq!(filter_by_query(&all, "lid")[0].name, "Lido");
    assert!(filter_by_query(&all, "frax").is_empty());
  }

  #[test]
  fn totals_sum_every_row() {
    let fees = index_fees_by_name(vec![fee("Lido", 5.0, 1.0), fee("Rocket Pool", 3.0, 2.0)]);
    let all = merge_protocols(
      vec![
        raw("Lido", LIQUID_STAKING_CATEGORY, 300.0, None),
        raw("Rocket Pool", LIQUID_STAKING_CATEGORY, 100.0, None),
      ],
      &fees,
    );
    let totals = ProtocolTotals::from_protocols(&all);
    assert_eq!(totals.count, 2);
    assert_eq!(totals.tvl, 400.0);
    assert_eq!(totals.fees_24h, 8.0);
    assert_eq!(totals.revenue_24h, 3.0);
    assert_eq!(totals.volume_24h, 20.0);
    assert_eq!(ProtocolTotals::from_protocols(&[]), ProtocolTotals::default());
  }
}
