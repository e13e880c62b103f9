use std::{cmp::Ordering, fmt};

use super::protocols::Protocol;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
  Name,
  Tvl,
  TvlChange24h,
  TvlChange30d,
  Mcap,
  Fees24h,
  Fees30d,
  Revenue24h,
  Revenue30d,
  HoldersRevenue24h,
  Volume24h,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
  Asc,
  Desc,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
  Text(&'a str),
  Number(f64),
}

impl SortKey {
  /// column identifier, dotted for nested metric groups
  pub fn id(&self) -> &'static str {
    match self {
      SortKey::Name => "name",
      SortKey::Tvl => "tvl",
      SortKey::TvlChange24h => "tvlChange24h",
      SortKey::TvlChange30d => "tvlChange30d",
      SortKey::Mcap => "mcap",
      SortKey::Fees24h => "fees.24h",
      SortKey::Fees30d => "fees.30d",
      SortKey::Revenue24h => "revenue.24h",
      SortKey::Revenue30d => "revenue.30d",
      SortKey::HoldersRevenue24h => "holdersRevenue.24h",
      SortKey::Volume24h => "volume.24h",
    }
  }

  pub fn value<'a>(&self, p: &'a Protocol) -> SortValue<'a> {
    match self {
      SortKey::Name => SortValue::Text(&p.name),
      SortKey::Tvl => SortValue::Number(p.tvl),
      SortKey::TvlChange24h => SortValue::Number(p.tvl_change_24h()),
      SortKey::TvlChange30d => SortValue::Number(p.tvl_change_30d()),
      SortKey::Mcap => SortValue::Number(p.mcap),
      SortKey::Fees24h => SortValue::Number(p.fees.h24),
      SortKey::Fees30d => SortValue::Number(p.fees.d30),
      SortKey::Revenue24h => SortValue::Number(p.revenue.h24),
      SortKey::Revenue30d => SortValue::Number(p.revenue.d30),
      SortKey::HoldersRevenue24h => SortValue::Number(p.holders_revenue.h24),
      SortKey::Volume24h => SortValue::Number(p.volume.h24),
    }
  }
}

impl fmt::Display for SortKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.id())
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortConfig {
  pub key: SortKey,
  pub direction: SortDirection,
}

impl Default for SortConfig {
  fn default() -> Self {
    SortConfig { key: SortKey::Tvl, direction: SortDirection::Desc }
  }
}

impl SortConfig {
  /// header click: same column flips desc to asc (anything else back to desc),
  /// a new column always starts descending
  pub fn toggle(&mut self, key: SortKey) {
    if self.key == key && self.direction == SortDirection::Desc {
      self.direction = SortDirection::Asc;
    } else {
      self.direction = SortDirection::Desc;
    }
    self.key = key;
  }

  pub fn indicator(&self, key: SortKey) -> &'static str {
    match (self.key == key, self.direction) {
      (false, _) => "",
      (true, SortDirection::Asc) => "↑",
      (true, SortDirection::Desc) => "↓",
    }
  }
}

/* Total order over resolved values:
- numbers by total_cmp, NaN last whatever the direction
- text byte-wise
- a number always before text */
fn compare(a: SortValue, b: SortValue, direction: SortDirection) -> Ordering {
  let directed = |ord: Ordering| match direction {
    SortDirection::Asc => ord,
    SortDirection::Desc => ord.reverse(),
  };

  match (a, b) {
    (SortValue::Number(x), SortValue::Number(y)) => match (x.is_nan(), y.is_nan()) {
      (true, true) => Ordering::Equal,
      (true, false) => Ordering::Greater,
      (false, true) => Ordering::Less,
      (false, false) => directed(x.total_cmp(&y)),
    },
    (SortValue::Text(x), SortValue::Text(y)) => directed(x.cmp(y)),
    (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
    (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
  }
}

/// Returns a sorted copy, the input order is left untouched. Ties keep input order.
pub fn sort_protocols(protocols: &[Protocol], config: SortConfig) -> Vec<Protocol> {
  let mut sorted = protocols.to_vec();
  sorted.sort_by(|a, b| compare(config.key.value(a), config.key.value(b), config.direction));
  sorted
}
