#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::utils::{
  format::{change_class, format_currency, format_percentage},
  protocols::{Protocol, ProtocolTotals},
  sorting::{sort_protocols, SortConfig, SortKey}
};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Column {
  key: SortKey,
  label: &'static str,
}

const COLUMNS: [Column; 11] = [
  Column { key: SortKey::Name, label: "Protocol" },
  Column { key: SortKey::Tvl, label: "TVL" },
  Column { key: SortKey::TvlChange24h, label: "TVL 24h" },
  Column { key: SortKey::TvlChange30d, label: "TVL 30d" },
  Column { key: SortKey::Mcap, label: "Mcap" },
  Column { key: SortKey::Fees24h, label: "Fees 24h" },
  Column { key: SortKey::Fees30d, label: "Fees 30d" },
  Column { key: SortKey::Revenue24h, label: "Revenue 24h" },
  Column { key: SortKey::Revenue30d, label: "Revenue 30d" },
  Column { key: SortKey::HoldersRevenue24h, label: "Holders Rev 24h" },
  Column { key: SortKey::Volume24h, label: "Volume 24h" },
];

#[component]
pub fn ProtocolTable(protocols: Vec<Protocol>) -> Element {
  let mut sort_config = use_signal(SortConfig::default);

  let config = sort_config();
  let rows = sort_protocols(&protocols, config);

  rsx! {
    div {
      class: "protocol-table-container",
      table {
        class: "protocol-table",
        thead {
          tr {
            th { scope: "col", "#" }
            for column in COLUMNS {
              SortHeader {
                key: "{column.key}",
                label: column.label,
                indicator: config.indicator(column.key),
                onsort: move |_| sort_config.write().toggle(column.key),
              }
            }
          }
        }
        tbody {
          for (idx, protocol) in rows.iter().enumerate() {
            ProtocolRow { key: "{protocol.name}-{idx}", rank: idx + 1, protocol: protocol.clone() }
          }
        }
      }
      if protocols.is_empty() {
        p { class: "empty-table", "No protocols to show" }
      }
    }
  }
}

#[component]
fn SortHeader(label: &'static str, indicator: &'static str, onsort: EventHandler<()>) -> Element {
  rsx! {
    th {
      scope: "col",
      class: "sortable",
      onclick: move |_evt| onsort.call(()),
      "{label} "
      span { class: "sort-indicator", "{indicator}" }
    }
  }
}

#[component]
fn ProtocolRow(rank: usize, protocol: Protocol) -> Element {
  let change_24h = protocol.tvl_change_24h();
  let change_30d = protocol.tvl_change_30d();
  let tvl_24h = format_percentage(Some(change_24h));
  let tvl_24h_class = change_class(Some(change_24h));
  let tvl_30d = format_percentage(Some(change_30d));
  let tvl_30d_class = change_class(Some(change_30d));
  let tvl = format_currency(Some(protocol.tvl));
  let mcap = format_currency(Some(protocol.mcap));
  let fees_24h = format_currency(Some(protocol.fees.h24));
  let fees_30d = format_currency(Some(protocol.fees.d30));
  let revenue_24h = format_currency(Some(protocol.revenue.h24));
  let revenue_30d = format_currency(Some(protocol.revenue.d30));
  let holders_24h = format_currency(Some(protocol.holders_revenue.h24));
  let volume_24h = format_currency(Some(protocol.volume.h24));

  rsx! {
    tr {
      td { class: "rank", "{rank}" }
      td {
        class: "protocol-name",
        if !protocol.logo.is_empty() {
          img { class: "protocol-logo", src: "{protocol.logo}", alt: "{protocol.name}", loading: "lazy" }
        }
        span { "{protocol.name}" }
        if !protocol.symbol.is_empty() && protocol.symbol != "-" {
          span { class: "protocol-symbol", "{protocol.symbol}" }
        }
      }
      td { "{tvl}" }
      td { class: "{tvl_24h_class}", "{tvl_24h}" }
      td { class: "{tvl_30d_class}", "{tvl_30d}" }
      td { "{mcap}" }
      td { "{fees_24h}" }
      td { "{fees_30d}" }
      td { "{revenue_24h}" }
      td { "{revenue_30d}" }
      td { "{holders_24h}" }
      td { "{volume_24h}" }
    }
  }
}

#[component]
pub fn ProtocolSummary(totals: ProtocolTotals) -> Element {
  let tvl = format_currency(Some(totals.tvl));
  let fees = format_currency(Some(totals.fees_24h));
  let revenue = format_currency(Some(totals.revenue_24h));
  let volume = format_currency(Some(totals.volume_24h));

  rsx! {
    div {
      class: "summary-strip",
      SummaryItem { label: "Protocols", value: totals.count.to_string() }
      SummaryItem { label: "Total TVL", value: tvl }
      SummaryItem { label: "Fees (24h)", value: fees }
      SummaryItem { label: "Revenue (24h)", value: revenue }
      SummaryItem { label: "Volume (24h)", value: volume }
    }
  }
}

#[component]
fn SummaryItem(label: &'static str, value: String) -> Element {
  rsx! {
    div {
      class: "summary-item",
      label { "{label}" }
      span { class: "value", "{value}" }
    }
  }
}
