use dioxus::{logger::tracing::{error, info}, prelude::*};

use crate::{
  components::{protocol_table::{ProtocolSummary, ProtocolTable}, tvl_chart::{TvlChart, ECHARTS_LOADER_JS}},
  utils::{
    llama::{load_liquid_staking, LlamaClient},
    protocols::{filter_by_query, Protocol, ProtocolTotals},
    server::AppError
  }
};

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
  Loading,
  Error(String),
  Success(Vec<Protocol>)
}

/// Outcome of one fetch cycle. A failure carries only the message, never a partial list.
pub fn fetch_state(result: Result<Vec<Protocol>, AppError>) -> FetchState {
  match result {
    Ok(protocols) => {
      info!("loaded {} liquid staking protocols", protocols.len());
      FetchState::Success(protocols)
    },
    Err(e) => {
      error!("protocol fetch failed: {}", e);
      FetchState::Error(e.to_string())
    }
  }
}

#[component]
pub fn Protocols() -> Element {
  static CSS: Asset = asset!("/assets/protocols.css");

  let mut state: Signal<FetchState> = use_signal(||FetchState::Loading);
  let mut query: Signal<String> = use_signal(String::new);
  let mut echarts_ready: Signal<bool> = use_signal(|| false);

  use_future(move || async move {
    let mut loader = document::eval(ECHARTS_LOADER_JS);
    match loader.recv::<bool>().await {
      Ok(loaded) => echarts_ready.set(loaded),
      Err(e) => error!("echarts loader failed: {:?}", e),
    }
  });

  // the cycle belongs to this scope and is dropped with it, so a late response
  // never lands on an unmounted page
  let mut fetch_cycle = use_resource(move || async move {
    info!("fetching liquid staking protocols");
    let client = LlamaClient::default();
    state.set(fetch_state(load_liquid_staking(&client).await));
  });

  let body = match state() {
    FetchState::Loading => rsx! {
      div { class: "status status-loading", "Loading protocol data..." }
    },
    FetchState::Error(message) => rsx! {
      div {
        class: "status status-error",
        p { "{message}" }
        button {
          class: "button",
          onclick: move |_evt| {
            info!("retrying protocol fetch");
            state.set(FetchState::Loading);
            fetch_cycle.restart();
          },
          "Retry"
        }
      }
    },
    FetchState::Success(protocols) => {
      let totals = ProtocolTotals::from_protocols(&protocols);
      let visible = filter_by_query(&protocols, &query());
      rsx! {
        ProtocolSummary { totals }
        div {
          class: "chart-card",
          TvlChart { protocols: protocols.clone(), ready: echarts_ready }
        }
        div {
          class: "table-controls",
          input {
            class: "search-input",
            r#type: "search",
            placeholder: "Search by name or symbol",
            value: "{query}",
            oninput: move |evt| query.set(evt.value())
          }
        }
        ProtocolTable { protocols: visible }
      }
    }
  };

  rsx! {
    document::Link { rel: "stylesheet", href: CSS },
    div {
      class: "protocols-page",
      h1 { "Liquid Staking Protocols" }
      p { class: "subtitle", "TVL, fees, revenue and volume for every protocol in the Liquid Staking category." }
      {body}
    }
  }
}
