use dioxus::prelude::*;
use crate::{components::staking_card::StakingCard, utils::catalog::staking_tokens, Route};

#[component]
pub fn Home() -> Element {
  static CSS: Asset = asset!("/assets/home.css");
  static CARD_CSS: Asset = asset!("/assets/card.css");
  let tokens = use_hook(staking_tokens);

  rsx! {
    document::Stylesheet {href: CSS},
    document::Stylesheet {href: CARD_CSS},
    div {
      class: "home-page",
      section {
        class : "hero",
        h1 { "Liquid Staking Dashboard" },
        p { "Compare staking platforms by fee and yield, and track TVL, fees, revenue and volume across liquid staking protocols." },
        Link {
          class: "cta-button",
          to: Route::Protocols { },
          "Browse Protocols"
        }
      },
      section {
        class: "card-grid",
        if tokens.is_empty() {
          p { class: "empty-state", "No staking tokens available." }
        }
        for token in tokens.iter() {
          StakingCard { key: "{token.symbol}", token: token.clone() }
        }
      }
    }
  }
}
