use dioxus::logger::tracing::{error, info};

use crate::components::staking_card::StakingToken;

// snapshot handed to the summary cards on the home page
const STAKING_TOKENS_JSON: &str = include_str!("../../assets/staking_tokens.json");

pub fn parse_staking_tokens(raw: &str) -> Result<Vec<StakingToken>, serde_json::Error> {
  serde_json::from_str::<Vec<StakingToken>>(raw)
}

pub fn staking_tokens() -> Vec<StakingToken> {
  match parse_staking_tokens(STAKING_TOKENS_JSON) {
    Ok(tokens) => {
      info!("loaded {} staking tokens", tokens.len());
      tokens
    },
    Err(e) => {
      error!("bundled staking token snapshot is invalid: {}", e);
      vec![]
    }
  }
}
