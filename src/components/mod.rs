pub mod protocol_table;
pub mod staking_card;
pub mod template;
pub mod tvl_chart;
