/* Display formatting shared by the staking cards and the protocol table.
Every function is total: an absent value renders as the neutral zero string. */

const BILLION: f64 = 1_000_000_000.0;
const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

pub fn format_currency(value: Option<f64>) -> String {
  let Some(value) = value else {
    return "$0".to_string();
  };

  let sign = if value < 0.0 { "-" } else { "" };
  let abs = value.abs();

  if abs >= BILLION {
    format!("{}${:.2}B", sign, abs / BILLION)
  } else if abs >= MILLION {
    format!("{}${:.2}M", sign, abs / MILLION)
  } else if abs >= THOUSAND {
    format!("{}${:.2}K", sign, abs / THOUSAND)
  } else {
    format!("{}${:.2}", sign, abs)
  }
}

// -0.0 would otherwise print as "-0.00"
fn unsigned_zero(v: f64) -> f64 {
  if v == 0.0 { 0.0 } else { v }
}

pub fn format_percentage(value: Option<f64>) -> String {
  match value.map(unsigned_zero) {
    Some(v) if v >= 0.0 => format!("+{:.2}%", v),
    Some(v) => format!("{:.2}%", v),
    None => "0%".to_string(),
  }
}

pub fn format_number(value: Option<f64>, decimals: usize) -> String {
  match value.map(unsigned_zero) {
    Some(v) => format!("{:.*}", decimals, v),
    None => "0".to_string(),
  }
}

/// css class for a signed change, absent counts as zero (non-negative)
pub fn change_class(value: Option<f64>) -> &'static str {
  if value.unwrap_or(0.0) >= 0.0 {
    "positive"
  } else {
    "negative"
  }
}
