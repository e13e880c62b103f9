use dotenvy::dotenv;

const DEFAULT_LLAMA_API_URL: &str = "https://api.llama.fi";

fn main() {
  // Tell Cargo that if the env file changes, to rerun this build script.
  println!("cargo::rerun-if-changed=.env");
  println!("cargo::rerun-if-env-changed=LLAMA_API_URL");

  // .env is optional, the public API is the fallback
  dotenv().ok();

  let api_url = std::env::var("LLAMA_API_URL").unwrap_or_else(|_| DEFAULT_LLAMA_API_URL.to_string());
  println!("cargo::rustc-env=LLAMA_API_URL={}", api_url.trim_end_matches('/'));
}
