/// Base URL of the lead-intake service, baked in at build time.
/// Falls back to the local development backend when unset.
pub fn api_base_url() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or("http://localhost:5000")
}
