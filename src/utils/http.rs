use crate::error::PipelineResult;
use reqwest::blocking::Client;
use std::time::Duration;

/// Get standard user agent string
pub fn get_user_agent() -> &'static str {
    concat!("CardWebp/", env!("CARGO_PKG_VERSION"))
}

/// Blocking client shared by catalog requests. No timeout is set, a stalled
/// server stalls the run.
pub fn build_client() -> PipelineResult<Client> {
    let client = Client::builder()
        .user_agent(get_user_agent())
        .timeout(None::<Duration>)
        .build()?;
    Ok(client)
}
