//! Backend API
//!
//! HTTP calls made from the page. Only the resume list is fetched.

use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use crate::error::FetchError;
use crate::models::ResumeSummary;
use crate::state::ResumeLoad;

async fn request_resumes(endpoint: &str) -> Result<Vec<ResumeSummary>, FetchError> {
    let resp = Request::get(endpoint)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }
    resp.json::<Vec<ResumeSummary>>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fetch the signed-in user's resumes, giving up after `timeout_ms`
pub async fn fetch_user_resumes(endpoint: &str, timeout_ms: u32) -> Result<Vec<ResumeSummary>, FetchError> {
    let request = Box::pin(request_resumes(endpoint));
    let timeout = Box::pin(TimeoutFuture::new(timeout_ms));
    match select(request, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(FetchError::Timeout),
    }
}

/// Fetch and fold the outcome into a `ResumeLoad`. Failures are logged.
pub async fn load_user_resumes(endpoint: &str, timeout_ms: u32) -> ResumeLoad {
    match fetch_user_resumes(endpoint, timeout_ms).await {
        Ok(resumes) => {
            log::debug!("[search] loaded {} resumes", resumes.len());
            ResumeLoad::Loaded(resumes)
        }
        Err(err) => {
            log::error!("[search] failed to fetch resumes: {}", err);
            ResumeLoad::Failed(err)
        }
    }
}
