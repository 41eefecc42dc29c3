//! Fan-out/fan-in of one batch of candidate requests.

use futures::future::join_all;
use tokio::task::JoinHandle;

use crate::config::FetcherConfig;
use crate::error_handling::{FetchError, InfoType, ProcessingStats};
use crate::models::RegionId;

use super::request::{fetch_candidate, request_url};

/// Body returned for one candidate code.
#[derive(Debug)]
pub(crate) struct CandidateResponse {
    pub code: String,
    pub body: String,
}

/// Issues one request per key concurrently and waits for all of them.
///
/// Every request runs in its own task and is always awaited, so a failing
/// request does not cancel its siblings. Results are returned in issue order;
/// the first failure in that order becomes the batch's error and the other
/// results are discarded.
pub(crate) async fn fetch_batch(
    client: &reqwest::Client,
    config: &FetcherConfig,
    region: RegionId,
    keys: &[u16],
    stats: &ProcessingStats,
) -> Result<Vec<CandidateResponse>, FetchError> {
    let (codes, handles): (Vec<String>, Vec<JoinHandle<Result<String, reqwest::Error>>>) = keys
        .iter()
        .map(|&key| {
            let code = region.candidate_code(key);
            let url = request_url(config, &code);
            let client = client.clone();
            stats.increment_info(InfoType::RequestSent);
            let handle = tokio::spawn(async move { fetch_candidate(&client, &url).await });
            (code, handle)
        })
        .unzip();

    let results = join_all(handles).await;

    codes
        .into_iter()
        .zip(results)
        .map(|(code, joined)| match joined {
            Ok(Ok(body)) => Ok(CandidateResponse { code, body }),
            Ok(Err(source)) => Err(FetchError::FetchFailed { code, source }),
            Err(source) => Err(FetchError::TaskAborted { code, source }),
        })
        .collect()
}
