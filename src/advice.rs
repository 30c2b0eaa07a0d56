// tuido — a terminal to-do list with a live clock and daily advice
// Copyright (C) 2026  The tuido authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! One-shot "advice of the day" fetch. Fires once at startup; on any
//! failure the result is logged and discarded — the panel keeps its
//! placeholder for the rest of the session. No retry, no timeout beyond
//! the client's own.

use serde::Deserialize;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::app::AppEvent;

const ADVICE_URL: &str = "https://korean-advice-open-api.vercel.app/api/advice";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// The quote payload. The endpoint sends extra fields (profile data);
/// serde drops what we do not model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Advice {
    pub message: String,
    pub author: String,
}

/// Spawn the fetch task. Fire-and-forget: the only observable outcomes are
/// an `AdviceFetched` event or a warn-level log line.
pub fn start_fetch(tx: mpsc::UnboundedSender<AppEvent>) {
    spawn_fetch(tx, ADVICE_URL);
}

fn spawn_fetch(
    tx: mpsc::UnboundedSender<AppEvent>,
    url: &'static str,
) -> tokio::task::JoinHandle<()> {
    tokio::task::spawn_local(async move {
        match fetch(url).await {
            Ok(advice) => {
                let _ = tx.send(AppEvent::AdviceFetched(advice));
            }
            Err(err) => tracing::warn!("advice fetch failed: {err:#}"),
        }
    })
}

async fn fetch(url: &str) -> anyhow::Result<Advice> {
    let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.json::<Advice>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn advice_parses_from_the_endpoint_shape() {
        let raw = r#"{
            "author": "괴테",
            "authorProfile": "시인",
            "message": "서두르지 말라. 그러나 쉬지도 말라."
        }"#;
        let advice: Advice = serde_json::from_str(raw).unwrap();
        assert_eq!(advice.author, "괴테");
        assert_eq!(advice.message, "서두르지 말라. 그러나 쉬지도 말라.");
    }

    #[test]
    fn advice_with_missing_fields_is_rejected() {
        let raw = r#"{"author": "nobody"}"#;
        assert!(serde_json::from_str::<Advice>(raw).is_err());
    }

    #[tokio::test]
    async fn failed_fetch_is_an_error_not_a_panic() {
        // Unroutable local port: connection refused, fast.
        let result = fetch("http://127.0.0.1:9/api/advice").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn failed_fetch_sends_no_event() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let (tx, mut rx) = mpsc::unbounded_channel();
                spawn_fetch(tx, "http://127.0.0.1:9/api/advice").await.unwrap();
                assert!(rx.try_recv().is_err());
            })
            .await;
    }
}
