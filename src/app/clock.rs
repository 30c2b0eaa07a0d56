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

use chrono::Local;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use super::events::AppEvent;

const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Spawn the once-per-second clock task. The returned token scopes the task
/// to the event loop's lifetime; cancelling it (exactly once, on teardown)
/// stops the task from ticking into a torn-down UI.
pub(super) fn start(tx: mpsc::UnboundedSender<AppEvent>) -> CancellationToken {
    let token = CancellationToken::new();
    let task_token = token.clone();

    tokio::task::spawn_local(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                () = task_token.cancelled() => break,
                _ = interval.tick() => {
                    if tx.send(AppEvent::Tick(Local::now())).is_err() {
                        break;
                    }
                }
            }
        }
        tracing::debug!("clock task stopped");
    });

    token
}
