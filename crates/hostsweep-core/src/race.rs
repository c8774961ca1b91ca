//! First-of race between two futures.

use std::future::Future;
use std::time::Duration;

use futures::future::{self, Either};

/// Run `primary` and `fallback` concurrently and return whichever settles first.
///
/// Both futures are polled on the current task. The loser is dropped as soon
/// as the winner settles and is never polled again. If both are ready on the
/// same poll, `primary` wins.
pub async fn first_of<A, B, T>(primary: A, fallback: B) -> T
where
    A: Future<Output = T>,
    B: Future<Output = T>,
{
    let primary = std::pin::pin!(primary);
    let fallback = std::pin::pin!(fallback);

    match future::select(primary, fallback).await {
        Either::Left((value, _)) => value,
        Either::Right((value, _)) => value,
    }
}

/// Race `fut` against a timer of `deadline`. `None` means the timer won.
pub async fn with_deadline<F, T>(fut: F, deadline: Duration) -> Option<T>
where
    F: Future<Output = T>,
{
    first_of(async { Some(fut.await) }, async {
        tokio::time::sleep(deadline).await;
        None
    })
    .await
}
