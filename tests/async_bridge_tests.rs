//! Async adapter: per-step cancellation, stream interop, blocking helpers.

use futures::StreamExt;
use tokio_util::sync::CancellationToken;

use seqflow::prelude::*;

#[tokio::test]
async fn test_async_cursor_walks_whole_pipeline() {
    let token = CancellationToken::new();
    let seq = as_async(range(1, 5).unwrap().select(|v| v * 3));
    let mut cursor = seq.cursor(&token).expect("token is live");

    let mut seen = Vec::new();
    while cursor.advance().await.expect("not canceled") {
        seen.push(cursor.current());
    }
    assert_eq!(seen, vec![3, 6, 9, 12, 15]);
    assert_eq!(cursor.advance().await, Ok(false));
}

#[tokio::test]
async fn test_cancel_mid_iteration_fails_next_step() {
    let token = CancellationToken::new();
    let seq = as_async(range(0, 100).unwrap());
    let mut cursor = seq.cursor(&token).unwrap();

    for expected in 0..3 {
        assert_eq!(cursor.advance().await, Ok(true));
        assert_eq!(cursor.current(), expected);
    }
    token.cancel();
    assert_eq!(cursor.advance().await, Err(Error::OperationCanceled));
    // Still positioned on the last element produced before cancellation.
    assert_eq!(cursor.current(), 2);
}

#[tokio::test]
async fn test_child_token_cancellation_propagates() {
    let root = CancellationToken::new();
    let child = root.child_token();
    let seq = as_async(repeat('x', 10));
    let mut cursor = seq.cursor(&child).unwrap();
    assert_eq!(cursor.advance().await, Ok(true));
    root.cancel();
    assert_eq!(cursor.advance().await, Err(Error::OperationCanceled));
}

#[tokio::test]
async fn test_already_canceled_token_rejects_cursor() {
    let token = CancellationToken::new();
    token.cancel();
    let seq = as_async(range(0, 3).unwrap());
    assert!(matches!(seq.cursor(&token), Err(Error::OperationCanceled)));
}

#[tokio::test]
async fn test_stream_collects_elements() {
    let token = CancellationToken::new();
    let seq = as_async(range(0, 10).unwrap().filter(|v| v % 3 == 0));
    let items: Vec<i32> = seq
        .cursor(&token)
        .unwrap()
        .into_stream()
        .map(|item| item.expect("not canceled"))
        .collect()
        .await;
    assert_eq!(items, vec![0, 3, 6, 9]);
}

#[tokio::test]
async fn test_stream_ends_with_cancellation_error() {
    let token = CancellationToken::new();
    let seq = as_async(range(0, 10).unwrap());
    let stream = seq.cursor(&token).unwrap().into_stream();
    futures::pin_mut!(stream);

    assert_eq!(stream.next().await, Some(Ok(0)));
    token.cancel();
    assert_eq!(stream.next().await, Some(Err(Error::OperationCanceled)));
    assert_eq!(stream.next().await, None);
}

#[tokio::test]
async fn test_to_vec_async_matches_sync() {
    let token = CancellationToken::new();
    let pipeline = range(0, 5000).unwrap().filter(|v| v % 7 == 0).select(|v| v / 7);
    let expected = pipeline.to_vec();
    let got = to_vec_async(pipeline.clone(), &token).await.unwrap();
    assert_eq!(got, expected);

    let boxed = as_async(pipeline).to_array(&token).await.unwrap();
    assert_eq!(&*boxed, expected.as_slice());
}

#[tokio::test]
async fn test_to_array_async_canceled_before_start() {
    let token = CancellationToken::new();
    token.cancel();
    let err = to_array_async(repeat(1u8, 4), &token).await.unwrap_err();
    assert_eq!(err, Error::OperationCanceled);
}
