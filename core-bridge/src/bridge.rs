//! Callback-to-future bridging.
//!
//! The native subsystems only offer single-shot completion callbacks with no
//! cancellation support. [`await_callback`] converts one such operation into
//! an awaited `Result` by racing two independent terminal events into the
//! same future: the native completion and the caller's cancellation.
//! Whichever resolves first wins; the other is discarded.
//!
//! The completion signal and result slot are a single `oneshot` channel. The
//! [`Completion`] sender handed to the native operation is one-shot by
//! construction (it is consumed on use), its `send` is synchronous and
//! thread-safe, so the callback may fire during registration or from any
//! thread the platform chooses. After cancellation the receiver is dropped
//! and a late resolve hits a closed channel: best-effort cancellation, the
//! underlying operation is never assumed to stop.

use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use bridge_traits::BridgeError;

use crate::error::{Result, WaitError};

/// One-shot completion handle given to a native operation.
///
/// Consuming methods enforce the invoke-exactly-once contract at the type
/// level. Resolving after the waiter has been cancelled is harmless; the
/// value is discarded.
pub struct Completion<T> {
    tx: oneshot::Sender<std::result::Result<T, BridgeError>>,
}

impl<T> Completion<T> {
    /// Delivers the operation's value.
    pub fn resolve(self, value: T) {
        if self.tx.send(Ok(value)).is_err() {
            trace!("completion resolved after waiter left; value discarded");
        }
    }

    /// Delivers the operation's error.
    pub fn fail(self, error: BridgeError) {
        if self.tx.send(Err(error)).is_err() {
            trace!("completion failed after waiter left; error discarded");
        }
    }

    /// Delivers a ready-made result.
    pub fn deliver(self, result: std::result::Result<T, BridgeError>) {
        if self.tx.send(result).is_err() {
            trace!("completion delivered after waiter left; result discarded");
        }
    }
}

/// Converts a one-shot native callback into an awaited result.
///
/// `register` invokes the native operation, handing it the [`Completion`]
/// handle. It runs synchronously on the caller; if it fails, the error is
/// returned immediately and no pending operation is left behind.
///
/// Outcomes:
/// - the native callback fires first: its value, or [`WaitError::Native`]
///   carrying the native description verbatim;
/// - `cancel` fires first: [`WaitError::Cancelled`], with any later callback
///   invocation discarded;
/// - the native side drops the handle without firing it:
///   [`WaitError::Abandoned`], so the caller never hangs.
///
/// Each call owns its own channel; concurrent waits share no state.
///
/// # Examples
///
/// ```
/// use core_bridge::{await_callback, CancellationToken, Completion};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let cancel = CancellationToken::new();
/// let value: u32 = await_callback(
///     |done: Completion<u32>| {
///         // A native operation would stash `done` and fire it later,
///         // possibly from another thread.
///         done.resolve(42);
///         Ok(())
///     },
///     &cancel,
/// )
/// .await
/// .unwrap();
/// assert_eq!(value, 42);
/// # }
/// ```
pub async fn await_callback<T, F>(register: F, cancel: &CancellationToken) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(Completion<T>) -> std::result::Result<(), BridgeError>,
{
    let (tx, rx) = oneshot::channel();

    // Synchronous registration failure resolves the wait immediately.
    register(Completion { tx })?;

    tokio::select! {
        _ = cancel.cancelled() => {
            debug!("wait cancelled before native completion");
            Err(WaitError::Cancelled)
        }
        outcome = rx => match outcome {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => Err(WaitError::from(err)),
            Err(_) => Err(WaitError::Abandoned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn resolves_with_value_from_synchronous_callback() {
        let cancel = CancellationToken::new();
        let result: Result<&str> = await_callback(
            |done| {
                done.resolve("ok");
                Ok(())
            },
            &cancel,
        )
        .await;

        assert_eq!(result.unwrap(), "ok");
    }

    #[tokio::test]
    async fn resolves_with_value_from_foreign_thread() {
        let cancel = CancellationToken::new();
        let result: Result<u64> = await_callback(
            |done| {
                thread::spawn(move || {
                    thread::sleep(Duration::from_millis(10));
                    done.resolve(7);
                });
                Ok(())
            },
            &cancel,
        )
        .await;

        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn native_error_description_is_preserved_verbatim() {
        let cancel = CancellationToken::new();
        let result: Result<()> = await_callback(
            |done| {
                done.fail(BridgeError::native("Could not connect to the server."));
                Ok(())
            },
            &cancel,
        )
        .await;

        assert_eq!(
            result.unwrap_err(),
            WaitError::Native("Could not connect to the server.".to_string())
        );
    }

    #[tokio::test]
    async fn synchronous_registration_failure_resolves_immediately() {
        let cancel = CancellationToken::new();
        let result: Result<()> = await_callback(
            |_done: Completion<()>| Err(BridgeError::native("No such account type")),
            &cancel,
        )
        .await;

        assert_eq!(
            result.unwrap_err(),
            WaitError::Native("No such account type".to_string())
        );
    }

    #[tokio::test]
    async fn cancellation_wins_over_never_firing_callback() {
        let cancel = CancellationToken::new();
        cancel.cancel();

        // Leak the completion into a slot the test controls; it never fires.
        let result: Result<()> = await_callback(
            |done| {
                thread::spawn(move || {
                    thread::sleep(Duration::from_secs(5));
                    done.resolve(());
                });
                Ok(())
            },
            &cancel,
        )
        .await;

        assert_eq!(result.unwrap_err(), WaitError::Cancelled);
    }

    #[tokio::test]
    async fn late_callback_after_cancellation_is_discarded() {
        let cancel = CancellationToken::new();
        let (slot_tx, mut slot_rx) = mpsc::unbounded_channel::<Completion<u32>>();

        cancel.cancel();
        let result: Result<u32> = await_callback(
            |done| {
                slot_tx.send(done).unwrap();
                Ok(())
            },
            &cancel,
        )
        .await;
        assert_eq!(result.unwrap_err(), WaitError::Cancelled);

        // Firing the orphaned completion now must not panic or be observable.
        let orphaned = slot_rx.recv().await.unwrap();
        orphaned.resolve(99);
    }

    #[tokio::test]
    async fn dropped_completion_reports_abandonment() {
        let cancel = CancellationToken::new();
        let result: Result<u32> = await_callback(
            |done| {
                drop(done);
                Ok(())
            },
            &cancel,
        )
        .await;

        assert_eq!(result.unwrap_err(), WaitError::Abandoned);
    }

    #[tokio::test]
    async fn concurrent_waits_are_independent() {
        let cancel_a = CancellationToken::new();
        let cancel_b = CancellationToken::new();

        let wait_a = await_callback(
            |done: Completion<u32>| {
                thread::spawn(move || {
                    thread::sleep(Duration::from_millis(20));
                    done.resolve(1);
                });
                Ok(())
            },
            &cancel_a,
        );
        let wait_b = await_callback(
            |done: Completion<u32>| {
                done.resolve(2);
                Ok(())
            },
            &cancel_b,
        );

        let (a, b) = tokio::join!(wait_a, wait_b);
        assert_eq!(a.unwrap(), 1);
        assert_eq!(b.unwrap(), 2);
    }
}
