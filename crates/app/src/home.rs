//! Home controller — runs the greeting fetch for a mounted home view.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use greeter_domain::home::HomeState;

use crate::ports::GreetingClient;

/// Liveness token for one mount of the home view.
///
/// Clones share the same flags: the view keeps one clone to call
/// [`MountHandle::unmount`] on cleanup while the fetch task holds another.
#[derive(Debug, Clone, Default)]
pub struct MountHandle {
    flags: Arc<MountFlags>,
}

#[derive(Debug, Default)]
struct MountFlags {
    unmounted: AtomicBool,
    fetch_started: AtomicBool,
}

impl MountHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the view as gone. Results settling afterwards are discarded.
    pub fn unmount(&self) {
        self.flags.unmounted.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        !self.flags.unmounted.load(Ordering::Acquire)
    }

    /// Claim the mount's single fetch. Returns `false` if already claimed.
    fn claim_fetch(&self) -> bool {
        !self.flags.fetch_started.swap(true, Ordering::AcqRel)
    }
}

/// Drives the home view from `Loading` to its settled state.
pub struct HomeController<C> {
    client: C,
}

impl<C: GreetingClient> HomeController<C> {
    /// Create a controller backed by the given client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Run the mount's fetch and return the state to apply.
    ///
    /// Returns `None` without touching the network when the mount already
    /// started its fetch or is gone, and `None` after the network call when
    /// the view unmounted before the result arrived. Callers apply the
    /// returned state as-is; it is never `Loading`.
    pub async fn load(&self, mount: &MountHandle) -> Option<HomeState> {
        if !mount.is_mounted() {
            tracing::debug!("home view already unmounted, skipping greeting fetch");
            return None;
        }
        if !mount.claim_fetch() {
            tracing::debug!("greeting fetch already started for this mount");
            return None;
        }

        tracing::debug!("fetching greeting");
        let result = self.client.fetch_greeting().await;
        if let Err(err) = &result {
            tracing::warn!(error = %err, "greeting fetch failed");
        }

        if !mount.is_mounted() {
            tracing::debug!("home view unmounted before greeting settled, discarding result");
            return None;
        }

        let state = HomeState::settle(result);
        tracing::debug!(?state, "greeting settled");
        Some(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greeter_domain::error::FetchFailure;
    use greeter_domain::greeting::GreetingResponse;
    use greeter_domain::home::FETCH_ERROR_TEXT;
    use std::future::Future;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;
    use tokio::sync::Notify;

    #[derive(Clone)]
    struct FakeClient {
        outcome: Result<GreetingResponse, FetchFailure>,
        calls: Arc<AtomicUsize>,
        gate: Option<Arc<Notify>>,
    }

    impl FakeClient {
        fn replying(outcome: Result<GreetingResponse, FetchFailure>) -> Self {
            Self {
                outcome,
                calls: Arc::new(AtomicUsize::new(0)),
                gate: None,
            }
        }

        fn held_until(mut self, gate: Arc<Notify>) -> Self {
            self.gate = Some(gate);
            self
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl GreetingClient for FakeClient {
        fn fetch_greeting(
            &self,
        ) -> impl Future<Output = Result<GreetingResponse, FetchFailure>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let outcome = self.outcome.clone();
            let gate = self.gate.clone();
            async move {
                if let Some(gate) = gate {
                    gate.notified().await;
                }
                outcome
            }
        }
    }

    #[tokio::test]
    async fn should_settle_loaded_when_fetch_succeeds() {
        let controller = HomeController::new(FakeClient::replying(Ok(GreetingResponse::new("hi"))));
        let mount = MountHandle::new();

        let state = controller.load(&mount).await.unwrap();

        assert_eq!(state, HomeState::Loaded("hi".to_string()));
        let view = state.view_state();
        assert_eq!(view.visible_message(), Some("hi"));
        assert!(view.error.is_none());
    }

    #[tokio::test]
    async fn should_settle_failed_with_fixed_text_when_fetch_fails() {
        let failures = [
            FetchFailure::Network("connection refused".to_string()),
            FetchFailure::Status(404),
            FetchFailure::Decode("expected a JSON object".to_string()),
        ];

        for failure in failures {
            let controller = HomeController::new(FakeClient::replying(Err(failure)));
            let state = controller.load(&MountHandle::new()).await.unwrap();

            assert_eq!(state, HomeState::Failed(FETCH_ERROR_TEXT.to_string()));
            assert_eq!(state.view_state().visible_message(), None);
        }
    }

    #[tokio::test]
    async fn should_stay_pending_until_fetch_settles() {
        let gate = Arc::new(Notify::new());
        let client = FakeClient::replying(Ok(GreetingResponse::new("hi"))).held_until(gate.clone());
        let controller = HomeController::new(client.clone());
        let mount = MountHandle::new();

        let load = controller.load(&mount);
        tokio::pin!(load);

        let pending = tokio::time::timeout(Duration::from_millis(20), &mut load).await;
        assert!(pending.is_err());
        assert_eq!(client.calls(), 1);
        assert!(mount.is_mounted());

        gate.notify_one();
        assert_eq!(load.await, Some(HomeState::Loaded("hi".to_string())));
    }

    #[tokio::test]
    async fn should_fetch_once_per_mount() {
        let client = FakeClient::replying(Ok(GreetingResponse::new("hi")));
        let controller = HomeController::new(client.clone());
        let mount = MountHandle::new();

        assert!(controller.load(&mount).await.is_some());
        assert!(controller.load(&mount).await.is_none());
        assert!(controller.load(&mount.clone()).await.is_none());

        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn should_fetch_again_on_remount() {
        let client = FakeClient::replying(Ok(GreetingResponse::new("hi")));
        let controller = HomeController::new(client.clone());

        let first = MountHandle::new();
        controller.load(&first).await;
        first.unmount();
        controller.load(&MountHandle::new()).await;

        assert_eq!(client.calls(), 2);
    }

    #[tokio::test]
    async fn should_discard_result_when_unmounted_before_settle() {
        let gate = Arc::new(Notify::new());
        let client = FakeClient::replying(Ok(GreetingResponse::new("hi"))).held_until(gate.clone());
        let controller = HomeController::new(client.clone());
        let mount = MountHandle::new();

        let load = controller.load(&mount);
        tokio::pin!(load);
        let pending = tokio::time::timeout(Duration::from_millis(20), &mut load).await;
        assert!(pending.is_err());

        mount.unmount();
        gate.notify_one();

        assert_eq!(load.await, None);
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn should_skip_fetch_when_already_unmounted() {
        let client = FakeClient::replying(Ok(GreetingResponse::new("hi")));
        let controller = HomeController::new(client.clone());
        let mount = MountHandle::new();
        mount.unmount();

        assert_eq!(controller.load(&mount).await, None);
        assert_eq!(client.calls(), 0);
    }

    #[test]
    fn should_share_liveness_between_clones() {
        let mount = MountHandle::new();
        let cleanup = mount.clone();
        assert!(mount.is_mounted());

        cleanup.unmount();
        assert!(!mount.is_mounted());
    }
}
