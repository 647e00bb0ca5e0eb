use dioxus::prelude::*;
use server::api::RemoteApi;
use shared_types::{AdminDashboardData, ClientDashboardData, FeatureFlags, FetchError};
use std::cell::Cell;
use std::rc::Rc;

/// Whether a dashboard is showing what the backend returned or the fixed
/// demo dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Live,
    Demo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub data: T,
    pub source: DataSource,
}

impl<T> Loaded<T> {
    pub fn is_demo(&self) -> bool {
        self.source == DataSource::Demo
    }
}

/// Fetch stats, then the roster. Either failure discards the other result.
pub async fn load_admin<A: RemoteApi>(api: &A) -> Result<AdminDashboardData, FetchError> {
    let stats = api.admin_stats().await?;
    let clients = api.admin_clients().await?;
    Ok(AdminDashboardData { stats, clients })
}

pub async fn load_client<A: RemoteApi>(api: &A) -> Result<ClientDashboardData, FetchError> {
    api.client_dashboard().await
}

/// Decide what a failed load turns into.
///
/// With `demo_fallback` on, any [`FetchError`] is replaced wholesale by
/// `demo()`. With it off, the error reaches the view.
pub fn apply_fallback<T>(
    result: Result<T, FetchError>,
    flags: &FeatureFlags,
    demo: impl FnOnce() -> T,
) -> Result<Loaded<T>, FetchError> {
    match result {
        Ok(data) => Ok(Loaded {
            data,
            source: DataSource::Live,
        }),
        Err(err) if flags.demo_fallback => {
            tracing::warn!(%err, "using demo data");
            Ok(Loaded {
                data: demo(),
                source: DataSource::Demo,
            })
        }
        Err(err) => Err(err),
    }
}

/// Liveness token for the component that spawned an async continuation.
///
/// Check [`MountGuard::is_mounted`] after every `.await` before writing
/// signals or navigating.
#[derive(Debug, Clone)]
pub struct MountGuard(Rc<Cell<bool>>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    pub fn release(&self) {
        self.0.set(false);
    }

    /// Run `apply` only while the owner is still mounted.
    pub fn guarded<R>(&self, apply: impl FnOnce() -> R) -> Option<R> {
        if self.is_mounted() {
            Some(apply())
        } else {
            tracing::debug!("dropping result for unmounted view");
            None
        }
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`MountGuard`] released when the calling component unmounts.
pub fn use_mount_guard() -> MountGuard {
    let guard = use_hook(MountGuard::new);
    let on_drop = guard.clone();
    use_drop(move || on_drop.release());
    guard
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedApi;
    use pretty_assertions::assert_eq;
    use shared_types::{demo, ClientRecord, ClientStatus, DashboardStats};

    fn flags(demo_fallback: bool) -> FeatureFlags {
        FeatureFlags {
            demo_fallback,
            ..FeatureFlags::default()
        }
    }

    fn live_stats() -> DashboardStats {
        DashboardStats {
            clients: 3,
            revenue: 15.0,
            pending: 1,
        }
    }

    fn live_roster() -> Vec<ClientRecord> {
        vec![ClientRecord {
            name: "Globex".into(),
            project: "Data Migration".into(),
            status: ClientStatus::Delayed,
            budget: "$120k".into(),
            avatar: "G".into(),
        }]
    }

    #[tokio::test]
    async fn admin_live_when_both_calls_succeed() {
        let api = ScriptedApi::default()
            .stats_with(Ok(live_stats()))
            .clients_with(Ok(live_roster()));
        let loaded = apply_fallback(load_admin(&api).await, &flags(true), demo::admin_dashboard)
            .unwrap();
        assert_eq!(loaded.source, DataSource::Live);
        assert_eq!(loaded.data.stats, live_stats());
        assert_eq!(loaded.data.clients, live_roster());
    }

    #[tokio::test]
    async fn admin_partial_success_is_replaced_entirely() {
        let cases = [
            ScriptedApi::default().stats_with(Ok(live_stats())),
            ScriptedApi::default().clients_with(Ok(live_roster())),
            ScriptedApi::default()
                .stats_with(Ok(live_stats()))
                .clients_with(Err(FetchError::Status {
                    status: 500,
                    message: None,
                })),
            ScriptedApi::default()
                .stats_with(Err(FetchError::Parse("bad".into())))
                .clients_with(Ok(live_roster())),
            ScriptedApi::default(),
        ];
        for api in cases {
            let loaded =
                apply_fallback(load_admin(&api).await, &flags(true), demo::admin_dashboard)
                    .unwrap();
            assert!(loaded.is_demo());
            assert_eq!(loaded.data, demo::admin_dashboard());
        }
    }

    #[tokio::test]
    async fn admin_stops_after_first_failure() {
        let api = ScriptedApi::default();
        assert!(load_admin(&api).await.is_err());
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn client_failure_yields_exact_demo_project() {
        let api = ScriptedApi::default().dashboard_with(Err(FetchError::Status {
            status: 404,
            message: Some("No active project".into()),
        }));
        let loaded =
            apply_fallback(load_client(&api).await, &flags(true), demo::client_dashboard)
                .unwrap();
        assert!(loaded.is_demo());
        assert_eq!(loaded.data, demo::client_dashboard());
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn fallback_disabled_surfaces_the_error() {
        let api = ScriptedApi::default();
        let err = apply_fallback(load_client(&api).await, &flags(false), demo::client_dashboard)
            .unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn guard_blocks_after_release() {
        let guard = MountGuard::new();
        assert_eq!(guard.guarded(|| 1), Some(1));

        let continuation = guard.clone();
        guard.release();
        let mut applied = false;
        assert_eq!(continuation.guarded(|| applied = true), None);
        assert!(!applied);
    }
}
