use std::sync::Arc;
use std::time::Duration;

use catalog::{Scenario, ScenarioCatalog};
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Tuning knobs for the session controller.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Delay between selecting a scenario and it becoming current,
    /// standing in for the load time of a real data fetch.
    pub transition_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            transition_delay: Duration::from_millis(500),
        }
    }
}

/// Selection state published to the presentation layer.
///
/// While `loading` is true, `scenario_id` is the pending target and the
/// presentation should render placeholders instead of stale numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub scenario_id: String,
    pub loading: bool,
}

struct SessionState {
    current: usize,
    selected: usize,
    /// Bumped on every accepted `select`; a pending switch applies only if
    /// its epoch is still the latest.
    epoch: u64,
    pending: Option<JoinHandle<()>>,
}

struct Shared {
    catalog: Arc<ScenarioCatalog>,
    state: Mutex<SessionState>,
    changes: watch::Sender<SessionSnapshot>,
}

/// Owns which scenario is current and the delayed transition between them.
///
/// Only the most recent `select` wins: re-selecting while a switch is
/// pending aborts the previous timer task, and a stale task that slips
/// past the abort is rejected by the epoch check. The rendering surface
/// keeps drawing the previous scenario until the switch lands.
pub struct SessionController {
    shared: Arc<Shared>,
    delay: Duration,
}

impl SessionController {
    /// Starts idle on the catalog's first scenario.
    pub fn new(catalog: Arc<ScenarioCatalog>, config: SessionConfig) -> Self {
        let (changes, _) = watch::channel(SessionSnapshot {
            scenario_id: catalog.first().id.clone(),
            loading: false,
        });
        Self {
            shared: Arc::new(Shared {
                catalog,
                state: Mutex::new(SessionState {
                    current: 0,
                    selected: 0,
                    epoch: 0,
                    pending: None,
                }),
                changes,
            }),
            delay: config.transition_delay,
        }
    }

    /// Requests a switch to `id`, applied after the configured delay.
    ///
    /// Unknown ids are ignored and the previous scenario stays active.
    /// Must be called from within a tokio runtime.
    pub fn select(&self, id: &str) {
        let Some(target) = self.shared.catalog.index_of(id) else {
            debug!("ignoring selection of unknown scenario id: {id}");
            return;
        };

        let mut state = self.shared.state.lock();
        if let Some(prev) = state.pending.take() {
            prev.abort();
        }
        state.epoch += 1;
        state.selected = target;
        let epoch = state.epoch;

        let shared = Arc::clone(&self.shared);
        let delay = self.delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = shared.state.lock();
            // A newer select superseded this switch while we slept.
            if state.epoch != epoch {
                return;
            }
            state.current = target;
            state.pending = None;
            let _ = shared.changes.send(SessionSnapshot {
                scenario_id: shared.catalog.scenarios()[target].id.clone(),
                loading: false,
            });
        });
        state.pending = Some(task);
        let _ = self.shared.changes.send(SessionSnapshot {
            scenario_id: id.to_string(),
            loading: true,
        });
        debug!("scenario switch to {id} scheduled in {delay:?}");
    }

    /// The active scenario; stays on the previous one while a switch is
    /// pending.
    pub fn current(&self) -> &Scenario {
        let idx = self.shared.state.lock().current;
        &self.shared.catalog.scenarios()[idx]
    }

    /// Id of the most recently selected scenario: the pending target while
    /// loading, otherwise the current scenario's id.
    pub fn selected_id(&self) -> &str {
        let idx = self.shared.state.lock().selected;
        &self.shared.catalog.scenarios()[idx].id
    }

    pub fn is_loading(&self) -> bool {
        self.shared.state.lock().pending.is_some()
    }

    /// Change notifications for the presentation layer. Watch semantics:
    /// slow receivers observe only the latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.shared.changes.subscribe()
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        if let Some(pending) = self.shared.state.lock().pending.take() {
            pending.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use catalog::{LonLat, RiskCollection, RiskPoint, Scenario, ScenarioCatalog};

    use super::{SessionConfig, SessionController, SessionSnapshot};

    const DELAY: Duration = Duration::from_millis(500);

    fn scenario(id: &str, features: Option<Vec<RiskPoint>>) -> Scenario {
        Scenario {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: format!("scenario {id}"),
            center: LonLat {
                lon: -46.63,
                lat: -23.55,
            },
            zoom: 11,
            data: features.map(|features| RiskCollection { features }),
        }
    }

    fn controller() -> SessionController {
        let catalog = ScenarioCatalog::new(vec![
            scenario("a", None),
            scenario(
                "b",
                Some(vec![
                    RiskPoint {
                        lon: -46.63,
                        lat: -23.55,
                        value: 100.0,
                        eai: 0.0,
                    },
                    RiskPoint {
                        lon: -46.30,
                        lat: -23.96,
                        value: 200.0,
                        eai: 50.0,
                    },
                ]),
            ),
            scenario("c", Some(vec![])),
        ])
        .unwrap();
        SessionController::new(Arc::new(catalog), SessionConfig {
            transition_delay: DELAY,
        })
    }

    #[tokio::test(start_paused = true)]
    async fn starts_idle_on_the_first_scenario() {
        let session = controller();
        assert_eq!(session.current().id, "a");
        assert_eq!(session.selected_id(), "a");
        assert!(!session.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_id_is_a_noop() {
        let session = controller();
        session.select("nope");
        assert_eq!(session.current().id, "a");
        assert!(!session.is_loading());
        tokio::time::sleep(DELAY * 2).await;
        assert_eq!(session.current().id, "a");
    }

    #[tokio::test(start_paused = true)]
    async fn switch_lands_after_the_delay() {
        let session = controller();
        session.select("b");
        // The previous scenario stays active for rendering while loading.
        assert_eq!(session.current().id, "a");
        assert_eq!(session.selected_id(), "b");
        assert!(session.is_loading());

        tokio::time::sleep(DELAY + Duration::from_millis(1)).await;
        assert_eq!(session.current().id, "b");
        assert_eq!(session.selected_id(), "b");
        assert!(!session.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn reselecting_supersedes_the_pending_switch() {
        let session = controller();
        session.select("b");
        tokio::time::sleep(Duration::from_millis(400)).await;
        session.select("c");

        // Past b's first deadline: its aborted timer must not have won.
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(session.current().id, "a");
        assert!(session.is_loading());
        assert_eq!(session.selected_id(), "c");

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(session.current().id, "c");
        assert!(!session.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn back_to_back_selects_apply_only_the_latest() {
        let session = controller();
        session.select("b");
        session.select("c");
        tokio::time::sleep(DELAY * 3).await;
        assert_eq!(session.current().id, "c");
        assert!(!session.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn watchers_see_loading_then_exactly_one_idle() {
        let session = controller();
        let mut rx = session.subscribe();

        session.select("b");
        rx.changed().await.unwrap();
        assert_eq!(
            *rx.borrow_and_update(),
            SessionSnapshot {
                scenario_id: "b".to_string(),
                loading: true,
            }
        );

        rx.changed().await.unwrap();
        assert_eq!(
            *rx.borrow_and_update(),
            SessionSnapshot {
                scenario_id: "b".to_string(),
                loading: false,
            }
        );

        // No further transition arrives for this selection.
        let more = tokio::time::timeout(DELAY * 4, rx.changed()).await;
        assert!(more.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn active_scenario_feeds_summary_and_symbology() {
        let session = controller();
        session.select("b");
        tokio::time::sleep(DELAY * 2).await;

        let scenario = session.current();
        let summary = compute::RiskSummary::of(scenario);
        assert_eq!(summary.points, 2);
        assert_eq!(summary.total_value, 300.0);
        assert_eq!(summary.total_eai, 50.0);

        let features = &scenario.data.as_ref().unwrap().features;
        assert_eq!(symbology::MarkerStyle::for_point(&features[0]).radius, 6.0);
        let loss_radius = symbology::MarkerStyle::for_point(&features[1]).radius;
        assert!((loss_radius - 8.41514).abs() < 1e-4);

        let detail = symbology::PointDetail::for_point(&features[1]);
        assert_eq!(detail.exposed_value, "R$ 200");
        assert_eq!(detail.expected_annual_loss, "R$ 50,00");
        assert_eq!(detail.coordinates, "(-23.9600°, -46.3000°)");
    }
}
