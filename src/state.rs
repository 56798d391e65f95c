//! Presentation state — four chart slots, app-owned, orchestrator-written.
//!
//! Every write carries a [`LifecycleToken`]. A token goes stale when the state
//! is unmounted or mounted again, and writes made with a stale token are
//! dropped. Each slot settles (loaded or failed) at most once per mount.

use crate::domain::candle::CandlePoint;
use crate::domain::series::CategoricalViewModel;
use crate::shared::ChartKind;

use async_lock::RwLock;
use std::sync::Arc;

// ─── Slots ───────────────────────────────────────────────────────────────────

/// One slot's lifecycle: `Idle → Fetching → {Loaded | Failed}`.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotState<T> {
    Idle,
    Fetching,
    Loaded(T),
    /// Fetch or transform failed; holds the logged reason.
    Failed(String),
}

impl<T> Default for SlotState<T> {
    fn default() -> Self {
        SlotState::Idle
    }
}

impl<T> SlotState<T> {
    pub fn phase(&self) -> SlotPhase {
        match self {
            SlotState::Idle => SlotPhase::Idle,
            SlotState::Fetching => SlotPhase::Fetching,
            SlotState::Loaded(_) => SlotPhase::Loaded,
            SlotState::Failed(_) => SlotPhase::Failed,
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            SlotState::Loaded(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.phase().is_settled()
    }
}

/// Data-free view of a [`SlotState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotPhase {
    Idle,
    Fetching,
    Loaded,
    Failed,
}

impl SlotPhase {
    pub fn is_settled(&self) -> bool {
        matches!(self, SlotPhase::Loaded | SlotPhase::Failed)
    }
}

/// A transformed view model, tagged with the slot it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    Line(CategoricalViewModel),
    Bar(CategoricalViewModel),
    Pie(CategoricalViewModel),
    Candlestick(Vec<CandlePoint>),
}

impl ChartData {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartData::Line(_) => ChartKind::Line,
            ChartData::Bar(_) => ChartKind::Bar,
            ChartData::Pie(_) => ChartKind::Pie,
            ChartData::Candlestick(_) => ChartKind::Candlestick,
        }
    }
}

/// Cloned read view of all four slots, handed to the render dispatcher.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSnapshot {
    pub line: SlotState<CategoricalViewModel>,
    pub bar: SlotState<CategoricalViewModel>,
    pub pie: SlotState<CategoricalViewModel>,
    /// A loaded empty vector renders exactly like an unloaded slot.
    pub candle: SlotState<Vec<CandlePoint>>,
}

impl DashboardSnapshot {
    pub fn phase(&self, kind: ChartKind) -> SlotPhase {
        match kind {
            ChartKind::Line => self.line.phase(),
            ChartKind::Bar => self.bar.phase(),
            ChartKind::Pie => self.pie.phase(),
            ChartKind::Candlestick => self.candle.phase(),
        }
    }

    /// Failure reason recorded for `kind`, if it failed.
    pub fn failure(&self, kind: ChartKind) -> Option<&str> {
        match kind {
            ChartKind::Line => failure_of(&self.line),
            ChartKind::Bar => failure_of(&self.bar),
            ChartKind::Pie => failure_of(&self.pie),
            ChartKind::Candlestick => failure_of(&self.candle),
        }
    }

    pub fn all_settled(&self) -> bool {
        ChartKind::ALL.iter().all(|k| self.phase(*k).is_settled())
    }
}

fn failure_of<T>(slot: &SlotState<T>) -> Option<&str> {
    match slot {
        SlotState::Failed(reason) => Some(reason.as_str()),
        _ => None,
    }
}

// ─── Lifecycle ───────────────────────────────────────────────────────────────

/// Proof of which mount a write belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LifecycleToken {
    generation: u64,
}

impl LifecycleToken {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Result of a state write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Applied,
    /// The token's mount has ended; nothing was written.
    Stale,
    /// The slot was not in a phase that accepts this transition.
    Rejected { current: SlotPhase },
}

// ─── Observers ───────────────────────────────────────────────────────────────

/// Notified after every applied slot transition, and with `SlotPhase::Idle`
/// for each slot a mount or unmount clears.
///
/// Called outside the state lock, so observers may read the state.
pub trait StateObserver: Send + Sync {
    fn on_slot_changed(&self, kind: ChartKind, phase: SlotPhase);
}

impl<F> StateObserver for F
where
    F: Fn(ChartKind, SlotPhase) + Send + Sync,
{
    fn on_slot_changed(&self, kind: ChartKind, phase: SlotPhase) {
        self(kind, phase)
    }
}

// ─── ChartPresentationState ──────────────────────────────────────────────────

#[derive(Default)]
struct Inner {
    generation: u64,
    mounted: bool,
    slots: DashboardSnapshot,
}

enum Transition {
    Begin,
    Load(ChartData),
    Fail(String),
}

/// The four chart slots plus mount bookkeeping.
///
/// Only the orchestrator writes; renderers read through [`snapshot`](Self::snapshot).
#[derive(Default)]
pub struct ChartPresentationState {
    inner: RwLock<Inner>,
    observers: RwLock<Vec<Arc<dyn StateObserver>>>,
}

impl ChartPresentationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new lifecycle. All slots return to `Idle` and every earlier
    /// token goes stale.
    pub async fn mount(&self) -> LifecycleToken {
        let (token, reset) = {
            let mut inner = self.inner.write().await;
            inner.generation += 1;
            inner.mounted = true;
            let reset = Self::clear_slots(&mut inner);
            tracing::debug!(generation = inner.generation, "Dashboard state mounted");
            let token = LifecycleToken {
                generation: inner.generation,
            };
            (token, reset)
        };
        self.notify_reset(reset).await;
        token
    }

    /// End the lifecycle `token` belongs to and discard all slot contents.
    ///
    /// Returns `false` if the token was already stale.
    pub async fn unmount(&self, token: &LifecycleToken) -> bool {
        let reset = {
            let mut inner = self.inner.write().await;
            if !Self::is_current(&inner, token) {
                return false;
            }
            inner.generation += 1;
            inner.mounted = false;
            tracing::debug!(generation = token.generation, "Dashboard state unmounted");
            Self::clear_slots(&mut inner)
        };
        self.notify_reset(reset).await;
        true
    }

    pub async fn is_mounted(&self) -> bool {
        self.inner.read().await.mounted
    }

    pub async fn is_live(&self, token: &LifecycleToken) -> bool {
        Self::is_current(&*self.inner.read().await, token)
    }

    /// `Idle → Fetching`.
    pub async fn begin(&self, token: &LifecycleToken, kind: ChartKind) -> CommitOutcome {
        self.apply(token, kind, Transition::Begin).await
    }

    /// `Idle | Fetching → Loaded`.
    pub async fn commit(&self, token: &LifecycleToken, data: ChartData) -> CommitOutcome {
        let kind = data.kind();
        self.apply(token, kind, Transition::Load(data)).await
    }

    /// `Idle | Fetching → Failed`.
    pub async fn fail(
        &self,
        token: &LifecycleToken,
        kind: ChartKind,
        reason: impl Into<String>,
    ) -> CommitOutcome {
        self.apply(token, kind, Transition::Fail(reason.into()))
            .await
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        self.inner.read().await.slots.clone()
    }

    pub async fn phase(&self, kind: ChartKind) -> SlotPhase {
        self.inner.read().await.slots.phase(kind)
    }

    pub async fn subscribe(&self, observer: Arc<dyn StateObserver>) {
        self.observers.write().await.push(observer);
    }

    /// Reset every slot to `Idle`, returning the kinds that were not idle.
    fn clear_slots(inner: &mut Inner) -> Vec<ChartKind> {
        let touched = ChartKind::ALL
            .into_iter()
            .filter(|kind| inner.slots.phase(*kind) != SlotPhase::Idle)
            .collect();
        inner.slots = DashboardSnapshot::default();
        touched
    }

    async fn notify_reset(&self, kinds: Vec<ChartKind>) {
        for kind in kinds {
            self.notify(kind, SlotPhase::Idle).await;
        }
    }

    async fn notify(&self, kind: ChartKind, phase: SlotPhase) {
        let observers = self.observers.read().await.clone();
        for observer in observers {
            observer.on_slot_changed(kind, phase);
        }
    }

    fn is_current(inner: &Inner, token: &LifecycleToken) -> bool {
        inner.mounted && inner.generation == token.generation
    }

    async fn apply(
        &self,
        token: &LifecycleToken,
        kind: ChartKind,
        transition: Transition,
    ) -> CommitOutcome {
        let phase = {
            let mut inner = self.inner.write().await;
            if !Self::is_current(&inner, token) {
                tracing::warn!(
                    chart = %kind,
                    generation = token.generation,
                    "Discarding write from ended lifecycle"
                );
                return CommitOutcome::Stale;
            }

            let current = inner.slots.phase(kind);
            let accepted = match transition {
                Transition::Begin => current == SlotPhase::Idle,
                Transition::Load(_) | Transition::Fail(_) => !current.is_settled(),
            };
            if !accepted {
                tracing::warn!(chart = %kind, ?current, "Slot transition rejected");
                return CommitOutcome::Rejected { current };
            }

            let slots = &mut inner.slots;
            match transition {
                Transition::Begin => match kind {
                    ChartKind::Line => slots.line = SlotState::Fetching,
                    ChartKind::Bar => slots.bar = SlotState::Fetching,
                    ChartKind::Pie => slots.pie = SlotState::Fetching,
                    ChartKind::Candlestick => slots.candle = SlotState::Fetching,
                },
                Transition::Load(data) => match data {
                    ChartData::Line(vm) => slots.line = SlotState::Loaded(vm),
                    ChartData::Bar(vm) => slots.bar = SlotState::Loaded(vm),
                    ChartData::Pie(vm) => slots.pie = SlotState::Loaded(vm),
                    ChartData::Candlestick(points) => slots.candle = SlotState::Loaded(points),
                },
                Transition::Fail(reason) => match kind {
                    ChartKind::Line => slots.line = SlotState::Failed(reason),
                    ChartKind::Bar => slots.bar = SlotState::Failed(reason),
                    ChartKind::Pie => slots.pie = SlotState::Failed(reason),
                    ChartKind::Candlestick => slots.candle = SlotState::Failed(reason),
                },
            }
            slots.phase(kind)
        };

        self.notify(kind, phase).await;
        CommitOutcome::Applied
    }
}
