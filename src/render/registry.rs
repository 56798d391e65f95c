//! Process-wide renderer component registry.
//!
//! Renderers need their scales, elements and interaction plugins registered
//! before the first draw. Startup code calls [`init`] once; registration is
//! idempotent, so calling it again (or registering a component twice) is a
//! no-op that reports `false`.

use crate::shared::ChartKind;

use lazy_static::lazy_static;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

/// A renderer building block that must be registered before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    CategoryScale,
    LinearScale,
    TimeScale,
    LineElement,
    PointElement,
    BarElement,
    ArcElement,
    CandlestickElement,
    Tooltip,
    Legend,
    Crosshair,
    /// Zoom and pan on categorical charts.
    Zoom,
}

/// Everything [`init`] registers.
pub const DEFAULT_COMPONENTS: [Component; 12] = [
    Component::CategoryScale,
    Component::LinearScale,
    Component::TimeScale,
    Component::LineElement,
    Component::PointElement,
    Component::BarElement,
    Component::ArcElement,
    Component::CandlestickElement,
    Component::Tooltip,
    Component::Legend,
    Component::Crosshair,
    Component::Zoom,
];

lazy_static! {
    static ref REGISTRY: Mutex<HashSet<Component>> = Mutex::new(HashSet::new());
}

fn registry() -> MutexGuard<'static, HashSet<Component>> {
    // The set stays consistent even if a holder panicked.
    REGISTRY.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Register one component. Returns `true` if it was not registered yet.
pub fn register(component: Component) -> bool {
    let added = registry().insert(component);
    if added {
        tracing::debug!(?component, "Registered renderer component");
    }
    added
}

/// Register all default components. Returns `true` if anything was added.
pub fn init() -> bool {
    DEFAULT_COMPONENTS
        .iter()
        .fold(false, |added, c| register(*c) || added)
}

pub fn is_registered(component: Component) -> bool {
    registry().contains(&component)
}

/// Components a chart kind needs.
pub fn required_for(kind: ChartKind) -> &'static [Component] {
    match kind {
        ChartKind::Line => &[
            Component::CategoryScale,
            Component::LinearScale,
            Component::LineElement,
            Component::PointElement,
        ],
        ChartKind::Bar => &[
            Component::CategoryScale,
            Component::LinearScale,
            Component::BarElement,
        ],
        ChartKind::Pie => &[Component::ArcElement],
        ChartKind::Candlestick => &[
            Component::TimeScale,
            Component::LinearScale,
            Component::CandlestickElement,
            Component::Crosshair,
        ],
    }
}

/// Components `kind` needs that are not registered.
pub fn missing_for(kind: ChartKind) -> Vec<Component> {
    let registered = registry();
    required_for(kind)
        .iter()
        .copied()
        .filter(|c| !registered.contains(c))
        .collect()
}
