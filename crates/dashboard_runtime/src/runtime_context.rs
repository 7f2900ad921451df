//! Runtime provider and context wiring for the dashboard.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, boot hydration,
//! and the refresh timers. Markup lives with the embedding application.
#![allow(clippy::clone_on_copy)]

use leptos::*;
use platform_host::HostServices;

use crate::{
    clock::{read_local_clock, ClockReading},
    effect_executor,
    host::{install_timers, DashboardHostContext},
    model::{DashboardState, InteractionState},
    reducer::{reduce_dashboard, DashboardAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading dashboard state and dispatching [`DashboardAction`] values.
pub struct DashboardRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<DashboardHostContext>,
    /// Reactive dashboard state signal.
    pub state: RwSignal<DashboardState>,
    /// Reactive drag and editor state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Clock face, refreshed on every tick.
    pub clock: RwSignal<ClockReading>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DashboardAction>,
}

impl DashboardRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DashboardAction) {
        self.dispatch.call(action);
    }
}

fn install_runtime_orchestration(runtime: DashboardRuntimeContext) {
    runtime
        .host
        .get_value()
        .install_boot_hydration(runtime.dispatch);
    effect_executor::install(runtime);
    install_timers(runtime);
}

#[component]
/// Provides [`DashboardRuntimeContext`] to descendant components and boots persisted state.
pub fn DashboardProvider(
    /// Injected host bundle assembled by the entry layer.
    #[prop(optional)]
    host_services: Option<HostServices>,
    children: Children,
) -> impl IntoView {
    let host = store_value(
        host_services
            .map(DashboardHostContext::new)
            .unwrap_or_default(),
    );
    let state = create_rw_signal(DashboardState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let clock = create_rw_signal(read_local_clock());

    let dispatch = Callback::new(move |action: DashboardAction| {
        let mut dashboard = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_dashboard = dashboard.clone();
        let previous_ui = ui.clone();

        let new_effects = reduce_dashboard(&mut dashboard, &mut ui, action);
        if dashboard != previous_dashboard {
            state.set(dashboard);
        }
        if ui != previous_ui {
            interaction.set(ui);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let runtime = DashboardRuntimeContext {
        host,
        state,
        interaction,
        effects,
        clock,
        dispatch,
    };

    provide_context(runtime.clone());

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`DashboardRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DashboardProvider`].
pub fn use_dashboard_runtime() -> DashboardRuntimeContext {
    use_context::<DashboardRuntimeContext>().expect("DashboardRuntimeContext not provided")
}
