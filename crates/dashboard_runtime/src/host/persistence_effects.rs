use leptos::{logging, spawn_local, SignalGetUntracked};

use crate::{
    background::random_background, host::DashboardHostContext, model::BackgroundState,
    persistence, reducer::DashboardAction, runtime_context::DashboardRuntimeContext,
};

pub(super) fn persist_widgets(host: DashboardHostContext, runtime: DashboardRuntimeContext) {
    let widgets = runtime.state.get_untracked().widgets;
    spawn_local(async move {
        if let Err(err) = persistence::persist_widgets(host.prefs_store().as_ref(), &widgets).await
        {
            logging::warn!("persist widgets failed: {err}");
        }
    });
}

pub(super) fn persist_shortcuts(host: DashboardHostContext, runtime: DashboardRuntimeContext) {
    let shortcuts = runtime.state.get_untracked().shortcuts;
    spawn_local(async move {
        if let Err(err) =
            persistence::persist_shortcuts(host.prefs_store().as_ref(), &shortcuts).await
        {
            logging::warn!("persist shortcuts failed: {err}");
        }
    });
}

pub(super) fn persist_background(host: DashboardHostContext, runtime: DashboardRuntimeContext) {
    let BackgroundState::Custom { source } = runtime.state.get_untracked().background else {
        return;
    };
    spawn_local(async move {
        if let Err(err) =
            persistence::persist_background(host.asset_store().as_ref(), &source).await
        {
            logging::warn!("persist background failed: {err}");
        }
    });
}

pub(super) fn clear_background(host: DashboardHostContext, runtime: DashboardRuntimeContext) {
    spawn_local(async move {
        if let Err(err) = persistence::delete_background(host.asset_store().as_ref()).await {
            logging::warn!("delete background failed: {err}");
        }
        runtime.dispatch_action(DashboardAction::HydrateBackground {
            background: random_background(),
        });
    });
}
