use leptos::{create_effect, spawn_local, Callable, Callback};
use platform_host::today_calendar_day_key;

use crate::{
    background::boot_background, host::DashboardHostContext, inspiration, persistence,
    reducer::DashboardAction,
};

/// Loads everything the dashboard needs at boot and returns it as an ordered action batch.
pub(crate) async fn boot_actions(
    host: &DashboardHostContext,
    date_key: &str,
) -> Vec<DashboardAction> {
    let prefs = host.prefs_store();
    let widgets = persistence::load_widgets(prefs.as_ref()).await;
    let shortcuts = persistence::load_shortcuts(prefs.as_ref()).await;
    let record = inspiration::get_or_refresh(prefs.as_ref(), date_key).await;
    let stored = persistence::load_background(host.asset_store().as_ref()).await;

    vec![
        DashboardAction::HydrateWidgets { widgets },
        DashboardAction::HydrateShortcuts { shortcuts },
        DashboardAction::HydrateInspiration { record },
        DashboardAction::HydrateBackground {
            background: boot_background(stored),
        },
        DashboardAction::BootHydrationComplete,
        DashboardAction::RefreshWeather,
    ]
}

pub(super) fn install_boot_hydration(
    host: DashboardHostContext,
    dispatch: Callback<DashboardAction>,
) {
    create_effect(move |_| {
        let host = host.clone();
        spawn_local(async move {
            for action in boot_actions(&host, &today_calendar_day_key()).await {
                dispatch.call(action);
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{HostServices, MemoryPrefsStore, PrefsStore};
    use pretty_assertions::assert_eq;
    use std::rc::Rc;

    use super::*;
    use crate::{
        model::{DashboardState, InteractionState, SHORTCUTS_KEY},
        reducer::{reduce_dashboard, RuntimeEffect},
    };

    #[test]
    fn boot_hydrates_stored_records_then_fetches_weather() {
        let prefs = MemoryPrefsStore::with_entries([(
            SHORTCUTS_KEY,
            r#"[{"id":"a","title":"Zen","url":"https://zen.example"}]"#,
        )]);
        let mut services = HostServices::in_memory();
        services.prefs = Rc::new(prefs.clone()) as Rc<dyn PrefsStore>;
        let host = DashboardHostContext::new(services);

        let actions = block_on(boot_actions(&host, "Fri Oct 16 2026"));
        let mut state = DashboardState::default();
        let mut interaction = InteractionState::default();
        let mut effects = Vec::new();
        for action in actions {
            effects.extend(reduce_dashboard(&mut state, &mut interaction, action));
        }

        assert_eq!(effects, vec![RuntimeEffect::FetchWeather]);
        assert!(state.boot_hydrated);
        assert_eq!(state.shortcuts.len(), 1);
        assert_eq!(state.widgets, crate::widgets::default_widgets());
        assert_eq!(
            state.inspiration,
            Some(crate::inspiration::pick("Fri Oct 16 2026"))
        );
        assert!(!state.background.is_custom());
        assert!(state.background.display_url().is_some());
        assert_eq!(prefs.save_count(), 1);
    }
}
