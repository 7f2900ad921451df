//! Reducer actions, side-effect intents, and transition logic for the dashboard runtime.

use platform_host::{WeatherError, WeatherSnapshot};

use crate::{
    background::normalize_background_source,
    model::{
        BackgroundState, DashboardState, IconSource, InspirationRecord, InteractionState,
        MoveDirection, ShortcutEntry, WeatherStatus, WidgetDescriptor, WidgetSize,
    },
    search, shortcuts, widgets,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_dashboard`].
pub enum DashboardAction {
    /// Replace the widget list with the stored layout.
    HydrateWidgets {
        /// Loaded or default layout.
        widgets: Vec<WidgetDescriptor>,
    },
    /// Replace the shortcut list with the stored tiles.
    HydrateShortcuts {
        /// Loaded or default tiles.
        shortcuts: Vec<ShortcutEntry>,
    },
    /// Set today's inspiration.
    HydrateInspiration {
        /// Today's pick.
        record: InspirationRecord,
    },
    /// Set the background without persisting it.
    HydrateBackground {
        /// Boot or re-rolled background.
        background: BackgroundState,
    },
    /// Boot hydration finished; deferred mutations are replayed and later mutations persist.
    BootHydrationComplete,

    /// Set one widget's visibility.
    SetWidgetVisible {
        /// Widget id.
        id: String,
        /// New visibility.
        visible: bool,
    },
    /// Flip one widget's visibility.
    ToggleWidgetVisible {
        /// Widget id.
        id: String,
    },
    /// Set one widget's size.
    SetWidgetSize {
        /// Widget id.
        id: String,
        /// New size.
        size: WidgetSize,
    },
    /// Move a widget one slot within the sorted settings list.
    MoveWidget {
        /// Index in the sorted view.
        index: usize,
        /// Move direction.
        direction: MoveDirection,
    },

    /// Add a shortcut from the editor form.
    AddShortcut {
        /// Tile label.
        title: String,
        /// Target URL as typed.
        url: String,
        /// Optional icon input.
        icon: IconSource,
    },
    /// Remove a shortcut.
    RemoveShortcut {
        /// Shortcut id.
        id: String,
    },
    /// Set a shortcut's custom icon.
    SetShortcutIcon {
        /// Shortcut id.
        id: String,
        /// Icon input.
        icon: IconSource,
    },
    /// Drop a shortcut's custom icon.
    ClearShortcutIcon {
        /// Shortcut id.
        id: String,
    },
    /// Move one shortcut onto another's slot.
    ReorderShortcuts {
        /// Dragged shortcut id.
        dragged_id: String,
        /// Drop target id.
        target_id: String,
    },
    /// A drag gesture started on a shortcut tile.
    BeginShortcutDrag {
        /// Dragged shortcut id.
        id: String,
    },
    /// The dragged tile was dropped on another tile.
    DropShortcut {
        /// Drop target id.
        target_id: String,
    },
    /// The drag gesture ended without (or after) a drop.
    EndShortcutDrag,
    /// Open or close the add-shortcut form.
    ToggleShortcutEditor,
    /// Open a shortcut's target.
    LaunchShortcut {
        /// Shortcut id.
        id: String,
    },
    /// Ask the host for an uploaded icon for a shortcut.
    RequestShortcutIconUpload {
        /// Shortcut id.
        id: String,
    },

    /// Use a custom background.
    SetCustomBackground {
        /// Remote URL or `data:` URL.
        source: String,
    },
    /// Forget the custom background and return to a random one.
    ClearCustomBackground,
    /// Ask the host for an uploaded background image.
    RequestBackgroundUpload,

    /// Pick the search engine.
    SelectSearchEngine {
        /// Engine id.
        id: String,
    },
    /// Submit the search box.
    SubmitSearch {
        /// Query as typed.
        query: String,
    },

    /// Start a forecast refresh.
    RefreshWeather,
    /// A forecast refresh succeeded.
    WeatherLoaded {
        /// Normalized forecast.
        snapshot: WeatherSnapshot,
    },
    /// A forecast refresh failed.
    WeatherFailed {
        /// Failure reason.
        error: WeatherError,
    },

    /// Open the settings panel.
    OpenSettings,
    /// Close the settings panel.
    CloseSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Where an uploaded image should be applied.
pub enum UploadTarget {
    /// Icon of the shortcut with this id.
    ShortcutIcon(String),
    /// Page background.
    Background,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_dashboard`] for the effect executor.
pub enum RuntimeEffect {
    /// Persist the widget list.
    PersistWidgets,
    /// Persist the shortcut list.
    PersistShortcuts,
    /// Persist the custom background.
    PersistBackground,
    /// Delete the custom background and roll a random one.
    ClearBackground,
    /// Fetch the forecast.
    FetchWeather,
    /// Open the image picker for an upload.
    PickImage(UploadTarget),
    /// Navigate the tab to a URL.
    Navigate(String),
}

/// Applies a [`DashboardAction`] and collects the resulting side effects.
///
/// Mutations that leave the state unchanged (unknown ids, blank input, edge moves) emit no
/// effects. Persisted mutations that arrive before boot hydration completes are queued and
/// replayed on top of the stored lists once it does.
pub fn reduce_dashboard(
    state: &mut DashboardState,
    interaction: &mut InteractionState,
    action: DashboardAction,
) -> Vec<RuntimeEffect> {
    if !state.boot_hydrated && defer_until_hydrated(state, interaction, &action) {
        return Vec::new();
    }

    let mut effects = Vec::new();
    match action {
        DashboardAction::HydrateWidgets { widgets } => state.widgets = widgets,
        DashboardAction::HydrateShortcuts { shortcuts } => state.shortcuts = shortcuts,
        DashboardAction::HydrateInspiration { record } => state.inspiration = Some(record),
        DashboardAction::HydrateBackground { background } => state.background = background,
        DashboardAction::BootHydrationComplete => {
            if !state.boot_hydrated {
                state.boot_hydrated = true;
                for deferred in std::mem::take(&mut state.deferred_mutations) {
                    for effect in reduce_dashboard(state, interaction, deferred) {
                        if !effects.contains(&effect) || !is_persist(&effect) {
                            effects.push(effect);
                        }
                    }
                }
            }
        }

        DashboardAction::SetWidgetVisible { id, visible } => {
            if widgets::set_visible(&mut state.widgets, &id, visible) {
                persist(state, &mut effects, RuntimeEffect::PersistWidgets);
            }
        }
        DashboardAction::ToggleWidgetVisible { id } => {
            if widgets::toggle_visible(&mut state.widgets, &id) {
                persist(state, &mut effects, RuntimeEffect::PersistWidgets);
            }
        }
        DashboardAction::SetWidgetSize { id, size } => {
            if widgets::set_size(&mut state.widgets, &id, size) {
                persist(state, &mut effects, RuntimeEffect::PersistWidgets);
            }
        }
        DashboardAction::MoveWidget { index, direction } => {
            if widgets::move_adjacent(&mut state.widgets, index, direction) {
                persist(state, &mut effects, RuntimeEffect::PersistWidgets);
            }
        }

        DashboardAction::AddShortcut { title, url, icon } => {
            if shortcuts::add(&mut state.shortcuts, &title, &url, &icon).is_some() {
                interaction.shortcut_editor_open = false;
                persist(state, &mut effects, RuntimeEffect::PersistShortcuts);
            }
        }
        DashboardAction::RemoveShortcut { id } => {
            if shortcuts::remove(&mut state.shortcuts, &id) {
                if interaction.dragged_shortcut_id.as_deref() == Some(id.as_str()) {
                    interaction.dragged_shortcut_id = None;
                }
                persist(state, &mut effects, RuntimeEffect::PersistShortcuts);
            }
        }
        DashboardAction::SetShortcutIcon { id, icon } => {
            if shortcuts::set_icon(&mut state.shortcuts, &id, &icon) {
                persist(state, &mut effects, RuntimeEffect::PersistShortcuts);
            }
        }
        DashboardAction::ClearShortcutIcon { id } => {
            if shortcuts::clear_icon(&mut state.shortcuts, &id) {
                persist(state, &mut effects, RuntimeEffect::PersistShortcuts);
            }
        }
        DashboardAction::ReorderShortcuts {
            dragged_id,
            target_id,
        } => {
            if shortcuts::reorder(&mut state.shortcuts, &dragged_id, &target_id) {
                persist(state, &mut effects, RuntimeEffect::PersistShortcuts);
            }
        }
        DashboardAction::BeginShortcutDrag { id } => {
            if state.shortcuts.iter().any(|entry| entry.id == id) {
                interaction.dragged_shortcut_id = Some(id);
            }
        }
        DashboardAction::DropShortcut { target_id } => {
            if let Some(dragged_id) = interaction.dragged_shortcut_id.take() {
                if shortcuts::reorder(&mut state.shortcuts, &dragged_id, &target_id) {
                    persist(state, &mut effects, RuntimeEffect::PersistShortcuts);
                }
            }
        }
        DashboardAction::EndShortcutDrag => interaction.dragged_shortcut_id = None,
        DashboardAction::ToggleShortcutEditor => {
            interaction.shortcut_editor_open = !interaction.shortcut_editor_open;
        }
        DashboardAction::LaunchShortcut { id } => {
            if let Some(entry) = state.shortcuts.iter().find(|entry| entry.id == id) {
                effects.push(RuntimeEffect::Navigate(entry.url.clone()));
            }
        }
        DashboardAction::RequestShortcutIconUpload { id } => {
            if state.shortcuts.iter().any(|entry| entry.id == id) {
                effects.push(RuntimeEffect::PickImage(UploadTarget::ShortcutIcon(id)));
            }
        }

        DashboardAction::SetCustomBackground { source } => {
            if let Some(source) = normalize_background_source(&source) {
                let next = BackgroundState::Custom { source };
                if state.background != next {
                    state.background = next;
                    persist(state, &mut effects, RuntimeEffect::PersistBackground);
                }
            }
        }
        DashboardAction::ClearCustomBackground => {
            if state.background.is_custom() {
                state.background = BackgroundState::Unset;
                effects.push(RuntimeEffect::ClearBackground);
            }
        }
        DashboardAction::RequestBackgroundUpload => {
            effects.push(RuntimeEffect::PickImage(UploadTarget::Background));
        }

        DashboardAction::SelectSearchEngine { id } => {
            if let Some(engine) = search::find_engine(&id) {
                state.search_engine = engine.id.clone();
            }
        }
        DashboardAction::SubmitSearch { query } => {
            let engine = search::find_engine(&state.search_engine)
                .unwrap_or_else(search::default_engine);
            if let Some(url) = search::search_url(engine, &query) {
                effects.push(RuntimeEffect::Navigate(url));
            }
        }

        DashboardAction::RefreshWeather => effects.push(RuntimeEffect::FetchWeather),
        DashboardAction::WeatherLoaded { snapshot } => {
            state.weather = WeatherStatus::Ready(snapshot);
        }
        DashboardAction::WeatherFailed { error: _ } => {
            // A stale forecast stays on screen; only a first failure shows "Unavailable".
            if state.weather == WeatherStatus::Loading {
                state.weather = WeatherStatus::Unavailable;
            }
        }

        DashboardAction::OpenSettings => state.settings_open = true,
        DashboardAction::CloseSettings => state.settings_open = false,
    }
    effects
}

/// Queues a persisted mutation received during boot. Returns `false` for actions that apply
/// immediately.
fn defer_until_hydrated(
    state: &mut DashboardState,
    interaction: &mut InteractionState,
    action: &DashboardAction,
) -> bool {
    let deferred = match action {
        DashboardAction::SetWidgetVisible { .. }
        | DashboardAction::ToggleWidgetVisible { .. }
        | DashboardAction::SetWidgetSize { .. }
        | DashboardAction::MoveWidget { .. }
        | DashboardAction::RemoveShortcut { .. }
        | DashboardAction::SetShortcutIcon { .. }
        | DashboardAction::ClearShortcutIcon { .. }
        | DashboardAction::ReorderShortcuts { .. }
        | DashboardAction::SetCustomBackground { .. }
        | DashboardAction::ClearCustomBackground => action.clone(),
        DashboardAction::AddShortcut { title, url, .. } => {
            if !title.trim().is_empty() && !url.trim().is_empty() {
                interaction.shortcut_editor_open = false;
            }
            action.clone()
        }
        DashboardAction::DropShortcut { target_id } => {
            let Some(dragged_id) = interaction.dragged_shortcut_id.take() else {
                return true;
            };
            DashboardAction::ReorderShortcuts {
                dragged_id,
                target_id: target_id.clone(),
            }
        }
        _ => return false,
    };
    state.deferred_mutations.push(deferred);
    true
}

fn is_persist(effect: &RuntimeEffect) -> bool {
    matches!(
        effect,
        RuntimeEffect::PersistWidgets
            | RuntimeEffect::PersistShortcuts
            | RuntimeEffect::PersistBackground
    )
}

fn persist(state: &DashboardState, effects: &mut Vec<RuntimeEffect>, effect: RuntimeEffect) {
    if state.boot_hydrated {
        effects.push(effect);
    }
}

#[cfg(test)]
mod tests {
    use platform_host::{CurrentConditions, HourlySeries};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{shortcuts::default_shortcuts, widgets::default_widgets};

    fn booted() -> (DashboardState, InteractionState) {
        let mut state = DashboardState::default();
        let mut interaction = InteractionState::default();
        let effects = reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::BootHydrationComplete,
        );
        assert!(effects.is_empty());
        (state, interaction)
    }

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            current: CurrentConditions {
                temp: 24.6,
                code: 2,
                is_day: true,
            },
            hourly: HourlySeries::default(),
        }
    }

    #[test]
    fn widget_end_to_end_flow() {
        let (mut state, mut interaction) = booted();

        let effects = reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::SetWidgetVisible {
                id: "clock-1".to_string(),
                visible: false,
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::PersistWidgets]);
        let rendered: Vec<String> = widgets::render_view(&state.widgets)
            .into_iter()
            .map(|w| w.id)
            .collect();
        assert_eq!(rendered, vec!["weather-1", "quote-1"]);

        let effects = reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::SetWidgetSize {
                id: "quote-1".to_string(),
                size: WidgetSize::Large,
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::PersistWidgets]);
        let quote = state
            .widgets
            .iter()
            .find(|w| w.id == "quote-1")
            .expect("quote widget");
        assert_eq!(quote.size, WidgetSize::Large);
    }

    #[test]
    fn shortcut_end_to_end_flow() {
        let (mut state, mut interaction) = booted();
        interaction.shortcut_editor_open = true;

        let effects = reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::AddShortcut {
                title: "Zen".to_string(),
                url: "zen.example".to_string(),
                icon: IconSource::default(),
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::PersistShortcuts]);
        assert!(!interaction.shortcut_editor_open);
        assert_eq!(state.shortcuts.len(), 9);
        let added = state.shortcuts[8].clone();
        assert_eq!(added.title, "Zen");
        assert_eq!(added.url, "https://zen.example");
        assert_eq!(
            shortcuts::display_icon(&added),
            "https://www.google.com/s2/favicons?domain=zen.example&sz=128"
        );

        let effects = reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::RemoveShortcut { id: added.id },
        );
        assert_eq!(effects, vec![RuntimeEffect::PersistShortcuts]);
        assert_eq!(state.shortcuts, default_shortcuts());
    }

    #[test]
    fn no_op_mutations_emit_no_effects() {
        let (mut state, mut interaction) = booted();
        let before = state.clone();
        let actions = vec![
            DashboardAction::SetWidgetVisible {
                id: "missing".to_string(),
                visible: false,
            },
            DashboardAction::MoveWidget {
                index: 0,
                direction: MoveDirection::Up,
            },
            DashboardAction::AddShortcut {
                title: " ".to_string(),
                url: "x".to_string(),
                icon: IconSource::default(),
            },
            DashboardAction::RemoveShortcut {
                id: "missing".to_string(),
            },
            DashboardAction::ReorderShortcuts {
                dragged_id: "1".to_string(),
                target_id: "1".to_string(),
            },
            DashboardAction::ClearShortcutIcon {
                id: "1".to_string(),
            },
            DashboardAction::SetCustomBackground {
                source: "   ".to_string(),
            },
            DashboardAction::ClearCustomBackground,
            DashboardAction::SubmitSearch {
                query: "  ".to_string(),
            },
            DashboardAction::LaunchShortcut {
                id: "missing".to_string(),
            },
        ];
        for action in actions {
            let effects = reduce_dashboard(&mut state, &mut interaction, action.clone());
            assert!(effects.is_empty(), "{action:?} emitted {effects:?}");
        }
        assert_eq!(state, before);
    }

    #[test]
    fn mutations_during_boot_are_replayed_over_stored_lists() {
        let mut state = DashboardState::default();
        let mut interaction = InteractionState::default();
        interaction.shortcut_editor_open = true;

        let effects = reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::AddShortcut {
                title: "Zen".to_string(),
                url: "zen.example".to_string(),
                icon: IconSource::default(),
            },
        );
        assert!(effects.is_empty());
        assert!(!interaction.shortcut_editor_open);
        assert_eq!(state.shortcuts, default_shortcuts());

        let effects = reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::ToggleWidgetVisible {
                id: "weather-1".to_string(),
            },
        );
        assert!(effects.is_empty());
        assert!(state.widgets[0].visible);

        let stored = vec![ShortcutEntry {
            id: "1".to_string(),
            title: "YouTube".to_string(),
            url: "https://www.youtube.com".to_string(),
            icon: None,
        }];
        reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::HydrateShortcuts { shortcuts: stored },
        );
        let effects = reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::BootHydrationComplete,
        );

        assert_eq!(
            effects,
            vec![RuntimeEffect::PersistShortcuts, RuntimeEffect::PersistWidgets]
        );
        let titles: Vec<&str> = state.shortcuts.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["YouTube", "Zen"]);
        assert_eq!(state.shortcuts[1].url, "https://zen.example");
        assert!(!state.widgets[0].visible);
        assert!(state.deferred_mutations.is_empty());
    }

    #[test]
    fn repeated_boot_mutations_persist_each_list_once() {
        let mut state = DashboardState::default();
        let mut interaction = InteractionState::default();
        for id in ["clock-1", "quote-1"] {
            reduce_dashboard(
                &mut state,
                &mut interaction,
                DashboardAction::ToggleWidgetVisible { id: id.to_string() },
            );
        }
        reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::ToggleWidgetVisible {
                id: "missing".to_string(),
            },
        );
        let effects = reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::BootHydrationComplete,
        );
        assert_eq!(effects, vec![RuntimeEffect::PersistWidgets]);
        assert_eq!(widgets::render_view(&state.widgets).len(), 1);
    }

    #[test]
    fn drop_during_boot_is_replayed_as_reorder() {
        let mut state = DashboardState::default();
        let mut interaction = InteractionState::default();
        reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::BeginShortcutDrag {
                id: "1".to_string(),
            },
        );
        let effects = reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::DropShortcut {
                target_id: "3".to_string(),
            },
        );
        assert!(effects.is_empty());
        assert_eq!(interaction.dragged_shortcut_id, None);

        let effects = reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::BootHydrationComplete,
        );
        assert_eq!(effects, vec![RuntimeEffect::PersistShortcuts]);
        let ids: Vec<&str> = state.shortcuts.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn drag_state_is_cleared_on_drop_and_on_end() {
        let (mut state, mut interaction) = booted();

        reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::BeginShortcutDrag {
                id: "1".to_string(),
            },
        );
        assert_eq!(interaction.dragged_shortcut_id.as_deref(), Some("1"));
        let effects = reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::DropShortcut {
                target_id: "3".to_string(),
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::PersistShortcuts]);
        assert_eq!(interaction.dragged_shortcut_id, None);
        assert_eq!(state.shortcuts[2].id, "1");

        reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::BeginShortcutDrag {
                id: "2".to_string(),
            },
        );
        let effects = reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::DropShortcut {
                target_id: "2".to_string(),
            },
        );
        assert!(effects.is_empty());
        assert_eq!(interaction.dragged_shortcut_id, None);

        reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::BeginShortcutDrag {
                id: "4".to_string(),
            },
        );
        reduce_dashboard(&mut state, &mut interaction, DashboardAction::EndShortcutDrag);
        assert_eq!(interaction.dragged_shortcut_id, None);

        reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::BeginShortcutDrag {
                id: "missing".to_string(),
            },
        );
        assert_eq!(interaction.dragged_shortcut_id, None);
    }

    #[test]
    fn background_set_and_clear_emit_store_effects() {
        let (mut state, mut interaction) = booted();
        let effects = reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::SetCustomBackground {
                source: "images.example/bg.jpg".to_string(),
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::PersistBackground]);
        assert_eq!(
            state.background,
            BackgroundState::Custom {
                source: "https://images.example/bg.jpg".to_string()
            }
        );

        let effects = reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::ClearCustomBackground,
        );
        assert_eq!(effects, vec![RuntimeEffect::ClearBackground]);
        assert_eq!(state.background, BackgroundState::Unset);
    }

    #[test]
    fn search_navigates_with_the_selected_engine() {
        let (mut state, mut interaction) = booted();
        reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::SelectSearchEngine {
                id: "bing".to_string(),
            },
        );
        reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::SelectSearchEngine {
                id: "unknown".to_string(),
            },
        );
        assert_eq!(state.search_engine, "bing");

        let effects = reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::SubmitSearch {
                query: "zen tab".to_string(),
            },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::Navigate(
                "https://www.bing.com/search?q=zen%20tab".to_string()
            )]
        );
    }

    #[test]
    fn weather_failures_only_replace_loading() {
        let (mut state, mut interaction) = booted();
        assert_eq!(
            reduce_dashboard(&mut state, &mut interaction, DashboardAction::RefreshWeather),
            vec![RuntimeEffect::FetchWeather]
        );

        reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::WeatherFailed {
                error: WeatherError::Status(503),
            },
        );
        assert_eq!(state.weather, WeatherStatus::Unavailable);

        reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::WeatherLoaded {
                snapshot: snapshot(),
            },
        );
        reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::WeatherFailed {
                error: WeatherError::Network("offline".to_string()),
            },
        );
        assert_eq!(state.weather, WeatherStatus::Ready(snapshot()));
    }

    #[test]
    fn uploads_and_launches_target_known_shortcuts() {
        let (mut state, mut interaction) = booted();
        assert_eq!(
            reduce_dashboard(
                &mut state,
                &mut interaction,
                DashboardAction::RequestShortcutIconUpload {
                    id: "2".to_string()
                },
            ),
            vec![RuntimeEffect::PickImage(UploadTarget::ShortcutIcon(
                "2".to_string()
            ))]
        );
        assert_eq!(
            reduce_dashboard(
                &mut state,
                &mut interaction,
                DashboardAction::LaunchShortcut {
                    id: "2".to_string()
                },
            ),
            vec![RuntimeEffect::Navigate("https://github.com".to_string())]
        );
        assert_eq!(
            reduce_dashboard(
                &mut state,
                &mut interaction,
                DashboardAction::RequestBackgroundUpload,
            ),
            vec![RuntimeEffect::PickImage(UploadTarget::Background)]
        );
    }

    #[test]
    fn settings_panel_flag_and_hydration_replace_lists() {
        let (mut state, mut interaction) = booted();
        reduce_dashboard(&mut state, &mut interaction, DashboardAction::OpenSettings);
        assert!(state.settings_open);
        reduce_dashboard(&mut state, &mut interaction, DashboardAction::CloseSettings);
        assert!(!state.settings_open);

        let mut widgets = default_widgets();
        widgets.truncate(1);
        reduce_dashboard(
            &mut state,
            &mut interaction,
            DashboardAction::HydrateWidgets {
                widgets: widgets.clone(),
            },
        );
        assert_eq!(state.widgets, widgets);
    }
}
