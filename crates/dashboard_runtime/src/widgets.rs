//! Widget layout transitions.
//!
//! Every mutator works on the stored list in place and returns `true` only when something
//! changed, which is what the reducer uses to decide whether to persist.

use crate::model::{MoveDirection, WidgetDescriptor, WidgetKind, WidgetSize};

/// Returns the first-run widget layout.
pub fn default_widgets() -> Vec<WidgetDescriptor> {
    [
        ("weather-1", WidgetKind::Weather, WidgetSize::Small),
        ("clock-1", WidgetKind::Clock, WidgetSize::Medium),
        ("quote-1", WidgetKind::Quote, WidgetSize::Small),
    ]
    .into_iter()
    .enumerate()
    .map(|(order, (id, kind, size))| WidgetDescriptor {
        id: id.to_string(),
        kind,
        size,
        visible: true,
        order: order as i64,
    })
    .collect()
}

/// Sets `visible` on the widget with `id`.
pub fn set_visible(widgets: &mut [WidgetDescriptor], id: &str, visible: bool) -> bool {
    match widgets.iter_mut().find(|w| w.id == id) {
        Some(widget) if widget.visible != visible => {
            widget.visible = visible;
            true
        }
        _ => false,
    }
}

/// Flips `visible` on the widget with `id`.
pub fn toggle_visible(widgets: &mut [WidgetDescriptor], id: &str) -> bool {
    let Some(current) = widgets.iter().find(|w| w.id == id).map(|w| w.visible) else {
        return false;
    };
    set_visible(widgets, id, !current)
}

/// Sets `size` on the widget with `id`.
pub fn set_size(widgets: &mut [WidgetDescriptor], id: &str, size: WidgetSize) -> bool {
    match widgets.iter_mut().find(|w| w.id == id) {
        Some(widget) if widget.size != size => {
            widget.size = size;
            true
        }
        _ => false,
    }
}

/// Returns all widgets sorted ascending by `order`; equal orders keep list position.
pub fn sorted_view(widgets: &[WidgetDescriptor]) -> Vec<WidgetDescriptor> {
    let mut sorted = widgets.to_vec();
    sorted.sort_by_key(|w| w.order);
    sorted
}

/// Returns the visible widgets in render order.
pub fn render_view(widgets: &[WidgetDescriptor]) -> Vec<WidgetDescriptor> {
    let mut visible: Vec<WidgetDescriptor> =
        widgets.iter().filter(|w| w.visible).cloned().collect();
    visible.sort_by_key(|w| w.order);
    visible
}

/// Swaps the widget at `index` of the sorted view with its neighbour in `direction`.
///
/// Both the `order` values and the positions are exchanged, and the stored list is replaced by
/// the resulting sorted list. Moving the first widget up or the last widget down is a no-op.
pub fn move_adjacent(
    widgets: &mut Vec<WidgetDescriptor>,
    index: usize,
    direction: MoveDirection,
) -> bool {
    let mut sorted = sorted_view(widgets);
    let neighbour = match direction {
        MoveDirection::Up => index.checked_sub(1),
        MoveDirection::Down => index.checked_add(1).filter(|n| *n < sorted.len()),
    };
    let Some(neighbour) = neighbour else {
        return false;
    };
    if index >= sorted.len() {
        return false;
    }

    let moved_order = sorted[index].order;
    sorted[index].order = sorted[neighbour].order;
    sorted[neighbour].order = moved_order;
    sorted.swap(index, neighbour);
    *widgets = sorted;
    true
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ids(widgets: &[WidgetDescriptor]) -> Vec<&str> {
        widgets.iter().map(|w| w.id.as_str()).collect()
    }

    #[test]
    fn defaults_are_three_visible_widgets_in_order() {
        let widgets = default_widgets();
        assert_eq!(ids(&widgets), vec!["weather-1", "clock-1", "quote-1"]);
        assert!(widgets.iter().all(|w| w.visible));
        assert_eq!(
            widgets.iter().map(|w| w.size).collect::<Vec<_>>(),
            vec![WidgetSize::Small, WidgetSize::Medium, WidgetSize::Small]
        );
    }

    #[test]
    fn render_view_is_visible_subset_sorted_by_order() {
        let mut widgets = default_widgets();
        widgets[0].order = 5;
        widgets[1].visible = false;
        let before = widgets.clone();

        assert_eq!(ids(&render_view(&widgets)), vec!["quote-1", "weather-1"]);
        assert_eq!(widgets, before);
    }

    #[test]
    fn equal_orders_keep_list_position() {
        let mut widgets = default_widgets();
        for widget in &mut widgets {
            widget.order = 0;
        }
        assert_eq!(
            ids(&render_view(&widgets)),
            vec!["weather-1", "clock-1", "quote-1"]
        );
    }

    #[test]
    fn unknown_ids_and_unchanged_values_report_no_change() {
        let mut widgets = default_widgets();
        assert!(!set_visible(&mut widgets, "missing", false));
        assert!(!set_visible(&mut widgets, "clock-1", true));
        assert!(!set_size(&mut widgets, "clock-1", WidgetSize::Medium));
        assert!(!toggle_visible(&mut widgets, "missing"));
        assert_eq!(widgets, default_widgets());
    }

    #[test]
    fn toggle_flips_visibility() {
        let mut widgets = default_widgets();
        assert!(toggle_visible(&mut widgets, "quote-1"));
        assert!(!widgets[2].visible);
        assert!(toggle_visible(&mut widgets, "quote-1"));
        assert!(widgets[2].visible);
    }

    #[test]
    fn move_adjacent_swaps_orders_and_positions() {
        let mut widgets = default_widgets();
        assert!(move_adjacent(&mut widgets, 1, MoveDirection::Up));
        assert_eq!(ids(&widgets), vec!["clock-1", "weather-1", "quote-1"]);
        assert_eq!(
            widgets.iter().map(|w| w.order).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn move_adjacent_edges_are_no_ops() {
        let mut widgets = default_widgets();
        assert!(!move_adjacent(&mut widgets, 0, MoveDirection::Up));
        assert!(!move_adjacent(&mut widgets, 2, MoveDirection::Down));
        assert!(!move_adjacent(&mut widgets, 7, MoveDirection::Up));
        assert_eq!(widgets, default_widgets());
    }

    #[test]
    fn move_up_then_down_restores_the_layout() {
        let original = default_widgets();
        let mut widgets = original.clone();
        assert!(move_adjacent(&mut widgets, 2, MoveDirection::Up));
        assert!(move_adjacent(&mut widgets, 1, MoveDirection::Down));
        assert_eq!(widgets, original);
    }

    #[test]
    fn grid_columns_follow_size() {
        assert_eq!(
            WidgetSize::ALL.map(WidgetSize::desktop_columns),
            [1, 2, 4]
        );
    }
}
