use leptos::{logging, spawn_local};

use crate::{
    host::DashboardHostContext,
    model::IconSource,
    reducer::{DashboardAction, UploadTarget},
    runtime_context::DashboardRuntimeContext,
};

/// Maps a finished upload onto the action that applies it, the same way a typed URL would be.
pub(crate) fn upload_action(target: UploadTarget, data_url: String) -> DashboardAction {
    match target {
        UploadTarget::ShortcutIcon(id) => DashboardAction::SetShortcutIcon {
            id,
            icon: IconSource::from_inline(data_url),
        },
        UploadTarget::Background => DashboardAction::SetCustomBackground { source: data_url },
    }
}

pub(super) fn pick_image(
    host: DashboardHostContext,
    runtime: DashboardRuntimeContext,
    target: UploadTarget,
) {
    spawn_local(async move {
        match host.image_picker().pick_image_data_url().await {
            Ok(data_url) => runtime.dispatch_action(upload_action(target, data_url)),
            Err(err) => logging::warn!("image upload failed: {err}"),
        }
    });
}
