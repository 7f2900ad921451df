//! Browser file-chooser image picker.

use platform_host::{ImagePickerFuture, ImagePickerService};

#[cfg(target_arch = "wasm32")]
use futures::channel::oneshot;
#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, rc::Rc};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

const IMAGE_ACCEPT: &str = "image/*";

#[derive(Debug, Clone, Copy, Default)]
/// Opens a hidden `<input type="file">` and reads the chosen image as a data URL.
pub struct WebImagePickerService;

impl ImagePickerService for WebImagePickerService {
    fn pick_image_data_url<'a>(&'a self) -> ImagePickerFuture<'a, Result<String, String>> {
        Box::pin(async move { pick_image().await })
    }
}

async fn pick_image() -> Result<String, String> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err("image upload is only available when compiled for wasm32".to_string())
    }

    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
        let document = window
            .document()
            .ok_or_else(|| "document unavailable".to_string())?;
        let input = document
            .create_element("input")
            .map_err(|err| format!("failed to create file input: {err:?}"))?
            .dyn_into::<web_sys::HtmlInputElement>()
            .map_err(|_| "failed to cast file input".to_string())?;
        input.set_type("file");
        input.set_accept(IMAGE_ACCEPT);
        input.set_hidden(true);

        if let Some(body) = document.body() {
            let _ = body.append_child(&input);
        }

        let (tx, rx) = oneshot::channel::<Result<web_sys::File, String>>();
        let sender = Rc::new(RefCell::new(Some(tx)));

        let input_for_change = input.clone();
        let change_sender = sender.clone();
        let on_change = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_| {
            let result = input_for_change
                .files()
                .and_then(|files| files.get(0))
                .ok_or_else(|| "no image selected".to_string());
            if let Some(tx) = change_sender.borrow_mut().take() {
                let _ = tx.send(result);
            }
        }));
        input.set_onchange(Some(on_change.as_ref().unchecked_ref()));

        let cancel_sender = sender.clone();
        let on_cancel = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_| {
            if let Some(tx) = cancel_sender.borrow_mut().take() {
                let _ = tx.send(Err("image selection was cancelled".to_string()));
            }
        }));
        let _ = input
            .add_event_listener_with_callback("cancel", on_cancel.as_ref().unchecked_ref());
        input.click();

        let picked = rx
            .await
            .map_err(|_| "image selection was cancelled".to_string());
        input.remove();
        on_change.forget();
        on_cancel.forget();
        let file = picked??;

        if !file.type_().starts_with("image/") {
            return Err(format!("`{}` is not an image", file.name()));
        }
        read_file_as_data_url(&file).await
    }
}

#[cfg(target_arch = "wasm32")]
async fn read_file_as_data_url(file: &web_sys::File) -> Result<String, String> {
    let reader = web_sys::FileReader::new().map_err(|err| format!("{err:?}"))?;
    let (tx, rx) = oneshot::channel::<Result<String, String>>();
    let sender = Rc::new(RefCell::new(Some(tx)));

    let reader_for_load = reader.clone();
    let load_sender = sender.clone();
    let on_load = Closure::<dyn FnMut(web_sys::ProgressEvent)>::wrap(Box::new(move |_| {
        let result = reader_for_load
            .result()
            .map_err(|err| format!("failed to read image file: {err:?}"))
            .and_then(|value| {
                value
                    .as_string()
                    .ok_or_else(|| "file reader returned non-string result".to_string())
            });
        if let Some(tx) = load_sender.borrow_mut().take() {
            let _ = tx.send(result);
        }
    }));
    reader.set_onload(Some(on_load.as_ref().unchecked_ref()));

    let error_sender = sender.clone();
    let on_error = Closure::<dyn FnMut(web_sys::ProgressEvent)>::wrap(Box::new(move |_| {
        if let Some(tx) = error_sender.borrow_mut().take() {
            let _ = tx.send(Err("failed to load image file".to_string()));
        }
    }));
    reader.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    reader
        .read_as_data_url(file)
        .map_err(|err| format!("failed to start file read: {err:?}"))?;

    let result = rx
        .await
        .map_err(|_| "image file read was interrupted".to_string())?;
    on_load.forget();
    on_error.forget();
    result
}
