//! Reading picked files into data URLs for previews.

use std::{cell::RefCell, rc::Rc};

use base64::{Engine as _, engine::general_purpose};
use futures::channel::oneshot;
use wasm_bindgen::prelude::*;
use web_sys::{Event, File, FileReader};

use crate::event_form::SelectedFile;

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

#[derive(Debug, thiserror::Error)]
pub enum FileReadError {
    #[error("Could not create a file reader")]
    ReaderUnavailable,
    #[error("Could not read {0}")]
    Unreadable(String),
}

impl SelectedFile {
    pub fn from_file(file: &File) -> Self {
        Self {
            name: file.name(),
            mime_type: file.type_(),
            size: file.size() as u64,
        }
    }
}

/// Encode raw bytes as a `data:` URL usable directly as an image source.
pub fn data_url(mime_type: &str, data: &[u8]) -> String {
    let mime_type = if mime_type.is_empty() {
        FALLBACK_MIME_TYPE
    } else {
        mime_type
    };
    let encoded = general_purpose::STANDARD.encode(data);
    format!("data:{mime_type};base64,{encoded}")
}

/// Read a file into a data URL.
///
/// The returned future must be driven to completion; the reader callbacks
/// live on its stack.
pub async fn read_as_data_url(file: File) -> Result<String, FileReadError> {
    let name = file.name();
    let reader =
        FileReader::new().map_err(|_| FileReadError::ReaderUnavailable)?;

    let (sender, receiver) = oneshot::channel::<Option<Vec<u8>>>();
    let sender = Rc::new(RefCell::new(Some(sender)));

    let onload = {
        let reader = reader.clone();
        let sender = sender.clone();
        Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            let data = reader
                .result()
                .ok()
                .map(|buffer| js_sys::Uint8Array::new(&buffer).to_vec());
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(data);
            }
        })
    };
    let onerror = {
        let sender = sender.clone();
        Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(None);
            }
        })
    };

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    reader
        .read_as_array_buffer(&file)
        .map_err(|_| FileReadError::Unreadable(name.clone()))?;

    let data = receiver.await.ok().flatten();

    reader.set_onload(None);
    reader.set_onerror(None);
    drop((onload, onerror));

    let data = data.ok_or(FileReadError::Unreadable(name))?;
    Ok(data_url(&file.type_(), &data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_uses_file_mime_type() {
        assert_eq!(data_url("image/png", b"hi"), "data:image/png;base64,aGk=");
    }

    #[test]
    fn data_url_falls_back_for_unknown_type() {
        assert_eq!(
            data_url("", &[0xff, 0x00]),
            "data:application/octet-stream;base64,/wA="
        );
    }

    #[test]
    fn empty_file_still_produces_a_source() {
        assert_eq!(data_url("image/gif", &[]), "data:image/gif;base64,");
    }
}
