//! Browser file reading.
//!
//! The only asynchronous step of the page: the whole file is read into
//! memory before anything is parsed. There is no streaming and no
//! cancellation.

use growth::UploadedFile;
use js_sys::Uint8Array;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use crate::{AppError, AppResult};

/// Read the selected file into an [`UploadedFile`].
pub async fn read_file(file: &File) -> AppResult<UploadedFile> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| AppError::Read(format!("{:?}", e)))?;
    let bytes = Uint8Array::new(&buffer).to_vec();

    log::debug!("Read {} bytes from '{}'", bytes.len(), file.name());
    Ok(UploadedFile::new(file.name(), file.type_(), bytes))
}
