//! Upload validation, independent of the browser file type.

/// Client-side rejection of a submit; no request is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Please select at least one order file")]
    NoOrderFiles,
}

/// Files of one `POST /process-orders`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderUpload<F> {
    pub master_file: Option<F>,
    pub order_files: Vec<F>,
}

impl<F> OrderUpload<F> {
    pub fn new(master_file: Option<F>, order_files: Vec<F>) -> Result<Self, SubmitError> {
        if order_files.is_empty() {
            return Err(SubmitError::NoOrderFiles);
        }
        Ok(Self {
            master_file,
            order_files,
        })
    }
}

/// Text and class of the line under a file input after a selection change.
pub fn selection_status(names: &[String]) -> (String, &'static str) {
    if names.is_empty() {
        (String::new(), "file-status")
    } else {
        (format!("Selected: {}", names.join(", ")), "file-status success")
    }
}
