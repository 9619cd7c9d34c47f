//! File input helpers.

use bandconnect::StagedUpload;
use web_sys::{File, HtmlInputElement};

/// Stage every file currently selected in `input`.
///
/// The input is cleared afterwards so picking the same files again still
/// fires a change event.
pub fn take_selected_files(input: &HtmlInputElement) -> Vec<StagedUpload<File>> {
    let Some(list) = input.files() else {
        return Vec::new();
    };

    let batch = (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| StagedUpload::new(file.name(), file.size() as u64, file.type_(), file))
        .collect();

    input.set_value("");
    batch
}
