//! Backend commands queued from UI to backend worker.

pub enum BackendCommand {
    /// One-shot catalog fetch issued at startup.
    LoadCatalog,
    /// Raw search input; settles into `UiEvent::SearchSettled` after the
    /// debounce delay.
    SearchTextChanged(String),
}
