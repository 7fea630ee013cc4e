//! UI state - status line and in-flight persistence tracking

/// UI state shared by the panels
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Message displayed in the status line
    pub status_message: String,
    /// Persistence calls issued but not yet completed
    pub pending_writes: usize,
    /// Most recent failure: persistence, upload or a rejected target
    pub last_error: Option<String>,
    /// Whether an asset upload is running
    pub is_uploading: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Show `message` in the status line and keep it as the last error
    pub fn report_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.status_message = message.clone();
        self.last_error = Some(message);
    }

    /// Check if the UI is busy (saving or uploading)
    pub fn is_busy(&self) -> bool {
        self.pending_writes > 0 || self.is_uploading
    }
}
