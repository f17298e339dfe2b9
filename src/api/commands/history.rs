//! History command module

use crate::core::history::ConversionHistory;
use crate::shared::types::GetHistoryResponse;

/// The displayed slice of the session history, oldest first
pub fn get_history_command(history: &ConversionHistory, limit: usize) -> GetHistoryResponse {
    GetHistoryResponse {
        entries: history.recent(limit).to_vec(),
        total: history.len(),
    }
}
