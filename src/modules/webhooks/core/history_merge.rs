use crate::modules::webhooks::core::event::WebhookEvent;

/// Decides whether the persisted history is read before a new event is appended.
///
/// `CompletedOnly` keeps the long-standing behavior: only `completed` deliveries
/// extend the stored history, every other delivery replaces it with a
/// single-element list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HistoryMerge {
    #[default]
    CompletedOnly,
    Always,
}

impl HistoryMerge {
    pub fn loads_history_for(self, event: &WebhookEvent) -> bool {
        match self {
            HistoryMerge::CompletedOnly => event.is_completed(),
            HistoryMerge::Always => true,
        }
    }
}
