/// Change notification emitted by the store after a successful mutation
///
/// Subscribers re-render from `list_tasks` / `compute_stats` instead of
/// patching their view from the event payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added { id: i64 },
    Toggled { id: i64, completed: bool },
    Deleted { id: i64 },
}

impl StoreEvent {
    pub fn task_id(&self) -> i64 {
        match self {
            StoreEvent::Added { id }
            | StoreEvent::Toggled { id, .. }
            | StoreEvent::Deleted { id } => *id,
        }
    }
}
