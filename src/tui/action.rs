// Defines actions and events exchanged between the UI loop and the network actor.
use crate::store::EventStore;

#[derive(Debug)]
pub enum Action {
    Reload,
    Quit,
}

#[derive(Debug)]
pub enum AppEvent {
    FeedsLoaded(EventStore),
    Error(String),
    Status(String),
}
