pub mod payloads;
pub mod webhook_event;
