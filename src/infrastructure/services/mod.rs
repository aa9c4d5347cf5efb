//! Infrastructure services

mod item_service;

pub use item_service::{CONSISTENT_ITEM, ItemService, format_item};
