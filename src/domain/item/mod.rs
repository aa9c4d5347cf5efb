//! Item domain: entities, the repository capability and the upstream fetch seam

mod category;
mod entity;
mod fetcher;
mod repository;

pub use category::{Category, ITEM_ID_RANGE, validate_item_id};
pub use entity::{Item, ItemCollection};
pub use fetcher::{FetchError, ItemFetcher};
pub use repository::ItemRepository;

#[cfg(test)]
pub use fetcher::mock as fetcher_mock;
#[cfg(test)]
pub use repository::mock;
