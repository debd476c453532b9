//! Presenters - derive render-ready signals from store streams.

pub mod item_list;

pub use item_list::{ItemListPresenter, ListIntent};
