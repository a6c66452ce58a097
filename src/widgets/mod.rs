//! Widgets for the catalog UI

pub mod product_list;
