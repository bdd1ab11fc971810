pub mod store_layout;
