mod pagination;
mod store_model;
