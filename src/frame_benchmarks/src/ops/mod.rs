pub mod api;
pub mod methods;
