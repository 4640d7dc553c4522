pub mod models;
pub mod origin;
pub mod response;
pub mod routes;
