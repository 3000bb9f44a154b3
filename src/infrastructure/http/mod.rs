pub mod controllers;
pub mod middleware;
pub mod response;
pub mod router;
