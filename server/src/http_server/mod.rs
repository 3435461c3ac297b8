use axum::response::Response;

use errors::ServerError;

pub(crate) mod cmd;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod routes;
pub(crate) mod server;
pub(crate) mod trace;

pub(crate) mod pages {
    pub mod home;
    pub mod not_found;
    pub mod posts;
}

pub(crate) mod templates;

#[cfg(test)]
pub(crate) mod test_helpers;

type ResponseResult<T = Response> = Result<T, ServerError>;
