//! # Folio Shared
//!
//! Wire types shared between the API server and the client gateway. The
//! JSON surface is camelCase; error bodies are `{ message, errors? }`.

pub mod dto;
pub mod response;

pub use folio_core::error::FieldError;
pub use folio_core::page::Pagination;
pub use response::ErrorBody;
