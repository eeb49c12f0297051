//! HTTP surface of the relink shortener: `POST /api/shorten` rewrites an
//! HTML document and `GET /r/{code}` follows a short link.

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::{AppError, Result};
pub use state::AppState;
