mod config;
mod state;
mod urls;

pub use config::{InvalidPageSize, PageSize, PaginationConfig};
pub use state::{NavAction, PageState};
pub use urls::{PageLink, build_paginated_url_with_params};
