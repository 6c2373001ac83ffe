/// Logs a store error as a warning and maps it to its status code
#[macro_export]
macro_rules! store_error_with_log {
    ($position:expr) => {
        |e: $crate::store::StoreError| {
            use log::warn;

            warn!("{}: {}", $position, e);
            e.status_code()
        }
    };
}

/// Bad uploads become 400, anything else is an internal error
#[macro_export]
macro_rules! import_error_with_log {
    ($position:expr) => {
        |e: $crate::transfer::ImportError| {
            use axum::http::StatusCode;
            use log::{error, warn};

            if e.is_invalid_text() {
                warn!("{}: {}", $position, e);
                StatusCode::BAD_REQUEST
            } else {
                error!("{}: {}", $position, e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    };
}

pub use import_error_with_log;
pub use store_error_with_log;
