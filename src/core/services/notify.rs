use crate::error::StoreError;

pub const DUPLICATE_IDENTIFIER_MESSAGE: &str =
    "A project with the same ID already exists. Please enter a unique ID.";

pub fn store_error_message(error: &StoreError) -> &'static str {
    match error {
        StoreError::DuplicateIdentifier(_) => DUPLICATE_IDENTIFIER_MESSAGE,
    }
}

// Blocks until the user dismisses the browser alert.
pub fn alert_user(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                log::error!("Failed to show alert: {:?}", e);
            }
        }
        None => log::error!("No window available to show alert: {}", message),
    }
}

pub fn report_store_error(error: &StoreError) {
    log::warn!("{}", error);
    alert_user(store_error_message(error));
}
