//! User-facing notification texts

pub const TITLE_ERROR: &str = "Error";
pub const TITLE_CANCELLED: &str = "Cancelled";
pub const TITLE_MESSAGE: &str = "Message";

/// Shown once, right before the import prompt
pub fn family_missing(family_name: &str) -> String {
    format!(
        "Family \"{}\" was not found, load the family from a file",
        family_name
    )
}

pub fn rooms_created(count: usize) -> String {
    match count {
        0 => "Room creation finished: every enclosed region already has a room".to_string(),
        1 => "Room creation finished successfully: 1 room created".to_string(),
        n => format!("Room creation finished successfully: {} rooms created", n),
    }
}

pub const IMPORT_CANCELLED: &str = "Family file was not selected or is invalid";
