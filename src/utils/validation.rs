use crate::utils::error::{PromoError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: &str) -> PromoError {
    PromoError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// The dataset must name a single file.
pub fn validate_dataset_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(invalid(field_name, path, "a promotions CSV file is required"));
    }
    if path.contains('\0') {
        return Err(invalid(field_name, path, "dataset path contains null bytes"));
    }
    if path.ends_with('/') || path.ends_with(std::path::MAIN_SEPARATOR) {
        return Err(invalid(
            field_name,
            path,
            "dataset path names a directory, expected a CSV file",
        ));
    }
    Ok(())
}

/// Port 0 would bind a random port that clients cannot know.
pub fn validate_listen_port(field_name: &str, port: u16) -> Result<()> {
    if port == 0 {
        return Err(invalid(
            field_name,
            port,
            "listen port must be set explicitly (1-65535)",
        ));
    }
    Ok(())
}

pub fn validate_listen_host(field_name: &str, host: &str) -> Result<()> {
    if host.trim().is_empty() {
        return Err(invalid(
            field_name,
            host,
            "listen host is required, e.g. 0.0.0.0 or ::",
        ));
    }
    Ok(())
}
