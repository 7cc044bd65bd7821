use crate::error::AppError;
use std::path::Path;

fn validate_domain(name: &str, domain: &str) -> Result<(), AppError> {
    if domain.is_empty() {
        return Err(AppError::config_error(format!("{name} cannot be empty")));
    }

    if !domain.starts_with("http://") && !domain.starts_with("https://") {
        // Without a scheme it should at least look like a host name
        if !domain.contains('.') && !domain.starts_with("localhost") {
            return Err(AppError::config_error(format!(
                "{name} must be a valid URL or domain name"
            )));
        }
    }

    Ok(())
}

/// Validates the configuration settings
///
/// # Validation Rules
/// - Both API domains must be non-empty and look like a URL or domain name
/// - If a log file path is provided, it cannot be empty
/// - The log file's parent directory must exist or be creatable
///
/// This is not a pure check: a missing log directory is created here.
pub fn validate_config(
    api_domain: &str,
    stats_api_domain: &str,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    validate_domain("API domain", api_domain)?;
    validate_domain("Stats API domain", stats_api_domain)?;

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
