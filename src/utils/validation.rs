use crate::utils::error::{IconError, Result};
use std::collections::HashSet;

/// 可嵌入瀏覽器擴充功能的最大圖示邊長
pub const MAX_ICON_SIZE: u32 = 1024;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(IconError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(IconError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(IconError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_icon_sizes(field_name: &str, sizes: &[u32]) -> Result<()> {
    if sizes.is_empty() {
        return Err(IconError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    let mut seen = HashSet::new();
    for &size in sizes {
        validate_range(field_name, size, 1, MAX_ICON_SIZE)?;
        if !seen.insert(size) {
            return Err(IconError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: size.to_string(),
                reason: "Duplicate icon size".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_dir", "icons").is_ok());
        assert!(validate_path("output_dir", "").is_err());
        assert!(validate_path("output_dir", "ic\0ons").is_err());
    }

    #[test]
    fn test_validate_icon_sizes() {
        assert!(validate_icon_sizes("sizes", &[16, 48, 128]).is_ok());
        assert!(validate_icon_sizes("sizes", &[]).is_err());
        assert!(validate_icon_sizes("sizes", &[0]).is_err());
        assert!(validate_icon_sizes("sizes", &[MAX_ICON_SIZE + 1]).is_err());
        assert!(validate_icon_sizes("sizes", &[16, 16]).is_err());
    }
}
