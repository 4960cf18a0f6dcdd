use crate::utils::error::{Result, WatchError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(WatchError::Validation {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(WatchError::Validation {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(WatchError::Validation {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(WatchError::Validation {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// The template must name at least one of `{city}` / `{street}` and be a valid
/// URL once both placeholders are filled in.
pub fn validate_url_template(field_name: &str, template: &str) -> Result<()> {
    if !template.contains("{city}") && !template.contains("{street}") {
        return Err(WatchError::Validation {
            field: field_name.to_string(),
            value: template.to_string(),
            reason: "Template must contain {city} or {street}".to_string(),
        });
    }

    let sample = template.replace("{city}", "city").replace("{street}", "street");
    validate_url(field_name, &sample)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("supabase_url", "https://example.supabase.co").is_ok());
        assert!(validate_url("supabase_url", "http://localhost:54321").is_ok());
        assert!(validate_url("supabase_url", "").is_err());
        assert!(validate_url("supabase_url", "invalid-url").is_err());
        assert!(validate_url("supabase_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("street_name", "Main St").is_ok());
        assert!(validate_non_empty_string("street_name", "").is_err());
        assert!(validate_non_empty_string("street_name", "   ").is_err());
    }

    #[test]
    fn test_validate_url_template() {
        assert!(validate_url_template(
            "listing_url_template",
            "https://www.funda.nl/koop/{city}/straat-{street}/"
        )
        .is_ok());
        assert!(validate_url_template("listing_url_template", "https://www.funda.nl/koop/").is_err());
        assert!(validate_url_template("listing_url_template", "www.funda.nl/{city}").is_err());
    }
}
