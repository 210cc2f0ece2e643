//! Pure field validators. Each returns `Ok(())` or the message the UI
//! shows next to the field; none of them touch the network.

/// Hex color: `#` followed by exactly 3 or 6 hex digits.
pub fn validate_hex_color(value: &str) -> Result<(), String> {
    let digits = match value.strip_prefix('#') {
        Some(rest) => rest,
        None => {
            return Err(
                "Color must start with '#' (e.g. #551BB3)".to_string()
            );
        }
    };

    let valid_length = digits.len() == 3 || digits.len() == 6;
    let valid_digits =
        digits.chars().all(|c| c.is_ascii_hexdigit());

    if !valid_length || !valid_digits {
        return Err(
            "Color must be 3 or 6 hex digits (e.g. #551BB3)"
                .to_string(),
        );
    }

    Ok(())
}

/// Subdomain label: 3-63 chars, lowercase alphanumeric and hyphens,
/// no leading or trailing hyphen.
pub fn validate_subdomain(value: &str) -> Result<(), String> {
    if value.len() < 3 || value.len() > 63 {
        return Err(
            "Subdomain must be between 3 and 63 characters"
                .to_string(),
        );
    }

    let valid_chars = value.chars().all(|c| {
        c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
    });
    if !valid_chars {
        return Err(
            "Subdomain may only contain lowercase letters, digits and hyphens"
                .to_string(),
        );
    }

    if value.starts_with('-') || value.ends_with('-') {
        return Err(
            "Subdomain cannot start or end with a hyphen".to_string()
        );
    }

    Ok(())
}

/// Custom domain: at least two dot-separated labels, each 1-63
/// alphanumeric/hyphen chars with no edge hyphens.
pub fn validate_custom_domain(value: &str) -> Result<(), String> {
    let labels: Vec<&str> = value.split('.').collect();

    if labels.len() < 2 {
        return Err(
            "Domain must contain at least one dot (e.g. mitienda.com)"
                .to_string(),
        );
    }

    for label in labels {
        if label.is_empty() || label.len() > 63 {
            return Err(
                "Each domain label must be 1-63 characters"
                    .to_string(),
            );
        }

        let valid_chars = label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');
        if !valid_chars {
            return Err(
                "Domain labels may only contain letters, digits and hyphens"
                    .to_string(),
            );
        }

        if label.starts_with('-') || label.ends_with('-') {
            return Err(
                "Domain labels cannot start or end with a hyphen"
                    .to_string(),
            );
        }
    }

    Ok(())
}

/// Company name: non-empty after trimming, bounded length.
pub fn validate_company_name(value: &str) -> Result<(), String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err("Company name is required".to_string());
    }

    if trimmed.len() > 255 {
        return Err(
            "Company name must be at most 255 characters".to_string()
        );
    }

    Ok(())
}

/// URL fields on the company form are optional; when present they must
/// at least look like an http(s) URL.
pub fn validate_optional_url(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Ok(());
    }

    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err("URL must start with http:// or https://".to_string())
    }
}
