use uuid::Uuid;

use crate::models::DomainChoice;

/// Lowercase a raw host string and strip everything that is not
/// alphanumeric or a hyphen. `"Mi-Tienda!"` becomes `"mi-tienda"`.
pub fn sanitize_client_id(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}

/// Random client id for a fresh wizard session, replaced as soon as
/// the user picks a domain.
pub fn generate_client_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("site-{}", &suffix[..8])
}

/// Recompute the session client id from the domain choice. The
/// sanitized host wins whenever it is non-empty; otherwise the current
/// id (random or previously derived) is kept.
pub fn derive_client_id(
    current: &str,
    domain: &DomainChoice,
) -> String {
    let sanitized = sanitize_client_id(domain.host());
    if sanitized.is_empty() {
        current.to_string()
    } else {
        sanitized
    }
}
