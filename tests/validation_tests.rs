mod common;

#[cfg(test)]
pub mod validation_tests {
    use storepress::common::validation::*;

    #[test]
    fn test_hex_color_success() {
        assert!(validate_hex_color("#551BB3").is_ok());
        assert!(validate_hex_color("#abc").is_ok());
        assert!(validate_hex_color("#FFFFFF").is_ok());
        assert!(validate_hex_color("#0f0f0f").is_ok());
    }

    #[test]
    fn test_hex_color_fails_on_missing_hash() {
        assert!(validate_hex_color("551BB3").is_err());
    }

    #[test]
    fn test_hex_color_fails_on_invalid_digits() {
        assert!(validate_hex_color("#ZZZZZZ").is_err());
        assert!(validate_hex_color("#55G1B3").is_err());
    }

    #[test]
    fn test_hex_color_fails_on_wrong_length() {
        assert!(validate_hex_color("#abcd").is_err());
        assert!(validate_hex_color("#ab").is_err());
        assert!(validate_hex_color("#").is_err());
    }

    #[test]
    fn test_subdomain_success() {
        assert!(validate_subdomain("acme").is_ok());
        assert!(validate_subdomain("mi-tienda").is_ok());
        assert!(validate_subdomain("shop123").is_ok());
        assert!(validate_subdomain("abc").is_ok());
    }

    #[test]
    fn test_subdomain_fails_on_length() {
        assert!(validate_subdomain("ab").is_err());
        assert!(validate_subdomain(&"a".repeat(64)).is_err());
        assert!(validate_subdomain(&"a".repeat(63)).is_ok());
    }

    #[test]
    fn test_subdomain_fails_on_invalid_chars() {
        assert!(validate_subdomain("Mi-Tienda").is_err());
        assert!(validate_subdomain("mi tienda").is_err());
        assert!(validate_subdomain("mi_tienda").is_err());
        assert!(validate_subdomain("tienda!").is_err());
    }

    #[test]
    fn test_subdomain_fails_on_edge_hyphens() {
        assert!(validate_subdomain("-acme").is_err());
        assert!(validate_subdomain("acme-").is_err());
    }

    #[test]
    fn test_custom_domain_success() {
        assert!(validate_custom_domain("mitienda.com").is_ok());
        assert!(validate_custom_domain("shop.mitienda.com").is_ok());
        assert!(validate_custom_domain("mi-tienda.co").is_ok());
    }

    #[test]
    fn test_custom_domain_fails_on_missing_dot() {
        assert!(validate_custom_domain("mitienda").is_err());
    }

    #[test]
    fn test_custom_domain_fails_on_bad_labels() {
        assert!(validate_custom_domain("mi..com").is_err());
        assert!(validate_custom_domain(".com").is_err());
        assert!(validate_custom_domain("-tienda.com").is_err());
        assert!(validate_custom_domain("tienda-.com").is_err());
        assert!(validate_custom_domain("mi_tienda.com").is_err());
        assert!(validate_custom_domain(
            &format!("{}.com", "a".repeat(64))
        )
        .is_err());
    }

    #[test]
    fn test_company_name_success() {
        assert!(validate_company_name("Acme").is_ok());
        assert!(validate_company_name("  Acme  ").is_ok());
    }

    #[test]
    fn test_company_name_fails_on_empty() {
        assert!(validate_company_name("").is_err());
        assert!(validate_company_name("   ").is_err());
    }

    #[test]
    fn test_company_name_fails_on_oversize() {
        assert!(validate_company_name(&"a".repeat(256)).is_err());
    }

    #[test]
    fn test_optional_url_success() {
        assert!(validate_optional_url("").is_ok());
        assert!(
            validate_optional_url("https://cdn.acme.com/logo.png")
                .is_ok()
        );
        assert!(validate_optional_url("http://acme.com").is_ok());
    }

    #[test]
    fn test_optional_url_fails_on_other_schemes() {
        assert!(validate_optional_url("ftp://acme.com").is_err());
        assert!(validate_optional_url("logo.png").is_err());
    }
}
