#[cfg(test)]
pub mod upload_tests {
    use storepress::common::UploadError;
    use storepress::services::ImageUploader;

    #[test]
    fn test_validate_success() {
        assert!(
            ImageUploader::validate("image/png", 1024).is_ok()
        );
        assert!(
            ImageUploader::validate("image/jpeg", 1024).is_ok()
        );
        assert!(
            ImageUploader::validate("image/webp", 1024).is_ok()
        );
        assert!(
            ImageUploader::validate("image/svg+xml", 64).is_ok()
        );
    }

    #[test]
    fn test_validate_success_at_size_cap() {
        assert!(ImageUploader::validate(
            "image/png",
            ImageUploader::MAX_BYTES
        )
        .is_ok());
    }

    #[test]
    fn test_validate_fails_on_unsupported_type() {
        let result = ImageUploader::validate("image/bmp", 1024);

        match result.unwrap_err() {
            UploadError::UnsupportedType(t) => {
                assert_eq!(t, "image/bmp")
            }
            other => {
                panic!("expected unsupported type, got {}", other)
            }
        }

        assert!(matches!(
            ImageUploader::validate("application/pdf", 1024)
                .unwrap_err(),
            UploadError::UnsupportedType(_)
        ));
    }

    #[test]
    fn test_validate_fails_on_oversize() {
        let result = ImageUploader::validate(
            "image/png",
            ImageUploader::MAX_BYTES + 1,
        );

        assert!(matches!(
            result.unwrap_err(),
            UploadError::TooLarge { max_mb: 5 }
        ));
    }

    #[test]
    fn test_validate_checks_type_before_size() {
        // An upload that is wrong on both counts reports the type
        // first; size never masks an unusable format.
        assert!(matches!(
            ImageUploader::validate(
                "image/bmp",
                ImageUploader::MAX_BYTES + 1
            )
            .unwrap_err(),
            UploadError::UnsupportedType(_)
        ));
    }
}
