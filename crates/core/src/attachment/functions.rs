//! Pure URL derivation for stored attachments.

/// Returns the public base URL of an S3 bucket (virtual-hosted style).
pub fn s3_bucket_base_url(bucket: &str) -> String {
    format!("https://{bucket}.s3.amazonaws.com")
}

/// Joins a base URL and an object key into the object's URL.
///
/// A trailing slash on `base_url` is ignored so that both `http://host/files`
/// and `http://host/files/` yield the same result.
///
/// # Examples
///
/// ```
/// use todos_core::attachment::object_url;
///
/// assert_eq!(
///     object_url("https://bucket.s3.amazonaws.com/", "todo-1"),
///     "https://bucket.s3.amazonaws.com/todo-1"
/// );
/// ```
pub fn object_url(base_url: &str, key: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_s3_bucket_base_url() {
        assert_eq!(
            s3_bucket_base_url("todos-attachments"),
            "https://todos-attachments.s3.amazonaws.com"
        );
    }

    #[test]
    fn test_object_url_is_deterministic() {
        let base = s3_bucket_base_url("todos-attachments");
        assert_eq!(object_url(&base, "abc"), object_url(&base, "abc"));
        assert_eq!(
            object_url(&base, "abc"),
            "https://todos-attachments.s3.amazonaws.com/abc"
        );
    }

    #[test]
    fn test_object_url_trims_trailing_slash() {
        assert_eq!(
            object_url("http://localhost:3000/attachments/", "abc"),
            "http://localhost:3000/attachments/abc"
        );
    }
}
