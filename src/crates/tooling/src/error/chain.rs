//! Error chain formatting

use std::error::Error as StdError;

/// Format an error chain as a multi-line string
///
/// Walks the error chain via `source()` and formats each error
/// on a separate line with indentation.
pub fn format_error_chain(error: &dyn StdError) -> String {
    let mut result = format!("Error: {}", error);
    let mut current = error.source();
    let mut level = 1;

    while let Some(source) = current {
        result.push_str(&format!(
            "\n{:indent$}Caused by: {}",
            "",
            source,
            indent = level * 2
        ));
        current = source.source();
        level += 1;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToolingError;
    use std::fmt;

    #[derive(Debug)]
    struct Wrapped {
        message: &'static str,
        source: Box<dyn StdError + Send + Sync>,
    }

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.message)
        }
    }

    impl StdError for Wrapped {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&*self.source as &(dyn StdError + 'static))
        }
    }

    fn nested() -> Wrapped {
        Wrapped {
            message: "Failed to write settings",
            source: Box::new(Wrapped {
                message: "Failed to replace credentials.txt",
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "Permission denied",
                )),
            }),
        }
    }

    #[test]
    fn test_format_error_chain() {
        let formatted = format_error_chain(&nested());

        assert_eq!(
            formatted,
            "Error: Failed to write settings\n  Caused by: Failed to replace credentials.txt\n    Caused by: Permission denied"
        );
    }

    #[test]
    fn test_single_error_chain() {
        let error = ToolingError::NotUnicode("sync_ratings".to_string());
        let formatted = format_error_chain(&error);

        assert_eq!(
            formatted,
            "Error: Environment variable sync_ratings contains invalid UTF-8"
        );
    }
}
