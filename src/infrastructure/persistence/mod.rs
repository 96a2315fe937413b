//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits over a shared
//! connection pool. Identifiers are hex tokens minted by
//! [`crate::domain::id::generate_hex_id`] before insert; the schema lives
//! in `migrations/` and is applied at startup.

pub mod pg_author_repository;
pub mod pg_book_repository;
pub mod pg_category_repository;

pub use pg_author_repository::PgAuthorRepository;
pub use pg_book_repository::PgBookRepository;
pub use pg_category_repository::PgCategoryRepository;

/// Turns a user-supplied filter term into an ILIKE substring pattern,
/// escaping the LIKE metacharacters so they match literally.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_wraps_term() {
        assert_eq!(like_pattern("herbert"), "%herbert%");
    }

    #[test]
    fn test_like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }
}
