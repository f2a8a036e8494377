pub mod contact_repo;
pub mod mongo;
pub mod quote_repo;
pub mod repository_error;

/// Upper bound on documents returned by a single list call. Submissions
/// beyond this cap are not served.
pub const LIST_FETCH_LIMIT: i64 = 1000;
