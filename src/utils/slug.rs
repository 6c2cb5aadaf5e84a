use std::collections::HashSet;
use std::future::Future;

use sqlx::PgPool;
use tracing::warn;

use crate::database::constraint::is_unique_violation_of;
use crate::error::{Error, Result};

/// Attempts made to insert a row under a freshly computed slug before the
/// caller gets a conflict back.
pub const SLUG_RETRY_LIMIT: usize = 5;

/// Tables whose rows carry a unique slug column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugScope {
    Jobs,
    JobApplications,
}

impl SlugScope {
    pub fn table(self) -> &'static str {
        match self {
            SlugScope::Jobs => "jobs",
            SlugScope::JobApplications => "job_applications",
        }
    }

    pub fn constraint(self) -> &'static str {
        match self {
            SlugScope::Jobs => "jobs_slug_key",
            SlugScope::JobApplications => "job_applications_slug_key",
        }
    }
}

/// Converts arbitrary text into a lowercase, hyphen-separated ASCII slug.
///
/// Accented Latin letters fold to their base letter, anything else that is
/// not alphanumeric, `_`, `-` or whitespace is dropped, and runs of
/// whitespace and hyphens collapse into a single `-`. Leading and trailing
/// `-`/`_` are trimmed.
pub fn slugify(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending_separator = false;

    for ch in value.chars() {
        for folded in fold_char(ch) {
            if folded == '-' || folded.is_whitespace() {
                pending_separator = true;
                continue;
            }
            if !(folded.is_ascii_alphanumeric() || folded == '_') {
                continue;
            }
            if pending_separator && !out.is_empty() {
                out.push('-');
            }
            pending_separator = false;
            out.push(folded.to_ascii_lowercase());
        }
    }

    out.trim_matches(|c| c == '-' || c == '_').to_string()
}

fn fold_char(ch: char) -> Vec<char> {
    if ch.is_ascii() {
        return vec![ch];
    }
    let base = match ch.to_lowercase().next().unwrap_or(ch) {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' => 'h',
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' => 'i',
        'ĵ' => 'j',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'ţ' | 'ť' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        c if c.is_whitespace() => ' ',
        _ => return Vec::new(),
    };
    vec![base]
}

/// Returns `base` if it is free, otherwise the first `base-N` (N >= 2) not
/// present in `taken`.
pub fn next_available_slug(base: &str, taken: &HashSet<String>) -> String {
    if !taken.contains(base) {
        return base.to_string();
    }
    (2..)
        .map(|n| format!("{}-{}", base, n))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_else(|| base.to_string())
}

/// Application slug: name parts plus the integer unix seconds of creation.
pub fn application_slug_base(first_name: &str, last_name: &str, created_unix: i64) -> String {
    slugify(&format!("{}-{}-{}", first_name, last_name, created_unix))
}

fn like_prefix_pattern(base: &str) -> String {
    let mut escaped = String::with_capacity(base.len() + 2);
    for ch in base.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push_str("-%");
    escaped
}

/// Loads every slug in `scope` that is `base` itself or one of its
/// counter-suffixed variants.
pub async fn taken_slugs(pool: &PgPool, scope: SlugScope, base: &str) -> Result<HashSet<String>> {
    let query = format!(
        "SELECT slug FROM {} WHERE slug = $1 OR slug LIKE $2",
        scope.table()
    );
    let rows: Vec<(String,)> = sqlx::query_as(&query)
        .bind(base)
        .bind(like_prefix_pattern(base))
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(|(slug,)| slug).collect())
}

/// Inserts a row under slugs produced by `next_slug` until one sticks.
///
/// A unique violation on the slug index of `scope` means a concurrent writer
/// claimed the slug between lookup and insert, so a fresh slug is computed.
/// After [`SLUG_RETRY_LIMIT`] lost races the caller gets `Error::Conflict`.
/// Any other failure is returned immediately.
pub async fn claim_slug<T, N, NFut, I, IFut>(
    scope: SlugScope,
    mut next_slug: N,
    mut insert: I,
) -> Result<T>
where
    N: FnMut() -> NFut,
    NFut: Future<Output = Result<String>>,
    I: FnMut(String) -> IFut,
    IFut: Future<Output = std::result::Result<T, sqlx::Error>>,
{
    for attempt in 1..=SLUG_RETRY_LIMIT {
        let slug = next_slug().await?;
        match insert(slug.clone()).await {
            Ok(row) => return Ok(row),
            Err(err) if is_unique_violation_of(&err, scope.constraint()) => {
                warn!(attempt, table = scope.table(), slug = %slug, "Slug claimed concurrently, retrying");
            }
            Err(err) => return Err(err.into()),
        }
    }

    Err(Error::Conflict(format!(
        "Could not allocate a unique slug in {} after {} attempts",
        scope.table(),
        SLUG_RETRY_LIMIT
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::fmt;
    use std::future::ready;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn taken(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Backend Engineer"), "backend-engineer");
        assert_eq!(slugify("  Senior   Rust -- Developer  "), "senior-rust-developer");
    }

    #[test]
    fn slugify_drops_punctuation_and_folds_accents() {
        assert_eq!(slugify("C++ / Qt Developer!"), "c-qt-developer");
        assert_eq!(slugify("José Müller"), "jose-muller");
        assert_eq!(slugify("snake_case stays"), "snake_case-stays");
        assert_eq!(slugify("_-edge-_"), "edge");
    }

    #[test]
    fn slugify_can_be_empty() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("理工"), "");
    }

    #[test]
    fn application_slug_matches_name_and_timestamp() {
        assert_eq!(application_slug_base("Ann", "Lee", 1717243200), "ann-lee-1717243200");
        assert_eq!(
            application_slug_base("Mary Ann", "O'Neil", 1717243200),
            "mary-ann-oneil-1717243200"
        );
    }

    #[test]
    fn next_available_keeps_free_base() {
        assert_eq!(next_available_slug("backend-engineer", &taken(&[])), "backend-engineer");
        assert_eq!(
            next_available_slug("backend-engineer", &taken(&["backend-engineer-2"])),
            "backend-engineer"
        );
    }

    #[test]
    fn next_available_appends_first_free_counter() {
        let existing = taken(&["backend-engineer", "backend-engineer-2", "backend-engineer-4"]);
        assert_eq!(next_available_slug("backend-engineer", &existing), "backend-engineer-3");
        assert_eq!(
            next_available_slug("backend-engineer", &taken(&["backend-engineer"])),
            "backend-engineer-2"
        );
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_prefix_pattern("a_b"), "a\\_b-%");
        assert_eq!(like_prefix_pattern("plain"), "plain-%");
    }

    #[derive(Debug)]
    struct DuplicateKey(&'static str);

    impl fmt::Display for DuplicateKey {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "duplicate key value violates unique constraint \"{}\"", self.0)
        }
    }

    impl std::error::Error for DuplicateKey {}

    impl DatabaseError for DuplicateKey {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint"
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::UniqueViolation
        }

        fn constraint(&self) -> Option<&str> {
            Some(self.0)
        }
    }

    fn duplicate(constraint: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(DuplicateKey(constraint)))
    }

    #[tokio::test]
    async fn claim_slug_gives_up_with_conflict_after_retry_limit() {
        let inserts = AtomicUsize::new(0);

        let result = claim_slug(
            SlugScope::Jobs,
            || ready(Ok("backend-engineer".to_string())),
            |_slug| {
                inserts.fetch_add(1, Ordering::SeqCst);
                ready(Err::<(), _>(duplicate("jobs_slug_key")))
            },
        )
        .await;

        assert!(matches!(result, Err(Error::Conflict(_))));
        assert_eq!(inserts.load(Ordering::SeqCst), SLUG_RETRY_LIMIT);
    }

    #[tokio::test]
    async fn claim_slug_recomputes_after_losing_a_race() {
        let lookups = AtomicUsize::new(0);
        let inserts = AtomicUsize::new(0);

        let slug = claim_slug(
            SlugScope::JobApplications,
            || {
                let n = lookups.fetch_add(1, Ordering::SeqCst);
                let existing = if n == 0 { taken(&[]) } else { taken(&["ann-lee-1717243200"]) };
                ready(Ok(next_available_slug("ann-lee-1717243200", &existing)))
            },
            |slug| {
                let result = if inserts.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(duplicate("job_applications_slug_key"))
                } else {
                    Ok(slug)
                };
                ready(result)
            },
        )
        .await
        .unwrap();

        assert_eq!(slug, "ann-lee-1717243200-2");
        assert_eq!(lookups.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn claim_slug_does_not_retry_other_constraints() {
        let inserts = AtomicUsize::new(0);

        let result = claim_slug(
            SlugScope::JobApplications,
            || ready(Ok("ann-lee-1717243200".to_string())),
            |_slug| {
                inserts.fetch_add(1, Ordering::SeqCst);
                ready(Err::<(), _>(duplicate("jobs_slug_key")))
            },
        )
        .await;

        assert!(matches!(result, Err(Error::Conflict(_))));
        assert_eq!(inserts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn claim_slug_propagates_lookup_failures() {
        let result: Result<()> = claim_slug(
            SlugScope::Jobs,
            || ready(Err(Error::Database(sqlx::Error::PoolTimedOut))),
            |_slug| ready(Ok(())),
        )
        .await;

        assert!(matches!(result, Err(Error::Database(_))));
    }
}
