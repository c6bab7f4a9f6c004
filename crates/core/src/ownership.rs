//! Owner-gated mutation: only the identity recorded as a resource's creator
//! may update or delete it.

use crate::error::CoreError;

/// A resource with a single owning username.
pub trait Owned {
    fn owner(&self) -> &str;
}

/// Resolve a looked-up resource and check that `actor` owns it.
///
/// Absence is reported before ownership, so a missing resource is always
/// `NotFound` and never `Forbidden`. `action` is used in the error message
/// (e.g. "update", "delete").
pub fn authorize_owner<T: Owned>(
    resource: Option<T>,
    entity: &'static str,
    key: impl std::fmt::Display,
    actor: &str,
    action: &str,
) -> Result<T, CoreError> {
    let resource = resource.ok_or_else(|| CoreError::not_found(entity, key))?;

    if resource.owner() != actor {
        return Err(CoreError::Forbidden(format!(
            "You can only {action} your own {}",
            entity.to_lowercase()
        )));
    }

    Ok(resource)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[derive(Debug)]
    struct Note {
        author: String,
    }

    impl Owned for Note {
        fn owner(&self) -> &str {
            &self.author
        }
    }

    fn note(author: &str) -> Option<Note> {
        Some(Note {
            author: author.to_string(),
        })
    }

    #[test]
    fn owner_is_allowed() {
        let n = authorize_owner(note("alice"), "Note", 1, "alice", "update").unwrap();
        assert_eq!(n.author, "alice");
    }

    #[test]
    fn other_user_is_forbidden() {
        let err = authorize_owner(note("bob"), "Blog post", 7, "alice", "delete").unwrap_err();
        assert_matches!(err, CoreError::Forbidden(ref msg) if msg == "You can only delete your own blog post");
    }

    #[test]
    fn missing_resource_is_not_found_even_for_strangers() {
        let err = authorize_owner::<Note>(None, "Note", 42, "mallory", "update").unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "Note", ref key } if key == "42");
    }

    #[test]
    fn comparison_is_exact() {
        assert_matches!(
            authorize_owner(note("Alice"), "Note", 1, "alice", "update"),
            Err(CoreError::Forbidden(_))
        );
    }
}
