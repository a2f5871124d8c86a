use crate::errors::{KinshipError, Result};

/// Validate a person name and return it trimmed
///
/// # Errors
/// * `InvalidName` - If the name is empty or whitespace-only
pub fn validate_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(KinshipError::InvalidName {
            reason: "Name cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(trimmed)
}

/// Clean a list of relative names
///
/// Blank entries are dropped, the rest are trimmed, and repeats collapse to
/// their first occurrence.
pub fn normalize_relative_names(names: &[String]) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        let trimmed = name.trim();
        if trimmed.is_empty() || cleaned.iter().any(|n| n == trimmed) {
            continue;
        }
        cleaned.push(trimmed.to_string());
    }
    cleaned
}

/// Check that the requested relatives make sense for `subject`
///
/// # Errors
/// * `SelfRelation` - If the subject appears among its own relatives
/// * `ConflictingRelation` - If a name is listed as both parent and child
pub fn check_relations(subject: &str, parents: &[String], children: &[String]) -> Result<()> {
    if parents.iter().chain(children).any(|n| n == subject) {
        return Err(KinshipError::SelfRelation {
            name: subject.to_string(),
        });
    }

    if let Some(both) = parents.iter().find(|p| children.contains(p)) {
        return Err(KinshipError::ConflictingRelation {
            name: both.clone(),
            subject: subject.to_string(),
        });
    }

    Ok(())
}
