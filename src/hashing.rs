//! Content-hash identifiers for consolidated and unified records.

use std::collections::BTreeSet;

use sha2::{Digest, Sha256};

use crate::constants::{DISASTER_IMPACT_ID_PREFIX, ID_JOIN_SEPARATOR};

/// Content hash of a set of ids: sorted, deduplicated, `|`-joined, SHA-256,
/// hex encoded. Returns `None` for an empty set rather than hashing "".
pub fn group_digest<I, S>(ids: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let unique: BTreeSet<String> = ids
        .into_iter()
        .map(|id| id.as_ref().trim().to_string())
        .filter(|id| !id.is_empty())
        .collect();
    if unique.is_empty() {
        return None;
    }

    let canonical = unique
        .into_iter()
        .collect::<Vec<_>>()
        .join(ID_JOIN_SEPARATOR);

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    Some(hex::encode(hasher.finalize()))
}

/// `<source>_<id>`, keeping ids from different sources apart.
pub fn prefixed(source: &str, id: &str) -> String {
    format!("{}_{}", source, id)
}

/// Cross-source id over already prefixed constituent ids.
pub fn disaster_impact_id<I, S>(prefixed_ids: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    group_digest(prefixed_ids).map(|digest| format!("{}{}", DISASTER_IMPACT_ID_PREFIX, digest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_order_independent() {
        assert_eq!(group_digest(["a", "b"]), group_digest(["b", "a"]));
        assert_eq!(group_digest(["a", "b", "a"]), group_digest(["b", "a"]));
    }

    #[test]
    fn test_digest_hashes_pipe_joined_sorted_ids() {
        let mut hasher = Sha256::new();
        hasher.update(b"a|b");
        let expected = hex::encode(hasher.finalize());

        assert_eq!(group_digest(["b", "a"]).unwrap(), expected);
        assert_eq!(group_digest(["x"]).unwrap().len(), 64);
    }

    #[test]
    fn test_empty_set_has_no_digest() {
        assert_eq!(group_digest(Vec::<String>::new()), None);
        assert_eq!(group_digest(["", "  "]), None);
    }

    #[test]
    fn test_disaster_impact_id_prefix() {
        let id = disaster_impact_id([prefixed("glide", "A1"), prefixed("gdacs", "B1")]).unwrap();
        assert!(id.starts_with("DI_"));
        assert_eq!(id, disaster_impact_id(["gdacs_B1", "glide_A1"]).unwrap());
    }
}
