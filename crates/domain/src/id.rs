//! Identifier transformations between backend resources.

/// Maps a prompt's backend-assigned id to the id that addresses its
/// responses sub-collection.
///
/// BUG: the prompt collection and the responses lookup disagree on
/// indexing (one is zero-indexed, the other one-indexed).
/// WORKAROUND: `prompt_id + 1` is the key the responses endpoint expects.
/// This transformation is deliberately isolated here so it stays
/// greppable and can be removed once the backend is consistent.
#[must_use]
pub const fn response_lookup_id(prompt_id: i64) -> i64 {
    prompt_id + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_id_is_offset_by_one() {
        assert_eq!(response_lookup_id(42), 43);
        assert_eq!(response_lookup_id(0), 1);
    }
}
