//! Bounded context excerpt of a conversation history.

use crate::domain::models::ConversationTurn;

/// Number of most recent turns included in a prompt by default.
pub const DEFAULT_CONTEXT_TURNS: usize = 3;

/// Return the last `max_turns` turns of `history`, oldest first.
///
/// The whole history comes back unchanged when it is shorter than
/// `max_turns`; an empty history or `max_turns == 0` yields an empty slice.
pub fn window(history: &[ConversationTurn], max_turns: usize) -> &[ConversationTurn] {
    let start = history.len().saturating_sub(max_turns);
    &history[start..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Provenance;
    use proptest::prelude::*;

    fn history(n: usize) -> Vec<ConversationTurn> {
        (0..n)
            .map(|i| {
                if i % 2 == 0 {
                    ConversationTurn::user(format!("turn {i}"))
                } else {
                    ConversationTurn::agent(format!("turn {i}"), Provenance::Fallback)
                }
            })
            .collect()
    }

    #[test]
    fn test_empty_history() {
        assert!(window(&[], DEFAULT_CONTEXT_TURNS).is_empty());
    }

    #[test]
    fn test_shorter_history_returned_whole() {
        let h = history(2);
        assert_eq!(window(&h, 3), h.as_slice());
    }

    #[test]
    fn test_keeps_most_recent_turns() {
        let h = history(5);
        let excerpt = window(&h, 3);
        let texts: Vec<&str> = excerpt.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["turn 2", "turn 3", "turn 4"]);
    }

    #[test]
    fn test_zero_turns() {
        let h = history(4);
        assert!(window(&h, 0).is_empty());
    }

    proptest! {
        #[test]
        fn prop_window_length_and_order(len in 0usize..40, max_turns in 0usize..10) {
            let h = history(len);
            let excerpt = window(&h, max_turns);

            prop_assert_eq!(excerpt.len(), len.min(max_turns));
            // Suffix of the original, so relative order is preserved
            prop_assert_eq!(excerpt, &h[len - excerpt.len()..]);
            // Pure: same input, same output
            prop_assert_eq!(excerpt, window(&h, max_turns));
        }
    }
}
