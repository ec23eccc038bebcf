//! Reply Chunking
//!
//! Splits long replies so each piece fits in a single chat message.
//! Lengths are counted in characters, which is how Discord measures
//! its message limit.

/// Discord's maximum message length
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// Characters kept free in each chunk for the part label
pub const LABEL_RESERVE: usize = 40;

/// Split `content` into chunks of at most `limit` characters
///
/// Each chunk ends right after the last whitespace character of its window
/// when there is one past the first character, otherwise at exactly `limit`
/// characters. Concatenating the chunks gives back `content` unchanged.
pub fn split_message(content: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let mut chunks = Vec::new();
    let mut rest = content;

    loop {
        let window_end = match rest.char_indices().nth(limit) {
            Some((idx, _)) => idx,
            None => {
                if chunks.is_empty() || !rest.is_empty() {
                    chunks.push(rest.to_string());
                }
                return chunks;
            }
        };

        let window = &rest[..window_end];
        let cut = window
            .char_indices()
            .rev()
            .find(|&(idx, c)| idx > 0 && c.is_whitespace())
            .map(|(idx, c)| idx + c.len_utf8())
            .unwrap_or(window_end);

        chunks.push(rest[..cut].to_string());
        rest = &rest[cut..];
    }
}

/// Build the outgoing messages for a reply
///
/// Replies that fit in `max_len` characters are returned as-is. Longer ones
/// are split and every part is labelled with its ordinal and the part count,
/// keeping each labelled message within `max_len`. A `max_len` too small to
/// hold a label gives plain unlabelled chunks.
pub fn compose_reply(content: &str, max_len: usize) -> Vec<String> {
    if content.chars().count() <= max_len {
        return vec![content.to_string()];
    }

    if max_len <= LABEL_RESERVE {
        return split_message(content, max_len);
    }

    let chunks = split_message(content, max_len - LABEL_RESERVE);
    let total = chunks.len();

    chunks
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| {
            if i == 0 {
                format!("**Long reply (part {}/{}):**\n{}", i + 1, total, chunk)
            } else {
                format!("**Continued (part {}/{}):**\n{}", i + 1, total, chunk)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(len: usize) -> String {
        "lorem ipsum dolor sit amet "
            .chars()
            .cycle()
            .take(len)
            .collect()
    }

    #[test]
    fn test_short_content_is_single_chunk() {
        assert_eq!(split_message("hello world", 2000), vec!["hello world"]);
        assert_eq!(split_message("", 10), vec![""]);
    }

    #[test]
    fn test_long_reply_splits_into_three() {
        let content = words(4500);
        let chunks = split_message(&content, 2000);
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|c| c.chars().count() <= 2000));
        assert_eq!(chunks.concat(), content);
        // Splits land after whitespace so no word is cut in half.
        for chunk in &chunks[..2] {
            assert!(chunk.ends_with(' '));
        }
    }

    #[test]
    fn test_hard_split_without_whitespace() {
        let content = "x".repeat(4500);
        let chunks = split_message(&content, 2000);
        let lens: Vec<usize> = chunks.iter().map(|c| c.len()).collect();
        assert_eq!(lens, vec![2000, 2000, 500]);
    }

    #[test]
    fn test_leading_whitespace_only_forces_hard_split() {
        let chunks = split_message(" abcdefgh", 4);
        assert_eq!(chunks, vec![" abc", "defg", "h"]);
    }

    #[test]
    fn test_multibyte_characters_counted_as_chars() {
        let content = "ação é ótima ".repeat(50);
        let chunks = split_message(&content, 30);
        assert!(chunks.iter().all(|c| c.chars().count() <= 30));
        assert_eq!(chunks.concat(), content);
    }

    #[test]
    fn test_chunks_reassemble_for_many_limits() {
        let samples = [
            words(1),
            words(57),
            words(999),
            "a\nb\tc  d".repeat(40),
            "no-spaces-here".repeat(30),
            "🎲 roll ".repeat(80),
        ];
        for content in &samples {
            for limit in [1, 2, 3, 7, 16, 100, 2000] {
                let chunks = split_message(content, limit);
                assert_eq!(&chunks.concat(), content);
                assert!(chunks.iter().all(|c| c.chars().count() <= limit));
                if content.chars().count() <= limit {
                    assert_eq!(chunks.len(), 1);
                }
            }
        }
    }

    #[test]
    fn test_compose_short_reply_is_unlabelled() {
        assert_eq!(compose_reply("Hi there", MAX_MESSAGE_LENGTH), vec!["Hi there"]);
        let exact = "y".repeat(MAX_MESSAGE_LENGTH);
        assert_eq!(compose_reply(&exact, MAX_MESSAGE_LENGTH), vec![exact]);
    }

    #[test]
    fn test_compose_long_reply_is_labelled() {
        let content = words(4500);
        let messages = compose_reply(&content, MAX_MESSAGE_LENGTH);
        assert_eq!(messages.len(), 3);
        assert!(messages[0].starts_with("**Long reply (part 1/3):**\n"));
        assert!(messages[1].starts_with("**Continued (part 2/3):**\n"));
        assert!(messages[2].starts_with("**Continued (part 3/3):**\n"));
        assert!(messages
            .iter()
            .all(|m| m.chars().count() <= MAX_MESSAGE_LENGTH));

        let bodies: String = messages
            .iter()
            .map(|m| m.split_once('\n').unwrap().1)
            .collect();
        assert_eq!(bodies, content);
    }

    #[test]
    fn test_compose_small_limit_falls_back_to_plain_chunks() {
        let content = "x".repeat(50);
        let messages = compose_reply(&content, 30);
        assert_eq!(messages, vec!["x".repeat(30), "x".repeat(20)]);

        let messages = compose_reply(&words(100), LABEL_RESERVE);
        assert!(messages.iter().all(|m| m.chars().count() <= LABEL_RESERVE));
        assert!(messages.iter().all(|m| !m.starts_with("**")));
        assert_eq!(messages.concat(), words(100));
    }
}
