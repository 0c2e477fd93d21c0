/// Character the fence is built from.
pub const FENCE_CHAR: char = '`';

/// Shortest fence Markdown accepts.
pub const MIN_FENCE_LEN: usize = 3;

/// Calculates the fence string for wrapping `content` in a code block.
///
/// The fence is one backtick longer than the longest backtick run found
/// anywhere in the content, and never shorter than three, so nothing inside
/// the file can close the block early.
pub fn calculate_fence(content: &str) -> String {
    let fence_len = MIN_FENCE_LEN.max(longest_run(content, FENCE_CHAR) + 1);
    FENCE_CHAR.to_string().repeat(fence_len)
}

fn longest_run(content: &str, needle: char) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in content.chars() {
        if c == needle {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}
