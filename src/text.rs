/// The terminal symbol appended to a text before it is indexed, unless configured otherwise.
pub const DEFAULT_TERMINAL: u8 = b'$';

/// Returns a copy of `text` with `terminal` appended.
///
/// The terminal must not occur in `text`, otherwise a suffix could be a literal prefix of another suffix and
/// the one-to-one correspondence between suffixes and leaves would break.
pub(crate) fn terminated(text: &[u8], terminal: u8) -> Vec<u8> {
    assert_terminal_absent(text, terminal);

    let mut terminated = Vec::with_capacity(text.len() + 1);
    terminated.extend_from_slice(text);
    terminated.push(terminal);

    terminated
}

pub(crate) fn assert_terminal_absent(text: &[u8], terminal: u8) {
    if let Some(position) = memchr::memchr(terminal, text) {
        panic!(
            "The terminal symbol {:?} must not occur in the text, but was found at position {position}",
            terminal as char
        );
    }
}

/// Length of the longest common prefix of `a` and `b`.
pub fn longest_common_prefix(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
