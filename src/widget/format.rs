//! Assistant reply formatting — markdown structure markers.
//!
//! DESIGN
//! ======
//! Literal substitution over the whole reply, not a markdown parser.
//! Each pass only inserts marker text around what it recognizes; no
//! character of the original reply is ever removed. The transform is
//! NOT idempotent: a second application re-wraps labels it already
//! wrapped. History therefore stores raw replies and callers format
//! exactly once, at display time, and never for user-authored content.

/// Insert markdown structure markers into a raw assistant reply.
///
/// Fixed pass order: `Price:` and `URL:` get a paragraph break and bold
/// wrapping, `Reason:` additionally a trailing space, then numbered-list
/// markers (`1. `) get a paragraph break, a horizontal rule, and a
/// level-3 heading prefix.
#[must_use]
pub fn format_reply(raw: &str) -> String {
    let text = raw.replace("Price:", "\n\n**Price:**");
    let text = text.replace("URL:", "\n\n**URL:**");
    let text = text.replace("Reason:", "\n\n**Reason:** ");
    break_numbered_items(&text)
}

/// Re-emit every `<digits>. ` marker as a section heading preceded by a
/// horizontal rule.
fn break_numbered_items(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len() + 16);
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && !bytes[i].is_ascii_digit() {
                i += 1;
            }
            // Slice boundaries land on ASCII digits or EOF, so they are
            // always char boundaries.
            out.push_str(&text[start..i]);
            continue;
        }

        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i + 1 < bytes.len() && bytes[i] == b'.' && bytes[i + 1] == b' ' {
            out.push_str("\n\n---\n\n### ");
            out.push_str(&text[start..=i + 1]);
            i += 2;
        } else {
            out.push_str(&text[start..i]);
        }
    }

    out
}

#[cfg(test)]
#[path = "format_test.rs"]
mod tests;
