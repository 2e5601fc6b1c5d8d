//! Email obfuscation for log output
//!
//! Every log sink is wrapped in a [`RedactingWriter`], so an email
//! address appearing anywhere in a formatted record is partially
//! obfuscated before it reaches the console or a file. With two
//! visible characters, `bob@example.net` becomes `bo*@example.net`;
//! with zero, `***@example.net`. Text that is not shaped like an email
//! passes through unchanged.

use std::io;

use regex::Regex;
use tracing_subscriber::fmt::MakeWriter;

/// Matches email addresses embedded in formatted log output
fn email_pattern() -> Regex {
    Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}").expect("valid email regex")
}

/// Obfuscate one email address, keeping `visible` leading characters
/// of the local part
pub fn obfuscate_email(email: &str, visible: usize) -> String {
    let Some((local, domain)) = email.split_once('@') else {
        return email.to_string();
    };
    if local.is_empty() || domain.is_empty() {
        return email.to_string();
    }

    let visible = visible.min(local.chars().count());
    let kept: String = local.chars().take(visible).collect();
    let stars = "*".repeat(local.chars().count() - visible);
    format!("{}{}@{}", kept, stars, domain)
}

/// `MakeWriter` adapter that obfuscates emails in everything written
/// through it
pub struct RedactingWriter<M> {
    inner: M,
    visible: usize,
    pattern: Regex,
}

impl<M> RedactingWriter<M> {
    pub fn new(inner: M, visible: usize) -> Self {
        Self {
            inner,
            visible,
            pattern: email_pattern(),
        }
    }
}

impl<'a, M> MakeWriter<'a> for RedactingWriter<M>
where
    M: MakeWriter<'a>,
{
    type Writer = Redacting<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        Redacting {
            inner: self.inner.make_writer(),
            visible: self.visible,
            pattern: self.pattern.clone(),
        }
    }
}

/// The per-record writer produced by [`RedactingWriter`]
pub struct Redacting<W> {
    inner: W,
    visible: usize,
    pattern: Regex,
}

impl<W: io::Write> io::Write for Redacting<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // The fmt layer hands over one whole formatted record per call,
        // so matching within the chunk is sufficient.
        let text = String::from_utf8_lossy(buf);
        let redacted = self
            .pattern
            .replace_all(&text, |caps: &regex::Captures<'_>| {
                obfuscate_email(&caps[0], self.visible)
            });
        self.inner.write_all(redacted.as_bytes())?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn obfuscates_with_two_visible_chars() {
        assert_eq!(obfuscate_email("bob@example.net", 2), "bo*@example.net");
        assert_eq!(
            obfuscate_email("margaret@example.net", 2),
            "ma******@example.net"
        );
    }

    #[test]
    fn obfuscates_fully_at_zero_visible() {
        assert_eq!(obfuscate_email("bob@example.net", 0), "***@example.net");
    }

    #[test]
    fn short_local_part_is_not_padded() {
        // Local part shorter than the visible length stays intact.
        assert_eq!(obfuscate_email("b@example.net", 2), "b@example.net");
    }

    #[test]
    fn non_email_passes_through() {
        assert_eq!(obfuscate_email("not an email", 2), "not an email");
        assert_eq!(obfuscate_email("@example.net", 2), "@example.net");
        assert_eq!(obfuscate_email("bob@", 2), "bob@");
    }

    fn redact(line: &str, visible: usize) -> String {
        let mut out = Vec::new();
        let mut writer = Redacting {
            inner: &mut out,
            visible,
            pattern: email_pattern(),
        };
        writer.write_all(line.as_bytes()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn writer_redacts_embedded_addresses() {
        assert_eq!(
            redact("user logged in email=bob@example.net from 1.2.3.4", 2),
            "user logged in email=bo*@example.net from 1.2.3.4"
        );
    }

    #[test]
    fn writer_redacts_multiple_addresses_per_line() {
        assert_eq!(
            redact("alice@example.net wrote to bob@example.net", 1),
            "a****@example.net wrote to b**@example.net"
        );
    }

    #[test]
    fn writer_leaves_plain_lines_alone() {
        let line = "tick 42: recomputed bar chart for Norway";
        assert_eq!(redact(line, 2), line);
    }
}
