//! Console prompting over an injected reader/writer pair.
//!
//! The bootstrap use case asks the user for credentials on first run and
//! during repair. Instead of touching `stdin`/`stdout` directly, everything
//! goes through a [`Console`] that wraps any `BufRead` + `Write` pair. The
//! binary passes the locked standard streams; tests pass an
//! `std::io::Cursor` of scripted answers and a `Vec<u8>` that captures the
//! prompts.
//!
//! # Prompt protocol
//!
//! Each prompt is a fixed label written *without* a trailing newline,
//! followed by a flush and one blocking line read. The answer is trimmed of
//! surrounding whitespace before storage. There is no re-prompt on empty
//! input, no masking of secret input, and no format validation — an empty
//! answer is stored as an empty string.

use std::io::{self, BufRead, Write};

use credkeep_core::CredentialProfile;
use tracing::debug;

/// Interactive console bound to a reader/writer pair.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<io::StdinLock<'static>, io::StdoutLock<'static>> {
    /// Builds a console over the real standard streams.
    pub fn stdio() -> Self {
        Self {
            reader: io::stdin().lock(),
            writer: io::stdout().lock(),
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an arbitrary reader/writer pair.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the console, returning the reader and writer.
    ///
    /// Lets callers that injected in-memory buffers inspect what was written.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Writes a status line (with trailing newline) to the console.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()
    }

    /// Writes `label` without a newline, flushes, reads one line, and returns
    /// it trimmed of surrounding whitespace.
    ///
    /// End-of-input on the reader yields an empty string, the same as an
    /// empty answer.
    pub fn prompt_line(&mut self, label: &str) -> io::Result<String> {
        write!(self.writer, "{label}")?;
        self.writer.flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    /// Runs the three credential prompts and returns the populated profile.
    ///
    /// Fields may legitimately be empty strings.
    pub fn collect_profile(&mut self) -> io::Result<CredentialProfile> {
        let api_key = self.prompt_line("API Key: ")?;
        let api_secret = self.prompt_line("API Secret: ")?;
        let tenant_id = self.prompt_line("Tenant ID: ")?;

        debug!("collected credential profile from console");
        Ok(CredentialProfile {
            api_key,
            api_secret,
            tenant_id,
        })
    }

    /// Collects one new named profile: credentials first, then the profile
    /// name. Both the first-run and the repair path use this routine.
    pub fn collect_named_profile(&mut self) -> io::Result<(String, CredentialProfile)> {
        let profile = self.collect_profile()?;
        let name = self.prompt_line("CloudSecure Name: ")?;
        Ok((name, profile))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Builds a console reading the scripted `input` and writing into a
    /// buffer the test can inspect afterwards.
    fn scripted(input: &str) -> Console<Cursor<String>, Vec<u8>> {
        Console::new(Cursor::new(input.to_string()), Vec::new())
    }

    fn written(console: &Console<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8(console.writer.clone()).expect("prompts are UTF-8")
    }

    #[test]
    fn test_prompt_line_trims_surrounding_whitespace() {
        // Arrange
        let mut console = scripted("  myname \n");

        // Act
        let answer = console.prompt_line("Name: ").expect("prompt");

        // Assert
        assert_eq!(answer, "myname");
    }

    #[test]
    fn test_prompt_line_writes_label_without_newline() {
        let mut console = scripted("x\n");
        console.prompt_line("API Key: ").expect("prompt");

        assert_eq!(written(&console), "API Key: ");
    }

    #[test]
    fn test_prompt_line_accepts_empty_answer_without_reprompt() {
        let mut console = scripted("\n");
        let answer = console.prompt_line("Name: ").expect("prompt");
        assert_eq!(answer, "");
    }

    #[test]
    fn test_prompt_line_returns_empty_on_end_of_input() {
        let mut console = scripted("");
        let answer = console.prompt_line("Name: ").expect("prompt");
        assert_eq!(answer, "");
    }

    #[test]
    fn test_collect_profile_prompts_in_order_and_trims() {
        // Arrange
        let mut console = scripted(" key-1 \nsecret-2\n\ttenant-3\n");

        // Act
        let profile = console.collect_profile().expect("collect");

        // Assert – answers map to fields in prompt order, trimmed.
        assert_eq!(profile.api_key, "key-1");
        assert_eq!(profile.api_secret, "secret-2");
        assert_eq!(profile.tenant_id, "tenant-3");
        assert_eq!(written(&console), "API Key: API Secret: Tenant ID: ");
    }

    #[test]
    fn test_collect_named_profile_asks_name_last() {
        // Arrange
        let mut console = scripted("k\ns\nt\nprod\n");

        // Act
        let (name, profile) = console.collect_named_profile().expect("collect");

        // Assert
        assert_eq!(name, "prod");
        assert_eq!(profile.api_key, "k");
        assert_eq!(
            written(&console),
            "API Key: API Secret: Tenant ID: CloudSecure Name: "
        );
    }

    #[test]
    fn test_say_appends_newline() {
        let mut console = scripted("");
        console.say("Configuration saved").expect("say");
        assert_eq!(written(&console), "Configuration saved\n");
    }
}
