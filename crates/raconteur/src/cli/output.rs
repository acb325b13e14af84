//! Terminal rendering sink.

use raconteur_client::ResponseSink;
use std::io::Write;

/// Streams chunks to stdout as they arrive.
///
/// The placeholder goes to stderr so piped stdout stays clean, and is erased
/// in place once the first response bytes arrive.
#[derive(Debug, Default)]
pub struct StdoutSink {
    placeholder_shown: bool,
}

impl StdoutSink {
    /// Creates a sink with no pending placeholder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Terminates the output line after a completed cycle.
    pub fn finish(&mut self) {
        self.erase_placeholder();
        println!();
    }

    fn erase_placeholder(&mut self) {
        if self.placeholder_shown {
            eprint!("\r\x1b[2K");
            let _ = std::io::stderr().flush();
            self.placeholder_shown = false;
        }
    }
}

impl ResponseSink for StdoutSink {
    fn reset(&mut self, placeholder: &str) {
        eprint!("{placeholder}");
        let _ = std::io::stderr().flush();
        self.placeholder_shown = true;
    }

    fn clear(&mut self) {
        self.erase_placeholder();
    }

    fn append(&mut self, chunk: &str) {
        print!("{chunk}");
        let _ = std::io::stdout().flush();
    }

    fn fail(&mut self, message: &str) {
        self.erase_placeholder();
        print!("{message}");
        let _ = std::io::stdout().flush();
    }
}
