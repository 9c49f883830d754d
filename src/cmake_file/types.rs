use std::collections::HashSet;
use std::path::PathBuf;

/// A CMakeLists.txt loaded as verbatim lines.
///
/// Each entry of `lines` keeps its own terminator (`\n`, `\r\n`, or nothing
/// for an unterminated last line), so concatenating them reproduces the file
/// byte for byte.
#[derive(Debug, Clone, PartialEq)]
pub struct CMakeFile {
    pub path: PathBuf,
    pub lines: Vec<String>,
    /// Index into `lines` of the `set(SOURCE_FILES ...)` line
    pub managed_line: usize,
}

impl CMakeFile {
    /// The managed line, terminator included
    pub fn source_line(&self) -> &str {
        &self.lines[self.managed_line]
    }

    /// Sources currently recorded on the managed line
    pub fn recorded_sources(&self) -> HashSet<String> {
        super::parse_recorded_sources(self.source_line())
    }

    /// Replace the managed line with the given sources, in iteration order.
    pub fn set_sources<'a, I>(&mut self, sources: I)
    where
        I: IntoIterator<Item = &'a String>,
    {
        let ending = match line_ending(self.source_line()) {
            "" => "\n",
            ending => ending,
        };
        self.lines[self.managed_line] = super::render_source_line(sources, ending);
    }

    /// Full file contents
    pub fn contents(&self) -> String {
        self.lines.concat()
    }
}

/// The terminator a line ends with
fn line_ending(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}
