/// Indentation-aware line buffer used by the emitters.
pub(crate) struct CodeWriter {
    buf: String,
    indent: usize,
}

impl CodeWriter {
    pub(crate) fn new() -> Self {
        Self {
            buf: String::new(),
            indent: 0,
        }
    }

    pub(crate) fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.indent {
                self.buf.push_str("    ");
            }
            self.buf.push_str(text);
        }
        self.buf.push('\n');
    }

    pub(crate) fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Writes `text` and indents everything up to the matching [`close`](Self::close).
    pub(crate) fn open(&mut self, text: impl AsRef<str>) {
        self.line(text);
        self.indent += 1;
    }

    pub(crate) fn close(&mut self, text: impl AsRef<str>) {
        self.indent = self.indent.saturating_sub(1);
        self.line(text);
    }

    /// Writes `text` as `///` doc comment lines.
    pub(crate) fn doc(&mut self, text: &str) {
        for line in text.lines() {
            if line.is_empty() {
                self.line("///");
            } else {
                self.line(format!("/// {line}"));
            }
        }
    }

    pub(crate) fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_indents_blocks() {
        let mut w = CodeWriter::new();
        w.doc("First line.\n\nSecond paragraph.");
        w.open("fn f() {");
        w.line("body();");
        w.blank();
        w.close("}");

        assert_eq!(
            w.finish(),
            "/// First line.\n///\n/// Second paragraph.\nfn f() {\n    body();\n\n}\n"
        );
    }
}
