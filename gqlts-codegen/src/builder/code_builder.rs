use super::{CodeFragment, Renderable};

/// Lays out [`CodeFragment`]s as indented text.
///
/// ```
/// use gqlts_codegen::{CodeBuilder, CodeFragment, Renderable};
///
/// struct Point;
///
/// impl Renderable for Point {
///     fn to_fragments(&self) -> Vec<CodeFragment> {
///         vec![CodeFragment::Block {
///             header: "export type Point = {".into(),
///             body: vec![CodeFragment::Line("x: number;".into())],
///             close: Some("};".into()),
///         }]
///     }
/// }
///
/// let mut builder = CodeBuilder::typescript();
/// builder.emit(&Point);
/// assert_eq!(builder.build(), "export type Point = {\n  x: number;\n};\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    unit: &'static str,
    depth: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(unit: &'static str) -> Self {
        Self {
            unit,
            depth: 0,
            buffer: String::new(),
        }
    }

    /// Two spaces per level.
    pub fn typescript() -> Self {
        Self::new("  ")
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            self.buffer.push_str(&self.unit.repeat(self.depth));
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Write a doc comment.
    ///
    /// One line of text becomes `/** text */`; more become a block with a
    /// ` * ` prefix per line. `*/` inside the text is escaped.
    pub fn push_jsdoc(&mut self, text: &str) -> &mut Self {
        let text = text.trim_start().replace("*/", "*\\/");
        let mut lines = text.lines();

        match (lines.next(), lines.next()) {
            (first, None) => self.push_line(&format!("/** {} */", first.unwrap_or_default())),
            _ => {
                self.push_line("/**");
                for line in text.lines() {
                    if line.trim().is_empty() {
                        self.push_line(" *");
                    } else {
                        self.push_line(&format!(" * {line}"));
                    }
                }
                self.push_line(" */")
            }
        }
    }

    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.write(&fragment);
        }
        self
    }

    fn write(&mut self, fragment: &CodeFragment) {
        match fragment {
            CodeFragment::Line(line) => {
                self.push_line(line);
            }
            CodeFragment::Blank => self.buffer.push('\n'),
            CodeFragment::JsDoc(text) => {
                self.push_jsdoc(text);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(header);
                self.depth += 1;
                body.iter().for_each(|f| self.write(f));
                self.depth -= 1;
                if let Some(close) = close {
                    self.push_line(close);
                }
            }
        }
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(fragments: Vec<CodeFragment>) -> String {
        struct Node(Vec<CodeFragment>);
        impl Renderable for Node {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                self.0.clone()
            }
        }
        let mut builder = CodeBuilder::typescript();
        builder.emit(&Node(fragments));
        builder.build()
    }

    #[test]
    fn test_nested_blocks() {
        let code = render(vec![CodeFragment::Block {
            header: "export type A = {".into(),
            body: vec![
                CodeFragment::Line("a: {".into()),
                CodeFragment::Block {
                    header: "b: {".into(),
                    body: vec![CodeFragment::Line("c: string;".into())],
                    close: Some("};".into()),
                },
            ],
            close: Some("};".into()),
        }]);
        assert_eq!(
            code,
            "export type A = {\n  a: {\n  b: {\n    c: string;\n  };\n};\n"
        );
    }

    #[test]
    fn test_block_without_close() {
        let code = render(vec![CodeFragment::Block {
            header: "type A =".into(),
            body: vec![
                CodeFragment::Line("| 'X'".into()),
                CodeFragment::Line("| 'Y';".into()),
            ],
            close: None,
        }]);
        assert_eq!(code, "type A =\n  | 'X'\n  | 'Y';\n");
    }

    #[test]
    fn test_blank_lines_are_not_indented() {
        let code = render(vec![CodeFragment::Block {
            header: "{".into(),
            body: vec![CodeFragment::Line("a;".into()), CodeFragment::Blank],
            close: Some("}".into()),
        }]);
        assert_eq!(code, "{\n  a;\n\n}\n");
    }

    #[test]
    fn test_single_line_jsdoc() {
        let mut builder = CodeBuilder::typescript();
        builder.push_jsdoc("A field");
        assert_eq!(builder.build(), "/** A field */\n");
    }

    #[test]
    fn test_multi_line_jsdoc() {
        let code = render(vec![CodeFragment::Block {
            header: "{".into(),
            body: vec![CodeFragment::JsDoc("First line\n\nThird line".into())],
            close: None,
        }]);
        assert_eq!(code, "{\n  /**\n   * First line\n   *\n   * Third line\n   */\n");
    }

    #[test]
    fn test_jsdoc_escapes_comment_end() {
        let mut builder = CodeBuilder::typescript();
        builder.push_jsdoc("a */ b");
        assert_eq!(builder.build(), "/** a *\\/ b */\n");
    }
}
