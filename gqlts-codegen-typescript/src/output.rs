/// Result of one generator run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginOutput {
    /// Prelude lines: imports, enum aliases and wrapper type aliases.
    pub prepend: Vec<String>,
    /// One rendered block per declaration, each ending with a newline.
    pub content: Vec<String>,
}

impl PluginOutput {
    /// Final file text: the prelude, a blank line, then the declarations
    /// separated by blank lines.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.prepend {
            out.push_str(line);
            out.push('\n');
        }
        if !self.prepend.is_empty() && !self.content.is_empty() {
            out.push('\n');
        }
        out.push_str(&self.content.join("\n"));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let output = PluginOutput {
            prepend: vec!["export type Maybe<T> = T | null;".into()],
            content: vec!["export type A = {};\n".into(), "export type B = {};\n".into()],
        };
        assert_eq!(
            output.render(),
            "export type Maybe<T> = T | null;\n\nexport type A = {};\n\nexport type B = {};\n"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(PluginOutput::default().render(), "");
    }
}
