//! Where reports are written.

/// Semantic sink for report lines; reports say what to show, the sink
/// decides how.
pub trait Output {
    fn key_value(&mut self, key: &str, value: &str);

    /// Key-value pair nested under the previous line.
    fn key_value_indented(&mut self, key: &str, value: &str);

    /// A line marking a completed step.
    fn success(&mut self, text: &str);

    /// Labelled separator around previewed content.
    fn divider(&mut self, label: &str);

    /// Text written as-is, e.g. generated declarations.
    fn preformatted(&mut self, text: &str);

    fn newline(&mut self);
}

pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Writes to stdout.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        println!("  {}: {}", key, value);
    }

    fn success(&mut self, text: &str) {
        println!("✓ {}", text);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        print!("{}", text);
        if !text.ends_with('\n') {
            println!();
        }
    }

    fn newline(&mut self) {
        println!();
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn key_value(&mut self, key: &str, value: &str) {
        self.lines.push(format!("{}: {}", key, value));
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.lines.push(format!("  {}: {}", key, value));
    }

    fn success(&mut self, text: &str) {
        self.lines.push(format!("✓ {}", text));
    }

    fn divider(&mut self, label: &str) {
        self.lines.push(format!("── {} ──", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn newline(&mut self) {
        self.lines.push(String::new());
    }
}
