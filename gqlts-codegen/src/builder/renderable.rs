use super::CodeBuilder;

/// One piece of a rendered declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A line at the current depth.
    Line(String),
    /// An empty line, never indented.
    Blank,
    /// `header`, then `body` one level deeper, then `close` back at the
    /// header's depth when present.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Documentation comment text; see [`CodeBuilder::push_jsdoc`].
    JsDoc(String),
}

impl CodeFragment {
    /// Doc comment for `doc`, or nothing when it is absent or blank.
    pub fn maybe_jsdoc(doc: Option<&str>) -> Option<Self> {
        doc.filter(|d| !d.trim().is_empty())
            .map(|d| Self::JsDoc(d.to_string()))
    }
}

pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;

    /// Render with the default two-space indentation.
    fn to_code(&self) -> String
    where
        Self: Sized,
    {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (**self).to_fragments()
    }
}
