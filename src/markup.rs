//! Escaping HTML builder.
//!
//! Tag and attribute names must be `&'static str`, and the only way to
//! write dynamic text or attribute values goes through [`escape_markup`].
//! Unescaped fragments are limited to `&'static str` glyphs compiled into
//! the crate.

use crate::format::escape_markup;

#[derive(Debug, Default)]
pub struct Markup {
    buf: String,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<tag attrs>children</tag>`
    pub fn el(
        &mut self,
        tag: &'static str,
        attrs: &[(&'static str, &str)],
        children: impl FnOnce(&mut Markup),
    ) -> &mut Self {
        self.open_tag(tag, attrs);
        children(self);
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
        self
    }

    /// `<tag attrs>text</tag>`
    pub fn text_el(&mut self, tag: &'static str, attrs: &[(&'static str, &str)], text: &str) -> &mut Self {
        self.el(tag, attrs, |m| {
            m.text(text);
        })
    }

    /// Element without content or closing tag, e.g. `<img>`
    pub fn void(&mut self, tag: &'static str, attrs: &[(&'static str, &str)]) -> &mut Self {
        self.open_tag(tag, attrs);
        self
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(&escape_markup(text));
        self
    }

    /// Static markup such as icon glyphs
    pub fn trusted(&mut self, fragment: &'static str) -> &mut Self {
        self.buf.push_str(fragment);
        self
    }

    pub fn finish(self) -> String {
        self.buf
    }

    fn open_tag(&mut self, tag: &'static str, attrs: &[(&'static str, &str)]) {
        self.buf.push('<');
        self.buf.push_str(tag);
        for (name, value) in attrs {
            self.buf.push(' ');
            self.buf.push_str(name);
            self.buf.push_str("=\"");
            self.buf.push_str(&escape_markup(value));
            self.buf.push('"');
        }
        self.buf.push('>');
    }
}
