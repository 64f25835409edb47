//! Page document handling
//!
//! Loads the showcase page, locates container elements by id or class,
//! and swaps their inner markup for rendered fragments. Uses a small
//! character-scanning tag reader rather than a full HTML parser; the
//! pages this tool targets are hand-authored and well-formed.

use anyhow::Result;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Page-side failures during hydration
#[derive(Error, Debug)]
pub enum PageError {
    #[error("container `{0}` not found in page")]
    ContainerMissing(String),
}

/// Elements that never have a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// An HTML page held in memory while its containers are filled
#[derive(Debug, Clone)]
pub struct PageDocument {
    html: String,
}

impl PageDocument {
    /// Wrap an already-loaded HTML string
    pub fn parse<S: Into<String>>(html: S) -> Self {
        Self { html: html.into() }
    }

    /// Load a page from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            html: fs::read_to_string(path.as_ref())?,
        })
    }

    /// The full page markup
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Whether a container matching the selector exists
    pub fn has_container(&self, selector: &str) -> bool {
        self.container_span(selector).is_some()
    }

    /// Inner markup of the container, if present
    pub fn container_inner(&self, selector: &str) -> Option<&str> {
        self.container_span(selector)
            .map(|(start, end)| &self.html[start..end])
    }

    /// Replace the container's entire child content
    ///
    /// The previous content is discarded even when `inner` is empty; a
    /// caller that wants to keep existing markup simply does not call
    /// this.
    pub fn replace_container(
        &mut self,
        selector: &str,
        inner: &str,
    ) -> std::result::Result<(), PageError> {
        let (start, end) = self
            .container_span(selector)
            .ok_or_else(|| PageError::ContainerMissing(selector.to_string()))?;
        self.html.replace_range(start..end, inner);
        Ok(())
    }

    /// Write the page to disk, creating parent directories as needed
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path.as_ref(), &self.html)?;
        Ok(())
    }

    /// Byte span of the container's inner content
    fn container_span(&self, selector: &str) -> Option<(usize, usize)> {
        let sel = Selector::parse(selector);
        let html = &self.html;
        let mut pos = 0;

        while let Some(offset) = html[pos..].find('<') {
            let at = pos + offset;
            if html[at..].starts_with("<!--") {
                pos = at + html[at..].find("-->").map(|e| e + 3)?;
                continue;
            }
            let Some(tag) = Tag::read(html, at) else {
                pos = at + 1;
                continue;
            };
            if !tag.closing && !tag.self_closing && sel.matches(&tag) {
                let close = self.matching_close(&tag)?;
                return Some((tag.end, close));
            }
            pos = tag.end;
        }
        None
    }

    /// Position of the close tag matching `open`, counting nested
    /// same-name elements
    fn matching_close(&self, open: &Tag) -> Option<usize> {
        let html = &self.html;
        let mut depth = 1usize;
        let mut pos = open.end;

        while let Some(offset) = html[pos..].find('<') {
            let at = pos + offset;
            if html[at..].starts_with("<!--") {
                pos = at + html[at..].find("-->").map(|e| e + 3)?;
                continue;
            }
            let Some(tag) = Tag::read(html, at) else {
                pos = at + 1;
                continue;
            };
            if tag.name == open.name {
                if tag.closing {
                    depth -= 1;
                    if depth == 0 {
                        return Some(at);
                    }
                } else if !tag.self_closing {
                    depth += 1;
                }
            }
            pos = tag.end;
        }
        None
    }
}

/// Container selector: `#id`, `.class`, or a bare id
enum Selector<'a> {
    Id(&'a str),
    Class(&'a str),
}

impl<'a> Selector<'a> {
    fn parse(raw: &'a str) -> Self {
        if let Some(class) = raw.strip_prefix('.') {
            Selector::Class(class)
        } else {
            Selector::Id(raw.strip_prefix('#').unwrap_or(raw))
        }
    }

    fn matches(&self, tag: &Tag) -> bool {
        match self {
            Selector::Id(id) => tag.attr("id") == Some(*id),
            Selector::Class(class) => tag
                .attr("class")
                .is_some_and(|v| v.split_whitespace().any(|c| c == *class)),
        }
    }
}

/// One scanned tag: name, attributes, and its byte extent
struct Tag {
    name: String,
    attrs: Vec<(String, String)>,
    /// Index just past the closing `>`
    end: usize,
    closing: bool,
    self_closing: bool,
}

impl Tag {
    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Read the tag starting at `start` (which must point at `<`)
    ///
    /// Returns `None` for anything that is not a tag (a stray `<` in
    /// text, a doctype); the caller just moves past it.
    fn read(html: &str, start: usize) -> Option<Tag> {
        let bytes = html.as_bytes();
        let mut i = start + 1;

        let closing = bytes.get(i) == Some(&b'/');
        if closing {
            i += 1;
        }

        let name_start = i;
        while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'-') {
            i += 1;
        }
        if i == name_start {
            return None;
        }
        let name = html[name_start..i].to_ascii_lowercase();

        let mut attrs = Vec::new();
        let mut self_closing = false;
        loop {
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            match bytes.get(i) {
                None => return None,
                Some(b'>') => {
                    i += 1;
                    break;
                }
                Some(b'/') => {
                    self_closing = true;
                    i += 1;
                }
                Some(_) => {
                    let attr_start = i;
                    while i < bytes.len()
                        && !bytes[i].is_ascii_whitespace()
                        && bytes[i] != b'='
                        && bytes[i] != b'>'
                        && bytes[i] != b'/'
                    {
                        i += 1;
                    }
                    let attr_name = html[attr_start..i].to_ascii_lowercase();

                    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                        i += 1;
                    }
                    let value = if bytes.get(i) == Some(&b'=') {
                        i += 1;
                        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                            i += 1;
                        }
                        match bytes.get(i) {
                            Some(&quote) if quote == b'"' || quote == b'\'' => {
                                i += 1;
                                let value_start = i;
                                while i < bytes.len() && bytes[i] != quote {
                                    i += 1;
                                }
                                let value = html[value_start..i].to_string();
                                if i < bytes.len() {
                                    i += 1;
                                }
                                value
                            }
                            _ => {
                                let value_start = i;
                                while i < bytes.len()
                                    && !bytes[i].is_ascii_whitespace()
                                    && bytes[i] != b'>'
                                {
                                    i += 1;
                                }
                                html[value_start..i].to_string()
                            }
                        }
                    } else {
                        String::new()
                    };

                    if !attr_name.is_empty() {
                        attrs.push((attr_name, value));
                    }
                }
            }
        }

        let self_closing = self_closing || VOID_ELEMENTS.contains(&name.as_str());
        Some(Tag {
            name,
            attrs,
            end: i,
            closing,
            self_closing,
        })
    }
}
