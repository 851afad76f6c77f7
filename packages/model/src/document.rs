//! # Blip Document Content
//!
//! Text, inline elements and annotations of one blip.
//!
//! Positions are character offsets into `content`. An element occupies one
//! position: the character at that offset is a placeholder and the element
//! itself lives in `elements` keyed by the offset. Edits here are purely
//! local; recording them for the remote side happens in the editor.

use crate::element::ContentElement;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Character written into `content` where an element is inserted locally
pub const ELEMENT_PLACEHOLDER: char = ' ';

/// Half-open span `[start, end)` of document positions.
///
/// Zero-length ranges are valid and denote a cursor position. Inverted
/// ranges are kept as given and behave as empty when applied locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn cursor(at: usize) -> Self {
        Self { start: at, end: at }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn intersects(&self, other: &Range) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl Default for Range {
    fn default() -> Self {
        Self { start: 0, end: 1 }
    }
}

/// Named value attached to a range of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub name: String,
    pub value: String,
    pub range: Range,
}

impl Annotation {
    pub fn new(name: impl Into<String>, value: impl Into<String>, range: Range) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            range,
        }
    }
}

/// Text style whose ordinal travels in the `index` slot of a styled title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleType {
    Bold,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Italic,
    Plain,
    Strike,
    Underline,
}

impl StyleType {
    pub fn ordinal(self) -> i32 {
        match self {
            StyleType::Bold => 0,
            StyleType::Heading1 => 1,
            StyleType::Heading2 => 2,
            StyleType::Heading3 => 3,
            StyleType::Heading4 => 4,
            StyleType::Italic => 5,
            StyleType::Plain => 6,
            StyleType::Strike => 7,
            StyleType::Underline => 8,
        }
    }
}

/// Text plus the styles applied to all of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText {
    pub text: String,
    pub styles: Vec<StyleType>,
}

impl StyledText {
    pub fn new(text: impl Into<String>, style: StyleType) -> Self {
        Self {
            text: text.into(),
            styles: vec![style],
        }
    }
}

/// One item of the ordered document body
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentItem<'a> {
    Text(String),
    Element { position: usize, element: &'a ContentElement },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub content: String,
    pub elements: BTreeMap<usize, ContentElement>,
    pub annotations: Vec<Annotation>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Length in positions
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Text runs and elements in document order
    pub fn items(&self) -> Vec<DocumentItem<'_>> {
        let mut items = Vec::new();
        let mut run = String::new();

        for (position, ch) in self.content.chars().enumerate() {
            match self.elements.get(&position) {
                Some(element) => {
                    if !run.is_empty() {
                        items.push(DocumentItem::Text(std::mem::take(&mut run)));
                    }
                    items.push(DocumentItem::Element { position, element });
                }
                None => run.push(ch),
            }
        }
        if !run.is_empty() {
            items.push(DocumentItem::Text(run));
        }

        // Elements past the end of the text still belong to the body
        let len = self.len();
        for (&position, element) in self.elements.range(len..) {
            items.push(DocumentItem::Element { position, element });
        }

        items
    }

    pub fn element_at(&self, position: usize) -> Option<&ContentElement> {
        self.elements.get(&position)
    }

    /// Position of the first element equal to `element`
    pub fn position_of(&self, element: &ContentElement) -> Option<usize> {
        self.elements
            .iter()
            .find(|(_, candidate)| *candidate == element)
            .map(|(&position, _)| position)
    }

    pub fn append_text(&mut self, text: &str) {
        self.pad_trailing_elements();
        self.content.push_str(text);
    }

    pub fn insert_text(&mut self, position: usize, text: &str) {
        self.pad_trailing_elements();
        let position = position.min(self.len());
        let byte = self.byte_offset(position);
        self.content.insert_str(byte, text);
        self.shift_from(position, text.chars().count());
    }

    pub fn delete_range(&mut self, range: Range) {
        self.pad_trailing_elements();
        let len = self.len();
        let start = range.start.min(len);
        let end = range.end.min(len);
        if end <= start {
            return;
        }
        let count = end - start;

        let (from, to) = (self.byte_offset(start), self.byte_offset(end));
        self.content.replace_range(from..to, "");

        let shifted: BTreeMap<usize, ContentElement> = std::mem::take(&mut self.elements)
            .into_iter()
            .filter(|(position, _)| *position < start || *position >= end)
            .map(|(position, element)| {
                if position >= end {
                    (position - count, element)
                } else {
                    (position, element)
                }
            })
            .collect();
        self.elements = shifted;

        for annotation in &mut self.annotations {
            annotation.range.start = collapse(annotation.range.start, start, end);
            annotation.range.end = collapse(annotation.range.end, start, end);
        }
    }

    /// Replace the whole body with plain text
    pub fn replace_all(&mut self, text: &str) {
        self.content = text.to_string();
        self.elements.clear();
        self.annotations.clear();
    }

    /// Append an element; returns its position
    pub fn append_element(&mut self, element: ContentElement) -> usize {
        self.pad_trailing_elements();
        let position = self.len();
        self.content.push(ELEMENT_PLACEHOLDER);
        self.elements.insert(position, element);
        position
    }

    pub fn insert_element(&mut self, position: usize, element: ContentElement) -> usize {
        self.pad_trailing_elements();
        let position = position.min(self.len());
        let byte = self.byte_offset(position);
        self.content.insert(byte, ELEMENT_PLACEHOLDER);
        self.shift_from(position, 1);
        self.elements.insert(position, element);
        position
    }

    pub fn remove_element(&mut self, position: usize) -> Option<ContentElement> {
        let removed = self.elements.remove(&position)?;
        self.delete_range(Range::new(position, position + 1));
        Some(removed)
    }

    pub fn replace_element(&mut self, position: usize, element: ContentElement) -> Option<ContentElement> {
        let slot = self.elements.get_mut(&position)?;
        Some(std::mem::replace(slot, element))
    }

    /// Set `name` over `range`, replacing an annotation with the same name and range
    pub fn set_annotation(&mut self, annotation: Annotation) {
        self.annotations
            .retain(|a| !(a.name == annotation.name && a.range == annotation.range));
        self.annotations.push(annotation);
    }

    /// Drop every annotation called `name` that overlaps `range`
    pub fn delete_annotation(&mut self, name: &str, range: Range) {
        self.annotations.retain(|a| {
            let overlaps = a.range.intersects(&range) || (range.is_empty() && a.range == range);
            !(a.name == name && overlaps)
        });
    }

    pub fn annotations_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Annotation> {
        self.annotations.iter().filter(move |a| a.name == name)
    }

    /// Elements decoded past the end of the text get their placeholder
    /// characters, so every element position is backed by `content`
    fn pad_trailing_elements(&mut self) {
        let extent = match self.elements.keys().next_back() {
            Some(&last) => last + 1,
            None => return,
        };
        let len = self.len();
        if extent > len {
            self.content.extend(std::iter::repeat(ELEMENT_PLACEHOLDER).take(extent - len));
        }
    }

    fn byte_offset(&self, position: usize) -> usize {
        self.content
            .char_indices()
            .nth(position)
            .map(|(byte, _)| byte)
            .unwrap_or(self.content.len())
    }

    fn shift_from(&mut self, position: usize, count: usize) {
        let shifted: BTreeMap<usize, ContentElement> = std::mem::take(&mut self.elements)
            .into_iter()
            .map(|(p, element)| if p >= position { (p + count, element) } else { (p, element) })
            .collect();
        self.elements = shifted;

        for annotation in &mut self.annotations {
            if annotation.range.start >= position {
                annotation.range.start += count;
            }
            if annotation.range.end > position {
                annotation.range.end += count;
            }
        }
    }
}

fn collapse(offset: usize, start: usize, end: usize) -> usize {
    if offset >= end {
        offset - (end - start)
    } else if offset > start {
        start
    } else {
        offset
    }
}
