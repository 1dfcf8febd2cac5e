//! RTF stylesheet support.
//!
//! Styles keep only what the tokenizer needs to identify them (number, kind,
//! links to other styles, name). All other control words found in a style
//! definition are recorded verbatim as [`StyleElement`]s for the consumer to
//! interpret.

use super::symbols::{Major, Minor};
use super::token::TokenClass;
use parking_lot::Mutex;
use std::sync::Arc;

/// Number given to a "Normal"/"Standard" style declared without `\sN`.
pub const NORMAL_STYLE_NUM: i32 = 222;

/// Style type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleType {
    /// Paragraph style (`\sN`)
    #[default]
    Paragraph,
    /// Character style (`\csN`)
    Character,
    /// Section style (`\dsN`)
    Section,
}

/// A control word of a style definition, kept as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleElement {
    pub class: TokenClass,
    pub major: Major,
    pub minor: Minor,
    pub param: Option<i32>,
    pub text: String,
}

/// RTF style definition
#[derive(Debug, Default)]
pub struct Style {
    /// Style number
    pub num: i32,
    /// Style name
    pub name: String,
    /// Style type
    pub style_type: StyleType,
    /// Based-on style number (`\sbasedonN`)
    pub based_on: Option<i32>,
    /// Style for the following paragraph (`\snextN`); defaults to the style itself
    pub next_par: i32,
    /// `\additive`
    pub additive: bool,
    elements: Mutex<Vec<StyleElement>>,
}

impl Style {
    /// Append an element; appends to one style are serialized.
    pub fn add_element(&self, element: StyleElement) {
        self.elements.lock().push(element);
    }

    /// Copy of the elements recorded so far.
    pub fn elements(&self) -> Vec<StyleElement> {
        self.elements.lock().clone()
    }

    /// Number of recorded elements.
    pub fn element_count(&self) -> usize {
        self.elements.lock().len()
    }

    /// Check if this is a paragraph style
    #[inline]
    pub fn is_paragraph_style(&self) -> bool {
        self.style_type == StyleType::Paragraph
    }

    /// Check if this is a character style
    #[inline]
    pub fn is_character_style(&self) -> bool {
        self.style_type == StyleType::Character
    }
}

impl Clone for Style {
    fn clone(&self) -> Self {
        Self {
            num: self.num,
            name: self.name.clone(),
            style_type: self.style_type,
            based_on: self.based_on,
            next_par: self.next_par,
            additive: self.additive,
            elements: Mutex::new(self.elements()),
        }
    }
}

/// Stylesheet containing all style definitions
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    styles: Vec<Arc<Style>>,
}

impl StyleSheet {
    /// Create a new stylesheet
    #[inline]
    pub fn new() -> Self {
        Self { styles: Vec::new() }
    }

    /// Add a style to the stylesheet
    #[inline]
    pub fn add(&mut self, style: Arc<Style>) {
        self.styles.push(style);
    }

    /// Get a style by number
    pub fn get(&self, num: i32) -> Option<&Arc<Style>> {
        self.styles.iter().find(|s| s.num == num)
    }

    /// Get a style by name
    pub fn get_by_name(&self, name: &str) -> Option<&Arc<Style>> {
        self.styles.iter().find(|s| s.name == name)
    }

    /// Get all styles
    #[inline]
    pub fn styles(&self) -> &[Arc<Style>] {
        &self.styles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
