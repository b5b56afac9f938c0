//! Mock DOM for the calculator overlay
//!
//! An in-memory stand-in for the browser document, so the presentation
//! layer can be driven and inspected without a browser. Elements live in
//! one table keyed by ID and refer to their children by ID, so every lookup
//! sees the latest render.

use crate::keypad::Keypad;
use crate::render::{Frame, RenderSink};
use std::collections::HashMap;

/// Element ID of the calculator window
pub const WINDOW_ID: &str = "calculator";
/// Element ID of the primary readout
pub const DISPLAY_ID: &str = "calc-display";
/// Element ID of the trace line
pub const TRACE_ID: &str = "calc-trace";
/// Element ID of the keypad container
pub const KEYPAD_ID: &str = "calc-keypad";

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Whether element is visible
    pub visible: bool,
    /// IDs of child elements, in document order
    pub children: Vec<String>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            visible: true,
            children: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Appends a child by its ID
    #[must_use]
    pub fn with_child(mut self, child: &DomElement) -> Self {
        self.children.push(child.id.clone());
        self
    }

    /// Sets visibility
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text_content);
    }

    /// Adds a class if not already present
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// DOM events the overlay listens for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Key pressed while the overlay has focus
    KeyDown {
        /// Key name as reported by the browser (`"7"`, `"Enter"`, `"Escape"`)
        key: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a key-down event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }
}

/// Mock DOM for the calculator overlay
#[derive(Debug)]
pub struct MockDom {
    root_id: String,
    elements: HashMap<String, DomElement>,
    event_history: Vec<DomEvent>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::with_root(DomElement::new("div").with_id("root"))
    }

    fn with_root(root: DomElement) -> Self {
        let mut dom = Self {
            root_id: root.id.clone(),
            elements: HashMap::new(),
            event_history: Vec::new(),
        };
        dom.register_element(root);
        dom
    }

    /// Creates the calculator overlay DOM: trace line, readout and keypad
    #[must_use]
    pub fn calculator(keypad: &Keypad) -> Self {
        let mut trace = DomElement::new("div")
            .with_id(TRACE_ID)
            .with_class("calc-trace");
        trace.set_visible(false);

        let display = DomElement::new("div")
            .with_id(DISPLAY_ID)
            .with_class("calc-display")
            .with_text("0");

        let buttons: Vec<DomElement> = keypad
            .buttons()
            .iter()
            .map(|btn| {
                let elem = DomElement::new("button")
                    .with_id(&btn.id)
                    .with_text(&btn.label())
                    .with_class("calc-btn")
                    .with_class(btn.kind.css_class())
                    .with_attr("data-row", &btn.row.to_string())
                    .with_attr("data-col", &btn.col.to_string());
                if btn.span > 1 {
                    elem.with_class(&format!("col-span-{}", btn.span))
                } else {
                    elem
                }
            })
            .collect();

        let keypad_elem = buttons.iter().fold(
            DomElement::new("div")
                .with_id(KEYPAD_ID)
                .with_class("calc-keypad"),
            DomElement::with_child,
        );

        let window = DomElement::new("div")
            .with_id(WINDOW_ID)
            .with_class("calculator-window")
            .with_child(&trace)
            .with_child(&display)
            .with_child(&keypad_elem);

        let mut dom = Self::with_root(window);
        dom.register_element(trace);
        dom.register_element(display);
        dom.register_element(keypad_elem);
        for btn in buttons {
            dom.register_element(btn);
        }

        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// The root element
    #[must_use]
    pub fn root(&self) -> Option<&DomElement> {
        self.elements.get(&self.root_id)
    }

    /// Children of an element, resolved to their current state
    pub fn children(&self, id: &str) -> impl Iterator<Item = &DomElement> + '_ {
        self.elements
            .get(id)
            .into_iter()
            .flat_map(|e| e.children.iter())
            .filter_map(|child| self.elements.get(child))
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Records an event
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Whether an element exists and is visible
    #[must_use]
    pub fn is_visible(&self, id: &str) -> bool {
        self.elements.get(id).is_some_and(|e| e.visible)
    }
}

impl RenderSink for MockDom {
    fn render(&mut self, frame: Frame<'_>) {
        self.set_element_text(DISPLAY_ID, frame.display);
        if let Some(trace) = self.elements.get_mut(TRACE_ID) {
            trace.set_text(frame.trace);
            trace.set_visible(!frame.trace.is_empty());
        }
    }
}
