//! Declarative views and how each one materializes into a widget
use crate::modifiers::Modifier;
use crate::reconciler;
use crate::types::{WidgetHandle, WidgetKind};
use std::rc::Rc;

pub type AnyView = Rc<dyn View>;

/// An immutable description of UI content.
///
/// Implementations build fresh widgets; `modifiers` is the context handed down
/// to nested view collections. A view may return a handle it already holds,
/// but then modifiers such as [`Styled`] write through to that shared widget.
pub trait View {
    fn widget(&self, modifiers: &[Modifier]) -> WidgetHandle;
}

/// A sequence of views is a view: see [`reconciler::materialize`].
impl View for Vec<AnyView> {
    fn widget(&self, modifiers: &[Modifier]) -> WidgetHandle {
        reconciler::materialize(self, modifiers)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub label: String,
}

impl Text {
    pub fn new(label: impl Into<String>) -> Self {
        Text { label: label.into() }
    }
}

impl View for Text {
    fn widget(&self, _modifiers: &[Modifier]) -> WidgetHandle {
        WidgetHandle::new(WidgetKind::Text, Some(self.label.clone()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: String,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Button { label: label.into() }
    }
}

impl View for Button {
    fn widget(&self, _modifiers: &[Modifier]) -> WidgetHandle {
        WidgetHandle::new(WidgetKind::Button, Some(self.label.clone()))
    }
}

/// Lays its children out in a single column.
pub struct VStack {
    pub children: Vec<AnyView>,
}

impl VStack {
    pub fn new(children: Vec<AnyView>) -> Self {
        VStack { children }
    }
}

impl View for VStack {
    fn widget(&self, modifiers: &[Modifier]) -> WidgetHandle {
        let children = self
            .children
            .iter()
            .map(|child| child.widget(modifiers))
            .collect();
        WidgetHandle::container(WidgetKind::VStack, children)
    }
}

/// Wraps a view and sets one property on the widget it produces.
///
/// The property is written onto whatever handle the wrapped view returns. A
/// view that hands out an existing handle instead of building a new widget
/// sees that handle changed.
pub struct Styled {
    content: AnyView,
    key: String,
    value: serde_json::Value,
}

impl Styled {
    pub fn new(content: AnyView, key: impl Into<String>, value: serde_json::Value) -> Self {
        Styled {
            content,
            key: key.into(),
            value,
        }
    }
}

impl View for Styled {
    fn widget(&self, modifiers: &[Modifier]) -> WidgetHandle {
        let widget = self.content.widget(modifiers);
        widget.set_property(self.key.clone(), self.value.clone());
        widget
    }
}

pub fn text(label: impl Into<String>) -> AnyView {
    Rc::new(Text::new(label))
}

pub fn button(label: impl Into<String>) -> AnyView {
    Rc::new(Button::new(label))
}

pub fn vstack(children: Vec<AnyView>) -> AnyView {
    Rc::new(VStack::new(children))
}

/// A view collection, materialized through the collection reconciler.
pub fn group(views: Vec<AnyView>) -> AnyView {
    Rc::new(views)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifiers::property;
    use serde_json::json;

    #[test]
    fn leaf_views_carry_their_label() {
        let widget = text("hello").widget(&[]);
        assert_eq!(widget.kind(), WidgetKind::Text);
        assert_eq!(widget.content().as_deref(), Some("hello"));

        let widget = button("ok").widget(&[]);
        assert_eq!(widget.kind(), WidgetKind::Button);
        assert_eq!(widget.content().as_deref(), Some("ok"));
    }

    #[test]
    fn each_materialization_is_a_new_widget() {
        let view = text("a");
        assert!(!view.widget(&[]).ptr_eq(&view.widget(&[])));
    }

    #[test]
    fn vstack_keeps_child_order() {
        let widget = vstack(vec![text("a"), button("b")]).widget(&[]);
        let children = widget.children();
        assert_eq!(widget.kind(), WidgetKind::VStack);
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].content().as_deref(), Some("a"));
        assert_eq!(children[1].kind(), WidgetKind::Button);
    }

    #[test]
    fn nested_groups_receive_the_modifiers() {
        let inner = group(vec![text("a"), text("b")]);
        let outer = vstack(vec![inner]);
        let widget = outer.widget(&[property("font", json!("mono"))]);

        let stack = widget.child(0).unwrap();
        for child in stack.children() {
            assert_eq!(child.property("font"), Some(json!("mono")));
        }
        assert_eq!(widget.property("font"), None);
    }
}
