//! Retained widget storage and the widget self-update protocol
use crate::modifiers::Modifier;
use crate::safe_index::SafeIndex;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// The closed set of widget kinds a view can materialize into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    Text,
    Button,
    VStack,
}

impl WidgetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetKind::Text => "text",
            WidgetKind::Button => "button",
            WidgetKind::VStack => "v_stack",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A materialized widget.
///
/// `content` is structural and always refreshed on update; `properties` are
/// cosmetic and only refreshed when the caller asks for it.
#[derive(Debug)]
pub struct Widget {
    pub id: String,
    pub kind: WidgetKind,
    pub content: Option<String>,
    pub properties: IndexMap<String, serde_json::Value>,
    pub children: Vec<WidgetHandle>,
}

/// Shared, caller-owned reference to a [`Widget`].
///
/// Cloning shares the widget. Handles are `!Send`, so mutation stays on the
/// thread that created them.
#[derive(Clone)]
pub struct WidgetHandle(Rc<RefCell<Widget>>);

impl fmt::Debug for WidgetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(widget) => write!(f, "WidgetHandle({} {})", widget.kind, widget.id),
            Err(_) => write!(f, "WidgetHandle(<borrowed>)"),
        }
    }
}

impl WidgetHandle {
    pub fn new(kind: WidgetKind, content: Option<String>) -> Self {
        Self::from_widget(Widget {
            id: next_id(),
            kind,
            content,
            properties: IndexMap::new(),
            children: Vec::new(),
        })
    }

    pub fn container(kind: WidgetKind, children: Vec<WidgetHandle>) -> Self {
        Self::from_widget(Widget {
            id: next_id(),
            kind,
            content: None,
            properties: IndexMap::new(),
            children,
        })
    }

    pub fn from_widget(widget: Widget) -> Self {
        WidgetHandle(Rc::new(RefCell::new(widget)))
    }

    pub fn borrow(&self) -> Ref<'_, Widget> {
        self.0.borrow()
    }

    pub fn ptr_eq(&self, other: &WidgetHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn id(&self) -> String {
        self.0.borrow().id.clone()
    }

    pub fn kind(&self) -> WidgetKind {
        self.0.borrow().kind
    }

    pub fn content(&self) -> Option<String> {
        self.0.borrow().content.clone()
    }

    pub fn property(&self, key: &str) -> Option<serde_json::Value> {
        self.0.borrow().properties.get(key).cloned()
    }

    pub fn set_property(&self, key: impl Into<String>, value: serde_json::Value) {
        self.0.borrow_mut().properties.insert(key.into(), value);
    }

    pub fn children(&self) -> Vec<WidgetHandle> {
        self.0.borrow().children.clone()
    }

    pub fn child(&self, index: usize) -> Option<WidgetHandle> {
        let position = isize::try_from(index).ok();
        self.0.borrow().children.get_safe(position).cloned()
    }

    /// Reconciles `storage` in place against this freshly materialized widget.
    ///
    /// Children are paired by position; children present on only one side are
    /// neither created nor removed.
    pub fn update_storage(
        &self,
        storage: &WidgetHandle,
        modifiers: &[Modifier],
        update_properties: bool,
    ) {
        if self.ptr_eq(storage) {
            return;
        }

        let pairs: Vec<(WidgetHandle, WidgetHandle)> = {
            let fresh = self.0.borrow();
            let mut stored = storage.0.borrow_mut();
            if fresh.kind != stored.kind {
                log::warn!(
                    "update_storage: kind mismatch, keeping '{}' ({}) instead of {}",
                    stored.id,
                    stored.kind,
                    fresh.kind
                );
                return;
            }

            stored.content = fresh.content.clone();
            if update_properties {
                stored.properties = fresh.properties.clone();
            }

            fresh
                .children
                .iter()
                .zip(stored.children.iter())
                .map(|(new_child, old_child)| (new_child.clone(), old_child.clone()))
                .collect()
        };

        for (new_child, old_child) in pairs {
            new_child.update_storage(&old_child, modifiers, update_properties);
        }
    }

    /// An id-free structural copy of the widget tree.
    pub fn snapshot(&self) -> WidgetSnapshot {
        let widget = self.0.borrow();
        WidgetSnapshot {
            kind: widget.kind,
            content: widget.content.clone(),
            properties: widget.properties.clone(),
            children: widget.children.iter().map(WidgetHandle::snapshot).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetSnapshot {
    pub kind: WidgetKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<WidgetSnapshot>,
}

/// Global widget id generator (lock-free, atomic)
static ID_COUNTER: Lazy<AtomicUsize> = Lazy::new(|| AtomicUsize::new(0));

pub fn next_id() -> String {
    let id = ID_COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("widget_{}", id)
}
