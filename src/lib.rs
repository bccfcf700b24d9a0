//! Declarative views reconciled onto retained widgets.
//!
//! A collection of views materializes into one widget: a single view stands on
//! its own, anything else is wrapped in a vertical stack. Widgets built this way
//! are later updated in place, position by position, from fresh views.
//!
//! ```
//! use view_reconciler::{materialize, text, update, WidgetKind};
//!
//! let handles = vec![materialize(&[text("a"), text("b")], &[])];
//! assert_eq!(handles[0].kind(), WidgetKind::VStack);
//!
//! update(&handles, &[view_reconciler::vstack(vec![text("c"), text("d")])], &[], true);
//! assert_eq!(handles[0].children()[0].content().as_deref(), Some("c"));
//! ```
pub mod converters;
pub mod errors;
pub mod modifiers;
pub mod reconciler;
pub mod safe_index;
pub mod types;
pub mod view;
pub mod windows;

pub use converters::{widget_to_json, CStringArray};
pub use errors::ReconcilerError;
pub use modifiers::{apply, modifier, property, Modifier};
pub use reconciler::{materialize, update};
pub use safe_index::SafeIndex;
pub use types::{Widget, WidgetHandle, WidgetKind, WidgetSnapshot};
pub use view::{button, group, text, vstack, AnyView, Button, Styled, Text, VStack, View};
pub use windows::{flatten_windows, WindowScene, WindowSceneGroup};
