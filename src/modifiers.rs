//! View modifiers: functions from view to view applied before materialization
use crate::view::{AnyView, Styled};
use std::rc::Rc;

pub type Modifier = Rc<dyn Fn(AnyView) -> AnyView>;

pub fn modifier<F>(f: F) -> Modifier
where
    F: Fn(AnyView) -> AnyView + 'static,
{
    Rc::new(f)
}

/// Sets a cosmetic property on whatever the modified view materializes into.
pub fn property(key: impl Into<String>, value: serde_json::Value) -> Modifier {
    let key = key.into();
    modifier(move |view| Rc::new(Styled::new(view, key.clone(), value.clone())) as AnyView)
}

/// Folds `modifiers` over `view` in order; each one sees the previous one's output.
pub fn apply(view: AnyView, modifiers: &[Modifier]) -> AnyView {
    modifiers.iter().fold(view, |current, modifier| modifier(current))
}
