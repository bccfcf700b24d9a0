//! Collection reconciler: turns a view sequence into one widget and updates
//! previously materialized widgets in place, pairing by position.
use crate::modifiers::{apply, Modifier};
use crate::safe_index::SafeIndex;
use crate::types::WidgetHandle;
use crate::view::{AnyView, VStack, View};

/// Materializes `views` into a single widget.
///
/// A single view is materialized on its own. Any other count is wrapped in a
/// [`VStack`] after every modifier has been folded, in order, over each element.
pub fn materialize(views: &[AnyView], modifiers: &[Modifier]) -> WidgetHandle {
    if views.len() == 1 {
        if let Some(view) = views.get_safe(Some(0)) {
            log::trace!("materialize: collapsing singleton collection");
            return view.widget(modifiers);
        }
    }

    // Invalid positions keep their value.
    let mut modified = views.to_vec();
    for index in 0..modified.len() {
        let position = isize::try_from(index).ok();
        for modifier in modifiers {
            if let Some(current) = modified.get_safe(position).cloned() {
                modified.set_safe(position, Some(modifier(current)));
            }
        }
    }

    log::debug!(
        "materialize: wrapping {} views in a v_stack ({} modifiers)",
        modified.len(),
        modifiers.len()
    );
    VStack::new(modified).widget(modifiers)
}

/// Updates `handles` in place from `views`.
///
/// Each view goes through the same per-element modifier fold as
/// [`materialize`] before its widget is applied onto the paired handle. Only
/// indices present in both sequences are touched. Extra views are not
/// materialized into new handles and extra handles are left as they are.
pub fn update(
    handles: &[WidgetHandle],
    views: &[AnyView],
    modifiers: &[Modifier],
    update_properties: bool,
) {
    let mut updated = 0;
    for (index, view) in views.iter().enumerate() {
        if let Some(storage) = handles.get_safe(isize::try_from(index).ok()) {
            apply(view.clone(), modifiers)
                .widget(modifiers)
                .update_storage(storage, modifiers, update_properties);
            updated += 1;
        }
    }

    log::debug!(
        "update: {} of {} handles updated from {} views (update_properties={})",
        updated,
        handles.len(),
        views.len(),
        update_properties
    );
}
