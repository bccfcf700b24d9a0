//! Conversions at the crate's outer edges: native string arrays for foreign
//! calls and JSON for widget snapshots
use crate::errors::ReconcilerError;
use crate::types::WidgetHandle;
use std::ffi::{CStr, CString, c_char};
use std::ptr;

/// An owned, null-terminated array of C string pointers.
///
/// The array owns both the encoded strings and the pointer table, and frees
/// them on drop. The pointer returned by [`CStringArray::as_ptr`] may be handed
/// to a foreign function that reads a `const char *const *`; it stays valid
/// until the array is dropped (moving the array does not invalidate it), and
/// the callee must not free or write through it.
#[derive(Debug)]
pub struct CStringArray {
    strings: Vec<CString>,
    pointers: Vec<*const c_char>,
}

impl CStringArray {
    pub fn new<I, S>(items: I) -> Result<Self, ReconcilerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let strings = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                CString::new(item.as_ref()).map_err(|e| ReconcilerError::InteriorNul {
                    index,
                    position: e.nul_position(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // CString data lives on the heap, so these stay valid as `strings` moves.
        let pointers = strings
            .iter()
            .map(|s| s.as_ptr())
            .chain(std::iter::once(ptr::null()))
            .collect();

        Ok(CStringArray { strings, pointers })
    }

    pub fn as_ptr(&self) -> *const *const c_char {
        self.pointers.as_ptr()
    }

    /// Number of strings, not counting the terminator.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CStr> {
        self.strings.iter().map(CString::as_c_str)
    }
}

/// JSON form of a widget tree, without ids.
pub fn widget_to_json(widget: &WidgetHandle) -> Result<serde_json::Value, ReconcilerError> {
    Ok(serde_json::to_value(widget.snapshot())?)
}
