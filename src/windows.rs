//! Window scenes and flattening of nested window groups
use serde::{Deserialize, Serialize};

/// Description of one top-level window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowScene {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    /// How many instances open at startup.
    #[serde(default = "default_open")]
    pub open: usize,
    #[serde(default)]
    pub default_size: Option<(u32, u32)>,
}

fn default_open() -> usize {
    1
}

impl WindowScene {
    pub fn new(id: impl Into<String>) -> Self {
        WindowScene {
            id: id.into(),
            title: None,
            open: default_open(),
            default_size: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn open(mut self, count: usize) -> Self {
        self.open = count;
        self
    }

    pub fn default_size(mut self, width: u32, height: u32) -> Self {
        self.default_size = Some((width, height));
        self
    }
}

/// Anything that yields an ordered list of windows.
pub trait WindowSceneGroup {
    fn windows(&self) -> Vec<WindowScene>;
}

impl WindowSceneGroup for WindowScene {
    fn windows(&self) -> Vec<WindowScene> {
        vec![self.clone()]
    }
}

impl<G: WindowSceneGroup> WindowSceneGroup for Vec<G> {
    fn windows(&self) -> Vec<WindowScene> {
        flatten_windows(self)
    }
}

impl<G: WindowSceneGroup + ?Sized> WindowSceneGroup for Box<G> {
    fn windows(&self) -> Vec<WindowScene> {
        (**self).windows()
    }
}

/// Concatenates each group's windows, keeping group order.
pub fn flatten_windows<G: WindowSceneGroup>(groups: &[G]) -> Vec<WindowScene> {
    groups.iter().flat_map(|group| group.windows()).collect()
}
