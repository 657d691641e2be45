//! In-memory favorite color list shared by every transport
//!
//! All reads take the shared lock and all mutations take the exclusive lock. No lock is
//! held beyond the list inspection itself, so callers never block on I/O.

use parking_lot::RwLock;

pub const EMPTY_COLORS_TEXT: &str = "You have no favorite colors yet.";

/// Outcome of an `add` call. `added` is false when the color was already present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub message: String,
    pub added: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveOutcome {
    pub message: String,
    pub removed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearOutcome {
    pub message: String,
    pub previous_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorsSnapshot {
    pub colors: Vec<String>,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct ColorStore {
    colors: RwLock<Vec<String>>,
}

impl ColorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, color: &str) -> AddOutcome {
        let mut colors = self.colors.write();
        if colors.iter().any(|existing| existing == color) {
            return AddOutcome {
                message: format!("Color '{color}' is already in your favorites"),
                added: false,
            };
        }

        colors.push(color.to_string());
        AddOutcome {
            message: format!("Successfully added '{color}' to your favorite colors!"),
            added: true,
        }
    }

    pub fn get(&self) -> ColorsSnapshot {
        let colors = self.colors.read().clone();
        let text = render_colors(&colors);
        ColorsSnapshot { colors, text }
    }

    pub fn remove(&self, color: &str) -> RemoveOutcome {
        let mut colors = self.colors.write();
        match colors.iter().position(|existing| existing == color) {
            Some(index) => {
                colors.remove(index);
                RemoveOutcome {
                    message: format!("Successfully removed '{color}' from your favorite colors!"),
                    removed: true,
                }
            }
            None => RemoveOutcome {
                message: format!("Color '{color}' was not found in your favorites"),
                removed: false,
            },
        }
    }

    pub fn clear(&self) -> ClearOutcome {
        let previous_count = {
            let mut colors = self.colors.write();
            let count = colors.len();
            colors.clear();
            count
        };

        ClearOutcome {
            message: format!("Successfully cleared {previous_count} favorite colors!"),
            previous_count,
        }
    }

    pub fn count(&self) -> usize {
        self.colors.read().len()
    }
}

fn render_colors(colors: &[String]) -> String {
    if colors.is_empty() {
        return EMPTY_COLORS_TEXT.to_string();
    }

    let mut text = format!("Your favorite colors ({} total):\n", colors.len());
    for (index, color) in colors.iter().enumerate() {
        text.push_str(&format!("{}. {color}\n", index + 1));
    }
    text
}
