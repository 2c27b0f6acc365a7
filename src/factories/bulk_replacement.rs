//! Bulk replacement: a factory that can swap everything it has created.
//!
//! Callers never hold a theme directly. `create_theme` stores the theme in
//! the factory's registry and returns a [`ThemeHandle`]; reads go through
//! [`ReplaceableThemeFactory::theme`]. Replacing every theme is then a single
//! pass over the registry and every handle observes the new value.
//!
//! The registry grows with each `create_theme`. Entries leave only through
//! [`ReplaceableThemeFactory::release`].

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::RunContext;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn text_color(&self) -> &'static str {
        match self {
            Theme::Light => "Black",
            Theme::Dark => "White",
        }
    }

    pub fn background_color(&self) -> &'static str {
        match self {
            Theme::Light => "White",
            Theme::Dark => "Black",
        }
    }
}

/// Stable identifier for a theme created by a [`ReplaceableThemeFactory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThemeHandle(Uuid);

impl fmt::Display for ThemeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Default)]
pub struct ReplaceableThemeFactory {
    themes: HashMap<ThemeHandle, Theme>,
}

impl ReplaceableThemeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_theme(&mut self, is_dark: bool) -> ThemeHandle {
        let handle = ThemeHandle(Uuid::new_v4());
        self.themes.insert(handle, Theme::from_dark(is_dark));
        debug!(%handle, is_dark, "theme created");
        handle
    }

    /// Current theme behind `handle`, or `None` once it has been released.
    pub fn theme(&self, handle: ThemeHandle) -> Option<Theme> {
        self.themes.get(&handle).copied()
    }

    /// Points every live handle at a fresh theme.
    pub fn replace_theme(&mut self, is_dark: bool) {
        let theme = Theme::from_dark(is_dark);
        for slot in self.themes.values_mut() {
            *slot = theme;
        }
        info!(count = self.themes.len(), ?theme, "themes replaced");
    }

    /// Forgets a handle. Returns whether it was still registered.
    pub fn release(&mut self, handle: ThemeHandle) -> bool {
        self.themes.remove(&handle).is_some()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

pub fn run(ctx: &mut RunContext<'_>) -> Result<()> {
    let mut factory = ReplaceableThemeFactory::new();

    let theme1 = factory.create_theme(true);
    let theme2 = factory.create_theme(false);

    let background = |factory: &ReplaceableThemeFactory, handle| {
        factory
            .theme(handle)
            .map_or("<released>", |theme| theme.background_color())
    };

    writeln!(ctx.out, "Theme1 background: {}", background(&factory, theme1))?;
    writeln!(ctx.out, "Theme2 background: {}", background(&factory, theme2))?;

    factory.replace_theme(false);

    writeln!(ctx.out, "Replaced theme1 background: {}", background(&factory, theme1))?;
    writeln!(ctx.out, "Replaced theme2 background: {}", background(&factory, theme2))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_colors() {
        assert_eq!(Theme::Dark.text_color(), "White");
        assert_eq!(Theme::Dark.background_color(), "Black");
        assert_eq!(Theme::Light.text_color(), "Black");
        assert_eq!(Theme::Light.background_color(), "White");
    }

    #[test]
    fn test_replace_reaches_every_handle() {
        let mut factory = ReplaceableThemeFactory::new();
        let dark = factory.create_theme(true);
        let light = factory.create_theme(false);

        assert_eq!(factory.theme(dark), Some(Theme::Dark));
        assert_eq!(factory.theme(light), Some(Theme::Light));

        factory.replace_theme(false);
        assert_eq!(factory.theme(dark), Some(Theme::Light));
        assert_eq!(factory.theme(light), Some(Theme::Light));

        factory.replace_theme(true);
        assert_eq!(factory.theme(dark), Some(Theme::Dark));
        assert_eq!(factory.theme(light), Some(Theme::Dark));
    }

    #[test]
    fn test_handles_are_distinct() {
        let mut factory = ReplaceableThemeFactory::new();
        let a = factory.create_theme(true);
        let b = factory.create_theme(true);

        assert_ne!(a, b);
        assert_eq!(factory.len(), 2);
    }

    #[test]
    fn test_release_evicts_only_that_handle() {
        let mut factory = ReplaceableThemeFactory::new();
        let a = factory.create_theme(true);
        let b = factory.create_theme(true);

        assert!(factory.release(a));
        assert!(!factory.release(a));
        factory.replace_theme(false);

        assert_eq!(factory.theme(a), None);
        assert_eq!(factory.theme(b), Some(Theme::Light));
        assert_eq!(factory.len(), 1);
    }

    #[test]
    fn test_handle_from_another_factory_is_unknown() {
        let mut first = ReplaceableThemeFactory::new();
        let second = ReplaceableThemeFactory::new();
        let handle = first.create_theme(false);

        assert!(second.is_empty());
        assert_eq!(second.theme(handle), None);
    }
}
