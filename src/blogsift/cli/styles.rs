use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Prefix shown when a template asks for a style that is not registered.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Named styles applied through the `style` template filter.
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    /// Style `text`. Unknown names are flagged even without color so typos in
    /// templates show up.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

pub static SIFT_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add("plain", Style::new())
        .add("index", Style::new().dim())
        .add("title", Style::new().bold())
        .add("featured", Style::new().yellow().bold())
        .add("category", Style::new().cyan())
        .add("tag", Style::new().magenta())
        .add("meta", Style::new().color256(246).italic())
        .add("url", Style::new().blue().underlined())
        .add("highlight", Style::new().black().on_yellow())
        .add("stats", Style::new().bold())
        .add("notice", Style::new().green())
        .add("empty", Style::new().dim())
        .add("label", Style::new().dim())
        .add("count", Style::new().color256(246))
        .add("active", Style::new().bold().reverse())
        .add("disabled", Style::new().dim())
        .add("info", Style::new())
        .add("success", Style::new().green())
        .add("warning", Style::new().yellow())
        .add("error", Style::new().red().bold())
});
