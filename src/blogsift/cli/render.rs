//! # Rendering Module
//!
//! Terminal output goes through minijinja templates (see `templates.rs`) with
//! a `style` filter backed by [`SIFT_THEME`]. Styles are skipped when color is
//! off, so piped output stays plain text.
//!
//! Layout work stays in Rust: result numbering, excerpt truncation to
//! [`LINE_WIDTH`], search term highlighting and the pagination strip are all
//! computed here and handed to the templates as ready strings.

use super::styles::SIFT_THEME;
use super::templates::{
    CATEGORIES_TEMPLATE, CONFIG_TEMPLATE, MESSAGES_TEMPLATE, PAGINATION_TEMPLATE,
    RESULTS_TEMPLATE,
};
use blogsift::api::{CmdMessage, MessageLevel};
use blogsift::categories::CategoryButton;
use blogsift::config::{SiftConfig, CONFIG_KEYS};
use blogsift::error::{Result, SiftError};
use blogsift::model::Post;
use blogsift::paginate::{PageLink, PaginationControls};
use blogsift::view::SearchView;
use minijinja::{Environment, Value};
use regex::{Captures, RegexBuilder};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const CARD_INDENT: &str = "     ";

/// Renders `template` with the theme's `style` filter registered.
pub fn render_template<T: Serialize>(
    template: &'static str,
    data: &T,
    use_color: bool,
) -> Result<String> {
    let mut env = Environment::new();
    env.add_filter("style", move |value: Value, name: String| -> String {
        SIFT_THEME.apply(&name, &value.to_string(), use_color)
    });
    env.add_template("_inline", template)
        .and_then(|_| env.get_template("_inline"))
        .and_then(|tmpl| tmpl.render(data))
        .map_err(|e| SiftError::Render(e.to_string()))
}

#[derive(Serialize)]
struct CardData {
    number: String,
    indent: &'static str,
    featured: bool,
    title: String,
    emoji: &'static str,
    category: String,
    tag: Option<String>,
    excerpt: String,
    meta: String,
    url: String,
}

#[derive(Serialize)]
struct ResultsData {
    notice: Option<String>,
    header: String,
    cards: Vec<CardData>,
    empty_message: Option<String>,
    pagination: Option<String>,
    url: String,
}

#[derive(Serialize)]
struct NavData {
    label: String,
    style: &'static str,
}

#[derive(Serialize)]
struct PaginationData {
    previous: NavData,
    links: Vec<NavData>,
    next: NavData,
}

#[derive(Serialize)]
struct ButtonData {
    marker: &'static str,
    emoji: &'static str,
    label: String,
    style: &'static str,
    count: usize,
}

#[derive(Serialize)]
struct CategoriesData {
    buttons: Vec<ButtonData>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

/// Renders a full results screen: notice, header, cards, pagination, link.
pub fn render_search_view(view: &SearchView, page_size: usize, use_color: bool) -> Result<String> {
    let term = view.state.search_term.as_str();
    let first_number = (view.state.current_page - 1) * page_size + 1;

    let cards = view
        .results
        .iter()
        .enumerate()
        .map(|(i, post)| card(post, first_number + i, term, use_color))
        .collect();

    let header = match &view.stats {
        Some(stats) => SIFT_THEME.apply(
            "stats",
            &highlight(&stats.summary(), term, use_color),
            use_color,
        ),
        None => format!("📚 All Posts ({})", view.total_results),
    };

    let empty_message = if view.load_error.is_some() {
        Some("⚠️ Unable to load blog posts. Check the source and try again.".to_string())
    } else if view.is_empty() {
        Some("🔍 Try a different search term or category.".to_string())
    } else {
        None
    };

    let data = ResultsData {
        notice: view.recovery_notice.clone(),
        header,
        cards,
        empty_message,
        pagination: view
            .controls
            .as_ref()
            .map(|controls| render_pagination(controls, use_color))
            .transpose()?,
        url: view.url.clone(),
    };

    render_template(RESULTS_TEMPLATE, &data, use_color)
}

fn card(post: &Post, number: usize, term: &str, use_color: bool) -> CardData {
    let title = SIFT_THEME.apply("title", &highlight(&post.title, term, use_color), use_color);
    let excerpt = truncate_to_width(&post.excerpt, LINE_WIDTH - CARD_INDENT.len());

    CardData {
        number: format!("{:>3}.", number),
        indent: CARD_INDENT,
        featured: post.featured,
        title,
        emoji: post.category_emoji,
        category: post.category.clone(),
        tag: post.tags.first().cloned(),
        excerpt: highlight(&excerpt, term, use_color),
        meta: card_meta(post),
        url: post.url.clone(),
    }
}

fn card_meta(post: &Post) -> String {
    [
        ("👤", &post.author),
        ("📅", &post.published_date),
        ("⏱️", &post.read_time),
    ]
    .iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(icon, value)| format!("{} {}", icon, value))
    .collect::<Vec<_>>()
    .join("  ")
}

pub fn render_pagination(controls: &PaginationControls, use_color: bool) -> Result<String> {
    let nav = |label: &str, disabled: bool| NavData {
        label: label.to_string(),
        style: if disabled { "disabled" } else { "plain" },
    };
    let data = PaginationData {
        previous: nav("‹ Previous", controls.previous.disabled),
        links: controls
            .links
            .iter()
            .map(|link| match link {
                PageLink::Page { number, active: true } => NavData {
                    label: format!("[{}]", number),
                    style: "active",
                },
                PageLink::Page { number, .. } => NavData {
                    label: number.to_string(),
                    style: "plain",
                },
                PageLink::Ellipsis => NavData {
                    label: "…".to_string(),
                    style: "disabled",
                },
            })
            .collect(),
        next: nav("Next ›", controls.next.disabled),
    };

    render_template(PAGINATION_TEMPLATE, &data, use_color)
}

pub fn render_categories(buttons: &[CategoryButton], use_color: bool) -> Result<String> {
    let data = CategoriesData {
        buttons: buttons
            .iter()
            .map(|b| ButtonData {
                marker: if b.active { "●" } else { "○" },
                emoji: b.emoji,
                label: b.label.clone(),
                style: if b.active { "active" } else { "plain" },
                count: b.count,
            })
            .collect(),
    };
    render_template(CATEGORIES_TEMPLATE, &data, use_color)
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> Result<String> {
    if messages.is_empty() {
        return Ok(String::new());
    }
    let data = MessagesData {
        messages: messages
            .iter()
            .map(|m| MessageData {
                content: m.content.clone(),
                style: match m.level {
                    MessageLevel::Info => "info",
                    MessageLevel::Success => "success",
                    MessageLevel::Warning => "warning",
                    MessageLevel::Error => "error",
                },
            })
            .collect(),
    };
    render_template(MESSAGES_TEMPLATE, &data, use_color)
}

pub fn render_config(config: &SiftConfig, use_color: bool) -> Result<String> {
    let data = ConfigData {
        entries: CONFIG_KEYS
            .iter()
            .map(|&key| ConfigEntry {
                key,
                value: config.get(key).unwrap_or_default(),
            })
            .collect(),
    };
    render_template(CONFIG_TEMPLATE, &data, use_color)
}

/// Wrap case-insensitive occurrences of `term` in the highlight style.
pub fn highlight(text: &str, term: &str, use_color: bool) -> String {
    if term.is_empty() || !use_color {
        return text.to_string();
    }
    let Ok(re) = RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    else {
        return text.to_string();
    };
    re.replace_all(text, |caps: &Captures| {
        SIFT_THEME.apply("highlight", &caps[0], use_color)
    })
    .into_owned()
}

/// Cut `text` to `width` display columns, ending in `…` when shortened.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
