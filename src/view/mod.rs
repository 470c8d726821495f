//! Declarative view model for the widget and its HTML rendering.
//!
//! The actor publishes a fresh [`View`] after every state change; renderers
//! only ever draw what they are given.

use std::fmt;

pub const LOADING_TEXT: &str = "Loading user data...";
pub const UNKNOWN_USER: &str = "Unknown User";
pub const SUCCESS_TEXT: &str = "Profile updated successfully!";
pub const SUBMIT_LABEL: &str = "Update Profile";

/// Exactly one of these is on screen at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Loading,
    Error { message: String },
    Profile(ProfileView),
}

/// The loaded form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    /// Name of the canonical record, or [`UNKNOWN_USER`].
    pub heading: String,
    pub name: String,
    pub email: String,
    pub bio: String,
    pub success_visible: bool,
    pub user_id: String,
}

impl View {
    pub fn is_loading(&self) -> bool {
        matches!(self, View::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            View::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn profile(&self) -> Option<&ProfileView> {
        match self {
            View::Profile(profile) => Some(profile),
            _ => None,
        }
    }
}

impl ProfileView {
    pub fn debug_line(&self) -> String {
        format!("Debug: User ID = {}", self.user_id)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Loading => write!(f, "<div>{}</div>", LOADING_TEXT),
            View::Error { message } => write!(
                f,
                "<div style=\"color: red\">Error: {}</div>",
                escape_html(message)
            ),
            View::Profile(profile) => fmt::Display::fmt(profile, f),
        }
    }
}

impl fmt::Display for ProfileView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "<div style=\"padding: 20px; border: 1px solid #ccc; margin: 10px\">"
        )?;
        writeln!(f, "  <h2>{}</h2>", escape_html(&self.heading))?;
        writeln!(f, "  <form>")?;
        writeln!(
            f,
            "    <div><input type=\"text\" name=\"name\" value=\"{}\" placeholder=\"Full Name\"></div>",
            escape_html(&self.name)
        )?;
        writeln!(
            f,
            "    <div><input type=\"email\" name=\"email\" value=\"{}\" placeholder=\"Email Address\"></div>",
            escape_html(&self.email)
        )?;
        writeln!(
            f,
            "    <div><textarea name=\"bio\" placeholder=\"Biography\" rows=\"4\">{}</textarea></div>",
            escape_html(&self.bio)
        )?;
        writeln!(f, "    <button type=\"submit\">{}</button>", SUBMIT_LABEL)?;
        writeln!(f, "  </form>")?;
        let display = if self.success_visible { "block" } else { "none" };
        writeln!(
            f,
            "  <div id=\"success-message\" style=\"display: {}; color: green\">{}</div>",
            display, SUCCESS_TEXT
        )?;
        writeln!(
            f,
            "  <div style=\"margin-top: 20px; font-size: 12px; color: #666\">{}</div>",
            escape_html(&self.debug_line())
        )?;
        write!(f, "</div>")
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
