//! # uitags
//!
//! UI widget tags for flat-file CMS pages.
//!
//! Page sources carry bracketed widget tags (`[ui.blurb]`, `[ui.card]`,
//! `[ui.carousel]`). Each enabled widget scans prepared page text,
//! replaces every well-formed occurrence with an HTML fragment, and
//! later contributes `<style>`/`<link>`/`<script>` boilerplate spliced
//! into the rendered page before its `</head>` and `</body>` markers.
//!
//! Malformed tags never raise an error; they simply fail to match and
//! pass through untouched. Tag attribute and sub-element values are
//! inserted into the generated markup verbatim: in a flat-file CMS the
//! page author is the trust boundary.
//!
//! ```
//! use uitags::Settings;
//!
//! let settings = Settings::from_yaml("card: { enabled: true }").unwrap();
//! let page = r#"[ui.card href="/a" img="/a.png"][title]Alpha[/title][/ui.card]"#;
//! let html = uitags::render_content(page, &settings);
//! assert!(html.contains(r#"<div class="row">"#));
//! ```

pub mod blurb;
pub mod card;
pub mod carousel;
pub mod decorate;
pub mod error;
pub mod ratio;
pub mod settings;
pub mod tag;

pub use error::{UiTagError, UiTagResult};
pub use ratio::AspectRatio;
pub use settings::Settings;
pub use tag::{SubElement, TagInstance};

/// Run every enabled widget's tag pass over prepared page text.
///
/// Pages containing no recognized tag come back byte for byte.
pub fn render_content(content: &str, settings: &Settings) -> String {
    let mut page = content.to_string();
    if settings.blurb.enabled {
        page = blurb::render_tags(&page, &settings.blurb);
    }
    if settings.card.enabled {
        page = card::render_tags(&page, &settings.card);
    }
    if settings.carousel.enabled {
        page = carousel::render_tags(&page, &settings.carousel);
    }
    page
}

/// Splice every enabled widget's head and footer blocks into rendered
/// page HTML.
pub fn decorate_page(html: &str, settings: &Settings) -> String {
    let mut headers = String::new();
    let mut footers = String::new();
    if settings.blurb.enabled {
        headers.push_str(&blurb::head_extras(&settings.blurb));
        footers.push_str(&blurb::body_extras(&settings.blurb));
    }
    if settings.card.enabled {
        headers.push_str(&card::head_extras(&settings.card));
    }
    if settings.carousel.enabled {
        headers.push_str(&carousel::head_extras(&settings.carousel));
        footers.push_str(&carousel::body_extras(&settings.carousel));
    }

    let page = if headers.is_empty() {
        html.to_string()
    } else {
        decorate::insert_before_head(html, &headers)
    };
    if footers.is_empty() {
        page
    } else {
        decorate::insert_before_body(&page, &footers)
    }
}
