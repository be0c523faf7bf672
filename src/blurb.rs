//! The blurb widget: an image beside a short title/text/more block,
//! typically on an index or menu page. Positioning relies on the
//! Bootstrap grid; the theme either loads Bootstrap itself or the
//! `load_bootstrap` setting pulls it from the CDN.

use serde::{Deserialize, Serialize};

use crate::decorate::{BOOTSTRAP_CSS_TAG, BOOTSTRAP_JS_TAG};
use crate::settings::BlurbSettings;
use crate::tag::{self, BodyKind, TagGrammar, TagInstance};

pub const GRAMMAR: TagGrammar = TagGrammar {
    name: "ui.blurb",
    body: BodyKind::NamedText,
};

/// A parsed `[ui.blurb]` occurrence. Missing fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Blurb {
    pub href: String,
    pub img: String,
    /// `"right"` puts the image column after the text column; anything
    /// else keeps it in front.
    pub imgpos: String,
    pub title: String,
    pub text: String,
    pub more: String,
}

impl Blurb {
    pub fn from_tag(tag: &TagInstance) -> Self {
        Self {
            href: tag.attr("href").to_string(),
            img: tag.attr("img").to_string(),
            imgpos: tag.attr("imgpos").to_string(),
            title: tag.text_of("title").to_string(),
            text: tag.text_of("text").to_string(),
            more: tag.text_of("more").to_string(),
        }
    }
}

/// Replace every well-formed `[ui.blurb]` tag in prepared page text.
pub fn render_tags(content: &str, settings: &BlurbSettings) -> String {
    if !content.contains("[ui.blurb") {
        return content.to_string();
    }
    tag::replace_tags(content, &GRAMMAR, |tag| render(&Blurb::from_tag(tag), settings))
}

fn render(blurb: &Blurb, settings: &BlurbSettings) -> String {
    let image_column = format!(
        "<div class=\"col-md-4 col-sm-4\"><a href=\"{}\"><img src=\"{}\" class=\"ui-blurb-image\" /></a></div>",
        blurb.href, blurb.img
    );
    let mut out = String::from("<div class=\"row ui-blurb-container\">");
    if blurb.imgpos != "right" {
        out.push_str(&image_column);
    }
    out.push_str("<div class=\"col-md-8 col-sm-8\">");
    out.push_str(&format!(
        "<a href=\"{}\" class=\"ui-blurb-title {}\">{}</a>",
        blurb.href, settings.css_class.title, blurb.title
    ));
    out.push_str(&format!(
        "<a href=\"{}\" class=\"ui-blurb-text {}\">{}</a>",
        blurb.href, settings.css_class.text, blurb.text
    ));
    out.push_str(&format!(
        "<a href=\"{}\" class=\"ui-blurb-more {}\">{}</a>",
        blurb.href, settings.css_class.more_link, blurb.more
    ));
    out.push_str("</div>");
    if blurb.imgpos == "right" {
        out.push_str(&image_column);
    }
    out.push_str("</div>");
    out
}

/// Style block plus optional Bootstrap CSS, for the end of `<head>`.
pub fn head_extras(settings: &BlurbSettings) -> String {
    let mut headers = String::new();
    if settings.load_bootstrap {
        headers.push_str(BOOTSTRAP_CSS_TAG);
    }
    headers.push_str(BLURB_CSS);
    headers
}

/// Optional Bootstrap JS, for the end of `<body>`.
pub fn body_extras(settings: &BlurbSettings) -> String {
    if settings.load_bootstrap {
        format!("{BOOTSTRAP_JS_TAG}\n")
    } else {
        String::new()
    }
}

const BLURB_CSS: &str = r#"
<style type="text/css">
div.ui-blurb-container { margin: 10px 0; }
.ui-blurb-image { width: 100%; border-radius: 3px; box-shadow: 1px 1px 1px 0px rgba(0,0,0,0.2); }
a.ui-blurb-title { display: block; font-size: 24px; line-height: 100%; color: #000; text-decoration: none; margin: 0 0 10px; }
@media (max-width:320px) { a.ui-blurb-title { font-size: 16px; } }
@media (min-width:321px) and (max-width:639px) { a.ui-blurb-title { font-size: 20px; } }
a.ui-blurb-text { display: block; line-height: 100%; font-size: 18px; color: #000; text-decoration: none; margin: 0 0 10px; }
@media (max-width:320px) { a.ui-blurb-text { font-size: 14px; } }
@media (min-width:321px) and (max-width:639px) { a.ui-blurb-text { font-size: 16px; } }
a.ui-blurb-more { display: block; line-height: 100%; font-size: 18px; }
@media (max-width:320px) { a.ui-blurb-more { font-size: 14px; } }
@media (min-width:321px) and (max-width:639px) { a.ui-blurb-more { font-size: 16px; } }
</style>
"#;
