//! The card widget: linked boxes with a background image and title
//! overlay. Cards written back to back in the source (separated only by
//! whitespace) share one grid row so they sit side by side.

use serde::{Deserialize, Serialize};

use crate::decorate::{BOOTSTRAP_CSS_TAG, BOOTSTRAP_JS_TAG};
use crate::settings::CardSettings;
use crate::tag::{self, BodyKind, TagGrammar, TagInstance, TagMatch};

pub const GRAMMAR: TagGrammar = TagGrammar {
    name: "ui.card",
    body: BodyKind::NamedText,
};

/// A parsed `[ui.card]` occurrence. Missing fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub href: String,
    pub img: String,
    pub title: String,
    pub text: String,
}

impl Card {
    pub fn from_tag(tag: &TagInstance) -> Self {
        Self {
            href: tag.attr("href").to_string(),
            img: tag.attr("img").to_string(),
            title: tag.text_of("title").to_string(),
            text: tag.text_of("text").to_string(),
        }
    }
}

/// Replace every well-formed `[ui.card]` tag in prepared page text.
///
/// Matches are collected first and grouped structurally: a run of cards
/// whose separators are pure whitespace renders into a single
/// `<div class="row">` wrapper.
pub fn render_tags(content: &str, settings: &CardSettings) -> String {
    if !content.contains("[ui.card") {
        return content.to_string();
    }
    let matches = tag::collect_tags(content, &GRAMMAR);
    if matches.is_empty() {
        return content.to_string();
    }
    tracing::debug!(tag = GRAMMAR.name, count = matches.len(), "replacing bracket tags");
    tag::splice(content, group_rows(content, &matches, settings))
}

/// One replacement span per whitespace-adjacent run of cards.
fn group_rows(
    content: &str,
    matches: &[TagMatch],
    settings: &CardSettings,
) -> Vec<(std::ops::Range<usize>, String)> {
    let mut replacements = Vec::new();
    let mut i = 0;
    while i < matches.len() {
        let mut j = i + 1;
        while j < matches.len()
            && content[matches[j - 1].span.end..matches[j].span.start]
                .trim()
                .is_empty()
        {
            j += 1;
        }
        let cards: Vec<String> = matches[i..j]
            .iter()
            .map(|m| render(&Card::from_tag(&m.tag), settings))
            .collect();
        let row = format!("<div class=\"row\">{}</div>", cards.join("\n\n"));
        replacements.push((matches[i].span.start..matches[j - 1].span.end, row));
        i = j;
    }
    replacements
}

fn render(card: &Card, settings: &CardSettings) -> String {
    let mut out = format!(
        "<a class=\"ui-card-container {}\" href=\"{}\">",
        settings.css_class.position, card.href
    );
    out.push_str(&format!(
        "<div class=\"ui-card-background\" style=\"background: transparent url('{}') no-repeat scroll; background-size: cover;\">",
        card.img
    ));
    out.push_str("<div class=\"ui-card-gradient\">");
    out.push_str(&format!(
        "<div class=\"ui-card-title {}\">{}</div>",
        settings.css_class.title, card.title
    ));
    out.push_str("</div></div>");
    out.push_str(&format!(
        "<span class=\"ui-card-text {}\">{}</span>",
        settings.css_class.text, card.text
    ));
    out.push_str("</a>");
    out
}

/// Style block plus optional Bootstrap CSS and JS, for the end of `<head>`.
pub fn head_extras(settings: &CardSettings) -> String {
    let mut headers = String::new();
    if settings.load_bootstrap {
        headers.push_str(BOOTSTRAP_CSS_TAG);
        headers.push_str(BOOTSTRAP_JS_TAG);
    }
    headers.push_str(CARD_CSS);
    headers
}

const CARD_CSS: &str = r#"
<style type="text/css">
a.ui-card-container { display: block; padding: 10px; }
.ui-card-background { width: 100%; padding-bottom: 56.25%; border-radius: 5px; box-shadow: 2px 2px 1px 0px rgba(0,0,0,0.2); position: relative; }
.ui-card-gradient { border-radius: 5px; position: absolute; top: 0; bottom: 0; left: 0; right: 0; background: linear-gradient(to bottom, rgba(0,0,0,0) 75%, rgba(0,0,0,0.8) 100%); }
.ui-card-title { position: absolute; bottom: 5px; left: 10px; font-size: 24px; color: #fff; }
@media screen and (max-width:320px) { .ui-card-title { font-size: 16px; } }
@media screen and (min-width:321px) and (max-width:639px) { .ui-card-title { font-size: 20px; } }
.ui-card-text { display: block; line-height: 100%; padding: 10px; font-size: 18px; color: #000; text-decoration: none; }
@media screen and (max-width:320px) { .ui-card-text { font-size: 14px; } }
@media screen and (min-width:321px) and (max-width:639px) { .ui-card-text { font-size: 16px; } }
</style>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::CardSettings;

    fn settings() -> CardSettings {
        CardSettings {
            enabled: true,
            ..CardSettings::default()
        }
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn single_card_gets_its_own_row() {
        let content = r#"[ui.card href="/a" img="/a.png"][title]A[/title][/ui.card]"#;
        let out = render_tags(content, &settings());
        assert_eq!(count(&out, "<div class=\"row\">"), 1);
        assert!(out.contains("url('/a.png')"));
        assert!(out.contains(">A</div>"));
    }

    #[test]
    fn whitespace_adjacent_cards_share_one_row() {
        let content = "[ui.card href=\"/a\"][title]A[/title][/ui.card]\n\n[ui.card href=\"/b\"][title]B[/title][/ui.card]";
        let out = render_tags(content, &settings());
        assert_eq!(count(&out, "<div class=\"row\">"), 1);
        assert_eq!(count(&out, "ui-card-container"), 2);
    }

    #[test]
    fn intervening_text_splits_the_rows() {
        let content = "[ui.card][title]A[/title][/ui.card]\nbetween\n[ui.card][title]B[/title][/ui.card]";
        let out = render_tags(content, &settings());
        assert_eq!(count(&out, "<div class=\"row\">"), 2);
        assert!(out.contains("\nbetween\n"));
    }

    #[test]
    fn position_classes_come_from_settings() {
        let out = render_tags("[ui.card][/ui.card]", &settings());
        assert!(out.contains("ui-card-container col-md-4 col-sm-6 col-xs-6"));
    }

    #[test]
    fn head_extras_carry_bootstrap_when_asked() {
        let mut settings = settings();
        assert!(!head_extras(&settings).contains("bootstrapcdn"));
        settings.load_bootstrap = true;
        let headers = head_extras(&settings);
        assert!(headers.contains("bootstrap.min.css"));
        assert!(headers.contains("bootstrap.min.js"));
    }
}
