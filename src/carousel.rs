//! The carousel widget: full-width rotating slides driven by the Slick
//! jQuery plugin. The widget renders the slide markup and injects the
//! Slick assets; `load_jquery` additionally pulls jQuery from a
//! configurable URL for themes that do not ship it.
//!
//! The container is absolutely positioned so a spacer element reserves
//! the page flow space; both are sized from the aspect ratio.

use serde::{Deserialize, Serialize};

use crate::ratio::AspectRatio;
use crate::settings::CarouselSettings;
use crate::tag::{self, BodyKind, SubElement, TagGrammar, TagInstance};

pub const GRAMMAR: TagGrammar = TagGrammar {
    name: "ui.carousel",
    body: BodyKind::FixedElements("slide"),
};

/// One `[slide]` record. Missing fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub href: String,
    pub img: String,
    pub text: String,
}

impl Slide {
    pub fn from_element(element: &SubElement) -> Self {
        Self {
            href: element.attr("href").to_string(),
            img: element.attr("img").to_string(),
            text: element.text.clone(),
        }
    }
}

/// Replace every well-formed `[ui.carousel]` tag in prepared page text.
pub fn render_tags(content: &str, settings: &CarouselSettings) -> String {
    if !content.contains("[ui.carousel") {
        return content.to_string();
    }
    tag::replace_tags(content, &GRAMMAR, |tag| render(tag, settings))
}

fn render(tag: &TagInstance, settings: &CarouselSettings) -> String {
    // A per-tag ratio produces inline sizing; otherwise the injected
    // stylesheet's page-level default governs.
    let (slide_style, spacer_style) = match tag.attr("ratio") {
        "" => (String::new(), String::new()),
        raw => {
            let pct = AspectRatio::parse_or_default(raw, settings.ratio).height_percent();
            (
                format!("padding-bottom: {pct}%;"),
                format!("height: {pct}vw;"),
            )
        }
    };

    let mut out = String::from("<div class=\"ui-carousel-container\"><div class=\"ui-carousel\">");
    for element in &tag.elements {
        let slide = Slide::from_element(element);
        out.push_str(&format!(
            "<div class=\"ui-carousel-slide\" style=\"background: transparent url('{}') no-repeat scroll; background-size: cover;\">",
            slide.img
        ));
        out.push_str(&format!(
            "<a href=\"{}\" class=\"ui-carousel-slide-content\" style=\"{}\">",
            slide.href, slide_style
        ));
        out.push_str("<div class=\"ui-carousel-shadow-bottom\"><div class=\"ui-carousel-shadow-sides\">");
        out.push_str(&format!(
            "<div class=\"ui-carousel-slide-text {}\">{}</div>",
            settings.css_class.text, slide.text
        ));
        out.push_str("</div></div></a></div>");
    }
    out.push_str("</div></div>");
    // the spacer wants its own line so the CMS's markdown pass leaves it alone
    out.push_str(&format!(
        "\n<div class=\"ui-carousel-spacer\" style=\"{spacer_style}\"></div>"
    ));
    format!("\n{out}\n")
}

/// Slick stylesheets plus the carousel style block, for the end of `<head>`.
pub fn head_extras(settings: &CarouselSettings) -> String {
    let mut headers = format!(
        "\n<link rel=\"stylesheet\" href=\"{0}/slick.css\" />\n<link rel=\"stylesheet\" href=\"{0}/slick-theme.css\" />",
        settings.slick_path
    );
    let height = settings.ratio.height_percent();
    headers.push_str(&CAROUSEL_CSS.replace("{height}", &height.to_string()));
    headers
}

/// Optional jQuery, the Slick script, and the initializer, for the end
/// of `<body>`.
pub fn body_extras(settings: &CarouselSettings) -> String {
    let mut footers = String::new();
    if settings.load_jquery {
        footers.push_str(&format!("\n<script src=\"{}\"></script>", settings.jquery_url));
    }
    footers.push_str(&format!(
        "\n<script src=\"{}/slick.min.js\"></script>",
        settings.slick_path
    ));
    footers.push_str(CAROUSEL_INIT_JS);
    footers
}

/// `{height}` is the default ratio's height percentage.
const CAROUSEL_CSS: &str = r#"
<style type="text/css">
.ui-carousel-container { position: absolute; width: 100%; left: 0; }
.ui-carousel-spacer { margin: 10px 0 30px; height: {height}vw; }
.ui-carousel { margin: 10px auto; width: 100%; }
.ui-carousel-slide { width: 100%; box-shadow: 2px 2px 1px 0px rgba(0,0,0,0.2); background-color: #ccc; }
.ui-carousel-slide-content { display: block; position: relative; width: 100%; padding-bottom: {height}%; }
.ui-carousel-shadow-bottom { position: absolute; top: 0; bottom: 0; left: 0; right: 0; background: linear-gradient(to bottom, rgba(0,0,0,0) 75%, rgba(0,0,0,0.8) 100%); }
.ui-carousel-shadow-sides { position: absolute; top: 0; bottom: 0; left: 0; right: 0; background: linear-gradient(to right, rgba(0,0,0,0.8) 0%, rgba(0,0,0,0) 15%, rgba(0,0,0,0) 85%, rgba(0,0,0,0.8) 100%); }
.ui-carousel-slide-text { position: absolute; bottom: 0; left: 0; margin: 50px; font-size: 48px; color: #fff; line-height: 100%; text-decoration: none; }
@media (max-width:415px) { .ui-carousel-slide-text { font-size: 24px; margin: 5px; } }
@media (min-width:416px) and (max-width:639px) { .ui-carousel-slide-text { font-size: 32px; margin: 20px; } }
@media (min-width:640px) and (max-width:900px) { .ui-carousel-slide-text { font-size: 40px; margin: 30px; } }
.ui-carousel button.slick-prev { left: 10px; z-index: 99; width: 32px; height: 32px; }
@media (max-width:415px) { .ui-carousel button.slick-prev { display: none; } }
@media (min-width:416px) and (max-width:639px) { .ui-carousel button.slick-prev { left: 5px; width: 16px; height: 16px; } }
.ui-carousel button.slick-next { right: 10px; z-index: 99; width: 32px; height: 32px; }
@media (max-width:415px) { .ui-carousel button.slick-next { display: none; } }
@media (min-width:416px) and (max-width:639px) { .ui-carousel button.slick-next { right: 5px; width: 16px; height: 16px; } }
.ui-carousel button.slick-prev:before, .ui-carousel button.slick-next:before { font-size: 32px; }
@media (max-width:415px) { .ui-carousel button.slick-prev:before, .ui-carousel button.slick-next:before { font-size: 0px; } }
@media (min-width:416px) and (max-width:639px) { .ui-carousel button.slick-prev:before, .ui-carousel button.slick-next:before { font-size: 16px; } }
.ui-carousel ul.slick-dots { bottom: 10px; }
@media (max-width:415px) { .ui-carousel ul.slick-dots { bottom: -10px; } }
@media (min-width:416px) and (max-width:639px) { .ui-carousel ul.slick-dots { bottom: 0px; } }
.ui-carousel ul.slick-dots li button:before { color: #bbb; }
.ui-carousel ul.slick-dots li.slick-active button:before { color: #fff; }
</style>
"#;

const CAROUSEL_INIT_JS: &str = r#"
<script type="text/javascript">
$(document).ready(function(){$(".ui-carousel").slick({dots: true});});
</script>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::CarouselSettings;

    fn settings() -> CarouselSettings {
        CarouselSettings {
            enabled: true,
            ..CarouselSettings::default()
        }
    }

    #[test]
    fn slides_render_in_source_order() {
        let content = r#"[ui.carousel]
            [slide href="/a" img="/a.png"]Alpha[/slide]
            [slide href="/b" img="/b.png"]Beta[/slide]
        [/ui.carousel]"#;
        let out = render_tags(content, &settings());
        let alpha = out.find("Alpha").unwrap();
        let beta = out.find("Beta").unwrap();
        assert!(alpha < beta);
        assert!(out.contains("href=\"/a\""));
        assert!(out.contains("url('/b.png')"));
        assert!(out.contains("ui-carousel-spacer"));
    }

    #[test]
    fn square_ratio_sizes_inline_styles() {
        let content = r#"[ui.carousel ratio="1:1"][slide img="/a.png"]A[/slide][/ui.carousel]"#;
        let out = render_tags(content, &settings());
        assert!(out.contains("padding-bottom: 100%;"));
        assert!(out.contains("height: 100vw;"));
    }

    #[test]
    fn absent_ratio_leaves_inline_styles_empty() {
        let content = "[ui.carousel][slide]A[/slide][/ui.carousel]";
        let out = render_tags(content, &settings());
        assert!(out.contains("class=\"ui-carousel-slide-content\" style=\"\""));
        assert!(out.contains("class=\"ui-carousel-spacer\" style=\"\""));
    }

    #[test]
    fn unparsable_ratio_uses_the_configured_default() {
        let content = r#"[ui.carousel ratio="bogus"][slide]A[/slide][/ui.carousel]"#;
        let out = render_tags(content, &settings());
        let pct = settings().ratio.height_percent();
        assert!(out.contains(&format!("padding-bottom: {pct}%;")));
    }

    #[test]
    fn head_extras_link_slick_and_interpolate_the_height() {
        let headers = head_extras(&settings());
        assert!(headers.contains("/slick.css"));
        assert!(headers.contains("/slick-theme.css"));
        let pct = settings().ratio.height_percent();
        assert!(headers.contains(&format!("height: {pct}vw;")));
        assert!(!headers.contains("{height}"));
    }

    #[test]
    fn body_extras_load_jquery_only_when_asked() {
        let mut settings = settings();
        assert!(!body_extras(&settings).contains("jquery.min.js"));
        settings.load_jquery = true;
        let footers = body_extras(&settings);
        assert!(footers.contains("jquery.min.js"));
        assert!(footers.contains("slick.min.js"));
        assert!(footers.contains("slick({dots: true})"));
    }
}
