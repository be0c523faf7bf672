use pretty_assertions::assert_eq;
use uitags::{decorate_page, render_content, Settings};

fn all_enabled() -> Settings {
    Settings::from_yaml(
        "blurb: { enabled: true }\ncard: { enabled: true }\ncarousel: { enabled: true }",
    )
    .unwrap()
}

#[test]
fn untagged_page_is_returned_byte_for_byte() {
    let page = "# Heading\n\nSome *markdown* with [a link](/x) and brackets [].\n";
    assert_eq!(render_content(page, &all_enabled()), page);
}

#[test]
fn rendering_is_idempotent_on_its_own_output() {
    let page = "intro\n[ui.card href=\"/a\" img=\"/a.png\"][title]A[/title][/ui.card]\noutro";
    let settings = all_enabled();
    let once = render_content(page, &settings);
    let twice = render_content(&once, &settings);
    assert_eq!(twice, once);
}

#[test]
fn disabled_widgets_leave_their_tags_alone() {
    let page = "[ui.card href=\"/a\"][title]A[/title][/ui.card]";
    let settings = Settings::from_yaml("blurb: { enabled: true }").unwrap();
    assert_eq!(render_content(page, &settings), page);
}

#[test]
fn blurb_right_layout_places_the_image_after_the_text() {
    let page = r#"[ui.blurb href="/a" img="/b.png" imgpos="right"][title]T[/title][text]X[/text][/ui.blurb]"#;
    let out = render_content(page, &all_enabled());
    assert!(out.contains(">T</a>"));
    assert!(out.contains(">X</a>"));
    let text_col = out.find("col-md-8 col-sm-8").unwrap();
    let img_col = out.find("col-md-4 col-sm-4").unwrap();
    assert!(text_col < img_col);
}

#[test]
fn adjacent_cards_merge_into_a_single_row() {
    let page = "\
[ui.card href=\"/a\" img=\"/a.png\"][title]A[/title][/ui.card]

[ui.card href=\"/b\" img=\"/b.png\"][title]B[/title][/ui.card]";
    let out = render_content(page, &all_enabled());
    assert_eq!(out.matches("<div class=\"row\">").count(), 1);
    assert_eq!(out.matches("ui-card-container").count(), 2);
}

#[test]
fn mismatched_sub_element_close_is_dropped_without_aborting() {
    let page = "[ui.card][title]gone[/text][text]kept[/text][/ui.card]";
    let out = render_content(page, &all_enabled());
    assert!(!out.contains("[ui.card"), "tag should still be replaced");
    assert!(!out.contains("gone"));
    assert!(out.contains("kept"));
}

#[test]
fn malformed_tags_pass_through_unchanged() {
    let pages = [
        "[ui.card href=broken][title]A[/title][/ui.card]",
        "[ui.blurb][title]A[/title]",
        "[ui.carousel][banner]A[/banner][/ui.carousel]",
    ];
    let settings = all_enabled();
    for page in pages {
        assert_eq!(render_content(page, &settings), page);
    }
}

#[test]
fn duplicate_attribute_keys_take_the_last_value() {
    let page = r#"[ui.card href="/first" href="/second"][/ui.card]"#;
    let out = render_content(page, &all_enabled());
    assert!(out.contains("href=\"/second\""));
    assert!(!out.contains("/first"));
}

#[test]
fn carousel_renders_slides_with_inline_ratio() {
    let page = r#"[ui.carousel ratio="1:1"]
[slide href="/a" img="/a.png"]Alpha[/slide]
[slide href="/b" img="/b.png"]Beta[/slide]
[/ui.carousel]"#;
    let out = render_content(page, &all_enabled());
    assert_eq!(out.matches("ui-carousel-slide\"").count(), 2);
    assert!(out.contains("padding-bottom: 100%;"));
    assert!(out.contains("height: 100vw;"));
}

#[test]
fn decoration_splices_before_the_first_head_and_body_markers() {
    let html = "<html><head><title>t</title></head><body>content</body></html>";
    let out = decorate_page(html, &all_enabled());

    let head_close = out.find("</head>").unwrap();
    let body_close = out.find("</body>").unwrap();
    let style = out.find("<style type=\"text/css\">").unwrap();
    let slick_js = out.find("slick.min.js").unwrap();

    assert!(style < head_close);
    assert!(head_close < slick_js && slick_js < body_close);
    assert_eq!(out.matches("</head>").count(), 1);
    assert_eq!(out.matches("</body>").count(), 1);
}

#[test]
fn decoration_with_nothing_enabled_is_identity() {
    let html = "<html><head></head><body></body></html>";
    assert_eq!(decorate_page(html, &Settings::default()), html);
}

#[test]
fn full_page_pipeline() {
    let settings = Settings::from_yaml(
        r#"
blurb:
  enabled: true
  css_class: { title: "display-4" }
card:
  enabled: true
carousel:
  enabled: true
  ratio: "16:9"
"#,
    )
    .unwrap();

    let source = r#"Welcome.

[ui.carousel]
[slide href="/news" img="/hero.png"]Latest news[/slide]
[/ui.carousel]

[ui.blurb href="/about" img="/team.png"][title]About us[/title][text]Who we are[/text][more]Read more[/more][/ui.blurb]

[ui.card href="/a" img="/a.png"][title]Alpha[/title][/ui.card]
[ui.card href="/b" img="/b.png"][title]Beta[/title][/ui.card]
"#;

    let content = render_content(source, &settings);
    assert!(content.contains("Latest news"));
    assert!(content.contains("ui-blurb-title display-4"));
    assert_eq!(content.matches("<div class=\"row\">").count(), 1);
    assert!(content.starts_with("Welcome."));

    let html = format!("<html><head></head><body>{content}</body></html>");
    let page = decorate_page(&html, &settings);
    // 16:9 default ratio reaches the injected stylesheet
    let pct = (9.0f64 / 16.0).clamp(0.01, 10.0) * 100.0;
    assert!(page.contains(&format!("height: {pct}vw;")));
    assert!(page.contains("/slick-theme.css"));
}
