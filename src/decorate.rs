//! Page decoration: splicing generated blocks into rendered HTML.
//!
//! Insertion is a literal substring match, not a parse of the page
//! markup. It assumes the document carries one `</head>` and one
//! `</body>` token; when the marker is absent the page is returned
//! unchanged.

/// Insert `block` immediately before the first `</head>` occurrence.
pub fn insert_before_head(html: &str, block: &str) -> String {
    insert_before(html, "</head>", block)
}

/// Insert `block` immediately before the first `</body>` occurrence.
pub fn insert_before_body(html: &str, block: &str) -> String {
    insert_before(html, "</body>", block)
}

fn insert_before(html: &str, marker: &str, block: &str) -> String {
    match html.find(marker) {
        Some(at) => {
            let mut out = String::with_capacity(html.len() + block.len());
            out.push_str(&html[..at]);
            out.push_str(block);
            out.push_str(&html[at..]);
            out
        }
        None => html.to_string(),
    }
}

/// Bootstrap 3 CDN tags, shared by the widgets that can self-load it.
pub(crate) const BOOTSTRAP_CSS_TAG: &str = "\n<link rel=\"stylesheet\" href=\"//maxcdn.bootstrapcdn.com/bootstrap/3.3.7/css/bootstrap.min.css\" integrity=\"sha384-BVYiiSIFeK1dGmJRAkycuHAHRg32OmUcww7on3RYdg4Va+PmSTsz/K68vbdEjh4u\" crossorigin=\"anonymous\" />";

pub(crate) const BOOTSTRAP_JS_TAG: &str = "\n<script src=\"//maxcdn.bootstrapcdn.com/bootstrap/3.3.7/js/bootstrap.min.js\" integrity=\"sha384-Tc5IQib027qvyjSMfHjOMaLkfuWVxZxUPnCJA7l2mCWNIpG9mGCD8wGNIcPD7Txa\" crossorigin=\"anonymous\"></script>";
