//! Bracket-tag scanning and parsing.
//!
//! Page markup carries widget tags in a fixed, non-recursive grammar:
//!
//! ```text
//! [ui.blurb href="/a" img="/b.png"]
//!   [title]Hello[/title]
//!   [text]World[/text]
//! [/ui.blurb]
//! ```
//!
//! Matching is purely lexical. A tag is recognized only when its full
//! open/attributes/body/close sequence appears contiguously and follows
//! the grammar; anything malformed simply fails to match and is left in
//! the page untouched. There is no escaping mechanism: a quote character
//! inside an attribute value, or a `[` inside sub-element text, breaks
//! the candidate match and the text passes through as-is.

use std::ops::Range;

// ─── Grammar ─────────────────────────────────────────────────────────────────

/// How a grammar treats the sub-elements inside a tag body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// `[name]text[/name]` pairs with any lowercase name and no
    /// attributes. A pair whose closing name differs from its opening
    /// name is dropped from the record without failing the tag.
    NamedText,
    /// Elements of one fixed name, each with its own attribute list:
    /// `[slide href="/a"]text[/slide]`. Any other element name fails
    /// the whole tag.
    FixedElements(&'static str),
}

/// The fixed grammar of one widget tag.
#[derive(Debug, Clone, Copy)]
pub struct TagGrammar {
    /// Full tag name, e.g. `ui.blurb`.
    pub name: &'static str,
    pub body: BodyKind,
}

impl TagGrammar {
    /// The literal that must appear for this tag to possibly match.
    /// Used as the cheap pre-scan gate.
    pub fn open_literal(&self) -> String {
        format!("[{}", self.name)
    }
}

// ─── Parsed records ──────────────────────────────────────────────────────────

/// One `key="value"` pair from an opening tag.
pub type Attribute = (String, String);

/// One matched occurrence of a widget tag.
///
/// Attributes keep source order and admit duplicates; lookups take the
/// last occurrence. Unrecognized keys are carried but unused.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagInstance {
    pub attributes: Vec<Attribute>,
    pub elements: Vec<SubElement>,
}

/// A sub-element inside a tag body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubElement {
    pub name: String,
    /// Only populated for [`BodyKind::FixedElements`] grammars.
    pub attributes: Vec<Attribute>,
    pub text: String,
}

impl TagInstance {
    /// Value of the last attribute named `key`, or `""`.
    pub fn attr(&self, key: &str) -> &str {
        last_attr(&self.attributes, key)
    }

    /// Inner text of the last sub-element named `name`, or `""`.
    pub fn text_of(&self, name: &str) -> &str {
        self.elements
            .iter()
            .rev()
            .find(|e| e.name == name)
            .map(|e| e.text.as_str())
            .unwrap_or("")
    }
}

impl SubElement {
    /// Value of the last attribute named `key`, or `""`.
    pub fn attr(&self, key: &str) -> &str {
        last_attr(&self.attributes, key)
    }
}

fn last_attr<'a>(attrs: &'a [Attribute], key: &str) -> &'a str {
    attrs
        .iter()
        .rev()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .unwrap_or("")
}

/// A matched tag plus the byte span it occupies in the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct TagMatch {
    pub span: Range<usize>,
    pub tag: TagInstance,
}

// ─── Scanning ────────────────────────────────────────────────────────────────

/// Collect every grammar match in `content`, left to right, one pass.
///
/// A failed candidate resumes the scan one byte past its opening `[`,
/// so a malformed tag never hides a later well-formed one.
pub fn collect_tags(content: &str, grammar: &TagGrammar) -> Vec<TagMatch> {
    let open = grammar.open_literal();
    let mut matches = Vec::new();
    let mut from = 0;
    while let Some(found) = content[from..].find(&open) {
        let at = from + found;
        match parse_at(content, grammar, at) {
            Some(m) => {
                from = m.span.end;
                matches.push(m);
            }
            None => from = at + 1,
        }
    }
    matches
}

/// Replace every match with the fragment produced by `render`.
///
/// Pages with no match come back byte-for-byte identical.
pub fn replace_tags(
    content: &str,
    grammar: &TagGrammar,
    mut render: impl FnMut(&TagInstance) -> String,
) -> String {
    let matches = collect_tags(content, grammar);
    if matches.is_empty() {
        return content.to_string();
    }
    tracing::debug!(tag = grammar.name, count = matches.len(), "replacing bracket tags");
    splice(
        content,
        matches.iter().map(|m| (m.span.clone(), render(&m.tag))),
    )
}

/// Rebuild `content` with each span replaced by its fragment.
/// Spans must be in ascending order and non-overlapping.
pub(crate) fn splice(
    content: &str,
    replacements: impl IntoIterator<Item = (Range<usize>, String)>,
) -> String {
    let mut out = String::with_capacity(content.len());
    let mut last = 0;
    for (span, fragment) in replacements {
        out.push_str(&content[last..span.start]);
        out.push_str(&fragment);
        last = span.end;
    }
    out.push_str(&content[last..]);
    out
}

// ─── Parser ──────────────────────────────────────────────────────────────────

/// Attempt a full tag match with its opening `[` at `start`.
fn parse_at(src: &str, grammar: &TagGrammar, start: usize) -> Option<TagMatch> {
    let mut cur = Cursor { src, pos: start };
    if !cur.eat(b'[') || !cur.eat_str(grammar.name) {
        return None;
    }
    let attributes = parse_attr_list(&mut cur)?;

    let mut elements = Vec::new();
    cur.skip_ws();
    loop {
        if cur.peek() != Some(b'[') {
            return None;
        }
        if cur.peek_at(1) == Some(b'/') {
            // only the tag's own closer may appear here
            cur.pos += 2;
            if !cur.eat_str(grammar.name) {
                return None;
            }
            cur.skip_ws();
            if !cur.eat(b']') {
                return None;
            }
            return Some(TagMatch {
                span: start..cur.pos,
                tag: TagInstance {
                    attributes,
                    elements,
                },
            });
        }
        match grammar.body {
            BodyKind::NamedText => {
                let (open, text, close) = parse_named_pair(&mut cur)?;
                // closing name must match for the pair to count
                if open == close {
                    elements.push(SubElement {
                        name: open.to_string(),
                        attributes: Vec::new(),
                        text: text.to_string(),
                    });
                }
            }
            BodyKind::FixedElements(name) => {
                elements.push(parse_fixed_element(&mut cur, name)?);
            }
        }
        cur.skip_ws();
    }
}

/// `(\s+ key = 'value')* \s* ]` after a tag or element name.
///
/// Keys are lowercase ASCII letters; values take either quote style but
/// may contain neither quote character.
fn parse_attr_list(cur: &mut Cursor) -> Option<Vec<Attribute>> {
    let mut attrs = Vec::new();
    loop {
        let ws = cur.skip_ws();
        if cur.eat(b']') {
            return Some(attrs);
        }
        if ws == 0 {
            return None;
        }
        let key = cur.take_lowercase();
        if key.is_empty() || !cur.eat(b'=') {
            return None;
        }
        let quote = match cur.peek() {
            Some(q @ (b'"' | b'\'')) => {
                cur.pos += 1;
                q
            }
            _ => return None,
        };
        let value = cur.take_value();
        if !cur.eat(quote) {
            return None;
        }
        attrs.push((key.to_string(), value.to_string()));
    }
}

/// `[name]text[/name2]`, returning the pieces for the caller to judge.
fn parse_named_pair<'a>(cur: &mut Cursor<'a>) -> Option<(&'a str, &'a str, &'a str)> {
    if !cur.eat(b'[') {
        return None;
    }
    let open = cur.take_lowercase();
    if open.is_empty() || !cur.eat(b']') {
        return None;
    }
    let text = cur.take_until(b'[');
    if !cur.eat(b'[') || !cur.eat(b'/') {
        return None;
    }
    let close = cur.take_lowercase();
    if close.is_empty() || !cur.eat(b']') {
        return None;
    }
    Some((open, text, close))
}

/// `[<name> attr="v" ...]text[/<name>]` with a fixed element name.
fn parse_fixed_element(cur: &mut Cursor, name: &str) -> Option<SubElement> {
    if !cur.eat(b'[') || !cur.eat_str(name) {
        return None;
    }
    let attributes = parse_attr_list(cur)?;
    let text = cur.take_until(b'[').to_string();
    if !cur.eat(b'[') || !cur.eat(b'/') || !cur.eat_str(name) || !cur.eat(b']') {
        return None;
    }
    Some(SubElement {
        name: name.to_string(),
        attributes,
        text,
    })
}

// ─── Cursor ──────────────────────────────────────────────────────────────────

/// Byte cursor over page text. The grammar is pure ASCII, so every
/// position the cursor can stop at is a UTF-8 character boundary.
struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.src.as_bytes().get(self.pos + offset).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_str(&mut self, s: &str) -> bool {
        if self.src.as_bytes()[self.pos..].starts_with(s.as_bytes()) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// `[a-z]*` starting at the cursor.
    fn take_lowercase(&mut self) -> &'a str {
        let start = self.pos;
        while matches!(self.peek(), Some(b'a'..=b'z')) {
            self.pos += 1;
        }
        &self.src[start..self.pos]
    }

    /// Everything up to (not including) `stop` or end of input.
    fn take_until(&mut self, stop: u8) -> &'a str {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b != stop) {
            self.pos += 1;
        }
        &self.src[start..self.pos]
    }

    /// Attribute value text: everything up to the first quote of either
    /// style. The caller checks that it is the matching one.
    fn take_value(&mut self) -> &'a str {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b != b'"' && b != b'\'') {
            self.pos += 1;
        }
        &self.src[start..self.pos]
    }
}
