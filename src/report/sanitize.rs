//! HTML sanitization for breach descriptions.
//!
//! Descriptions arrive as HTML from a third party. Only a small inline
//! formatting subset survives:
//!
//! - `a` (with an `http`, `https` or `mailto` `href` only), `b`, `strong`,
//!   `i`, `em`, `u`, `br`, `p`, `code`
//! - every other attribute is dropped
//! - `script`, `style` and other active or raw-text elements are removed
//!   together with their content
//! - any other tag is removed, its text content kept
//!
//! Output is well formed: unclosed allowed tags are closed at the end.

/// Tags kept in the output.
const ALLOWED_TAGS: &[&str] = &["a", "b", "strong", "i", "em", "u", "br", "p", "code"];

/// Elements dropped together with everything inside them.
const DROPPED_ELEMENTS: &[&str] = &[
    "script", "style", "iframe", "object", "embed", "template", "noscript", "textarea", "title",
    "svg", "math", "frameset",
];

const LINK_REL: &str = "noopener noreferrer nofollow";

/// Sanitize untrusted HTML down to the safe inline subset.
pub fn sanitize_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut open: Vec<&'static str> = Vec::new();
    let mut rest = input;

    while let Some(lt) = rest.find('<') {
        push_text(&mut out, &rest[..lt]);
        let markup = &rest[lt..];

        match parse_markup(markup) {
            Markup::Text => {
                out.push_str("&lt;");
                rest = &markup[1..];
            }
            Markup::Ignored { len } => rest = &markup[len..],
            Markup::Unterminated => rest = "",
            Markup::Tag(tag) => {
                rest = &markup[tag.len..];
                if tag.closing {
                    close_tag(&mut out, &mut open, &tag.name);
                } else if let Some(&name) = DROPPED_ELEMENTS.iter().find(|n| **n == tag.name) {
                    if !tag.self_closing {
                        rest = skip_element(rest, name);
                    }
                } else if let Some(&name) = ALLOWED_TAGS.iter().find(|n| **n == tag.name) {
                    open_tag(&mut out, &mut open, name, &tag.attrs);
                }
            }
        }
    }
    push_text(&mut out, rest);

    while let Some(name) = open.pop() {
        push_close(&mut out, name);
    }
    out
}

/// Plain-text projection of sanitized HTML for terminal display.
///
/// Paragraph and line breaks become newlines, tags are removed and the
/// common entities are decoded.
pub fn to_plain_text(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(lt) = rest.find('<') {
        text.push_str(&rest[..lt]);
        let markup = &rest[lt..];
        match parse_markup(markup) {
            Markup::Tag(tag) => {
                if tag.name == "br" || (tag.name == "p" && tag.closing) {
                    text.push('\n');
                }
                rest = &markup[tag.len..];
            }
            Markup::Ignored { len } => rest = &markup[len..],
            Markup::Text => {
                text.push('<');
                rest = &markup[1..];
            }
            Markup::Unterminated => rest = "",
        }
    }
    text.push_str(rest);

    let decoded = decode_entities(&text);
    decoded
        .lines()
        .map(|line| strip_control(line.trim()))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop control characters (C0, DEL, C1) so remote text cannot drive the
/// terminal. Tabs become spaces.
pub fn strip_control(s: &str) -> String {
    s.chars()
        .filter_map(|c| match c {
            '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

struct Tag {
    name: String,
    closing: bool,
    self_closing: bool,
    attrs: Vec<(String, String)>,
    /// Bytes consumed, including `<` and `>`.
    len: usize,
}

enum Markup {
    /// A `<` that does not start a tag.
    Text,
    /// Comment, doctype or processing instruction.
    Ignored { len: usize },
    /// A tag with no closing `>`; the rest of the input is dropped.
    Unterminated,
    Tag(Tag),
}

/// Parse the markup at the start of `s`, which begins with `<`.
fn parse_markup(s: &str) -> Markup {
    let body = &s[1..];

    if body.starts_with("!--") {
        return match body[3..].find("-->") {
            Some(end) => Markup::Ignored { len: 1 + 3 + end + 3 },
            None => Markup::Unterminated,
        };
    }
    if body.starts_with('!') || body.starts_with('?') {
        return match body.find('>') {
            Some(end) => Markup::Ignored { len: 1 + end + 1 },
            None => Markup::Unterminated,
        };
    }

    let (closing, after_slash) = match body.strip_prefix('/') {
        Some(stripped) => (true, stripped),
        None => (false, body),
    };

    let name_len = after_slash
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '-'))
        .map_or(after_slash.len(), |(i, _)| i);
    if name_len == 0 || !after_slash.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Markup::Text;
    }
    let name = after_slash[..name_len].to_ascii_lowercase();

    let prefix_len = 1 + usize::from(closing) + name_len;
    match parse_attributes(&s[prefix_len..]) {
        Some((attrs, self_closing, attrs_len)) => Markup::Tag(Tag {
            name,
            closing,
            self_closing,
            attrs,
            len: prefix_len + attrs_len,
        }),
        None => Markup::Unterminated,
    }
}

/// Parse attributes up to and including the closing `>`.
///
/// Returns the attributes (names lowercased), whether the tag ended in
/// `/>`, and the number of bytes consumed.
fn parse_attributes(s: &str) -> Option<(Vec<(String, String)>, bool, usize)> {
    let bytes = s.as_bytes();
    let mut attrs = Vec::new();
    let mut i = 0;
    let mut self_closing = false;

    loop {
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        match bytes.get(i)? {
            b'>' => return Some((attrs, self_closing, i + 1)),
            b'/' => {
                self_closing = true;
                i += 1;
                continue;
            }
            _ => self_closing = false,
        }

        let name_start = i;
        while i < bytes.len()
            && !matches!(bytes[i], b'=' | b'>' | b'/')
            && !bytes[i].is_ascii_whitespace()
        {
            i += 1;
        }
        let name = s[name_start..i].to_ascii_lowercase();

        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }

        let mut value = String::new();
        if bytes.get(i) == Some(&b'=') {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            match bytes.get(i)? {
                quote @ (b'"' | b'\'') => {
                    let start = i + 1;
                    let end = start + s[start..].find(char::from(*quote))?;
                    value = s[start..end].to_string();
                    i = end + 1;
                }
                _ => {
                    let start = i;
                    while i < bytes.len() && bytes[i] != b'>' && !bytes[i].is_ascii_whitespace() {
                        i += 1;
                    }
                    value = s[start..i].to_string();
                }
            }
        }

        if !name.is_empty() {
            attrs.push((name, value));
        }
    }
}

/// Skip past the closing tag of a dropped element.
fn skip_element<'a>(rest: &'a str, name: &str) -> &'a str {
    let lower = rest.to_ascii_lowercase();
    let needle = format!("</{}", name);
    let mut from = 0;

    while let Some(pos) = lower[from..].find(&needle) {
        let start = from + pos;
        if let Markup::Tag(tag) = parse_markup(&rest[start..]) {
            if tag.closing && tag.name == name {
                return &rest[start + tag.len..];
            }
        }
        from = start + needle.len();
    }
    ""
}

fn open_tag(
    out: &mut String,
    open: &mut Vec<&'static str>,
    name: &'static str,
    attrs: &[(String, String)],
) {
    match name {
        "br" => out.push_str("<br>"),
        "a" => {
            let href = attrs
                .iter()
                .find(|(attr, _)| attr == "href")
                .map(|(_, value)| value.replace("&amp;", "&"))
                .filter(|value| is_safe_url(value));
            match href {
                Some(href) => {
                    out.push_str("<a href=\"");
                    push_escaped(out, href.trim());
                    out.push_str("\" rel=\"");
                    out.push_str(LINK_REL);
                    out.push_str("\">");
                }
                None => out.push_str("<a>"),
            }
            open.push(name);
        }
        _ => {
            out.push('<');
            out.push_str(name);
            out.push('>');
            open.push(name);
        }
    }
}

fn close_tag(out: &mut String, open: &mut Vec<&'static str>, name: &str) {
    let Some(pos) = open.iter().rposition(|n| *n == name) else {
        return;
    };
    for name in open.drain(pos..).rev() {
        push_close(out, name);
    }
}

fn push_close(out: &mut String, name: &str) {
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn is_safe_url(url: &str) -> bool {
    let url = url.trim().to_ascii_lowercase();
    ["http://", "https://", "mailto:"]
        .iter()
        .any(|scheme| url.starts_with(scheme))
}

/// Escape text content, leaving well-formed entities untouched.
fn push_text(out: &mut String, text: &str) {
    for (i, c) in text.char_indices() {
        match c {
            '&' if entity_len(&text[i..]).is_some() => out.push('&'),
            '\n' | '\t' => out.push(c),
            c if c.is_control() => {}
            _ => push_escaped_char(out, c),
        }
    }
}

fn push_escaped(out: &mut String, s: &str) {
    for c in s.chars() {
        push_escaped_char(out, c);
    }
}

fn push_escaped_char(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#x27;"),
        _ => out.push(c),
    }
}

/// Length of the entity at the start of `s` (`&name;`, `&#123;`, `&#x1f;`).
fn entity_len(s: &str) -> Option<usize> {
    let body = s.strip_prefix('&')?;
    let end = body.find(';')?;
    let name = &body[..end];
    let valid = match name.strip_prefix('#') {
        Some(num) => match num.strip_prefix(['x', 'X']) {
            Some(hex) => !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()),
            None => !num.is_empty() && num.chars().all(|c| c.is_ascii_digit()),
        },
        None => {
            !name.is_empty()
                && name.len() <= 32
                && name.chars().all(|c| c.is_ascii_alphanumeric())
        }
    };
    valid.then_some(end + 2)
}

fn decode_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let candidate = &rest[amp..];
        let decoded = entity_len(candidate)
            .and_then(|len| decode_entity(&candidate[1..len - 1]).map(|c| (c, len)));
        match decoded {
            Some((c, len)) => {
                if c == '\n' || !c.is_control() {
                    out.push(c);
                }
                rest = &candidate[len..];
            }
            None => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse().ok()?,
        };
        return char::from_u32(code);
    }
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        "ndash" => Some('–'),
        "mdash" => Some('—'),
        "hellip" => Some('…'),
        "rsquo" => Some('’'),
        "lsquo" => Some('‘'),
        "rdquo" => Some('”'),
        "ldquo" => Some('“'),
        _ => None,
    }
}
