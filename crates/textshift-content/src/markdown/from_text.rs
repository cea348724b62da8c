//! Plain text → Markdown structuring.
//!
//! Plain text carries no markup, so structure is inferred from layout:
//! blank lines separate blocks, and each block becomes a list, a heading,
//! or a paragraph. The rules are deliberately conservative; anything that
//! does not clearly look like a list or a title stays a paragraph.
//!
//! The output is shaped so that [`markdown_to_text`](super::markdown_to_text)
//! gives back the original text for input built from these constructs.

use std::sync::LazyLock;

use regex::Regex;

static BULLET_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)[•·\-*–]\s+(.*)$").expect("Invalid bullet item regex")
});

static ORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)(\d{1,9})[.)]\s+(.*)$").expect("Invalid ordered item regex")
});

static ORDERED_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,9})[.)](\s|$)").expect("Invalid ordered marker regex")
});

static BARE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s<>]+").expect("Invalid URL regex"));

/// Longest single line (in characters) treated as a heading.
const MAX_HEADING_CHARS: usize = 60;

/// Characters that mark a line as a sentence rather than a title.
const SENTENCE_END: [char; 6] = ['.', ',', ';', ':', '!', '?'];

/// Punctuation left outside an autolink when it trails a URL.
const URL_TRAILING: [char; 9] = ['.', ',', ';', ':', '!', '?', ')', '\'', '"'];

/// ASCII punctuation that can open inline markup anywhere in a line.
const INLINE_MARKUP: [char; 10] = ['\\', '`', '*', '_', '[', ']', '<', '>', '~', '|'];

/// Line-start characters that open a list, a setext underline, or a rule.
const BLOCK_START: [char; 3] = ['-', '+', '='];

/// Convert plain text to Markdown.
///
/// Blocks are separated by blank lines and rendered as:
/// - **Bullet list**: every line starts with `•`, `-`, `*`, `–` or `·` and
///   whitespace; rendered as `- item`
/// - **Ordered list**: every line starts with `N.` or `N)` and whitespace;
///   rendered as `N. item`
/// - **Heading**: a lone short line without closing punctuation, in a text
///   with more than one block; the first gets `#`, later ones `##`
/// - **Paragraph**: anything else, line breaks kept
///
/// Bare `http(s)://` URLs become `<url>` autolinks. Characters that Markdown
/// would read as markup are backslash-escaped, so the text itself survives
/// the trip through a Markdown renderer.
///
/// # Example
///
/// ```rust
/// use textshift_content::markdown::text_to_markdown;
///
/// let text = "Shopping\n\n• milk\n• eggs\n\nSee https://example.com.";
/// assert_eq!(
///     text_to_markdown(text),
///     "# Shopping\n\n- milk\n- eggs\n\nSee <https://example.com>."
/// );
/// ```
pub fn text_to_markdown(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    let blocks = split_blocks(&normalized);
    let multi_block = blocks.len() > 1;

    let mut headings = 0usize;
    let mut rendered = Vec::with_capacity(blocks.len());

    for block in &blocks {
        if let Some(list) = render_list(block) {
            rendered.push(list);
        } else if multi_block && looks_like_heading(block) {
            let marker = if headings == 0 { "#" } else { "##" };
            headings += 1;
            rendered.push(format!("{marker} {}", render_line(block[0].trim())));
        } else {
            rendered.push(render_paragraph(block));
        }
    }

    let markdown = rendered.join("\n\n");
    log::debug!(
        "text_to_markdown: {} blocks, {} headings",
        blocks.len(),
        headings
    );
    markdown
}

/// Group non-blank lines into blocks separated by blank lines.
fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

/// One parsed list line.
struct ListLine<'a> {
    columns: usize,
    marker: String,
    content: &'a str,
}

fn parse_list_line(line: &str) -> Option<ListLine<'_>> {
    if let Some(caps) = BULLET_ITEM.captures(line) {
        let content = caps.get(2).map_or("", |m| m.as_str());
        Some(ListLine {
            columns: indent_columns(&caps[1]),
            marker: "- ".to_string(),
            content,
        })
    } else if let Some(caps) = ORDERED_ITEM.captures(line) {
        let content = caps.get(3).map_or("", |m| m.as_str());
        Some(ListLine {
            columns: indent_columns(&caps[1]),
            marker: format!("{}. ", &caps[2]),
            content,
        })
    } else {
        None
    }
}

/// Render a block as a list if every line is a list item.
///
/// Nesting is measured from the shallowest item, two columns per level, and
/// a level never jumps more than one past its parent. Nested items are
/// indented to their parent's content column.
fn render_list(block: &[&str]) -> Option<String> {
    let lines = block
        .iter()
        .map(|line| parse_list_line(line))
        .collect::<Option<Vec<_>>>()?;
    let base = lines.iter().map(|l| l.columns).min().unwrap_or(0);

    // Marker width of the current item at each open level
    let mut open: Vec<usize> = Vec::new();
    let mut items = Vec::with_capacity(lines.len());

    for line in &lines {
        let level = ((line.columns - base) / 2).min(open.len());
        open.truncate(level);
        let indent: usize = open.iter().sum();
        items.push(format!(
            "{}{}{}",
            " ".repeat(indent),
            line.marker,
            render_line(line.content.trim_end())
        ));
        open.push(line.marker.len());
    }

    Some(items.join("\n"))
}

/// Width of leading whitespace in columns, a tab counting as four.
fn indent_columns(leading: &str) -> usize {
    leading
        .chars()
        .map(|c| if c == '\t' { 4 } else { 1 })
        .sum()
}

fn looks_like_heading(block: &[&str]) -> bool {
    let [line] = block else {
        return false;
    };
    let line = line.trim();
    !line.is_empty()
        && line.chars().count() <= MAX_HEADING_CHARS
        && !line.ends_with(SENTENCE_END)
}

fn render_paragraph(block: &[&str]) -> String {
    block
        .iter()
        .map(|line| render_line(line.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape and autolink one line, then guard its first character.
fn render_line(line: &str) -> String {
    let rendered = render_inline(line);
    if rendered.starts_with(BLOCK_START) {
        return format!("\\{rendered}");
    }
    match ORDERED_MARKER.captures(&rendered) {
        Some(caps) => {
            let digits = caps[1].len();
            format!("{}\\{}", &rendered[..digits], &rendered[digits..])
        }
        None => rendered,
    }
}

/// Wrap bare URLs in `<...>` and escape markup in the text around them.
fn render_inline(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 8);
    let mut last = 0;

    for found in BARE_URL.find_iter(line) {
        let url = found.as_str().trim_end_matches(URL_TRAILING);
        if url.ends_with("://") {
            continue;
        }
        escape_markup(&line[last..found.start()], &mut out);
        out.push('<');
        out.push_str(url);
        out.push('>');
        last = found.start() + url.len();
    }

    escape_markup(&line[last..], &mut out);
    out
}

/// Backslash-escape inline markup characters.
///
/// `#` is escaped where it could open or close a heading, `&` where it could
/// start an entity reference.
fn escape_markup(text: &str, out: &mut String) {
    let mut prev: Option<char> = None;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let escape = match c {
            '#' => prev.is_none_or(char::is_whitespace),
            '&' => chars
                .peek()
                .is_some_and(|next| next.is_ascii_alphanumeric() || *next == '#'),
            _ => INLINE_MARKUP.contains(&c),
        };
        if escape {
            out.push('\\');
        }
        out.push(c);
        prev = Some(c);
    }
}

// ============================================================================
// Tests
// ============================================================================
