use std::io::{self, Write};

use tagcloud_core::config::{LOCAL_STYLESHEET, REMOTE_STYLESHEET_URL};
use tagcloud_core::{font_size, CountRange, WordCount, WordLimit};

/// Writes the complete tag cloud page: header, one span per word, footer.
///
/// `words` is expected in display order. `input_label` only feeds the title.
pub fn write_tag_cloud_page<W: Write>(
    out: &mut W,
    input_label: &str,
    limit: WordLimit,
    words: &[WordCount],
) -> io::Result<()> {
    write_header(out, input_label, limit)?;
    write_cloud(out, words)?;
    write_footer(out)
}

/// Renders the page into a string.
pub fn render_tag_cloud_page(input_label: &str, limit: WordLimit, words: &[WordCount]) -> String {
    let mut buffer = Vec::new();
    // io::Write for Vec<u8> never returns an error.
    write_tag_cloud_page(&mut buffer, input_label, limit, words)
        .expect("writing into a Vec cannot fail");
    // Every byte comes from &str arguments and format strings.
    String::from_utf8(buffer).expect("page is valid UTF-8")
}

pub fn write_header<W: Write>(out: &mut W, input_label: &str, limit: WordLimit) -> io::Result<()> {
    // The input path is written as typed, without escaping.
    let title = format!("Top {limit} Words in {input_label}");

    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\" />")?;
    writeln!(out, "<title>{title}</title>")?;
    writeln!(
        out,
        "<link href=\"{REMOTE_STYLESHEET_URL}\" rel=\"stylesheet\" type=\"text/css\">"
    )?;
    writeln!(
        out,
        "<link href=\"{LOCAL_STYLESHEET}\" rel=\"stylesheet\" type=\"text/css\">"
    )?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h2>{title}</h2>")?;
    writeln!(out, "<hr>")?;
    writeln!(out, "<div class=\"cdiv\">")?;
    writeln!(out, "<p class=\"cbox\">")
}

/// One span per word; sizes are relative to the counts in `words` only.
/// Writes nothing for an empty list.
pub fn write_cloud<W: Write>(out: &mut W, words: &[WordCount]) -> io::Result<()> {
    let Some(range) = CountRange::of(words) else {
        return Ok(());
    };
    for WordCount { word, count } in words {
        let size = font_size(*count, range);
        writeln!(
            out,
            "<span style=\"cursor:default\" class=\"f{size}\" title=\"count: {count}\">{word}</span>"
        )?;
    }
    Ok(())
}

pub fn write_footer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "</p>")?;
    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}
