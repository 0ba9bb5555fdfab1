use chrono::{DateTime, FixedOffset, Utc};
use pulldown_cmark::{html, Options, Parser};

const JST_OFFSET_SECS: i32 = 9 * 60 * 60;
const DATE_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Converts post markdown to HTML that is safe to inject into the page.
pub fn markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options);

    let mut unsafe_html = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut unsafe_html, parser);

    ammonia::Builder::default()
        .add_tags(&["input"])
        .add_tag_attributes("input", &["type", "checked", "disabled"])
        .add_tag_attributes("code", &["class"])
        .clean(&unsafe_html)
        .to_string()
}

/// Japan Standard Time, two-digit fields.
pub fn format_jst(at: DateTime<Utc>) -> String {
    match FixedOffset::east_opt(JST_OFFSET_SECS) {
        Some(jst) => at.with_timezone(&jst).format(DATE_FORMAT).to_string(),
        None => at.format(DATE_FORMAT).to_string(),
    }
}
