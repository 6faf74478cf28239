//! CSV rendering for crawled posts.
//!
//! The column layout and quoting rules are fixed by the export format:
//! free-text fields are always double-quoted with embedded quotes
//! doubled, counts stay bare numerals, and a missing topic becomes the
//! bare literal `无`.

use std::fmt;

use chrono::{Local, NaiveDate, TimeZone};

use crate::post::Post;

/// Byte-order marker written ahead of the document so spreadsheet apps
/// pick the right character set on open.
pub const BOM: &str = "\u{FEFF}";

/// A fully rendered CSV document, header plus one row per post.
///
/// The byte-order marker is not part of the document text; it is
/// prepended by [`CsvDocument::to_bom_bytes`] when the file is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDocument(String);

impl CsvDocument {
    /// Render `posts` in retrieval order, timestamps in the viewer's
    /// local timezone.
    pub fn encode(posts: &[Post], include_images: bool) -> Self {
        Self::encode_in(posts, include_images, &Local)
    }

    /// Render with an explicit timezone for the 发布时间 column.
    pub fn encode_in<Tz: TimeZone>(posts: &[Post], include_images: bool, tz: &Tz) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        let mut headers = vec!["发布时间", "内容", "频道", "点赞数", "评论数", "转发数"];
        if include_images {
            headers.push("图片链接");
        }

        let mut lines = Vec::with_capacity(posts.len() + 1);
        lines.push(headers.join(","));
        for post in posts {
            lines.push(encode_row(post, include_images, tz));
        }

        Self(lines.join("\n"))
    }

    /// The document text, without the byte-order marker.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The document bytes with the byte-order marker prepended, ready
    /// to hand to the file-save step.
    pub fn to_bom_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(BOM.len() + self.0.len());
        bytes.extend_from_slice(BOM.as_bytes());
        bytes.extend_from_slice(self.0.as_bytes());
        bytes
    }
}

fn encode_row<Tz: TimeZone>(post: &Post, include_images: bool, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    let mut fields = vec![
        post.created_at
            .with_timezone(tz)
            .format("%Y/%m/%d %H:%M:%S")
            .to_string(),
        quote(post.content.as_deref().unwrap_or("")),
        match &post.topic {
            Some(topic) => quote(&topic.content),
            None => "无".to_string(),
        },
        post.like_count.to_string(),
        post.comment_count.to_string(),
        post.repost_count.to_string(),
    ];

    if include_images {
        let urls: Vec<&str> = post.pictures.iter().map(|p| p.pic_url.as_str()).collect();
        fields.push(quote(&urls.join(" , ")));
    }

    fields.join(",")
}

/// Quote a field, doubling embedded quotes.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Filename for a finished export: `{author}_{YYYY}{MM}{DD}.csv`.
pub fn export_filename(author: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", author, date.format("%Y%m%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    use crate::post::Post;

    fn post(value: serde_json::Value) -> Post {
        serde_json::from_value(value).unwrap()
    }

    fn simple_post(content: &str) -> Post {
        post(json!({
            "createdAt": "2024-03-05T06:30:00Z",
            "content": content,
            "likeCount": 5,
            "commentCount": 2,
            "repostCount": 1
        }))
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let doc = CsvDocument::encode_in(&[simple_post(r#"He said "hi""#)], false, &Utc);
        let row = doc.as_str().lines().nth(1).unwrap();
        assert!(row.contains(r#""He said ""hi""""#));

        // A standard CSV unescape recovers the original string.
        let field = r#""He said ""hi""""#;
        let unescaped = field[1..field.len() - 1].replace("\"\"", "\"");
        assert_eq!(unescaped, r#"He said "hi""#);
    }

    #[test]
    fn row_field_counts_match_header() {
        let posts = [simple_post("one"), simple_post("two")];

        let without = CsvDocument::encode_in(&posts, false, &Utc);
        for line in without.as_str().lines() {
            assert_eq!(line.split(',').count(), 6, "line: {line}");
        }

        let with = CsvDocument::encode_in(&posts, true, &Utc);
        for line in with.as_str().lines() {
            assert_eq!(line.split(',').count(), 7, "line: {line}");
        }
        assert!(with.as_str().starts_with("发布时间,内容,频道,点赞数,评论数,转发数,图片链接"));
    }

    #[test]
    fn timestamp_renders_24_hour_in_requested_timezone() {
        let doc = CsvDocument::encode_in(&[simple_post("x")], false, &Utc);
        let row = doc.as_str().lines().nth(1).unwrap();
        assert!(row.starts_with("2024/03/05 06:30:00,"));
    }

    #[test]
    fn missing_content_becomes_empty_quoted_field() {
        let bare = post(json!({"createdAt": "2024-03-05T18:30:00Z"}));
        let doc = CsvDocument::encode_in(&[bare], false, &Utc);
        let row = doc.as_str().lines().nth(1).unwrap();
        assert_eq!(row, r#"2024/03/05 18:30:00,"",无,0,0,0"#);
    }

    #[test]
    fn topic_is_quoted_when_present() {
        let with_topic = post(json!({
            "createdAt": "2024-03-05T06:30:00Z",
            "topic": {"content": "日常"}
        }));
        let doc = CsvDocument::encode_in(&[with_topic], false, &Utc);
        assert!(doc.as_str().lines().nth(1).unwrap().contains(r#","日常","#));
    }

    #[test]
    fn image_urls_join_into_one_quoted_field() {
        let with_pics = post(json!({
            "createdAt": "2024-03-05T06:30:00Z",
            "pictures": [
                {"picUrl": "https://cdn.example/a.jpg"},
                {"picUrl": "https://cdn.example/b.jpg"}
            ]
        }));
        let doc = CsvDocument::encode_in(&[with_pics], true, &Utc);
        let row = doc.as_str().lines().nth(1).unwrap();
        assert!(row.ends_with(r#""https://cdn.example/a.jpg , https://cdn.example/b.jpg""#));

        let without_pics = post(json!({"createdAt": "2024-03-05T06:30:00Z"}));
        let doc = CsvDocument::encode_in(&[without_pics], true, &Utc);
        assert!(doc.as_str().lines().nth(1).unwrap().ends_with(r#","""#));
    }

    #[test]
    fn bom_is_prepended_on_save_only() {
        let doc = CsvDocument::encode_in(&[], false, &Utc);
        assert!(!doc.as_str().starts_with(BOM));

        let bytes = doc.to_bom_bytes();
        assert_eq!(&bytes[..3], [0xEF, 0xBB, 0xBF]);
    }

    #[test]
    fn filename_is_author_and_padded_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(export_filename("Bob", date), "Bob_20240305.csv");
    }
}
