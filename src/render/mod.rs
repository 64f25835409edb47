//! Fragment templates
//!
//! Pure item-to-markup functions. Every server-provided string is
//! escaped here, at the template boundary; nothing upstream is trusted.

use crate::content::{NewsPost, Title};
use crate::helpers::{excerpt, html_escape};

/// Display characters a news excerpt keeps before the ellipsis
pub const EXCERPT_CHARS: usize = 100;

/// Render one title card (dramas / ongoing series)
pub fn title_card(item: &Title) -> String {
    let name = html_escape(&item.name);
    let key = html_escape(&item.filter_key());
    let link = html_escape(&item.channel_link);
    let poster = match &item.poster_image {
        Some(src) => format!(
            r#"<img src="{}" alt="{}" style="width:100%;height:100%;object-fit:cover">"#,
            html_escape(src),
            name
        ),
        None => "POSTER IMAGE".to_string(),
    };

    format!(
        r#"<div class="card" data-title="{key}">
  <div class="poster">{poster}</div>
  <div class="content">
    <h3 class="title">{name}</h3>
    <a href="{link}" target="_blank" class="download-btn">download now</a>
  </div>
</div>"#
    )
}

/// Render one news card
pub fn news_card(item: &NewsPost) -> String {
    let title = html_escape(&item.title);
    let body = html_escape(&excerpt(&item.content, EXCERPT_CHARS));
    let image = match &item.image {
        Some(src) => format!(
            r#"<img src="{}" alt="{}">"#,
            html_escape(src),
            title
        ),
        None => "NEWS IMAGE".to_string(),
    };

    format!(
        r#"<div class="news-card">
  <div class="news-image">{image}</div>
  <div class="news-content">
    <h3 class="news-title">{title}</h3>
    <p class="news-excerpt">{body}</p>
    <a href="#" class="read-more">read more →</a>
  </div>
</div>"#
    )
}

/// Concatenate one fragment per item, preserving input order
pub fn render_list<T>(items: &[T], render_one: impl Fn(&T) -> String) -> String {
    items
        .iter()
        .map(render_one)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(name: &str, poster: Option<&str>, link: &str) -> Title {
        Title {
            name: name.to_string(),
            poster_image: poster.map(str::to_string),
            channel_link: link.to_string(),
        }
    }

    fn news(title: &str, image: Option<&str>, content: &str) -> NewsPost {
        NewsPost {
            title: title.to_string(),
            image: image.map(str::to_string),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_title_card_shape() {
        let card = title_card(&title(
            "Drama A",
            Some("http://x/a.jpg"),
            "http://t.me/a",
        ));
        let expected = r#"<div class="card" data-title="drama a">
  <div class="poster"><img src="http://x/a.jpg" alt="Drama A" style="width:100%;height:100%;object-fit:cover"></div>
  <div class="content">
    <h3 class="title">Drama A</h3>
    <a href="http://t.me/a" target="_blank" class="download-btn">download now</a>
  </div>
</div>"#;
        assert_eq!(card, expected);
    }

    #[test]
    fn test_title_card_placeholder_without_poster() {
        let card = title_card(&title("Drama B", None, "http://t.me/b"));
        assert!(card.contains(r#"<div class="poster">POSTER IMAGE</div>"#));
        assert!(!card.contains("<img"));
    }

    #[test]
    fn test_title_card_escapes_untrusted_text() {
        let card = title_card(&title(
            r#"<script>alert("x")</script>"#,
            None,
            r#"http://t.me/a"onclick="evil()"#,
        ));
        assert!(!card.contains("<script>"));
        assert!(card.contains("&lt;script&gt;"));
        assert!(card.contains(r#"href="http://t.me/a&quot;onclick=&quot;evil()""#));
    }

    #[test]
    fn test_filter_key_is_lowercased_unicode() {
        let card = title_card(&title("Königin DRAMA", None, "http://t.me/k"));
        assert!(card.contains(r#"data-title="königin drama""#));
    }

    #[test]
    fn test_news_card_excerpt_truncation() {
        let card = news_card(&news("Launch", None, &"a".repeat(150)));
        assert!(card.contains(&format!(
            r#"<p class="news-excerpt">{}...</p>"#,
            "a".repeat(100)
        )));
    }

    #[test]
    fn test_news_card_short_content_unmodified() {
        let card = news_card(&news("Launch", None, "short body"));
        assert!(card.contains(r#"<p class="news-excerpt">short body</p>"#));
        assert!(!card.contains("..."));
    }

    #[test]
    fn test_news_card_image_toggle() {
        let with = news_card(&news("N", Some("http://x/n.jpg"), "body"));
        assert!(with.contains(r#"<img src="http://x/n.jpg" alt="N">"#));

        let without = news_card(&news("N", None, "body"));
        assert!(without.contains(r#"<div class="news-image">NEWS IMAGE</div>"#));
    }

    #[test]
    fn test_render_list_order_and_count() {
        let items = vec![
            title("First", None, "http://t.me/1"),
            title("Second", None, "http://t.me/2"),
        ];
        let out = render_list(&items, title_card);
        assert_eq!(out.matches(r#"<div class="card""#).count(), 2);
        let first = out.find("First").unwrap();
        let second = out.find("Second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_render_list_is_deterministic() {
        let items = vec![title("Same", None, "http://t.me/s")];
        assert_eq!(
            render_list(&items, title_card),
            render_list(&items, title_card)
        );
    }

    #[test]
    fn test_render_list_empty_is_empty() {
        let items: Vec<Title> = Vec::new();
        assert_eq!(render_list(&items, title_card), "");
    }
}
