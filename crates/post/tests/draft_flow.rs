use std::path::PathBuf;

use blogkit_common::SiteConfig;
use blogkit_post::asset::{AssetKind, Attachment};
use blogkit_post::{ActionOutcome, DraftAction, DraftSession, LinkTitles, PostOptions};
use chrono::{DateTime, FixedOffset, TimeZone};

fn now() -> DateTime<FixedOffset> {
    FixedOffset::west_opt(5 * 3600)
        .unwrap()
        .with_ymd_and_hms(2023, 11, 30, 22, 15, 0)
        .unwrap()
}

#[test]
fn category_folder_is_used_when_present() {
    let site_root = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(site_root.path().join("travel").join("_posts")).unwrap();

    let mut session = DraftSession::new(PostOptions {
        site: SiteConfig::default(),
        site_root: site_root.path().to_path_buf(),
        link_titles: LinkTitles::new(),
    });
    session
        .submit("Kyoto\n===\n+food +travel\n===\nTemples.", None, "carol", now())
        .unwrap();

    let ActionOutcome::Published(published) = session.apply(DraftAction::Post).unwrap() else {
        panic!("expected a published post");
    };
    assert_eq!(
        published.post.path,
        PathBuf::from("travel/_posts/2023-11-30-kyoto.md")
    );
    assert!(published
        .post
        .content
        .contains("categories: food, travel\nauthor: carol\nlayout: post\ndate: 2023-11-30 22:15:00 -05:00\n"));
}

#[test]
fn generated_body_renders_through_embed_tags() {
    let mut titles = LinkTitles::new();
    titles.insert("https://example.com/docs".to_string(), "Docs".to_string());

    let mut session = DraftSession::new(PostOptions {
        site: SiteConfig {
            extras_enabled: true,
            ..SiteConfig::default()
        },
        site_root: PathBuf::from("/nonexistent-site-root"),
        link_titles: titles,
    });

    let message = "Demo\n===\n#video\n===\nIntro https://youtu.be/dQw4w9WgXcQ see https://example.com/docs";
    session
        .submit(message, Some(Attachment::new(AssetKind::Video, vec![0, 1])), "dan", now())
        .unwrap();
    let content = session.content().unwrap().to_string();

    assert!(content.contains("{% youtube dQw4w9WgXcQ %}"));
    assert!(content.contains("[🌐 Docs](https://example.com/docs)"));
    assert!(content.contains("{% video demo-1.mp4 %}"));

    let body = content.splitn(3, "---\n").nth(2).unwrap();
    let html = blogkit_tags::render_str(body, &liquid::Object::new()).unwrap();
    assert!(html.contains(r#"src="https://www.youtube.com/embed/dQw4w9WgXcQ""#));
    assert!(html.contains(r#"<source src="/assets/demo-1.mp4" type="video/mp4">"#));
}
