use blogkit_tags::{render_str, VideoEmbed, YouTubeEmbed};
use proptest::prelude::*;

fn iframe_src(html: &str) -> Option<&str> {
    let start = html.find("src=\"")? + "src=\"".len();
    let end = start + html[start..].find('"')?;
    Some(&html[start..end])
}

fn render(template: &str) -> String {
    render_str(template, &liquid::Object::new()).expect("template should render")
}

proptest! {
    #[test]
    fn video_source_matches_trimmed_argument(
        arg in "[ \t]{0,3}[a-zA-Z0-9_./ -]{0,40}[ \t]{0,3}"
    ) {
        let html = VideoEmbed::new(&arg).to_html();
        let needle = format!("<source src=\"/assets/{}\"", arg.trim());
        prop_assert_eq!(html.matches(&needle).count(), 1);
    }

    #[test]
    fn youtube_src_matches_trimmed_argument(
        arg in "[ \t\n]{0,3}[a-zA-Z0-9_-]{0,20}[ \t\n]{0,3}"
    ) {
        let html = YouTubeEmbed::new(&arg).to_html();
        let expected = format!("https://www.youtube.com/embed/{}", arg.trim());
        prop_assert_eq!(iframe_src(&html), Some(expected.as_str()));
    }

    #[test]
    fn rendering_is_idempotent(arg in ".{0,64}") {
        prop_assert_eq!(VideoEmbed::new(&arg).to_html(), VideoEmbed::new(&arg).to_html());
        prop_assert_eq!(YouTubeEmbed::new(&arg).to_html(), YouTubeEmbed::new(&arg).to_html());
    }

    #[test]
    fn rendered_video_tag_substitutes_trimmed_path(
        arg in "[ \t]{0,3}[a-zA-Z0-9_/() .-]{0,30}[ \t]{0,3}"
    ) {
        let html = render(&format!("{{% video {arg} %}}"));
        let needle = format!("<source src=\"/assets/{}\"", arg.trim());
        prop_assert_eq!(html.matches(&needle).count(), 1);
    }

    #[test]
    fn rendered_youtube_tag_substitutes_trimmed_id(
        id in "[0-9_-][a-zA-Z0-9_-]{0,15}",
        lead in "[ \t]{0,3}",
        trail in "[ \t]{0,3}",
    ) {
        let html = render(&format!("{{% youtube {lead}{id}{trail} %}}"));
        let expected = format!("https://www.youtube.com/embed/{id}");
        prop_assert_eq!(iframe_src(&html), Some(expected.as_str()));
    }
}
