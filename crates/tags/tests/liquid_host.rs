use blogkit_tags::{prepare_template, register_tags, render_str};

fn render(template: &str) -> String {
    render_str(template, &liquid::Object::new()).expect("template should render")
}

#[test]
fn video_tag_in_page_body() {
    let output = render("<p>Intro</p>\n{% video   clip.mp4   %}\n<p>Outro</p>");
    assert!(output.starts_with("<p>Intro</p>\n<video controls>"));
    assert!(output.contains(r#"<source src="/assets/clip.mp4" type="video/mp4">"#));
    assert!(output.ends_with("</video>\n\n<p>Outro</p>"));
}

#[test]
fn youtube_tag_in_page_body() {
    let output = render("{% youtube dQw4w9WgXcQ %}");
    assert!(output.contains(r#"src="https://www.youtube.com/embed/dQw4w9WgXcQ""#));
    assert!(output.starts_with(r#"<div class="video-container">"#));
}

#[test]
fn generated_asset_names_pass_through() {
    let output = render("{% video launch_day_notes.mp4 %}");
    assert!(output.contains(r#"src="/assets/launch_day_notes.mp4""#));
}

#[test]
fn same_tag_renders_identically_twice() {
    let page = "{% youtube abc123 %}";
    assert_eq!(render(page), render(page));
}

#[test]
fn tags_ignore_template_variables() {
    let globals = liquid::object!({ "file": "other.mp4" });
    let output = render_str("{% video file %}", &globals).unwrap();
    assert!(output.contains(r#"src="/assets/file""#));
}

#[test]
fn registration_composes_with_a_custom_builder() {
    let parser = register_tags(liquid::ParserBuilder::new())
        .build()
        .expect("parser should build");
    let output = parser
        .parse("{% video a.mp4 %}")
        .unwrap()
        .render(&liquid::Object::new())
        .unwrap();
    assert!(output.contains(r#"src="/assets/a.mp4""#));
}

#[test]
fn custom_builder_renders_prepared_templates() {
    let parser = register_tags(liquid::ParserBuilder::new())
        .build()
        .expect("parser should build");
    let output = parser
        .parse(&prepare_template("{% video videos/clip (1).mp4 %}"))
        .unwrap()
        .render(&liquid::Object::new())
        .unwrap();
    assert!(output.contains(r#"src="/assets/videos/clip (1).mp4""#));
}

#[test]
fn youtube_ids_starting_with_digits_stay_whole() {
    let output = render("{% youtube 9bZkp7q19f0 %}");
    assert!(output.contains(r#"src="https://www.youtube.com/embed/9bZkp7q19f0""#));

    let output = render("{% youtube 0x-abc_DEFG %}");
    assert!(output.contains(r#"src="https://www.youtube.com/embed/0x-abc_DEFG""#));

    let output = render("{% youtube -_leading %}");
    assert!(output.contains(r#"src="https://www.youtube.com/embed/-_leading""#));
}

#[test]
fn video_paths_keep_slashes_parentheses_and_spaces() {
    let output = render("{% video videos/clip.mp4 %}");
    assert!(output.contains(r#"<source src="/assets/videos/clip.mp4""#));

    let output = render("{% video clip (1).mp4 %}");
    assert!(output.contains(r#"<source src="/assets/clip (1).mp4""#));

    let output = render("{% video\tholiday\tclip.mp4\t%}");
    assert!(output.contains("<source src=\"/assets/holiday\tclip.mp4\""));
}

#[test]
fn interior_spacing_is_kept_verbatim() {
    let output = render("{% video my   clip.mp4 %}");
    assert!(output.contains(r#"src="/assets/my   clip.mp4""#));
}

#[test]
fn quoted_arguments_are_substituted_verbatim() {
    let output = render(r#"{% video "clip.mp4" %}"#);
    assert!(output.contains(r#"<source src="/assets/"clip.mp4"""#));
}

#[test]
fn whitespace_control_still_applies() {
    let output = render("a\n{%- youtube abc -%}\nb");
    assert!(output.starts_with("a<div class=\"video-container\">"));
    assert!(output.ends_with("</div>\nb") || output.ends_with("</div>b"));
}

#[test]
fn empty_argument_renders_full_structure() {
    let output = render("{% video %}");
    assert!(output.contains(r#"<source src="/assets/" type="video/mp4">"#));

    let output = render("{% youtube %}");
    assert!(output.contains(r#"src="https://www.youtube.com/embed/""#));
}
