//! Output formats over the curated samples

use fixmark::fixmark::formats::{FormatError, FormatRegistry};
use fixmark::fixmark::prelude::*;
use fixmark::fixmark::testing::Samples;

fn render(sample: &str, format: &str) -> String {
    let raw = Samples::get(sample).expect("sample to exist");
    FormatRegistry::default()
        .serialize(&segment(&raw), format)
        .expect("format to serialize")
}

#[test]
fn tag_comment_and_fence() {
    insta::assert_snapshot!(render("010-comment-and-fence.txt", "tag"), @r###"
    <segments>
      <comment>// fix applied</comment>
      <fenced-code language="js">const x = 1;</fenced-code>
    </segments>
    "###);
}

#[test]
fn code_view_of_full_fix() {
    insta::assert_snapshot!(render("050-async-wait-fix.txt", "code-view"), @r###"
    --- javascript
    // wait for the download before asserting
    test('downloads within 5 seconds', async () => {
      const file = await downloadFile();
      expect(`${file.name}`).toBeDefined();
    });
    // timeout threshold is 5000 ms
    /* end of fix */
    "###);
}

#[test]
fn explanation_view_of_full_fix() {
    assert_eq!(
        render("050-async-wait-fix.txt", "explanation-view"),
        "Fix Category: Async Wait\n\n\nExplanation: Awaiting the promise removes the race. \
         Use jest.setTimeout(5000) if the default timeout is too short.\n\n"
    );
}

#[test]
fn code_format_matches_extraction() {
    let raw = Samples::get("050-async-wait-fix.txt").unwrap();
    assert_eq!(
        render("050-async-wait-fix.txt", "code"),
        format!("{}\n", extract_code(&segment(&raw)))
    );
}

#[test]
fn json_dump_keeps_spans_and_languages() {
    let json = render("010-comment-and-fence.txt", "json");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["kind"], "comment");
    assert_eq!(value[0]["span"], "// fix applied\n");
    assert_eq!(value[1]["kind"], "fenced-code");
    assert_eq!(value[1]["language"], "js");
    assert_eq!(value[1]["range"]["end"], 37);
}

#[test]
fn views_of_empty_input_are_empty() {
    assert_eq!(render("000-empty.txt", "code-view"), "");
    assert_eq!(render("000-empty.txt", "explanation-view"), "");
    assert_eq!(render("000-empty.txt", "code"), "");
}

#[test]
fn configured_default_language_reaches_the_code_view() {
    let registry = FormatRegistry::with_options(
        RenderOptions {
            default_language: "python".into(),
        },
        false,
    );
    let output = registry
        .serialize(&segment("```\nprint(1)\n```"), "code-view")
        .unwrap();
    assert_eq!(output, "--- python\nprint(1)\n");
}

#[test]
fn unknown_format_is_reported() {
    let result = FormatRegistry::default().serialize(&segment("x"), "html");
    assert_eq!(result, Err(FormatError::FormatNotFound("html".into())));
}
