//! Sibling-range pruning semantics against real documents.
//!
//! These load synthetic `data:` documents into a browser and run the pruning
//! script in the page context, so like the live export they need a local
//! Chrome/Chromium and run with `cargo test -- --ignored`.

use wikibinder::browser::BrowserWrapper;
use wikibinder::render::prune::{section_prune_script, PruneRule};

const RULE: PruneRule = PruneRule {
    start_selector: "#Topic",
    end_class: "end-col",
};

/// Load `body` inside a container div, apply [`RULE`], and return the ids of
/// the children that survived.
async fn surviving_ids(body: &str) -> Vec<String> {
    let mut wrapper = BrowserWrapper::launch().await.unwrap();
    let page = wrapper
        .browser()
        .new_page(format!("data:text/html,<div id='group'>{body}</div>"))
        .await
        .unwrap();
    page.wait_for_navigation().await.unwrap();

    page.evaluate(section_prune_script(&[RULE])).await.unwrap();
    let ids: Vec<String> = page
        .evaluate("Array.from(document.getElementById('group').children).map((e) => e.id)")
        .await
        .unwrap()
        .into_value()
        .unwrap();

    page.close().await.unwrap();
    wrapper.shutdown().await;
    ids
}

#[tokio::test]
#[ignore = "requires a local Chrome/Chromium"]
async fn removes_exactly_the_start_through_boundary_siblings() {
    let ids = surviving_ids(
        "<p id='before'>intro</p>\
         <h2 id='heading'><span id='Topic'>Topic</span></h2>\
         <ul id='body1'><li>a</li></ul>\
         <ul id='body2'><li>b</li></ul>\
         <div id='boundary' class='end-col'>cols</div>\
         <p id='after'>outro</p>",
    )
    .await;

    // Start marker through the boundary are gone, boundary included; the
    // siblings on either side survive.
    assert_eq!(ids, vec!["before".to_string(), "after".to_string()]);
}

#[tokio::test]
#[ignore = "requires a local Chrome/Chromium"]
async fn missing_end_class_removes_the_rest_of_the_group() {
    let ids = surviving_ids(
        "<p id='before'>intro</p>\
         <h2 id='heading'><span id='Topic'>Topic</span></h2>\
         <ul id='body1'><li>a</li></ul>\
         <p id='last'>tail</p>",
    )
    .await;

    // No sibling ever carries the end class: everything from the start
    // marker to the end of the group is deterministically removed.
    assert_eq!(ids, vec!["before".to_string()]);
}

#[tokio::test]
#[ignore = "requires a local Chrome/Chromium"]
async fn absent_start_marker_skips_the_rule() {
    let ids = surviving_ids("<p id='only'>text</p>").await;
    assert_eq!(ids, vec!["only".to_string()]);
}
