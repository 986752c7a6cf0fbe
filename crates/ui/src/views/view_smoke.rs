use exam_core::model::ExamId;
use storage::repository::Storage;

use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn catalog_view_smoke_renders_listings_and_facets() {
    let mut harness = setup_view_harness(ViewKind::Catalog, &Storage::in_memory());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Available exams"), "missing heading in {html}");
    assert!(html.contains("FUVEST 2024 - First Phase"), "missing listing in {html}");
    assert!(html.contains("INEP"), "missing institution facet in {html}");
    assert!(html.contains("Medium"), "missing difficulty facet in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exam_view_smoke_renders_first_question_and_timer() {
    let mut harness = setup_view_harness(ViewKind::Exam(6), &Storage::in_memory());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Question 1 of 5"), "missing position in {html}");
    assert!(html.contains("Time left: 05:00"), "missing timer in {html}");
    assert!(html.contains("0/5 answered"), "missing progress in {html}");
    assert!(html.contains("Finish"), "missing finish button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exam_view_smoke_reports_unknown_exam() {
    let mut harness = setup_view_harness(ViewKind::Exam(404), &Storage::in_memory());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Exam unavailable"), "missing title in {html}");
    assert!(html.contains("not in the catalog"), "missing reason in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_smoke_renders_recorded_attempt() {
    let storage = Storage::in_memory();
    let mut harness = setup_view_harness(ViewKind::History, &storage);

    let exam_loop = harness.services.exam_loop();
    let mut session = exam_loop.start_listing(ExamId::new(3)).expect("start");
    exam_loop
        .give_up(&mut session, &true)
        .await
        .expect("give up")
        .expect("confirmed");

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("FUVEST 2024 - First Phase"), "missing title in {html}");
    assert!(html.contains("Gave up / time expired"), "missing status in {html}");
    assert!(html.contains("Time spent: 0s"), "missing time in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_smoke_renders_empty_state() {
    let mut harness = setup_view_harness(ViewKind::History, &Storage::in_memory());
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("No exams taken yet."), "missing empty state in {html}");
}
