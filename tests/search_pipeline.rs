mod common;

use std::time::Duration;

use common::{controller, options, settle, signed_in, ScriptedBackend};

use pooprequests_rs::api::ApiResponse;
use pooprequests_rs::model::{EmptyReason, MediaType, SearchState, Severity};

#[tokio::test(start_paused = true)]
async fn short_queries_never_reach_the_backend() {
    let backend = ScriptedBackend::new();
    let controller = signed_in(backend.clone()).await;

    for text in ["d", " d ", "", "é"] {
        controller.on_query_change(text.to_string()).await;
        settle().await;
    }

    assert!(backend.calls_to("search").is_empty());
    let state = controller.model().get_ui_state().await;
    assert!(matches!(state.search, SearchState::Empty(EmptyReason::StartTyping)));
    assert_eq!(state.search.empty_message(), Some("Start typing to search."));
}

#[tokio::test(start_paused = true)]
async fn short_query_clears_previous_results() {
    let backend = ScriptedBackend::new();
    let controller = signed_in(backend.clone()).await;
    backend.reply("search", 200, r#"[{"title":"Dune"}]"#);

    controller.on_query_change("dune".to_string()).await;
    settle().await;
    assert_eq!(controller.model().get_ui_state().await.search.cards().len(), 1);

    controller.on_query_change("d".to_string()).await;
    settle().await;
    let state = controller.model().get_ui_state().await;
    assert!(state.search.cards().is_empty());
    assert_eq!(backend.calls_to("search").len(), 1);
}

#[tokio::test(start_paused = true)]
async fn rapid_keystrokes_fire_one_search_with_the_final_text() {
    let backend = ScriptedBackend::new();
    let controller = signed_in(backend.clone()).await;
    backend.reply("search", 200, "[]");

    for text in ["d", "du", "dun", "dune"] {
        controller.on_query_change(text.to_string()).await;
        tokio::time::advance(Duration::from_millis(100)).await;
    }
    settle().await;

    let searches = backend.calls_to("search");
    assert_eq!(searches.len(), 1);
    assert_eq!(searches[0].query.as_deref(), Some("dune"));
    assert_eq!(searches[0].media_type, Some("movies"));
}

#[tokio::test(start_paused = true)]
async fn search_waits_for_the_quiet_window() {
    let backend = ScriptedBackend::new();
    let controller = signed_in(backend.clone()).await;
    backend.reply("search", 200, "[]");

    controller.on_query_change("dune".to_string()).await;
    tokio::time::advance(Duration::from_millis(200)).await;
    tokio::task::yield_now().await;
    assert!(backend.calls_to("search").is_empty());

    settle().await;
    assert_eq!(backend.calls_to("search").len(), 1);
}

#[tokio::test(start_paused = true)]
async fn query_is_trimmed_before_sending() {
    let backend = ScriptedBackend::new();
    let controller = signed_in(backend.clone()).await;
    backend.reply("search", 200, "[]");

    controller.on_query_change("  the office ".to_string()).await;
    settle().await;

    assert_eq!(backend.calls_to("search")[0].query.as_deref(), Some("the office"));
}

#[tokio::test(start_paused = true)]
async fn later_search_wins_even_when_the_earlier_one_lands_last() {
    let backend = ScriptedBackend::new();
    let controller = signed_in(backend.clone()).await;
    let first = backend.gate("search");
    let second = backend.gate("search");

    controller.on_query_change("dune".to_string()).await;
    settle().await;
    controller.on_query_change("dune messiah".to_string()).await;
    settle().await;
    assert_eq!(backend.calls_to("search").len(), 2);

    second
        .send(Ok(ApiResponse::new(200, r#"[{"title":"Dune Messiah"}]"#)))
        .unwrap();
    settle().await;
    let state = controller.model().get_ui_state().await;
    assert_eq!(state.search.cards()[0].title, "Dune Messiah");

    first
        .send(Ok(ApiResponse::new(200, r#"[{"title":"Dune"},{"title":"Dune (1984)"}]"#)))
        .unwrap();
    settle().await;
    let state = controller.model().get_ui_state().await;
    assert_eq!(state.search.cards().len(), 1);
    assert_eq!(state.search.cards()[0].title, "Dune Messiah");
}

#[tokio::test(start_paused = true)]
async fn stale_failure_does_not_notify() {
    let backend = ScriptedBackend::new();
    let controller = signed_in(backend.clone()).await;
    let first = backend.gate("search");
    backend.reply("search", 200, r#"[{"title":"Arrival"}]"#);

    controller.on_query_change("arr".to_string()).await;
    settle().await;
    controller.on_query_change("arrival".to_string()).await;
    settle().await;

    first.send(Ok(ApiResponse::new(500, ""))).unwrap();
    settle().await;

    let state = controller.model().get_ui_state().await;
    assert_eq!(state.search.cards()[0].title, "Arrival");
    assert!(state.toast.is_none());
}

#[tokio::test(start_paused = true)]
async fn pending_indicator_hides_the_empty_state() {
    let backend = ScriptedBackend::new();
    let controller = signed_in(backend.clone()).await;
    let gate = backend.gate("search");

    controller.on_query_change("dune".to_string()).await;
    settle().await;

    let state = controller.model().get_ui_state().await;
    assert!(state.search.is_pending());
    assert_eq!(state.search.empty_message(), None);

    gate.send(Ok(ApiResponse::new(200, "[]"))).unwrap();
    settle().await;
    let state = controller.model().get_ui_state().await;
    assert_eq!(state.search.empty_message(), Some("No results found."));
}

#[tokio::test(start_paused = true)]
async fn media_type_change_searches_immediately() {
    let backend = ScriptedBackend::new();
    let controller = signed_in(backend.clone()).await;
    backend.reply("search", 200, "[]");
    backend.reply("search", 200, "[]");

    controller.on_query_change("dune".to_string()).await;
    settle().await;

    controller.select_media_type(MediaType::Books).await;

    let searches = backend.calls_to("search");
    assert_eq!(searches.len(), 2);
    assert_eq!(searches[1].media_type, Some("books"));
    assert_eq!(searches[1].query.as_deref(), Some("dune"));
}

#[tokio::test(start_paused = true)]
async fn media_type_change_supersedes_a_pending_keystroke() {
    let backend = ScriptedBackend::new();
    let controller = signed_in(backend.clone()).await;
    backend.reply("search", 200, "[]");

    controller.on_query_change("dune".to_string()).await;
    controller.select_media_type(MediaType::Audiobooks).await;
    settle().await;

    let searches = backend.calls_to("search");
    assert_eq!(searches.len(), 1);
    assert_eq!(searches[0].media_type, Some("audiobooks"));
}

#[tokio::test(start_paused = true)]
async fn media_type_change_without_query_only_records_selection() {
    let backend = ScriptedBackend::new();
    let controller = signed_in(backend.clone()).await;

    controller.select_media_type(MediaType::Tv).await;
    settle().await;

    assert!(backend.calls_to("search").is_empty());
    assert_eq!(controller.model().get_ui_state().await.media_type, MediaType::Tv);
}

#[tokio::test(start_paused = true)]
async fn backend_failure_shows_unavailable_and_notifies() {
    let backend = ScriptedBackend::new();
    let controller = signed_in(backend.clone()).await;
    backend.reply("search", 200, r#"[{"title":"Dune"}]"#);
    backend.reply("search", 503, "");

    controller.on_query_change("dune".to_string()).await;
    settle().await;
    controller.on_query_change("dunes".to_string()).await;
    settle().await;

    let state = controller.model().get_ui_state().await;
    assert!(state.search.cards().is_empty());
    assert_eq!(state.search.empty_message(), Some("Search unavailable right now."));
    let toast = state.toast.unwrap();
    assert_eq!(toast.severity, Severity::Error);
    assert_eq!(toast.message, "Search failed (HTTP 503)");
}

#[tokio::test(start_paused = true)]
async fn transport_failure_reports_its_reason() {
    let backend = ScriptedBackend::new();
    let controller = signed_in(backend.clone()).await;
    backend.fail("search", "connection reset");

    controller.on_query_change("dune".to_string()).await;
    settle().await;

    let state = controller.model().get_ui_state().await;
    assert!(matches!(state.search, SearchState::Error { .. }));
    assert_eq!(state.toast.unwrap().message, "connection reset");
}

#[tokio::test(start_paused = true)]
async fn malformed_body_is_a_search_failure() {
    let backend = ScriptedBackend::new();
    let controller = signed_in(backend.clone()).await;
    backend.reply("search", 200, "<html>oops</html>");

    controller.on_query_change("dune".to_string()).await;
    settle().await;

    let state = controller.model().get_ui_state().await;
    assert_eq!(state.search.empty_message(), Some("Search unavailable right now."));
    assert_eq!(state.toast.unwrap().severity, Severity::Error);
}

#[tokio::test(start_paused = true)]
async fn typing_is_ignored_before_login() {
    let backend = ScriptedBackend::new();
    let controller = controller(backend.clone(), options());

    controller.on_query_change("dune".to_string()).await;
    settle().await;

    assert!(backend.calls().is_empty());
    assert_eq!(controller.model().get_ui_state().await.query, "");
}
