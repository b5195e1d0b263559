//! End-to-end CRUD flow tests against the in-memory collaborators

use std::sync::Arc;

use async_trait::async_trait;
use axum::response::Response;
use chrono::{DateTime, Utc};
use crudkit::prelude::*;
use crudkit::util::ident;
use http::{header, StatusCode};
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;
use validator::{ValidationError, ValidationErrors};

#[derive(Debug, Clone, Serialize)]
struct Widget {
    id: Option<String>,
    name: String,
    rank: u32,
    created: DateTime<Utc>,
}

impl Widget {
    fn new(name: &str, rank: u32) -> Self {
        Self {
            id: Some(ident::random()),
            name: name.into(),
            rank,
            created: Utc::now(),
        }
    }

    fn blank() -> Self {
        Self {
            id: Some(ident::random()),
            name: String::new(),
            rank: 0,
            created: Utc::now(),
        }
    }
}

impl CrudEntity for Widget {
    type Id = String;

    fn id(&self) -> Option<&String> {
        self.id.as_ref()
    }
}

/// Paginator wrapper that records the query descriptor it was handed.
struct RecordingPaginator {
    inner: Arc<InMemoryRepository<Widget>>,
    last_query: Mutex<Option<EntityQuery>>,
}

#[async_trait]
impl Paginator<Widget> for RecordingPaginator {
    async fn paginate(
        &self,
        query: &EntityQuery,
        page: u64,
        limit: u64,
    ) -> Result<Page<Widget>, CrudError> {
        *self.last_query.lock() = Some(query.clone());
        self.inner.paginate(query, page, limit).await
    }
}

struct Harness {
    repo: Arc<InMemoryRepository<Widget>>,
    paginator: Arc<RecordingPaginator>,
    controller: CrudController<Widget>,
}

fn widget_binder() -> ClosureBinder<Widget> {
    ClosureBinder::new(|widget: &mut Widget, data: &FormData| {
        let name = data.get("name").cloned().unwrap_or_default();
        if name.is_empty() {
            let mut errors = ValidationErrors::new();
            errors.add("name", ValidationError::new("required"));
            return Err(errors);
        }
        widget.name = name;
        if let Some(rank) = data.get("rank").and_then(|r| r.parse().ok()) {
            widget.rank = rank;
        }
        Ok(())
    })
}

fn urls() -> StaticUrls {
    StaticUrls::new()
        .route("index", "/widgets")
        .route("add", "/widgets/add")
        .route("edit", "/widgets/{id}/edit")
        .route("widgets.done", "/widgets/done")
}

fn harness_with(config: CrudConfig<Widget>, records: Vec<Widget>) -> Harness {
    let repo = Arc::new(InMemoryRepository::with_records(records));
    let paginator = Arc::new(RecordingPaginator {
        inner: repo.clone(),
        last_query: Mutex::new(None),
    });
    let controller = CrudController::new(
        config,
        repo.clone(),
        paginator.clone(),
        Arc::new(widget_binder()),
        Arc::new(JsonRenderer),
        Arc::new(urls()),
    );
    Harness {
        repo,
        paginator,
        controller,
    }
}

fn harness(records: Vec<Widget>) -> Harness {
    harness_with(
        CrudConfig::<Widget>::new("Widget", "Catalog", "widget").factory(Widget::blank),
        records,
    )
}

fn form(entries: &[(&str, &str)]) -> FormData {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("location header")
        .to_str()
        .expect("utf-8 location")
}

fn danger_queued(notices: &Notices) -> bool {
    notices.as_slice().iter().any(|n| n.level == NoticeLevel::Danger)
}

fn success_queued(notices: &Notices) -> bool {
    notices.as_slice().iter().any(|n| n.level == NoticeLevel::Success)
}

#[tokio::test]
async fn index_on_empty_store_renders_first_page_with_defaults() {
    let h = harness(vec![]);
    let mut notices = Notices::new();

    let response = h
        .controller
        .index(&CrudRequest::get(), None, &mut notices)
        .await
        .expect("index");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["view"], "Catalog/Widget/index");
    assert_eq!(body["data"]["entities"]["page"], 1);
    assert_eq!(body["data"]["entities"]["limit"], 10);
    assert_eq!(body["data"]["entities"]["total"], 0);

    // No explicit sort: the default field, descending.
    let query = h.paginator.last_query.lock().clone().expect("query recorded");
    assert_eq!(query.order(), Some(("created", SortOrder::Desc)));
    assert!(notices.is_empty());
}

#[tokio::test]
async fn index_passes_explicit_sort_through_unmodified() {
    let h = harness(vec![]);
    let mut notices = Notices::new();

    let request = CrudRequest::get()
        .query_param("sort", "name")
        .query_param("order", "asc")
        .query_param("page", "2")
        .query_param("limit", "5");
    h.controller
        .index(&request, None, &mut notices)
        .await
        .expect("index");

    let query = h.paginator.last_query.lock().clone().expect("query recorded");
    assert_eq!(query.order(), Some(("name", SortOrder::Asc)));
}

#[tokio::test]
async fn index_merges_inline_add_form() {
    let h = harness(vec![Widget::new("gear", 1)]);
    let mut notices = Notices::new();

    let response = h
        .controller
        .index(&CrudRequest::get(), None, &mut notices)
        .await
        .expect("index");
    let body = body_json(response).await;

    assert_eq!(body["data"]["entities"]["total"], 1);
    assert_eq!(body["data"]["form"]["action"], "/widgets/add");
    assert_eq!(body["data"]["form"]["method"], "POST");
}

#[tokio::test]
async fn index_with_id_merges_inline_edit_form() {
    let widget = Widget::new("gear", 1);
    let id = widget.id.clone().expect("id");
    let h = harness(vec![widget]);
    let mut notices = Notices::new();

    let response = h
        .controller
        .index(&CrudRequest::get(), Some(&id), &mut notices)
        .await
        .expect("index");
    let body = body_json(response).await;

    assert_eq!(body["data"]["form"]["action"], format!("/widgets/{id}/edit"));
    assert_eq!(body["data"]["form"]["method"], "PUT");
    assert_eq!(body["data"]["form"]["values"]["name"], "gear");
}

#[tokio::test]
async fn index_returns_inline_submission_redirect() {
    let h = harness(vec![]);
    let mut notices = Notices::new();

    let response = h
        .controller
        .index(&CrudRequest::post(form(&[("name", "cog")])), None, &mut notices)
        .await
        .expect("index");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/widgets");
    assert_eq!(h.repo.len(), 1);
}

#[tokio::test]
async fn details_renders_existing_record() {
    let widget = Widget::new("gear", 1);
    let id = widget.id.clone().expect("id");
    let h = harness(vec![widget]);
    let mut notices = Notices::new();

    let response = h.controller.details(&id, &mut notices).await.expect("details");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["view"], "Catalog/Widget/details");
    assert_eq!(body["data"]["entity"]["name"], "gear");
    assert!(notices.is_empty());
}

#[tokio::test]
async fn details_on_missing_record_redirects_with_danger() {
    let h = harness(vec![Widget::new("gear", 1)]);
    let mut notices = Notices::new();

    let response = h
        .controller
        .details(&"999".to_string(), &mut notices)
        .await
        .expect("details");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/widgets");
    assert!(danger_queued(&notices));
    assert_eq!(h.repo.len(), 1);
}

#[tokio::test]
async fn add_get_renders_empty_form() {
    let h = harness(vec![]);
    let mut notices = Notices::new();

    let response = h
        .controller
        .add(&CrudRequest::get(), &mut notices)
        .await
        .expect("add");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["view"], "Catalog/Widget/add");
    assert_eq!(body["data"]["form"]["action"], "/widgets/add");
    assert!(h.repo.is_empty());
    assert!(notices.is_empty());
}

#[tokio::test]
async fn add_valid_post_persists_one_record_and_redirects() {
    let h = harness(vec![]);
    let mut notices = Notices::new();

    let response = h
        .controller
        .add(&CrudRequest::post(form(&[("name", "cog"), ("rank", "4")])), &mut notices)
        .await
        .expect("add");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/widgets");
    assert!(success_queued(&notices));

    assert_eq!(h.repo.len(), 1);
    let stored = &h.repo.snapshot()[0];
    assert_eq!(stored.name, "cog");
    assert_eq!(stored.rank, 4);
}

#[tokio::test]
async fn add_applies_pre_persist_transform() {
    let config = CrudConfig::<Widget>::new("Widget", "Catalog", "widget")
        .factory(Widget::blank)
        .before_persist(|mut widget| {
            widget.rank = u32::try_from(widget.name.len()).unwrap_or(u32::MAX);
            widget
        });
    let h = harness_with(config, vec![]);
    let mut notices = Notices::new();

    h.controller
        .add(&CrudRequest::post(form(&[("name", "sprocket")])), &mut notices)
        .await
        .expect("add");

    assert_eq!(h.repo.snapshot()[0].rank, 8);
}

#[tokio::test]
async fn add_invalid_post_leaves_storage_unchanged_and_keeps_values() {
    let h = harness(vec![]);
    let mut notices = Notices::new();

    let response = h
        .controller
        .add(
            &CrudRequest::post(form(&[("name", ""), ("note", "keep me")])),
            &mut notices,
        )
        .await
        .expect("add");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(h.repo.is_empty());
    assert_eq!(h.repo.staged_len(), 0);
    assert!(danger_queued(&notices));

    let body = body_json(response).await;
    assert_eq!(body["data"]["form"]["values"]["note"], "keep me");
    assert!(!body["data"]["form"]["errors"]["name"][0].is_null());
}

#[tokio::test]
async fn add_without_factory_is_a_configuration_error() {
    let h = harness_with(CrudConfig::<Widget>::new("Widget", "Catalog", "widget"), vec![]);
    let mut notices = Notices::new();

    let err = h
        .controller
        .add(&CrudRequest::get(), &mut notices)
        .await
        .expect_err("no factory");
    assert!(matches!(err, CrudError::Config(_)));
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn edit_valid_put_updates_record_and_redirects() {
    let widget = Widget::new("gear", 1);
    let id = widget.id.clone().expect("id");
    let h = harness(vec![widget]);
    let mut notices = Notices::new();

    let response = h
        .controller
        .edit(&CrudRequest::put(form(&[("name", "flywheel")])), &id, &mut notices)
        .await
        .expect("edit");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/widgets");
    assert!(success_queued(&notices));

    assert_eq!(h.repo.len(), 1);
    assert_eq!(h.repo.snapshot()[0].name, "flywheel");
}

#[tokio::test]
async fn edit_on_missing_record_redirects_with_danger() {
    let h = harness(vec![Widget::new("gear", 1)]);
    let before = h.repo.snapshot();
    let mut notices = Notices::new();

    let response = h
        .controller
        .edit(
            &CrudRequest::put(form(&[("name", "flywheel")])),
            &"999".to_string(),
            &mut notices,
        )
        .await
        .expect("edit");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/widgets");
    assert!(danger_queued(&notices));
    assert_eq!(h.repo.snapshot().len(), before.len());
    assert_eq!(h.repo.snapshot()[0].name, "gear");
}

#[tokio::test]
async fn edit_invalid_put_leaves_storage_unchanged() {
    let widget = Widget::new("gear", 1);
    let id = widget.id.clone().expect("id");
    let h = harness(vec![widget]);
    let mut notices = Notices::new();

    let response = h
        .controller
        .edit(&CrudRequest::put(form(&[("name", "")])), &id, &mut notices)
        .await
        .expect("edit");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(danger_queued(&notices));
    assert_eq!(h.repo.snapshot()[0].name, "gear");

    let body = body_json(response).await;
    assert_eq!(body["view"], "Catalog/Widget/edit");
    assert_eq!(body["data"]["form"]["values"]["name"], "");
}

#[tokio::test]
async fn edit_get_renders_form_seeded_from_record() {
    let widget = Widget::new("gear", 1);
    let id = widget.id.clone().expect("id");
    let h = harness(vec![widget]);
    let mut notices = Notices::new();

    let response = h
        .controller
        .edit(&CrudRequest::get(), &id, &mut notices)
        .await
        .expect("edit");
    let body = body_json(response).await;

    assert_eq!(body["data"]["form"]["values"]["name"], "gear");
    assert_eq!(body["data"]["form"]["method"], "PUT");
    assert!(notices.is_empty());
}

#[tokio::test]
async fn remove_deletes_record_and_redirects() {
    let widget = Widget::new("gear", 1);
    let id = widget.id.clone().expect("id");
    let h = harness(vec![widget]);
    let mut notices = Notices::new();

    let response = h.controller.remove(&id, &mut notices).await.expect("remove");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/widgets");
    assert!(success_queued(&notices));
    assert!(!h.repo.contains(&id));
}

#[tokio::test]
async fn remove_on_missing_record_queues_danger_without_side_effect() {
    let h = harness(vec![Widget::new("gear", 1)]);
    let mut notices = Notices::new();

    let response = h
        .controller
        .remove(&"999".to_string(), &mut notices)
        .await
        .expect("remove");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(danger_queued(&notices));
    assert_eq!(h.repo.len(), 1);
}

#[tokio::test]
async fn configured_destination_routes_override_index() {
    let config = CrudConfig::<Widget>::new("Widget", "Catalog", "widget")
        .factory(Widget::blank)
        .routes(RouteSet {
            created: Some("widgets.done".into()),
            ..RouteSet::default()
        });
    let h = harness_with(config, vec![]);
    let mut notices = Notices::new();

    let response = h
        .controller
        .add(&CrudRequest::post(form(&[("name", "cog")])), &mut notices)
        .await
        .expect("add");

    assert_eq!(location(&response), "/widgets/done");
}

#[tokio::test]
async fn listing_sorts_by_default_field_descending() {
    let mut older = Widget::new("old", 1);
    older.created = Utc::now() - chrono::Duration::hours(1);
    let newer = Widget::new("new", 2);

    let h = harness(vec![older, newer]);
    let mut notices = Notices::new();

    let response = h
        .controller
        .index(&CrudRequest::get(), None, &mut notices)
        .await
        .expect("index");
    let body = body_json(response).await;

    let items = body["data"]["entities"]["items"].as_array().expect("items");
    assert_eq!(items[0]["name"], "new");
    assert_eq!(items[1]["name"], "old");
}
