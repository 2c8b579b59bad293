//! User directory page handlers.
//!
//! ```text
//! GET  /                   landing page
//! GET  /users              listing
//! GET  /add-user           create form
//! POST /add-user           create, then redirect to /users
//! GET  /edit-user/{id}     prefilled edit form (404 when absent)
//! POST /edit-user/{id}     update, then redirect to /users
//! GET  /delete-user/{id}   delete, then redirect to /users
//! ```
//!
//! Path ids and form fields reach the record service as raw strings; parsing
//! and validation live in the domain, not here.

use actix_web::http::header::{ContentType, LOCATION};
use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;

use crate::inbound::http::PageResult;
use crate::inbound::http::pages;
use crate::inbound::http::state::HttpState;

/// Form body shared by the create and update endpoints.
#[derive(Debug, Deserialize)]
pub struct UserForm {
    pub name: String,
    pub email: String,
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

fn redirect_to_listing() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, "/users"))
        .finish()
}

/// Landing page.
#[get("/")]
pub async fn index() -> HttpResponse {
    html(pages::index_page())
}

/// List every user.
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> PageResult {
    let users = state.records.list().await?;
    Ok(html(pages::user_list_page(&users)))
}

/// Blank create form.
#[get("/add-user")]
pub async fn add_user_form() -> HttpResponse {
    html(pages::add_user_page())
}

/// Create a user from submitted form fields.
#[post("/add-user")]
pub async fn add_user(state: web::Data<HttpState>, form: web::Form<UserForm>) -> PageResult {
    state.records.create(&form.name, &form.email).await?;
    Ok(redirect_to_listing())
}

/// Edit form prefilled from the store.
#[get("/edit-user/{id}")]
pub async fn edit_user_form(state: web::Data<HttpState>, path: web::Path<String>) -> PageResult {
    match state.records.read_one(&path).await? {
        Some(user) => Ok(html(pages::edit_user_page(&user))),
        None => Ok(HttpResponse::NotFound()
            .content_type(ContentType::html())
            .body(pages::message_page("User not found."))),
    }
}

/// Apply submitted changes to a user.
#[post("/edit-user/{id}")]
pub async fn edit_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    form: web::Form<UserForm>,
) -> PageResult {
    state.records.update(&path, &form.name, &form.email).await?;
    Ok(redirect_to_listing())
}

/// Delete a user via its listing link.
#[get("/delete-user/{id}")]
pub async fn delete_user(state: web::Data<HttpState>, path: web::Path<String>) -> PageResult {
    state.records.delete(&path).await?;
    Ok(redirect_to_listing())
}

#[cfg(test)]
mod tests {
    //! End-to-end handler coverage against an in-memory store.

    use std::sync::{Arc, Mutex};

    use actix_web::http::StatusCode;
    use actix_web::http::header::LOCATION;
    use actix_web::{App, test as actix_test};
    use async_trait::async_trait;
    use rstest::rstest;

    use crate::domain::ports::{UserStore, UserStoreError};
    use crate::domain::records::UserRecordService;
    use crate::domain::user::{User, UserDraft, UserId};
    use crate::inbound::http::state::HttpState;
    use crate::server::build_app;

    struct StoreInner {
        rows: Vec<User>,
        next_id: i32,
        fail_connection: bool,
    }

    struct InMemoryStore {
        inner: Mutex<StoreInner>,
    }

    impl InMemoryStore {
        fn empty() -> Arc<Self> {
            Self::seeded(Vec::new())
        }

        fn seeded(rows: Vec<User>) -> Arc<Self> {
            let next_id = rows.iter().map(|u| u.id().get()).max().unwrap_or(0) + 1;
            Arc::new(Self {
                inner: Mutex::new(StoreInner {
                    rows,
                    next_id,
                    fail_connection: false,
                }),
            })
        }

        fn unreachable() -> Arc<Self> {
            let store = Self::empty();
            store.inner.lock().expect("store lock").fail_connection = true;
            store
        }

        fn rows(&self) -> Vec<User> {
            self.inner.lock().expect("store lock").rows.clone()
        }

        fn guard(&self) -> Result<std::sync::MutexGuard<'_, StoreInner>, UserStoreError> {
            let inner = self.inner.lock().expect("store lock");
            if inner.fail_connection {
                return Err(UserStoreError::connection("store unreachable"));
            }
            Ok(inner)
        }
    }

    #[async_trait]
    impl UserStore for InMemoryStore {
        async fn list(&self) -> Result<Vec<User>, UserStoreError> {
            Ok(self.guard()?.rows.clone())
        }

        async fn insert(&self, draft: &UserDraft) -> Result<(), UserStoreError> {
            let mut inner = self.guard()?;
            let id = UserId::new(inner.next_id);
            inner.next_id += 1;
            inner.rows.push(User::new(id, draft.name(), draft.email()));
            Ok(())
        }

        async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError> {
            Ok(self.guard()?.rows.iter().find(|u| u.id() == id).cloned())
        }

        async fn update(&self, id: UserId, draft: &UserDraft) -> Result<(), UserStoreError> {
            let mut inner = self.guard()?;
            if let Some(user) = inner.rows.iter_mut().find(|u| u.id() == id) {
                *user = User::new(id, draft.name(), draft.email());
            }
            Ok(())
        }

        async fn delete(&self, id: UserId) -> Result<(), UserStoreError> {
            self.guard()?.rows.retain(|u| u.id() != id);
            Ok(())
        }
    }

    fn state_for(store: Arc<InMemoryStore>) -> actix_web::web::Data<HttpState> {
        actix_web::web::Data::new(HttpState::new(UserRecordService::new(store)))
    }

    fn test_app(
        store: Arc<InMemoryStore>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        build_app(state_for(store))
    }

    async fn body_text(response: actix_web::dev::ServiceResponse) -> String {
        let bytes = actix_test::read_body(response).await;
        String::from_utf8(bytes.to_vec()).expect("html body is utf-8")
    }

    #[actix_web::test]
    async fn index_links_to_listing_and_create_form() {
        let app = actix_test::init_service(test_app(InMemoryStore::empty())).await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request())
                .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("href=\"/users\""));
        assert!(body.contains("href=\"/add-user\""));
    }

    #[actix_web::test]
    async fn listing_renders_stored_users_with_escaping() {
        let store = InMemoryStore::seeded(vec![User::new(
            UserId::new(1),
            "<script>alert(1)</script>",
            "ann@example.com",
        )]);
        let app = actix_test::init_service(test_app(store)).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/users").to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!body.contains("<script>alert(1)</script>"));
        assert!(body.contains("ann@example.com"));
    }

    #[actix_web::test]
    async fn create_persists_and_redirects_to_listing() {
        let store = InMemoryStore::empty();
        let app = actix_test::init_service(test_app(store.clone())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/add-user")
                .set_form([("name", "Ann"), ("email", "ann@example.com")])
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(LOCATION).expect("location header"),
            "/users"
        );
        let rows = store.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name(), "Ann");
    }

    #[rstest]
    #[case([("name", ""), ("email", "ann@example.com")], "name must not be empty")]
    #[case([("name", "Ann"), ("email", "")], "email must not be empty")]
    #[actix_web::test]
    async fn create_with_blank_field_returns_a_400_page(
        #[case] form: [(&'static str, &'static str); 2],
        #[case] message: &str,
    ) {
        let store = InMemoryStore::empty();
        let app = actix_test::init_service(test_app(store.clone())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/add-user")
                .set_form(form)
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains(message));
        assert!(store.rows().is_empty());
    }

    #[actix_web::test]
    async fn edit_form_prefills_the_stored_row() {
        let store = InMemoryStore::seeded(vec![User::new(
            UserId::new(3),
            "Ann",
            "ann@example.com",
        )]);
        let app = actix_test::init_service(test_app(store)).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/edit-user/3")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("value=\"Ann\""));
        assert!(body.contains("value=\"ann@example.com\""));
        assert!(body.contains("action=\"/edit-user/3\""));
    }

    #[actix_web::test]
    async fn edit_form_for_missing_row_is_a_404_page_not_a_crash() {
        let app = actix_test::init_service(test_app(InMemoryStore::empty())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/edit-user/999")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("User not found."));
    }

    #[rstest]
    #[case("/edit-user/abc")]
    #[case("/delete-user/12.5")]
    #[actix_web::test]
    async fn malformed_id_segments_return_400(#[case] uri: &str) {
        let app = actix_test::init_service(test_app(InMemoryStore::empty())).await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(
            body_text(response)
                .await
                .contains("user id must be an integer")
        );
    }

    #[actix_web::test]
    async fn update_applies_changes_and_redirects() {
        let store = InMemoryStore::seeded(vec![User::new(
            UserId::new(5),
            "Ann",
            "ann@example.com",
        )]);
        let app = actix_test::init_service(test_app(store.clone())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/edit-user/5")
                .set_form([("name", "Beth"), ("email", "beth@example.com")])
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(store.rows()[0].name(), "Beth");
    }

    #[actix_web::test]
    async fn update_of_missing_row_still_redirects() {
        let store = InMemoryStore::empty();
        let app = actix_test::init_service(test_app(store.clone())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/edit-user/999")
                .set_form([("name", "X"), ("email", "y@z.com")])
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(store.rows().is_empty());
    }

    #[actix_web::test]
    async fn delete_removes_the_row_and_repeats_harmlessly() {
        let store = InMemoryStore::seeded(vec![User::new(
            UserId::new(4),
            "Ann",
            "ann@example.com",
        )]);
        let app = actix_test::init_service(test_app(store.clone())).await;

        for _ in 0..2 {
            let response = actix_test::call_service(
                &app,
                actix_test::TestRequest::get()
                    .uri("/delete-user/4")
                    .to_request(),
            )
            .await;
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
        }
        assert!(store.rows().is_empty());
    }

    #[actix_web::test]
    async fn unreachable_store_maps_to_503() {
        let app = actix_test::init_service(test_app(InMemoryStore::unreachable())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/users").to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(
            body_text(response)
                .await
                .contains("temporarily unavailable")
        );
    }
}
