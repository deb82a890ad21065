//! Request handlers, one file per endpoint.

mod health;
mod info;
mod root;

pub use health::health_handler;
pub use info::info_handler;
pub use root::root_handler;

#[cfg(test)]
mod tests {
    use std::{path::PathBuf, sync::Arc};

    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;

    use tgi_core::{
        entity::{ChatEntity, ChatFlavor, UserEntity},
        errors::Error,
        ports::LookupPort,
        Result,
    };

    use crate::{routes, AppState};

    /// Fake session: canned entities instead of platform calls.
    struct FakeSession {
        connected: bool,
        user: Option<UserEntity>,
        chat: Option<ChatEntity>,
    }

    impl FakeSession {
        fn empty() -> Self {
            Self {
                connected: true,
                user: None,
                chat: None,
            }
        }

        fn with_user(user: UserEntity) -> Self {
            Self {
                connected: true,
                user: Some(user),
                chat: None,
            }
        }
    }

    #[async_trait]
    impl LookupPort for FakeSession {
        async fn lookup_user(&self, _handle: &str) -> Result<UserEntity> {
            self.user.clone().ok_or(Error::NotFound)
        }

        async fn lookup_chat(&self, _handle: &str) -> Result<ChatEntity> {
            self.chat.clone().ok_or(Error::NotFound)
        }

        fn is_connected(&self) -> bool {
            self.connected
        }
    }

    fn state_with(session: FakeSession) -> AppState {
        AppState::new(
            Arc::new(session),
            PathBuf::from("/nonexistent/status.html"),
            320,
        )
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .configure(routes::configure),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn info_misses_with_404_and_error_field() {
        let app = app!(state_with(FakeSession::empty()));
        let req = test::TestRequest::get()
            .uri("/info?username=doesnotexist_12345xyz")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("not found"));
    }

    #[actix_web::test]
    async fn info_recomputes_photo_url_at_requested_size() {
        let user = UserEntity {
            id: 777000,
            first_name: Some("Telegram".into()),
            username: Some("telegram".into()),
            usernames: vec!["telegram".into()],
            is_verified: true,
            ..Default::default()
        };
        let app = app!(state_with(FakeSession::with_user(user)));

        let req = test::TestRequest::get()
            .uri("/info?username=telegram&size=640")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["type"], "user");
        assert!(body["profile_photo_url"]
            .as_str()
            .unwrap()
            .contains("/640/telegram.jpg"));
        assert!(body["account_created"].is_string());
        assert!(body["account_age"].is_string());
    }

    #[actix_web::test]
    async fn info_falls_back_to_chat_lookup() {
        let chat = ChatEntity {
            id: -1001234567890,
            title: Some("Some Channel".into()),
            flavor: ChatFlavor::Channel,
            ..Default::default()
        };
        let session = FakeSession {
            connected: true,
            user: None,
            chat: Some(chat),
        };
        let app = app!(state_with(session));

        let req = test::TestRequest::get()
            .uri("/info?username=somechannel")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["type"], "channel");
        assert_eq!(body["links"]["join"], "t.me/c/1234567890/1");
    }

    #[actix_web::test]
    async fn platform_errors_surface_their_message_as_404() {
        struct Flaky;

        #[async_trait]
        impl LookupPort for Flaky {
            async fn lookup_user(&self, _handle: &str) -> Result<UserEntity> {
                Err(Error::Platform("telegram error: FLOOD_WAIT_30".into()))
            }
            async fn lookup_chat(&self, _handle: &str) -> Result<ChatEntity> {
                Err(Error::NotFound)
            }
            fn is_connected(&self) -> bool {
                true
            }
        }

        let state = AppState::new(Arc::new(Flaky), PathBuf::from("x"), 320);
        let app = app!(state);

        let req = test::TestRequest::get().uri("/info?username=anyone").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "telegram error: FLOOD_WAIT_30");
    }

    #[actix_web::test]
    async fn health_is_200_even_when_disconnected() {
        let session = FakeSession {
            connected: false,
            user: None,
            chat: None,
        };
        let app = app!(state_with(session));

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert!(body["api_info"]["bot_status"]
            .as_str()
            .unwrap()
            .contains("disconnected"));
    }

    #[actix_web::test]
    async fn root_falls_back_to_json_when_page_is_missing() {
        let app = app!(state_with(FakeSession::empty()));

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "Running");
        assert_eq!(body["usage_example"], "/info?username=telegram");
    }

    #[actix_web::test]
    async fn root_serves_the_status_page_when_present() {
        let page = std::env::temp_dir().join(format!("tgi-status-{}.html", std::process::id()));
        std::fs::write(&page, "<html><body>ok</body></html>").unwrap();

        let state = AppState::new(Arc::new(FakeSession::empty()), page.clone(), 320);
        let app = app!(state);

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let ct = resp.headers().get("content-type").unwrap();
        assert!(ct.to_str().unwrap().starts_with("text/html"));

        let _ = std::fs::remove_file(&page);
    }
}
