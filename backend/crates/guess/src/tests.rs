//! Unit tests for the game crate

#[cfg(test)]
mod use_case_tests {
    use crate::application::config::GameConfig;
    use crate::application::reset_game::ResetGameUseCase;
    use crate::application::session::verify_session_token;
    use crate::application::submit_guess::{FeedbackKind, SubmitGuessUseCase};
    use crate::application::view_game::ViewGameUseCase;
    use crate::domain::entities::GameSession;
    use crate::domain::repository::GameSessionRepository;
    use crate::domain::services::{FixedSecret, RandomSecret, SecretSource};
    use crate::domain::value_objects::GuessOutcome;
    use crate::infra::memory::InMemoryGameRepository;
    use std::sync::Arc;

    struct Harness {
        repo: Arc<InMemoryGameRepository>,
        config: Arc<GameConfig>,
        secrets: Arc<dyn SecretSource>,
    }

    impl Harness {
        fn new(secrets: Arc<dyn SecretSource>) -> Self {
            Self {
                repo: Arc::new(InMemoryGameRepository::new()),
                config: Arc::new(GameConfig::development()),
                secrets,
            }
        }

        fn fixed(secret: i64) -> Self {
            Self::new(Arc::new(FixedSecret(secret)))
        }

        fn view(&self) -> ViewGameUseCase<InMemoryGameRepository> {
            ViewGameUseCase::new(self.repo.clone(), self.config.clone(), self.secrets.clone())
        }

        fn submit(&self) -> SubmitGuessUseCase<InMemoryGameRepository> {
            SubmitGuessUseCase::new(self.repo.clone(), self.config.clone(), self.secrets.clone())
        }

        fn reset(&self) -> ResetGameUseCase<InMemoryGameRepository> {
            ResetGameUseCase::new(self.repo.clone(), self.config.clone(), self.secrets.clone())
        }

        async fn stored(&self, token: &str) -> GameSession {
            let id = verify_session_token(token, &self.config.session_secret).unwrap();
            self.repo.get(id).await.unwrap().unwrap()
        }
    }

    #[tokio::test]
    async fn test_view_creates_session_once() {
        let h = Harness::fixed(42);

        let first = h.view().execute(None).await.unwrap();
        assert_eq!(first.attempts, 0);
        assert!(!first.won);
        assert_eq!(h.repo.len().await, 1);

        let second = h.view().execute(Some(&first.session_token)).await.unwrap();
        assert_eq!(second.session_token, first.session_token);
        assert_eq!(h.repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_view_does_not_mutate() {
        let h = Harness::fixed(42);
        let view = h.view().execute(None).await.unwrap();
        h.submit()
            .execute(Some(&view.session_token), "10")
            .await
            .unwrap();

        for _ in 0..3 {
            let again = h.view().execute(Some(&view.session_token)).await.unwrap();
            assert_eq!(again.attempts, 1);
            assert!(!again.won);
        }
    }

    #[tokio::test]
    async fn test_forged_token_starts_new_game() {
        let h = Harness::fixed(42);
        let view = h.view().execute(Some("forged")).await.unwrap();
        assert_ne!(view.session_token, "forged");
        assert_eq!(h.repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_scenario_lower_correct_invalid() {
        let h = Harness::fixed(42);
        let token = h.view().execute(None).await.unwrap().session_token;

        let out = h.submit().execute(Some(&token), "50").await.unwrap();
        assert_eq!(out.outcome, Some(GuessOutcome::Lower));
        assert_eq!(out.feedback.kind, FeedbackKind::Hint);
        assert!(out.feedback.message.contains("lower"));
        assert_eq!(out.view.attempts, 1);
        assert!(!out.view.won);

        let out = h.submit().execute(Some(&token), "42").await.unwrap();
        assert_eq!(out.feedback.kind, FeedbackKind::Success);
        assert!(out.feedback.message.contains("correct"));
        assert_eq!(out.view.attempts, 2);
        assert!(out.view.won);

        let out = h.submit().execute(Some(&token), "abc").await.unwrap();
        assert_eq!(out.outcome, None);
        assert_eq!(out.feedback.kind, FeedbackKind::Error);
        assert_eq!(out.feedback.message, "Please submit a valid number.");
        assert_eq!(out.view.attempts, 2);
        assert!(out.view.won);

        let stored = h.stored(&token).await;
        assert_eq!(stored.attempts, 2);
        assert!(stored.won);
    }

    #[tokio::test]
    async fn test_low_guess_hints_higher() {
        let h = Harness::fixed(42);
        let out = h.submit().execute(None, "7").await.unwrap();
        assert_eq!(out.outcome, Some(GuessOutcome::Higher));
        assert!(out.feedback.message.contains("higher"));
        assert!(!out.view.won);
    }

    #[tokio::test]
    async fn test_guess_without_session_starts_one() {
        let h = Harness::fixed(42);
        let out = h.submit().execute(None, "42").await.unwrap();
        assert!(out.view.won);
        assert_eq!(out.view.attempts, 1);
        assert_eq!(h.stored(&out.view.session_token).await.secret, 42);
    }

    #[tokio::test]
    async fn test_reset_after_win() {
        let h = Harness::new(Arc::new(RandomSecret));
        let token = h.view().execute(None).await.unwrap().session_token;
        let secret = h.stored(&token).await.secret;

        let won = h
            .submit()
            .execute(Some(&token), &secret.to_string())
            .await
            .unwrap();
        assert!(won.view.won);

        let fresh = h.reset().execute(Some(&token)).await.unwrap();
        assert_eq!(fresh.attempts, 0);
        assert!(!fresh.won);
        assert_ne!(fresh.session_token, token);

        let stored = h.stored(&fresh.session_token).await;
        assert!(h.config.range.contains(stored.secret));
        assert_eq!(h.repo.len().await, 1);

        // The old token no longer resolves; viewing with it starts another game
        let after = h.view().execute(Some(&token)).await.unwrap();
        assert_ne!(after.session_token, token);
    }

    #[tokio::test]
    async fn test_reset_without_session() {
        let h = Harness::fixed(42);
        let fresh = h.reset().execute(None).await.unwrap();
        assert_eq!(fresh.attempts, 0);
        assert!(!fresh.won);
    }

    #[tokio::test]
    async fn test_secret_always_in_range() {
        let h = Harness::new(Arc::new(RandomSecret));
        for _ in 0..50 {
            let token = h.reset().execute(None).await.unwrap().session_token;
            assert!(h.config.range.contains(h.stored(&token).await.secret));
        }
    }
}

#[cfg(test)]
mod router_tests {
    use crate::application::config::GameConfig;
    use crate::domain::services::FixedSecret;
    use crate::infra::memory::InMemoryGameRepository;
    use crate::presentation::router::{game_router, game_router_generic};
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, Response, StatusCode, header};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        game_router_generic(
            InMemoryGameRepository::new(),
            GameConfig::development(),
            Arc::new(FixedSecret(42)),
        )
    }

    fn session_cookie(response: &Response<Body>) -> String {
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("session cookie")
            .to_str()
            .unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    async fn body_text(response: Response<Body>) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn post_guess(value: &str, cookie: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/guess")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(header::COOKIE, cookie)
            .body(Body::from(format!("guess={value}")))
            .unwrap()
    }

    #[tokio::test]
    async fn test_view_sets_cookie_and_renders_form() {
        let response = app().oneshot(get("/", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(cookie.starts_with("guess_session="));
        assert!(cookie.contains("HttpOnly"));
        assert!(!cookie.contains("Secure"));
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");

        let html = body_text(response).await;
        assert!(html.contains(r#"action="/guess""#));
        assert!(html.contains("Attempts: <strong>0</strong>"));
    }

    #[tokio::test]
    async fn test_guess_flow_over_http() {
        let app = app();
        let cookie = session_cookie(&app.clone().oneshot(get("/", None)).await.unwrap());

        let response = app.clone().oneshot(post_guess("50", &cookie)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(session_cookie(&response), cookie);
        let html = body_text(response).await;
        assert!(html.contains(r#"class="message hint""#));
        assert!(html.contains("Guess lower!"));
        assert!(html.contains("Attempts: <strong>1</strong>"));

        let response = app.clone().oneshot(post_guess("42", &cookie)).await.unwrap();
        let html = body_text(response).await;
        assert!(html.contains(r#"class="message success""#));
        assert!(html.contains("<strong>2</strong> attempt(s)"));

        let response = app.clone().oneshot(post_guess("abc", &cookie)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(r#"class="message error""#));
        assert!(html.contains("Please submit a valid number."));
        assert!(html.contains("<strong>2</strong> attempt(s)"));
    }

    #[tokio::test]
    async fn test_missing_guess_field_is_invalid_input() {
        let app = app();
        let cookie = session_cookie(&app.clone().oneshot(get("/", None)).await.unwrap());

        let request = Request::builder()
            .method("POST")
            .uri("/guess")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(header::COOKIE, &cookie)
            .body(Body::empty())
            .unwrap();
        let html = body_text(app.oneshot(request).await.unwrap()).await;
        assert!(html.contains("Please submit a valid number."));
        assert!(html.contains("Attempts: <strong>0</strong>"));
    }

    #[tokio::test]
    async fn test_guess_without_form_content_type_is_invalid_input() {
        let app = app();
        let cookie = session_cookie(&app.clone().oneshot(get("/", None)).await.unwrap());

        let request = Request::builder()
            .method("POST")
            .uri("/guess")
            .header(header::COOKIE, &cookie)
            .body(Body::from("guess=42"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(r#"class="message error""#));
        assert!(html.contains("Please submit a valid number."));
        assert!(html.contains("Attempts: <strong>0</strong>"));
    }

    #[tokio::test]
    async fn test_repeated_guess_field_uses_first_value() {
        let app = app();
        let cookie = session_cookie(&app.clone().oneshot(get("/", None)).await.unwrap());

        let response = app
            .oneshot(post_guess("42&guess=7", &cookie))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(html.contains("Congratulations! 42 is correct!"));
        assert!(html.contains("<strong>1</strong> attempt(s)"));
    }

    #[tokio::test]
    async fn test_reset_redirects_with_new_session() {
        let app = app();
        let cookie = session_cookie(&app.clone().oneshot(get("/", None)).await.unwrap());
        app.clone().oneshot(post_guess("42", &cookie)).await.unwrap();

        for method in ["GET", "POST"] {
            let request = Request::builder()
                .method(method)
                .uri("/reset")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap();
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            assert_eq!(response.headers()[header::LOCATION], "/");
            assert_ne!(session_cookie(&response), cookie);

            let fresh = session_cookie(&response);
            let html = body_text(app.clone().oneshot(get("/", Some(&fresh))).await.unwrap()).await;
            assert!(html.contains("Attempts: <strong>0</strong>"));
        }
    }

    #[tokio::test]
    async fn test_full_session_store_returns_problem_json() {
        let app = game_router_generic(
            InMemoryGameRepository::with_max_sessions(1),
            GameConfig::development(),
            Arc::new(FixedSecret(42)),
        );
        let cookie = session_cookie(&app.clone().oneshot(get("/", None)).await.unwrap());

        let response = app.clone().oneshot(get("/", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        let body = body_text(response).await;
        assert!(body.contains(r#""kind":"SERVICE_UNAVAILABLE""#));
        assert!(body.contains("session store is full"));

        // The player who already holds a session keeps playing
        let response = app.oneshot(post_guess("50", &cookie)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Guess lower!"));
    }

    #[tokio::test]
    async fn test_stylesheet() {
        let app = game_router(InMemoryGameRepository::new(), GameConfig::development());
        let response = app.oneshot(get("/style.css", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/css"));
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert!(body_text(response).await.contains(".card{"));
    }
}

#[cfg(test)]
mod config_tests {
    use crate::application::config::*;
    use crate::domain::value_objects::GuessRange;
    use std::time::Duration;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.range, GuessRange::new(1, 100).unwrap());
        assert_eq!(config.session_ttl, Duration::from_secs(86400));
        assert_eq!(config.max_sessions, 100_000);
        assert_eq!(config.session_cookie_name, "guess_session");
        assert!(config.cookie_secure);
        assert_eq!(config.cookie_same_site, SameSite::Lax);
    }

    #[test]
    fn test_default_config_draws_fresh_hmac_key() {
        let config1 = GameConfig::default();
        let config2 = GameConfig::default();

        assert_ne!(config1.session_secret, [0u8; 32]);
        assert_ne!(config1.session_secret, config2.session_secret);
    }

    #[test]
    fn test_session_ttl_ms_saturates() {
        let config = GameConfig {
            session_ttl: Duration::from_secs(u64::MAX),
            ..GameConfig::default()
        };
        assert_eq!(config.session_ttl_ms(), i64::MAX);

        let config = GameConfig::default();
        assert_eq!(config.session_ttl_ms(), 86_400_000);
    }

    #[test]
    fn test_development_config() {
        let config = GameConfig::development();

        assert!(!config.cookie_secure);
        assert!(config.session_secret.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_cookie_config_follows_game_config() {
        let config = GameConfig::development();
        let cookie = config.cookie_config();

        assert_eq!(cookie.name, "guess_session");
        assert!(!cookie.secure);
        assert!(cookie.http_only);
        assert_eq!(cookie.max_age_secs, Some(86400));
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use kernel::error::{app_error::AppError, kind::ErrorKind};

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(GuessError, StatusCode)> = vec![
            (GuessError::InvalidInput, StatusCode::BAD_REQUEST),
            (
                GuessError::Store("down".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.status_code(), expected_status);
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_conversion_to_app_error() {
        let app_err = AppError::from(GuessError::InvalidInput);
        assert_eq!(app_err.kind(), ErrorKind::BadRequest);
        assert_eq!(app_err.message(), "Please submit a valid number.");
        assert!(app_err.action().is_some());

        let app_err = AppError::from(GuessError::Store("full".into()));
        assert_eq!(app_err.kind(), ErrorKind::ServiceUnavailable);
        assert_eq!(app_err.status_code(), 503);
        assert_eq!(app_err.action(), Some("Please try again"));
    }
}
