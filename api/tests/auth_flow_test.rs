//! Registration, login and bearer-token access through the full app

mod common;

#[cfg(test)]
mod tests {
    use actix_web::test;
    use serde_json::json;

    use shelf_api::create_app;
    use shelf_core::services::auth::NOT_LOGGED_IN_MESSAGE;
    use shelf_shared::config::Environment;

    use crate::common::{bearer, read, register_request, state};

    #[actix_web::test]
    async fn test_register_login_and_me() {
        let app = test::init_service(create_app(state(Environment::Production))).await;

        let resp = test::call_service(&app, register_request("alice", "Alice@Example.com").to_request()).await;
        let (status, body) = read(resp).await;
        assert_eq!(status, 201);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "User registered successfully");
        assert_eq!(body["data"]["email"], "alice@example.com");
        assert!(body["data"].get("passwordHash").is_none());

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "alice@example.com", "password": "secret123" }))
            .to_request();
        let (status, body) = read(test::call_service(&app, req).await).await;
        assert_eq!(status, 200);
        assert_eq!(body["message"], "Logged in successfully");
        let token = body["token"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header(bearer(&token))
            .to_request();
        let (status, body) = read(test::call_service(&app, req).await).await;
        assert_eq!(status, 200);
        assert_eq!(body["data"]["userName"], "alice");
    }

    #[actix_web::test]
    async fn test_duplicate_registration_conflicts() {
        let app = test::init_service(create_app(state(Environment::Production))).await;

        let resp = test::call_service(&app, register_request("alice", "a@b.com").to_request()).await;
        assert_eq!(resp.status(), 201);

        let resp = test::call_service(&app, register_request("bob", "a@b.com").to_request()).await;
        let (status, body) = read(resp).await;
        assert_eq!(status, 409);
        assert_eq!(body["status"], "fail");
        assert_eq!(body["message"], "User with this email already exists");
    }

    #[actix_web::test]
    async fn test_register_validation_lists_missing_fields() {
        let app = test::init_service(create_app(state(Environment::Production))).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({}))
            .to_request();
        let (status, body) = read(test::call_service(&app, req).await).await;
        assert_eq!(status, 400);
        assert_eq!(
            body["message"],
            "Invalid input data: email is required. password is required. userName is required"
        );
    }

    #[actix_web::test]
    async fn test_login_failures() {
        let app = test::init_service(create_app(state(Environment::Production))).await;
        test::call_service(&app, register_request("alice", "a@b.com").to_request()).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "a@b.com" }))
            .to_request();
        let (status, body) = read(test::call_service(&app, req).await).await;
        assert_eq!(status, 400);
        assert_eq!(body["message"], "Please provide an email and password");

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "a@b.com", "password": "wrong-password" }))
            .to_request();
        let (status, body) = read(test::call_service(&app, req).await).await;
        assert_eq!(status, 401);
        assert_eq!(body["message"], "Invalid credentials");
    }

    #[actix_web::test]
    async fn test_me_requires_token() {
        let app = test::init_service(create_app(state(Environment::Production))).await;

        let req = test::TestRequest::get().uri("/api/auth/me").to_request();
        let (status, body) = read(test::call_service(&app, req).await).await;
        assert_eq!(status, 401);
        assert_eq!(body["status"], "fail");
        assert_eq!(body["message"], NOT_LOGGED_IN_MESSAGE);

        let req = test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header(bearer("not.a.jwt"))
            .to_request();
        let (status, body) = read(test::call_service(&app, req).await).await;
        assert_eq!(status, 401);
        assert_eq!(body["message"], "Invalid token. Please log in again!");
    }

    #[actix_web::test]
    async fn test_post_writes_require_token() {
        let app = test::init_service(create_app(state(Environment::Production))).await;
        let post = json!({ "title": "Hello", "content": "First post" });

        let req = test::TestRequest::post().uri("/api/posts").set_json(&post).to_request();
        let (status, _) = read(test::call_service(&app, req).await).await;
        assert_eq!(status, 401);

        // Reads stay public
        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let (status, body) = read(test::call_service(&app, req).await).await;
        assert_eq!(status, 200);
        assert_eq!(body["count"], 0);

        let (_, body) = read(test::call_service(&app, register_request("alice", "a@b.com").to_request()).await).await;
        let token = body["token"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(bearer(&token))
            .set_json(&post)
            .to_request();
        let (status, body) = read(test::call_service(&app, req).await).await;
        assert_eq!(status, 201);
        assert_eq!(body["data"]["title"], "Hello");
    }
}
