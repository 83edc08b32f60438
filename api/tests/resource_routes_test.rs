//! CRUD over the public collections

mod common;

#[cfg(test)]
mod tests {
    use actix_web::test;
    use serde_json::json;

    use shelf_api::create_app;
    use shelf_shared::config::Environment;

    use crate::common::{read, state};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(create_app(state(Environment::Production))).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let (status, body) = read(test::call_service(&app, req).await).await;
        assert_eq!(status, 200);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["environment"], "production");
    }

    #[actix_web::test]
    async fn test_book_lifecycle() {
        let app = test::init_service(create_app(state(Environment::Production))).await;

        let req = test::TestRequest::post()
            .uri("/api/books")
            .set_json(json!({ "title": "Dune", "author": "Frank Herbert", "publishedYear": 1965 }))
            .to_request();
        let (status, body) = read(test::call_service(&app, req).await).await;
        assert_eq!(status, 201);
        assert_eq!(body["message"], "Book created successfully");
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::get().uri("/api/books").to_request();
        let (status, body) = read(test::call_service(&app, req).await).await;
        assert_eq!(status, 200);
        assert_eq!(body["count"], 1);

        let req = test::TestRequest::patch()
            .uri(&format!("/api/books/{}", id))
            .set_json(json!({ "title": "Dune Messiah" }))
            .to_request();
        let (status, body) = read(test::call_service(&app, req).await).await;
        assert_eq!(status, 200);
        assert_eq!(body["data"]["title"], "Dune Messiah");
        assert_eq!(body["data"]["author"], "Frank Herbert");

        let req = test::TestRequest::delete()
            .uri(&format!("/api/books/{}", id))
            .to_request();
        let (status, body) = read(test::call_service(&app, req).await).await;
        assert_eq!(status, 200);
        assert_eq!(body["message"], "Book deleted successfully");

        let req = test::TestRequest::get()
            .uri(&format!("/api/books/{}", id))
            .to_request();
        let (status, body) = read(test::call_service(&app, req).await).await;
        assert_eq!(status, 404);
        assert_eq!(body["message"], "Book not found");
    }

    #[actix_web::test]
    async fn test_malformed_id_is_a_cast_failure() {
        let app = test::init_service(create_app(state(Environment::Production))).await;

        let req = test::TestRequest::get().uri("/api/books/abc").to_request();
        let (status, body) = read(test::call_service(&app, req).await).await;
        assert_eq!(status, 400);
        assert_eq!(body["status"], "fail");
        assert_eq!(body["message"], "Invalid id: abc.");
    }

    #[actix_web::test]
    async fn test_task_validation_and_defaults() {
        let app = test::init_service(create_app(state(Environment::Production))).await;

        let req = test::TestRequest::post()
            .uri("/api/tasks")
            .set_json(json!({ "description": "no title" }))
            .to_request();
        let (status, body) = read(test::call_service(&app, req).await).await;
        assert_eq!(status, 400);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid input data: "));

        let req = test::TestRequest::post()
            .uri("/api/tasks")
            .set_json(json!({ "title": "Write tests" }))
            .to_request();
        let (status, body) = read(test::call_service(&app, req).await).await;
        assert_eq!(status, 201);
        assert_eq!(body["data"]["completed"], false);
    }
}
