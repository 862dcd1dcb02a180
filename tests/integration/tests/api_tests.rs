//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

async fn signup(server: &TestServer) -> (SignupRequest, AuthResponse) {
    let request = SignupRequest::unique();
    let response = server.post("/v1/user/signup", &request).await.unwrap();
    let auth = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, auth)
}

/// Register an image and create a movie filed under the given genres
async fn create_movie(server: &TestServer, admin: &str, genres: Vec<String>) -> MovieWriteResponse {
    let response = server
        .post_auth("/v1/admin/images", admin, &ImageRequest::uploaded())
        .await
        .unwrap();
    let image: CreatedImageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/v1/admin/movies", admin, &MovieRequest::unique(image.id, genres))
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Operational
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_status() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/status").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["status"], "available");
    assert!(body["version"].is_string());
}

// ============================================================================
// Auth
// ============================================================================

#[tokio::test]
async fn test_signup_and_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = signup(&server).await;

    assert_eq!(auth.user.email, request.email);
    assert_eq!(auth.user.user_type, "user");
    assert_eq!(auth.token_type, "Bearer");

    let response = server
        .post("/v1/user/login", &LoginRequest::from_signup(&request))
        .await
        .unwrap();
    let login: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(login.user.id, auth.user.id);
    assert!(!login.access_token.is_empty());
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = signup(&server).await;

    let response = server.post("/v1/user/signup", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_signup_weak_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = SignupRequest::unique();
    request.password = "password".to_string();

    let response = server.post("/v1/user/signup", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = signup(&server).await;

    let wrong_password = LoginRequest {
        email: request.email.clone(),
        password: "WrongPass123!".to_string(),
    };
    let response = server.post("/v1/user/login", &wrong_password).await.unwrap();
    let wrong_password: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let unknown_email = LoginRequest {
        email: format!("nobody{}@example.com", unique_suffix()),
        password: TEST_PASSWORD.to_string(),
    };
    let response = server.post("/v1/user/login", &unknown_email).await.unwrap();
    let unknown_email: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();

    assert_eq!(wrong_password.error.message, unknown_email.error.message);
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let body = serde_json::json!({ "refresh_token": auth.refresh_token });
    let response = server.post("/v1/user/refresh", &body).await.unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(refreshed.user.id, auth.user.id);

    // An access token is not accepted as a refresh token
    let body = serde_json::json!({ "refresh_token": auth.access_token });
    let response = server.post("/v1/user/refresh", &body).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Genres
// ============================================================================

#[tokio::test]
async fn test_genre_admin_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_login().await.unwrap();

    let request = GenreRequest::unique();
    let response = server
        .post_auth("/v1/admin/genres", &admin.access_token, &request)
        .await
        .unwrap();
    let genre: GenreResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(genre.genre_name, request.genre_name);

    let response = server
        .post_auth("/v1/admin/genres", &admin.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let renamed = GenreRequest::unique();
    let response = server
        .put_auth(&format!("/v1/admin/genres/{}", genre.id), &admin.access_token, &renamed)
        .await
        .unwrap();
    let updated: GenreResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.genre_name, renamed.genre_name);

    let response = server.get("/v1/genres").await.unwrap();
    let genres: Vec<GenreResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(genres.iter().any(|g| g.genre_name == "Unknown"));
    assert!(genres.iter().any(|g| g.id == genre.id));

    let response = server
        .delete_auth(&format!("/v1/admin/genres/{}", genre.id), &admin.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/v1/genres/{}", genre.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_genre_admin_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, viewer) = signup(&server).await;

    let response = server
        .post_auth("/v1/admin/genres", &viewer.access_token, &GenreRequest::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Movies
// ============================================================================

#[tokio::test]
async fn test_movie_listing_and_detail() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_login().await.unwrap();

    let genre_request = GenreRequest::unique();
    let response = server
        .post_auth("/v1/admin/genres", &admin.access_token, &genre_request)
        .await
        .unwrap();
    let genre: GenreResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let movie = create_movie(&server, &admin.access_token, vec![genre.genre_name.clone()]).await;
    assert_eq!(
        movie.genres.get(&genre.id.to_string()),
        Some(&genre.genre_name)
    );

    let path = format!("/v1/movies?genre={}&order_by=title", genre.id);
    let response = server.get(&path).await.unwrap();
    let page: PaginatedMoviesResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.total_count, 1);
    assert_eq!(page.current_page, 1);
    assert_eq!(page.movies[0].id, movie.id);
    assert!((page.movies[0].rating - 1.0).abs() < f64::EPSILON);
    assert!(page.movies[0].image.starts_with("http"));
    assert!(!page.movies[0].is_favorite);

    let response = server.get(&format!("/v1/movies/{}", movie.id)).await.unwrap();
    let detail: MovieDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.movie.id, movie.id);
    assert!(detail.comments.is_empty());

    let response = server.get("/v1/movies/featured").await.unwrap();
    let featured: Vec<MovieResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(featured.len() <= 5);
}

#[tokio::test]
async fn test_movie_listing_rejects_bad_pagination() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/v1/movies?page=first").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.message, "current page should be a number");

    let response = server.get("/v1/movies?limit=ten").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.message, "per page limit should be a number");
}

#[tokio::test]
async fn test_movie_without_genres_is_unknown() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_login().await.unwrap();

    let movie = create_movie(&server, &admin.access_token, Vec::new()).await;
    assert_eq!(movie.genres.len(), 1);
    assert!(movie.genres.values().any(|name| name == "Unknown"));
}

#[tokio::test]
async fn test_movie_unknown_genre_name_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_login().await.unwrap();

    let response = server
        .post_auth("/v1/admin/images", &admin.access_token, &ImageRequest::uploaded())
        .await
        .unwrap();
    let image: CreatedImageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let request = MovieRequest::unique(image.id, vec![format!("Missing {}", unique_suffix())]);
    let response = server
        .post_auth("/v1/admin/movies", &admin.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_movie_duplicate_title() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_login().await.unwrap();

    let response = server
        .post_auth("/v1/admin/images", &admin.access_token, &ImageRequest::uploaded())
        .await
        .unwrap();
    let image: CreatedImageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let request = MovieRequest::unique(image.id, Vec::new());
    let response = server
        .post_auth("/v1/admin/movies", &admin.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/v1/admin/movies", &admin.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_image_in_use_cannot_be_deleted() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_login().await.unwrap();

    let response = server
        .post_auth("/v1/admin/images", &admin.access_token, &ImageRequest::uploaded())
        .await
        .unwrap();
    let image: CreatedImageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(image.image_name.ends_with(".jpg"));

    let request = MovieRequest::unique(image.id, Vec::new());
    let response = server
        .post_auth("/v1/admin/movies", &admin.access_token, &request)
        .await
        .unwrap();
    let movie: MovieWriteResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let image_path = format!("/v1/admin/images/{}", image.id);
    let response = server.delete_auth(&image_path, &admin.access_token).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // Deleting the movie releases its image record
    let response = server
        .delete_auth(&format!("/v1/admin/movies/{}", movie.id), &admin.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth(&image_path, &admin.access_token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Ratings, comments, favorites
// ============================================================================

#[tokio::test]
async fn test_rating_upsert() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_login().await.unwrap();
    let (_, viewer) = signup(&server).await;
    let movie = create_movie(&server, &admin.access_token, Vec::new()).await;

    let first = RateMovieRequest { movie_id: movie.id, rating: 8.0 };
    let response = server.post_auth("/v1/rating", &viewer.access_token, &first).await.unwrap();
    let created: RatingResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(created.created);

    let second = RateMovieRequest { movie_id: movie.id, rating: 6.0 };
    let response = server.post_auth("/v1/rating", &viewer.access_token, &second).await.unwrap();
    let updated: RatingResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!updated.created);
    assert_eq!(updated.id, created.id);

    let response = server.get(&format!("/v1/movies/{}", movie.id)).await.unwrap();
    let detail: MovieDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!((detail.movie.rating - 6.0).abs() < f64::EPSILON);

    let out_of_range = RateMovieRequest { movie_id: movie.id, rating: 11.0 };
    let response = server
        .post_auth("/v1/rating", &viewer.access_token, &out_of_range)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_comment_permissions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_login().await.unwrap();
    let (_, author) = signup(&server).await;
    let (_, other) = signup(&server).await;
    let movie = create_movie(&server, &admin.access_token, Vec::new()).await;

    let response = server
        .post_auth(
            &format!("/v1/movies/{}/comments", movie.id),
            &author.access_token,
            &CommentRequest::new("Loved every minute of it."),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comment.user_id, author.user.id);

    let comment_path = format!("/v1/comments/{}", comment.id);
    let edit = CommentRequest::new("Someone else's opinion.");
    let response = server.put_auth(&comment_path, &other.access_token, &edit).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.get(&format!("/v1/movies/{}", movie.id)).await.unwrap();
    let detail: MovieDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.movie.total_comments, 1);
    assert_eq!(detail.comments[0].user_name, author.user.full_name);

    // Admins may remove any comment
    let response = server.delete_auth(&comment_path, &admin.access_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_favorite_toggle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_login().await.unwrap();
    let (_, viewer) = signup(&server).await;
    let movie = create_movie(&server, &admin.access_token, Vec::new()).await;
    let path = format!("/v1/movies/{}/favorite", movie.id);

    let response = server
        .post_auth(&path, &viewer.access_token, &serde_json::json!({}))
        .await
        .unwrap();
    let favorite: FavoriteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(favorite.is_favorite);

    let response = server
        .get_auth(&format!("/v1/movies/{}", movie.id), &viewer.access_token)
        .await
        .unwrap();
    let detail: MovieDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(detail.movie.is_favorite);
    assert_eq!(detail.movie.total_favorites, 1);

    let response = server.delete_auth(&path, &viewer.access_token).await.unwrap();
    let favorite: FavoriteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!favorite.is_favorite);

    // Removing twice is harmless
    let response = server.delete_auth(&path, &viewer.access_token).await.unwrap();
    let favorite: FavoriteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!favorite.is_favorite);
}
