pub mod auth;
pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};
use axum::Router;
use medsite_db::models::{
    AboutContent, ContactInfo, Department, Facility, GalleryItem, HeroSlide, NewsEvent, Service,
    SiteSettings,
};
use medsite_db::Resource;

use crate::handlers::{content, news_events, singleton, upload};
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      login (public)
/// /auth/refresh                    refresh (public)
/// /auth/logout                     logout (requires admin)
///
/// /hero-slides                     list, create
/// /hero-slides/{id}                get, update, delete
/// /services, /facilities,
/// /departments, /gallery-items     (same as hero-slides)
/// /news-events                     list, create
/// /news-events/{id}                get, update, delete
/// /news-events/by-link?link=       get by slug
///
/// /site-settings                   get, save (upsert), update
/// /site-settings/{id}              update (id must be 1)
/// /about-content, /contact-info    (same as site-settings)
///
/// /upload                          multipart upload (requires admin)
/// ```
///
/// Reads are public; every write requires an admin access token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .route(
            "/upload",
            post(upload::upload_file).layer(DefaultBodyLimit::max(upload::UPLOAD_BODY_LIMIT)),
        )
        // Singletons.
        .nest(&mount::<SiteSettings>(), singleton_router::<SiteSettings>())
        .nest(&mount::<AboutContent>(), singleton_router::<AboutContent>())
        .nest(&mount::<ContactInfo>(), singleton_router::<ContactInfo>())
        // Collections.
        .nest(&mount::<HeroSlide>(), collection_router::<HeroSlide>())
        .nest(&mount::<Service>(), collection_router::<Service>())
        .nest(&mount::<Facility>(), collection_router::<Facility>())
        .nest(&mount::<Department>(), collection_router::<Department>())
        .nest(&mount::<GalleryItem>(), collection_router::<GalleryItem>())
        .nest(
            &mount::<NewsEvent>(),
            collection_router::<NewsEvent>().route("/by-link", get(news_events::get_by_link)),
        )
}

/// CRUD routes for a collection resource.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn collection_router<R: Resource>() -> Router<AppState> {
    Router::new()
        .route("/", get(content::list::<R>).post(content::create::<R>))
        .route(
            "/{id}",
            get(content::get_by_id::<R>)
                .put(content::update::<R>)
                .delete(content::delete::<R>),
        )
}

/// Routes for a singleton resource.
///
/// ```text
/// GET  /       -> fetch
/// POST /       -> save (insert or replace)
/// PUT  /       -> update
/// PUT  /{id}   -> update_by_id
/// ```
pub fn singleton_router<R: Resource>() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(singleton::fetch::<R>)
                .post(singleton::save::<R>)
                .put(singleton::update::<R>),
        )
        .route("/{id}", put(singleton::update_by_id::<R>))
}

/// Mount point of a resource, e.g. `/news-events`.
fn mount<R: Resource>() -> String {
    format!("/{}", R::schema().path)
}
