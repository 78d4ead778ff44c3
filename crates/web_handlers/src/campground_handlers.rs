use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, web};
use campground_services::{CampgroundFields, CampgroundStore, validate_changes, validate_new};
use minijinja::context;

use crate::error_page::AppError;
use crate::forms::CampgroundForm;
use crate::templates;

/// Shared handle to the campground store, injected as application data
pub type StoreData = web::Data<dyn CampgroundStore>;

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Renders the landing page
pub async fn home() -> Result<HttpResponse, AppError> {
    Ok(html(templates::render("home.html", context! {})?))
}

/// Lists every campground
pub async fn list_campgrounds(store: StoreData) -> Result<HttpResponse, AppError> {
    let campgrounds = store.list().await?;
    Ok(html(templates::render(
        "campgrounds/index.html",
        context! { campgrounds },
    )?))
}

/// Renders the empty creation form
pub async fn new_campground_form() -> Result<HttpResponse, AppError> {
    Ok(html(templates::render("campgrounds/new.html", context! {})?))
}

/// Validates the submitted form, creates the campground and redirects to it.
/// Invalid input never reaches the store.
pub async fn create_campground(
    store: StoreData,
    form: web::Form<CampgroundForm>,
) -> Result<HttpResponse, AppError> {
    let fields = CampgroundFields::from(form.into_inner());
    let campground = validate_new(&fields)?;

    let created = store.create(campground).await?;
    log::info!("🏕️ Created campground {} ({})", created.id, created.title);

    Ok(redirect(&format!("/campgrounds/{}", created.id)))
}

/// Renders the detail page for one campground
pub async fn show_campground(
    store: StoreData,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let campground = store.get(&path.into_inner()).await?;
    Ok(html(templates::render(
        "campgrounds/show.html",
        context! { campground },
    )?))
}

/// Renders the edit form prefilled with the current values
pub async fn edit_campground_form(
    store: StoreData,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let campground = store.get(&path.into_inner()).await?;
    Ok(html(templates::render(
        "campgrounds/edit.html",
        context! { campground },
    )?))
}

/// Applies the submitted fields to one campground and redirects to it.
/// A submission without any field only checks that the campground exists.
pub async fn update_campground(
    store: StoreData,
    path: web::Path<String>,
    form: web::Form<CampgroundForm>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let changes = validate_changes(&CampgroundFields::from(form.into_inner()))?;

    let campground = if changes.is_empty() {
        store.get(&id).await?
    } else {
        let updated = store.update(&id, changes).await?;
        log::info!("✏️ Updated campground {}", updated.id);
        updated
    };

    Ok(redirect(&format!("/campgrounds/{}", campground.id)))
}

/// Deletes one campground and redirects to the listing
pub async fn delete_campground(
    store: StoreData,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    store.delete(&id).await?;
    log::info!("🗑️ Deleted campground {}", id);

    Ok(redirect("/campgrounds"))
}

/// Fallback for every request that matches no route
pub async fn route_not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::RouteNotFound)
}
