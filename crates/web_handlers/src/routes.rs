use actix_web::web;

use crate::campground_handlers::*;
use crate::forms::form_config;

/// Registers every page route plus the not-found fallback.
///
/// Each `route` call guards on its method at the resource level, so a path
/// requested with an unregistered method falls through to the fallback.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(form_config())
        .route("/", web::get().to(home))
        .route("/campgrounds", web::get().to(list_campgrounds))
        .route("/campgrounds", web::post().to(create_campground))
        // Must precede `/campgrounds/{id}`.
        .route("/campgrounds/new", web::get().to(new_campground_form))
        .route("/campgrounds/{id}", web::get().to(show_campground))
        .route("/campgrounds/{id}", web::put().to(update_campground))
        .route("/campgrounds/{id}", web::delete().to(delete_campground))
        .route("/campgrounds/{id}/edit", web::get().to(edit_campground_form))
        .default_service(web::route().to(route_not_found));
}
