use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::filter_catalog;
use crate::models::{ListOpportunitiesQuery, OpportunityListResponse, OpportunityQuery};
use crate::routes::{validation_error_response, AppState};

/// Configure catalog listing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/opportunities", web::get().to(list_opportunities));
}

/// List opportunities
///
/// GET /api/v1/opportunities?location=&company=&page=1&limit=20
async fn list_opportunities(
    state: web::Data<AppState>,
    query: web::Query<ListOpportunitiesQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_error_response(errors.to_string());
    }

    let query: OpportunityQuery = query.into_inner().into();
    let catalog = state.catalog.snapshot_or_empty().await;
    let page = filter_catalog(&catalog, &query);

    tracing::debug!(
        "Listing page {} of {} ({} matching opportunities)",
        page.page,
        page.total_pages,
        page.total
    );

    HttpResponse::Ok().json(OpportunityListResponse::from(page))
}
