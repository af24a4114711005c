/**
 * Team and Player Routes
 *
 * Reads require authentication; writes also require the admin role.
 */

use axum::{routing::get, Router};

use crate::backend::roster::handlers::{create, delete, get_one, list, update};
use crate::backend::server::state::AppState;
use crate::shared::{Player, TeamMember};

/// Configure team and player routes
pub fn configure_roster_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/api/team",
            get(list::<TeamMember>).post(create::<TeamMember>),
        )
        .route(
            "/api/team/{id}",
            get(get_one::<TeamMember>)
                .put(update::<TeamMember>)
                .delete(delete::<TeamMember>),
        )
        .route(
            "/api/players",
            get(list::<Player>).post(create::<Player>),
        )
        .route(
            "/api/players/{id}",
            get(get_one::<Player>)
                .put(update::<Player>)
                .delete(delete::<Player>),
        )
}
