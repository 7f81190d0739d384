//! App Router

use salvo::Router;

use crate::{auth, prices};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("prices")
                .get(prices::index::handler)
                .push(
                    Router::new()
                        .hoop(auth::middleware::handler)
                        .post(prices::create::handler),
                )
                .push(
                    Router::with_path("mine")
                        .hoop(auth::middleware::handler)
                        .get(prices::mine::handler),
                )
                .push(Router::with_path("{price}").get(prices::show::handler)),
        )
        .push(
            Router::with_path("products/{product}")
                .push(Router::with_path("price-stats").get(prices::stats::handler))
                .push(Router::with_path("price-history").get(prices::history::handler)),
        )
}
