use crate::{
    api::{attendance, holiday, leave_request, schedule},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-scope limiter config
    fn build_limiter(requests_per_min: u32) -> GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap()
    }

    let report_limiter = build_limiter(config.rate_report_per_min);
    let mutation_limiter = build_limiter(config.rate_mutation_per_min);

    cfg.service(
        web::scope(&config.api_prefix)
            .service(
                web::scope("/schedule")
                    // /schedule/monthly
                    .service(
                        web::resource("/monthly")
                            .wrap(Governor::new(&report_limiter))
                            .route(web::get().to(schedule::monthly_schedule)),
                    ),
            )
            .service(
                web::scope("/attendance")
                    .wrap(Governor::new(&mutation_limiter))
                    // /attendance/check-in
                    .service(
                        web::resource("/check-in").route(web::post().to(attendance::check_in)),
                    )
                    // /attendance/check-out
                    .service(
                        web::resource("/check-out").route(web::put().to(attendance::check_out)),
                    ),
            )
            .service(
                web::scope("/leave")
                    .wrap(Governor::new(&mutation_limiter))
                    // /leave
                    .service(
                        web::resource("")
                            .route(web::get().to(leave_request::leave_list))
                            .route(web::post().to(leave_request::create_leave)),
                    )
                    // /leave/{id}
                    .service(web::resource("/{id}").route(web::get().to(leave_request::get_leave)))
                    // /leave/{id}/approve
                    .service(
                        web::resource("/{id}/approve")
                            .route(web::put().to(leave_request::approve_leave)),
                    )
                    // /leave/{id}/reject
                    .service(
                        web::resource("/{id}/reject")
                            .route(web::put().to(leave_request::reject_leave)),
                    ),
            )
            .service(
                web::scope("/holiday")
                    .wrap(Governor::new(&mutation_limiter))
                    // /holiday
                    .service(
                        web::resource("")
                            .route(web::get().to(holiday::list_holidays))
                            .route(web::post().to(holiday::create_holiday)),
                    )
                    // /holiday/{date}
                    .service(
                        web::resource("/{date}").route(web::delete().to(holiday::delete_holiday)),
                    ),
            ),
    );
}
