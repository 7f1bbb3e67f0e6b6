use crate::error::AlmanacError;
use crate::shared::auth::protect_route;
use actix_web::{web, HttpRequest, HttpResponse};
use almanac_api_structs::get_me::APIResponse;
use almanac_infra::AlmanacContext;

pub async fn get_me_controller(
    http_req: HttpRequest,
    ctx: web::Data<AlmanacContext>,
) -> Result<HttpResponse, AlmanacError> {
    let user = protect_route(&http_req, &ctx).await?;

    Ok(HttpResponse::Ok().json(APIResponse::new(user)))
}
