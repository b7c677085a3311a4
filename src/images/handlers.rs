use crate::app_context::AppContext;
use crate::images::errors::ResizeError;
use crate::images::http::ResizeImageHttpHandler;
use crate::images::requests::ResizeImageRequest;
use crate::images::responses::ResizeImageResponse;
use axum::extract::State;
use axum::response::Json;
use axum::Form;

#[axum::debug_handler]
pub async fn resize_image(
    State(app_context): State<AppContext>,
    Form(request): Form<ResizeImageRequest>,
) -> Result<Json<ResizeImageResponse>, ResizeError> {
    let response = ResizeImageHttpHandler::new(app_context)
        .resize(request)
        .await?;
    Ok(Json(response))
}
