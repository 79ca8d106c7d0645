//! Stored picture serving.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::Response;
use tokio_util::io::ReaderStream;

use crate::AppState;
use crate::error::{ApiError, ApiResult};

/// `GET /files/rentalpicture/{id}/{filename}` — stream a stored picture.
///
/// Public: pictures are linked from rental listings that render before any
/// login. The store resolves strictly inside the rental's directory.
pub async fn get_rental_picture_handler(
    State(state): State<AppState>,
    Path((id, filename)): Path<(i64, String)>,
) -> ApiResult<Response> {
    let path = state.files.load(id, &filename).await?;
    let file = tokio::fs::File::open(&path)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Response::builder()
        .header(header::CONTENT_TYPE, content_type_for(&filename))
        .body(Body::from_stream(ReaderStream::new(file)))
        .map_err(|e| ApiError::Internal(e.to_string()))
}

/// Content type from the filename extension; octet-stream when unknown.
fn content_type_for(filename: &str) -> &'static str {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_types_follow_the_extension() {
        assert_eq!(content_type_for("a.JPG"), "image/jpeg");
        assert_eq!(content_type_for("a.jpeg"), "image/jpeg");
        assert_eq!(content_type_for("a.png"), "image/png");
        assert_eq!(content_type_for("archive.tar.gz"), "application/octet-stream");
        assert_eq!(content_type_for("noext"), "application/octet-stream");
    }
}
