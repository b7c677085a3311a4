use crate::fetch::mock::MockImageFetcher;
use crate::http::tests::{test_server, test_server_with};
use crate::images::requests::ResizeImageRequest;
use crate::images::responses::{
    ResizeImageErrorReason, ResizeImageErrorResponse, ResizeImageResponse,
};
use crate::storage::mock::MockObjectStorage;
use axum::http::StatusCode;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

fn encoded_image(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let image = DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 90])
    }));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), format)
        .unwrap();
    bytes
}

fn request(image_link: &str, directory_name: &str) -> ResizeImageRequest {
    ResizeImageRequest {
        image_link: image_link.to_string(),
        directory_name: directory_name.to_string(),
    }
}

#[tokio::test]
async fn test_resize_png_upload_key_and_content_type() {
    let link = "https://host/pics/cat.png";
    let fetcher = MockImageFetcher::new().with_body(link, encoded_image(1000, 600, ImageFormat::Png));
    let storage = MockObjectStorage::new();
    let server = test_server_with(fetcher, storage.clone());

    let response = server
        .post("/api/resize_image")
        .form(&request(link, "animals"))
        .await;

    response.assert_status_ok();
    response.assert_json(&ResizeImageResponse {
        error: false,
        key: String::from("animals/cat-resized.png"),
        content_type: String::from("image/png"),
        width: 500,
        height: 300,
        size: storage.uploads()[0].bytes.len(),
    });
    let uploads = storage.uploads();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].key.as_ref(), "animals/cat-resized.png");
    assert_eq!(uploads[0].content_type, "image/png");
    assert_eq!(uploads[0].size, uploads[0].bytes.len() as i64);
}

#[tokio::test]
async fn test_every_supported_extension_is_resized_to_target_width() {
    let cases = [
        (".jpg", ImageFormat::Jpeg, "image/jpeg"),
        (".jpeg", ImageFormat::Jpeg, "image/jpeg"),
        (".png", ImageFormat::Png, "image/png"),
        (".webp", ImageFormat::WebP, "image/webp"),
    ];
    for (extension, format, content_type) in cases {
        let link = format!("https://host/pics/photo{}", extension);
        let fetcher = MockImageFetcher::new().with_body(&link, encoded_image(800, 333, format));
        let storage = MockObjectStorage::new();
        let server = test_server_with(fetcher, storage.clone());

        let response = server
            .post("/api/resize_image")
            .form(&request(&link, "gallery"))
            .await;

        response.assert_status_ok();
        let uploads = storage.uploads();
        assert_eq!(uploads.len(), 1, "{}", extension);
        assert_eq!(
            uploads[0].key.as_ref(),
            format!("gallery/photo-resized{}", extension)
        );
        assert_eq!(uploads[0].content_type, content_type);
        let uploaded = image::load_from_memory_with_format(&uploads[0].bytes, format).unwrap();
        // 333 * 500 / 800 = 208.125
        assert_eq!((uploaded.width(), uploaded.height()), (500, 208), "{}", extension);
    }
}

#[tokio::test]
async fn test_target_width_input_keeps_dimensions() {
    let link = "https://host/pics/exact.png";
    let fetcher = MockImageFetcher::new().with_body(link, encoded_image(500, 321, ImageFormat::Png));
    let storage = MockObjectStorage::new();
    let server = test_server_with(fetcher, storage.clone());

    let response = server
        .post("/api/resize_image")
        .form(&request(link, "exact"))
        .await;

    response.assert_status_ok();
    let body = response.json::<ResizeImageResponse>();
    assert_eq!((body.width, body.height), (500, 321));
    let uploaded = image::load_from_memory(&storage.uploads()[0].bytes).unwrap();
    assert_eq!((uploaded.width(), uploaded.height()), (500, 321));
}

#[tokio::test]
async fn test_unsupported_extension_is_not_fetched_nor_uploaded() {
    let link = "https://host/pics/animated.gif";
    let fetcher = MockImageFetcher::new().with_body(link, b"GIF89a".to_vec());
    let storage = MockObjectStorage::new();
    let server = test_server_with(fetcher.clone(), storage.clone());

    let response = server
        .post("/api/resize_image")
        .form(&request(link, "animals"))
        .await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body = response.json::<ResizeImageErrorResponse>();
    assert!(body.error);
    assert_eq!(body.reason, ResizeImageErrorReason::UnsupportedFormat);
    assert_eq!(fetcher.fetch_count(), 0);
    assert!(storage.uploads().is_empty());
}

#[tokio::test]
async fn test_fetch_failure_is_reported_without_upload() {
    let fetcher = MockImageFetcher::new();
    let storage = MockObjectStorage::new();
    let server = test_server_with(fetcher.clone(), storage.clone());

    let response = server
        .post("/api/resize_image")
        .form(&request("https://host/pics/missing.png", "animals"))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body = response.json::<ResizeImageErrorResponse>();
    assert_eq!(body.reason, ResizeImageErrorReason::FetchFailed);
    assert_eq!(fetcher.fetch_count(), 1);
    assert!(storage.uploads().is_empty());
}

#[tokio::test]
async fn test_malformed_image_does_not_take_down_the_server() {
    let link = "https://host/pics/broken.jpg";
    let fetcher = MockImageFetcher::new()
        .with_body(link, b"<html>definitely not a jpeg</html>".to_vec())
        .with_body(
            "https://host/pics/fine.jpg",
            encoded_image(1000, 1000, ImageFormat::Jpeg),
        );
    let storage = MockObjectStorage::new();
    let server = test_server_with(fetcher, storage.clone());

    let response = server
        .post("/api/resize_image")
        .form(&request(link, "animals"))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<ResizeImageErrorResponse>();
    assert_eq!(body.reason, ResizeImageErrorReason::DecodeFailed);
    assert!(storage.uploads().is_empty());

    let response = server
        .post("/api/resize_image")
        .form(&request("https://host/pics/fine.jpg", "animals"))
        .await;

    response.assert_status_ok();
    assert_eq!(storage.uploads().len(), 1);
}

#[tokio::test]
async fn test_upload_failure_is_reported() {
    let link = "https://host/pics/cat.png";
    let fetcher = MockImageFetcher::new().with_body(link, encoded_image(600, 400, ImageFormat::Png));
    let server = test_server_with(fetcher, MockObjectStorage::failing());

    let response = server
        .post("/api/resize_image")
        .form(&request(link, "animals"))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body = response.json::<ResizeImageErrorResponse>();
    assert_eq!(body.reason, ResizeImageErrorReason::UploadFailed);
    assert!(body.message.contains("animals/cat-resized.png"));
}

#[tokio::test]
async fn test_invalid_image_link() {
    let server = test_server();

    let response = server
        .post("/api/resize_image")
        .form(&request("cat.png", "animals"))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<ResizeImageErrorResponse>();
    assert_eq!(body.reason, ResizeImageErrorReason::InvalidImageLink);
}

#[tokio::test]
async fn test_missing_form_field_is_rejected() {
    let server = test_server();

    let response = server
        .post("/api/resize_image")
        .form(&vec![("image_link", "https://host/pics/cat.png")])
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_tall_narrow_image_is_rejected_without_upload() {
    let link = "https://host/pics/needle.png";
    let fetcher = MockImageFetcher::new().with_body(link, encoded_image(1, 65_535, ImageFormat::Png));
    let storage = MockObjectStorage::new();
    let server = test_server_with(fetcher, storage.clone());

    let response = server
        .post("/api/resize_image")
        .form(&request(link, "animals"))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<ResizeImageErrorResponse>();
    assert_eq!(body.reason, ResizeImageErrorReason::TooLarge);
    assert!(body.message.contains("500x32767500"));
    assert!(storage.uploads().is_empty());
    server.get("/health/check").await.assert_status_ok();
}
