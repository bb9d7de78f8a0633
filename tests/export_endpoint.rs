// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Export endpoint tests

use axum::http::{header, StatusCode};
use axum::Json;
use http_body_util::BodyExt;

use ocr_web::api::export::{export_handler, ExportRequest};

#[tokio::test]
async fn test_export_streams_text_as_attachment() {
    let response = export_handler(Json(ExportRequest {
        text: "alpha beta gamma".to_string(),
    }))
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain; charset=utf-8"
    );
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"recognized.txt\""
    );

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"alpha beta gamma");
}

#[tokio::test]
async fn test_export_of_empty_text_is_empty_file() {
    let response = export_handler(Json(ExportRequest {
        text: String::new(),
    }))
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_concurrent_exports_are_isolated() {
    // Two visitors exporting at once each get their own bytes back.
    let first = export_handler(Json(ExportRequest {
        text: "first visitor".to_string(),
    }));
    let second = export_handler(Json(ExportRequest {
        text: "second visitor".to_string(),
    }));
    let (first, second) = tokio::join!(first, second);

    let first = first.into_body().collect().await.unwrap().to_bytes();
    let second = second.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&first[..], b"first visitor");
    assert_eq!(&second[..], b"second visitor");
}
