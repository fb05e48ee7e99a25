// src/handlers/asset_handlers.rs
use std::path::{Component, Path, PathBuf};
use actix_web::http::header;
use actix_web::{get, web, HttpResponse, Responder};
use log::debug;

use crate::AppState;
use crate::dtos::profile_picture::ErrorResponse;

/// GET /{path}
/// Serves files from the public directory: the site bundle, achievement images and the
/// profile picture. `/` maps to `index.html`.
#[get("/{path:.*}")]
pub async fn serve_asset(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let requested = path.into_inner();
    let relative = if requested.is_empty() { "index.html" } else { requested.as_str() };

    let Some(file_path) = resolve(&state.public_dir, relative) else {
        debug!("Refusing asset path {:?}", requested);
        return not_found();
    };

    match tokio::fs::metadata(&file_path).await {
        Ok(meta) if meta.is_file() => {}
        _ => return not_found(),
    }

    match tokio::fs::read(&file_path).await {
        Ok(data) => {
            let mut resp = HttpResponse::Ok();
            resp.content_type(content_type_for(&file_path));
            // overwritten in place on every upload
            if file_path == state.profile_picture.path() {
                resp.insert_header((header::CACHE_CONTROL, "no-cache"));
            }
            resp.body(data)
        }
        Err(_) => not_found(),
    }
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse { error: "Not found".to_string() })
}

/// Joins `relative` onto `root`, refusing anything that could step outside it.
fn resolve(root: &Path, relative: &str) -> Option<PathBuf> {
    let mut resolved = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(resolved)
}

fn content_type_for(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => mime::IMAGE_PNG.to_string(),
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG.to_string(),
        Some("gif") => mime::IMAGE_GIF.to_string(),
        Some("svg") => mime::IMAGE_SVG.to_string(),
        Some("webp") => "image/webp".to_string(),
        Some("ico") => "image/x-icon".to_string(),
        Some("html") | Some("htm") => mime::TEXT_HTML_UTF_8.to_string(),
        Some("css") => mime::TEXT_CSS_UTF_8.to_string(),
        Some("js") => mime::APPLICATION_JAVASCRIPT_UTF_8.to_string(),
        Some("json") => mime::APPLICATION_JSON.to_string(),
        Some("txt") => mime::TEXT_PLAIN_UTF_8.to_string(),
        _ => mime::APPLICATION_OCTET_STREAM.to_string(),
    }
}
