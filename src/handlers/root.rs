//! Root page handler.

use axum::response::Html;

/// Static pointer page served at `/`.
///
/// Everything else on this server speaks JSON; this is the one HTML
/// response, a short hint at how to get started.
pub async fn index() -> Html<&'static str> {
    Html(
        "<html><body>\
         <p>kvss &ndash; a simple key-value storage service.</p>\
         <p>POST <code>/api/newapikey/</code> with <code>{\"name\", \"email\", \"note\"}</code> \
         to register, then PUT and GET <code>/api/{apikey}/{key}</code>.</p>\
         </body></html>",
    )
}
