use dioxus::document::eval;
use services::Prompt;

/// Ask the user through the webview's native confirm dialog.
///
/// A dialog that cannot be shown counts as "cancel".
pub(crate) async fn ask(prompt: Prompt) -> bool {
    let script = format!("return window.confirm({:?});", prompt.message());
    eval(&script).join::<bool>().await.unwrap_or(false)
}
