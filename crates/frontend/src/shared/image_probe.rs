use js_sys::Promise;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

/// Loads `url` into a detached `<img>` and reports whether it decoded.
///
/// Nothing is attached to the document, so a broken asset never shows up as a
/// broken-image icon.
pub async fn probe(url: &str) -> bool {
    let image = match HtmlImageElement::new() {
        Ok(image) => image,
        Err(e) => {
            log::error!("Cannot create probe image: {e:?}");
            return false;
        }
    };

    let settled = Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    image.set_src(url);

    let loaded = JsFuture::from(settled).await.is_ok();
    image.set_onload(None);
    image.set_onerror(None);
    loaded
}
