use crate::render::TextureKind;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// A decoded image waiting to be uploaded by the frame loop.
pub struct LoadedImage {
    pub path: String,
    pub kind: TextureKind,
    pub image: image::RgbaImage,
}

pub type PendingImages = Rc<RefCell<Vec<LoadedImage>>>;

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {url}: {:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("fetch {url}: not a Response: {:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {url}: HTTP {}", resp.status());
    }
    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow::anyhow!("fetch {url}: {:?}", e))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("fetch {url}: {:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

pub async fn load_image(url: &str) -> anyhow::Result<image::RgbaImage> {
    let bytes = fetch_bytes(url).await?;
    let img = image::load_from_memory(&bytes)?;
    Ok(img.to_rgba8())
}

/// Start loading `path` in the background; on success the decoded image is
/// queued, on failure the element that needs it simply never appears.
pub fn request(path: String, kind: TextureKind, pending: PendingImages) {
    spawn_local(async move {
        match load_image(&path).await {
            Ok(image) => {
                log::info!(
                    "[assets] loaded {} ({}x{})",
                    path,
                    image.width(),
                    image.height()
                );
                pending.borrow_mut().push(LoadedImage { path, kind, image });
            }
            Err(e) => log::warn!("[assets] {} failed: {:?}", path, e),
        }
    });
}
