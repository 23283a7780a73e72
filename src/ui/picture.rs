use std::collections::HashSet;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use eframe::egui;

use crate::app::state::DEFAULT_IMAGE_REF;
use crate::net;

const DEFAULT_IMAGE_BYTES: &[u8] = include_bytes!("../../assets/default-floof.png");

type LoadResult = (String, Result<egui::ColorImage, String>);

/// Resolves the current image URI to a texture. Remote pictures are
/// downloaded and decoded off the UI thread; results for URIs that are no
/// longer current are dropped, and a failed load keeps the previous
/// picture on screen.
pub struct PictureLoader {
    texture: Option<(String, egui::TextureHandle)>,
    loading: HashSet<String>,
    sender: Sender<LoadResult>,
    receiver: Receiver<LoadResult>,
}

impl PictureLoader {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            texture: None,
            loading: HashSet::new(),
            sender,
            receiver,
        }
    }

    pub fn is_busy(&self) -> bool {
        !self.loading.is_empty()
    }

    /// Draw the picture for `uri`, kicking off a load if needed. While a
    /// load is in flight the previous picture stays up.
    pub fn show(&mut self, ui: &mut egui::Ui, uri: &str) {
        self.apply_finished(ui.ctx(), uri);

        let up_to_date = matches!(&self.texture, Some((current, _)) if current == uri);
        if !up_to_date && !self.loading.contains(uri) {
            self.start_load(uri);
        }

        match &self.texture {
            Some((_, texture)) => {
                ui.add(egui::Image::new(texture).max_size(egui::vec2(480.0, 480.0)));
            }
            None => {
                ui.spinner();
            }
        }
    }

    fn apply_finished(&mut self, ctx: &egui::Context, current_uri: &str) {
        while let Ok((uri, result)) = self.receiver.try_recv() {
            self.loading.remove(&uri);
            match result {
                Ok(image) if uri == current_uri => {
                    let texture = ctx.load_texture(&uri, image, egui::TextureOptions::LINEAR);
                    self.texture = Some((uri, texture));
                }
                // Superseded before it finished loading.
                Ok(_) => {}
                Err(error) => log::warn!("picture load failed for {uri}: {error}"),
            }
        }
    }

    fn start_load(&mut self, uri: &str) {
        self.loading.insert(uri.to_string());

        let sender = self.sender.clone();
        let uri = uri.to_string();
        thread::spawn(move || {
            let result = load_picture(&uri);
            let _ = sender.send((uri, result));
        });
    }
}

impl Default for PictureLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn load_picture(uri: &str) -> Result<egui::ColorImage, String> {
    let bytes = if uri == DEFAULT_IMAGE_REF {
        DEFAULT_IMAGE_BYTES.to_vec()
    } else {
        net::get_bytes(uri).map_err(|error| format!("failed to download picture: {error}"))?
    };

    decode_picture(&bytes)
}

/// Decode encoded image bytes into an RGBA `ColorImage`.
fn decode_picture(bytes: &[u8]) -> Result<egui::ColorImage, String> {
    let image = image::load_from_memory(bytes)
        .map_err(|error| format!("failed to decode picture: {error}"))?;

    let size = [image.width() as usize, image.height() as usize];
    let rgba = image.to_rgba8();
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        rgba.as_flat_samples().as_slice(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    #[test]
    fn bundled_default_picture_decodes() {
        let image = decode_picture(DEFAULT_IMAGE_BYTES).expect("bundled asset should decode");
        assert_eq!(image.size, [96, 96]);
    }

    #[test]
    fn decode_handles_encoded_jpeg_bytes() {
        let img = ImageBuffer::from_fn(320, 180, |_x, _y| Rgb([120_u8, 40, 200]));
        let mut bytes = std::io::Cursor::new(Vec::new());
        img.write_to(&mut bytes, image::ImageFormat::Jpeg)
            .expect("jpeg should encode");

        let decoded = decode_picture(bytes.get_ref()).expect("jpeg should decode");
        assert_eq!(decoded.size, [320, 180]);
    }

    #[test]
    fn decode_rejects_garbage_bytes() {
        assert!(decode_picture(b"not an image").is_err());
    }

    #[test]
    fn bundled_picture_loads_without_network() {
        let image = load_picture(DEFAULT_IMAGE_REF).expect("bundled uri should load");
        assert_eq!(image.size, [96, 96]);
    }
}
